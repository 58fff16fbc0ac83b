//! Command-line interface definitions and helpers.
//!
//! This module contains the argument parser and the `config` subcommand handlers.

use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{self, default_path as get_config_path, Config, ConfigError};

// ==================== CLI Arguments ====================

/// Convert images to ASCII art for the terminal
#[derive(Parser, Debug)]
#[command(name = "img2ascii")]
#[command(version, about = "Render images as ASCII art", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "EXAMPLES:
    # Print a photo 100 characters wide
    img2ascii photo.jpg

    # Narrower output, saved to a file
    img2ascii -w 60 -o art.txt photo.png

    # Several images, separated by a blank line
    img2ascii a.png b.png c.bmp")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image files to convert
    #[arg(value_name = "IMAGE")]
    pub images: Vec<PathBuf>,

    /// Output width in characters (default: config file, then 100)
    #[arg(short, long, value_parser = parse_width)]
    pub width: Option<u32>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        /// Config file path
        #[arg(long, short)]
        config: Option<PathBuf>,

        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

/// Parse and validate the output width (must be positive).
pub fn parse_width(s: &str) -> Result<u32, String> {
    let width: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid width", s))?;
    if width == 0 {
        return Err("Width must be greater than 0".to_string());
    }
    Ok(width)
}

impl Args {
    /// Log level selected by the `-v` count.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

// ==================== Subcommand Handlers ====================

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Show => {
            let cfg = Config::load(config_path)?;
            println!("Current configuration:");
            println!("  Width: {}", cfg.target_width(None));
            println!();

            let path = config_path.map(Path::to_path_buf).unwrap_or_else(get_config_path);
            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            let path = config_path.map(Path::to_path_buf).unwrap_or_else(get_config_path);
            config::init(&path)?;
            println!("Created config file: {}", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_images_and_width() {
        let args = Args::try_parse_from(["img2ascii", "-w", "40", "a.png", "b.jpg"]).unwrap();
        assert_eq!(args.width, Some(40));
        assert_eq!(args.images, vec![PathBuf::from("a.png"), PathBuf::from("b.jpg")]);
        assert!(args.command.is_none());
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Args::try_parse_from(["img2ascii", "-w", "0", "a.png"]).is_err());
        assert!(Args::try_parse_from(["img2ascii", "-w", "-3", "a.png"]).is_err());
    }

    #[test]
    fn config_subcommand() {
        let args = Args::try_parse_from(["img2ascii", "config", "show"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Config {
                config: None,
                action: ConfigAction::Show
            })
        ));

        let args = Args::try_parse_from(["img2ascii", "config", "-c", "x.toml", "init"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Config {
                config: Some(_),
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn verbosity_levels() {
        let args = Args::try_parse_from(["img2ascii", "-vv", "a.png"]).unwrap();
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
        let args = Args::try_parse_from(["img2ascii", "a.png"]).unwrap();
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }
}
