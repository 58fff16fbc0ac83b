use clap::{error::ErrorKind, CommandFactory, Parser};
use std::fs::File;
use std::io::{self, BufWriter};

use img2ascii::cli::{self, Args, Command};
use img2ascii::config::Config;
use img2ascii::pipeline::{write_arts, Pipeline};

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    if let Some(Command::Config { config, action }) = args.command {
        if let Err(e) = cli::handle_config_action(action, config.as_deref()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    if args.images.is_empty() {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "at least one IMAGE is required",
            )
            .exit();
    }

    // Load config file
    // If --config is specified, require the file to exist
    let cfg = match Config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Width: CLI > config > default
    let pipeline = Pipeline::new(cfg.target_width(args.width));
    log::debug!("Rendering at width {}", pipeline.target_width());

    // Convert everything before touching the output so a failure leaves nothing behind
    let result = pipeline.convert_batch(&args.images).and_then(|arts| match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            write_arts(&arts, &mut BufWriter::new(file))
        }
        None => write_arts(&arts, &mut io::stdout().lock()),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
