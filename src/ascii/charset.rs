//! Brightness ramp used for ASCII rendering.

/// Number of characters in a ramp.
pub const RAMP_LEVELS: usize = 10;

/// Width of each brightness bucket. `255 / 26 = 9`, so every `u8` lands
/// inside the ramp without clamping.
pub const BUCKET_WIDTH: u8 = 26;

/// Standard density ramp, darkest (`@`) to lightest (space).
pub const STANDARD_CHARSET: [char; RAMP_LEVELS] = ['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// An ordered set of characters, index 0 darkest, last index lightest.
///
/// Ramps are immutable values handed to the mapper, so any number of
/// pipelines can share one without coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ramp {
    chars: [char; RAMP_LEVELS],
}

impl Ramp {
    /// The standard `"@%#*+=-:. "` ramp.
    pub const STANDARD: Ramp = Ramp {
        chars: STANDARD_CHARSET,
    };

    /// The characters, darkest first.
    pub fn chars(&self) -> &[char; RAMP_LEVELS] {
        &self.chars
    }

    /// Bucket index for a brightness value, always in `0..RAMP_LEVELS`.
    #[inline]
    pub fn index_for(brightness: u8) -> usize {
        ((brightness / BUCKET_WIDTH) as usize).min(RAMP_LEVELS - 1)
    }

    /// Character for a brightness value.
    #[inline]
    pub fn char_for(&self, brightness: u8) -> char {
        self.chars[Self::index_for(brightness)]
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::STANDARD
    }
}
