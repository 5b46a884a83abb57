//! Hex color parsing for palette validation.

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Error, Result};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse `#rgb` or `#rrggbb` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().strip_prefix('#')
            .ok_or_else(|| anyhow!("[theme] color {s:?} must start with '#'"))?;

        if !hex.is_ascii() { bail!("[theme] color {s:?} is not valid hex") }

        let channel = |digits: &str| u8::from_str_radix(digits, 16)
            .map_err(|_| anyhow!("[theme] color {s:?} is not valid hex"));

        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
                Ok(Self { r: expand(0)?, g: expand(1)?, b: expand(2)? })
            }
            6 => Ok(Self { r: channel(&hex[0..2])?, g: channel(&hex[2..4])?, b: channel(&hex[4..6])? }),
            _ => bail!("[theme] color {s:?} must have 3 or 6 hex digits"),
        }
    }
}
