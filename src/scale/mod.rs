//! Quantized color scales and the legends drawn from them.

mod legend;
mod quantize;

pub use legend::{Legend, LegendBand};
pub use quantize::{ColorScale, NEUTRAL_FILL};
