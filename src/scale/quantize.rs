use anyhow::{bail, Result};

/// Fill for regions without a value, and the palette of last resort.
pub const NEUTRAL_FILL: &str = "#ccc";

/// Relative widening applied when the domain collapses to a single value.
const DEGENERATE_WIDTH: f64 = 1e-9;

/// Step scale mapping `[min, adjusted_max]` onto a prefix of a palette.
///
/// `adjusted_max = min + (max - min) * intensity`; values beyond it clamp to the
/// last band and values at or below `min` land in the first.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    min: f64,
    max: f64,
    adjusted_max: f64,
    domain: (f64, f64),
    thresholds: Vec<f64>,
    colors: Vec<String>,
}

impl ColorScale {
    /// Build the scale for one render pass. `intensity` must be positive.
    pub fn build(values: &[f64], intensity: f64, palette: &[String]) -> Result<Self> {
        if !intensity.is_finite() || intensity <= 0.0 {
            bail!("[scale] intensity must be a positive number, got {intensity}");
        }

        let (min, max) = values.iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            })
            .unwrap_or((0.0, 0.0));

        let adjusted_max = min + (max - min) * intensity;
        let upper = if adjusted_max > min {
            adjusted_max
        } else {
            min + min.abs().max(1.0) * DEGENERATE_WIDTH
        };

        let colors: Vec<String> = if palette.is_empty() {
            vec![NEUTRAL_FILL.to_string()]
        } else {
            let bands = ((intensity * palette.len() as f64).round() as usize)
                .clamp(2, palette.len().max(2))
                .min(palette.len());
            palette[..bands].to_vec()
        };

        // n - 1 interior thresholds splitting the domain into n equal steps.
        let n = colors.len();
        let thresholds = (1..n)
            .map(|i| min + (upper - min) * i as f64 / n as f64)
            .collect();

        Ok(Self { min, max, adjusted_max, domain: (min, upper), thresholds, colors })
    }

    #[inline] pub fn min(&self) -> f64 { self.min }

    #[inline] pub fn max(&self) -> f64 { self.max }

    /// Upper end after applying intensity, before any degenerate widening.
    #[inline] pub fn adjusted_max(&self) -> f64 { self.adjusted_max }

    /// Effective `[lower, upper]` domain of the scale.
    #[inline] pub fn domain(&self) -> (f64, f64) { self.domain }

    #[inline] pub fn band_count(&self) -> usize { self.colors.len() }

    #[inline] pub fn colors(&self) -> &[String] { &self.colors }

    #[inline] pub fn thresholds(&self) -> &[f64] { &self.thresholds }

    /// Band of `value`: the number of thresholds at or below it.
    pub fn band_index(&self, value: f64) -> usize {
        if value.is_nan() { return 0 }
        self.thresholds.partition_point(|&t| t <= value)
    }

    pub fn color(&self, value: f64) -> &str {
        &self.colors[self.band_index(value)]
    }
}
