use super::ColorScale;

/// One discrete band of a legend, `[lower, upper)` in data units.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendBand {
    pub lower: f64,
    pub upper: f64,
    pub color: String,
}

/// Horizontal gradient legend derived from the same scale used to paint regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    id: String,
    scale: ColorScale,
}

impl Legend {
    pub const WIDTH: f64 = 300.0;
    pub const HEIGHT: f64 = 40.0;
    pub const SWATCH_X: f64 = 20.0;
    pub const SWATCH_HEIGHT: f64 = 10.0;

    pub fn from_scale(scale: &ColorScale, id: impl Into<String>) -> Self {
        Self { id: id.into(), scale: scale.clone() }
    }

    #[inline] pub fn id(&self) -> &str { &self.id }

    #[inline] pub fn gradient_id(&self) -> String { format!("{}-gradient", self.id) }

    #[inline] pub fn swatch_width(&self) -> f64 { Self::WIDTH - 2.0 * Self::SWATCH_X }

    /// Gradient stops as `(offset percent, color)`, evenly spaced over the bands.
    pub fn stops(&self) -> Vec<(f64, &str)> {
        let colors = self.scale.colors();
        let last = colors.len().saturating_sub(1).max(1) as f64;
        colors.iter()
            .enumerate()
            .map(|(i, color)| (i as f64 / last * 100.0, color.as_str()))
            .collect()
    }

    pub fn bands(&self) -> Vec<LegendBand> {
        let (lower, upper) = self.scale.domain();
        let thresholds = self.scale.thresholds();
        self.scale.colors().iter()
            .enumerate()
            .map(|(i, color)| LegendBand {
                lower: if i == 0 { lower } else { thresholds[i - 1] },
                upper: thresholds.get(i).copied().unwrap_or(upper),
                color: color.clone(),
            })
            .collect()
    }

    /// Color the legend shows for `value`; always the fill the map paints.
    pub fn color_for(&self, value: f64) -> &str {
        self.scale.color(value)
    }

    /// Tick values printed under the swatch: the low and high end of the domain.
    pub fn ticks(&self) -> [f64; 2] {
        [self.scale.min(), self.scale.adjusted_max()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale(values: &[f64], intensity: f64) -> ColorScale {
        let palette: Vec<String> = ["#a", "#b", "#c", "#d"].iter().map(|c| c.to_string()).collect();
        ColorScale::build(values, intensity, &palette).unwrap()
    }

    #[test]
    fn stops_span_zero_to_hundred() {
        let legend = Legend::from_scale(&scale(&[0.0, 8.0], 1.0), "l");
        let offsets: Vec<f64> = legend.stops().iter().map(|(o, _)| *o).collect();
        assert_eq!(offsets.len(), 4);
        assert_eq!(offsets[0], 0.0);
        assert_eq!(offsets[3], 100.0);
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn bands_tile_the_domain() {
        let legend = Legend::from_scale(&scale(&[0.0, 8.0], 1.0), "l");
        let bands = legend.bands();
        assert_eq!(bands.len(), 4);
        assert_eq!(bands[0].lower, 0.0);
        assert_eq!(bands[3].upper, 8.0);
        for pair in bands.windows(2) {
            assert_eq!(pair[0].upper, pair[1].lower);
        }
        for band in &bands {
            assert_eq!(legend.color_for(band.lower), band.color);
        }
    }

    #[test]
    fn agrees_with_scale_everywhere() {
        let s = scale(&[3.0, 9.0, 27.0], 0.75);
        let legend = Legend::from_scale(&s, "l");
        for i in 0..=60 {
            let v = i as f64 * 0.5;
            assert_eq!(legend.color_for(v), s.color(v));
        }
    }

    #[test]
    fn gradient_id_is_scoped_to_legend() {
        let legend = Legend::from_scale(&scale(&[1.0], 1.0), "legend-india-map");
        assert_eq!(legend.gradient_id(), "legend-india-map-gradient");
    }
}
