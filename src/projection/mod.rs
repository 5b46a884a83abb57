//! Geographic → viewport projections, fitted to the features being drawn.

mod fit;
mod proj;

use std::{fmt, str::FromStr, sync::Arc};

use anyhow::{bail, Error, Result};
use geo::Coord;

use crate::features::FeatureCollection;

pub(crate) use fit::fit_size;

/// Maps lon/lat degrees to viewport pixels (y down); `None` when the point is not visible.
pub type ScreenProjector = Box<dyn Fn(Coord<f64>) -> Option<Coord<f64>>>;

/// Caller-built projector for a given viewport width, height and collection.
pub type CustomProjection =
    Arc<dyn Fn(f64, f64, &FeatureCollection) -> Result<ScreenProjector> + Send + Sync>;

/// Named preset or a custom projector function.
#[derive(Clone, Default)]
pub enum Projection {
    #[default]
    Mercator,
    /// Composite conic equal-area for the United States, with Alaska and
    /// Hawaii drawn as insets below the lower 48.
    Albers,
    Orthographic,
    Custom(CustomProjection),
}

impl Projection {
    /// Build a projector for a `width` × `height` viewport. Presets are scaled
    /// and centered so that the whole collection fits; custom projectors are
    /// used as returned.
    pub fn fit(&self, width: f64, height: f64, collection: &FeatureCollection) -> Result<ScreenProjector> {
        let raw = match self {
            Self::Mercator => proj::mercator()?,
            Self::Albers => proj::albers()?,
            Self::Orthographic => proj::orthographic(collection),
            Self::Custom(build) => return build(width, height, collection),
        };
        Ok(fit_size(raw, width, height, collection))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Mercator => "mercator",
            Self::Albers => "albers",
            Self::Orthographic => "orthographic",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Projection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mercator" => Ok(Self::Mercator),
            "albers" => Ok(Self::Albers),
            "orthographic" => Ok(Self::Orthographic),
            other => bail!("[projection] unknown projection {other:?} (expected mercator, albers or orthographic)"),
        }
    }
}
