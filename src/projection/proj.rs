use anyhow::{Context, Result};
use geo::Coord;
use proj4rs::{proj::Proj as Proj4, transform::transform};

use crate::features::FeatureCollection;

/// Unfitted planar projection, y up.
pub(crate) type RawProjector = Box<dyn Fn(Coord<f64>) -> Option<Coord<f64>>>;

const GEOGRAPHIC: &str = "+proj=longlat +datum=WGS84 +no_defs +type=crs";
const MERCATOR: &str = "+proj=merc +datum=WGS84 +units=m +no_defs +type=crs";

/// Web Mercator is unbounded at the poles; clip like d3 does.
const MERCATOR_MAX_LAT: f64 = 85.0511287798;

fn build(proj_string: &str) -> Result<Proj4> {
    Proj4::from_proj_string(proj_string)
        .with_context(|| format!("[projection] failed to build PROJ.4: {proj_string}"))
}

/// Degrees in, projected meters out; failures become `None`.
fn proj4_projector(target: &str, clamp_lat: Option<f64>) -> Result<RawProjector> {
    let from = build(GEOGRAPHIC)?;
    let to = build(target)?;

    Ok(Box::new(move |coord: Coord<f64>| {
        let lat = match clamp_lat {
            Some(limit) => coord.y.clamp(-limit, limit),
            None => coord.y,
        };
        let mut point = (coord.x.to_radians(), lat.to_radians(), 0.0);
        transform(&from, &to, &mut point).ok()?;
        (point.0.is_finite() && point.1.is_finite()).then_some(Coord { x: point.0, y: point.1 })
    }))
}

pub(crate) fn mercator() -> Result<RawProjector> {
    proj4_projector(MERCATOR, Some(MERCATOR_MAX_LAT))
}

/// Conic equal-area with its own rotation and center, placed into a clip box of
/// the composite. Unit scale, y down.
struct Inset {
    n: f64,
    c: f64,
    r0: f64,
    rotate: f64,
    origin: (f64, f64),
    scale: f64,
    offset: (f64, f64),
    clip: ([f64; 2], [f64; 2]),
}

impl Inset {
    fn new(parallels: (f64, f64), rotate: f64, center: (f64, f64), scale: f64, offset: (f64, f64), clip: ([f64; 2], [f64; 2])) -> Self {
        let sin0 = parallels.0.to_radians().sin();
        let n = (sin0 + parallels.1.to_radians().sin()) / 2.0;
        let c = 1.0 + sin0 * (2.0 * n - sin0);
        let mut inset = Self { n, c, r0: c.sqrt() / n, rotate, origin: (0.0, 0.0), scale, offset, clip };
        // the center is given in the rotated frame
        inset.origin = inset.conic(center.0 - rotate, center.1);
        inset
    }

    fn conic(&self, lon: f64, lat: f64) -> (f64, f64) {
        let lambda = ((lon + self.rotate + 180.0).rem_euclid(360.0) - 180.0).to_radians();
        let r = (self.c - 2.0 * self.n * lat.to_radians().sin()).max(0.0).sqrt() / self.n;
        (r * (lambda * self.n).sin(), self.r0 - r * (lambda * self.n).cos())
    }

    fn project(&self, coord: Coord<f64>) -> Option<(f64, f64)> {
        let (x, y) = self.conic(coord.x, coord.y);
        let p = (
            (x - self.origin.0) * self.scale + self.offset.0,
            (self.origin.1 - y) * self.scale + self.offset.1,
        );
        let ([x0, y0], [x1, y1]) = self.clip;
        (p.0 >= x0 && p.0 < x1 && p.1 >= y0 && p.1 < y1).then_some(p)
    }
}

/// Albers USA: the lower 48 with Alaska and Hawaii drawn as insets to the
/// lower left, matching d3's `geoAlbersUsa`. Points outside all three boxes
/// are dropped.
pub(crate) fn albers() -> Result<RawProjector> {
    let insets = [
        Inset::new((29.5, 45.5), 96.0, (-0.6, 38.7), 1.0, (0.0, 0.0), ([-0.455, -0.238], [0.455, 0.238])),
        Inset::new((55.0, 65.0), 154.0, (-2.0, 58.5), 0.35, (-0.307, 0.201), ([-0.425, 0.120], [-0.214, 0.234])),
        Inset::new((8.0, 18.0), 157.0, (-3.0, 19.9), 1.0, (-0.205, 0.212), ([-0.214, 0.166], [-0.115, 0.234])),
    ];

    Ok(Box::new(move |coord: Coord<f64>| {
        let (x, y) = insets.iter().find_map(|inset| inset.project(coord))?;
        Some(Coord { x, y: -y })
    }))
}

/// Orthographic view centered on the middle of the collection's bounds.
pub(crate) fn orthographic(collection: &FeatureCollection) -> RawProjector {
    let center = collection.bounds()
        .map(|b| b.center())
        .unwrap_or(Coord { x: 0.0, y: 0.0 });
    let (lambda0, phi0) = (center.x.to_radians(), center.y.to_radians());
    let (sin_phi0, cos_phi0) = phi0.sin_cos();

    Box::new(move |coord: Coord<f64>| {
        let (lambda, phi) = (coord.x.to_radians(), coord.y.to_radians());
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_dl, cos_dl) = (lambda - lambda0).sin_cos();

        // cos of the angular distance from the center; negative means the far side
        let cos_c = sin_phi0 * sin_phi + cos_phi0 * cos_phi * cos_dl;
        if cos_c < 0.0 { return None }

        Some(Coord {
            x: cos_phi * sin_dl,
            y: cos_phi0 * sin_phi - sin_phi0 * cos_phi * cos_dl,
        })
    })
}
