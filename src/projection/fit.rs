use geo::{Coord, CoordsIter};

use super::{proj::RawProjector, ScreenProjector};
use crate::features::FeatureCollection;

/// Scale and center a raw projection so the collection fills `width` × `height`,
/// flipping y so that north is up on screen.
pub(crate) fn fit_size(raw: RawProjector, width: f64, height: f64, collection: &FeatureCollection) -> ScreenProjector {
    let mut bounds: Option<(f64, f64, f64, f64)> = None;
    for feature in collection.iter() {
        for coord in feature.shape.coords_iter() {
            let Some(p) = raw(coord) else { continue };
            let (x, y) = (p.x, -p.y);
            bounds = Some(match bounds {
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                None => (x, y, x, y),
            });
        }
    }

    let (k, tx, ty) = match bounds {
        Some((x0, y0, x1, y1)) => {
            let k = (width / (x1 - x0)).min(height / (y1 - y0));
            let k = if k.is_finite() && k > 0.0 { k } else { 1.0 };
            (k, (width - k * (x0 + x1)) / 2.0, (height - k * (y0 + y1)) / 2.0)
        }
        None => (1.0, 0.0, 0.0),
    };

    Box::new(move |coord: Coord<f64>| {
        raw(coord).map(|p| Coord { x: k * p.x + tx, y: -k * p.y + ty })
    })
}
