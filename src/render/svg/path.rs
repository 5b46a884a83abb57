use std::fmt::Write;

use geo::{LineString, MultiPolygon};

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
pub(crate) fn multipolygon_to_path(shape: &MultiPolygon<f64>) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        ring_to_path(polygon.exterior(), &mut out);
        for interior in polygon.interiors() {
            ring_to_path(interior, &mut out);
        }
    }

    out
}

/// Append a ring as an SVG subpath: "M x,y L x,y ... Z"
fn ring_to_path(ring: &LineString<f64>, out: &mut String) {
    let mut coords = ring.0.iter();
    if let Some(first) = coords.next() {
        if !out.is_empty() { out.push(' ') }
        let _ = write!(out, "M{:.3},{:.3}", first.x, first.y);
        for c in coords {
            let _ = write!(out, " L{:.3},{:.3}", c.x, c.y);
        }
        out.push('Z');
    }
}

#[cfg(test)]
mod tests {
    use geo::polygon;

    use super::*;

    #[test]
    fn exterior_and_holes_become_subpaths() {
        let shape = MultiPolygon(vec![polygon!(
            exterior: [(x: 0., y: 0.), (x: 10., y: 0.), (x: 10., y: 10.), (x: 0., y: 0.)],
            interiors: [[(x: 2., y: 1.), (x: 3., y: 1.), (x: 3., y: 2.), (x: 2., y: 1.)]],
        )]);

        let path = multipolygon_to_path(&shape);
        assert_eq!(path.matches('M').count(), 2);
        assert_eq!(path.matches('Z').count(), 2);
        assert!(path.starts_with("M0.000,0.000 L10.000,0.000"));
    }

    #[test]
    fn empty_shape_has_empty_path() {
        assert_eq!(multipolygon_to_path(&MultiPolygon(vec![])), "");
    }
}
