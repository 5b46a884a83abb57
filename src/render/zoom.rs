//! Pan/zoom state applied to the whole feature group.

use geo::{Coord, Rect};

use crate::region::format_number;

/// Upper bound on the scale chosen when zooming to a searched region.
pub const SEARCH_MAX_SCALE: f64 = 8.0;

/// Fraction of the viewport a searched region may occupy.
const SEARCH_FILL: f64 = 0.9;

/// Duration of the animated move to a searched region.
pub const SEARCH_DURATION_MS: f64 = 750.0;

/// `screen = k * map + (x, y)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self { Self::IDENTITY }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self { k: 1.0, x: 0.0, y: 0.0 };

    /// Map space → viewport.
    #[inline]
    pub fn apply(&self, p: Coord<f64>) -> Coord<f64> {
        Coord { x: p.x * self.k + self.x, y: p.y * self.k + self.y }
    }

    /// Viewport → map space.
    #[inline]
    pub fn invert(&self, p: Coord<f64>) -> Coord<f64> {
        Coord { x: (p.x - self.x) / self.k, y: (p.y - self.y) / self.k }
    }

    /// Transform that centers `bounds` in a `width` × `height` viewport.
    pub fn focus(bounds: Rect<f64>, width: f64, height: f64) -> Self {
        let (dx, dy) = (bounds.width(), bounds.height());
        let center = bounds.center();
        let k = (SEARCH_FILL / (dx / width).max(dy / height)).min(SEARCH_MAX_SCALE);
        Self { k, x: width / 2.0 - k * center.x, y: height / 2.0 - k * center.y }
    }

    /// SVG `transform` attribute value.
    pub fn to_svg(&self) -> String {
        format!("translate({},{}) scale({})", format_number(self.x), format_number(self.y), format_number(self.k))
    }
}

/// Pointer-driven zoom limited to a scale extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBehavior {
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for ZoomBehavior {
    fn default() -> Self { Self { min_scale: 1.0, max_scale: 10.0 } }
}

impl ZoomBehavior {
    /// Wheel gesture: `delta_y` in pixels, negative zooms in. Anchored at the pointer.
    pub fn wheel(&self, t: ZoomTransform, anchor: Coord<f64>, delta_y: f64) -> ZoomTransform {
        self.scale_to(t, t.k * 2f64.powf(-delta_y * 0.002), anchor)
    }

    /// Rescale keeping the map point under `anchor` fixed.
    pub fn scale_to(&self, t: ZoomTransform, k: f64, anchor: Coord<f64>) -> ZoomTransform {
        let k = k.clamp(self.min_scale, self.max_scale);
        let p = t.invert(anchor);
        ZoomTransform { k, x: anchor.x - p.x * k, y: anchor.y - p.y * k }
    }

    pub fn translate_by(&self, t: ZoomTransform, dx: f64, dy: f64) -> ZoomTransform {
        ZoomTransform { x: t.x + dx, y: t.y + dy, ..t }
    }
}

/// Animated move between two transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: ZoomTransform,
    pub to: ZoomTransform,
    pub duration_ms: f64,
    elapsed_ms: f64,
}

impl Transition {
    pub fn new(from: ZoomTransform, to: ZoomTransform, duration_ms: f64) -> Self {
        Self { from, to, duration_ms, elapsed_ms: 0.0 }
    }

    /// Transform at normalized time `t` in `[0, 1]`, cubic in-out eased.
    pub fn at(&self, t: f64) -> ZoomTransform {
        let e = ease_cubic_in_out(t.clamp(0.0, 1.0));
        let lerp = |a: f64, b: f64| a + (b - a) * e;
        ZoomTransform {
            k: lerp(self.from.k, self.to.k),
            x: lerp(self.from.x, self.to.x),
            y: lerp(self.from.y, self.to.y),
        }
    }

    /// Advance the clock and return the current transform.
    pub fn advance(&mut self, dt_ms: f64) -> ZoomTransform {
        self.elapsed_ms = (self.elapsed_ms + dt_ms.max(0.0)).min(self.duration_ms);
        self.current()
    }

    pub fn current(&self) -> ZoomTransform {
        if self.duration_ms <= 0.0 { return self.to }
        self.at(self.elapsed_ms / self.duration_ms)
    }

    #[inline] pub fn is_done(&self) -> bool { self.elapsed_ms >= self.duration_ms }
}

fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}
