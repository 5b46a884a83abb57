//! Pointer interaction: hit testing, tooltip, hover/click callbacks and zoom gestures.

use geo::{Coord, Intersects, Point};

use super::{hit::candidates, BaseMap};
use crate::region::RegionProfile;

/// Offset of the tooltip from the pointer, in pixels.
const TOOLTIP_OFFSET: f64 = 10.0;

/// Host callbacks. Both receive the region's display name, resolved value
/// (0 for regions without data) and optional meta text.
pub trait RegionListener {
    fn on_region_hover(&mut self, _name: &str, _value: f64, _meta: Option<&str>) {}

    fn on_region_click(&mut self, _name: &str, _value: f64, _meta: Option<&str>) {}
}

/// Ignore all events.
impl RegionListener for () {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionEventKind {
    Hover,
    Click,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionEvent {
    pub kind: RegionEventKind,
    pub name: String,
    pub value: f64,
    pub meta: Option<String>,
}

/// Record every event in order.
impl RegionListener for Vec<RegionEvent> {
    fn on_region_hover(&mut self, name: &str, value: f64, meta: Option<&str>) {
        self.push(RegionEvent { kind: RegionEventKind::Hover, name: name.into(), value, meta: meta.map(Into::into) });
    }

    fn on_region_click(&mut self, name: &str, value: f64, meta: Option<&str>) {
        self.push(RegionEvent { kind: RegionEventKind::Click, name: name.into(), value, meta: meta.map(Into::into) });
    }
}

/// Floating tooltip next to the pointer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    pub html: String,
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

impl<P: RegionProfile> BaseMap<P> {
    /// Topmost region under a viewport point, accounting for the zoom transform.
    pub fn region_at(&self, x: f64, y: f64) -> Option<usize> {
        let p = self.transform.invert(Coord { x, y });
        let point = Point::from(p);
        candidates(&self.rtree, p.x, p.y)
            .filter(|&i| self.regions[i].shape.intersects(&point))
            .max()
    }

    /// Pointer moved to `(x, y)`. Entering a region refreshes the tooltip and
    /// fires `on_region_hover`; leaving every region hides the tooltip.
    pub fn pointer_move(&mut self, x: f64, y: f64, listener: &mut dyn RegionListener) -> Option<&Tooltip> {
        let hit = self.region_at(x, y);

        if hit != self.hovered {
            match hit {
                Some(i) => {
                    let region = &self.regions[i];
                    let reading = region.reading();
                    self.tooltip.html = self.profile.format_tooltip(region.display_name(), reading.value, reading.meta.as_deref());
                    self.tooltip.visible = true;
                    listener.on_region_hover(region.display_name(), reading.value, reading.meta.as_deref());
                }
                None => self.tooltip.visible = false,
            }
            self.hovered = hit;
        }

        if hit.is_some() {
            self.tooltip.x = x + TOOLTIP_OFFSET;
            self.tooltip.y = y + TOOLTIP_OFFSET;
        }

        self.tooltip()
    }

    /// Pointer left the map.
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
        self.tooltip.visible = false;
    }

    /// Click at `(x, y)`; returns the clicked region's index.
    pub fn click(&mut self, x: f64, y: f64, listener: &mut dyn RegionListener) -> Option<usize> {
        let i = self.region_at(x, y)?;
        let region = &self.regions[i];
        let reading = region.reading();
        listener.on_region_click(region.display_name(), reading.value, reading.meta.as_deref());
        Some(i)
    }

    /// Visible tooltip, if any.
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.visible.then_some(&self.tooltip)
    }

    pub fn is_zoomable(&self) -> bool { self.zoom.is_some() }

    /// Wheel gesture at `(x, y)`. Returns `false` when zooming is disabled.
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) -> bool {
        let Some(zoom) = self.zoom else { return false };
        self.transition = None;
        self.transform = zoom.wheel(self.transform, Coord { x, y }, delta_y);
        true
    }

    /// Drag gesture by `(dx, dy)` pixels. Returns `false` when zooming is disabled.
    pub fn drag(&mut self, dx: f64, dy: f64) -> bool {
        let Some(zoom) = self.zoom else { return false };
        self.transition = None;
        self.transform = zoom.translate_by(self.transform, dx, dy);
        true
    }
}
