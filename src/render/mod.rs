//! Base choropleth renderer: projection, paint, legend, labels and interaction.

mod hit;
mod interact;
mod map;
mod options;
mod svg;
mod zoom;

pub use interact::{RegionEvent, RegionEventKind, RegionListener, Tooltip};
pub use map::{BaseMap, RenderedRegion};
pub use options::{LabelPositionFn, MapOptions, RegionStyle, RegionStyleFn};
pub use zoom::{Transition, ZoomBehavior, ZoomTransform, SEARCH_DURATION_MS, SEARCH_MAX_SCALE};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use geo::{polygon, Coord, MultiPolygon};
    use serde_json::Map;

    use super::*;
    use crate::{
        features::{Feature, FeatureCollection},
        projection::{Projection, ScreenProjector},
        region::{PlainNames, RegionProfile, RegionValue, RegionValues},
        scale::NEUTRAL_FILL,
    };

    /// Degrees are used as pixels unchanged.
    fn identity() -> Projection {
        Projection::Custom(Arc::new(|_: f64, _: f64, _: &FeatureCollection| {
            let project: ScreenProjector = Box::new(|c: Coord<f64>| Some(c));
            Ok(project)
        }))
    }

    fn square(name: Option<&str>, x: f64, y: f64, size: f64) -> Feature {
        Feature {
            name: name.map(str::to_owned),
            properties: Map::new(),
            shape: MultiPolygon(vec![polygon![
                (x: x, y: y),
                (x: x + size, y: y),
                (x: x + size, y: y + size),
                (x: x, y: y + size),
                (x: x, y: y),
            ]]),
        }
    }

    fn strip() -> FeatureCollection {
        FeatureCollection::new(vec![
            square(Some("Alpha"), 0.0, 0.0, 100.0),
            square(Some("Beta"), 100.0, 0.0, 100.0),
            square(Some("Gamma"), 200.0, 0.0, 100.0),
        ])
    }

    fn values(entries: &[(&str, f64)]) -> RegionValues {
        entries.iter().map(|(k, v)| (k.to_string(), RegionValue::from(*v))).collect()
    }

    fn options() -> MapOptions {
        MapOptions {
            palette: ["#e0f2fe", "#7dd3fc", "#0284c7", "#0c4a6e"].iter().map(|c| c.to_string()).collect(),
            projection: identity(),
            ..MapOptions::default()
        }
    }

    struct Renamed;

    impl RegionProfile for Renamed {
        fn alias_table(&self) -> &[(&'static str, &'static str)] { &[("old beta", "beta")] }
    }

    #[test]
    fn fills_match_the_legend() {
        let data = values(&[("alpha", 10.0), ("beta", 30.0)]);
        let map = BaseMap::render(&strip(), &data, PlainNames, &options()).unwrap();

        for region in map.regions().iter().filter(|r| r.value.is_some()) {
            assert_eq!(region.fill, map.legend().color_for(region.value.unwrap()));
        }
        assert_eq!(map.regions()[0].fill, "#e0f2fe");
        assert_eq!(map.regions()[1].fill, "#0c4a6e");
    }

    #[test]
    fn missing_region_is_neutral_and_hovers_as_zero() {
        let data = values(&[("alpha", 10.0), ("beta", 30.0)]);
        let mut map = BaseMap::render(&strip(), &data, PlainNames, &options()).unwrap();
        assert_eq!(map.regions()[2].fill, NEUTRAL_FILL);
        assert_eq!(map.regions()[2].value, None);

        let mut events: Vec<RegionEvent> = Vec::new();
        map.pointer_move(250.0, 50.0, &mut events);
        assert_eq!(events, vec![RegionEvent {
            kind: RegionEventKind::Hover,
            name: "Gamma".into(),
            value: 0.0,
            meta: None,
        }]);
    }

    #[test]
    fn data_keys_resolve_through_aliases() {
        let data = values(&[(" ALPHA ", 10.0), ("Old Beta", 30.0)]);
        let map = BaseMap::render(&strip(), &data, Renamed, &options()).unwrap();
        assert_eq!(map.regions()[0].value, Some(10.0));
        assert_eq!(map.regions()[1].value, Some(30.0));
        assert_eq!(map.region("old beta").map(|r| r.display_name()), Some("Beta"));
    }

    #[test]
    fn equal_values_collapse_to_the_first_band() {
        let data = values(&[("alpha", 5.0), ("beta", 5.0), ("gamma", 5.0)]);
        let map = BaseMap::render(&strip(), &data, PlainNames, &options()).unwrap();
        assert!(map.regions().iter().all(|r| r.fill == "#e0f2fe"));
    }

    #[test]
    fn unnamed_feature_renders_neutral() {
        let collection = FeatureCollection::new(vec![square(None, 0.0, 0.0, 10.0)]);
        let data = values(&[("", 3.0)]);
        let map = BaseMap::render(&collection, &data, PlainNames, &options()).unwrap();
        assert_eq!(map.regions()[0].fill, NEUTRAL_FILL);
        assert!(map.to_svg().unwrap().contains(r#"data-name="""#));
    }

    #[test]
    fn empty_collection_renders_nothing() {
        let map = BaseMap::render(&FeatureCollection::default(), &RegionValues::new(), PlainNames, &MapOptions::default()).unwrap();
        assert!(map.regions().is_empty());
        assert_eq!(map.region_at(10.0, 10.0), None);
        assert!(map.to_svg().unwrap().contains(r#"class="map-group""#));
    }

    #[test]
    fn focused_region_gets_black_stroke() {
        let opts = MapOptions { focused_region: Some("beta".into()), ..options() };
        let map = BaseMap::render(&strip(), &RegionValues::new(), PlainNames, &opts).unwrap();
        let strokes: Vec<&str> = map.regions().iter().map(|r| r.stroke.as_str()).collect();
        assert_eq!(strokes, ["#fff", "#000", "#fff"]);
    }

    #[test]
    fn style_override_wins_over_scale() {
        let opts = MapOptions {
            region_style: Some(Arc::new(|feature: &Feature| RegionStyle {
                fill: (feature.name.as_deref() == Some("Alpha")).then(|| "#123456".to_string()),
                stroke_width: Some(2.0),
                ..RegionStyle::default()
            })),
            ..options()
        };
        let map = BaseMap::render(&strip(), &values(&[("alpha", 1.0), ("beta", 2.0)]), PlainNames, &opts).unwrap();
        assert_eq!(map.regions()[0].fill, "#123456");
        assert_eq!(map.regions()[0].stroke_width, 2.0);
    }

    #[test]
    fn tooltip_follows_pointer_and_hides_outside() {
        let data = values(&[("alpha", 10.0)]);
        let mut map = BaseMap::render(&strip(), &data, PlainNames, &options()).unwrap();

        let tooltip = map.pointer_move(50.0, 40.0, &mut ()).cloned().unwrap();
        assert!(tooltip.html.starts_with("<strong>Alpha</strong>"));
        assert_eq!((tooltip.x, tooltip.y), (60.0, 50.0));

        assert!(map.pointer_move(500.0, 400.0, &mut ()).is_none());
        map.pointer_move(50.0, 40.0, &mut ());
        map.pointer_leave();
        assert!(map.tooltip().is_none());
    }

    #[test]
    fn click_reports_region() {
        let data = values(&[("beta", 7.0)]);
        let mut map = BaseMap::render(&strip(), &data, PlainNames, &options()).unwrap();
        let mut events: Vec<RegionEvent> = Vec::new();
        assert_eq!(map.click(150.0, 50.0, &mut events), Some(1));
        assert_eq!(events[0].kind, RegionEventKind::Click);
        assert_eq!(events[0].value, 7.0);
        assert_eq!(map.click(-5.0, -5.0, &mut events), None);
    }

    #[test]
    fn topmost_region_wins_on_shared_edges() {
        let map = BaseMap::render(&strip(), &RegionValues::new(), PlainNames, &options()).unwrap();
        assert_eq!(map.region_at(100.0, 50.0), Some(1));
    }

    #[test]
    fn search_centers_the_target() {
        let mut map = BaseMap::render(&strip(), &RegionValues::new(), PlainNames, &options()).unwrap();
        let target = map.search("Beta").unwrap();
        assert!((target.k - 4.5).abs() < 1e-9);

        let halfway = map.tick(SEARCH_DURATION_MS / 2.0);
        assert!((halfway.k - 2.75).abs() < 1e-9);

        let done = map.finish_transition();
        let center = done.apply(Coord { x: 150.0, y: 50.0 });
        assert!((center.x - 400.0).abs() < 1e-9);
        assert!((center.y - 250.0).abs() < 1e-9);
        assert!(map.transition().is_none());

        assert!(map.search("Atlantis").is_none());
    }

    #[test]
    fn search_option_starts_a_transition() {
        let opts = MapOptions { search_region: Some("gamma".into()), ..options() };
        let map = BaseMap::render(&strip(), &RegionValues::new(), PlainNames, &opts).unwrap();
        assert!(map.transition().is_some());
        assert_eq!(map.transform(), ZoomTransform::IDENTITY);
    }

    #[test]
    fn wheel_requires_zoom() {
        let mut map = BaseMap::render(&strip(), &RegionValues::new(), PlainNames, &options()).unwrap();
        assert!(!map.wheel(50.0, 50.0, -500.0));
        assert!(!map.drag(10.0, 0.0));
        assert_eq!(map.transform(), ZoomTransform::IDENTITY);
    }

    #[test]
    fn wheel_zooms_around_pointer() {
        let opts = MapOptions { zoomable: true, ..options() };
        let mut map = BaseMap::render(&strip(), &RegionValues::new(), PlainNames, &opts).unwrap();
        assert!(map.wheel(50.0, 50.0, -500.0));
        assert_eq!(map.transform().k, 2.0);
        assert_eq!(map.transform().apply(Coord { x: 50.0, y: 50.0 }), Coord { x: 50.0, y: 50.0 });
        assert_eq!(map.region_at(50.0, 50.0), Some(0));

        assert!(map.drag(-150.0, 0.0));
        assert_eq!(map.region_at(50.0, 50.0), Some(1));
    }

    #[test]
    fn svg_carries_labels_markers_and_legend() {
        let opts = MapOptions { show_labels: true, dev_mode: true, ..options() };
        let data = values(&[("alpha", 1.0), ("beta", 4.0)]);
        let map = BaseMap::render(&strip(), &data, PlainNames, &opts).unwrap();
        let svg = map.to_svg().unwrap();

        assert_eq!(svg.matches(r#"class="region""#).count(), 3);
        assert_eq!(svg.matches(r#"class="centroid""#).count(), 3);
        assert!(svg.contains(r#"x="50.000" y="50.000""#));
        assert!(svg.contains(r#"data-value="4""#));
        assert!(svg.contains(r#"aria-label="Choropleth Map""#));
        assert!(svg.contains(r#"id="choropleth-legend-gradient""#));
        assert!(svg.contains(r#"transform="translate(500,460)""#));
        assert!(svg.contains(r##"text-anchor="middle" fill="#111">Alpha</text>"##));
        assert!(svg.contains(r##"text-anchor="start" fill="#111">"##));
        assert!(svg.contains(r##"text-anchor="end" fill="#111">"##));

        let legend = map.legend_svg().unwrap();
        assert!(legend.starts_with("<svg"));
        assert!(legend.contains("url(#choropleth-legend-gradient)"));
    }

    #[test]
    fn label_position_override() {
        let opts = MapOptions {
            show_labels: true,
            label_position: Some(Arc::new(|_: &Feature| Some(Coord { x: 1.0, y: 2.0 }))),
            ..options()
        };
        let map = BaseMap::render(&strip(), &RegionValues::new(), PlainNames, &opts).unwrap();
        assert!(map.regions().iter().all(|r| r.label_at == Some(Coord { x: 1.0, y: 2.0 })));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let data = values(&[("alpha", 1.0), ("beta", 4.0)]);
        let a = BaseMap::render(&strip(), &data, PlainNames, &options()).unwrap();
        let b = BaseMap::render(&strip(), &data, PlainNames, &options()).unwrap();
        assert_eq!(a.regions(), b.regions());
        assert_eq!(a.to_svg().unwrap(), b.to_svg().unwrap());
    }
}
