use choromap::{
    build_registry, BaseMap, ColorScale, CountryMap, CountryMapProps, DirSource, FeatureCollection,
    MapOptions, MapState, MapView, PlainNames, RegionEvent, RegionProfile, RegionValue, RegionValues,
    ThemeTable, INDIA, NEUTRAL_FILL,
};

const INDIA_GEOJSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"name": "Odisha"},
         "geometry": {"type": "Polygon", "coordinates": [[[82.0, 18.0], [87.0, 18.0], [87.0, 22.5], [82.0, 22.5], [82.0, 18.0]]]}},
        {"type": "Feature", "properties": {"name": "Kerala"},
         "geometry": {"type": "Polygon", "coordinates": [[[74.8, 8.2], [77.4, 8.2], [77.4, 12.8], [74.8, 12.8], [74.8, 8.2]]]}},
        {"type": "Feature", "properties": {"name": "Punjab"},
         "geometry": {"type": "MultiPolygon", "coordinates": [[[[73.9, 29.5], [76.9, 29.5], [76.9, 32.5], [73.9, 32.5], [73.9, 29.5]]]]}},
        {"type": "Feature", "properties": {"state": "Unnamed"},
         "geometry": {"type": "Polygon", "coordinates": [[[90.0, 25.0], [91.0, 25.0], [91.0, 26.0], [90.0, 26.0], [90.0, 25.0]]]}}
    ]
}"#;

fn india() -> FeatureCollection {
    FeatureCollection::from_slice(INDIA_GEOJSON.as_bytes(), &["name"]).unwrap()
}

fn values(json: &str) -> RegionValues {
    serde_json::from_str(json).unwrap()
}

#[test]
fn scale_scenario_ten_twenty_thirty() {
    let palette: Vec<String> = ["#1", "#2", "#3", "#4"].iter().map(|c| c.to_string()).collect();
    let scale = ColorScale::build(&[10.0, 20.0, 30.0], 1.0, &palette).unwrap();
    assert_eq!(scale.band_count(), 4);
    assert_eq!(scale.domain(), (10.0, 30.0));
    assert_eq!(scale.band_index(10.0), 0);
    assert_eq!(scale.band_index(30.0), 3);
}

#[test]
fn former_state_name_finds_its_value() {
    let data = values(r#"{"Orissa": {"value": 42, "meta": "2011 census"}, "Kerala": 7, "Punjab": 19}"#);
    let options = MapOptions { palette: ThemeTable::default().palette("Warm Reds").to_vec(), ..MapOptions::default() };
    let mut map = BaseMap::render(&india(), &data, &INDIA, &options).unwrap();

    let odisha = map.region("Orissa").unwrap();
    assert_eq!(odisha.display_name(), "Odisha");
    assert_eq!(odisha.value, Some(42.0));
    assert_eq!(odisha.fill, map.legend().color_for(42.0));
    assert_ne!(odisha.fill, NEUTRAL_FILL);

    let bounds = odisha.bounds.unwrap();
    let center = bounds.center();
    let mut events: Vec<RegionEvent> = Vec::new();
    let tooltip = map.pointer_move(center.x, center.y, &mut events).cloned().unwrap();
    assert!(tooltip.html.contains("<em>2011 census</em>"));
    assert_eq!(events[0].name, "Odisha");
    assert_eq!(events[0].value, 42.0);
}

#[test]
fn feature_without_name_property_stays_neutral() {
    let data = values(r#"{"Unnamed": 5, "Kerala": 1}"#);
    let map = BaseMap::render(&india(), &data, PlainNames, &MapOptions::default()).unwrap();
    let unnamed = &map.regions()[3];
    assert!(unnamed.name.is_none());
    assert_eq!(unnamed.fill, NEUTRAL_FILL);
    assert_eq!(unnamed.reading().value, 0.0);
}

#[test]
fn layers_select_the_painted_value() {
    let data = values(r#"{
        "Kerala": {"value": 1, "layers": {"literacy": 96}},
        "Punjab": {"value": 9, "layers": {"literacy": 76}}
    }"#);
    let palette: Vec<String> = ["#a", "#b"].iter().map(|c| c.to_string()).collect();
    let options = MapOptions { palette, selected_layer: Some("literacy".into()), ..MapOptions::default() };
    let map = BaseMap::render(&india(), &data, PlainNames, &options).unwrap();
    assert_eq!(map.region("kerala").and_then(|r| r.value), Some(96.0));
    assert_eq!(map.region("kerala").map(|r| r.fill.as_str()), Some("#b"));
    assert_eq!(map.region("punjab").map(|r| r.fill.as_str()), Some("#a"));
}

#[test]
fn search_centers_region_in_viewport() {
    let options = MapOptions { search_region: Some("kerala".into()), ..MapOptions::default() };
    let mut map = BaseMap::render(&india(), &RegionValues::new(), PlainNames, &options).unwrap();
    let bounds = map.region("Kerala").and_then(|r| r.bounds).unwrap();

    let t = map.finish_transition();
    assert!(t.k <= choromap::SEARCH_MAX_SCALE);
    let center = t.apply(bounds.center());
    assert!((center.x - map.width() / 2.0).abs() < 1e-6);
    assert!((center.y - map.height() / 2.0).abs() < 1e-6);
}

#[test]
fn normalization_is_idempotent() {
    for raw in ["  Orissa ", "ODISHA", "Dadra and Nagar Haveli", "Tamil Nadu", ""] {
        let once = INDIA.normalize_name(raw);
        assert_eq!(INDIA.normalize_name(&once), once);
    }
}

#[test]
fn country_map_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("india.json"), INDIA_GEOJSON).unwrap();

    let registry = build_registry();
    let profile = registry.choropleth("india").unwrap();
    let mut map = CountryMap::new(profile);
    assert!(matches!(map.load(&DirSource::new(dir.path())), MapState::Ready(_)));

    let data = values(r#"{"Odisha": 3, "Kerala": 3}"#);
    let props = CountryMapProps { show_labels: true, ..CountryMapProps::default() };
    let MapView::Ready(base) = map.render(&data, &props, &ThemeTable::default()).unwrap() else {
        panic!("expected a ready map");
    };

    // degenerate domain: both values share the first band
    assert_eq!(base.region("odisha").map(|r| &r.fill), base.region("kerala").map(|r| &r.fill));

    let out = dir.path().join("india.svg");
    base.write_svg(&out).unwrap();
    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains(r#"id="legend-india-map""#));
    assert!(svg.contains(">Kerala</text>"));
    assert_eq!(svg.matches("<path ").count(), 4);
}

#[test]
fn missing_boundary_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut map = CountryMap::new(&INDIA);
    map.load(&DirSource::new(dir.path()));
    match map.render(&RegionValues::new(), &CountryMapProps::default(), &ThemeTable::default()).unwrap() {
        MapView::Failed(message) => assert!(message.contains("india.json")),
        _ => panic!("expected a failed view"),
    }
}

#[test]
fn region_value_accepts_numbers_and_records() {
    let data = values(r#"{"a": 1.5, "b": {"value": 2}}"#);
    assert_eq!(data["a"], RegionValue::Number(1.5));
    assert_eq!(data["b"].resolve(None), 2.0);
    assert_eq!(data["b"].meta(), None);
}
