use barkit::format::format_fixed;
use barkit::{ChartData, ChartError, Rgba};

#[test]
fn chart_data_deserializes_from_json() {
    let json = r#"
    {
        "labels": ["January", "February", "March"],
        "datasets": [
            { "data": [20.0, 45.0, 28.0], "key": "sales" },
            { "data": [10.0, 30.0] }
        ]
    }"#;
    let data: ChartData = serde_json::from_str(json).unwrap();
    assert_eq!(data.labels.len(), 3);
    assert_eq!(data.datasets.len(), 2);
    assert_eq!(data.datasets[0].key.as_deref(), Some("sales"));
    assert!(data.validate().is_ok());
}

#[test]
fn per_value_colors_parse_from_hex() {
    let json = r##"
    {
        "labels": ["A", "B"],
        "datasets": [
            { "data": [1.0, 2.0], "colors": ["#FF0000", "#00F"] }
        ]
    }"##;
    let data: ChartData = serde_json::from_str(json).unwrap();
    let colors = &data.datasets[0].colors;
    assert_eq!(colors.len(), 2);
    assert_eq!(colors[0](1.0), Rgba::opaque(255, 0, 0));
    assert_eq!(colors[1](1.0), Rgba::opaque(0, 0, 255));
    // The generator applies the requested opacity factor.
    assert_eq!(colors[0](0.1).a, 0.1);
}

#[test]
fn bad_hex_color_is_a_parse_error() {
    let json = r#"{"labels": ["A"], "datasets": [{"data": [1.0], "colors": ["red"]}]}"#;
    let err = serde_json::from_str::<ChartData>(json).unwrap_err();
    assert!(err.to_string().contains("red"));
}

#[test]
fn validate_rejects_bad_shapes() {
    let empty_labels = ChartData::new(vec![], vec![barkit::Dataset::new(vec![])]);
    assert!(matches!(empty_labels.validate(), Err(ChartError::EmptyLabels)));

    let no_datasets = ChartData::new(vec!["A".into()], vec![]);
    assert!(matches!(no_datasets.validate(), Err(ChartError::EmptyDatasets)));

    let nan = ChartData::new(
        vec!["A".into()],
        vec![barkit::Dataset::new(vec![f64::NAN])],
    );
    assert!(matches!(
        nan.validate(),
        Err(ChartError::NonFiniteValue { dataset: 0, index: 0 })
    ));
}

#[test]
fn hex_parsing_covers_short_and_alpha_forms() {
    assert_eq!(Rgba::from_hex("#4472C4"), Some(Rgba::opaque(0x44, 0x72, 0xC4)));
    assert_eq!(Rgba::from_hex("#fff"), Some(Rgba::opaque(255, 255, 255)));
    let with_alpha = Rgba::from_hex("#00000080").unwrap();
    assert!((with_alpha.a - 128.0 / 255.0).abs() < 1e-9);
    assert_eq!(Rgba::from_hex("4472C4"), None);
    assert_eq!(Rgba::from_hex("#GGGGGG"), None);
}

#[test]
fn css_output_uses_rgba_only_when_translucent() {
    assert_eq!(Rgba::opaque(68, 114, 196).to_css(), "#4472C4");
    assert_eq!(
        Rgba::opaque(68, 114, 196).with_opacity(0.5).to_css(),
        "rgba(68, 114, 196, 0.5)"
    );
}

#[test]
fn locale_formatting_groups_thousands() {
    assert_eq!(format_fixed(30000.0, 0, "en"), "30,000");
    assert_eq!(format_fixed(30000.0, 0, "de"), "30.000");
    assert_eq!(format_fixed(1234.5, 2, "en"), "1,234.50");
    assert_eq!(format_fixed(1234.5, 2, "de"), "1.234,50");
    assert_eq!(format_fixed(-0.001, 2, "en"), "0.00");
    assert_eq!(format_fixed(-12.3, 1, "en"), "-12.3");
}
