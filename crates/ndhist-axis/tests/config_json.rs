//! Axis configurations exchanged as JSON

use ndhist_axis::{AxisConfig, AxisKind, BinnedAxis, Error};

#[test]
fn test_json_round_trip() {
    let configs = vec![
        AxisConfig::equidistant(10, 0.0, 1.0).with_title("x"),
        AxisConfig::growable(4, -2.0, 2.0),
        AxisConfig::irregular(vec![0.0, 1.0, 3.0, 6.0]),
        AxisConfig::labels(["e", "mu", "tau"]),
        AxisConfig::labels_with_capacity(8, ["jet"]),
    ];

    let json = serde_json::to_string(&configs).unwrap();
    let parsed: Vec<AxisConfig> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, configs);
}

#[test]
fn test_parse_hand_written_config() {
    let json = r#"[
        {"kind": "equidistant", "n_bins": 20, "low": 0.0, "high": 100.0, "title": "pt"},
        {"kind": "irregular", "borders": [0.0, 0.5, 1.5, 4.0]},
        {"kind": "labels", "labels": ["barrel", "endcap"]}
    ]"#;
    let configs: Vec<AxisConfig> = serde_json::from_str(json).unwrap();
    let kinds: Vec<_> = configs.iter().map(AxisConfig::kind).collect();
    assert_eq!(
        kinds,
        vec![AxisKind::Equidistant, AxisKind::Irregular, AxisKind::Labels]
    );

    let axes: Vec<_> = configs.iter().map(|c| c.build().unwrap()).collect();
    assert_eq!(axes[0].title(), "pt");
    assert_eq!(axes[0].find_bin(12.0), 3);
    assert_eq!(axes[1].find_bin(1.0), 2);
    assert_eq!(axes[2].n_bins_no_over(), 2);
}

#[test]
fn test_unknown_kind_fails_to_parse() {
    let json = r#"{"kind": "logarithmic", "n_bins": 5}"#;
    assert!(serde_json::from_str::<AxisConfig>(json).is_err());
}

#[test]
fn test_parsed_but_invalid_config() {
    let json = r#"{"kind": "irregular", "borders": [2.0, 1.0]}"#;
    let config: AxisConfig = serde_json::from_str(json).unwrap();
    assert!(matches!(
        config.build(),
        Err(Error::InvalidAxisConfiguration(_))
    ));
}
