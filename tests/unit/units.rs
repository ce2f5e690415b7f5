use super::*;

#[test]
fn factors_match_literal_constants() {
    for x in [0.25, 1.0, 2.0, 17.5] {
        assert_eq!(convert(x, AreaUnit::Acres).get(), x * 43560.0);
        assert_eq!(convert(x, AreaUnit::Hectares).get(), x * 107639.0);
        assert_eq!(convert(x, AreaUnit::SquareMeters).get(), x * 10.7639);
    }
}

#[test]
fn tags_round_trip_through_parse_and_display() {
    for unit in AreaUnit::ALL {
        assert_eq!(unit.tag().parse::<AreaUnit>().unwrap(), unit);
        assert_eq!(unit.to_string(), unit.tag());
    }
    assert_eq!(
        serde_json::to_value(AreaUnit::Hectares).unwrap(),
        serde_json::json!("ha")
    );
}

#[test]
fn unknown_tags_are_invalid_unit() {
    for tag in ["bogus", "xyz", "", "Acres", "hectares", " ha"] {
        let err = convert_tag(1.0, tag).unwrap_err();
        assert!(matches!(err, PlotError::InvalidUnit(ref t) if t == tag), "{tag:?}");
    }
}

#[test]
fn convert_tag_uses_the_same_factors() {
    assert_eq!(convert_tag(2.0, "ha").unwrap(), SquareFeet(215_278.0));
    assert_eq!(convert_tag(1.0, "acres").unwrap(), SquareFeet(43_560.0));
}
