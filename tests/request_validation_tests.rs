use serde_json::json;
use synth_chart::ChartError;
use synth_chart::api::{RenderRequest, Theme};

#[test]
fn minimal_payload_gets_defaults() {
    let request = RenderRequest::from_json_value(&json!({"symbol": "BTC-USD", "timeframe": "1m"}))
        .expect("valid payload");

    assert_eq!(request.symbol(), "BTC-USD");
    assert_eq!(request.timeframe(), "1m");
    assert_eq!(request.viewport().width, 800);
    assert_eq!(request.viewport().height, 450);
    assert_eq!(request.theme(), Theme::Light);
}

#[test]
fn text_fields_are_trimmed() {
    let request = RenderRequest::from_json_value(&json!({
        "symbol": "  ETH-USD ",
        "timeframe": "\t5m",
        "theme": " DARK "
    }))
    .expect("valid payload");

    assert_eq!(request.symbol(), "ETH-USD");
    assert_eq!(request.timeframe(), "5m");
    assert_eq!(request.theme(), Theme::Dark);
}

#[test]
fn missing_or_blank_symbol_is_rejected() {
    let missing = RenderRequest::from_json_value(&json!({"timeframe": "1m"}));
    assert!(matches!(
        missing,
        Err(ChartError::MissingField { field: "symbol" })
    ));

    let blank = RenderRequest::from_json_value(&json!({"symbol": "   ", "timeframe": "1m"}));
    assert!(matches!(
        blank,
        Err(ChartError::MissingField { field: "symbol" })
    ));

    let no_timeframe = RenderRequest::from_json_value(&json!({"symbol": "BTC-USD"}));
    assert!(matches!(
        no_timeframe,
        Err(ChartError::MissingField { field: "timeframe" })
    ));
}

#[test]
fn dimensions_accept_integer_like_values() {
    let request = RenderRequest::from_json_value(&json!({
        "symbol": "BTC-USD",
        "timeframe": "1m",
        "width": "640",
        "height": 360.0
    }))
    .expect("valid payload");

    assert_eq!(request.viewport().width, 640);
    assert_eq!(request.viewport().height, 360);

    let nulls = RenderRequest::from_json_value(&json!({
        "symbol": "BTC-USD",
        "timeframe": "1m",
        "width": null,
        "height": null
    }))
    .expect("null dimensions use defaults");
    assert_eq!(nulls.viewport().width, 800);
    assert_eq!(nulls.viewport().height, 450);
}

#[test]
fn non_numeric_dimension_is_invalid_type() {
    let result = RenderRequest::from_json_value(&json!({
        "symbol": "BTC-USD",
        "timeframe": "1m",
        "width": "wide"
    }));
    assert!(matches!(
        result,
        Err(ChartError::InvalidType { field: "width", .. })
    ));

    let result = RenderRequest::from_json_value(&json!({
        "symbol": "BTC-USD",
        "timeframe": "1m",
        "height": [450]
    }));
    assert!(matches!(
        result,
        Err(ChartError::InvalidType { field: "height", .. })
    ));
}

#[test]
fn non_positive_dimension_is_invalid_range() {
    let result = RenderRequest::from_json_value(&json!({
        "symbol": "BTC-USD",
        "timeframe": "1m",
        "width": 0
    }));
    assert!(matches!(
        result,
        Err(ChartError::InvalidRange {
            field: "width",
            value: 0
        })
    ));

    let result = RenderRequest::from_json_value(&json!({
        "symbol": "BTC-USD",
        "timeframe": "1m",
        "height": -10
    }));
    assert!(matches!(
        result,
        Err(ChartError::InvalidRange {
            field: "height",
            value: -10
        })
    ));
}

#[test]
fn unrecognized_theme_is_not_an_error() {
    let request = RenderRequest::from_json_value(&json!({
        "symbol": "BTC-USD",
        "timeframe": "1m",
        "theme": "neon"
    }))
    .expect("valid payload");
    assert_eq!(request.theme(), Theme::Light);
}

#[test]
fn non_object_payload_is_rejected() {
    assert!(RenderRequest::from_json_value(&json!(["BTC-USD"])).is_err());
    assert!(RenderRequest::from_json_str("not json").is_err());
}

#[test]
fn builder_rejects_zero_size() {
    let request = RenderRequest::new("BTC-USD", "1m").expect("valid request");
    assert!(request.clone().with_size(0, 450).is_err());
    assert!(request.with_size(640, 0).is_err());
}

#[test]
fn request_deserializes_through_validation() {
    let request: RenderRequest =
        serde_json::from_str(r#"{"symbol":" SOL-USD ","timeframe":"15m","width":1024}"#)
            .expect("deserialize");
    assert_eq!(request.symbol(), "SOL-USD");
    assert_eq!(request.viewport().width, 1024);

    let invalid = serde_json::from_str::<RenderRequest>(r#"{"timeframe":"15m"}"#);
    assert!(invalid.is_err());
}

#[test]
fn error_messages_name_the_field() {
    let err = RenderRequest::new("", "1m").expect_err("blank symbol");
    assert_eq!(err.to_string(), "symbol is required");
}

#[test]
fn non_text_symbol_values() {
    let numeric = RenderRequest::from_json_value(&json!({"symbol": 1234, "timeframe": "1m"}))
        .expect("numeric symbol is stringified");
    assert_eq!(numeric.symbol(), "1234");

    let boolean = RenderRequest::from_json_value(&json!({"symbol": true, "timeframe": "1m"}));
    assert!(matches!(
        boolean,
        Err(ChartError::InvalidType { field: "symbol", .. })
    ));

    let null = RenderRequest::from_json_value(&json!({"symbol": "BTC-USD", "timeframe": null}));
    assert!(matches!(
        null,
        Err(ChartError::MissingField { field: "timeframe" })
    ));
}
