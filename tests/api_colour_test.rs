//! Tests for /api/convert and /api/contrast.

mod common;

use axum::http::StatusCode;
use colour_engine::contrast_ratio_from_hex;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_convert_hex() {
    let app = TestApp::new();

    let response = app.post_json("/api/convert", &json!({ "colour": "#F00" })).await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["hex"], "#ff0000");
    assert_eq!(json["rgb"], json!({ "r": 255, "g": 0, "b": 0 }));
    assert_eq!(json["formatted"]["rgb"], "rgb(255, 0, 0)");
    assert_eq!(json["formatted"]["hsl"], "hsl(0, 100%, 50%)");
    assert_eq!(json["formatted"]["hsv"], "hsv(0, 100%, 100%)");
    assert_eq!(json["formatted"]["cmyk"], "cmyk(0%, 100%, 100%, 0%)");
    assert!(json["formatted"]["oklch"].as_str().unwrap().starts_with("oklch(62.8% "));
    assert!(json["formatted"]["lab"].as_str().unwrap().starts_with("lab(53.2"));

    let luminance = json["luminance"].as_f64().unwrap();
    assert!((luminance - 0.2126).abs() < 1e-9);
}

#[tokio::test]
async fn test_convert_functional_notation() {
    let app = TestApp::new();

    for (input, expected) in [
        ("rgb(0, 128, 255)", "#0080ff"),
        ("rgba(0 128 255 / 0.5)", "#0080ff"),
        ("hsl(120, 100%, 50%)", "#00ff00"),
        ("  ABCDEF ", "#abcdef"),
    ] {
        let response = app.post_json("/api/convert", &json!({ "colour": input })).await;
        common::assert_ok(&response);
        let json: serde_json::Value = response.json();
        assert_eq!(json["hex"], expected, "input {input:?}");
    }
}

#[tokio::test]
async fn test_convert_rejects_unparseable_colour() {
    let app = TestApp::new();

    let response = app.post_json("/api/convert", &json!({ "colour": "#12" })).await;

    let message = common::assert_json_error(&response, StatusCode::BAD_REQUEST);
    assert!(message.contains("#12"), "{message}");
}

#[tokio::test]
async fn test_convert_invalid_json() {
    let app = TestApp::new();

    let response = app.post_raw("/api/convert", "not valid json").await;

    // Axum returns 400 for JSON syntax errors
    common::assert_status(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_contrast_black_on_white() {
    let app = TestApp::new();

    let body = json!({ "foreground": "#000", "background": "#ffffff" });
    let response = app.post_json("/api/contrast", &body).await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["ratio"], 21.0);
    assert_eq!(json["formatted"], "21.00:1");
    assert_eq!(json["aa_normal"], true);
    assert_eq!(json["aaa_normal"], true);
    assert_eq!(json["level_normal"], "AAA");
    assert_eq!(json["level_large"], "AAA");
    assert_eq!(json["optimal_text"], "#000000");
    assert_eq!(json["foreground"], "#000000");
    // Already passing, so unchanged
    assert_eq!(json["suggested_foreground"], "#000000");
    assert_eq!(json["target_ratio"], 4.5);
}

#[tokio::test]
async fn test_contrast_grey_is_large_text_only() {
    let app = TestApp::new();

    let body = json!({ "foreground": "#777777", "background": "#ffffff" });
    let response = app.post_json("/api/contrast", &body).await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["formatted"], "4.48:1");
    assert_eq!(json["aa_normal"], false);
    assert_eq!(json["aa_large"], true);
    assert_eq!(json["level_normal"], "AA Large");
    assert_eq!(json["level_large"], "AA");

    let suggested = json["suggested_foreground"].as_str().unwrap();
    common::assert_hex(&json["suggested_foreground"]);
    assert!(contrast_ratio_from_hex(suggested, "#ffffff") >= 4.5);
}

#[tokio::test]
async fn test_contrast_custom_target() {
    let app = TestApp::new();

    let body = json!({ "foreground": "#777777", "background": "#ffffff", "target_ratio": 7.0 });
    let response = app.post_json("/api/contrast", &body).await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    let suggested = json["suggested_foreground"].as_str().unwrap();
    assert!(contrast_ratio_from_hex(suggested, "#ffffff") >= 7.0);
}

#[tokio::test]
async fn test_contrast_rejects_bad_input() {
    let app = TestApp::new();

    let body = json!({ "foreground": "black", "background": "#ffffff" });
    let response = app.post_json("/api/contrast", &body).await;
    common::assert_json_error(&response, StatusCode::BAD_REQUEST);

    let body = json!({ "foreground": "#000", "background": "#fff", "target_ratio": 30 });
    let response = app.post_json("/api/contrast", &body).await;
    let message = common::assert_json_error(&response, StatusCode::BAD_REQUEST);
    assert!(message.contains("target_ratio"), "{message}");
}
