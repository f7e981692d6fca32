use rstest::rstest;
use webframe::types::errors::InitError;
use webframe::types::init_params::{InitParams, StartContent, INIT_LAYOUT_VERSION};
use webframe::types::scheme::{SchemeName, SchemeResponse, MAX_CUSTOM_SCHEMES};

fn with_url() -> InitParams {
    InitParams::default()
        .with_start_url("https://example.com")
        .unwrap()
}

// === Scheme names ===

#[rstest]
#[case("app", "app")]
#[case("App", "app")]
#[case("my-app.v2", "my-app.v2")]
#[case("x+y", "x+y")]
fn scheme_name_accepts(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(SchemeName::parse(input).unwrap().as_str(), expected);
}

#[rstest]
#[case("")]
#[case("1app")]
#[case("-app")]
#[case("app/x")]
#[case("with space")]
#[case("äpp")]
fn scheme_name_rejects_invalid(#[case] input: &str) {
    assert_eq!(
        SchemeName::parse(input),
        Err(InitError::InvalidSchemeName(input.to_string()))
    );
}

#[rstest]
#[case("http")]
#[case("HTTPS")]
#[case("file")]
#[case("data")]
fn scheme_name_rejects_reserved(#[case] input: &str) {
    assert!(matches!(
        SchemeName::parse(input),
        Err(InitError::ReservedScheme(_))
    ));
}

#[test]
fn scheme_name_length_limit() {
    assert!(SchemeName::parse(&"a".repeat(50)).is_ok());
    assert!(SchemeName::parse(&"a".repeat(51)).is_err());
}

#[test]
fn scheme_not_found_response() {
    let response = SchemeResponse::not_found();
    assert_eq!(response.status, 404);
    assert!(response.body.is_empty());
}

// === Validation ===

#[test]
fn valid_record_passes() {
    assert_eq!(with_url().validate(), Ok(()));
}

#[test]
fn layout_mismatch_rejected() {
    let mut params = with_url();
    params.layout_version = INIT_LAYOUT_VERSION + 1;
    assert_eq!(
        params.validate(),
        Err(InitError::LayoutMismatch {
            expected: INIT_LAYOUT_VERSION,
            actual: INIT_LAYOUT_VERSION + 1,
        })
    );
}

#[test]
fn empty_start_content_rejected() {
    let params = InitParams::default()
        .with_start_url("")
        .unwrap()
        .with_start_html("");
    assert_eq!(params.start_content(), None);
    assert_eq!(params.validate(), Err(InitError::MissingStartContent));
}

#[test]
fn html_used_when_no_url() {
    let params = InitParams::default().with_start_html("<h1>hi</h1>");
    assert_eq!(params.start_content(), Some(StartContent::Html("<h1>hi</h1>")));
}

#[test]
fn too_many_schemes_rejected() {
    let mut params = with_url();
    for i in 0..=MAX_CUSTOM_SCHEMES {
        params = params.with_custom_scheme(&format!("s{}", i)).unwrap();
    }
    assert_eq!(
        params.validate(),
        Err(InitError::TooManySchemes(MAX_CUSTOM_SCHEMES + 1))
    );
}

#[test]
fn sixteen_schemes_allowed() {
    let mut params = with_url();
    for i in 0..MAX_CUSTOM_SCHEMES {
        params = params.with_custom_scheme(&format!("s{}", i)).unwrap();
    }
    assert!(params.validate().is_ok());
}

#[test]
fn duplicate_schemes_rejected_case_insensitively() {
    let params = with_url()
        .with_custom_scheme("app")
        .unwrap()
        .with_custom_scheme("APP")
        .unwrap();
    assert_eq!(
        params.validate(),
        Err(InitError::DuplicateScheme("app".to_string()))
    );
}

#[rstest]
#[case(0)]
#[case(-50)]
fn non_positive_zoom_rejected(#[case] zoom: i32) {
    let mut params = with_url();
    params.zoom = zoom;
    assert_eq!(params.validate(), Err(InitError::InvalidZoom(zoom)));
}

#[test]
fn long_title_rejected() {
    let result = InitParams::default().with_title(&"t".repeat(257));
    assert_eq!(
        result.err(),
        Some(InitError::TextTooLong {
            limit: 256,
            actual: 257
        })
    );
}

// === Serialization ===

#[test]
fn json_with_reserved_scheme_fails() {
    let result: Result<InitParams, _> =
        serde_json::from_str(r#"{"start_url":"https://x","custom_scheme_names":["http"]}"#);
    assert!(result.is_err());
}

#[test]
fn json_with_oversized_url_fails() {
    let json = format!(r#"{{"start_url":"https://{}"}}"#, "a".repeat(2048));
    let result: Result<InitParams, _> = serde_json::from_str(&json);
    assert!(result.is_err());
}

#[test]
fn defaults_match_documented_values() {
    let params = InitParams::default();
    assert_eq!((params.width, params.height), (800, 600));
    assert_eq!(params.zoom, 100);
    assert!(params.resizable);
    assert!(params.context_menu_enabled);
    assert!(params.dev_tools_enabled);
    assert!(params.grant_browser_permissions);
    assert!(params.exit_on_close);
    assert!(!params.fullscreen && !params.maximized && !params.minimized);
    assert!(!params.topmost && !params.chromeless && !params.center_on_initialize);
}
