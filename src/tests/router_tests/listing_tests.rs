use crate::api::ApiError;
use crate::errors::ServerError;
use crate::responses::error_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, TestApp};
use serde_json::json;

fn position(body: &str, needle: &str) -> usize {
    body.find(needle)
        .unwrap_or_else(|| panic!("{needle} not in page"))
}

#[test]
fn overview_hides_withdrawn_listings() {
    let app = TestApp::new();

    let body = body_string(handle(get("/huizen"), &app.state).expect("overview"));

    assert!(body.contains("Prinsengracht 12"));
    assert!(body.contains("Herengracht 7"));
    assert!(body.contains("Singel 40"));
    assert!(!body.contains("Keizersgracht"));
    assert!(!body.contains("/X3"));
}

#[test]
fn overview_is_sorted_by_status_text() {
    let app = TestApp::new();

    let body = body_string(handle(get("/huizen"), &app.state).unwrap());

    let available = position(&body, "/huizen/detail/amsterdam/prinsengracht12/X1");
    let sold = position(&body, "/huizen/detail/amsterdam/herengracht7/X2");
    let conditional = position(&body, "/huizen/detail/amsterdam/singel40/X4");
    assert!(available < sold);
    assert!(sold < conditional);
}

#[test]
fn cards_show_price_badge_and_cover() {
    let app = TestApp::new();

    let body = body_string(handle(get("/huizen"), &app.state).unwrap());

    assert!(body.contains("€ 450.000"));
    assert!(body.contains("€ 1.250.000"));
    assert!(body.contains(r#"<span class="badge badge-success">beschikbaar</span>"#));
    assert!(body.contains(r#"<span class="badge badge-neutral">verkocht</span>"#));
    assert!(body.contains(
        r#"<span class="badge badge-warning">verkocht onder voorbehoud</span>"#
    ));
    assert!(body.contains("https://media.example/X1?id=1&amp;resize=4"));
    assert!(body.contains("3 kamers"));
    assert!(body.contains("85 m²"));
}

#[test]
fn empty_cache_renders_empty_overview() {
    let app = TestApp::with(json!({}), None, None);

    let resp = handle(get("/huizen"), &app.state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("geen woningen"));
}

#[test]
fn cache_failure_is_a_generic_server_error() {
    let app = TestApp::with(json!({}), Some(ApiError::Status(503)), None);

    let err = match handle(get("/huizen"), &app.state) {
        Err(err) => err,
        Ok(_) => panic!("expected an upstream error"),
    };
    assert!(matches!(err, ServerError::Upstream(ApiError::Status(503))));

    let resp = error_response(err);
    assert_eq!(resp.status(), 500);
    assert!(!body_string(resp).contains("503"));
}

#[test]
fn detail_page_renders_listing() {
    let app = TestApp::new();

    let resp = handle(
        get("/huizen/detail/amsterdam/prinsengracht12/X1"),
        &app.state,
    )
    .expect("detail");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Prinsengracht 12"));
    assert!(body.contains("1015 DV Amsterdam"));
    assert!(body.contains("Mooie woning aan de Prinsengracht."));
    assert!(body.contains("€ 450.000"));
    assert!(body.contains("Energielabel A"));
}

#[test]
fn detail_resolves_by_object_code_only() {
    let app = TestApp::new();

    let resp = handle(get("/huizen/detail/elders/verkeerd1/X1"), &app.state).unwrap();
    assert!(body_string(resp).contains("Prinsengracht 12"));
}

#[test]
fn withdrawn_or_unknown_detail_is_not_found() {
    let app = TestApp::new();

    for path in [
        "/huizen/detail/amsterdam/keizersgracht3/X3",
        "/huizen/detail/amsterdam/nergens1/NOPE",
        "/huizen/detail/amsterdam/X1",
    ] {
        assert!(
            matches!(handle(get(path), &app.state), Err(ServerError::NotFound)),
            "{path}"
        );
    }
}

#[test]
fn malformed_records_are_skipped_not_fatal() {
    let cached = json!({
        "resultaten": [
            {
                "adres": { "straat": "Damrak", "huisnummer": { "hoofdnummer": 1 }, "plaats": "Amsterdam" },
                "financieel": { "overdracht": { "status": "BESCHIKBAAR" } },
                "diversen": { "diversen": { "objectcode": "G1" } }
            },
            {
                "adres": { "straat": "Rokin", "huisnummer": { "hoofdnummer": 2 }, "plaats": "Amsterdam" },
                "media": null,
                "detail": { "kadaster": null },
                "diversen": { "diversen": { "objectcode": "N1" } }
            },
            { "adres": [], "diversen": { "diversen": { "objectcode": "B1" } } }
        ]
    });
    let app = TestApp::with(cached, None, None);

    let resp = handle(get("/huizen"), &app.state).expect("overview");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Damrak 1"));
    assert!(body.contains("Rokin 2"));
    assert!(!body.contains("/B1"));

    let resp = handle(get("/huizen/detail/amsterdam/rokin2/N1"), &app.state).expect("detail");
    assert_eq!(resp.status(), 200);
    assert!(!body_string(resp).contains("perceel"));
}
