use crate::errors::ServerError;
use crate::responses::error_response;
use crate::respond;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, post_form, TestApp};

#[test]
fn homepage_links_to_services_and_listings() {
    let app = TestApp::new();

    let resp = handle(get("/"), &app.state).expect("homepage");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "content-type").as_deref(),
        Some("text/html; charset=utf-8")
    );

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("een succesvolle samenwerking!"));
    assert!(body.contains(r#"href="/huizen""#));
    assert!(body.contains(r#"href="/vastgoed-mediation""#));
    assert!(body.contains(r#"href="/makelaardij""#));
    assert!(body.contains(r#"href="/mediation""#));
}

#[test]
fn static_pages_render() {
    let app = TestApp::new();
    let pages = [
        ("/makelaardij", "Kleinschalig VvE beheer"),
        ("/mediation", "Mediation Diensten"),
        ("/vastgoed-mediation", "Wanneer een Vastgoed Mediator"),
        ("/over-joost-van-os", "Profiel Joost van Os"),
    ];

    for (path, expected) in pages {
        let resp = handle(get(path), &app.state).expect(path);
        assert_eq!(resp.status(), 200, "{path}");
        assert!(body_string(resp).contains(expected), "{path}");
    }
}

#[test]
fn reviews_show_average_and_count() {
    let app = TestApp::new();

    let body = body_string(handle(get("/beoordelingen"), &app.state).unwrap());
    assert!(body.contains("9.3"));
    assert!(body.contains("2 beoordelingen"));
    assert!(body.contains("Familie de Vries"));
    assert!(body.contains("Peter van Dam"));
    assert!(body.contains("15-1-2024"));
    assert!(body.contains("Verkoop"));
    assert!(body.contains(r#"id="beoordeling-1""#));
    assert!(body.contains(r#"id="beoordeling-2""#));
}

#[test]
fn unknown_routes_are_not_found() {
    let app = TestApp::new();

    for path in ["/nope", "/aanbod", "/huizen/", "/huizen/detail"] {
        assert!(
            matches!(handle(get(path), &app.state), Err(ServerError::NotFound)),
            "{path}"
        );
    }
    assert!(matches!(
        handle(post_form("/", &[], None), &app.state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn not_found_renders_html_page() {
    let resp = error_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    let body = body_string(resp);
    assert!(body.contains("Pagina niet gevonden"));
    assert!(body.contains(r#"href="/""#));
}

#[test]
fn error_statuses_map() {
    assert_eq!(error_response(ServerError::BadRequest("x".into())).status(), 400);
    assert_eq!(error_response(ServerError::Unauthorized("x".into())).status(), 401);
    assert_eq!(error_response(ServerError::InternalError).status(), 500);
}

#[test]
fn server_entry_turns_errors_into_pages() {
    let app = TestApp::new();

    let resp = respond(get("/"), &app.state);
    assert_eq!(resp.status(), 200);

    let resp = respond(get("/bestaat-niet"), &app.state);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Pagina niet gevonden"));
}
