use crate::api::ApiError;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_string, cached_listings, get, get_with_cookie, header, post_form, TestApp, ADMIN_PASS,
    ADMIN_USER,
};
use serde_json::{json, Value};

#[test]
fn login_form_when_not_authenticated() {
    let app = TestApp::new();

    let resp = handle(get("/admin"), &app.state).expect("admin page");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Admin Login"));
    assert!(body.contains(r#"name="username""#));
    assert!(body.contains(r#"name="password""#));
    assert!(!body.contains("realworksdata"));
}

#[test]
fn wrong_credentials_show_error() {
    let app = TestApp::new();

    let resp = handle(
        post_form("/admin", &[("username", ADMIN_USER), ("password", "wrong")], None),
        &app.state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "set-cookie").is_none());
    assert!(body_string(resp).contains("Invalid credentials"));
    assert_eq!(app.state.sessions.len(), 0);
}

#[test]
fn login_sets_session_cookie_and_redirects() {
    let app = TestApp::new();

    let resp = handle(
        post_form("/admin", &[("username", ADMIN_USER), ("password", ADMIN_PASS)], None),
        &app.state,
    )
    .unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "location").as_deref(), Some("/admin"));

    let cookie = header(&resp, "set-cookie").unwrap();
    assert!(cookie.starts_with("admin_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=86400"));
    assert!(!cookie.contains("Secure"));
}

#[test]
fn production_cookie_is_secure() {
    let mut app = TestApp::new();
    app.state.secure_cookies = true;

    let resp = handle(
        post_form("/admin", &[("username", ADMIN_USER), ("password", ADMIN_PASS)], None),
        &app.state,
    )
    .unwrap();

    assert!(header(&resp, "set-cookie").unwrap().contains("; Secure"));
}

#[test]
fn dashboard_shows_provider_feed() {
    let app = TestApp::new();
    let cookie = app.login();

    let resp = handle(get_with_cookie("/admin", &cookie), &app.state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Admin Dashboard"));
    assert!(body.contains(r#"name="realworksdata""#));
    // pretty-printed, quotes escaped by the template
    assert!(body.contains("&quot;objectcode&quot;: &quot;F1&quot;"));
    assert!(body.contains("/admin?logout=true"));
}

#[test]
fn forged_cookie_gets_login_form() {
    let app = TestApp::new();
    app.login();

    let resp = handle(
        get_with_cookie("/admin", "admin_session=not-a-real-token"),
        &app.state,
    )
    .unwrap();
    assert!(body_string(resp).contains("Admin Login"));
}

#[test]
fn logout_revokes_session() {
    let app = TestApp::new();
    let cookie = app.login();

    let resp = handle(get_with_cookie("/admin?logout=true", &cookie), &app.state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "location").as_deref(), Some("/admin"));
    assert!(header(&resp, "set-cookie").unwrap().contains("Max-Age=0"));

    let resp = handle(get_with_cookie("/admin", &cookie), &app.state).unwrap();
    assert!(body_string(resp).contains("Admin Login"));
}

#[test]
fn logout_without_session_still_redirects() {
    let app = TestApp::new();

    let resp = handle(get("/admin?logout=true"), &app.state).unwrap();
    assert_eq!(resp.status(), 302);
}

#[test]
fn update_requires_session() {
    let app = TestApp::new();

    let result = handle(
        post_form("/admin", &[("realworksdata", "{}")], None),
        &app.state,
    );
    assert!(matches!(result, Err(ServerError::Unauthorized(_))));
    assert_eq!(*app.stored.lock().unwrap(), cached_listings());
}

#[test]
fn update_replaces_cached_listings() {
    let app = TestApp::new();
    let cookie = app.login();
    let payload = json!({
        "resultaten": [
            { "adres": { "straat": "Damrak", "huisnummer": { "hoofdnummer": "1" }, "plaats": "Amsterdam" },
              "financieel": { "overdracht": { "status": "Beschikbaar" } },
              "diversen": { "diversen": { "objectcode": "N1" } } }
        ]
    });

    let submitted = payload.to_string();

    let resp = handle(
        post_form("/admin", &[("realworksdata", submitted.as_str())], Some(&cookie)),
        &app.state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Data successfully updated"));
    assert_eq!(*app.stored.lock().unwrap(), payload);

    let overview = body_string(handle(get("/huizen"), &app.state).unwrap());
    assert!(overview.contains("/huizen/detail/amsterdam/damrak1/N1"));
    assert!(!overview.contains("Prinsengracht"));
}

#[test]
fn invalid_json_is_rejected_without_writing() {
    let app = TestApp::new();
    let cookie = app.login();

    let resp = handle(
        post_form("/admin", &[("realworksdata", "{ not json")], Some(&cookie)),
        &app.state,
    )
    .unwrap();

    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Invalid JSON"));
    assert!(body.contains("{ not json"));
    assert_eq!(*app.stored.lock().unwrap(), cached_listings());
}

#[test]
fn unknown_form_is_bad_request() {
    let app = TestApp::new();
    let cookie = app.login();

    let result = handle(
        post_form("/admin", &[("something", "else")], Some(&cookie)),
        &app.state,
    );
    match result {
        Err(ServerError::BadRequest(msg)) => assert_eq!(msg, "Invalid form submission"),
        _ => panic!("expected a bad request"),
    }

    // a lone username is not a login attempt
    let result = handle(post_form("/admin", &[("username", ADMIN_USER)], None), &app.state);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn provider_failure_surfaces_on_dashboard() {
    let app = TestApp::with(
        cached_listings(),
        None,
        Some(ApiError::Transport("connection refused".into())),
    );
    let cookie = app.login();

    let result = handle(get_with_cookie("/admin", &cookie), &app.state);
    assert!(matches!(
        result,
        Err(ServerError::Upstream(ApiError::Transport(_)))
    ));
}

#[test]
fn cache_write_failure_is_upstream_error() {
    let app = TestApp::with(Value::Null, Some(ApiError::Status(500)), None);
    let cookie = app.login();

    let result = handle(
        post_form("/admin", &[("realworksdata", "{}")], Some(&cookie)),
        &app.state,
    );
    assert!(matches!(
        result,
        Err(ServerError::Upstream(ApiError::Status(500)))
    ));
}
