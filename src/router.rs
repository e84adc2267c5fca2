use crate::auth::cookies::{expired_session_cookie, session_cookie, session_token};
use crate::domain::{catalog, slug::DETAIL_PREFIX, testimonial};
use crate::errors::ServerError;
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::state::AppState;
use crate::templates::pages::{self, Notice};
use astra::Request;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Upper bound for a posted admin form; the provider feed is a few MB at most.
const MAX_FORM_BYTES: u64 = 16 * 1024 * 1024;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let now = now_unix();
    let is_admin = is_authenticated(&req, state, now);

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page(is_admin)),
        ("GET", "/huizen") => listings(state, is_admin),
        ("GET", p) if p.starts_with(DETAIL_PREFIX) => listing_detail(state, p, is_admin),
        ("GET", "/makelaardij") => html_response(pages::real_estate_page(is_admin)),
        ("GET", "/mediation") => html_response(pages::mediation_page(is_admin)),
        ("GET", "/vastgoed-mediation") => {
            html_response(pages::real_estate_mediation_page(is_admin))
        }
        ("GET", "/over-joost-van-os") => html_response(pages::about_page(is_admin)),
        ("GET", "/beoordelingen") => reviews(is_admin),
        ("GET", "/admin") => admin_get(&req, state, is_admin),
        ("POST", "/admin") => admin_post(req, state, is_admin, now),
        _ => Err(ServerError::NotFound),
    }
}

fn listings(state: &AppState, is_admin: bool) -> ResultResp {
    let envelope = state.cache.load()?;
    let shown = catalog::overview(catalog::from_envelope(&envelope));
    html_response(pages::listings_page(&shown, is_admin))
}

fn listing_detail(state: &AppState, path: &str, is_admin: bool) -> ResultResp {
    let object_code = detail_object_code(path).ok_or(ServerError::NotFound)?;

    let envelope = state.cache.load()?;
    let all = catalog::from_envelope(&envelope);
    let listing = catalog::find_visible(&all, object_code).ok_or(ServerError::NotFound)?;

    html_response(pages::listing_detail_page(listing, is_admin))
}

/// `/huizen/detail/{city}/{street}/{objectcode}`: the object code is the only
/// segment that matters, but all three must be present.
pub fn detail_object_code(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(DETAIL_PREFIX)?.strip_prefix('/')?;
    let segments: Vec<&str> = rest.split('/').collect();
    match segments.as_slice() {
        [city, street, code] if !city.is_empty() && !street.is_empty() && !code.is_empty() => {
            Some(*code)
        }
        _ => None,
    }
}

fn reviews(is_admin: bool) -> ResultResp {
    let all = testimonial::all();
    let average = testimonial::average_rating(&all);
    html_response(pages::reviews_page(&all, average, is_admin))
}

fn admin_get(req: &Request, state: &AppState, is_admin: bool) -> ResultResp {
    let query = parse_query(req);

    if query.get("logout").map(String::as_str) == Some("true") {
        if let Some(token) = session_token(req) {
            state.sessions.revoke(&token);
            info!("admin logged out");
        }
        return redirect("/admin", Some(&expired_session_cookie(state.secure_cookies)));
    }

    if !is_admin {
        return html_response(pages::admin_login_page(None));
    }

    let feed = state.feed.fetch_active()?;
    html_response(pages::admin_dashboard_page(&pretty(&feed), None))
}

fn admin_post(req: Request, state: &AppState, is_admin: bool, now: i64) -> ResultResp {
    let form = parse_form(req)?;

    if let (Some(username), Some(password)) = (form.get("username"), form.get("password")) {
        if !state.credentials.verify(username, password) {
            warn!("admin login rejected");
            return html_response(pages::admin_login_page(Some("Invalid credentials")));
        }
        let token = state.sessions.create(now);
        info!(active_sessions = state.sessions.len(), "admin logged in");
        return redirect("/admin", Some(&session_cookie(&token, state.secure_cookies)));
    }

    if let Some(submitted) = form.get("realworksdata") {
        if !is_admin {
            return Err(ServerError::Unauthorized("Log eerst in.".into()));
        }

        let payload: Value = match serde_json::from_str(submitted) {
            Ok(value) => value,
            Err(e) => {
                let message = format!("Invalid JSON: {e}");
                return html_response_with_status(
                    400,
                    pages::admin_dashboard_page(submitted, Some(Notice::Rejected(&message))),
                );
            }
        };

        state.cache.replace(&payload)?;
        return html_response(pages::admin_dashboard_page(
            &pretty(&payload),
            Some(Notice::Updated),
        ));
    }

    Err(ServerError::BadRequest("Invalid form submission".into()))
}

fn is_authenticated(req: &Request, state: &AppState, now: i64) -> bool {
    session_token(req).is_some_and(|token| state.sessions.is_valid(&token, now))
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn parse_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut bytes = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form: {e}")))?;

    if bytes.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("Form too large".into()));
    }

    Ok(url::form_urlencoded::parse(&bytes).into_owned().collect())
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
