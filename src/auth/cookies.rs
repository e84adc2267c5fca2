// src/auth/cookies.rs
use crate::auth::sessions::SESSION_TTL_SECS;
use astra::Request;

pub const SESSION_COOKIE: &str = "admin_session";

/// Value of the admin session cookie, if the browser sent one.
pub fn session_token(req: &Request) -> Option<String> {
    req.headers()
        .get_all("cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|header| cookie_value(header, SESSION_COOKIE))
}

/// Looks up `name` in a `Cookie:` header ("a=1; b=2").
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}

pub fn session_cookie(token: &str, secure: bool) -> String {
    with_attributes(format!("{SESSION_COOKIE}={token}; Max-Age={SESSION_TTL_SECS}"), secure)
}

/// Tells the browser to forget the session.
pub fn expired_session_cookie(secure: bool) -> String {
    with_attributes(format!("{SESSION_COOKIE}=; Max-Age=0"), secure)
}

fn with_attributes(mut cookie: String, secure: bool) -> String {
    cookie.push_str("; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
