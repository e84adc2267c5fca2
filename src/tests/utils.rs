use crate::api::models::ListingsEnvelope;
use crate::api::ApiError;
use crate::auth::{SessionStore, StaticCredentials};
use crate::listings::{parse_envelope, ListingCache, ListingFeed};
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{json, Value};
use std::io::Read;
use std::sync::{Arc, Mutex};

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "s3cr3t";

/// Key/value store stand-in; the test keeps a handle on what was written.
pub struct FakeCache {
    stored: Arc<Mutex<Value>>,
    fail_with: Option<ApiError>,
}

impl ListingCache for FakeCache {
    fn load(&self) -> Result<ListingsEnvelope, ApiError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        let value = self.stored.lock().unwrap().clone();
        parse_envelope(value)
    }

    fn replace(&self, payload: &Value) -> Result<(), ApiError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        *self.stored.lock().unwrap() = payload.clone();
        Ok(())
    }
}

pub struct FakeFeed {
    payload: Value,
    fail_with: Option<ApiError>,
}

impl ListingFeed for FakeFeed {
    fn fetch_active(&self) -> Result<Value, ApiError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(self.payload.clone()),
        }
    }
}

pub struct TestApp {
    pub state: AppState,
    pub stored: Arc<Mutex<Value>>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(cached_listings(), None, None)
    }

    pub fn with(
        cached: Value,
        cache_error: Option<ApiError>,
        feed_error: Option<ApiError>,
    ) -> Self {
        let stored = Arc::new(Mutex::new(cached));
        let state = AppState {
            cache: Box::new(FakeCache {
                stored: Arc::clone(&stored),
                fail_with: cache_error,
            }),
            feed: Box::new(FakeFeed {
                payload: provider_listings(),
                fail_with: feed_error,
            }),
            credentials: Box::new(StaticCredentials::new(ADMIN_USER, ADMIN_PASS)),
            sessions: SessionStore::new(),
            secure_cookies: false,
        };
        Self { state, stored }
    }

    /// Logs in through the form and returns the `Cookie` header value to send back.
    pub fn login(&self) -> String {
        let resp = handle(
            post_form("/admin", &[("username", ADMIN_USER), ("password", ADMIN_PASS)], None),
            &self.state,
        )
        .expect("login should succeed");
        assert_eq!(resp.status(), 302);

        let set_cookie = header(&resp, "set-cookie").expect("session cookie");
        set_cookie
            .split(';')
            .next()
            .map(str::to_string)
            .expect("cookie pair")
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, fields: &[(&str, &str)], cookie: Option<&str>) -> Request {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();

    let mut builder = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::from(body.into_bytes())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn listing(id: i64, code: &str, street: &str, number: &str, status: &str, price: f64) -> Value {
    json!({
        "id": id,
        "adres": {
            "straat": street,
            "huisnummer": { "hoofdnummer": number, "toevoeging": null },
            "postcode": "1015 DV",
            "plaats": "Amsterdam"
        },
        "financieel": { "overdracht": { "status": status, "koopprijs": price } },
        "algemeen": { "woonoppervlakte": 85, "aantalKamers": 3, "energieklasse": "A" },
        "teksten": { "aanbiedingstekst": format!("Mooie woning aan de {street}.") },
        "media": [
            { "soort": "HOOFDFOTO", "link": format!("https://media.example/{code}?id=1"), "volgnummer": 1, "mimetype": "image/jpeg" }
        ],
        "diversen": { "diversen": { "objectcode": code } }
    })
}

/// What the public pages read: one of each status, in provider order.
pub fn cached_listings() -> Value {
    json!({
        "resultaten": [
            listing(1, "X2", "Herengracht", "7", "VERKOCHT", 1250000.0),
            listing(2, "X1", "Prinsengracht", "12", "BESCHIKBAAR", 450000.0),
            listing(3, "X3", "Keizersgracht", "3", "INGETROKKEN", 600000.0),
            listing(4, "X4", "Singel", "40", "VERKOCHT_ONDER_VOORBEHOUD", 725000.0)
        ],
        "paginering": { "totaalAantal": 4 }
    })
}

/// What the provider returns to the admin dashboard.
pub fn provider_listings() -> Value {
    json!({
        "resultaten": [ listing(10, "F1", "Damrak", "1", "BESCHIKBAAR", 350000.0) ]
    })
}
