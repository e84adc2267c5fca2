use crate::api::ApiClient;
use crate::auth::{SessionStore, StaticCredentials};
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::listings::{KvListingCache, ProviderFeed};
use crate::responses::error_response;
use crate::router::handle;
use crate::state::AppState;
use astra::{Request, Response, Server};
use std::time::Instant;
use tracing::{error, info};

mod api;
mod auth;
mod config;
mod domain;
mod errors;
mod listings;
mod responses;
mod router;
mod state;
mod telemetry;
mod templates;


fn main() {
    if let Err(e) = run() {
        // telemetry may not be up yet
        eprintln!("startup failed: {e}");
        error!(error = %e, "startup failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let state = AppState {
        cache: Box::new(KvListingCache::new(ApiClient::new(&config.cache)?)),
        feed: Box::new(ProviderFeed::new(ApiClient::new(&config.provider)?)),
        credentials: Box::new(StaticCredentials::from_config(&config.admin)),
        sessions: SessionStore::new(),
        secure_cookies: config.environment.is_production(),
    };

    let addr = config.server.socket_addr()?;
    info!(
        %addr,
        environment = ?config.environment,
        workers = config.server.max_workers,
        "starting server"
    );

    Server::bind(&addr)
        .max_workers(config.server.max_workers)
        .serve(move |req: Request, _info| respond(req, &state))?;

    info!("server shut down");
    Ok(())
}

/// Runs one request through the router and logs the outcome.
pub(crate) fn respond(req: Request, state: &AppState) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => error_response(err),
    };

    info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}
