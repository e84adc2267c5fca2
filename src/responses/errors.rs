use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::error;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into the HTML error page the visitor sees.
///
/// Upstream details are logged, never shown.
pub fn error_response(err: ServerError) -> Response {
    let (status, message) = match &err {
        ServerError::NotFound => (404, "Deze pagina bestaat niet.".to_string()),
        ServerError::BadRequest(msg) => (400, msg.clone()),
        ServerError::Unauthorized(msg) => (401, msg.clone()),
        ServerError::Upstream(source) => {
            error!(error = %source, "upstream call failed");
            (500, "Er is iets misgegaan. Probeer het later opnieuw.".to_string())
        }
        ServerError::InternalError => {
            error!("internal error while handling request");
            (500, "Er is iets misgegaan. Probeer het later opnieuw.".to_string())
        }
    };

    let body = error_page(status, &message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
