pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::{error_response, ResultResp};
pub use html::{html_response, html_response_with_status};
pub use redirect::redirect;
