use crate::templates::site_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    let heading = match status {
        404 => "Pagina niet gevonden",
        400 => "Ongeldig verzoek",
        401 => "Geen toegang",
        _ => "Er ging iets mis",
    };

    site_layout(
        heading,
        false,
        html! {
            main class="container narrow error" {
                p class="status" { (status) }
                h1 { (heading) }
                p { (message) }
                p { a href="/" { "← Terug naar de homepage" } }
            }
        },
    )
}
