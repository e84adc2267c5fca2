use maud::{html, Markup, DOCTYPE};

pub const PHONE_DISPLAY: &str = "0622 691573";
pub const PHONE_LINK: &str = "tel:+31622691573";

pub fn site_layout(title: &str, is_admin: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="nl" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Joost van Os Makelaardij & Mediation" }
                link rel="icon" href="/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="navbar" {
                    a class="navbar-brand" href="/" {
                        img src="/logo.png" alt="Joost van Os" width="45";
                    }
                    nav {
                        ul class="menu" {
                            li { a class="btn btn-secondary btn-sm" href="/makelaardij" { "Makelaardij" } }
                            li { a class="btn btn-secondary btn-sm" href="/mediation" { "Mediation" } }
                            li { a class="btn btn-secondary btn-sm" href="/vastgoed-mediation" { "Vastgoed Mediation" } }
                            li { a class="btn btn-secondary btn-sm" href="/huizen" { "Aanbod" } }
                            @if is_admin {
                                li { a class="btn btn-sm" href="/admin" { "Admin" } }
                            }
                        }
                    }
                    a class="btn btn-primary" href=(PHONE_LINK) { (PHONE_DISPLAY) }
                }

                (content)

                (footer())
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="footer" {
            div {
                p class="footer-title" { "Joost van Os Makelaardij & Mediation" }
                p { "Amsterdam" }
                a href=(PHONE_LINK) { (PHONE_DISPLAY) }
            }
            nav {
                p class="footer-title" { "Diensten" }
                a href="/makelaardij" { "Makelaardij" }
                a href="/mediation" { "Mediation" }
                a href="/vastgoed-mediation" { "Vastgoed Mediation" }
            }
            nav {
                p class="footer-title" { "Over ons" }
                a href="/over-joost-van-os" { "Profiel Joost van Os" }
                a href="/beoordelingen" { "Beoordelingen" }
                a href="/huizen" { "Huizen" }
            }
        }
    }
}
