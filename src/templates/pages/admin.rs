use crate::templates::{
    components::{alert, AlertKind},
    site_layout,
};
use maud::{html, Markup};

pub fn admin_login_page(error: Option<&str>) -> Markup {
    site_layout(
        "Admin Login",
        false,
        html! {
            main class="container narrow admin-login" {
                h1 { "Admin Login" }

                @if let Some(message) = error {
                    (alert(AlertKind::Error, message))
                }

                form method="post" action="/admin" {
                    label for="username" { "Username" }
                    input id="username" name="username" type="text" autocomplete="username" required;

                    label for="password" { "Password" }
                    input id="password" name="password" type="password" autocomplete="current-password" required;

                    button type="submit" class="btn btn-primary" { "Login" }
                }
            }
        },
    )
}

/// What the dashboard shows above the editor after a submit.
pub enum Notice<'a> {
    Updated,
    Rejected(&'a str),
}

/// `feed_json` is shown as-is in the editor; callers pretty-print it.
pub fn admin_dashboard_page(feed_json: &str, notice: Option<Notice<'_>>) -> Markup {
    site_layout(
        "Admin Dashboard",
        true,
        html! {
            div class="admin-bar" {
                h1 { "Admin Dashboard" }
                a class="logout" href="/admin?logout=true" { "Logout" }
            }

            main class="container" {
                h2 { "Submit Realworks Data" }

                @match notice {
                    Some(Notice::Updated) => (alert(AlertKind::Success, "Data successfully updated")),
                    Some(Notice::Rejected(message)) => (alert(AlertKind::Error, message)),
                    None => {}
                }

                form method="post" action="/admin" {
                    textarea name="realworksdata" rows="20" cols="10" class="textarea" { (feed_json) }
                    button type="submit" class="btn btn-primary" { "Submit" }
                }
            }
        },
    )
}
