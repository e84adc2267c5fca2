use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

pub fn alert(kind: AlertKind, message: &str) -> Markup {
    let class = match kind {
        AlertKind::Success => "alert alert-success",
        AlertKind::Error => "alert alert-error",
    };
    html! {
        div class=(class) role="alert" { (message) }
    }
}
