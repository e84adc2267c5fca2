use maud::{html, Markup};

/// Full-width banner with a background photo.
pub fn hero(title: &str, lead: Option<Markup>, image: &str) -> Markup {
    html! {
        section class="hero" style=(format!("background-image: url({image})")) {
            div class="hero-overlay" {}
            div class="hero-content" {
                h1 { (title) }
                @if let Some(lead) = lead {
                    p class="lead" { (lead) }
                }
            }
        }
    }
}

pub struct ContentSection<'a> {
    pub image: &'a str,
    pub image_left: bool,
    pub title: &'a str,
    pub bold_title: &'a str,
    pub link_text: &'a str,
    pub link_url: &'a str,
}

/// Photo next to a short pitch with a "read more" link.
pub fn content_section(section: &ContentSection<'_>, body: Markup) -> Markup {
    let class = if section.image_left {
        "content-section image-left"
    } else {
        "content-section"
    };
    html! {
        section class=(class) {
            img src=(section.image) alt="";
            div {
                h2 { (section.title) " " strong { (section.bold_title) } }
                (body)
                a class="btn btn-secondary" href=(section.link_url) { (section.link_text) }
            }
        }
    }
}

pub fn check_list(items: &[Markup]) -> Markup {
    html! {
        ul class="check-list" {
            @for item in items {
                li { span class="check" { "✓" } div { (item) } }
            }
        }
    }
}
