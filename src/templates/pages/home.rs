// templates/pages/home.rs

use crate::templates::{
    components::{content_section, ContentSection},
    site_layout,
};
use maud::{html, Markup};

pub fn home_page(is_admin: bool) -> Markup {
    site_layout(
        "Home",
        is_admin,
        html! {
            section class="hero hero-home" style="background-image: url(/canals.webp)" {
                div class="hero-overlay" {}
                div class="hero-content" {
                    img src="/logo-white.svg" alt="Joost van Os logo" class="hero-logo";
                    h1 { "We zien uit naar" br; "een succesvolle samenwerking!" }
                    a class="btn btn-primary" href="/huizen" { "Bekijk ons huizen aanbod" }
                }
            }

            (content_section(
                &ContentSection {
                    image: "/IMG_2283.JPG",
                    image_left: false,
                    title: "Waarom kiezen voor",
                    bold_title: "Joost van Os Vastgoed Mediation?",
                    link_text: "Lees meer over Vastgoed Mediation",
                    link_url: "/vastgoed-mediation",
                },
                html! {
                    p {
                        "Wij begrijpen dat er in zowel persoonlijke als zakelijke relaties conflicten kunnen ontstaan. "
                        "Het is onze missie om u te helpen deze conflicten op een "
                        strong { "constructieve" } " en " strong { "effectieve" } " manier op te lossen."
                    }
                },
            ))
            hr;
            (content_section(
                &ContentSection {
                    image: "/IMG_2279.JPG",
                    image_left: true,
                    title: "Waarom kiezen voor",
                    bold_title: "Joost van Os Makelaardij?",
                    link_text: "Lees meer over Makelaardij",
                    link_url: "/makelaardij",
                },
                html! {
                    p {
                        "Met ruim 25 jaar ervaring in de makelaardij en 850+ geslaagde transacties zijn wij "
                        "deskundig en hebben uitgebreide kennis van de lokale vastgoedmarkt."
                    }
                },
            ))
            hr;
            (content_section(
                &ContentSection {
                    image: "/mediator.jpg",
                    image_left: false,
                    title: "Waarom kiezen voor",
                    bold_title: "Joost van Os Mediation?",
                    link_text: "Lees meer over Mediation",
                    link_url: "/mediation",
                },
                html! {
                    p {
                        "Met onze professionele begeleiding creëren we een onpartijdige en "
                        strong { "veilige omgeving" }
                        " waarin alle betrokken partijen hun zorgen en wensen kunnen uiten om zo meer "
                        strong { "begrip" }
                        " voor elkaars standpunten te krijgen en daarmee tot een "
                        strong { "duurzame oplossing" } " te kunnen komen."
                    }
                },
            ))
        },
    )
}
