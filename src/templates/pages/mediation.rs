use crate::templates::{
    components::{check_list, hero},
    site_layout,
};
use maud::{html, Markup};

pub fn mediation_page(is_admin: bool) -> Markup {
    let services = [
        html! {
            strong { "Aan- en verkoop:" }
            " begeleiding bij het oplossen van conflicten ontstaan tussen partijen bij aan- verkoop van alle soorten vastgoed."
        },
        html! {
            strong { "Woning waarderingen:" }
            " begeleiding bij onenigheid over waarderingen van vastgoed."
        },
        html! {
            strong { "Aan- en verhuur:" }
            " begeleiden bij huurgeschillen tussen huurder en verhuurder."
        },
        html! {
            strong { "VvE beheer:" }
            " begeleiden bij alle mogelijke conflicten binnen verenigingen van eigenaars."
        },
        html! {
            strong { "Advies:" }
            " adviseren bij alle mogelijke conflicten op het gebied van vastgoed."
        },
    ];

    site_layout(
        "Mediation",
        is_admin,
        html! {
            (hero(
                "Mediation Diensten",
                Some(html! {
                    "Wij begrijpen dat er in zowel persoonlijke als zakelijke relaties conflicten kunnen ontstaan. "
                    "Het is onze missie om u te helpen deze conflicten op een "
                    strong { "constructieve" } " en " strong { "effectieve" } " manier op te lossen."
                }),
                "/mediator-canalview.jpg",
            ))

            main class="container narrow prose" {
                p {
                    "Met onze professionele begeleiding creëren we een onpartijdige en "
                    strong { "veilige omgeving" }
                    " waarin alle betrokken partijen hun zorgen en wensen kunnen uiten om zo meer "
                    strong { "begrip" }
                    " voor elkaars standpunten te krijgen en daarmee tot een "
                    strong { "duurzame oplossing" } " te kunnen komen."
                }
                h2 { "Onze diensten op het gebied van vastgoed mediation:" }
                (check_list(&services))
                h2 { "Waarom kiezen voor Joost van Os Makelaardij & Mediation?" }
                p {
                    "Met persoonlijke aandacht en neutrale begeleiding bieden wij volledige ondersteuning bij het "
                    "oplossen van alle mogelijke vastgoedconflicten. Wij geloven in maatwerk. Iedere situatie is "
                    "uniek en wij passen onze aanpak aan op uw specifieke behoeften. Ons doel is om niet alleen het "
                    "huidige conflict op te lossen, maar ook om duurzame oplossingen te creëren die toekomstige "
                    "problemen helpen voorkomen."
                }
                h3 { "We zien uit naar onze samenwerking!" }
            }
        },
    )
}
