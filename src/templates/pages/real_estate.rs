use crate::templates::{
    components::{check_list, hero},
    site_layout,
};
use maud::{html, Markup};

const SERVICES: [&str; 7] = [
    "Aankoopbegeleiding",
    "Verkoopbegeleiding",
    "Woning waarderingen",
    "Aanhuur",
    "Verhuur",
    "Kleinschalig VvE beheer",
    "Advies",
];

pub fn real_estate_page(is_admin: bool) -> Markup {
    let services: Vec<Markup> = SERVICES.iter().map(|s| html! { (s) }).collect();

    site_layout(
        "Makelaardij",
        is_admin,
        html! {
            (hero(
                "Makelaardij",
                Some(html! {
                    "Met ruim 25 jaar ervaring in de makelaardij en 850+ geslaagde transacties zijn wij "
                    "deskundig en hebben uitgebreide kennis van de lokale vastgoedmarkt."
                }),
                "/canals-night.webp",
            ))

            main class="container narrow prose" {
                h2 { "Waarom kiezen voor Joost van Os Makelaardij & Mediation?" }
                p {
                    "Wij geloven in een persoonlijke benadering. Uw wensen en behoeften staan bij ons centraal. "
                    "Wij communiceren helder en eerlijk, zodat u altijd goed geïnformeerd bent. Mede dankzij ons "
                    "uitgebreide netwerk kunnen wij u snel en effectief helpen bij al uw vastgoedvragen."
                }
                p {
                    "Wij begrijpen dat het kopen of verkopen van een huis een van de belangrijkste beslissingen "
                    "in uw leven is. Daarom staan wij klaar om u te begeleiden met ruim 25 jaar ervaring, gedegen "
                    "deskundigheid, persoonlijke aandacht en een grote passie voor het vak."
                }
                h3 { "Onze Diensten:" }
                (check_list(&services))
                h3 { "We zien uit naar onze samenwerking!" }
            }
        },
    )
}
