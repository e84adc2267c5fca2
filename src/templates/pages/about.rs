use crate::templates::site_layout;
use maud::{html, Markup};

pub fn about_page(is_admin: bool) -> Markup {
    site_layout(
        "Profiel Joost van Os",
        is_admin,
        html! {
            main class="container profile" {
                img src="/joost-portrait.jpg" alt="Joost van Os";
                div class="prose" {
                    h1 { "Profiel Joost van Os" }
                    p {
                        "Met ruim 25 jaar ervaring in de makelaardij en 2000+ geslaagde transacties ben ik deskundig "
                        "en heb ik uitgebreide kennis van de lokale vastgoedmarkt. Ik geloof in een persoonlijke "
                        "benadering. De wensen en behoeften van mijn klanten staan bij mij centraal. Ik communiceer "
                        "helder en eerlijk, zodat men altijd goed geïnformeerd is. Mede dankzij mijn uitgebreide "
                        "netwerk kan ik mijn klanten snel en effectief helpen bij al hun vastgoedvragen."
                    }
                    p {
                        "Sinds 2024 ben ik ook Vastgoed Mediator, mediation is een effectieve manier om alle mogelijke "
                        "vastgoed conflicten op te lossen. Het mediationtraject biedt structuur waarmee partijen zelf, "
                        "onder begeleiding van mij als neutrale mediator, tot een oplossing komen. Dit proces voorkomt "
                        "niet alleen juridische stappen, maar verbetert ook de communicatie en de relatie tussen betrokkenen."
                    }
                    a class="btn btn-primary" href="/cv-joost-van-os.pdf" target="_blank" rel="noopener noreferrer" {
                        "Download CV"
                    }
                }
            }
        },
    )
}
