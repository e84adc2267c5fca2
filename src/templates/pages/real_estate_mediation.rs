use crate::templates::{
    components::{check_list, hero},
    site_layout,
};
use maud::{html, Markup};

const PARAGRAPHS: [&str; 4] = [
    "Mediation is een effectieve manier om deze conflicten op te lossen. Het mediationtraject biedt \
     structuur waarmee partijen zelf, onder begeleiding van een neutrale mediator, tot een oplossing komen. \
     Dit proces voorkomt niet alleen juridische stappen, maar verbetert ook de communicatie tussen betrokkenen.",
    "Gedurende het traject doorlopen de partijen verschillende fasen, van een eerste intake tot het \
     vastleggen van een bindende overeenkomst. De mediator speelt in elke fase een cruciale rol door het \
     faciliteren van gesprekken en het bieden van een veilige omgeving waarin partijen hun standpunten kunnen delen.",
    "Mediation is doorgaans sneller en minder kostbaar dan een juridische procedure, wat het een \
     aantrekkelijke optie maakt. Een goede voorbereiding verhoogt de kans op succes. Hoe duidelijker partijen \
     hun doelen formuleren en het proces begrijpen, hoe effectiever de mediation zal verlopen.",
    "Mediation is een vorm van alternatieve geschiloplossing waarbij samenwerking en communicatie centraal \
     staan. In plaats van een conflict te laten juridiseren of voor de rechter uit te vechten, zoeken de \
     partijen onder begeleiding van een mediator naar een gezamenlijke oplossing. Dit proces is nuttig bij \
     geschillen bij aan/verkoop, huurgeschillen, VvE kwesties, onenigheid of de waarde van vastgoed etc.",
];

const PROCESS: [&str; 3] = [
    "Een goede voorbereiding vergroot de kans op succes bij mediation. Het is belangrijk dat alle partijen \
     hun doelen duidelijk formuleren en de relevante documentatie voorbereiden. Tijdens de pre-mediation fase \
     verzamelt de mediator informatie en stelt een mediationovereenkomst op. Hierin worden de spelregels voor \
     het traject vastgelegd.",
    "De mediation start met een eerste sessie waarin beide partijen hun standpunten toelichten. Dit helpt om \
     misverstanden direct op te helderen en de basis te leggen voor constructieve gesprekken.",
    "In de caucus-sessies, oftewel individuele gesprekken met de mediator, kunnen partijen hun zorgen en \
     behoeften in vertrouwen bespreken. Na de individuele gesprekken volgt een gezamenlijke afspraak waarin \
     de mediator de partijen helpt bij het zoeken naar wederzijds acceptabele oplossingen.",
];

pub fn real_estate_mediation_page(is_admin: bool) -> Markup {
    let benefits = [
        html! {
            strong { "Snel en kostenefficiënt:" }
            " Mediation kan vaak binnen enkele sessies worden afgerond, wat kosten en tijd bespaart."
        },
        html! {
            strong { "Behouden van relaties:" }
            " Omdat de focus ligt op samenwerking, blijven relaties tussen partijen vaak beter intact."
        },
        html! {
            strong { "Flexibiliteit:" }
            " Het mediationproces is flexibel en kan worden aangepast aan de behoeften van de partijen."
        },
    ];

    site_layout(
        "Vastgoed Mediation",
        is_admin,
        html! {
            (hero(
                "Vastgoed Mediation",
                Some(html! {
                    "Wij begrijpen dat er in zowel persoonlijke als zakelijke relaties conflicten kunnen ontstaan. "
                    "Het is onze missie om u te helpen deze conflicten op een "
                    strong { "constructieve" } " en " strong { "effectieve" } " manier op te lossen."
                }),
                "/bgvastgoed-meidation.jpg",
            ))

            main class="container narrow prose" {
                h2 { "Wanneer een Vastgoed Mediator in plaats van een Vastgoed Makelaar" }
                p {
                    "Vanzelfsprekend maakt men bij aan/verkoop van vastgoed gebruik van de diensten van een makelaar. "
                    "Een makelaar neemt echter per definitie een partijdig standpunt in. Dit gegeven kan ertoe leiden "
                    "dat vastgoed vraagstukken verzanden in vastgoed conflicten."
                }
                @for paragraph in PARAGRAPHS {
                    p { (paragraph) }
                }
                p { "Mediation biedt diverse voordelen ten opzichte van traditionele juridische procedures:" }
                (check_list(&benefits))
                @for paragraph in PROCESS {
                    p { (paragraph) }
                }
                a class="btn btn-primary" href="/mediation" { "Bekijk onze mediation diensten" }
            }
        },
    )
}
