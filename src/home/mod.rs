//! Homepage widget: the Latin quote of the visit and the social links

use crate::helpers::html_escape;

/// A Latin quote with its translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub latin: &'static str,
    pub translation: &'static str,
}

/// A social profile link rendered as an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub href: &'static str,
    pub icon: &'static str,
}

const fn quote(latin: &'static str, translation: &'static str) -> Quote {
    Quote { latin, translation }
}

pub const QUOTES: &[Quote] = &[
    quote("Verba volant, Scripta manent", "Spoken words fly away, written words remain"),
    quote("Vasa vana plurimum sonant", "Empty pots make the most noise"),
    quote("In absentia lucis, Tenebrae vincunt", "In the absence of light, darkness prevails"),
    quote("Carpe diem", "Live today"),
    quote("Alea iacta est", "The die is cast"),
    quote("Ut avertam oculos meos ad intendum", "I close my eyes to see"),
    quote("Qui tacet consentire", "Whoever remains silent, consents to anything"),
    quote("Parva leves capiunt animas", "Small things occupy light minds"),
    quote("Barba tenus sapientes", "His wisdom is as long as his beard"),
    quote("Doscendo discimus", "By teaching we learn"),
    quote("Bellum se ipsum alet", "War feeds itself"),
    quote("Omnes una manet nox", "One night awaits everyone"),
    quote("Igne natura renovatur integra", "Nature reborn through fire"),
    quote("Nunquam non paratus", "Never unprepared is always ready"),
    quote("Non progredi est regredi", "Not going forward is going backward"),
    quote("Factum fieri infectum non potest", "The deed can't be undone"),
    quote("Nullus agenti dies longus est", "No day is long for hardworking"),
    quote("Eo ipso", "By this act or fact"),
    quote("Dixi", "I have spoken"),
    quote("Caesar non supra grammaticos", "Caesar is not above grammar"),
    quote(
        "Corruptissima republica plurimae leges",
        "The more numerous the laws, the more corrupt the state",
    ),
    quote(
        "De hoc multi multa, Omnes aliquid, Nemo satis",
        "They said many things - all something, no one enough",
    ),
    quote(
        "Accensa domo proximi, Tua quoque periclitatur",
        "When neighbor's house is on fire, your own is in danger",
    ),
    quote("Dum inter homines sumus, Colamus humanitatem", "Among humans, be humane"),
    quote(
        "Omnium Rerum Principia Parva Sunt",
        "All the principles are simple and constant",
    ),
    quote(
        "Disce quasi semper victurus vive quasi cras moriturus",
        "Learn as if you live forever, live as if you die tomorrow",
    ),
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        href: "https://www.linkedin.com/in/yurii-cherkasov-653b213a0/",
        icon: "fab fa-linkedin-in",
    },
    SocialLink {
        href: "https://github.com/yuchdev",
        icon: "fab fa-github-alt",
    },
    SocialLink {
        href: "https://www.facebook.com/yuchdev",
        icon: "fab fa-facebook-f",
    },
    SocialLink {
        href: "https://x.com/yuchdev",
        icon: "fab fa-x-twitter",
    },
    SocialLink {
        href: "https://www.instagram.com/yuchdev",
        icon: "fab fa-instagram",
    },
];

/// Select a quote deterministically from a seed
pub fn pick_quote(seed: u64) -> &'static Quote {
    &QUOTES[(seed % QUOTES.len() as u64) as usize]
}

/// Render a quote; the translation is carried as the element's tooltip
pub fn render_quote(quote: &Quote) -> String {
    format!(
        r#"<p class="latin-quote" title="{}">{}</p>"#,
        html_escape(quote.translation),
        html_escape(quote.latin)
    )
}

/// Render the header's social section
pub fn render_social_links(links: &[SocialLink]) -> String {
    let anchors: Vec<String> = links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer"><i class="{}"></i></a>"#,
                html_escape(link.href),
                html_escape(link.icon)
            )
        })
        .collect();

    format!(r#"<section id="header-social">{}</section>"#, anchors.join(""))
}
