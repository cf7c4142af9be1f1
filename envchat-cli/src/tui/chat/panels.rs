//! Static sidebar content

use rand::seq::IndexedRandom;

/// Longest recent-question label before it is shortened
pub const LABEL_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fact {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub icon: &'static str,
    pub text: &'static str,
    pub url: &'static str,
}

pub static FACTS: [Fact; 4] = [
    Fact {
        icon: "🌍",
        text: "Nuclear energy prevents 2 billion tons of CO2 emissions annually",
    },
    Fact {
        icon: "⚡",
        text: "1 nuclear reactor powers 1 million homes with clean energy",
    },
    Fact {
        icon: "🔄",
        text: "Nuclear has the highest capacity factor of any energy source",
    },
    Fact {
        icon: "🌱",
        text: "Nuclear energy saves 80,000+ acres of land compared to solar",
    },
];

pub static RESOURCES: [Resource; 4] = [
    Resource {
        icon: "📚",
        text: "IAEA Nuclear Energy Guide",
        url: "https://www.iaea.org/topics/nuclear-energy",
    },
    Resource {
        icon: "🌐",
        text: "World Nuclear Association",
        url: "https://world-nuclear.org/",
    },
    Resource {
        icon: "🔬",
        text: "EPA Environmental Resources",
        url: "https://www.epa.gov/environmental-topics",
    },
    Resource {
        icon: "📊",
        text: "Energy Statistics Database",
        url: "https://www.eia.gov/",
    },
];

/// Pick the fact shown for this run
pub fn random_fact() -> &'static Fact {
    FACTS.choose(&mut rand::rng()).unwrap_or(&FACTS[0])
}

/// Shorten to `max` chars followed by `...`
pub fn truncate_label(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
