use std::{collections::HashMap, fmt, sync::LazyLock};

/// Icon shown for phrases the table does not know.
pub const UNKNOWN_ICON: &str = "❓";

/// Canonical wttr.in phrases mapped to (Indonesian label, icon).
const ENTRIES: &[(&str, &str, &str)] = &[
    ("Sunny", "Cerah", "☀️"),
    ("Clear", "Cerah", "🌞"),
    ("Partly cloudy", "Berawan Sebagian", "⛅"),
    ("Cloudy", "Berawan", "☁️"),
    ("Overcast", "Mendung", "🌥️"),
    ("Mist", "Berkabut", "🌫️"),
    ("Patchy rain possible", "Kemungkinan Hujan Ringan", "🌦️"),
    ("Light rain", "Hujan Ringan", "🌧️"),
    ("Moderate rain", "Hujan Sedang", "🌧️"),
    ("Heavy rain", "Hujan Lebat", "⛈️"),
    ("Thundery outbreaks possible", "Kemungkinan Badai Petir", "⛈️"),
    ("Light rain shower", "Gerimis", "🌦️"),
    ("Moderate or heavy rain shower", "Hujan Deras", "⛈️"),
    ("Patchy rain nearby", "Hujan di Sekitar", "🌦️"),
];

static GLOBAL: LazyLock<WeatherTranslationTable> = LazyLock::new(WeatherTranslationTable::new);

/// A localized weather label with its icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation<'a> {
    pub label: &'a str,
    pub icon: &'a str,
}

impl fmt::Display for Translation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.icon)
    }
}

/// Immutable lookup from weather phrases to localized labels.
#[derive(Debug, Clone)]
pub struct WeatherTranslationTable {
    entries: HashMap<&'static str, (&'static str, &'static str)>,
}

impl WeatherTranslationTable {
    pub fn new() -> Self {
        let entries = ENTRIES
            .iter()
            .map(|&(phrase, label, icon)| (phrase, (label, icon)))
            .collect();

        Self { entries }
    }

    /// Process-wide table, built on first use.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Exact, case-sensitive lookup. Unknown phrases come back unchanged
    /// with [`UNKNOWN_ICON`].
    pub fn lookup<'a>(&self, condition: &'a str) -> Translation<'a> {
        match self.entries.get(condition) {
            Some(&(label, icon)) => Translation { label, icon },
            None => Translation { label: condition, icon: UNKNOWN_ICON },
        }
    }
}

impl Default for WeatherTranslationTable {
    fn default() -> Self {
        Self::new()
    }
}
