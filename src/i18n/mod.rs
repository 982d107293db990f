//! Interface strings in English, French and Spanish.

mod en;
mod es;
mod fr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Self::En, Self::Fr, Self::Es];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Es => "Español",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Self::En => "🇺🇸",
            Self::Fr => "🇫🇷",
            Self::Es => "🇪🇸",
        }
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        match self {
            Self::En => en::lookup(key),
            Self::Fr => fr::lookup(key),
            Self::Es => es::lookup(key),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    /// Accepts bare codes and region tags (`"fr-CA"`, `"es_MX"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match primary.as_str() {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            "es" => Ok(Self::Es),
            _ => Err(format!("unsupported locale: {}", s)),
        }
    }
}

/// Looks `key` up for `locale`, then in English, then gives the key back.
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    locale
        .lookup(key)
        .or_else(|| Locale::En.lookup(key))
        .unwrap_or_else(|| {
            log::warn!("missing translation for {key:?}");
            key
        })
}
