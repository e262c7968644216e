use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Narrative languages supported by the routing service.
#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    #[serde(rename = "ca-ES")]
    CaEs,
    #[serde(rename = "cs-CZ")]
    CsCz,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-US-x-pirate")]
    Pirate,
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "hi-IN")]
    HiIn,
    #[serde(rename = "it-IT")]
    ItIt,
    #[serde(rename = "pt-PT")]
    PtPt,
    #[serde(rename = "ru-RU")]
    RuRu,
    #[serde(rename = "sl-SI")]
    SlSi,
    #[serde(rename = "sv-SE")]
    SvSe,
}

impl Language {
    pub const ALL: [Language; 13] = [
        Language::CaEs,
        Language::CsCz,
        Language::DeDe,
        Language::EnUs,
        Language::Pirate,
        Language::EsEs,
        Language::FrFr,
        Language::HiIn,
        Language::ItIt,
        Language::PtPt,
        Language::RuRu,
        Language::SlSi,
        Language::SvSe,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Language::CaEs => "ca-ES",
            Language::CsCz => "cs-CZ",
            Language::DeDe => "de-DE",
            Language::EnUs => "en-US",
            Language::Pirate => "en-US-x-pirate",
            Language::EsEs => "es-ES",
            Language::FrFr => "fr-FR",
            Language::HiIn => "hi-IN",
            Language::ItIt => "it-IT",
            Language::PtPt => "pt-PT",
            Language::RuRu => "ru-RU",
            Language::SlSi => "sl-SI",
            Language::SvSe => "sv-SE",
        }
    }

    pub fn supported_tags() -> impl Iterator<Item = &'static str> {
        Language::ALL.into_iter().map(|language| language.tag())
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.tag() == s)
            .ok_or_else(|| format!("Unsupported language {s}"))
    }
}

/// Picks the narrative language for `locale`.
///
/// Uses `<lang>-<REGION>` when it is one of the `supported` tags, otherwise the bare
/// language subtag. The bare subtag is not checked against `supported`.
pub fn resolve_language<'a, I>(locale: &Locale, supported: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    if let Some(region) = locale.region.as_deref() {
        let candidate = format!("{}-{}", locale.language, region);
        if supported.into_iter().any(|tag| tag == candidate) {
            return candidate;
        }
    }

    locale.language.clone()
}
