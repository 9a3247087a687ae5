use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported languages, serialized as ISO 639-2/3 three-letter codes.
///
/// Three-letter codes match the directory conventions of the source
/// material (`zhs`/`zht` distinguish the Chinese scripts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "eng")]
    English,
    #[serde(rename = "zhs")]
    MandarinSimplified,
    #[serde(rename = "zht")]
    MandarinTraditional,
    #[serde(rename = "ces")]
    Czech,
    #[serde(rename = "spa")]
    Spanish,
    #[serde(rename = "rus")]
    Russian,
    #[serde(rename = "por")]
    Portuguese,
    #[serde(rename = "fra")]
    French,
    #[serde(rename = "deu")]
    German,
    #[serde(rename = "kor")]
    Korean,
    #[serde(rename = "jpn")]
    Japanese,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 11] = [
        Language::English,
        Language::MandarinSimplified,
        Language::MandarinTraditional,
        Language::Czech,
        Language::Spanish,
        Language::Russian,
        Language::Portuguese,
        Language::French,
        Language::German,
        Language::Korean,
        Language::Japanese,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::MandarinSimplified => "zhs",
            Language::MandarinTraditional => "zht",
            Language::Czech => "ces",
            Language::Spanish => "spa",
            Language::Russian => "rus",
            Language::Portuguese => "por",
            Language::French => "fra",
            Language::German => "deu",
            Language::Korean => "kor",
            Language::Japanese => "jpn",
        }
    }

    /// Case-insensitive lookup by three-letter code.
    pub fn from_code(code: &str) -> Result<Self, UnknownLanguage> {
        let lower = code.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == lower)
            .ok_or_else(|| UnknownLanguage(code.to_string()))
    }

    /// All valid codes, for error messages listing what would be accepted.
    pub fn valid_codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|lang| lang.code()).collect()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
