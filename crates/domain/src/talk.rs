use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::Language;

/// Identifier for a talk, e.g. `2025-10-58-oaks`. Non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TalkId(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("talk id cannot be empty")]
pub struct InvalidTalkId;

impl TalkId {
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidTalkId> {
        let value = value.into();
        if value.is_empty() {
            return Err(InvalidTalkId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TalkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A conference talk with metadata, independent of any language version.
#[derive(Debug, Clone)]
pub struct Talk {
    pub id: TalkId,
    pub title: String,
    pub speaker: String,
    pub date: NaiveDate,
    pub conference: String,
    pub available_languages: Vec<Language>,
}

impl Talk {
    pub fn has_language(&self, language: Language) -> bool {
        self.available_languages.contains(&language)
    }
}

/// A specific language version of a talk and its on-disk assets.
#[derive(Debug, Clone)]
pub struct TalkVersion {
    pub talk_id: TalkId,
    pub language: Language,
    pub text_content: String,
    pub audio_path: PathBuf,
    pub text_path: PathBuf,
    pub alignment_path: Option<PathBuf>,
}

impl TalkVersion {
    pub fn has_alignment(&self) -> bool {
        self.alignment_path.is_some()
    }
}
