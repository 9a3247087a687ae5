use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::{AlignmentIndex, Language, Talk, TalkId, TalkVersion};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed alignment file {path}: {reason}")]
    MalformedAlignment { path: PathBuf, reason: String },
    #[error("asset recorded as present but missing on disk: {path}")]
    AssetMissing { path: PathBuf },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to the talk catalog and its language versions.
#[async_trait]
pub trait TalkRepository: Send + Sync {
    async fn get_all(&self) -> StoreResult<Vec<Talk>>;

    async fn get_by_id(&self, talk_id: &TalkId) -> StoreResult<Option<Talk>>;

    async fn get_version(
        &self,
        talk_id: &TalkId,
        language: Language,
    ) -> StoreResult<Option<TalkVersion>>;

    async fn available_languages(&self, talk_id: &TalkId) -> StoreResult<Vec<Language>>;
}

/// Load/save access to per-version alignment data.
///
/// A missing alignment is `Ok(None)`: talks are playable without
/// highlighting. A file that exists but cannot be read or parsed is an
/// `Err` — a distinct channel from absence, never silently swallowed.
#[async_trait]
pub trait AlignmentRepository: Send + Sync {
    async fn load(
        &self,
        talk_id: &TalkId,
        language: Language,
    ) -> StoreResult<Option<AlignmentIndex>>;

    async fn save(&self, index: &AlignmentIndex) -> StoreResult<()>;

    async fn exists(&self, talk_id: &TalkId, language: Language) -> bool;
}
