use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use linguatalk_domain::{
    AlignmentIndex, AlignmentRepository, Language, SegmentSpan, StoreError, StoreResult, TalkId,
};

const ALIGNMENT_FILENAME: &str = "alignment.json";
const ALIGNMENT_FORMAT_VERSION: u32 = 1;

/// Alignment files under `talks/{talk_id}/{lang}/alignment.json`.
///
/// The files are produced by offline alignment tooling; this store reads
/// them into an [`AlignmentIndex`] and writes them back with a format
/// version and generation timestamp. Unknown fields in a stored document
/// are ignored on load, so readers tolerate newer producers.
pub struct FileAlignmentStore {
    talks_dir: PathBuf,
}

/// On-disk document shape. Load goes straight to [`AlignmentIndex`]
/// (serde skips the extra fields); save adds them back.
#[derive(Serialize)]
struct AlignmentDocument<'a> {
    version: u32,
    generated_at: DateTime<Utc>,
    talk_id: &'a TalkId,
    language: Language,
    segments: &'a [SegmentSpan],
}

impl FileAlignmentStore {
    pub fn new(talks_dir: impl Into<PathBuf>) -> Self {
        Self {
            talks_dir: talks_dir.into(),
        }
    }

    fn alignment_path(&self, talk_id: &TalkId, language: Language) -> PathBuf {
        self.talks_dir
            .join(talk_id.as_str())
            .join(language.code())
            .join(ALIGNMENT_FILENAME)
    }
}

#[async_trait]
impl AlignmentRepository for FileAlignmentStore {
    /// `Ok(None)` when no alignment file exists. A file that exists but
    /// cannot be read or parsed is an error, not a silent absence — the
    /// two outcomes mean different things to the caller.
    async fn load(
        &self,
        talk_id: &TalkId,
        language: Language,
    ) -> StoreResult<Option<AlignmentIndex>> {
        let path = self.alignment_path(talk_id, language);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(talk_id = %talk_id, language = %language, "no alignment file");
                return Ok(None);
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let index: AlignmentIndex =
            serde_json::from_str(&raw).map_err(|err| StoreError::MalformedAlignment {
                path,
                reason: err.to_string(),
            })?;
        debug!(
            talk_id = %talk_id,
            language = %language,
            segments = index.segments.len(),
            "loaded alignment"
        );
        Ok(Some(index))
    }

    async fn save(&self, index: &AlignmentIndex) -> StoreResult<()> {
        let path = self.alignment_path(&index.talk_id, index.language);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let document = AlignmentDocument {
            version: ALIGNMENT_FORMAT_VERSION,
            generated_at: Utc::now(),
            talk_id: &index.talk_id,
            language: index.language,
            segments: &index.segments,
        };
        let json = serde_json::to_string_pretty(&document).map_err(|err| {
            StoreError::MalformedAlignment {
                path: path.clone(),
                reason: err.to_string(),
            }
        })?;

        tokio::fs::write(&path, json)
            .await
            .map_err(|source| StoreError::Io { path, source })
    }

    async fn exists(&self, talk_id: &TalkId, language: Language) -> bool {
        tokio::fs::try_exists(self.alignment_path(talk_id, language))
            .await
            .unwrap_or(false)
    }
}
