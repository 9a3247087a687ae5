use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use futures::future;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use linguatalk_domain::{
    Language, StoreError, StoreResult, Talk, TalkId, TalkRepository, TalkVersion,
};

/// Talk catalog backed by a `talks/{talk_id}/{lang}/` directory tree.
///
/// The store is a stateless handle on the directory path: every call
/// re-reads the filesystem, so externally produced talks appear without a
/// restart. Metadata comes from the directory name (`YYYY-MM-...-speaker`)
/// and the first substantial line of the text file.
pub struct FileTalkStore {
    talks_dir: PathBuf,
}

impl FileTalkStore {
    pub fn new(talks_dir: impl Into<PathBuf>) -> Self {
        Self {
            talks_dir: talks_dir.into(),
        }
    }

    fn talk_dir(&self, talk_id: &TalkId) -> PathBuf {
        self.talks_dir.join(talk_id.as_str())
    }

    async fn load_talk(&self, talk_id: TalkId) -> StoreResult<Option<Talk>> {
        let languages = self.available_languages(&talk_id).await?;
        if languages.is_empty() {
            return Ok(None);
        }

        let date = parse_date(talk_id.as_str());
        let conference = conference_name(date);
        let speaker = parse_speaker(talk_id.as_str());

        // English text drives the title when present, else the first
        // available language.
        let primary = if languages.contains(&Language::English) {
            Language::English
        } else {
            languages[0]
        };
        let fallback = humanize(talk_id.as_str());
        let title = match self.read_text(&talk_id, primary).await {
            Ok(Some(text)) => extract_title(&text).unwrap_or(fallback),
            Ok(None) => fallback,
            Err(err) => {
                warn!(talk_id = %talk_id, error = %err, "failed to read text for title");
                fallback
            }
        };

        Ok(Some(Talk {
            id: talk_id,
            title,
            speaker,
            // Undated directories sort last under the epoch default.
            date: date.unwrap_or_default(),
            conference,
            available_languages: languages,
        }))
    }

    async fn read_text(&self, talk_id: &TalkId, language: Language) -> StoreResult<Option<String>> {
        let dir = self.talk_dir(talk_id).join(language.code());
        match first_with_extension(&dir, "txt").await? {
            Some(path) => {
                let text = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| StoreError::Io { path, source })?;
                Ok(Some(text))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl TalkRepository for FileTalkStore {
    async fn get_all(&self) -> StoreResult<Vec<Talk>> {
        let mut entries = match tokio::fs::read_dir(&self.talks_dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(dir = %self.talks_dir.display(), "talks directory does not exist");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.talks_dir.clone(),
                    source,
                });
            }
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|source| StoreError::Io {
            path: self.talks_dir.clone(),
            source,
        })? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || !entry.path().is_dir() {
                continue;
            }
            match TalkId::new(name) {
                Ok(id) => ids.push(id),
                Err(_) => continue,
            }
        }

        let loaded = future::join_all(ids.into_iter().map(|id| self.load_talk(id))).await;

        let mut talks = Vec::new();
        for result in loaded {
            match result {
                Ok(Some(talk)) => talks.push(talk),
                // Incomplete directories (no language with both text and
                // audio) are skipped, not errors.
                Ok(None) => {}
                Err(err) => warn!(error = %err, "skipping unreadable talk directory"),
            }
        }

        talks.sort_by(|a, b| b.date.cmp(&a.date));
        debug!(count = talks.len(), "scanned talk catalog");
        Ok(talks)
    }

    async fn get_by_id(&self, talk_id: &TalkId) -> StoreResult<Option<Talk>> {
        if !self.talk_dir(talk_id).is_dir() {
            return Ok(None);
        }
        self.load_talk(talk_id.clone()).await
    }

    async fn get_version(
        &self,
        talk_id: &TalkId,
        language: Language,
    ) -> StoreResult<Option<TalkVersion>> {
        let dir = self.talk_dir(talk_id).join(language.code());
        let (text_path, audio_path) = match (
            first_with_extension(&dir, "txt").await?,
            first_with_extension(&dir, "mp3").await?,
        ) {
            (Some(text), Some(audio)) => (text, audio),
            _ => return Ok(None),
        };

        let text_content = tokio::fs::read_to_string(&text_path)
            .await
            .map_err(|source| StoreError::Io {
                path: text_path.clone(),
                source,
            })?;

        let alignment = dir.join("alignment.json");
        let alignment_path = tokio::fs::try_exists(&alignment)
            .await
            .unwrap_or(false)
            .then_some(alignment);

        Ok(Some(TalkVersion {
            talk_id: talk_id.clone(),
            language,
            text_content,
            audio_path,
            text_path,
            alignment_path,
        }))
    }

    async fn available_languages(&self, talk_id: &TalkId) -> StoreResult<Vec<Language>> {
        let dir = self.talk_dir(talk_id);
        let checks = Language::ALL.map(|language| {
            let version_dir = dir.join(language.code());
            async move { (language, has_assets(&version_dir).await) }
        });
        let results = future::join_all(checks).await;
        Ok(results
            .into_iter()
            .filter_map(|(language, complete)| complete.then_some(language))
            .collect())
    }
}

/// A version directory counts only when it holds both text and audio.
async fn has_assets(dir: &Path) -> bool {
    matches!(first_with_extension(dir, "txt").await, Ok(Some(_)))
        && matches!(first_with_extension(dir, "mp3").await, Ok(Some(_)))
}

/// First file in `dir` with the given extension, in name order so repeated
/// scans pick the same file.
async fn first_with_extension(dir: &Path, extension: &str) -> StoreResult<Option<PathBuf>> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: dir.to_path_buf(),
                source,
            });
        }
    };

    let mut matches = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            matches.push(path);
        }
    }
    matches.sort();
    Ok(matches.into_iter().next())
}

/// `YYYY-MM-...` prefix of a directory name, pinned to the first of the
/// month (talk IDs carry no day).
fn parse_date(dir_name: &str) -> Option<NaiveDate> {
    let mut parts = dir_name.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    if !(1000..=9999).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn conference_name(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => match date.month() {
            4 => format!("April {} General Conference", date.year()),
            10 => format!("October {} General Conference", date.year()),
            _ => format!("{} General Conference", date.year()),
        },
        None => "General Conference".to_string(),
    }
}

/// Trailing alphabetic component of the directory name, title-cased.
fn parse_speaker(dir_name: &str) -> String {
    dir_name
        .rsplit('-')
        .next()
        .filter(|last| !last.is_empty() && last.chars().all(|c| c.is_alphabetic()))
        .map(title_case)
        .unwrap_or_else(|| "Unknown Speaker".to_string())
}

/// First substantial line of a text file: not a date, URL, or page marker.
fn extract_title(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| {
            !line.is_empty()
                && line.chars().any(|c| c.is_alphabetic())
                && !line.starts_with("http://")
                && !line.starts_with("https://")
                && !line.to_ascii_lowercase().starts_with("page ")
                && parse_date(line).is_none()
        })
        .map(str::to_string)
}

fn humanize(dir_name: &str) -> String {
    dir_name
        .split('-')
        .filter(|part| !part.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().chars()).collect(),
        None => String::new(),
    }
}
