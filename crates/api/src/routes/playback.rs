use axum::{
    Json,
    body::Body,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};
use linguatalk_domain::{
    AlignmentIndex, AlignmentRepository, Language, StoreError, TalkId, TalkRepository, TalkVersion,
};

fn parse_refs(talk_id: &str, language: &str) -> Result<(TalkId, Language), ApiError> {
    let talk_id = TalkId::new(talk_id).map_err(|err| ApiError::BadRequest(err.to_string()))?;
    let language = Language::from_code(language).map_err(|_| {
        ApiError::BadRequest(format!(
            "unknown language code '{language}'; valid codes: {}",
            Language::valid_codes().join(", ")
        ))
    })?;
    Ok((talk_id, language))
}

async fn require_version(
    state: &AppState,
    talk_id: &TalkId,
    language: Language,
) -> Result<TalkVersion, ApiError> {
    state
        .talks
        .get_version(talk_id, language)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("no '{language}' version of talk '{talk_id}'"))
        })
}

async fn require_alignment(
    state: &AppState,
    talk_id: &TalkId,
    language: Language,
) -> Result<AlignmentIndex, ApiError> {
    state
        .alignments
        .load(talk_id, language)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "no alignment for '{language}' version of talk '{talk_id}'; \
                 playback works without highlighting"
            ))
        })
}

pub async fn audio(
    State(state): State<AppState>,
    Path((talk_id, language)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let (talk_id, language) = parse_refs(&talk_id, &language)?;
    let version = require_version(&state, &talk_id, language).await?;

    // The version scan just saw this file; losing it between the scan and
    // the read is data corruption, not a 404.
    let bytes = tokio::fs::read(&version.audio_path)
        .await
        .map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => StoreError::AssetMissing {
                path: version.audio_path.clone(),
            },
            _ => StoreError::Io {
                path: version.audio_path.clone(),
                source,
            },
        })?;

    Ok((
        [(header::CONTENT_TYPE, "audio/mpeg")],
        Body::from(bytes),
    )
        .into_response())
}

pub async fn text(
    State(state): State<AppState>,
    Path((talk_id, language)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (talk_id, language) = parse_refs(&talk_id, &language)?;
    let version = require_version(&state, &talk_id, language).await?;

    Ok(Json(serde_json::json!({
        "talk_id": talk_id,
        "language": language,
        "text_content": version.text_content,
        "has_alignment": version.has_alignment(),
    })))
}

pub async fn alignment(
    State(state): State<AppState>,
    Path((talk_id, language)): Path<(String, String)>,
) -> Result<Json<AlignmentIndex>, ApiError> {
    let (talk_id, language) = parse_refs(&talk_id, &language)?;
    let index = require_alignment(&state, &talk_id, language).await?;

    Ok(Json(index))
}

#[derive(Debug, Deserialize)]
pub struct TimeQuery {
    time: Option<String>,
}

/// `time` arrives as a string so a missing or non-numeric value is our 400
/// with a useful message instead of a bare query rejection.
fn parse_time(query: TimeQuery) -> Result<f64, ApiError> {
    let raw = query
        .time
        .ok_or_else(|| ApiError::BadRequest("missing 'time' query parameter".to_string()))?;
    raw.parse::<f64>()
        .map_err(|_| ApiError::BadRequest(format!("'time' must be a number, got '{raw}'")))
}

pub async fn segment_at(
    State(state): State<AppState>,
    Path((talk_id, language)): Path<(String, String)>,
    Query(query): Query<TimeQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (talk_id, language) = parse_refs(&talk_id, &language)?;
    let time = parse_time(query)?;
    let index = require_alignment(&state, &talk_id, language).await?;

    match index.segment_index_at(time) {
        Some(position) => Ok(Json(serde_json::json!({
            "segment_index": position,
            "segment": &index.segments[position],
        }))),
        None => Err(ApiError::NotFound(format!("no segment at time {time}"))),
    }
}

pub async fn word_at(
    State(state): State<AppState>,
    Path((talk_id, language)): Path<(String, String)>,
    Query(query): Query<TimeQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (talk_id, language) = parse_refs(&talk_id, &language)?;
    let time = parse_time(query)?;
    let index = require_alignment(&state, &talk_id, language).await?;

    match index.word_at(time) {
        Some(word) => Ok(Json(serde_json::to_value(word).map_err(|err| {
            ApiError::Internal(err.to_string())
        })?)),
        None => Err(ApiError::NotFound(format!("no word at time {time}"))),
    }
}
