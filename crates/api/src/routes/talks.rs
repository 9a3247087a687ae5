use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::{error::ApiError, state::AppState};
use linguatalk_domain::{Talk, TalkId, TalkRepository};

#[derive(Debug, Serialize)]
pub struct TalkResponse {
    pub id: String,
    pub title: String,
    pub speaker: String,
    pub date: String,
    pub conference: String,
    pub available_languages: Vec<&'static str>,
}

fn to_response(talk: Talk) -> TalkResponse {
    TalkResponse {
        id: talk.id.to_string(),
        title: talk.title,
        speaker: talk.speaker,
        date: talk.date.to_string(),
        conference: talk.conference,
        available_languages: talk
            .available_languages
            .iter()
            .map(|lang| lang.code())
            .collect(),
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let talks = state.talks.get_all().await?;
    let talks: Vec<TalkResponse> = talks.into_iter().map(to_response).collect();

    Ok(Json(serde_json::json!({ "talks": talks })))
}

pub async fn get(
    State(state): State<AppState>,
    Path(talk_id): Path<String>,
) -> Result<Json<TalkResponse>, ApiError> {
    let talk_id =
        TalkId::new(talk_id).map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let talk = state
        .talks
        .get_by_id(&talk_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("talk '{talk_id}' not found")))?;

    Ok(Json(to_response(talk)))
}
