//! Leaderboard API handlers.
//!
//! ```text
//! GET /api/scores
//! POST /api/scores {"name":"Ada","score":4200}
//! ```

use actix_web::{HttpRequest, error::JsonPayloadError, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::ports::SubmitScoreRequest;
use crate::domain::{Error, LeaderboardEntry};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Message returned for any unusable submission body.
pub const MISSING_DATA_MESSAGE: &str = "Datos faltantes";

/// Largest accepted submission body.
pub const MAX_SUBMISSION_BYTES: usize = 16 * 1024;

/// Leaderboard row returned by `GET /api/scores`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreEntryResponse {
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = 4200)]
    pub score: i64,
}

impl From<LeaderboardEntry> for ScoreEntryResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            name: entry.name.into(),
            score: entry.score,
        }
    }
}

/// Submission body for `POST /api/scores`.
///
/// Both fields are required; `null` counts as absent.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitScoreBody {
    #[schema(value_type = String, example = "Ada")]
    pub name: Option<String>,
    #[schema(value_type = i64, example = 4200)]
    pub score: Option<i64>,
}

impl TryFrom<SubmitScoreBody> for SubmitScoreRequest {
    type Error = Error;

    fn try_from(body: SubmitScoreBody) -> Result<Self, Self::Error> {
        match (body.name, body.score) {
            (Some(name), Some(score)) => Ok(Self { name, score }),
            _ => Err(missing_data()),
        }
    }
}

/// Acknowledgement returned after a score is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmitScoreResponse {
    #[schema(example = "success")]
    pub status: String,
}

impl SubmitScoreResponse {
    fn success() -> Self {
        Self {
            status: "success".to_owned(),
        }
    }
}

fn missing_data() -> Error {
    Error::invalid_request(MISSING_DATA_MESSAGE)
}

fn reject_payload(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected score submission payload");
    missing_data().into()
}

/// JSON extractor configuration for score submissions.
///
/// Any content type is accepted. A body that cannot be read as a JSON
/// object (empty, malformed, oversized) becomes the `Datos faltantes`
/// validation error.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use scoreboard::inbound::http::scores::{json_config, submit_score};
///
/// let app = App::new().app_data(json_config()).service(submit_score);
/// ```
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_SUBMISSION_BYTES)
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(reject_payload)
}

/// List the top ten scores, best first.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use scoreboard::inbound::http::scores::list_scores;
///
/// let app = App::new().service(list_scores);
/// ```
#[utoipa::path(
    get,
    path = "/api/scores",
    responses(
        (status = 200, description = "Top scores", body = [ScoreEntryResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Score store unavailable", body = ErrorSchema)
    ),
    tags = ["scores"],
    operation_id = "listScores"
)]
#[get("/api/scores")]
pub async fn list_scores(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ScoreEntryResponse>>> {
    let entries = state.leaderboard.top_scores().await?;
    Ok(web::Json(
        entries.into_iter().map(ScoreEntryResponse::from).collect(),
    ))
}

/// Record a score submission.
///
/// The name is cut to 20 characters, then trimmed; a blank result is stored
/// as `Anónimo`.
#[utoipa::path(
    post,
    path = "/api/scores",
    request_body = SubmitScoreBody,
    responses(
        (status = 200, description = "Score stored", body = SubmitScoreResponse),
        (status = 400, description = "Missing or unparseable name or score", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Score store unavailable", body = ErrorSchema)
    ),
    tags = ["scores"],
    operation_id = "submitScore"
)]
#[post("/api/scores")]
pub async fn submit_score(
    state: web::Data<HttpState>,
    payload: web::Json<Map<String, Value>>,
) -> ApiResult<web::Json<SubmitScoreResponse>> {
    // Deserialising from an object keeps arrays from filling the struct
    // positionally.
    let body: SubmitScoreBody =
        serde_json::from_value(Value::Object(payload.into_inner())).map_err(|err| {
            debug!(error = %err, "rejected score submission fields");
            missing_data()
        })?;
    let request = SubmitScoreRequest::try_from(body)?;

    state.submissions.submit(request).await?;
    Ok(web::Json(SubmitScoreResponse::success()))
}

#[cfg(test)]
#[path = "scores_tests.rs"]
mod tests;
