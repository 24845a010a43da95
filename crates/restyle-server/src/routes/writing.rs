use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use restyle_core::{GenerationSettings, RestyleError, Style};
use restyle_model::GenerateRequest;
use restyle_prompts::PromptInput;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use super::AppState;

const GENERIC_FAILURE: &str = "Failed to process writing request";

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/writing", post(rewrite).options(preflight))
}

#[derive(Debug, Default, Deserialize)]
pub struct WritingRequest {
    pub text: Option<String>,
    pub style: Option<String>,
    /// Free-form instructions, used with the `freestyle` style.
    pub freestyle: Option<String>,
}

impl WritingRequest {
    /// Check the request and borrow it as prompt input.
    pub fn validate(&self) -> Result<PromptInput<'_>, RestyleError> {
        let text = self
            .text
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| RestyleError::InvalidInput("Text is required".into()))?;

        let style = match self.style.as_deref() {
            Some(s) => s.parse::<Style>()?,
            None => Style::default(),
        };

        let instructions = self.freestyle.as_deref().filter(|i| !i.trim().is_empty());
        if style.requires_instructions() && instructions.is_none() {
            return Err(RestyleError::InvalidInput(
                "Instructions are required for freestyle".into(),
            ));
        }

        Ok(PromptInput {
            text,
            style,
            instructions,
        })
    }
}

async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn rewrite(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    // Browsers may post JSON as text/plain, so the content type is not checked.
    let req: WritingRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("rejected writing request body: {e}");
        error_body(StatusCode::BAD_REQUEST, "Invalid request body")
    })?;

    let input = req.validate().map_err(to_error)?;
    let request = GenerateRequest {
        prompt: restyle_prompts::assemble_prompt(&input),
        settings: GenerationSettings::for_style(input.style),
    };

    debug!(
        style = %input.style,
        backend = state.model.name(),
        model = state.model.model_hint().unwrap_or("-"),
        "rewriting text"
    );

    state
        .model
        .generate(&request)
        .await
        .map(|result| Json(json!({ "result": result })))
        .map_err(to_error)
}

fn error_body(status: StatusCode, msg: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": msg })))
}

fn to_error(e: RestyleError) -> (StatusCode, Json<Value>) {
    match e {
        RestyleError::InvalidInput(msg) => error_body(StatusCode::BAD_REQUEST, &msg),
        RestyleError::Upstream(_) | RestyleError::InvalidResponse(_) => {
            error!("Error processing writing request: {e}");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
        }
    }
}
