//! Axum route handlers for the chat assistant.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::chat::prompts::{ASSISTANT_PERSONA, PERSONA_ACKNOWLEDGEMENT};
use crate::chat::{ChatError, ChatMessage, ChatRole};
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::{load_or_default, save_value, AI_KEY_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A message previously shown in the chat window.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTurn {
    pub sender: Sender,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyRequest {
    pub api_key: String,
}

/// Persona prompt, its acknowledgement, the prior turns, then the new message.
pub fn build_history(previous: &[ChatTurn], message: &str) -> Vec<ChatMessage> {
    let mut history = Vec::with_capacity(previous.len() + 3);
    history.push(ChatMessage::new(ChatRole::User, ASSISTANT_PERSONA));
    history.push(ChatMessage::new(ChatRole::Model, PERSONA_ACKNOWLEDGEMENT));
    history.extend(previous.iter().map(|turn| {
        let role = match turn.sender {
            Sender::User => ChatRole::User,
            Sender::Bot => ChatRole::Model,
        };
        ChatMessage::new(role, turn.text.clone())
    }));
    history.push(ChatMessage::new(ChatRole::User, message));
    history
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let api_key: String = load_or_default(state.store.as_ref(), AI_KEY_KEY).await?;
    if api_key.trim().is_empty() {
        return Err(AppError::Validation(
            "No API key saved. Save your Gemini API key before chatting.".to_string(),
        ));
    }

    let history = build_history(&request.history, &request.message);
    let reply = match state.chat.generate(&api_key, &history).await {
        Ok(reply) => reply,
        Err(e) => {
            if is_rejected_key(&e) {
                warn!("Chat provider rejected the saved API key, clearing it");
                state.store.remove(AI_KEY_KEY).await?;
            }
            return Err(e.into());
        }
    };

    info!("Chat reply generated ({} prior turns)", request.history.len());
    Ok(Json(ChatResponse { reply }))
}

/// A 403, or a provider message mentioning the key, means the saved key is unusable.
fn is_rejected_key(error: &ChatError) -> bool {
    match error {
        ChatError::Api { status, message } => *status == 403 || message.contains("key"),
        _ => false,
    }
}

/// PUT /api/v1/chat/key
pub async fn handle_save_api_key(
    State(state): State<AppState>,
    Json(request): Json<ApiKeyRequest>,
) -> Result<StatusCode, AppError> {
    let api_key = request.api_key.trim();
    if api_key.is_empty() {
        return Err(AppError::Validation("apiKey cannot be empty".to_string()));
    }
    save_value(state.store.as_ref(), AI_KEY_KEY, &api_key).await?;
    Ok(StatusCode::NO_CONTENT)
}
