//! Handler for the chatbot ask endpoint
//!
//! Every exchange is recorded to chat history, so asking is a mutation.

use axum::extract::State;
use axum::Json;
use portal_core::ops::chatbot_ops::record_exchange;
use portal_core::queries::answer_query;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::Identity;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskBody {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

pub async fn ask(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<AskBody>,
) -> Result<Json<Value>, ApiError> {
    let member_id = identity.member_id.clone();

    let reply = state
        .mutate("chatbot_ask", move |store| {
            let reply = answer_query(store, &body.message);
            record_exchange(
                store,
                &member_id,
                body.message,
                reply.reply.clone(),
                body.session_id,
                reply.matched_faq_id.clone(),
            )?;
            Ok(reply)
        })
        .await?;

    Ok(Json(json!({
        "success": true,
        "reply": reply.reply,
        "matchedFaqId": reply.matched_faq_id,
    })))
}
