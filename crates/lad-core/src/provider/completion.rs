//! Wire format for the remote text-completion service.
//!
//! The service takes a prompt (plus the session id from its previous
//! reply) and answers with free text. Somewhere in that text it is asked to
//! embed a small JSON object such as `{"action": "b", "message": "..."}`.
//! This module builds requests, reads responses and pulls the decision out
//! of the text. Moving the bytes is left to a transport.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::Decision;

/// Keys that name the action explicitly, checked in order.
const ACTION_KEYS: [&str; 2] = ["action", "choice"];

/// Key carrying the AI's commentary.
const COMMENTARY_KEY: &str = "message";

/// Request body for one completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Prompt and session.
    pub input: CompletionInput,
    /// Model parameters, sent empty.
    #[serde(default)]
    pub parameters: Map<String, Value>,
    /// Debug options, sent empty.
    #[serde(default)]
    pub debug: Map<String, Value>,
}

/// The `input` section of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionInput {
    /// The status prompt.
    pub prompt: String,
    /// Session id returned by the previous call, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub session_id: Option<String>,
}

/// Response body of one completion call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The generated output, absent on some failures.
    #[serde(default)]
    pub output: Option<CompletionOutput>,
}

/// The `output` section of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionOutput {
    /// Session id to send with the next call.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Generated text.
    #[serde(default)]
    pub text: Option<String>,
}

/// Build the completion URL for an application.
pub fn completion_endpoint(base: &str, app_id: &str) -> String {
    format!("{}/api/v1/apps/{app_id}/completion", base.trim_end_matches('/'))
}

/// The first `{...}` block in `text` that contains no nested braces.
pub fn find_brace_block(text: &str) -> Option<&str> {
    let mut start = None;
    for (i, c) in text.char_indices() {
        match c {
            '{' => start = Some(i),
            '}' => {
                if let Some(s) = start {
                    return Some(&text[s..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Pull a decision out of free completion text.
///
/// The action is taken from `action` or `choice` when present, otherwise
/// from the first string field other than `message`. `message` becomes the
/// commentary. Returns `None` when there is no parseable object or no
/// action in it.
pub fn extract_decision(text: &str) -> Option<Decision> {
    let block = find_brace_block(text)?;
    let object: Map<String, Value> = match serde_json::from_str(block) {
        Ok(object) => object,
        Err(e) => {
            warn!(error = %e, block, "embedded JSON did not parse");
            return None;
        }
    };

    let action = ACTION_KEYS
        .iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .or_else(|| {
            object
                .iter()
                .filter(|(key, _)| key.as_str() != COMMENTARY_KEY)
                .find_map(|(_, value)| value.as_str())
        })
        .map(str::trim)
        .filter(|a| !a.is_empty())?;

    let commentary = object
        .get(COMMENTARY_KEY)
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(Decision {
        action: action.to_string(),
        commentary,
    })
}

/// Conversation state with the completion service for one game.
#[derive(Debug, Clone, Default)]
pub struct CompletionSession {
    app_id: String,
    session_id: Option<String>,
}

impl CompletionSession {
    /// Start a session for the given application id.
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            session_id: None,
        }
    }

    /// The application id.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Session id from the most recent reply.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Completion URL under `base`.
    pub fn endpoint(&self, base: &str) -> String {
        completion_endpoint(base, &self.app_id)
    }

    /// Build the request for a prompt.
    pub fn request(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest {
            input: CompletionInput {
                prompt: prompt.to_string(),
                session_id: self.session_id.clone(),
            },
            parameters: Map::new(),
            debug: Map::new(),
        }
    }

    /// Read a raw response body, remember its session id and extract the
    /// decision from its text.
    pub fn absorb(&mut self, body: &str) -> Option<Decision> {
        let response: CompletionResponse = match serde_json::from_str(body) {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "completion response is not valid JSON");
                return None;
            }
        };
        let output = response.output?;
        if let Some(id) = output.session_id {
            self.session_id = Some(id);
        }
        let text = output.text?;
        debug!(text = %text, "completion text");
        let decision = extract_decision(&text);
        if decision.is_none() {
            warn!("completion text carried no decision");
        }
        decision
    }
}
