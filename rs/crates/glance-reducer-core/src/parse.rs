use crate::{Action, Page};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("empty action")]
    Empty,
    #[error("invalid action json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing \"action\" field")]
    MissingAction,
    #[error("unknown action '{0}'")]
    Unknown(String),
    #[error("{action}: missing {arg}")]
    MissingArgument { action: &'static str, arg: &'static str },
    #[error("{action}: invalid post id '{value}'")]
    InvalidId { action: &'static str, value: String },
}

/// JSON envelope posted by hosts: `{"action":"name","payload":{...}}`.
#[derive(Debug, Deserialize)]
struct Envelope {
    action: Option<String>,
    #[serde(default)]
    payload: Option<Value>,
}

/// Parse an action from either a compact token (`like_post:2`) or a JSON
/// envelope. Event bindings in the view tree use the token form, and hosts
/// forward that token as the envelope's `action`.
pub fn parse_action(input: &str) -> Result<Action, ActionError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ActionError::Empty);
    }
    if input.starts_with('{') {
        let env: Envelope = serde_json::from_str(input)?;
        let name = env.action.ok_or(ActionError::MissingAction)?;
        return from_parts(&name, env.payload.as_ref());
    }
    from_parts(input, None)
}

fn from_parts(name: &str, payload: Option<&Value>) -> Result<Action, ActionError> {
    let (name, inline_arg) = match name.split_once(':') {
        Some((n, a)) => (n.trim(), Some(a.trim())),
        None => (name.trim(), None),
    };

    match name {
        "toggle_role" => Ok(Action::ToggleRole),
        "add_post" => Ok(Action::AddPost),
        "set_page" | "set_active_page" => {
            let page = inline_arg
                .map(str::to_string)
                .or_else(|| payload_str(payload, "page"))
                .ok_or(ActionError::MissingArgument { action: "set_page", arg: "page" })?;
            Ok(Action::SetActivePage(Page::parse(&page)))
        }
        "like_post" => Ok(Action::LikePost(post_id("like_post", inline_arg, payload)?)),
        "delete_post" => Ok(Action::DeletePost(post_id("delete_post", inline_arg, payload)?)),
        other => Err(ActionError::Unknown(other.to_string())),
    }
}

fn payload_str(payload: Option<&Value>, field: &str) -> Option<String> {
    payload?.get(field)?.as_str().map(str::to_string)
}

fn post_id(
    action: &'static str,
    inline_arg: Option<&str>,
    payload: Option<&Value>,
) -> Result<u64, ActionError> {
    if let Some(arg) = inline_arg {
        return parse_id(action, arg);
    }
    match payload.and_then(|p| p.get("id")) {
        Some(Value::Number(n)) => n.as_u64().ok_or_else(|| ActionError::InvalidId {
            action,
            value: n.to_string(),
        }),
        Some(Value::String(s)) => parse_id(action, s),
        Some(other) => Err(ActionError::InvalidId { action, value: other.to_string() }),
        None => Err(ActionError::MissingArgument { action, arg: "id" }),
    }
}

fn parse_id(action: &'static str, s: &str) -> Result<u64, ActionError> {
    s.trim().parse().map_err(|_| ActionError::InvalidId {
        action,
        value: s.to_string(),
    })
}
