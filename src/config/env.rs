use std::env;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const API_BASE_VAR: &str = "OPENAI_API_BASE";

/// Chat endpoint settings, read once at startup.
/// Missing values are kept as `None`; only a chat call complains about them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSettings {
    pub api_key: Option<String>,
    pub api_base: Option<String>,
}

impl ChatSettings {
    pub fn from_env() -> Self {
        Self {
            api_key: load_optional(API_KEY_VAR),
            api_base: load_optional(API_BASE_VAR),
        }
    }
}

fn load_optional(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}
