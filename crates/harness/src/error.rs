use thiserror::Error;

use crate::hooks::{HookScope, Phase};

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("unknown group: {0}")]
    UnknownGroup(String),

    #[error("repetitions must be at least 1, got {0}")]
    InvalidRepetitions(u32),

    #[error("argument {index} missing: predicate received {arity} argument(s)")]
    MissingArgument { index: usize, arity: usize },

    #[error("argument {index}: expected {expected}, got {got}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        got: &'static str,
    },

    /// Raised by user code inside a predicate or hook.
    #[error("{0}")]
    Raised(String),

    #[error("{phase} hook ({scope}) failed: {source}")]
    Hook {
        phase: Phase,
        scope: HookScope,
        source: Box<HarnessError>,
    },

    #[error("claim `{claim}` in group `{group}` aborted: {source}")]
    Aborted {
        group: String,
        claim: String,
        source: Box<HarnessError>,
    },

    #[error("invalid config: {0}")]
    Config(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    pub fn raised(msg: impl Into<String>) -> Self {
        HarnessError::Raised(msg.into())
    }
}

/// Produce a structured JSON diagnostic from a HarnessError.
pub fn error_to_json(err: &HarnessError) -> String {
    let (kind, detail) = match err {
        HarnessError::UnknownGroup(name) => ("unknown_group", name.clone()),
        HarnessError::InvalidRepetitions(n) => ("invalid_repetitions", format!("{n}")),
        HarnessError::MissingArgument { index, arity } => {
            ("missing_argument", format!("index {index}, arity {arity}"))
        }
        HarnessError::TypeMismatch { index, expected, got } => {
            ("type_mismatch", format!("argument {index}: expected {expected}, got {got}"))
        }
        HarnessError::Raised(msg) => ("raised", msg.clone()),
        HarnessError::Hook { phase, scope, source } => {
            ("hook_failed", format!("{phase} ({scope}): {source}"))
        }
        HarnessError::Aborted { group, claim, source } => {
            ("claim_aborted", format!("{group}/{claim}: {source}"))
        }
        HarnessError::Config(msg) => ("config", msg.clone()),
        HarnessError::Json(e) => ("json", format!("{e}")),
        HarnessError::Io(e) => ("io", format!("{e}")),
    };
    serde_json::to_string_pretty(&serde_json::json!({
        "error": kind,
        "detail": detail,
    })).unwrap_or_default()
}
