use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("rule '{rule}': invalid content pattern: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule '{rule}': invalid path glob '{glob}': {source}")]
    InvalidGlob {
        rule: String,
        glob: String,
        #[source]
        source: globset::Error,
    },

    #[error("duplicate rule id: {0}")]
    DuplicateRuleId(String),

    #[error("rule '{0}': empty path glob list — a rule scoped to nothing never fires")]
    EmptyPathGlobs(String),

    #[error("protected entry '{pattern}': invalid glob: {source}")]
    InvalidProtectedGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GateError>;
