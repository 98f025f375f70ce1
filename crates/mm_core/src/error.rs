use thiserror::Error;

/// Errors surfaced at the JSON boundary.
///
/// The engine core itself is total: missing win rates, unparseable ranges and
/// infeasible requests all resolve to neutral defaults or empty results, never
/// errors. Only malformed requests reach this type.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported schema version: {found}")]
    UnsupportedSchema { found: u8 },

    #[error("Unknown fighter id: {id}")]
    UnknownFighter { id: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
