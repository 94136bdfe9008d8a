use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Clause {0} not found in the active document")]
    ClauseNotFound(u32),

    #[error("Stale generation token {token} (current is {current})")]
    StaleGeneration { token: u64, current: u64 },

    #[error("Translation for '{got}' arrived while '{active}' is active")]
    LanguageMismatch { got: String, active: String },
}
