use ac_core::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AutocompleteError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// The engine lock was poisoned by a panic in another caller.
    #[error("internal error: {msg}")]
    Internal { msg: String },
}
