//! Error types for startup addon wiring

use thiserror::Error;

/// Result type alias for addon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while wiring startup addons
///
/// The poster fix hook itself has no failure modes; a missing element
/// reference is a silent no-op. These variants only cover the registry
/// that arms addons during host startup.
#[derive(Error, Debug)]
pub enum Error {
    /// An addon with the same name was already registered
    #[error("Addon already registered: {0}")]
    DuplicateAddon(String),

    /// The registry's startup pass already ran
    #[error("Addon startup already ran")]
    AlreadyStarted,
}
