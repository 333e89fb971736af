//! Error types.
//!
//! Cascading and style materialization never fail: malformed or unknown
//! values fall back to initial values. Errors only surface at the font-set
//! boundary and when loading configuration.

use thiserror::Error;

/// Errors reported by font sets and configuration loading.
#[derive(Debug, Error)]
pub enum CssError {
    /// A font set could not provide a face for a family.
    #[error("failed to load font family '{family}': {reason}")]
    FontLoad {
        /// The requested family name.
        family: String,
        /// Why the font set refused it.
        reason: String,
    },

    /// An `@font-face` rule could not be registered.
    #[error("failed to register @font-face for '{family}': {reason}")]
    FontFace {
        /// The family the rule declared.
        family: String,
        /// Why registration failed.
        reason: String,
    },

    /// Engine options could not be deserialized.
    #[error("invalid style options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
