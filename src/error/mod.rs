// modrules: Module Build Rules Resolver
//
// SPDX-FileCopyrightText: 2026 modrules contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!      RulesError (~16 bytes)
//!            |
//!        +---+---+
//!        v       v
//!      Config    Io
//!       Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Config  ParseError, MissingKey, InvalidValue
//!
//! Resolution itself never fails: an unknown platform or an absent
//! optional component degrades to "disabled" in the build plan. Only
//! configuration loading/validation and log-file creation produce
//! errors, and both return RulesResult.
//! ```

use thiserror::Error;

/// Result type using [`RulesError`].
pub type RulesResult<T> = std::result::Result<T, RulesError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~16 bytes on the stack.
#[derive(Debug, Error)]
pub enum RulesError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for RulesError {
                fn from(err: $error) -> Self {
                    RulesError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration input.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
