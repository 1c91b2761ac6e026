//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `TradeError`, so functions can simply return
//! `Result<T>`.
use crate::error::TradeError;

/// Workspace-wide `Result` alias with `TradeError` as the default error.
pub type Result<T, E = TradeError> = std::result::Result<T, E>;
