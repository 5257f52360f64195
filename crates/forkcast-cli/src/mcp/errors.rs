//! Error handling utilities for MCP server

use forkcast_core::ForkcastError;
use rmcp::ErrorData;

/// Converts planner errors to MCP errors. Bad input and unknown ids are the
/// caller's fault and map to `invalid_params`; everything else is internal.
pub fn to_mcp_error(message: &str, error: &ForkcastError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        ForkcastError::InvalidInput { .. }
        | ForkcastError::InvalidConfiguration { .. }
        | ForkcastError::RecipeNotFound { .. }
        | ForkcastError::PhotoNotFound { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
