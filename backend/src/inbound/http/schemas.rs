//! OpenAPI schema definitions for error payloads.
//!
//! The domain error stays framework-agnostic by not deriving `ToSchema`;
//! this wrapper mirrors the wire body rendered by `inbound::http::error`.

use utoipa::ToSchema;

/// OpenAPI schema for the error envelope.
#[derive(ToSchema)]
#[schema(as = ErrorResponse)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message; internal failures are redacted.
    #[schema(example = "Datos faltantes")]
    error: String,
}
