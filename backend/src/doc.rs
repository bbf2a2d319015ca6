//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the leaderboard, landing page and health endpoints
//! plus the error envelope schema. The generated document backs Swagger UI
//! in debug mode and is exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::scores::{ScoreEntryResponse, SubmitScoreBody, SubmitScoreResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scoreboard API",
        description = "Top-ten leaderboard with anonymous score submission.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::scores::list_scores,
        crate::inbound::http::scores::submit_score,
        crate::inbound::http::landing::index,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorSchema, ScoreEntryResponse, SubmitScoreBody, SubmitScoreResponse)),
    tags(
        (name = "scores", description = "Leaderboard reads and submissions"),
        (name = "pages", description = "Browser-facing pages"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    const ERROR_SCHEMA_NAME: &str = "ErrorResponse";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_registers_score_and_error_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("error schema");
        assert_object_schema_has_field(error_schema, "error");

        let entry_schema = schemas.get("ScoreEntryResponse").expect("entry schema");
        assert_object_schema_has_field(entry_schema, "name");
        assert_object_schema_has_field(entry_schema, "score");

        let body_schema = schemas.get("SubmitScoreBody").expect("submission schema");
        assert_object_schema_has_field(body_schema, "name");
        assert_object_schema_has_field(body_schema, "score");
    }

    #[test]
    fn openapi_lists_every_public_path() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/api/scores", "/health/ready", "/health/live"] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
        let scores = doc.paths.paths.get("/api/scores").expect("scores path");
        assert!(scores.get.is_some());
        assert!(scores.post.is_some());
    }
}
