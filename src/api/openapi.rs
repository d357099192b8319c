//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{User, UserPayload};

/// OpenAPI documentation for the User CRUD API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD API",
        version = "0.1.0",
        description = "CRUD service for User records with field validation",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::replace_user,
        user_handler::delete_user,
    ),
    components(schemas(User, UserPayload)),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_user_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/users"));
        assert!(doc.paths.paths.contains_key("/api/users/{id}"));
    }
}
