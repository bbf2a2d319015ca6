//! Embedded landing page rendering the leaderboard client-side.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get};

const LANDING_PAGE: &str = include_str!("../../../static/index.html");

/// Serve the landing page.
#[utoipa::path(
    get,
    path = "/",
    tags = ["pages"],
    responses((status = 200, description = "Landing page", body = String, content_type = "text/html"))
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .body(LANDING_PAGE)
}
