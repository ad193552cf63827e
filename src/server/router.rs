use std::path::PathBuf;

use axum::{middleware, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{card::*, deck::*, pack::*},
    middleware::webp::webp_negotiation,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Vault API",
        description = "Packs, cards and decks of a trading card collection"
    ),
    tags(
        (name = "pack", description = "Card pack endpoints"),
        (name = "card", description = "Card endpoints"),
        (name = "deck", description = "Deck endpoints"),
    )
)]
struct ApiDoc;

/// Builds the complete application router.
///
/// Mounts the JSON API under `/api`, Swagger UI under `/api/docs`, and the artwork
/// directory under `/images`.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    let (api, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(list_packs, create_pack))
        .routes(routes!(get_pack, update_pack, delete_pack))
        .routes(routes!(list_pack_cards))
        .routes(routes!(list_cards, create_card))
        .routes(routes!(get_card, update_card, delete_card))
        .routes(routes!(list_decks, create_deck))
        .routes(routes!(get_deck, update_deck, delete_deck))
        .split_for_parts();

    let artwork_dir = state.artwork_dir.clone();

    api.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .nest_service("/images", artwork(artwork_dir))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Static artwork service with WebP negotiation in front of it.
pub fn artwork(artwork_dir: PathBuf) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(&artwork_dir))
        .layer(middleware::from_fn_with_state(artwork_dir, webp_negotiation))
}
