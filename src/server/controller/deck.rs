use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        deck::{CreateDeckDto, DeckDto, UpdateDeckDto},
    },
    server::{
        error::AppError,
        model::deck::{CreateDeckParam, UpdateDeckParam},
        service::deck::DeckService,
        state::AppState,
        util::parse::parse_resource_id,
    },
};

/// Tag for grouping deck endpoints in OpenAPI documentation
pub static DECK_TAG: &str = "deck";

#[utoipa::path(
    get,
    path = "/api/decks",
    tag = DECK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved decks", body = Vec<DeckDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_decks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let decks = DeckService::new(&state.db).get_all().await?;

    let dto: Vec<DeckDto> = decks.into_iter().map(|deck| deck.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/decks/{id}",
    tag = DECK_TAG,
    params(
        ("id" = String, Path, description = "Deck ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved deck", body = DeckDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_deck(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_resource_id(&id, "Deck")?;

    let deck = DeckService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(deck.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/decks",
    tag = DECK_TAG,
    request_body = CreateDeckDto,
    responses(
        (status = 201, description = "Successfully created deck", body = DeckDto),
        (status = 400, description = "Invalid deck data", body = ErrorDto)
    ),
)]
pub async fn create_deck(
    State(state): State<AppState>,
    payload: Result<Json<CreateDeckDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let deck = DeckService::new(&state.db)
        .create(CreateDeckParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(deck.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/decks/{id}",
    tag = DECK_TAG,
    params(
        ("id" = String, Path, description = "Deck ID (UUID)")
    ),
    request_body = UpdateDeckDto,
    responses(
        (status = 200, description = "Successfully updated deck", body = DeckDto),
        (status = 400, description = "Invalid deck data", body = ErrorDto),
        (status = 404, description = "Deck not found", body = ErrorDto)
    ),
)]
pub async fn update_deck(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateDeckDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_resource_id(&id, "Deck")?;
    let Json(payload) = payload?;

    let deck = DeckService::new(&state.db)
        .update(id, UpdateDeckParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(deck.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/decks/{id}",
    tag = DECK_TAG,
    params(
        ("id" = String, Path, description = "Deck ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully deleted deck", body = MessageDto),
        (status = 404, description = "Deck not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_deck(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_resource_id(&id, "Deck")?;

    DeckService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Deck deleted successfully".to_string(),
        }),
    ))
}
