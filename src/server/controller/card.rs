use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        card::{CardDto, CardQueryDto, CreateCardDto, UpdateCardDto},
    },
    server::{
        error::AppError,
        model::card::{CreateCardParam, UpdateCardParam},
        service::card::CardService,
        state::AppState,
        util::parse::parse_resource_id,
    },
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

/// List cards, optionally filtered by pack.
#[utoipa::path(
    get,
    path = "/api/cards",
    tag = CARD_TAG,
    params(CardQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved cards", body = Vec<CardDto>),
        (status = 400, description = "Invalid query string", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cards(
    State(state): State<AppState>,
    query: Result<Query<CardQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let cards = CardService::new(&state.db).get_all(query.pack_id).await?;

    let dto: Vec<CardDto> = cards.into_iter().map(|card| card.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a single card by ID.
///
/// # Returns
/// - `200 OK` - The card
/// - `404 Not Found` - No card with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cards/{id}",
    tag = CARD_TAG,
    params(
        ("id" = String, Path, description = "Card ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved card", body = CardDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_resource_id(&id, "Card")?;

    let card = CardService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Create a new card.
///
/// A `pack_id` must reference an existing pack.
#[utoipa::path(
    post,
    path = "/api/cards",
    tag = CARD_TAG,
    request_body = CreateCardDto,
    responses(
        (status = 201, description = "Successfully created card", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    payload: Result<Json<CreateCardDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let card = CardService::new(&state.db)
        .create(CreateCardParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(card.into_dto())))
}

/// Update an existing card.
///
/// Only the fields present in the body are overwritten; `"pack_id": null` detaches the
/// card from its pack.
///
/// # Returns
/// - `200 OK` - The updated card
/// - `400 Bad Request` - Malformed body, invalid fields, or `pack_id` names no pack
/// - `404 Not Found` - No card with that ID; nothing is created
#[utoipa::path(
    put,
    path = "/api/cards/{id}",
    tag = CARD_TAG,
    params(
        ("id" = String, Path, description = "Card ID (UUID)")
    ),
    request_body = UpdateCardDto,
    responses(
        (status = 200, description = "Successfully updated card", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto)
    ),
)]
pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCardDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_resource_id(&id, "Card")?;
    let Json(payload) = payload?;

    let card = CardService::new(&state.db)
        .update(id, UpdateCardParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Delete a card.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - Nothing was deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/cards/{id}",
    tag = CARD_TAG,
    params(
        ("id" = String, Path, description = "Card ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully deleted card", body = MessageDto),
        (status = 404, description = "Card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_resource_id(&id, "Card")?;

    CardService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Card deleted successfully".to_string(),
        }),
    ))
}
