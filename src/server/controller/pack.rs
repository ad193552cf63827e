use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        card::CardDto,
        pack::{CreatePackDto, PackDto, UpdatePackDto},
    },
    server::{
        error::AppError,
        model::pack::{CreatePackParam, UpdatePackParam},
        service::pack::PackService,
        state::AppState,
        util::parse::parse_resource_id,
    },
};

/// Tag for grouping pack endpoints in OpenAPI documentation
pub static PACK_TAG: &str = "pack";

/// List all packs.
///
/// # Returns
/// - `200 OK` - Array of every pack ordered by name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/packs",
    tag = PACK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved packs", body = Vec<PackDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_packs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let packs = PackService::new(&state.db).get_all().await?;

    let dto: Vec<PackDto> = packs.into_iter().map(|pack| pack.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a single pack by ID.
///
/// # Returns
/// - `200 OK` - The pack
/// - `404 Not Found` - No pack with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/packs/{id}",
    tag = PACK_TAG,
    params(
        ("id" = String, Path, description = "Pack ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved pack", body = PackDto),
        (status = 404, description = "Pack not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pack(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_resource_id(&id, "Pack")?;

    let pack = PackService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(pack.into_dto())))
}

/// List the cards of a pack.
///
/// # Returns
/// - `200 OK` - Array of the pack's cards, possibly empty
/// - `404 Not Found` - No pack with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/packs/{id}/cards",
    tag = PACK_TAG,
    params(
        ("id" = String, Path, description = "Pack ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved cards of pack", body = Vec<CardDto>),
        (status = 404, description = "Pack not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pack_cards(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_resource_id(&id, "Pack")?;

    let cards = PackService::new(&state.db).get_cards(id).await?;

    let dto: Vec<CardDto> = cards.into_iter().map(|card| card.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Create a new pack.
///
/// The request body becomes the new row; the server assigns the ID and timestamps.
///
/// # Returns
/// - `201 Created` - The created pack
/// - `400 Bad Request` - Malformed body, missing or invalid fields, or rejected insert
#[utoipa::path(
    post,
    path = "/api/packs",
    tag = PACK_TAG,
    request_body = CreatePackDto,
    responses(
        (status = 201, description = "Successfully created pack", body = PackDto),
        (status = 400, description = "Invalid pack data", body = ErrorDto)
    ),
)]
pub async fn create_pack(
    State(state): State<AppState>,
    payload: Result<Json<CreatePackDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let pack = PackService::new(&state.db)
        .create(CreatePackParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(pack.into_dto())))
}

/// Update an existing pack.
///
/// Only the fields present in the body are overwritten.
///
/// # Returns
/// - `200 OK` - The updated pack
/// - `400 Bad Request` - Malformed body, invalid fields, or rejected update
/// - `404 Not Found` - No pack with that ID; nothing is created
#[utoipa::path(
    put,
    path = "/api/packs/{id}",
    tag = PACK_TAG,
    params(
        ("id" = String, Path, description = "Pack ID (UUID)")
    ),
    request_body = UpdatePackDto,
    responses(
        (status = 200, description = "Successfully updated pack", body = PackDto),
        (status = 400, description = "Invalid pack data", body = ErrorDto),
        (status = 404, description = "Pack not found", body = ErrorDto)
    ),
)]
pub async fn update_pack(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePackDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_resource_id(&id, "Pack")?;
    let Json(payload) = payload?;

    let pack = PackService::new(&state.db)
        .update(id, UpdatePackParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(pack.into_dto())))
}

/// Delete a pack.
///
/// Cards of the pack are kept and detached from it.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - Nothing was deleted
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/packs/{id}",
    tag = PACK_TAG,
    params(
        ("id" = String, Path, description = "Pack ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully deleted pack", body = MessageDto),
        (status = 404, description = "Pack not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pack(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_resource_id(&id, "Pack")?;

    PackService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Pack deleted successfully".to_string(),
        }),
    ))
}
