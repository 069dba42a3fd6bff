use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};

use crate::{AppState, error::AppError};

use super::model::ProductsResponse;

#[axum::debug_handler]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::Validation("商品id必须为数字".to_string()))?;

    match state.products.find_by_id(id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(AppError::NotFound("商品不存在")),
    }
}

#[axum::debug_handler]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = state.products.list_all().await?;
    Ok(Json(ProductsResponse::succeed(products)))
}
