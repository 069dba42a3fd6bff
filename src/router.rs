use axum::{
    Router,
    response::Html,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{AppState, middleware, routes};

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/{account}", get(routes::user::get_by_account))
        .route("/uid/{uid}", get(routes::user::get_by_uid))
        .route("/user", post(routes::user::register))
        .route("/avatar/{account}", post(routes::user::update_avatar))
}

fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/product/{id}", get(routes::product::get_product))
        .route("/products", get(routes::product::get_products))
}

async fn root() -> Html<&'static str> {
    Html("Visit <a href='https://doc.carp.org' target='_blank'>here</a> to learn more.")
}

/// 创建主路由
///
/// CORS对所有来源放行，与原有前端的跨域约定保持一致。
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(user_routes())
        .merge(product_routes())
        .route("/", get(root))
        .layer(axum::middleware::from_fn(middleware::log_errors))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
