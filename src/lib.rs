use std::sync::Arc;

use crate::database::{ProductRepository, UserRepository};

pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod utils;

/// 应用状态，显式构造后注入路由，便于测试时替换存储库实现
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
}
