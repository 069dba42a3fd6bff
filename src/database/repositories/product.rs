use async_trait::async_trait;
use sqlx::PgPool;

/// 商品存储库接口
///
/// 商品表结构对本服务不透明，整行以 JSON 形式取出并原样透传。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<serde_json::Value>, sqlx::Error>;

    async fn list_all(&self) -> Result<Vec<serde_json::Value>, sqlx::Error>;
}

/// 商品存储库的 Postgres 实现
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<serde_json::Value>, sqlx::Error> {
        sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT to_jsonb(p) FROM products p WHERE p.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn list_all(&self) -> Result<Vec<serde_json::Value>, sqlx::Error> {
        sqlx::query_scalar::<_, serde_json::Value>("SELECT to_jsonb(p) FROM products p")
            .fetch_all(&self.pool)
            .await
    }
}
