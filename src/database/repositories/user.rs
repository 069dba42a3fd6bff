use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::models::user::UserEntity;

/// 用户存储库接口，测试时以内存实现替换
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 根据账号查找用户
    async fn find_by_account(&self, account: &str) -> Result<Option<UserEntity>, sqlx::Error>;

    /// 根据uid查找用户
    async fn find_by_uid(&self, uid: i64) -> Result<Option<UserEntity>, sqlx::Error>;

    /// 注册用户，insert-ignore 语义：账号已存在时返回 false，不报错
    async fn register(
        &self,
        account: &str,
        nickname: &str,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error>;

    /// 更新头像，返回受影响行数
    async fn update_avatar(&self, account: &str, avatar: &[u8]) -> Result<u64, sqlx::Error>;
}

/// 用户存储库的 Postgres 实现
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_account(&self, account: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            "SELECT uid, account, nickname, password, avatar FROM users WHERE account = $1",
        )
        .bind(account)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_by_uid(&self, uid: i64) -> Result<Option<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            "SELECT uid, account, nickname, password, avatar FROM users WHERE uid = $1",
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await
    }

    async fn register(
        &self,
        account: &str,
        nickname: &str,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        // 账号唯一性由数据库约束保证，并发注册的竞争在这里收敛
        let result = sqlx::query(
            "INSERT INTO users (account, nickname, password) VALUES ($1, $2, $3) \
             ON CONFLICT (account) DO NOTHING",
        )
        .bind(account)
        .bind(nickname)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_avatar(&self, account: &str, avatar: &[u8]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET avatar = $1 WHERE account = $2")
            .bind(avatar)
            .bind(account)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
