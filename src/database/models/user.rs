use sqlx::FromRow;

/// 用户数据库实体
///
/// 表结构由外部维护，本服务不做迁移。`password` 列存 bcrypt 哈希，
/// `avatar` 列存原始字节。
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub uid: i64,
    pub account: String,
    pub nickname: String,
    pub password: String,
    pub avatar: Option<Vec<u8>>,
}
