use serde::{Deserialize, Serialize};

use crate::database::UserEntity;
use crate::utils::encode_avatar;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub account: String,
    pub nickname: String,
    pub password: String,
}

/// 对外的用户表示，密码哈希永不序列化，头像编码为 base64 文本
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub uid: i64,
    pub account: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl From<UserEntity> for UserResponse {
    fn from(entity: UserEntity) -> Self {
        UserResponse {
            uid: entity.uid,
            account: entity.account,
            nickname: entity.nickname,
            avatar: entity.avatar.as_deref().map(encode_avatar),
        }
    }
}
