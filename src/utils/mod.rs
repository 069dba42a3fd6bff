use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bcrypt::{DEFAULT_COST, hash};

pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password.as_bytes(), DEFAULT_COST)
}

/// 头像以原始字节入库，仅在响应边界编码为 base64 文本
pub fn encode_avatar(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
