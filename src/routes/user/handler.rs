use axum::{
    extract::{Json, Multipart, Path, State},
    response::IntoResponse,
};

use crate::{AppState, error::AppError, utils::hash_password};

use super::model::{RegisterRequest, UserResponse};

/// 查无此人返回空对象而不是404，老客户端依赖这一行为
fn user_to_response(
    user: Option<crate::database::UserEntity>,
) -> Result<Json<serde_json::Value>, AppError> {
    match user {
        Some(user) => Ok(Json(serde_json::to_value(UserResponse::from(user))?)),
        None => {
            tracing::debug!("User not found, returning an empty object");
            Ok(Json(serde_json::json!({})))
        }
    }
}

#[axum::debug_handler]
pub async fn get_by_account(
    State(state): State<AppState>,
    Path(account): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.find_by_account(&account).await?;
    user_to_response(user)
}

#[axum::debug_handler]
pub async fn get_by_uid(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let uid: i64 = uid
        .parse()
        .map_err(|_| AppError::Validation("uid必须为数字".to_string()))?;

    let user = state.users.find_by_uid(uid).await?;
    user_to_response(user)
}

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    // 检查账号格式
    if req.account.is_empty() || !req.account.chars().all(|c| c.is_alphanumeric() || c == '_')
    {
        return Err(AppError::Validation(
            "账号格式无效，只允许使用字母、数字和下划线".to_string(),
        ));
    }
    if req.nickname.is_empty() {
        return Err(AppError::Validation("昵称不能为空".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::Validation("密码不能为空".to_string()));
    }

    let password_hash = hash_password(&req.password).map_err(|_| AppError::Internal)?;

    let created = state
        .users
        .register(&req.account, &req.nickname, &password_hash)
        .await?;

    if created {
        tracing::info!("Registered user: {}", req.account);
    } else {
        // insert-ignore：重复注册静默跳过，响应与首次一致
        tracing::info!("Account already exists, insert skipped: {}", req.account);
    }

    Ok("200")
}

#[axum::debug_handler]
pub async fn update_avatar(
    State(state): State<AppState>,
    Path(account): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut data = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("上传表单无效: {}", e)))?
    {
        if field.name() == Some("file") {
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("读取上传文件失败: {}", e)))?,
            );
        }
    }

    let data = data.ok_or_else(|| AppError::Validation("缺少file字段".to_string()))?;

    let affected = state.users.update_avatar(&account, &data).await?;
    if affected == 0 {
        return Err(AppError::NotFound("用户不存在"));
    }

    tracing::info!("Updated avatar for {} ({} bytes)", account, data.len());
    Ok("Data updated successfully")
}
