//! 测试用的内存存储库实现

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::database::models::user::UserEntity;
use crate::database::repositories::product::ProductRepository;
use crate::database::repositories::user::UserRepository;

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<UserEntity>>,
    next_uid: AtomicI64,
}

impl MemoryUserRepository {
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_account(&self, account: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.account == account).cloned())
    }

    async fn find_by_uid(&self, uid: i64) -> Result<Option<UserEntity>, sqlx::Error> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.uid == uid).cloned())
    }

    async fn register(
        &self,
        account: &str,
        nickname: &str,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.account == account) {
            return Ok(false);
        }

        users.push(UserEntity {
            uid: self.next_uid.fetch_add(1, Ordering::SeqCst) + 1,
            account: account.to_string(),
            nickname: nickname.to_string(),
            password: password_hash.to_string(),
            avatar: None,
        });
        Ok(true)
    }

    async fn update_avatar(&self, account: &str, avatar: &[u8]) -> Result<u64, sqlx::Error> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.account == account) {
            Some(user) => {
                user.avatar = Some(avatar.to_vec());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[derive(Default)]
pub struct MemoryProductRepository {
    products: Vec<serde_json::Value>,
}

impl MemoryProductRepository {
    pub fn with_products(products: Vec<serde_json::Value>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<serde_json::Value>, sqlx::Error> {
        Ok(self
            .products
            .iter()
            .find(|p| p.get("id").and_then(serde_json::Value::as_i64) == Some(id))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<serde_json::Value>, sqlx::Error> {
        Ok(self.products.clone())
    }
}
