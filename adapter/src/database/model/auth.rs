use kernel::model::{auth::AccessToken, id::UserId};
use shared::error::{AppError, AppResult};

use crate::redis::model::RedisKey;

// セッションサービスが Redis に書き込む「トークン -> 利用者 ID」のエントリ
pub struct AuthorizationKey(String);
pub struct AuthorizedUserId(UserId);

impl From<&AccessToken> for AuthorizationKey {
    fn from(token: &AccessToken) -> Self {
        Self(token.0.clone())
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        format!("session:{}", self.0)
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(s: String) -> AppResult<Self> {
        s.trim()
            .parse::<i64>()
            .map(|raw| Self(UserId::new(raw)))
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))
    }
}

impl AuthorizedUserId {
    pub fn into_inner(self) -> UserId {
        self.0
    }
}
