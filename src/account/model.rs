// region:    --- Imports
use chrono::{DateTime, Utc};
use serde::Serialize;

// endregion: --- Imports

// region:    --- Account Models

// 회원 모델
// 비밀번호 해시가 들어 있으므로 Serialize 를 구현하지 않는다. 응답에는 UserProfile 을 사용할 것.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub date_registered: DateTime<Utc>,
}

/// 회원 공개 프로필 (응답용)
#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub date_registered: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            date_registered: user.date_registered,
        }
    }
}

// 로그인 세션 모델
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// 세션 만료 여부
    /// 프리미엄 만료와 같은 방식으로, 저장된 만료 시각과 조회 시각의 비교로만 판정한다.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

// endregion: --- Account Models
