/// 계정 관련 커맨드 처리
/// 1. 회원 가입
/// 2. 로그인 (세션 발급)
/// 3. 로그아웃 (세션 삭제)
// region:    --- Imports
use crate::account::model::{Session, User};
use crate::account::password;
use crate::database::DatabaseManager;
use crate::query::handlers;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Commands

/// 세션 유효 기간 (시간)
const SESSION_TTL_HOURS: i64 = 24;

/// 회원 가입 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RegisterCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// 로그인 명령
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// 1. 회원 가입
pub async fn handle_register(
    cmd: RegisterCommand,
    db_manager: &DatabaseManager,
    now: DateTime<Utc>,
) -> Result<User, serde_json::Value> {
    info!(
        "{:<12} --> 회원 가입 처리 시작: {}",
        "Account", cmd.username
    );

    // 중복 가입 확인
    let taken = handlers::get_user_by_username(db_manager, &cmd.username)
        .await
        .map_err(|e| json!({"error": e.to_string()}))?;
    if taken.is_some() {
        return Err(json!({
            "error": "이미 사용 중인 사용자 이름입니다.",
            "code": "DUPLICATE_USERNAME"
        }));
    }

    let taken = handlers::get_user_by_email(db_manager, &cmd.email)
        .await
        .map_err(|e| json!({"error": e.to_string()}))?;
    if taken.is_some() {
        return Err(json!({
            "error": "이미 등록된 이메일입니다.",
            "code": "DUPLICATE_EMAIL"
        }));
    }

    let password_hash = password::hash_password(cmd.password)
        .await
        .map_err(|e| json!({"error": e}))?;

    let username = cmd.username;
    let email = cmd.email;
    let user = db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query_as::<_, User>(
                    "INSERT INTO users (username, email, password_hash, date_registered)
                     VALUES ($1, $2, $3, $4)
                     RETURNING *",
                )
                .bind(&username)
                .bind(&email)
                .bind(&password_hash)
                .bind(now)
                .fetch_one(&mut **tx)
                .await
            })
        })
        .await
        .map_err(|e: sqlx::Error| json!({"error": e.to_string()}))?;

    info!("{:<12} --> 회원 가입 완료 id: {}", "Account", user.id);
    Ok(user)
}

/// 2. 로그인
pub async fn handle_login(
    cmd: LoginCommand,
    db_manager: &DatabaseManager,
    now: DateTime<Utc>,
) -> Result<(Session, User), serde_json::Value> {
    info!("{:<12} --> 로그인 처리 시작: {}", "Account", cmd.email);

    let invalid_credentials = || {
        json!({
            "error": "이메일 또는 비밀번호가 올바르지 않습니다.",
            "code": "INVALID_CREDENTIALS"
        })
    };

    let user = handlers::get_user_by_email(db_manager, &cmd.email)
        .await
        .map_err(|e| json!({"error": e.to_string()}))?
        .ok_or_else(invalid_credentials)?;

    let verified = password::verify_password(user.password_hash.clone(), cmd.password)
        .await
        .map_err(|e| json!({"error": e}))?;
    if !verified {
        return Err(invalid_credentials());
    }

    // 세션 발급
    let session = Session {
        token: Uuid::new_v4().to_string(),
        user_id: user.id,
        created_at: now,
        expires_at: now + Duration::hours(SESSION_TTL_HOURS),
    };

    let stored = {
        let session = session.clone();
        db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query(
                        "INSERT INTO sessions (token, user_id, created_at, expires_at)
                         VALUES ($1, $2, $3, $4)",
                    )
                    .bind(&session.token)
                    .bind(session.user_id)
                    .bind(session.created_at)
                    .bind(session.expires_at)
                    .execute(&mut **tx)
                    .await
                    .map(|_| ())
                })
            })
            .await
    };
    stored.map_err(|e: sqlx::Error| json!({"error": e.to_string()}))?;

    info!("{:<12} --> 로그인 완료 id: {}", "Account", user.id);
    Ok((session, user))
}

/// 3. 로그아웃
pub async fn handle_logout(
    token: &str,
    db_manager: &DatabaseManager,
) -> Result<(), serde_json::Value> {
    info!("{:<12} --> 로그아웃 처리 시작", "Account");

    let token = token.to_string();
    db_manager
        .transaction(|tx| {
            Box::pin(async move {
                sqlx::query("DELETE FROM sessions WHERE token = $1")
                    .bind(&token)
                    .execute(&mut **tx)
                    .await
                    .map(|_| ())
            })
        })
        .await
        .map_err(|e: sqlx::Error| json!({"error": e.to_string()}))
}

/// 세션 토큰 검증 후 사용자 조회
pub async fn authenticate_session(
    db_manager: &DatabaseManager,
    token: &str,
    now: DateTime<Utc>,
) -> Result<User, serde_json::Value> {
    let unauthorized = || {
        json!({
            "error": "세션이 유효하지 않습니다.",
            "code": "UNAUTHORIZED"
        })
    };

    let session = handlers::get_session(db_manager, token)
        .await
        .map_err(|e| json!({"error": e.to_string()}))?
        .ok_or_else(unauthorized)?;

    // 만료된 세션은 조회 시점에 거부한다 (별도 만료 작업 없음)
    if session.is_expired(now) {
        return Err(unauthorized());
    }

    handlers::get_user_by_id(db_manager, session.user_id)
        .await
        .map_err(|e| json!({"error": e.to_string()}))?
        .ok_or_else(unauthorized)
}

// endregion: --- Commands
