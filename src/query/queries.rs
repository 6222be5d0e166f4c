/// 공고 조회
pub const GET_LISTING: &str =
    "SELECT id, name, description, assistance_type, hourly_rate, location, is_premium, premium_duration, premium_expires_at, created_at, updated_at, user_id FROM listings WHERE id = $1";

/// 모든 공고 조회
pub const GET_ALL_LISTINGS: &str =
    "SELECT id, name, description, assistance_type, hourly_rate, location, is_premium, premium_duration, premium_expires_at, created_at, updated_at, user_id FROM listings ORDER BY created_at DESC, id DESC";

/// 회원별 공고 조회
pub const GET_LISTINGS_BY_OWNER: &str = r#"
    SELECT id, name, description, assistance_type, hourly_rate, location, is_premium, premium_duration, premium_expires_at, created_at, updated_at, user_id
    FROM listings
    WHERE user_id = $1
    ORDER BY created_at DESC, id DESC
"#;

/// 회원 조회 (id)
pub const GET_USER_BY_ID: &str =
    "SELECT id, username, email, password_hash, date_registered FROM users WHERE id = $1";

/// 회원 조회 (사용자 이름)
pub const GET_USER_BY_USERNAME: &str =
    "SELECT id, username, email, password_hash, date_registered FROM users WHERE username = $1";

/// 회원 조회 (이메일)
pub const GET_USER_BY_EMAIL: &str =
    "SELECT id, username, email, password_hash, date_registered FROM users WHERE email = $1";

/// 세션 조회
pub const GET_SESSION: &str =
    "SELECT token, user_id, created_at, expires_at FROM sessions WHERE token = $1";
