/// 비밀번호 해싱 및 검증
/// 평문 저장 금지. argon2 인코딩 문자열만 저장한다.
// region:    --- Imports
use rand::Rng;
use tokio::task;

// endregion: --- Imports

// region:    --- Password Hashing

/// 비밀번호 해싱 (솔트 포함 argon2 인코딩 문자열 반환)
pub async fn hash_password(password: String) -> Result<String, String> {
    task::spawn_blocking(move || {
        let salt: [u8; 16] = rand::thread_rng().gen();
        argon2::hash_encoded(password.as_bytes(), &salt, &argon2::Config::default())
            .map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| e.to_string())?
}

/// 비밀번호 검증
pub async fn verify_password(encoded: String, password: String) -> Result<bool, String> {
    task::spawn_blocking(move || {
        argon2::verify_encoded(&encoded, password.as_bytes()).map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| e.to_string())?
}

// endregion: --- Password Hashing
