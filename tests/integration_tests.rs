/// 실행 중인 서비스(localhost:3000)와 데이터베이스가 필요한 통합 테스트.
/// `cargo test -- --ignored` 로 실행한다.
use axum::http::StatusCode;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:3000";

/// 트레이싱 초기화
fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .with_target(false)
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 테스트용 회원 가입 및 로그인 (세션 토큰 반환)
async fn register_and_login(client: &Client) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    let username = format!("tester-{}", &suffix[..8]);
    let email = format!("{}@example.com", username);

    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({
            "username": username,
            "email": email,
            "password": "test-password-123"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "test-password-123"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    body["token"].as_str().unwrap().to_string()
}

/// 테스트용 공고 등록 (생성된 공고 id 반환)
async fn create_test_listing(client: &Client, token: &str, premium_duration: Option<i64>) -> i64 {
    let response = client
        .post(format!("{}/listings", BASE_URL))
        .bearer_auth(token)
        .json(&json!({
            "name": "통합 테스트 공고",
            "description": "통합 테스트를 위한 돌봄 서비스 공고입니다.",
            "assistance_type": "caregiver",
            "hourly_rate": 19.5,
            "location": "Milano",
            "premium_duration": premium_duration
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.unwrap();
    body["id"].as_i64().unwrap()
}

/// 회원 가입 및 로그인 테스트
#[tokio::test]
#[ignore]
async fn test_register_and_login() {
    init_tracing();
    let client = Client::new();

    let suffix = Uuid::new_v4().simple().to_string();
    let username = format!("tester-{}", &suffix[..8]);
    let email = format!("{}@example.com", username);

    // 회원 가입
    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({
            "username": username,
            "email": email,
            "password": "test-password-123"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    // 중복 가입은 거부된다
    let response = client
        .post(format!("{}/register", BASE_URL))
        .json(&json!({
            "username": username,
            "email": email,
            "password": "test-password-123"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "DUPLICATE_USERNAME");

    // 로그인
    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "test-password-123"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert!(body["token"].as_str().is_some());

    // 잘못된 비밀번호는 거부된다
    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({
            "email": email,
            "password": "wrong-password"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// 공고 등록 및 목록 정렬 테스트
#[tokio::test]
#[ignore]
async fn test_listing_directory_ranking() {
    init_tracing();
    let client = Client::new();
    let token = register_and_login(&client).await;

    // 프리미엄 공고를 먼저, 일반 공고를 나중에 등록한다
    let premium_id = create_test_listing(&client, &token, Some(7)).await;
    let regular_id = create_test_listing(&client, &token, None).await;

    // 목록에서는 나중에 등록된 일반 공고보다 프리미엄 공고가 앞선다
    let response = client
        .get(format!("{}/listings", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let listings: Vec<Value> = response.json().await.unwrap();
    let position = |id: i64| {
        listings
            .iter()
            .position(|listing| listing["id"].as_i64() == Some(id))
            .unwrap()
    };
    assert!(position(premium_id) < position(regular_id));

    // 프리미엄 공고의 상태 표시 확인
    let premium_entry = &listings[position(premium_id)];
    let status = premium_entry["premium_status"].as_str().unwrap();
    assert!(status.starts_with("Premium (expires in"));
    info!("프리미엄 공고 상태: {}", status);

    let regular_entry = &listings[position(regular_id)];
    assert_eq!(regular_entry["premium_status"], "Regular");
}

/// 프리미엄 적용 흐름 테스트
#[tokio::test]
#[ignore]
async fn test_promote_listing_flow() {
    init_tracing();
    let client = Client::new();
    let token = register_and_login(&client).await;

    let listing_id = create_test_listing(&client, &token, None).await;

    // 지원하지 않는 기간은 거부된다
    let response = client
        .post(format!("{}/listings/{}/premium", BASE_URL, listing_id))
        .bearer_auth(&token)
        .json(&json!({"duration_days": 5}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "INVALID_DURATION");

    // 정상 적용
    let response = client
        .post(format!("{}/listings/{}/premium", BASE_URL, listing_id))
        .bearer_auth(&token)
        .json(&json!({"duration_days": 3}))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert!(body["premium_status"]
        .as_str()
        .unwrap()
        .starts_with("Premium (expires in"));

    // 중복 적용은 거부된다
    let response = client
        .post(format!("{}/listings/{}/premium", BASE_URL, listing_id))
        .bearer_auth(&token)
        .json(&json!({"duration_days": 7}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "ALREADY_PREMIUM");

    // 다른 회원의 공고에는 적용할 수 없다
    let other_token = register_and_login(&client).await;
    let response = client
        .post(format!("{}/listings/{}/premium", BASE_URL, listing_id))
        .bearer_auth(&other_token)
        .json(&json!({"duration_days": 3}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // 존재하지 않는 공고
    let response = client
        .post(format!("{}/listings/999999/premium", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({"duration_days": 3}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// 인증이 필요한 요청은 토큰 없이 거부된다
#[tokio::test]
#[ignore]
async fn test_unauthenticated_requests_rejected() {
    init_tracing();
    let client = Client::new();

    let response = client
        .post(format!("{}/listings", BASE_URL))
        .json(&json!({
            "name": "비인증 공고",
            "description": "토큰 없이 등록을 시도합니다.",
            "assistance_type": "babysitter",
            "hourly_rate": 12.0,
            "location": "Napoli",
            "premium_duration": null
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = client
        .get(format!("{}/my-listings", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// 프리미엄 가격표 조회 테스트
#[tokio::test]
#[ignore]
async fn test_premium_price_table_endpoint() {
    init_tracing();
    let client = Client::new();

    let response = client
        .get(format!("{}/premium-prices", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let table: Vec<Value> = response.json().await.unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table[0]["duration_days"], 1);
    assert_eq!(table[0]["price_cents"], 299);
    assert_eq!(table[3]["duration_days"], 30);
    assert_eq!(table[3]["price_cents"], 3999);
}
