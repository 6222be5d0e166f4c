// region:    --- Imports
use crate::database::DatabaseManager;
use crate::listing::model::Listing;
use crate::query::queries;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

// endregion: --- Imports

// region:    --- Listing Repository Trait

/// 공고 저장소 트레이트
/// 커맨드 처리 로직이 데이터베이스 구현에 직접 묶이지 않도록 조회/저장 경계를 둔다.
#[async_trait]
pub trait ListingRepository {
    /// 공고 단건 조회
    async fn fetch(&self, listing_id: i64) -> Result<Option<Listing>, String>;
    /// 공고 신규 저장 (id 가 채워진 공고 반환)
    async fn create(&self, listing: &Listing) -> Result<Listing, String>;
    /// 프리미엄 필드 반영
    async fn persist_premium(&self, listing: &Listing, now: DateTime<Utc>) -> Result<(), String>;
}

/// 공고 저장소 구현체
pub struct PostgresListingRepository {
    db_manager: Arc<DatabaseManager>,
}

/// 공고 저장소 생성
impl PostgresListingRepository {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

/// 공고 저장소 구현체 메서드 구현
#[async_trait]
impl ListingRepository for PostgresListingRepository {
    async fn fetch(&self, listing_id: i64) -> Result<Option<Listing>, String> {
        self.db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, Listing>(queries::GET_LISTING)
                        .bind(listing_id)
                        .fetch_optional(&mut **tx)
                        .await
                })
            })
            .await
            .map_err(|e: sqlx::Error| e.to_string())
    }

    async fn create(&self, listing: &Listing) -> Result<Listing, String> {
        let listing = listing.clone();
        self.db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query_as::<_, Listing>(
                        "INSERT INTO listings (name, description, assistance_type, hourly_rate, location, is_premium, premium_duration, premium_expires_at, created_at, updated_at, user_id)
                         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                         RETURNING *",
                    )
                    .bind(&listing.name)
                    .bind(&listing.description)
                    .bind(&listing.assistance_type)
                    .bind(listing.hourly_rate)
                    .bind(&listing.location)
                    .bind(listing.is_premium)
                    .bind(listing.premium_duration)
                    .bind(listing.premium_expires_at)
                    .bind(listing.created_at)
                    .bind(listing.updated_at)
                    .bind(listing.user_id)
                    .fetch_one(&mut **tx)
                    .await
                })
            })
            .await
            .map_err(|e: sqlx::Error| e.to_string())
    }

    async fn persist_premium(&self, listing: &Listing, now: DateTime<Utc>) -> Result<(), String> {
        let listing = listing.clone();
        self.db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query(
                        "UPDATE listings SET is_premium = $1, premium_duration = $2, premium_expires_at = $3, updated_at = $4 WHERE id = $5",
                    )
                    .bind(listing.is_premium)
                    .bind(listing.premium_duration)
                    .bind(listing.premium_expires_at)
                    .bind(now)
                    .bind(listing.id)
                    .execute(&mut **tx)
                    .await
                    .map(|_| ())
                })
            })
            .await
            .map_err(|e: sqlx::Error| e.to_string())
    }
}

// endregion: --- Listing Repository Trait
