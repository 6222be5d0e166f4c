/// 공고 관련 커맨드 처리
/// 1. 공고 등록 (등록과 동시에 프리미엄 선택 가능)
/// 2. 기존 공고 프리미엄 적용
// region:    --- Imports
use crate::listing::model::Listing;
use crate::listing::premium::PremiumError;
use crate::repository::ListingRepository;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

// endregion: --- Imports

// region:    --- Commands

/// 공고 등록 명령
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateListingCommand {
    pub name: String,
    pub description: String,
    pub assistance_type: String,
    pub hourly_rate: f64,
    pub location: String,
    pub premium_duration: Option<i64>,
}

/// 프리미엄 적용 명령
#[derive(Debug, Serialize, Deserialize)]
pub struct PromoteListingCommand {
    pub listing_id: i64,
    pub duration_days: i64,
}

/// 1. 공고 등록
pub async fn handle_create_listing(
    cmd: CreateListingCommand,
    user_id: i64,
    repository: &impl ListingRepository,
    now: DateTime<Utc>,
) -> Result<Listing, serde_json::Value> {
    info!("{:<12} --> 공고 등록 처리 시작: {:?}", "Command", cmd);

    let mut listing = Listing {
        id: 0,
        name: cmd.name,
        description: cmd.description,
        assistance_type: cmd.assistance_type,
        hourly_rate: cmd.hourly_rate,
        location: cmd.location,
        is_premium: false,
        premium_duration: None,
        premium_expires_at: None,
        created_at: now,
        updated_at: now,
        user_id,
    };

    // 등록과 동시에 프리미엄을 선택한 경우, 저장 전에 만료 시각까지 산정한다
    if let Some(duration_days) = cmd.premium_duration {
        listing
            .promote(duration_days, now)
            .map_err(premium_error_json)?;
    }

    let created = repository
        .create(&listing)
        .await
        .map_err(|e| json!({"error": e}))?;

    info!("{:<12} --> 공고 등록 완료 id: {}", "Command", created.id);
    Ok(created)
}

/// 2. 기존 공고 프리미엄 적용
pub async fn handle_promote_listing(
    cmd: PromoteListingCommand,
    user_id: i64,
    repository: &impl ListingRepository,
    now: DateTime<Utc>,
) -> Result<Listing, serde_json::Value> {
    info!("{:<12} --> 프리미엄 적용 처리 시작: {:?}", "Command", cmd);

    let mut listing = repository
        .fetch(cmd.listing_id)
        .await
        .map_err(|e| json!({"error": e}))?
        .ok_or_else(|| {
            json!({
                "error": "공고를 찾을 수 없습니다.",
                "code": "NOT_FOUND"
            })
        })?;

    // 본인 공고에만 프리미엄을 적용할 수 있다
    if listing.user_id != user_id {
        return Err(json!({
            "error": "본인 공고에만 프리미엄을 적용할 수 있습니다.",
            "code": "FORBIDDEN"
        }));
    }

    listing
        .promote(cmd.duration_days, now)
        .map_err(premium_error_json)?;

    repository
        .persist_premium(&listing, now)
        .await
        .map_err(|e| json!({"error": e}))?;

    info!(
        "{:<12} --> 프리미엄 적용 완료 id: {}, 기간: {}일",
        "Command", listing.id, cmd.duration_days
    );
    Ok(listing)
}

/// 프리미엄 도메인 오류를 응답 JSON 으로 변환
fn premium_error_json(e: PremiumError) -> serde_json::Value {
    match e {
        PremiumError::InvalidDuration(days) => json!({
            "error": "지원하지 않는 프리미엄 기간입니다.",
            "code": "INVALID_DURATION",
            "duration_days": days
        }),
        PremiumError::AlreadyPremium => json!({
            "error": "이미 프리미엄이 적용된 공고입니다.",
            "code": "ALREADY_PREMIUM"
        }),
    }
}

// endregion: --- Commands
