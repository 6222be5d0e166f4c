// region:    --- Imports
use crate::listing::premium::{PremiumError, VALID_DURATION_DAYS};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// endregion: --- Imports

// region:    --- Listing Model

// 돌봄 서비스 공고 모델
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Listing {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub assistance_type: String,
    pub hourly_rate: f64,
    pub location: String,
    pub is_premium: bool,
    pub premium_duration: Option<i64>,
    pub premium_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: i64,
}

impl Listing {
    /// 프리미엄 적용
    /// 기간은 VALID_DURATION_DAYS 중 하나여야 하고, 이미 프리미엄인 공고에는 다시 적용할 수 없다.
    /// 만료 시각은 적용 시각 + 기간으로 한 번만 기록되고 이후 변경되지 않는다.
    pub fn promote(&mut self, duration_days: i64, now: DateTime<Utc>) -> Result<(), PremiumError> {
        if !VALID_DURATION_DAYS.contains(&duration_days) {
            return Err(PremiumError::InvalidDuration(duration_days));
        }
        if self.is_premium {
            return Err(PremiumError::AlreadyPremium);
        }

        self.is_premium = true;
        self.premium_duration = Some(duration_days);
        self.premium_expires_at = Some(now + Duration::days(duration_days));
        Ok(())
    }

    /// 프리미엄 활성 여부
    /// 만료는 저장된 만료 시각과 조회 시각의 비교만으로 판정한다. is_premium 플래그는
    /// 만료 후에도 그대로 남는다 (별도의 상태 갱신 작업 없음).
    pub fn is_active_premium(&self, now: DateTime<Utc>) -> bool {
        if !self.is_premium {
            return false;
        }
        match self.premium_expires_at {
            Some(expires_at) => now < expires_at,
            None => false,
        }
    }

    /// 공고 상태 표시 문자열
    /// 남은 기간은 일 단위 내림 + 1 로 표시한다 (30분 남은 공고도 "1 days" 로 표시).
    pub fn status_label(&self, now: DateTime<Utc>) -> String {
        if !self.is_premium {
            return "Regular".to_string();
        }

        match self.premium_expires_at {
            Some(expires_at) if now < expires_at => {
                let days_left = (expires_at - now).num_days() + 1;
                format!("Premium (expires in {} days)", days_left)
            }
            _ => "Premium (expired)".to_string(),
        }
    }
}

// endregion: --- Listing Model

// region:    --- Listing View

/// 공고 조회 응답 모델
/// 프리미엄 상태는 저장된 값이 아니라 조회 시각 기준으로 계산해 담는다.
#[derive(Debug, Serialize)]
pub struct ListingView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub assistance_type: String,
    pub hourly_rate: f64,
    pub location: String,
    pub premium_status: String,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
}

impl ListingView {
    pub fn new(listing: &Listing, now: DateTime<Utc>) -> Self {
        Self {
            id: listing.id,
            name: listing.name.clone(),
            description: listing.description.clone(),
            assistance_type: listing.assistance_type.clone(),
            hourly_rate: listing.hourly_rate,
            location: listing.location.clone(),
            premium_status: listing.status_label(now),
            created_at: listing.created_at,
            user_id: listing.user_id,
        }
    }
}

// endregion: --- Listing View
