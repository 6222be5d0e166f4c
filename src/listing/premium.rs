/// 프리미엄 공고 정책
/// 선택 가능한 기간과 기간별 가격표를 한 곳에서 관리한다.
// region:    --- Imports
use serde::Serialize;
use thiserror::Error;

// endregion: --- Imports

// region:    --- Premium Policy

/// 선택 가능한 프리미엄 기간 (일)
pub const VALID_DURATION_DAYS: [i64; 4] = [1, 3, 7, 30];

/// 기간별 가격 (유로 센트)
pub const PRICE_TABLE_CENTS: [(i64, i64); 4] = [(1, 299), (3, 799), (7, 1499), (30, 3999)];

/// 프리미엄 도메인 오류
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PremiumError {
    /// 기간이 가격표에 없는 경우
    #[error("지원하지 않는 프리미엄 기간입니다: {0}일")]
    InvalidDuration(i64),
    /// 이미 프리미엄이 적용된 공고에 다시 적용하려는 경우
    #[error("이미 프리미엄이 적용된 공고입니다")]
    AlreadyPremium,
}

/// 기간별 가격 조회 (유로 센트)
pub fn price_cents(duration_days: i64) -> Result<i64, PremiumError> {
    PRICE_TABLE_CENTS
        .iter()
        .find(|(days, _)| *days == duration_days)
        .map(|(_, cents)| *cents)
        .ok_or(PremiumError::InvalidDuration(duration_days))
}

/// 가격표 항목 (조회 응답용)
#[derive(Debug, Serialize)]
pub struct PremiumPrice {
    pub duration_days: i64,
    pub price_cents: i64,
    pub price_eur: f64,
}

/// 전체 가격표
pub fn price_table() -> Vec<PremiumPrice> {
    PRICE_TABLE_CENTS
        .iter()
        .map(|(days, cents)| PremiumPrice {
            duration_days: *days,
            price_cents: *cents,
            price_eur: (*cents as f64) / 100.0,
        })
        .collect()
}

// endregion: --- Premium Policy
