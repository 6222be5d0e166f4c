/// 공고 목록 정렬
/// 활성 프리미엄 공고를 상단에, 나머지(일반 및 만료된 프리미엄)를 하단에 배치한다.
// region:    --- Imports
use crate::listing::model::Listing;
use chrono::{DateTime, Utc};

// endregion: --- Imports

// region:    --- Directory

/// 노출 순서대로 정렬된 공고 목록
/// 활성 프리미엄 구간과 나머지 구간을 나눈 뒤 각 구간을 등록 시각 내림차순으로
/// 정렬해 이어 붙인다. 프리미엄 여부는 점수 가중치가 아니라 구간을 가르는 기준이다.
pub fn ranked_directory(listings: Vec<Listing>, now: DateTime<Utc>) -> Vec<Listing> {
    let (mut active, mut rest): (Vec<Listing>, Vec<Listing>) = listings
        .into_iter()
        .partition(|listing| listing.is_active_premium(now));

    sort_by_recency(&mut active);
    sort_by_recency(&mut rest);

    active.append(&mut rest);
    active
}

/// 등록 시각 내림차순 정렬 (동률이면 id 내림차순)
fn sort_by_recency(listings: &mut [Listing]) {
    listings.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

// endregion: --- Directory
