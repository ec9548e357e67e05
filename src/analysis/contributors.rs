//! Contributor analysis: bus factor, team-size bucket, and geography.

use crate::fetch::{RawContributor, UserProfile};
use crate::geo::{self, LocationRecord};
use serde::Serialize;
use std::collections::HashMap;

/// Team-size bucket derived from the contributor count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TeamSize {
    Solo,
    Small,
    Medium,
    Large,
}

/// One contributor with geography joined from their user profile.
#[derive(Debug, Clone, Serialize)]
pub struct ContributorProfile {
    pub login: String,
    pub contributions: u64,
    pub name: Option<String>,
    pub html_url: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContributorAnalysis {
    pub total: usize,
    pub team_size: TeamSize,
    pub bus_factor: usize,
    pub contributors: Vec<ContributorProfile>,
    pub primary_country: Option<String>,
    pub primary_country_code: Option<String>,
    pub primary_flag: Option<String>,
    /// Timezone of the top contributor in the primary country; the fallback
    /// for commits whose author has no resolved location.
    pub primary_timezone: Option<String>,
    pub primary_offset_secs: Option<i32>,
}

impl ContributorAnalysis {
    /// Per-login UTC offsets for commit time-of-day bucketing.
    #[must_use]
    pub fn author_offsets(&self) -> HashMap<&str, i32> {
        self.contributors
            .iter()
            .filter_map(|c| c.location.as_ref().map(|l| (c.login.as_str(), l.offset_secs)))
            .collect()
    }
}

/// Fixed breakpoints: solo <=1, small <=5, medium <=20, large >20.
#[must_use]
pub fn classify_team_size(count: usize) -> TeamSize {
    match count {
        0 | 1 => TeamSize::Solo,
        2..=5 => TeamSize::Small,
        6..=20 => TeamSize::Medium,
        _ => TeamSize::Large,
    }
}

/// The minimum number of top contributors whose combined share reaches at
/// least half of all contributions. Insensitive to input order; zero when
/// there are no contributions at all.
#[must_use]
pub fn bus_factor(contributions: &[u64]) -> usize {
    let total: u64 = contributions.iter().sum();
    if total == 0 {
        return 0;
    }

    let mut sorted = contributions.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut cumulative = 0u64;
    for (i, c) in sorted.iter().enumerate() {
        cumulative += c;
        if cumulative * 2 >= total {
            return i + 1;
        }
    }

    sorted.len()
}

/// Join contributor counts with resolved profile geography and derive the
/// primary country and timezone.
#[must_use]
pub fn process_contributors(raw: &[RawContributor], profiles: &[UserProfile]) -> ContributorAnalysis {
    let profile_by_login: HashMap<&str, &UserProfile> = profiles.iter().map(|p| (p.login.as_str(), p)).collect();

    let mut contributors: Vec<ContributorProfile> = raw
        .iter()
        .map(|c| {
            let profile = profile_by_login.get(c.login.as_str());
            ContributorProfile {
                login: c.login.clone(),
                contributions: c.contributions,
                name: profile.and_then(|p| p.name.clone()),
                html_url: profile.map(|p| p.html_url.clone()),
                avatar_url: profile.and_then(|p| p.avatar_url.clone()),
                location: profile.and_then(|p| p.location.as_deref()).and_then(geo::resolve),
            }
        })
        .collect();

    // Descending by contributions, ties by login so the order is total.
    contributors.sort_by(|a, b| b.contributions.cmp(&a.contributions).then_with(|| a.login.cmp(&b.login)));

    let factor = bus_factor(&contributors.iter().map(|c| c.contributions).collect::<Vec<_>>());

    // Sum contributions per country. Walking in descending-contribution order
    // makes the tie-break explicit: first-encountered means highest
    // individual contribution.
    let mut totals: Vec<(String, u64)> = Vec::new();
    for contributor in &contributors {
        let Some(location) = &contributor.location else { continue };
        match totals.iter_mut().find(|(code, _)| *code == location.country_code) {
            Some((_, sum)) => *sum += contributor.contributions,
            None => totals.push((location.country_code.clone(), contributor.contributions)),
        }
    }

    let primary_code = totals
        .iter()
        .enumerate()
        .fold(None::<(usize, &(String, u64))>, |best, (i, entry)| match best {
            Some((_, b)) if b.1 >= entry.1 => best,
            _ => Some((i, entry)),
        })
        .map(|(_, (code, _))| code.clone());

    let primary = primary_code.as_ref().and_then(|code| {
        contributors
            .iter()
            .filter_map(|c| c.location.as_ref())
            .find(|l| &l.country_code == code)
    });

    ContributorAnalysis {
        total: raw.len(),
        team_size: classify_team_size(raw.len()),
        bus_factor: factor,
        primary_country: primary.map(|l| l.country.clone()),
        primary_country_code: primary_code.clone(),
        primary_flag: primary.map(|l| l.flag.clone()),
        primary_timezone: primary.map(|l| l.timezone.clone()),
        primary_offset_secs: primary.map(|l| l.offset_secs),
        contributors,
    }
}
