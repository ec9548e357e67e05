//! Commit timing analysis: activity heatmap, work patterns, and the weekly
//! time series.
//!
//! Each commit is bucketed in its author's local time when the author's
//! location resolved, falling back to the team's primary timezone and then
//! UTC. Commits with missing or unparseable dates are skipped with a warning.

use crate::convention::{self, ConventionSummary};
use crate::fetch::RawCommit;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

const LOG_TARGET: &str = "   commits";

/// Day-of-week (0 = Sunday) by hour-of-day commit counts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActivityHeatmap {
    pub cells: [[u32; 24]; 7],
    /// Largest single cell, for rendering intensity scales.
    pub max: u32,
    pub total: u64,
}

impl ActivityHeatmap {
    fn record(&mut self, day: usize, hour: usize) {
        self.cells[day][hour] += 1;
        self.max = self.max.max(self.cells[day][hour]);
        self.total += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WorkPattern {
    Professional,
    Hobbyist,
    Mixed,
}

/// Share of commits in each time-of-week bucket. The three buckets partition
/// all commits; the integer-rounded percentages sum to 100 give or take one
/// point of rounding for non-empty input.
#[derive(Debug, Clone, Serialize)]
pub struct WorkPatterns {
    pub work_hours_percent: u32,
    pub evening_percent: u32,
    pub weekend_percent: u32,
    pub classification: WorkPattern,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekBucket {
    /// Monday of the week.
    pub week_start: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommitAnalysis {
    /// Commits in the sampled window, including skipped-date ones.
    pub total: usize,
    pub first_commit: Option<DateTime<Utc>>,
    pub last_commit: Option<DateTime<Utc>>,
    pub heatmap: ActivityHeatmap,
    pub patterns: WorkPatterns,
    pub weekly: Vec<WeekBucket>,
    pub conventions: ConventionSummary,
}

/// Classify heatmap cells into work hours (weekday 09:00-16:59), evenings
/// (weekday otherwise), and weekends (Saturday/Sunday, any hour).
#[must_use]
pub fn work_patterns(heatmap: &ActivityHeatmap) -> WorkPatterns {
    let mut work = 0u64;
    let mut evening = 0u64;
    let mut weekend = 0u64;

    for (day, hours) in heatmap.cells.iter().enumerate() {
        for (hour, &count) in hours.iter().enumerate() {
            let count = u64::from(count);
            if day == 0 || day == 6 {
                weekend += count;
            } else if (9..17).contains(&hour) {
                work += count;
            } else {
                evening += count;
            }
        }
    }

    let total = work + evening + weekend;
    let percent = |part: u64| {
        if total == 0 {
            0
        } else {
            (part as f64 / total as f64 * 100.0).round() as u32
        }
    };

    let work_hours_percent = percent(work);
    let evening_percent = percent(evening);
    let weekend_percent = percent(weekend);

    let classification = if total == 0 {
        WorkPattern::Mixed
    } else if work * 100 >= total * 60 {
        WorkPattern::Professional
    } else if (evening + weekend) * 100 >= total * 60 {
        WorkPattern::Hobbyist
    } else {
        WorkPattern::Mixed
    };

    WorkPatterns {
        work_hours_percent,
        evening_percent,
        weekend_percent,
        classification,
    }
}

/// Analyze a newest-first commit list.
///
/// `author_offsets` maps logins to the UTC offset of their resolved location;
/// `fallback_offset_secs` is the primary-country offset used when an author
/// has none.
#[must_use]
pub fn process_commits(
    commits: &[RawCommit],
    author_offsets: &HashMap<&str, i32>,
    fallback_offset_secs: Option<i32>,
) -> CommitAnalysis {
    let mut heatmap = ActivityHeatmap::default();
    let mut weekly: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    let mut timestamps: Vec<DateTime<Utc>> = Vec::with_capacity(commits.len());

    for raw in commits {
        let Some(utc) = commit_date(raw) else { continue };
        timestamps.push(utc);

        let offset_secs = raw
            .author
            .as_ref()
            .and_then(|a| author_offsets.get(a.login.as_str()).copied())
            .or(fallback_offset_secs)
            .unwrap_or(0);
        let offset = FixedOffset::east_opt(offset_secs).unwrap_or_else(|| FixedOffset::east_opt(0).expect("UTC offset"));
        let local = utc.with_timezone(&offset);

        let day = local.weekday().num_days_from_sunday() as usize;
        let hour = local.hour() as usize;
        heatmap.record(day, hour);

        let week_start = local.date_naive() - chrono::Days::new(u64::from(local.weekday().num_days_from_monday()));
        *weekly.entry(week_start).or_insert(0) += 1;
    }

    CommitAnalysis {
        total: commits.len(),
        // The list is newest-first, so the boundaries carry the range.
        last_commit: timestamps.first().copied(),
        first_commit: timestamps.last().copied(),
        patterns: work_patterns(&heatmap),
        heatmap,
        weekly: weekly.into_iter().map(|(week_start, count)| WeekBucket { week_start, count }).collect(),
        conventions: convention::detect_conventions(commits.iter().map(|c| c.commit.message.as_str())),
    }
}

/// Parse the raw commit date; missing or malformed dates are skipped with a
/// warning rather than failing the run.
fn commit_date(raw: &RawCommit) -> Option<DateTime<Utc>> {
    let date = raw.commit.author.as_ref().and_then(|a| a.date.as_deref());
    let Some(date) = date else {
        log::warn!(target: LOG_TARGET, "commit {} has no author date, skipping", raw.sha);
        return None;
    };

    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(err) => {
            log::warn!(target: LOG_TARGET, "commit {} has unparseable date {date:?}: {err}, skipping", raw.sha);
            None
        }
    }
}
