//! Location resolution.
//!
//! Normalizes the free-text "location" strings found in user profiles into a
//! canonical city/country/timezone record. Resolution is best-effort: an
//! unresolvable string is an expected outcome (`None`), never an error.
//! Ambiguous multi-region strings ("San Francisco Bay Area") are deliberately
//! left unresolved rather than guessed.

mod gazetteer;

pub use gazetteer::{COUNTRIES, CountryRecord, PLACES, PlaceRecord};

use gazetteer::{ALIASES, country_by_code, country_by_name, places_by_name};
use serde::Serialize;

/// A resolved location: city-level when the gazetteer matched a place,
/// country-level otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationRecord {
    pub city: Option<String>,
    pub country: String,
    pub country_code: String,
    pub timezone: String,
    /// Standard (non-DST) UTC offset of the timezone.
    pub offset_secs: i32,
    pub flag: String,
}

impl LocationRecord {
    fn from_country(country: &CountryRecord) -> Self {
        Self {
            city: None,
            country: country.name.to_owned(),
            country_code: country.code.to_owned(),
            timezone: country.timezone.to_owned(),
            offset_secs: country.offset_secs,
            flag: flag_emoji(country.code),
        }
    }

    fn from_place(place: &PlaceRecord) -> Self {
        let country_name = country_by_code(place.country).map_or_else(|| place.country.to_owned(), |c| c.name.to_owned());
        Self {
            city: Some(place.display.to_owned()),
            country: country_name,
            country_code: place.country.to_owned(),
            timezone: place.timezone.to_owned(),
            offset_secs: place.offset_secs,
            flag: flag_emoji(place.country),
        }
    }
}

/// Resolve a free-text location string.
///
/// Pipeline: normalize, alias-substitute, exact lookup (country code for
/// short strings, then country name, then gazetteer places with the
/// highest-population match winning ties), and finally a comma-split retry
/// where the first matching segment wins.
#[must_use]
pub fn resolve(raw: &str) -> Option<LocationRecord> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return None;
    }

    // Whole-string attempt first, treating commas as plain separators.
    let whole = collapse_suffix(&normalized.replace(',', " "));
    if let Some(record) = resolve_single(&whole) {
        return Some(record);
    }

    if normalized.contains(',') {
        for segment in normalized.split(',') {
            let segment = collapse_suffix(segment.trim());
            if let Some(record) = resolve_single(&segment) {
                return Some(record);
            }
        }
    }

    None
}

/// Look up a single normalized term.
fn resolve_single(term: &str) -> Option<LocationRecord> {
    if term.is_empty() {
        return None;
    }

    let term = ALIASES
        .iter()
        .find(|(from, _)| *from == term)
        .map_or(term, |(_, to)| *to);

    // Short strings are most likely ISO country codes.
    if term.len() <= 3
        && let Some(country) = country_by_code(term)
    {
        return Some(LocationRecord::from_country(country));
    }

    if let Some(country) = country_by_name(term) {
        return Some(LocationRecord::from_country(country));
    }

    // Among same-named places, highest population wins; ties keep the first
    // table entry so the result is deterministic.
    places_by_name(term)
        .fold(None::<&PlaceRecord>, |best, candidate| match best {
            Some(b) if b.population >= candidate.population => Some(b),
            _ => Some(candidate),
        })
        .map(LocationRecord::from_place)
}

/// Lowercase, strip parenthetical suffixes, and replace punctuation (other
/// than commas, which drive the segment-retry stage) with spaces.
fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut depth = 0u32;

    for c in raw.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth > 0 => {}
            ',' => out.push(','),
            c if c.is_alphanumeric() => out.extend(c.to_lowercase()),
            _ => out.push(' '),
        }
    }

    // Collapse runs of whitespace.
    let mut collapsed = String::with_capacity(out.len());
    let mut last_was_space = true;
    for c in out.chars() {
        if c == ' ' {
            if !last_was_space {
                collapsed.push(' ');
            }
            last_was_space = true;
        } else {
            collapsed.push(c);
            last_was_space = false;
        }
    }

    collapsed.trim().trim_matches(',').trim().to_owned()
}

/// Drop trailing "city" / "area" filler words ("New York City" -> "new york").
fn collapse_suffix(term: &str) -> String {
    let mut tokens: Vec<&str> = term.split_whitespace().collect();
    while let Some(last) = tokens.last() {
        if tokens.len() > 1 && matches!(*last, "city" | "area") {
            let _ = tokens.pop();
        } else {
            break;
        }
    }
    tokens.join(" ")
}

/// Build the regional-indicator flag emoji for an ISO alpha-2 country code.
#[must_use]
pub fn flag_emoji(code: &str) -> String {
    code.chars()
        .filter_map(|c| {
            let c = c.to_ascii_uppercase();
            c.is_ascii_uppercase()
                .then(|| char::from_u32(0x1F1E6 + (u32::from(c) - u32::from('A'))))
                .flatten()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_city() {
        let record = resolve("Berlin").unwrap();
        assert_eq!(record.city.as_deref(), Some("Berlin"));
        assert_eq!(record.country, "Germany");
        assert_eq!(record.country_code, "DE");
        assert_eq!(record.timezone, "Europe/Berlin");
        assert_eq!(record.offset_secs, 3_600);
    }

    #[test]
    fn test_resolve_country_name() {
        let record = resolve("Germany").unwrap();
        assert!(record.city.is_none());
        assert_eq!(record.country_code, "DE");
    }

    #[test]
    fn test_resolve_iso_code() {
        let record = resolve("DE").unwrap();
        assert_eq!(record.country, "Germany");
    }

    #[test]
    fn test_resolve_alias_usa() {
        let record = resolve("USA").unwrap();
        assert_eq!(record.country, "United States");
        assert_eq!(record.flag, "\u{1F1FA}\u{1F1F8}");
    }

    #[test]
    fn test_resolve_alias_with_punctuation() {
        let record = resolve("U.S.A.").unwrap();
        assert_eq!(record.country, "United States");
    }

    #[test]
    fn test_resolve_alias_nyc() {
        let record = resolve("NYC").unwrap();
        assert_eq!(record.city.as_deref(), Some("New York"));
    }

    #[test]
    fn test_resolve_city_suffix_collapsed() {
        let record = resolve("New York City").unwrap();
        assert_eq!(record.city.as_deref(), Some("New York"));
    }

    #[test]
    fn test_resolve_parenthetical_stripped() {
        let record = resolve("Berlin (Remote)").unwrap();
        assert_eq!(record.city.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_resolve_comma_fallback_city_state() {
        // "portland or" as a whole matches nothing; the first segment does.
        let record = resolve("Portland, OR").unwrap();
        assert_eq!(record.city.as_deref(), Some("Portland"));
        assert_eq!(record.country_code, "US");
    }

    #[test]
    fn test_resolve_comma_fallback_second_segment() {
        let record = resolve("Nowheretown, Germany").unwrap();
        assert!(record.city.is_none());
        assert_eq!(record.country_code, "DE");
    }

    #[test]
    fn test_resolve_bay_area_stays_unresolved() {
        assert!(resolve("San Francisco Bay Area").is_none());
    }

    #[test]
    fn test_resolve_gibberish() {
        assert!(resolve("somewhere on planet earth").is_none());
    }

    #[test]
    fn test_resolve_empty() {
        assert!(resolve("").is_none());
        assert!(resolve("   ").is_none());
    }

    #[test]
    fn test_resolve_remote_only() {
        assert!(resolve("(Remote)").is_none());
    }

    #[test]
    fn test_resolve_population_tie_break() {
        // Cambridge exists in both the US and UK tables; the UK entry has the
        // larger population and must win deterministically.
        let record = resolve("Cambridge").unwrap();
        assert_eq!(record.country_code, "GB");
    }

    #[test]
    fn test_resolve_half_hour_offset() {
        let record = resolve("Bangalore, India").unwrap();
        assert_eq!(record.offset_secs, 19_800);
        assert_eq!(record.timezone, "Asia/Kolkata");
    }

    #[test]
    fn test_resolve_state() {
        let record = resolve("California").unwrap();
        assert_eq!(record.city.as_deref(), Some("California"));
        assert_eq!(record.timezone, "America/Los_Angeles");
    }

    #[test]
    fn test_resolve_kiev_alias() {
        let record = resolve("Kiev").unwrap();
        assert_eq!(record.city.as_deref(), Some("Kyiv"));
    }

    #[test]
    fn test_flag_emoji() {
        assert_eq!(flag_emoji("DE"), "\u{1F1E9}\u{1F1EA}");
        assert_eq!(flag_emoji("us"), "\u{1F1FA}\u{1F1F8}");
    }

    #[test]
    fn test_flag_emoji_ignores_non_ascii() {
        assert_eq!(flag_emoji("D3"), "\u{1F1E9}");
    }

    #[test]
    fn test_normalize_keeps_commas() {
        assert_eq!(normalize("Portland, OR."), "portland, or");
    }

    #[test]
    fn test_collapse_suffix_single_word_kept() {
        assert_eq!(collapse_suffix("city"), "city");
    }
}
