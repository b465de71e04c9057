use std::{cmp::Reverse, collections::BTreeMap};

use diary_scraping_utils::regex;
use ordered_float::OrderedFloat;

use crate::schema::{DiaryRecord, RankedEntry, NO_RATING};

pub const STAR: char = '★';
pub const HALF_STAR: char = '½';
pub const TOP_COUNT: usize = 10;

pub type Year = u16;

/// Converts the rating text of a diary row into a number of stars.
/// Never fails: anything that cannot be read becomes `0.0`.
pub fn normalize_rating(text: &str) -> f64 {
    if text == NO_RATING {
        return 0.0;
    }
    if text.starts_with(STAR) {
        let rest = text.trim_start_matches(STAR);
        let stars = text.chars().count() - rest.chars().count();
        return match rest {
            "" => stars as f64,
            "½" => stars as f64 + 0.5,
            // Unexpected glyphs after the stars; count characters like the site's
            // one-glyph-per-star encoding would.
            _ => text.chars().count() as f64,
        };
    }
    if text.starts_with(HALF_STAR) {
        return 0.5;
    }
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .unwrap_or(0.0)
}

/// Release year of a record, if it is written as exactly four ASCII digits.
pub fn release_year(record: &DiaryRecord) -> Option<Year> {
    let text = &record.release_date;
    if !regex!(r"^[0-9]{4}$").is_match(text) {
        return None;
    }
    text.parse().ok()
}

pub fn to_ranked_entry(record: &DiaryRecord) -> RankedEntry {
    RankedEntry {
        film_name: record.film_name.clone(),
        rating: normalize_rating(&record.rating),
        watch_date: record.watch_date.clone(),
    }
}

/// Records with a readable release year, grouped by that year.
/// Within a year, entries keep their order in `records`.
pub fn group_by_year<'a>(
    records: impl IntoIterator<Item = &'a DiaryRecord>,
) -> BTreeMap<Year, Vec<RankedEntry>> {
    let mut groups = BTreeMap::<_, Vec<_>>::new();
    for record in records {
        if let Some(year) = release_year(record) {
            groups.entry(year).or_default().push(to_ranked_entry(record));
        }
    }
    groups
}

/// Best-rated films released in `year`, at most [`TOP_COUNT`] of them.
/// Films with equal ratings keep their relative order in `records`.
pub fn rank(records: &[DiaryRecord], year: i32) -> Vec<RankedEntry> {
    let Ok(year) = Year::try_from(year) else {
        return vec![];
    };
    let mut films = records
        .iter()
        .filter(|record| release_year(record) == Some(year))
        .map(to_ranked_entry)
        .collect::<Vec<_>>();
    // `sort_by_key` is stable.
    films.sort_by_key(|entry| Reverse(OrderedFloat(entry.rating)));
    films.truncate(TOP_COUNT);
    films
}

/// Distinct valid release years, ascending.
pub fn years_present(records: &[DiaryRecord]) -> Vec<Year> {
    group_by_year(records).into_keys().collect()
}
