use std::num::NonZeroU32;

use derive_more::{Display, From, FromStr};
use serde::{Deserialize, Serialize, Serializer};
use typed_builder::TypedBuilder;

pub const UNKNOWN: &str = "Unknown";
pub const NO_RATING: &str = "No rating";

/// One row of a diary page.
/// Every field is always populated; a field that could not be extracted holds
/// [`UNKNOWN`] (or [`NO_RATING`] for the rating).
#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Serialize, Deserialize)]
pub struct DiaryRecord {
    #[builder(default = UNKNOWN.to_owned(), setter(into))]
    pub film_name: String,
    #[builder(default = UNKNOWN.to_owned(), setter(into))]
    pub release_date: String,
    #[builder(default = NO_RATING.to_owned(), setter(into))]
    pub rating: String,
    #[builder(default = UNKNOWN.to_owned(), setter(into))]
    pub watch_date: String,
}

/// A diary record as it appears in a per-year ranking.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RankedEntry {
    pub film_name: String,
    #[serde(serialize_with = "serialize_rating")]
    pub rating: f64,
    pub watch_date: String,
}

/// Whole ratings are written as integers (`5`, not `5.0`).
fn serialize_rating<S: Serializer>(rating: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if rating.fract() == 0.0 && rating.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*rating as i64)
    } else {
        serializer.serialize_f64(*rating)
    }
}

/// Letterboxd username, as it appears in profile URLs.
#[derive(Clone, PartialEq, Eq, Debug, From, FromStr, Display, Serialize, Deserialize)]
pub struct UserLogin(String);
impl UserLogin {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 1-based index of a diary page.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, From, Display, Serialize, Deserialize,
)]
pub struct PageIndex(NonZeroU32);
impl PageIndex {
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Pages `1..=count`, in ascending order.
    pub fn up_to(count: NonZeroU32) -> impl Iterator<Item = PageIndex> {
        (1..=count.get()).filter_map(NonZeroU32::new).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use itertools::Itertools;

    use super::{DiaryRecord, PageIndex, RankedEntry, NO_RATING, UNKNOWN};

    #[test]
    fn builder_fills_sentinels() {
        let record = DiaryRecord::builder().film_name("Heat").build();
        assert_eq!(record.film_name, "Heat");
        assert_eq!(record.release_date, UNKNOWN);
        assert_eq!(record.rating, NO_RATING);
        assert_eq!(record.watch_date, UNKNOWN);
    }

    #[test]
    fn serialized_field_order() {
        let record = DiaryRecord::builder()
            .film_name("Heat")
            .release_date("1995")
            .rating("★★★★★")
            .watch_date("14")
            .build();
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"film_name":"Heat","release_date":"1995","rating":"★★★★★","watch_date":"14"}"#
        );
    }

    #[test]
    fn whole_ratings_are_integers() {
        let entries = [5.0, 0.0, 4.5]
            .into_iter()
            .map(|rating| RankedEntry {
                film_name: "Heat".to_owned(),
                rating,
                watch_date: "14".to_owned(),
            })
            .collect_vec();
        assert_eq!(
            serde_json::to_string(&entries).unwrap(),
            concat!(
                r#"[{"film_name":"Heat","rating":5,"watch_date":"14"},"#,
                r#"{"film_name":"Heat","rating":0,"watch_date":"14"},"#,
                r#"{"film_name":"Heat","rating":4.5,"watch_date":"14"}]"#
            )
        );
        let json = serde_json::to_string(&entries).unwrap();
        let back: Vec<RankedEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entries);
    }

    #[test]
    fn pages_up_to() {
        let pages = PageIndex::up_to(NonZeroU32::new(3).unwrap())
            .map(PageIndex::get)
            .collect_vec();
        assert_eq!(pages, [1, 2, 3]);
        assert_eq!(PageIndex::FIRST.get(), 1);
    }
}
