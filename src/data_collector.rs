use std::{num::NonZeroU32, time::Duration};

use getset::Getters;
use log::{info, trace, warn};
use scraper::Html;
use tokio::time::sleep;

use crate::{
    api::DiaryPageSource,
    parser::parse_entries,
    schema::{DiaryRecord, PageIndex},
};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);

/// Everything gathered from a run over the diary pages.
#[derive(Debug, Default, Getters)]
pub struct CollectedDiary {
    #[getset(get = "pub")]
    records: Vec<DiaryRecord>,
    #[getset(get = "pub")]
    failed_pages: Vec<PageIndex>,
}
impl CollectedDiary {
    pub fn into_records(self) -> Vec<DiaryRecord> {
        self.records
    }

    fn add_page(&mut self, markup: &str) {
        let document = Html::parse_document(markup);
        self.records.extend(parse_entries(&document));
    }
}

/// Fetches pages `1..=pages` one by one and accumulates their rows in order.
/// A page that cannot be fetched is logged and skipped.
/// `interval` is waited after every attempt, including failed ones.
pub async fn collect_diary<S: DiaryPageSource>(
    source: &S,
    pages: NonZeroU32,
    interval: Duration,
) -> CollectedDiary {
    let mut diary = CollectedDiary::default();
    for page in PageIndex::up_to(pages) {
        trace!("Fetching page {page}...");
        match source.fetch_page(page).await {
            Ok(markup) => {
                diary.add_page(&markup);
                println!(
                    "Processed page {page}, total films: {}",
                    diary.records.len()
                );
            }
            Err(e) => {
                warn!("Error processing page {page}: {e}");
                diary.failed_pages.push(page);
            }
        }
        sleep(interval).await;
    }
    info!(
        "Collected {} records from {} pages ({} failed).",
        diary.records.len(),
        pages,
        diary.failed_pages.len()
    );
    diary
}
