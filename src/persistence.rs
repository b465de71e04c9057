use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use diary_scraping_utils::fs_json_util::write_json_pretty;
use log::info;
use serde::Serialize;

use crate::{rating::Year, schema::UserLogin};

/// `letterboxd_{user}_{YYYYmmdd_HHMMSS}.json`
pub fn diary_file_name<Tz: TimeZone>(user: &UserLogin, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("letterboxd_{user}_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// `top_{year}_films_{user}.json`
pub fn top_file_name(year: Year, user: &UserLogin) -> String {
    format!("top_{year}_films_{user}.json")
}

/// Writes `records` under `dir/file_name` and returns the resulting path.
pub fn save_records<T: Serialize>(
    dir: &Path,
    file_name: &str,
    records: &[T],
) -> anyhow::Result<PathBuf> {
    let path = dir.join(file_name);
    write_json_pretty(&path, &records)?;
    info!("Saved {} records to {path:?}", records.len());
    Ok(path)
}
