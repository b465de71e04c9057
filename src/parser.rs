use diary_scraping_utils::selector;
use scraper::{ElementRef, Html, Selector};

use crate::schema::{DiaryRecord, NO_RATING, UNKNOWN};

/// Yields one record per diary row, in document order.
/// Cells that are missing from a row leave their field at its sentinel.
pub fn parse_entries(html: &Html) -> impl Iterator<Item = DiaryRecord> + '_ {
    html.select(selector!("tr.diary-entry-row"))
        .map(parse_entry)
}

fn parse_entry(row: ElementRef) -> DiaryRecord {
    let film_name = first(row, selector!("td.td-film-details"))
        .and_then(|cell| first(cell, selector!("a")));
    let released = first(row, selector!("td.td-released"));
    let rating = first(row, selector!("td.td-rating"))
        .and_then(|cell| first(cell, selector!("span.rating")));
    let day = first(row, selector!("td.td-day.diary-day.center"));
    DiaryRecord {
        film_name: text_or(film_name, UNKNOWN),
        release_date: text_or(released, UNKNOWN),
        rating: text_or(rating, NO_RATING),
        watch_date: text_or(day, UNKNOWN),
    }
}

fn first<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    element.select(selector).next()
}

fn text_or(element: Option<ElementRef>, sentinel: &str) -> String {
    match element {
        Some(element) => element.text().collect::<String>().trim().to_owned(),
        None => sentinel.to_owned(),
    }
}
