use std::str::FromStr;

use thiserror::Error;

use crate::schema::RankedEntry;

/// What the user typed at the year prompt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum YearCommand {
    Year(i32),
    Quit,
}

#[derive(PartialEq, Eq, Debug, Error)]
#[error("Please enter a valid year (e.g. 1999)")]
pub struct YearFormatError(pub String);

impl FromStr for YearCommand {
    type Err = YearFormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("q") {
            return Ok(Self::Quit);
        }
        s.parse()
            .map(Self::Year)
            .map_err(|_| YearFormatError(s.to_owned()))
    }
}

/// `{rank}. {film} - Rating: {rating} - Watched: {date}`, ranks starting at 1.
pub fn ranking_lines(entries: &[RankedEntry]) -> impl Iterator<Item = String> + '_ {
    (1..).zip(entries).map(|(rank, entry)| {
        format!(
            "{rank}. {} - Rating: {} - Watched: {}",
            entry.film_name,
            entry.rating,
            entry.watch_date
        )
    })
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{ranking_lines, YearCommand, YearFormatError};
    use crate::schema::RankedEntry;

    #[test]
    fn year_command() {
        assert_eq!("1999".parse(), Ok(YearCommand::Year(1999)));
        assert_eq!(" 2001\n".parse(), Ok(YearCommand::Year(2001)));
        assert_eq!("q".parse(), Ok(YearCommand::Quit));
        assert_eq!("Q".parse(), Ok(YearCommand::Quit));
        assert_eq!(
            "nineteen".parse::<YearCommand>(),
            Err(YearFormatError("nineteen".to_owned()))
        );
        assert!("".parse::<YearCommand>().is_err());
    }

    #[test]
    fn lines() {
        let entries = [
            RankedEntry {
                film_name: "Heat".to_owned(),
                rating: 5.0,
                watch_date: "14".to_owned(),
            },
            RankedEntry {
                film_name: "Casino".to_owned(),
                rating: 0.5,
                watch_date: "Unknown".to_owned(),
            },
        ];
        let lines = ranking_lines(&entries).collect_vec();
        assert_eq!(
            lines,
            [
                "1. Heat - Rating: 5 - Watched: 14",
                "2. Casino - Rating: 0.5 - Watched: Unknown"
            ]
        );
    }
}
