use std::{num::NonZeroU32, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use diary_scraping_utils::fs_json_util::read_toml;
use inquire::{CustomType, InquireError, Text};
use joinery::JoinableIterator;
use letterboxd_diary::{
    api::DiaryClient,
    config::{ConfigFile, Settings, DEFAULT_CONFIG_PATH},
    data_collector::collect_diary,
    persistence::{diary_file_name, save_records, top_file_name},
    rating::{rank, years_present},
    schema::{DiaryRecord, UserLogin},
    shell::{ranking_lines, YearCommand},
};
use log::{info, warn};
use url::Url;

#[derive(Parser)]
struct Opts {
    /// Letterboxd username; prompted for when omitted.
    #[arg(long)]
    user: Option<UserLogin>,
    /// Number of diary pages to scan; prompted for when omitted.
    #[arg(long)]
    pages: Option<NonZeroU32>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    output_dir: Option<PathBuf>,
    #[arg(long)]
    base_url: Option<Url>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let settings = load_settings(&opts)?;
    info!("Settings: {settings:?}");

    let user = match opts.user.or(settings.user.clone()) {
        Some(user) => user,
        None => match Text::new("Enter Letterboxd username:").prompt() {
            Ok(user) => user.trim().to_owned().into(),
            Err(InquireError::OperationInterrupted | InquireError::OperationCanceled) => {
                return Ok(())
            }
            Err(e) => return Err(e.into()),
        },
    };
    let pages = match opts.pages.or(settings.pages) {
        Some(pages) => pages,
        None => match CustomType::<NonZeroU32>::new("How many pages to scan (1-10 recommended):")
            .with_error_message("Please type a positive integer")
            .prompt()
        {
            Ok(pages) => pages,
            Err(InquireError::OperationInterrupted | InquireError::OperationCanceled) => {
                return Ok(())
            }
            Err(e) => return Err(e.into()),
        },
    };

    println!("Getting diary data for {user}...");
    let client = DiaryClient::new(settings.base_url.clone(), user.clone())?;
    let diary = collect_diary(&client, pages, settings.interval).await;
    if !diary.failed_pages().is_empty() {
        warn!(
            "Pages that could not be fetched: {}",
            diary.failed_pages().iter().join_with(", ")
        );
    }
    let records = diary.into_records();
    if records.is_empty() {
        println!("No films found. Check username or try again later.");
        return Ok(());
    }

    fs_err::create_dir_all(&settings.output_dir)?;
    let file_name = diary_file_name(&user, &chrono::Local::now());
    let path = save_records(&settings.output_dir, &file_name, &records)?;
    println!("Data saved to {}", path.display());
    println!();
    println!("Successfully collected data for {} films.", records.len());

    year_loop(&records, &user, &settings)
}

fn load_settings(opts: &Opts) -> anyhow::Result<Settings> {
    let config = match &opts.config {
        Some(path) => read_toml(path)?,
        None if std::path::Path::new(DEFAULT_CONFIG_PATH).exists() => {
            read_toml(DEFAULT_CONFIG_PATH)?
        }
        None => ConfigFile::default(),
    };
    let mut settings = config.into_settings()?;
    if let Some(base_url) = &opts.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(output_dir) = &opts.output_dir {
        settings.output_dir = output_dir.clone();
    }
    Ok(settings)
}

fn year_loop(records: &[DiaryRecord], user: &UserLogin, settings: &Settings) -> anyhow::Result<()> {
    loop {
        println!();
        let input = match Text::new("Enter year to get top films (or 'q' to quit):").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationInterrupted | InquireError::OperationCanceled) => break,
            Err(e) => return Err(e.into()),
        };
        let year = match input.parse() {
            Ok(YearCommand::Quit) => break,
            Ok(YearCommand::Year(year)) => year,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let top = rank(records, year);
        if top.is_empty() {
            println!("No films found for year {year}");
            let years = years_present(records);
            if !years.is_empty() {
                println!("Years in this diary: {}", years.iter().join_with(", "));
            }
            continue;
        }
        println!();
        println!("Top 10 films for {year}:");
        for line in ranking_lines(&top) {
            println!("{line}");
        }

        // `rank` only returns entries for years that fit in `Year`.
        let year = year.try_into().context("Year out of range")?;
        let path = save_records(&settings.output_dir, &top_file_name(year, user), &top)?;
        println!("Data saved to {}", path.display());
    }
    Ok(())
}
