use std::path::PathBuf;

use clap::Parser;
use diary_scraping_utils::fs_json_util::{read_json, write_json_pretty};
use letterboxd_diary::{rating::rank, schema::DiaryRecord, shell::ranking_lines};
use log::info;

/// Ranks the films of a diary dump written by `letterboxd-diary`.
#[derive(Parser)]
struct Opts {
    diary_file: PathBuf,
    year: i32,
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let records: Vec<DiaryRecord> = read_json(&opts.diary_file)?;
    info!("Loaded {} records from {:?}", records.len(), opts.diary_file);

    let top = rank(&records, opts.year);
    if top.is_empty() {
        println!("No films found for year {}", opts.year);
    }
    for line in ranking_lines(&top) {
        println!("{line}");
    }
    if let Some(output) = &opts.output {
        write_json_pretty(output, &top)?;
        println!("Data saved to {}", output.display());
    }
    Ok(())
}
