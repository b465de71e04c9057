use std::path::PathBuf;

use clap::Parser;
use letterboxd_diary::parser::parse_entries;
use scraper::Html;

#[derive(Parser)]
struct Opts {
    input_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    let html = Html::parse_document(&fs_err::read_to_string(opts.input_file)?);
    let mut count = 0;
    for record in parse_entries(&html) {
        count += 1;
        println!("{record:?}");
    }
    println!("{count} rows found");
    Ok(())
}
