use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use webtoon_dl::utils::{display_elapsed_time, prepare_output_dir};
use webtoon_dl::{Cli, Config, WebtoonCrawler, logger};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    prepare_output_dir(&cli.dir)?;
    let config = Config::load(cli.config.as_deref())?;
    let crawler = WebtoonCrawler::new(config, cli.dir)?;

    let start = Instant::now();
    let episodes = crawler.run(&cli.url).await?;
    display_elapsed_time(episodes.len(), start.elapsed());

    Ok(())
}
