pub mod downloader;
pub mod parser;
pub mod processor;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, instrument, warn};

use crate::config::Config;
use crate::episode::Episode;

pub use downloader::Downloader;
pub use parser::Parser;
pub use processor::Processor;

pub struct WebtoonCrawler {
    parser: Parser,
    downloader: Downloader,
    processor: Processor,
    output_dir: PathBuf,
}

impl WebtoonCrawler {
    pub fn new(config: Config, output_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            downloader: Downloader::new(&config.user_agent, config.referer)?,
            parser: Parser::new(config.site),
            processor: Processor::new(output_dir.clone()),
            output_dir,
        })
    }

    /// Processes `start_url` and every episode reachable through next links,
    /// one after another, until a page has no next link.
    pub async fn run(&self, start_url: &str) -> Result<Vec<Episode>> {
        let mut episodes = Vec::new();
        let mut next_url = Some(start_url.to_owned());

        while let Some(url) = next_url {
            let (episode, next) = self.episode(&url).await?;
            episodes.push(episode);
            if let Some(next) = &next {
                info!("Next episode: {}", next);
            }
            next_url = next;
        }

        Ok(episodes)
    }

    /// Fetch, extract, download and render a single episode. Returns the
    /// episode and the link to the one after it, if the page has one.
    #[instrument(skip(self))]
    pub async fn episode(&self, url: &str) -> Result<(Episode, Option<String>)> {
        let html = self.downloader.page(url).await?;
        let page = self.parser.episode_page(&html, url);

        let title = page.title.unwrap_or_else(|| {
            warn!("Using an empty title for {}", url);
            String::new()
        });
        info!("Episode \"{}\": {} image(s)", title, page.images.len());

        let images = self
            .downloader
            .episode_images(page.images, &self.output_dir, &title)
            .await?;
        let html_path = self.processor.write_page(&title, &images).await?;

        let episode = Episode {
            url: url.to_owned(),
            title,
            images,
            page: html_path,
        };
        Ok((episode, page.next_url))
    }
}
