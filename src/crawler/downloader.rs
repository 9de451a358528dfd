use std::path::Path;

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::REFERER;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

use crate::episode::number_images;

pub struct Downloader {
    client: Client,
    referer: String,
}

impl Downloader {
    pub fn new(user_agent: &str, referer: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, referer })
    }

    /// Raw body of an episode page.
    #[instrument(skip(self))]
    pub async fn page(&self, url: &str) -> Result<String> {
        info!("Downloading page {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("failed to fetch page {}", url))?;

        response
            .text()
            .await
            .with_context(|| format!("failed to read page {}", url))
    }

    /// Streams one image to `filepath`, truncating any existing file.
    pub async fn image(&self, url: &str, filepath: &Path) -> Result<u64> {
        let mut response = self
            .client
            .get(url)
            .header(REFERER, &self.referer)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("failed to download image {}", url))?;

        let mut file = fs::File::create(filepath)
            .await
            .with_context(|| format!("failed to create {}", filepath.display()))?;

        let mut written = 0u64;
        while let Some(chunk) = response
            .chunk()
            .await
            .with_context(|| format!("failed to read image {}", url))?
        {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        Ok(written)
    }

    /// Downloads every image of an episode into `<output_dir>/<title>/` and
    /// returns their paths relative to `output_dir`, in page order.
    #[instrument(skip(self, urls, output_dir))]
    pub async fn episode_images(
        &self,
        urls: Vec<String>,
        output_dir: &Path,
        title: &str,
    ) -> Result<Vec<String>> {
        let mut paths = Vec::with_capacity(urls.len());

        for image in number_images(urls) {
            let episode_dir = output_dir.join(title);
            fs::create_dir_all(&episode_dir)
                .await
                .with_context(|| format!("failed to create {}", episode_dir.display()))?;

            let filepath = image.file_path(output_dir, title);
            let size = self.image(&image.url, &filepath).await?;
            info!("Saved {} ({} bytes)", filepath.display(), size);

            paths.push(image.relative_path(title));
        }

        Ok(paths)
    }
}
