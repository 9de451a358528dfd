use std::path::{Path, PathBuf};

/// What one parsed episode page yields. `None` means the page had no such
/// element, which is expected for `next_url` on the last episode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodePage {
    pub images: Vec<String>,
    pub title: Option<String>,
    pub next_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Image {
    pub index: usize,
    pub url: String,
}

impl Image {
    /// `<title>/<NNN>.jpg`, relative to the output directory.
    pub fn relative_path(&self, title: &str) -> String {
        format!("{}/{:03}.jpg", title, self.index)
    }

    pub fn file_path(&self, output_dir: &Path, title: &str) -> PathBuf {
        output_dir.join(title).join(format!("{:03}.jpg", self.index))
    }
}

/// Numbers image URLs from 1 in page order.
pub fn number_images(urls: Vec<String>) -> Vec<Image> {
    urls.into_iter()
        .enumerate()
        .map(|(i, url)| Image { index: i + 1, url })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Episode {
    pub url: String,
    pub title: String,
    pub images: Vec<String>,
    pub page: PathBuf,
}
