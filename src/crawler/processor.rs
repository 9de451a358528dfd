use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{info, instrument};

use crate::title;
use crate::utils::escape_html;

static HTML_CONTENT_1: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>"#;

static HTML_CONTENT_2: &str = r#"</title>
    <link href="../main.css" rel="stylesheet">
    <script src="script.js" type="text/javascript"></script>
  </head>
  <body>
    <h1>"#;

static HTML_CONTENT_3: &str = r#"</h1>
    <button>
      <a href=""#;

static HTML_CONTENT_4: &str = r#"">next</a>
    </button>
    <div class="body">
"#;

static HTML_CONTENT_5: &str = r#"    </div>
  </body>
</html>"#;

/// Writes the reader page of each episode next to its image directory.
pub struct Processor {
    output_dir: PathBuf,
}

impl Processor {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn render(&self, chapter_title: &str, images: &[String]) -> String {
        let title = escape_html(chapter_title);
        let next_page = format!("{}.html", title::increment(chapter_title));

        let mut html = String::new();
        html.push_str(HTML_CONTENT_1);
        html.push_str(&title);
        html.push_str(HTML_CONTENT_2);
        html.push_str(&title);
        html.push_str(HTML_CONTENT_3);
        html.push_str(&escape_html(&next_page));
        html.push_str(HTML_CONTENT_4);
        for path in images {
            html.push_str(&format!("      <img src=\"{}\">\n", escape_html(path)));
        }
        html.push_str(HTML_CONTENT_5);
        html
    }

    /// Renders and saves `<output_dir>/<title>.html`, overwriting.
    #[instrument(skip_all)]
    pub async fn write_page(&self, chapter_title: &str, images: &[String]) -> Result<PathBuf> {
        let html = self.render(chapter_title, images);
        let html_path = self.output_dir.join(format!("{}.html", chapter_title));
        fs::write(&html_path, html)
            .await
            .with_context(|| format!("failed to write {}", html_path.display()))?;

        info!("Page saved to {}", html_path.display());
        Ok(html_path)
    }
}
