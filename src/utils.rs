use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

/// Creates the output directory if needed. An existing non-directory at
/// `dir` is an error.
#[instrument]
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        if !dir.is_dir() {
            anyhow::bail!("not a directory: {}", dir.display());
        }
        debug!("Output directory exists");
        return Ok(());
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))
}

pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn format_elapsed(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms >= 60000 {
        let mins = total_ms / 60000;
        let secs = (total_ms % 60000) / 1000;
        format!("{}m{}s", mins, secs)
    } else if total_ms >= 1000 {
        let secs = total_ms / 1000;
        let ms_remaining = total_ms % 1000;
        format!("{}.{:03}s", secs, ms_remaining)
    } else {
        format!("{}ms", total_ms)
    }
}

pub fn display_elapsed_time(episodes: usize, duration: Duration) {
    info!(
        "Finished {} episode(s) in {}",
        episodes,
        format_elapsed(duration)
    );
}
