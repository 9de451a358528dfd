use std::path::PathBuf;

use clap::Parser;

/// Download all images from a LINE Webtoon comic episode.
#[derive(Debug, Parser)]
#[command(name = "webtoon-dl", version, about)]
pub struct Cli {
    /// Webtoon comic URL
    #[arg(value_name = "URL")]
    pub url: String,

    /// directory to store downloaded images in
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// be verbose
    #[arg(short, long)]
    pub verbose: bool,

    /// configuration file (default: ./webtoon-dl.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["webtoon-dl", "https://example.com/ep/1"]).unwrap();
        assert_eq!(cli.url, "https://example.com/ep/1");
        assert_eq!(cli.dir, PathBuf::from("."));
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn short_and_long_flags() {
        let cli = Cli::try_parse_from(["webtoon-dl", "-v", "-d", "out", "u"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.dir, PathBuf::from("out"));

        let cli = Cli::try_parse_from(["webtoon-dl", "--dir=comics", "--verbose", "u"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("comics"));
        assert!(cli.verbose);
    }

    #[test]
    fn missing_url_exits_with_usage_status() {
        let err = Cli::try_parse_from(["webtoon-dl", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unknown_flag_exits_with_usage_status() {
        let err = Cli::try_parse_from(["webtoon-dl", "--bogus", "u"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
