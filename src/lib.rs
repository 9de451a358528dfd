pub mod cli;
pub mod config;
pub mod crawler;
pub mod episode;
pub mod extractor;
pub mod logger;
pub mod title;
pub mod utils;

pub use cli::Cli;
pub use config::Config;
pub use crawler::WebtoonCrawler;
pub use episode::{Episode, EpisodePage};
