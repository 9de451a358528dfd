use scraper::Html;
use tracing::{info, instrument, warn};
use url::Url;

use crate::config::SiteConfig;
use crate::episode::EpisodePage;
use crate::title;

pub struct Parser {
    site: SiteConfig,
}

impl Parser {
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    /// Pulls images, title and next link out of one episode page.
    ///
    /// Lookups never fail: whatever the page lacks comes back empty or `None`.
    #[instrument(skip_all, fields(site = %self.site.name))]
    pub fn episode_page(&self, html: &str, page_url: &str) -> EpisodePage {
        let document = Html::parse_document(html);
        let root = document.root_element();
        let base = Url::parse(page_url).ok();

        let images: Vec<String> = self
            .site
            .images
            .extract_all(root)
            .into_vec()
            .into_iter()
            .filter(|src| !src.trim().is_empty())
            .map(|src| resolve(base.as_ref(), &src))
            .collect();
        if images.is_empty() {
            warn!("No images found on {}", page_url);
        }

        let title = self
            .site
            .title
            .extract(root)
            .into_single()
            .map(|raw| title::sanitize(&raw));
        if title.is_none() {
            warn!("No chapter heading found on {}", page_url);
        }

        let next_url = self
            .site
            .next_url
            .extract(root)
            .into_single()
            .map(|href| resolve(base.as_ref(), &href));
        if next_url.is_none() {
            info!("No next episode linked from {}", page_url);
        }

        EpisodePage {
            images,
            title,
            next_url,
        }
    }
}

/// Makes `link` absolute against the page it came from; unparsable bases
/// leave it as written.
fn resolve(base: Option<&Url>, link: &str) -> String {
    let link = link.trim();
    base.and_then(|b| b.join(link).ok())
        .map_or_else(|| link.to_owned(), String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    const PAGE_URL: &str = "https://www.webtoons.com/en/fantasy/comic/ep-5/viewer?episode_no=5";

    fn parser() -> Parser {
        Parser::new(Config::builtin().unwrap().site)
    }

    #[test]
    fn full_page() {
        let html = r#"<html><body>
            <h1 id="chapter-heading"> Episode 5 </h1>
            <div id="_imageList">
                <img id="image_1" class="_images" src="low1.jpg" data-src="https://cdn.example/1.jpg">
                <img id="image_2" class="_images" src="low2.jpg" data-src="https://cdn.example/2.jpg">
                <img id="banner" data-src="https://cdn.example/ad.jpg">
                <img id="image_3" class="_images" src="low3.jpg" data-src="https://cdn.example/3.jpg">
            </div>
            <a class="next_page" href="https://www.webtoons.com/en/fantasy/comic/ep-6/viewer?episode_no=6">Next</a>
        </body></html>"#;

        let page = parser().episode_page(html, PAGE_URL);
        assert_eq!(
            page.images,
            vec![
                "https://cdn.example/1.jpg",
                "https://cdn.example/2.jpg",
                "https://cdn.example/3.jpg",
            ]
        );
        assert_eq!(page.title.as_deref(), Some("Episode 5"));
        assert_eq!(
            page.next_url.as_deref(),
            Some("https://www.webtoons.com/en/fantasy/comic/ep-6/viewer?episode_no=6")
        );
    }

    #[test]
    fn missing_elements_are_absent() {
        let page = parser().episode_page("<html><body><p>moved</p></body></html>", PAGE_URL);
        assert_eq!(page, EpisodePage::default());
    }

    #[test]
    fn heading_is_sanitized() {
        let html = r#"<h1 id="chapter-heading">Ep:1/2?</h1>"#;
        let page = parser().episode_page(html, PAGE_URL);
        assert_eq!(page.title.as_deref(), Some("Ep12"));
    }

    #[test]
    fn disabled_first_next_link_ends_the_series() {
        let html = r#"
            <h1 id="chapter-heading">Episode 98</h1>
            <a class="next_page">disabled</a>
            <a class="next_page" href="https://x.example/ep/99">Next</a>"#;
        let page = parser().episode_page(html, PAGE_URL);
        assert_eq!(page.next_url, None);
    }

    #[test]
    fn relative_links_are_resolved() {
        let html = r#"
            <img id="image_1" data-src="/img/1.jpg">
            <a class="next_page" href="../ep-6/viewer?episode_no=6">Next</a>"#;
        let page = parser().episode_page(html, PAGE_URL);
        assert_eq!(page.images, vec!["https://www.webtoons.com/img/1.jpg"]);
        assert_eq!(
            page.next_url.as_deref(),
            Some("https://www.webtoons.com/en/fantasy/comic/ep-6/viewer?episode_no=6")
        );
    }
}
