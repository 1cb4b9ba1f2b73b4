//! Pattern-based listing parser.

use html_escape::decode_html_entities;
use regex::Regex;

use crate::config::SiteConfig;
use crate::domain::Film;
use crate::scraper::ListingParser;

/// Regex-driven [`ListingParser`] for poster-grid listing pages.
///
/// A film entry is a `data-target-link="/film/<slug>/"` attribute followed,
/// within the same poster construct, by an `<img>` whose `alt` text carries
/// the title. The construct spans lines and attribute order varies, so the
/// pattern is quote-bounded rather than anchored to tag structure.
pub struct PatternListingParser {
    origin: String,
    film_entry: Regex,
}

impl PatternListingParser {
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            origin: site.origin_base().to_string(),
            film_entry: Regex::new(
                r#"(?s)data-target-link="(/film/[^"]+/)"[^>]*>.*?<img[^>]*alt="([^"]+)""#,
            )
            .expect("valid film entry pattern"),
        }
    }
}

impl Default for PatternListingParser {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl ListingParser for PatternListingParser {
    fn parse_page(&self, html: &str) -> Vec<Film> {
        self.film_entry
            .captures_iter(html)
            .map(|caps| {
                let mut film = Film::new(decode_html_entities(&caps[2]).to_string());
                film.link = Some(format!("{}{}", self.origin, &caps[1]));
                film
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_SAMPLE: &str = r#"
<ul class="poster-list">
  <li class="poster-container">
    <div class="film-poster" data-film-id="426406" data-target-link="/film/parasite-2019/" data-cache-busting-key="1a2b">
      <img src="https://a.example.com/resized/parasite.jpg" width="125" height="187" alt="Parasite" />
    </div>
  </li>
  <li class="poster-container">
    <div class="film-poster"
         data-target-link="/film/stalker/"
         data-film-id="51568">
      <img class="image"
           alt="Stalker" />
    </div>
  </li>
</ul>
"#;

    fn parser() -> PatternListingParser {
        PatternListingParser::new(&SiteConfig::default())
    }

    #[test]
    fn test_parse_page_extracts_title_and_link() {
        let films = parser().parse_page(LISTING_SAMPLE);

        assert_eq!(films.len(), 2);
        assert_eq!(films[0].title, "Parasite");
        assert_eq!(
            films[0].link.as_deref(),
            Some("https://letterboxd.com/film/parasite-2019/")
        );
    }

    #[test]
    fn test_parse_page_preserves_listing_order() {
        let films = parser().parse_page(LISTING_SAMPLE);

        let titles: Vec<&str> = films.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["Parasite", "Stalker"]);
    }

    #[test]
    fn test_parse_page_only_title_and_link_populated() {
        let films = parser().parse_page(LISTING_SAMPLE);

        assert_eq!(films[0].year, None);
        assert_eq!(films[0].rating, None);
        assert_eq!(films[0].watch_date, None);
        assert!(!films[0].rewatch);
    }

    #[test]
    fn test_parse_page_handles_multiline_construct() {
        let films = parser().parse_page(LISTING_SAMPLE);

        assert_eq!(films[1].title, "Stalker");
        assert_eq!(
            films[1].link.as_deref(),
            Some("https://letterboxd.com/film/stalker/")
        );
    }

    #[test]
    fn test_parse_page_empty_input() {
        assert!(parser().parse_page("").is_empty());
    }

    #[test]
    fn test_parse_page_no_entries() {
        let html = "<html><body><p>This member has not logged any films.</p></body></html>";
        assert!(parser().parse_page(html).is_empty());
    }

    #[test]
    fn test_parse_page_decodes_title_entities() {
        let html = r#"
            <div data-target-link="/film/amelie/" data-film-id="1">
              <img alt="Am&eacute;lie" />
            </div>
        "#;

        let films = parser().parse_page(html);
        assert_eq!(films[0].title, "Amélie");
    }

    #[test]
    fn test_parse_page_tolerates_intervening_markup() {
        let html = r#"
            <div data-target-link="/film/the-seventh-seal/" data-film-id="2">
              <span class="frame" data-original-title="The Seventh Seal (1957)"></span>
              <img src="poster.jpg" alt="The Seventh Seal" />
            </div>
        "#;

        let films = parser().parse_page(html);
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].title, "The Seventh Seal");
    }

    #[test]
    fn test_parse_page_ignores_non_film_links() {
        let html = r#"
            <div data-target-link="/actor/song-kang-ho/">
              <img alt="Song Kang-ho" />
            </div>
        "#;

        assert!(parser().parse_page(html).is_empty());
    }

    #[test]
    fn test_parse_page_respects_configured_origin() {
        let site = SiteConfig {
            origin: "http://127.0.0.1:9090/".into(),
            ..SiteConfig::default()
        };
        let parser = PatternListingParser::new(&site);

        let html = r#"
            <div data-target-link="/film/parasite-2019/" data-film-id="3">
              <img alt="Parasite" />
            </div>
        "#;

        let films = parser.parse_page(html);
        assert_eq!(
            films[0].link.as_deref(),
            Some("http://127.0.0.1:9090/film/parasite-2019/")
        );
    }
}
