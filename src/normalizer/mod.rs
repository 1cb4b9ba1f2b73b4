use feed_rs::parser;
use html_escape::decode_html_entities;
use regex::Regex;

use crate::app::{MarqueeError, Result};
use crate::domain::Film;

/// Converts the RSS recent-activity document into [`Film`] records.
///
/// The feed packs everything of interest into two loosely-structured
/// fields: the item title carries an optional ", YYYY" suffix, and the
/// description free text carries star glyphs, a "Rewatched" marker and a
/// "Watched on <weekday> <Month> <Day>, <Year>" phrase. All of those
/// annotations are optional; only the title itself is required.
#[derive(Clone)]
pub struct Normalizer {
    title_year: Regex,
    rating: Regex,
    watch_date: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            title_year: Regex::new(r"^(.+),\s*(\d{4})$").expect("valid title pattern"),
            rating: Regex::new(r"★+½?").expect("valid rating pattern"),
            watch_date: Regex::new(r"Watched on\s+\w+\s+(\w+\s+\d+,\s+\d{4})")
                .expect("valid watch-date pattern"),
        }
    }

    /// Parse a feed document into films, in document order
    /// (most-recent-first, per feed convention).
    ///
    /// An unparseable document is an error; an item without a title is
    /// skipped; missing rating/date/rewatch annotations are plain absence.
    pub fn normalize(&self, body: &str) -> Result<Vec<Film>> {
        let feed = parser::parse(body.as_bytes())
            .map_err(|e| MarqueeError::FeedParse(e.to_string()))?;

        let films = feed
            .entries
            .into_iter()
            .filter_map(|entry| {
                let raw_title = entry.title.map(|t| t.content)?;

                let (title, year) = match self.title_year.captures(&raw_title) {
                    Some(caps) => (caps[1].to_string(), Some(caps[2].to_string())),
                    None => (raw_title.clone(), None),
                };

                let mut film = Film::new(decode_html_entities(&title).to_string());
                film.year = year;
                film.link = entry.links.first().map(|l| l.href.clone());

                if let Some(summary) = entry.summary {
                    let desc = summary.content;
                    film.rating = self.rating.find(&desc).map(|m| m.as_str().to_string());
                    film.rewatch = desc.contains("Rewatched");
                    film.watch_date = self
                        .watch_date
                        .captures(&desc)
                        .map(|caps| caps[1].to_string());
                }

                Some(film)
            })
            .collect();

        Ok(films)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Letterboxd - szymonindy</title>
    <link>https://letterboxd.com/szymonindy/</link>
    <item>
      <title>Parasite, 2019</title>
      <link>https://letterboxd.com/szymonindy/film/parasite-2019/</link>
      <description>&lt;p&gt;★★★★½ Watched on Friday June 2, 2023&lt;/p&gt;</description>
    </item>
    <item>
      <title>Everything Everywhere All at Once</title>
      <link>https://letterboxd.com/szymonindy/film/everything-everywhere-all-at-once/</link>
      <description>&lt;p&gt;Rewatched on Saturday June 3, 2023&lt;/p&gt;</description>
    </item>
  </channel>
</rss>"#;

    fn feed_with_item(item: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Letterboxd - test</title>
    <link>https://letterboxd.com/test/</link>
    {}
  </channel>
</rss>"#,
            item
        )
    }

    #[test]
    fn test_title_year_suffix_splits() {
        let films = Normalizer::new().normalize(FEED_SAMPLE).unwrap();
        assert_eq!(films[0].title, "Parasite");
        assert_eq!(films[0].year.as_deref(), Some("2019"));
    }

    #[test]
    fn test_title_without_year_kept_whole() {
        let films = Normalizer::new().normalize(FEED_SAMPLE).unwrap();
        assert_eq!(films[1].title, "Everything Everywhere All at Once");
        assert_eq!(films[1].year, None);
    }

    #[test]
    fn test_document_order_preserved() {
        let films = Normalizer::new().normalize(FEED_SAMPLE).unwrap();
        assert_eq!(films.len(), 2);
        assert_eq!(films[0].title, "Parasite");
        assert_eq!(films[1].title, "Everything Everywhere All at Once");
    }

    #[test]
    fn test_link_taken_from_item() {
        let films = Normalizer::new().normalize(FEED_SAMPLE).unwrap();
        assert_eq!(
            films[0].link.as_deref(),
            Some("https://letterboxd.com/szymonindy/film/parasite-2019/")
        );
    }

    #[test]
    fn test_rating_extracted_with_half_star() {
        let films = Normalizer::new().normalize(FEED_SAMPLE).unwrap();
        assert_eq!(films[0].rating.as_deref(), Some("★★★★½"));
    }

    #[test]
    fn test_rating_position_independent() {
        let body = feed_with_item(
            "<item><title>Aftersun</title><description>some text before ★★★ and after</description></item>",
        );
        let films = Normalizer::new().normalize(&body).unwrap();
        assert_eq!(films[0].rating.as_deref(), Some("★★★"));
    }

    #[test]
    fn test_watched_alone_is_not_a_rewatch() {
        let films = Normalizer::new().normalize(FEED_SAMPLE).unwrap();
        assert!(!films[0].rewatch);
        assert_eq!(films[0].watch_date.as_deref(), Some("June 2, 2023"));
    }

    #[test]
    fn test_rewatched_marker_sets_flag() {
        let films = Normalizer::new().normalize(FEED_SAMPLE).unwrap();
        assert!(films[1].rewatch);
    }

    #[test]
    fn test_missing_description_leaves_annotations_absent() {
        let body = feed_with_item("<item><title>Stalker, 1979</title></item>");
        let films = Normalizer::new().normalize(&body).unwrap();
        assert_eq!(films[0].rating, None);
        assert_eq!(films[0].watch_date, None);
        assert!(!films[0].rewatch);
    }

    #[test]
    fn test_titleless_item_skipped() {
        let body = feed_with_item(
            "<item><description>★★★★</description></item>\n    <item><title>Ran, 1985</title></item>",
        );
        let films = Normalizer::new().normalize(&body).unwrap();
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].title, "Ran");
    }

    #[test]
    fn test_entity_escaped_title_decodes() {
        let body = feed_with_item("<item><title>Am&amp;eacute;lie, 2001</title></item>");
        let films = Normalizer::new().normalize(&body).unwrap();
        assert_eq!(films[0].title, "Amélie");
        assert_eq!(films[0].year.as_deref(), Some("2001"));
    }

    #[test]
    fn test_comma_heavy_title_splits_on_last_comma() {
        let body = feed_with_item("<item><title>Dune, Part Two, 2024</title></item>");
        let films = Normalizer::new().normalize(&body).unwrap();
        assert_eq!(films[0].title, "Dune, Part Two");
        assert_eq!(films[0].year.as_deref(), Some("2024"));
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let err = Normalizer::new().normalize("this is not a feed").unwrap_err();
        assert!(matches!(err, MarqueeError::FeedParse(_)));
    }
}
