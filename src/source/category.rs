//! Content categories and their URL/priority rules.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters percent-encoded inside a slug path segment.
///
/// Everything a slug may not carry verbatim into a URL path: whitespace,
/// XML-sensitive characters, delimiters and `%` itself.
const SLUG_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/');

/// A content category contributing URL entries to the sitemap.
///
/// Each category carries a static priority and a URL path template; the
/// declared order of [`Category::ALL`] is the merge order used by the
/// aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Static CMS pages: `/{slug}.html`
    Pages,
    /// Service articles: `/service/{slug}.html`
    Articles,
    /// News items: `/news/{slug}.html`
    News,
}

impl Category {
    /// All categories in the fixed declared merge order.
    pub const ALL: [Self; 3] = [Self::Pages, Self::Articles, Self::News];

    /// Category name used in snapshot keys and log output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pages => "pages",
            Self::Articles => "articles",
            Self::News => "news",
        }
    }

    /// Static sitemap priority for entries of this category.
    pub const fn priority(self) -> f32 {
        match self {
            Self::Pages => 0.80,
            Self::Articles => 0.70,
            Self::News => 0.60,
        }
    }

    /// Absolute URL for a slug of this category.
    ///
    /// The slug is percent-encoded as a single path segment.
    pub fn url_for(self, base_url: &str, slug: &str) -> String {
        let base = base_url.trim_end_matches('/');
        let slug = utf8_percent_encode(slug, SLUG_SEGMENT);
        match self {
            Self::Pages => format!("{base}/{slug}.html"),
            Self::Articles => format!("{base}/service/{slug}.html"),
            Self::News => format!("{base}/news/{slug}.html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order() {
        assert_eq!(
            Category::ALL,
            [Category::Pages, Category::Articles, Category::News]
        );
    }

    #[test]
    fn test_static_priorities() {
        assert_eq!(Category::Pages.priority(), 0.80);
        assert_eq!(Category::Articles.priority(), 0.70);
        assert_eq!(Category::News.priority(), 0.60);
    }

    #[test]
    fn test_url_templates() {
        let base = "https://example.com";
        assert_eq!(
            Category::Pages.url_for(base, "about"),
            "https://example.com/about.html"
        );
        assert_eq!(
            Category::Articles.url_for(base, "roofing"),
            "https://example.com/service/roofing.html"
        );
        assert_eq!(
            Category::News.url_for(base, "opening"),
            "https://example.com/news/opening.html"
        );
    }

    #[test]
    fn test_url_for_trims_base_slash() {
        assert_eq!(
            Category::Pages.url_for("https://example.com/", "about"),
            "https://example.com/about.html"
        );
    }

    #[test]
    fn test_url_for_encodes_slug() {
        assert_eq!(
            Category::Pages.url_for("https://example.com", "a b&c"),
            "https://example.com/a%20b%26c.html"
        );
        // Slug cannot smuggle in extra path segments
        assert_eq!(
            Category::News.url_for("https://example.com", "x/y"),
            "https://example.com/news/x%2Fy.html"
        );
    }
}
