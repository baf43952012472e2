//! Catalog records and their display fallbacks

use chrono::{Datelike, NaiveDate};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNTITLED: &str = "Untitled";

/// A book from a result page or the detail view
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub authors: Vec<String>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub categories: Vec<String>,
    pub page_count: Option<u32>,
    pub average_rating: Option<f32>,
    pub ratings_count: Option<u32>,
    pub language: Option<String>,
    pub thumbnail_url: Option<String>,
    pub preview_url: Option<String>,
    pub info_url: Option<String>,
    pub buy_url: Option<String>,
}

impl CatalogItem {
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    pub fn author_line(&self) -> String {
        if self.authors.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            self.authors.join(", ")
        }
    }

    /// Year from `published_date`, which may be a full date, year-month, or year only
    pub fn published_year(&self) -> Option<i32> {
        let date = self.published_date.as_deref()?.trim();

        if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            return Some(parsed.year());
        }
        if let Ok(parsed) = NaiveDate::parse_from_str(&format!("{}-01", date), "%Y-%m-%d") {
            return Some(parsed.year());
        }
        date.get(..4).and_then(|year| year.parse().ok())
    }

    /// "Publisher • Published: date", with either half dropped when absent
    pub fn publication_line(&self) -> Option<String> {
        match (&self.publisher, &self.published_date) {
            (Some(publisher), Some(date)) => Some(format!("{} • Published: {}", publisher, date)),
            (Some(publisher), None) => Some(publisher.clone()),
            (None, Some(date)) => Some(format!("Published: {}", date)),
            (None, None) => None,
        }
    }

    pub fn rating_line(&self) -> Option<String> {
        let rating = self.average_rating?;
        Some(match self.ratings_count {
            Some(count) => format!("{}/5 ({} ratings)", rating, count),
            None => format!("{}/5", rating),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> CatalogItem {
        CatalogItem {
            id: "abc".to_string(),
            title: "Dune".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn missing_authors_fall_back() {
        let mut book = item();
        assert_eq!(book.author_line(), UNKNOWN_AUTHOR);

        book.authors = vec!["Frank Herbert".to_string(), "Brian Herbert".to_string()];
        assert_eq!(book.author_line(), "Frank Herbert, Brian Herbert");
    }

    #[test]
    fn blank_title_is_untitled() {
        let mut book = item();
        book.title = "  ".to_string();
        assert_eq!(book.display_title(), UNTITLED);
    }

    #[test]
    fn published_year_handles_partial_dates() {
        let mut book = item();
        assert_eq!(book.published_year(), None);

        for (date, year) in [("1965-08-01", 1965), ("2004-03", 2004), ("1999", 1999), ("1984*", 1984)] {
            book.published_date = Some(date.to_string());
            assert_eq!(book.published_year(), Some(year), "date {}", date);
        }

        book.published_date = Some("unknown".to_string());
        assert_eq!(book.published_year(), None);
    }

    #[test]
    fn publication_line_joins_present_parts() {
        let mut book = item();
        assert_eq!(book.publication_line(), None);

        book.publisher = Some("Ace".to_string());
        assert_eq!(book.publication_line().as_deref(), Some("Ace"));

        book.published_date = Some("1990".to_string());
        assert_eq!(book.publication_line().as_deref(), Some("Ace • Published: 1990"));

        book.publisher = None;
        assert_eq!(book.publication_line().as_deref(), Some("Published: 1990"));
    }

    #[test]
    fn rating_line_includes_count_when_known() {
        let mut book = item();
        assert_eq!(book.rating_line(), None);

        book.average_rating = Some(4.5);
        assert_eq!(book.rating_line().as_deref(), Some("4.5/5"));

        book.ratings_count = Some(120);
        assert_eq!(book.rating_line().as_deref(), Some("4.5/5 (120 ratings)"));
    }
}
