//! The fixed genre set offered in genre browsing

/// A browsable genre; the id doubles as the catalog search term
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Genre {
    pub id: &'static str,
    pub label: &'static str,
}

pub const GENRES: &[Genre] = &[
    Genre { id: "programming", label: "Programming" },
    Genre { id: "fantasy", label: "Fantasy" },
    Genre { id: "science fiction", label: "Science Fiction" },
    Genre { id: "mystery", label: "Mystery & Thriller" },
    Genre { id: "horror", label: "Horror" },
    Genre { id: "romance", label: "Romance" },
    Genre { id: "adventure", label: "Adventure" },
    Genre { id: "historical fiction", label: "Historical Fiction" },
    Genre { id: "dystopian", label: "Dystopian" },
    Genre { id: "literary fiction", label: "Literary Fiction" },
    Genre { id: "biography", label: "Biography" },
    Genre { id: "self-help", label: "Self-Help" },
    Genre { id: "science", label: "Science & Technology" },
    Genre { id: "history", label: "History" },
    Genre { id: "philosophy", label: "Philosophy" },
    Genre { id: "business", label: "Business" },
    Genre { id: "travel", label: "Travel" },
    Genre { id: "cooking", label: "Cooking" },
    Genre { id: "children", label: "Children's Books" },
    Genre { id: "young adult", label: "Young Adult" },
    Genre { id: "adult", label: "Adult Books" },
];

pub const DEFAULT_GENRE: &str = "programming";

/// Queries rotated through when entering popular mode
pub const POPULAR_QUERIES: [&str; 3] = ["bestseller", "most read", "top rated"];

pub fn find_genre(id: &str) -> Option<&'static Genre> {
    GENRES.iter().find(|genre| genre.id == id)
}

pub fn genre_index(id: &str) -> Option<usize> {
    GENRES.iter().position(|genre| genre.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn genre_ids_are_unique() {
        let ids: HashSet<_> = GENRES.iter().map(|g| g.id).collect();
        assert_eq!(ids.len(), GENRES.len());
        assert_eq!(GENRES.len(), 21);
    }

    #[test]
    fn default_genre_is_known() {
        assert!(find_genre(DEFAULT_GENRE).is_some());
        assert_eq!(genre_index(DEFAULT_GENRE), Some(0));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(find_genre("science fiction").map(|g| g.label), Some("Science Fiction"));
        assert!(find_genre("Science Fiction").is_none());
        assert!(find_genre("poetry").is_none());
    }
}
