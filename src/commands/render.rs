//! Console line formats.

use crate::app::{BookYearDto, MusicTrackDto, PersonalBooksDto};

pub const NO_FAVORITE_BOOKS: &str = "This visitor has no favorite books.";

pub fn track_line(track: &MusicTrackDto) -> String {
    format!("{}: {}", track.id, track.name)
}

/// `title (year) by author`; a missing year prints as `n/a`.
pub fn book_year_line(book: &BookYearDto) -> String {
    match book.publishing_year {
        Some(year) => format!("{} ({}) by {}", book.title, year, book.author),
        None => format!("{} (n/a) by {}", book.title, book.author),
    }
}

/// `"Name Surname": t1, t2`, or the fixed message when there are no books.
pub fn personal_books_line(books: Option<&PersonalBooksDto>) -> String {
    match books {
        Some(dto) if !dto.titles.is_empty() => {
            format!("\"{}\": {}", dto.full_name, dto.titles.join(", "))
        }
        _ => NO_FAVORITE_BOOKS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_line_is_id_colon_name() {
        let t = MusicTrackDto {
            id: 7,
            name: "Chasm".into(),
        };
        assert_eq!(track_line(&t), "7: Chasm");
    }

    #[test]
    fn book_year_line_with_and_without_year() {
        let mut b = BookYearDto {
            title: "Scaramouche".into(),
            publishing_year: Some(1921),
            author: "Rafael Sabatini".into(),
        };
        assert_eq!(book_year_line(&b), "Scaramouche (1921) by Rafael Sabatini");
        b.publishing_year = None;
        assert_eq!(book_year_line(&b), "Scaramouche (n/a) by Rafael Sabatini");
    }

    #[test]
    fn personal_books_joined_without_trailing_separator() {
        let dto = PersonalBooksDto {
            full_name: "Alina Novozhilova".into(),
            titles: vec!["A".into(), "B".into(), "C".into()],
        };
        assert_eq!(personal_books_line(Some(&dto)), "\"Alina Novozhilova\": A, B, C");
    }

    #[test]
    fn single_title_has_no_separator() {
        let dto = PersonalBooksDto {
            full_name: "Yaroslav Reshetnikov".into(),
            titles: vec!["The Temple of the Golden Pavilion".into()],
        };
        assert_eq!(
            personal_books_line(Some(&dto)),
            "\"Yaroslav Reshetnikov\": The Temple of the Golden Pavilion"
        );
    }

    #[test]
    fn no_books_prints_fixed_message() {
        assert_eq!(personal_books_line(None), NO_FAVORITE_BOOKS);
    }
}
