//! Application use cases.

mod library;
mod music;

pub use library::{
    book_add, book_list, books_by_year, fixture_load, library_create_tables, library_drop_tables,
    personal_books, visitor_create, visitor_list, BookAddReq, BookDto, BookYearDto,
    FixtureLoadResult, PersonalBooksDto, VisitorCreateReq, VisitorDto, VisitorStore,
};
pub use music::{
    music_add, music_list, music_list_without_m_t, music_load_script, music_next_id,
    MusicTrackDto,
};
