//! The demo script: seed loading and the fixed, ordered task list.

use crate::app::{
    book_add, book_list, books_by_year, fixture_load, library_create_tables,
    library_drop_tables, music_add, music_list, music_list_without_m_t, music_load_script,
    personal_books, visitor_create, visitor_list, BookAddReq, FixtureLoadResult, MusicTrackDto,
    VisitorCreateReq,
};
use crate::commands::render::{book_year_line, personal_books_line, track_line};
use crate::config::DemoConfig;
use crate::domain::parse_fixture;
use crate::error::AppError;
use crate::infra::{read_resource, Db};
use std::io::Write;

/// Tracks appended in task 3, in order.
pub const NEW_TRACKS: [&str; 2] = ["Chasm", "Versus"];

pub struct NewVisitor {
    pub name: &'static str,
    pub surname: &'static str,
    /// (title, author, year)
    pub books: &'static [(&'static str, &'static str, i64)],
}

/// Visitors created in task 6.
pub const NEW_VISITORS: [NewVisitor; 3] = [
    NewVisitor {
        name: "Vladimir",
        surname: "Miller",
        books: &[
            ("Land of the Lustrous", "Haruko Ichikawa", 2012),
            ("Scaramouche", "Rafael Sabatini", 1921),
            ("No Country for Old Men", "Cormac McCarthy", 2005),
        ],
    },
    NewVisitor {
        name: "Alina",
        surname: "Novozhilova",
        books: &[
            ("All Quiet on the Western Front", "Erich Maria Remarque", 1929),
            ("One Flew Over the Cuckoo's Nest", "Ken Kesey", 1962),
        ],
    },
    NewVisitor {
        name: "Yaroslav",
        surname: "Reshetnikov",
        books: &[("The Temple of the Golden Pavilion", "Yukio Mishima", 1956)],
    },
];

/// Read and run the bundled music script.
pub fn load_music<W: Write>(db: &Db, config: &DemoConfig, out: &mut W) -> Result<(), AppError> {
    let script = read_resource(&config.resources_dir, &config.music_script)?;
    music_load_script(db, &script)?;
    log::info!("Music script '{}' executed", config.music_script);
    writeln!(out, "Table music created and populated")?;
    Ok(())
}

/// Read the visitor fixture, create the library tables and insert it.
pub fn load_library<W: Write>(
    db: &Db,
    config: &DemoConfig,
    out: &mut W,
) -> Result<FixtureLoadResult, AppError> {
    let json = read_resource(&config.resources_dir, &config.fixture)?;
    let visitors = parse_fixture(&json).inspect_err(|e| log::error!("{}", e))?;
    library_create_tables(db)?;
    let loaded = fixture_load(db, &visitors)?;
    log::info!(
        "Fixture '{}' loaded: {} visitors, {} books",
        config.fixture,
        loaded.visitors,
        loaded.books
    );
    writeln!(out, "Tables visitors and books created and populated")?;
    Ok(loaded)
}

fn print_tracks<W: Write>(out: &mut W, tracks: &[MusicTrackDto]) -> Result<(), AppError> {
    for t in tracks {
        writeln!(out, "{}", track_line(t))?;
    }
    Ok(())
}

fn print_books_by_year<W: Write>(
    db: &Db,
    out: &mut W,
    min_year: Option<i64>,
) -> Result<(), AppError> {
    for b in books_by_year(db, min_year)? {
        writeln!(out, "{}", book_year_line(&b))?;
    }
    Ok(())
}

/// Create the fixed visitors with their books; returns their ids in order.
pub fn add_new_visitors(db: &Db) -> Result<Vec<i64>, AppError> {
    let mut ids = Vec::with_capacity(NEW_VISITORS.len());
    for v in &NEW_VISITORS {
        let id = visitor_create(
            db,
            VisitorCreateReq {
                name: v.name.to_string(),
                surname: v.surname.to_string(),
                phone: None,
                subscribed: true,
            },
        )?;
        for (title, author, year) in v.books {
            book_add(
                db,
                BookAddReq {
                    title: title.to_string(),
                    author: author.to_string(),
                    publishing_year: Some(*year),
                    isbn: None,
                    publisher: None,
                    visitor_id: id,
                },
            )?;
        }
        ids.push(id);
    }
    Ok(ids)
}

/// Print one visitor's favorite books line.
pub fn print_personal_books<W: Write>(
    db: &Db,
    out: &mut W,
    visitor_id: i64,
) -> Result<(), AppError> {
    let books = personal_books(db, visitor_id)
        .inspect_err(|e| log::error!("Personal books query failed: {}", e))?;
    writeln!(out, "{}", personal_books_line(books.as_ref()))?;
    Ok(())
}

/// Tasks 1 through 8, in order. The first error stops the run.
pub fn run_tasks<W: Write>(db: &Db, config: &DemoConfig, out: &mut W) -> Result<(), AppError> {
    writeln!(out, "\n1. Music tracks:")?;
    print_tracks(out, &music_list(db)?)?;

    writeln!(out, "\n2. Tracks without the letters 'm' and 't':")?;
    print_tracks(out, &music_list_without_m_t(db)?)?;

    writeln!(out, "\n3. Music tracks after adding favorites:")?;
    for name in NEW_TRACKS {
        music_add(db, name)?;
    }
    print_tracks(out, &music_list(db)?)?;

    writeln!(out, "\n4. Books sorted by publishing year:")?;
    print_books_by_year(db, out, None)?;

    writeln!(
        out,
        "\n5. Books published in {} or later:",
        config.year_threshold
    )?;
    print_books_by_year(db, out, Some(config.year_threshold))?;

    writeln!(out, "\n6. Adding new visitors...")?;
    let ids = add_new_visitors(db)?;
    log::info!(
        "{} visitors and {} books in library",
        visitor_list(db)?.len(),
        book_list(db)?.len()
    );

    writeln!(out, "\n7. Favorite books of new visitors:")?;
    for id in ids {
        print_personal_books(db, out, id)?;
    }

    writeln!(out, "\n8. Dropping tables visitors and books...")?;
    library_drop_tables(db)?;
    log::info!("Tables books and visitors dropped");
    writeln!(out, "Tables dropped!")?;
    Ok(())
}
