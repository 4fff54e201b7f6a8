//! Library use cases: visitors, their favorite books, fixture load.

use crate::domain::{BookRecord, VisitorRecord};
use crate::error::AppError;
use crate::infra::{get_connection, Db};
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_BOOK_SQL: &str = "INSERT INTO books (title, author, publishing_year, isbn, publisher, visitor_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

#[derive(Debug, Clone)]
pub struct VisitorCreateReq {
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub subscribed: bool,
}

#[derive(Debug, Clone)]
pub struct BookAddReq {
    pub title: String,
    pub author: String,
    pub publishing_year: Option<i64>,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub visitor_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisitorDto {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub subscribed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publishing_year: Option<i64>,
    pub isbn: Option<String>,
    pub publisher: Option<String>,
    pub visitor_id: i64,
}

/// One row of the year-sorted listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookYearDto {
    pub title: String,
    pub publishing_year: Option<i64>,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalBooksDto {
    pub full_name: String,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixtureLoadResult {
    pub visitors: usize,
    pub books: usize,
}

/// Where fixture records go. `Db` writes them to SQLite; tests can supply an
/// in-memory store.
pub trait VisitorStore {
    /// Insert one visitor; `Ok(None)` means the row went in but no id came back.
    fn insert_visitor(&self, visitor: &VisitorRecord) -> Result<Option<i64>, AppError>;

    /// Insert all books of one visitor, returning how many were written.
    fn insert_books(&self, visitor_id: i64, books: &[BookRecord]) -> Result<usize, AppError>;
}

impl VisitorStore for Db {
    fn insert_visitor(&self, visitor: &VisitorRecord) -> Result<Option<i64>, AppError> {
        insert_visitor_row(
            get_connection(self),
            &visitor.name,
            &visitor.surname,
            visitor.phone.as_deref(),
            visitor.subscribed,
        )
        .inspect_err(|e| {
            log::error!(
                "Failed to insert visitor {} {}: {}",
                visitor.name,
                visitor.surname,
                e
            )
        })
    }

    fn insert_books(&self, visitor_id: i64, books: &[BookRecord]) -> Result<usize, AppError> {
        let conn = get_connection(self);
        let mut stmt = conn.prepare(INSERT_BOOK_SQL).map_err(|e| {
            log::error!("Failed to prepare book insert: {}", e);
            AppError::Db(e.to_string())
        })?;
        let mut count = 0usize;
        for b in books {
            count += stmt
                .execute(params![
                    b.name,
                    b.author,
                    b.publishing_year,
                    b.isbn,
                    b.publisher,
                    visitor_id
                ])
                .map_err(|e| {
                    log::error!(
                        "Failed to add book '{}' for visitor {}: {}",
                        b.name,
                        visitor_id,
                        e
                    );
                    AppError::Db(e.to_string())
                })?;
        }
        Ok(count)
    }
}

fn insert_visitor_row(
    conn: &Connection,
    name: &str,
    surname: &str,
    phone: Option<&str>,
    subscribed: bool,
) -> Result<Option<i64>, AppError> {
    conn.query_row(
        "INSERT INTO visitors (name, surname, phone, subscribed) VALUES (?1, ?2, ?3, ?4) RETURNING id",
        params![name, surname, phone, subscribed as i32],
        |r| r.get(0),
    )
    .optional()
    .map_err(|e| AppError::Db(e.to_string()))
}

/// Create the visitors and books tables if they do not exist yet.
pub fn library_create_tables(db: &Db) -> Result<(), AppError> {
    let conn = get_connection(db);
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS visitors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            surname TEXT NOT NULL,
            phone TEXT,
            subscribed INTEGER NOT NULL DEFAULT 0
        );
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            publishing_year INTEGER,
            isbn TEXT,
            publisher TEXT,
            visitor_id INTEGER NOT NULL,
            FOREIGN KEY (visitor_id) REFERENCES visitors(id)
        );",
    )
    .map_err(|e| {
        log::error!("Failed to create library tables: {}", e);
        AppError::Db(e.to_string())
    })
}

/// Insert fixture visitors in document order, each followed by its books
/// linked through the id the store hands back. Stops at the first failure;
/// rows already written stay.
pub fn fixture_load<S: VisitorStore + ?Sized>(
    store: &S,
    visitors: &[VisitorRecord],
) -> Result<FixtureLoadResult, AppError> {
    let mut result = FixtureLoadResult::default();
    for v in visitors {
        let visitor_id = store.insert_visitor(v)?.ok_or_else(|| {
            log::error!("No id returned for visitor {} {}", v.name, v.surname);
            AppError::IdRetrieval(format!("visitor {} {}", v.name, v.surname))
        })?;
        result.visitors += 1;
        result.books += store.insert_books(visitor_id, &v.favorite_books)?;
    }
    Ok(result)
}

pub fn visitor_create(db: &Db, req: VisitorCreateReq) -> Result<i64, AppError> {
    let conn = get_connection(db);
    insert_visitor_row(
        conn,
        &req.name,
        &req.surname,
        req.phone.as_deref(),
        req.subscribed,
    )
    .and_then(|id| {
        id.ok_or_else(|| AppError::IdRetrieval(format!("visitor {} {}", req.name, req.surname)))
    })
    .inspect_err(|e| log::error!("Failed to create visitor: {}", e))
}

pub fn book_add(db: &Db, req: BookAddReq) -> Result<(), AppError> {
    let conn = get_connection(db);
    conn.execute(
        INSERT_BOOK_SQL,
        params![
            req.title,
            req.author,
            req.publishing_year,
            req.isbn,
            req.publisher,
            req.visitor_id
        ],
    )
    .map_err(|e| {
        log::error!("Failed to add book '{}': {}", req.title, e);
        AppError::Db(e.to_string())
    })?;
    Ok(())
}

pub fn visitor_list(db: &Db) -> Result<Vec<VisitorDto>, AppError> {
    query_visitors(db).inspect_err(|e| log::error!("Visitor listing failed: {}", e))
}

fn query_visitors(db: &Db) -> Result<Vec<VisitorDto>, AppError> {
    let conn = get_connection(db);
    let mut stmt = conn
        .prepare("SELECT id, name, surname, phone, subscribed FROM visitors ORDER BY id")
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([], |row| {
        Ok(VisitorDto {
            id: row.get(0)?,
            name: row.get(1)?,
            surname: row.get(2)?,
            phone: row.get(3)?,
            subscribed: row.get::<_, i32>(4)? != 0,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}

pub fn book_list(db: &Db) -> Result<Vec<BookDto>, AppError> {
    query_books(db).inspect_err(|e| log::error!("Book listing failed: {}", e))
}

fn query_books(db: &Db) -> Result<Vec<BookDto>, AppError> {
    let conn = get_connection(db);
    let mut stmt = conn
        .prepare("SELECT id, title, author, publishing_year, isbn, publisher, visitor_id FROM books ORDER BY id")
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([], |row| {
        Ok(BookDto {
            id: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            publishing_year: row.get(3)?,
            isbn: row.get(4)?,
            publisher: row.get(5)?,
            visitor_id: row.get(6)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}

/// Distinct (title, year, author) triples ascending by year, optionally only
/// those published in `min_year` or later.
pub fn books_by_year(db: &Db, min_year: Option<i64>) -> Result<Vec<BookYearDto>, AppError> {
    query_books_by_year(db, min_year)
        .inspect_err(|e| log::error!("Book listing by year failed: {}", e))
}

fn query_books_by_year(db: &Db, min_year: Option<i64>) -> Result<Vec<BookYearDto>, AppError> {
    let conn = get_connection(db);
    let mut stmt = conn
        .prepare(
            "SELECT title, publishing_year, author
             FROM books
             WHERE ?1 IS NULL OR publishing_year >= ?1
             GROUP BY title, publishing_year, author
             ORDER BY publishing_year, title",
        )
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([min_year], |row| {
        Ok(BookYearDto {
            title: row.get(0)?,
            publishing_year: row.get(1)?,
            author: row.get(2)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}

/// The visitor's full name and book titles in insertion order, or `None`
/// when the visitor has no books.
pub fn personal_books(db: &Db, visitor_id: i64) -> Result<Option<PersonalBooksDto>, AppError> {
    let conn = get_connection(db);
    let mut stmt = conn
        .prepare(
            "SELECT v.name, v.surname, b.title
             FROM visitors v
             JOIN books b ON v.id = b.visitor_id
             WHERE v.id = ?1
             ORDER BY b.id",
        )
        .map_err(|e| AppError::Db(e.to_string()))?;
    let mut rows = stmt
        .query([visitor_id])
        .map_err(|e| AppError::Db(e.to_string()))?;

    let mut found: Option<PersonalBooksDto> = None;
    while let Some(row) = rows.next().map_err(|e| AppError::Db(e.to_string()))? {
        let title: String = row.get(2)?;
        match found.as_mut() {
            Some(dto) => dto.titles.push(title),
            None => {
                let name: String = row.get(0)?;
                let surname: String = row.get(1)?;
                found = Some(PersonalBooksDto {
                    full_name: format!("{} {}", name, surname),
                    titles: vec![title],
                });
            }
        }
    }
    Ok(found)
}

/// Drop books before visitors so the foreign key never dangles.
pub fn library_drop_tables(db: &Db) -> Result<(), AppError> {
    let conn = get_connection(db);
    conn.execute_batch("DROP TABLE IF EXISTS books; DROP TABLE IF EXISTS visitors;")
        .map_err(|e| {
            log::error!("Failed to drop library tables: {}", e);
            AppError::Db(e.to_string())
        })
}
