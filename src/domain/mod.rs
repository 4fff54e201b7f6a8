//! Domain records independent of storage.

pub mod fixture;

pub use fixture::{parse_fixture, BookRecord, VisitorRecord};
