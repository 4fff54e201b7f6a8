//! End-to-end demo run tests

use app_lib::app::{book_list, music_list, visitor_list};
use app_lib::commands::render::NO_FAVORITE_BOOKS;
use app_lib::commands::tasks::{
    add_new_visitors, load_library, load_music, print_personal_books, run_tasks, NEW_TRACKS,
    NEW_VISITORS,
};
use app_lib::config::DemoConfig;
use app_lib::infra::db::init_test_db;
use app_lib::run;

fn output_of(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn full_run_prints_every_section() {
    let mut buf = Vec::<u8>::new();
    run(&DemoConfig::default(), &mut buf).unwrap();
    let out = output_of(buf);

    for header in ["\n1. ", "\n2. ", "\n3. ", "\n4. ", "\n5. ", "\n6. ", "\n7. ", "\n8. "] {
        assert!(out.contains(header), "missing section {:?}", header);
    }
    assert!(out.contains("\"Vladimir Miller\": Land of the Lustrous, Scaramouche, No Country for Old Men"));
    assert!(out.contains("\"Alina Novozhilova\": All Quiet on the Western Front, One Flew Over the Cuckoo's Nest"));
    assert!(out.contains("\"Yaroslav Reshetnikov\": The Temple of the Golden Pavilion"));
    assert!(out.contains("Life of Pi (2001) by Yann Martel"));
    assert!(out.ends_with("Tables dropped!\n"));
}

#[test]
fn sections_run_in_order() {
    let mut buf = Vec::<u8>::new();
    run(&DemoConfig::default(), &mut buf).unwrap();
    let out = output_of(buf);

    let mut last = 0;
    for n in 1..=8 {
        let pos = out.find(&format!("\n{}. ", n)).unwrap();
        assert!(pos > last);
        last = pos;
    }
}

#[test]
fn new_tracks_appear_after_section_three() {
    let mut buf = Vec::<u8>::new();
    run(&DemoConfig::default(), &mut buf).unwrap();
    let out = output_of(buf);

    let (before, after) = out.split_at(out.find("\n3. ").unwrap());
    let after = &after[..after.find("\n4. ").unwrap()];
    for name in NEW_TRACKS {
        assert!(!before.contains(&format!(": {}\n", name)));
        assert!(after.contains(&format!(": {}\n", name)));
    }
}

#[test]
fn music_survives_teardown_but_library_does_not() {
    let db = init_test_db();
    let config = DemoConfig::default();
    let mut sink = Vec::<u8>::new();
    load_music(&db, &config, &mut sink).unwrap();
    let seeded = music_list(&db).unwrap().len();
    load_library(&db, &config, &mut sink).unwrap();
    run_tasks(&db, &config, &mut sink).unwrap();

    assert_eq!(music_list(&db).unwrap().len(), seeded + NEW_TRACKS.len());
    assert_eq!(visitor_list(&db).unwrap_err().code(), "DB_ERROR");
    assert_eq!(book_list(&db).unwrap_err().code(), "DB_ERROR");
}

#[test]
fn new_visitors_get_their_fixed_books() {
    let db = init_test_db();
    let config = DemoConfig::default();
    let mut sink = Vec::<u8>::new();
    let loaded = load_library(&db, &config, &mut sink).unwrap();

    let ids = add_new_visitors(&db).unwrap();
    assert_eq!(ids.len(), NEW_VISITORS.len());

    let visitors = visitor_list(&db).unwrap();
    assert_eq!(visitors.len(), loaded.visitors + NEW_VISITORS.len());
    for (id, expected) in ids.iter().zip(NEW_VISITORS.iter()) {
        let v = visitors.iter().find(|v| v.id == *id).unwrap();
        assert_eq!(v.name, expected.name);
        assert!(v.subscribed);
        let count = book_list(&db)
            .unwrap()
            .iter()
            .filter(|b| b.visitor_id == *id)
            .count();
        assert_eq!(count, expected.books.len());
    }
}

#[test]
fn visitor_without_books_prints_fixed_message() {
    let db = init_test_db();
    let config = DemoConfig::default();
    let mut sink = Vec::<u8>::new();
    load_library(&db, &config, &mut sink).unwrap();

    // The bundled fixture's last visitor has an empty favorites list.
    let last = visitor_list(&db).unwrap().pop().unwrap();
    let mut buf = Vec::<u8>::new();
    print_personal_books(&db, &mut buf, last.id).unwrap();
    assert_eq!(output_of(buf), format!("{}\n", NO_FAVORITE_BOOKS));
}

#[test]
fn missing_script_fails_before_any_task() {
    let dir = tempfile::tempdir().unwrap();
    let config = DemoConfig {
        resources_dir: dir.path().to_path_buf(),
        ..DemoConfig::default()
    };
    let mut buf = Vec::<u8>::new();
    let err = run(&config, &mut buf).unwrap_err();
    assert_eq!(err.code(), "RESOURCE_NOT_FOUND");
    assert!(!output_of(buf).contains("\n1. "));
}

#[test]
fn missing_fixture_is_resource_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let bundled = DemoConfig::default();
    std::fs::copy(
        bundled.resources_dir.join(&bundled.music_script),
        dir.path().join(&bundled.music_script),
    )
    .unwrap();
    let config = DemoConfig {
        resources_dir: dir.path().to_path_buf(),
        ..DemoConfig::default()
    };
    let mut buf = Vec::<u8>::new();
    let err = run(&config, &mut buf).unwrap_err();
    assert_eq!(err.code(), "RESOURCE_NOT_FOUND");
    assert!(output_of(buf).contains("Table music created"));
}

#[test]
fn malformed_fixture_stops_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let bundled = DemoConfig::default();
    std::fs::copy(
        bundled.resources_dir.join(&bundled.music_script),
        dir.path().join(&bundled.music_script),
    )
    .unwrap();
    std::fs::write(dir.path().join(&bundled.fixture), "{ not json").unwrap();
    let config = DemoConfig {
        resources_dir: dir.path().to_path_buf(),
        ..DemoConfig::default()
    };
    let err = run(&config, &mut Vec::<u8>::new()).unwrap_err();
    assert_eq!(err.code(), "FIXTURE_INVALID");
}
