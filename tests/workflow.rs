use imgsort::domain::classify::{BIGGER_DIR, SMALLER_DIR};
use imgsort::{
    classify_by_threshold, delete_file, list_images, move_file, Cursor, CursorState, DeleteMode,
    MalformedPolicy, SortError,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"x").unwrap();
    }
}

#[test]
fn test_listing_is_sorted_and_filtered() {
    let temp_dir = TempDir::new().unwrap();
    touch(
        temp_dir.path(),
        &["b.PNG", "a.jpg", "notes.txt", "c.gif", "d.webp", "e.bmp", "f.jpeg"],
    );
    fs::create_dir(temp_dir.path().join("folder.jpg")).unwrap();

    let names = list_images(temp_dir.path()).unwrap();

    assert_eq!(names, vec!["a.jpg", "b.PNG", "c.gif", "e.bmp", "f.jpeg"]);
}

#[test]
fn test_cursor_walks_and_clamps() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), &["1.jpg", "2.jpg", "3.jpg"]);
    let mut cursor = Cursor::new();

    cursor.load(temp_dir.path(), None).unwrap();
    assert_eq!(cursor.current(), Some("1.jpg"));

    cursor.next();
    cursor.prev();
    assert_eq!(cursor.position(), Some(0));

    cursor.prev();
    assert_eq!(cursor.position(), Some(0));

    cursor.next();
    cursor.next();
    cursor.next();
    cursor.next();
    assert_eq!(cursor.position(), Some(2));

    cursor.load(temp_dir.path(), Some(7)).unwrap();
    assert_eq!(cursor.current(), Some("3.jpg"));
}

#[test]
fn test_empty_directory_has_no_current() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), &["readme.md"]);
    let mut cursor = Cursor::new();

    cursor.load(temp_dir.path(), None).unwrap();

    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.state(), CursorState::Empty);
}

#[test]
fn test_classify_scenario_aborts_on_malformed() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    touch(dir, &["a_10.jpg", "b_60.png", "c_abc.jpg"]);

    let result = classify_by_threshold(dir, 50, MalformedPolicy::Abort);

    assert!(matches!(result, Err(SortError::MalformedFilename(ref name)) if name == "c_abc.jpg"));
    assert!(dir.join(SMALLER_DIR).join("a_10.jpg").exists());
    assert!(dir.join(BIGGER_DIR).join("b_60.png").exists());
    assert!(dir.join("c_abc.jpg").exists());
}

#[test]
fn test_classify_scenario_skip_and_report() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    touch(dir, &["a_10.jpg", "b_60.png", "c_abc.jpg", "d.50.gif"]);

    let report = classify_by_threshold(dir, 50, MalformedPolicy::Skip).unwrap();

    assert_eq!(report.bigger, vec!["b_60.png"]);
    assert_eq!(report.smaller, vec!["a_10.jpg", "d.50.gif"]);
    assert_eq!(report.malformed, vec!["c_abc.jpg"]);
    assert!(dir.join("c_abc.jpg").exists());
}

#[test]
fn test_move_creates_destination_and_drops_from_listing() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path().join("src");
    let dst = temp_dir.path().join("dst");
    fs::create_dir(&src).unwrap();
    touch(&src, &["w.jpg", "x.jpg"]);

    let moved = move_file(&src, &dst.join("pos"), "x.jpg").unwrap();

    assert_eq!(moved, dst.join("pos").join("x.jpg"));
    assert!(moved.exists());
    let mut cursor = Cursor::new();
    cursor.load(&src, None).unwrap();
    assert_eq!(cursor.candidates(), ["w.jpg".to_string()]);
}

#[test]
fn test_delete_then_reload_shifts_next_into_slot() {
    let temp_dir = TempDir::new().unwrap();
    let src = temp_dir.path();
    touch(src, &["a.jpg", "b.jpg", "c.jpg"]);
    let mut cursor = Cursor::new();
    cursor.load(src, None).unwrap();
    cursor.next();

    delete_file(src, "b.jpg", DeleteMode::Remove).unwrap();
    cursor.load(src, cursor.position()).unwrap();
    assert_eq!(cursor.current(), Some("c.jpg"));

    delete_file(src, "c.jpg", DeleteMode::Remove).unwrap();
    cursor.load(src, cursor.position()).unwrap();
    // Former slot is past the end now
    assert!(cursor.is_out_of_range());
    assert_eq!(cursor.current(), Some("a.jpg"));

    delete_file(src, "a.jpg", DeleteMode::Remove).unwrap();
    cursor.load(src, cursor.position()).unwrap();
    assert_eq!(cursor.current(), None);
}
