//! Tests for loading stores from a directory tree

use catalog_store::{Error, Store, StoreConfig};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const INSERT_SQL: &str = "INSERT INTO users (id, name, email)\nVALUES ($1, $2, $3)\n";
const QUERY_ALL_SQL: &str = "SELECT\nid,\nname,\nFROM users\n";
const PAGES_JS: &str = "'strict'\n\n;(function () {\n}())\n";
const TEST_CSS: &str = "#app {\n}\n";

/// Lay out the same tree the store is expected to read back.
fn testdata() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("web")).unwrap();
    fs::write(root.join("insert.sql"), INSERT_SQL).unwrap();
    fs::write(root.join("query_all.sql"), QUERY_ALL_SQL).unwrap();
    fs::write(root.join("notes.txt"), "not loaded").unwrap();
    fs::write(root.join("web").join("pages.js"), PAGES_JS).unwrap();
    fs::write(root.join("web").join("test.css"), TEST_CSS).unwrap();
    temp
}

fn load(root: &Path, patterns: &[&str]) -> Store {
    Store::load(root, patterns).unwrap()
}

#[test]
fn test_load_matching_files() {
    let temp = testdata();
    let store = load(temp.path(), &["*.sql", "web/*"]);

    assert_eq!(
        store.list(),
        vec!["insert.sql", "query_all.sql", "web/pages.js", "web/test.css"]
    );
    assert_eq!(store.get("insert.sql"), Some(INSERT_SQL));
    assert_eq!(store.get("web/pages.js"), Some(PAGES_JS));
    assert_eq!(store.get("notes.txt"), None);
}

#[rstest]
#[case(&["*.sql"], &["insert.sql", "query_all.sql"])]
#[case(&["*"], &["insert.sql", "notes.txt", "query_all.sql"])]
#[case(&["**/*.css"], &["web/test.css"])]
#[case(&["web/*.js", "insert.*"], &["insert.sql", "web/pages.js"])]
#[case(&[], &[])]
fn test_load_pattern_selection(#[case] patterns: &[&str], #[case] expected: &[&str]) {
    let temp = testdata();
    let store = load(temp.path(), patterns);
    assert_eq!(store.list(), expected.to_vec());
}

#[test]
fn test_load_rejects_bad_pattern_before_io() {
    let err = Store::load("/definitely/not/here", &["[sql"]).unwrap_err();
    assert!(matches!(err, Error::Pattern { ref pattern, .. } if pattern == "[sql"));
}

#[test]
fn test_load_missing_root_is_io_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");

    let err = Store::load(&missing, &["*"]).unwrap_err();
    match err {
        Error::Io { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_load_rejects_non_utf8_content() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("blob.sql"), [0xff, 0xfe, 0x00]).unwrap();

    let err = Store::load(temp.path(), &["*.sql"]).unwrap_err();
    assert!(matches!(err, Error::NonUtf8 { .. }));
}

#[test]
fn test_sub_and_walk_on_loaded_store() {
    let temp = testdata();
    let store = load(temp.path(), &["*.sql", "web/*"]);

    let web = store.sub("web");
    assert_eq!(web.list(), vec!["pages.js", "test.css"]);
    assert_eq!(web.must("test.css"), TEST_CSS);

    let mut walked = Vec::new();
    store
        .walk("**", |key, content| walked.push((key.to_string(), content.len())))
        .unwrap();
    assert_eq!(walked.len(), 4);
    assert_eq!(walked[0], ("insert.sql".to_string(), INSERT_SQL.len()));
}

#[test]
fn test_all_matches_loaded_files() {
    let temp = testdata();
    let store = load(temp.path(), &["*.sql", "web/*"]);

    let all = store.all();
    assert_eq!(all.len(), 4);
    assert_eq!(all["query_all.sql"], QUERY_ALL_SQL);
    assert_eq!(all["web/test.css"], TEST_CSS);
}

#[test]
fn test_from_config_resolves_relative_root() {
    let temp = testdata();
    let config_path = temp.path().join("store.toml");
    fs::write(
        &config_path,
        r#"root = "web"
patterns = ["*.css"]
"#,
    )
    .unwrap();

    let config = StoreConfig::load(&config_path).unwrap();
    assert_eq!(config.root, temp.path().join("web"));

    let store = Store::from_config(&config).unwrap();
    assert_eq!(store.list(), vec!["test.css"]);
}

#[test]
fn test_config_parse_error() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("store.toml");
    fs::write(&config_path, "patterns = \"not a list\"").unwrap();

    let err = StoreConfig::load(&config_path).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[cfg(not(windows))]
#[test]
fn test_symlinked_files_are_read_and_symlinked_dirs_skipped() {
    let temp = testdata();
    let root = temp.path();
    std::os::unix::fs::symlink(root.join("insert.sql"), root.join("alias.sql")).unwrap();
    std::os::unix::fs::symlink(root.join("web"), root.join("web-link")).unwrap();

    let store = load(root, &["**/*"]);
    assert_eq!(store.get("alias.sql"), Some(INSERT_SQL));
    assert!(store.list().iter().all(|key| !key.starts_with("web-link/")));
}

#[test]
fn test_hidden_and_gitignored_files_are_loaded() {
    let temp = testdata();
    let root = temp.path();
    fs::write(root.join(".gitignore"), "*.sql\n").unwrap();
    fs::create_dir(root.join(".hidden")).unwrap();
    fs::write(root.join(".hidden").join("secret.sql"), "SELECT 1\n").unwrap();

    let store = load(root, &["**/*.sql"]);
    assert_eq!(
        store.list(),
        vec![".hidden/secret.sql", "insert.sql", "query_all.sql"]
    );
}
