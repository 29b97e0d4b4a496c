//! End-to-end tests over the shared fixtures
//!
//! Exercises the full flow: store config -> glob loading -> catalog parsing.

use catalog::{Dialect, Error, Store, parse, parse_document, parse_file};
use catalog_store::StoreConfig;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

fn sources() -> Store {
    let config = StoreConfig::load(fixtures().join("catalogs/store.toml")).unwrap();
    Store::from_config(&config).unwrap()
}

#[test]
fn test_store_config_selects_catalog_sources() {
    assert_eq!(
        sources().list(),
        vec!["deploy.sh", "queries.sql", "web/handlers.js", "web/styles.css"]
    );
}

#[rstest]
#[case("queries.sql", Dialect::DoubleDash, &["insert_user", "select_all_users"])]
#[case("deploy.sh", Dialect::DoubleHash, &["build", "release"])]
#[case("web/handlers.js", Dialect::DoubleSlash, &["on_load"])]
#[case("web/styles.css", Dialect::Block, &["app", "header"])]
fn test_every_fixture_parses(
    #[case] key: &str,
    #[case] dialect: Dialect,
    #[case] names: &[&str],
) {
    let sources = sources();
    let catalog = parse_document(sources.must(key)).unwrap();

    assert_eq!(catalog.dialect(), Some(dialect));
    assert_eq!(catalog.entries().list(), names.to_vec());
}

#[test]
fn test_parse_by_store_key() {
    let queries = parse(&sources(), "queries.sql").unwrap();
    assert_eq!(
        queries.must("select_all_users"),
        "SELECT id, name, email\nFROM users\nORDER BY id"
    );
}

#[test]
fn test_internal_blank_lines_survive_loading() {
    let scripts = parse(&sources(), "deploy.sh").unwrap();
    assert_eq!(scripts.must("release"), "git tag \"v$VERSION\"\n\ngit push --tags");
}

#[test]
fn test_sub_store_feeds_the_parser() {
    let web = sources().sub("web");
    let styles = parse(&web, "styles.css").unwrap();
    assert_eq!(styles.must("app"), "#app {\n  margin: 0;\n}");
    assert_eq!(styles.must("header"), "header { display: flex; }");
}

#[test]
fn test_walk_parses_every_catalog() {
    let sources = sources();
    let mut total = 0;
    sources
        .walk("**", |key, content| {
            let entries = catalog::parse_str(content)
                .unwrap_or_else(|e| panic!("{key}: {e}"));
            total += entries.len();
        })
        .unwrap();
    assert_eq!(total, 7);
}

#[test]
fn test_malformed_fixtures_fail() {
    let dir = fixtures().join("malformed");

    assert!(matches!(
        parse_file(dir.join("unclosed.sql")),
        Err(Error::UnexpectedEnd { ref name }) if name == "insert_user"
    ));
    assert!(matches!(
        parse_file(dir.join("mismatched.sql")),
        Err(Error::NameMismatch { line: 3, .. })
    ));
    assert!(matches!(
        parse_file(dir.join("unknown.lisp")),
        Err(Error::UnknownDialect { .. })
    ));
}

#[test]
fn test_missing_catalog_in_store() {
    let err = parse(&sources(), "web/missing.js").unwrap_err();
    assert!(matches!(err, Error::MissingSource { .. }));
}
