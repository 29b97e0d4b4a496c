//! Basic usage example for catalog

use catalog::{Dialect, Store};

fn main() -> catalog::Result<()> {
    // Several named queries in one SQL file
    let source = r#"
-- start: insert_user
INSERT INTO users (id, name, email)
VALUES ($1, $2, $3)
-- end: insert_user

-- start: all_users
SELECT id, name, email
FROM users
-- end: all_users
"#;

    let catalog = catalog::parse_document(source)?;
    println!("Dialect: {:?}", catalog.dialect());

    for (name, content) in catalog.entries() {
        println!("\n{name}:\n{content}");
    }

    // Sources can also come from a store, keyed by file name
    let sources = Store::from_map([("users.sql", source)]);
    let queries = catalog::parse(&sources, "users.sql")?;
    queries
        .has(["insert_user", "all_users"])
        .expect("both queries are defined");

    // The same entry written as a C block comment
    let block = format!(
        "{}\n{}\n{}\n",
        Dialect::Block.format_start("all_users"),
        queries.must("all_users"),
        Dialect::Block.format_end("all_users"),
    );
    println!("\nAs a block comment:\n{block}");

    Ok(())
}
