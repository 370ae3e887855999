use std::fs;
use std::path::Path;

use fieldnotes_core::{Notebook, SiteConfig};
use tempfile::TempDir;

use crate::commands;

fn write_note(site_root: &Path, slug: &str, document: &str) {
    let dir = site_root.join("notes").join(slug);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.md"), document).unwrap();
}

fn test_notebook(temp: &TempDir) -> Notebook {
    // Zero TTL so every command sees the tree as written.
    let config = SiteConfig {
        cache_ttl_secs: 0,
        ..SiteConfig::default()
    };
    Notebook::open(temp.path(), config)
}

#[test]
fn test_list_renders_newest_first() {
    let temp = TempDir::new().unwrap();
    write_note(
        temp.path(),
        "older",
        "---\ntitle: Older Note\ndate: 2025-01-01\n---\nBody.\n",
    );
    write_note(
        temp.path(),
        "newer",
        "---\ntitle: Newer Note\ndate: 2025-02-01\ntags:\n  - rust\n---\nBody.\n",
    );

    let out = commands::list::render(&test_notebook(&temp), None, false).unwrap();

    let newer_at = out.find("Newer Note").expect("newer note is listed");
    let older_at = out.find("Older Note").expect("older note is listed");
    assert!(newer_at < older_at, "newest note renders first:\n{}", out);
    assert!(out.contains("#rust"), "tags render with a # prefix");
}

#[test]
fn test_list_filters_by_percent_encoded_tag() {
    let temp = TempDir::new().unwrap();
    write_note(
        temp.path(),
        "spaced",
        "---\ntitle: Spaced\ntags:\n  - tag with space\n---\nBody.\n",
    );
    write_note(temp.path(), "plain", "---\ntitle: Plain\n---\nBody.\n");

    let notebook = test_notebook(&temp);
    let out = commands::list::render(&notebook, Some("tag%20with%20space"), false).unwrap();

    assert!(out.contains("Spaced"));
    assert!(!out.contains("Plain"), "untagged notes are filtered out");
}

#[test]
fn test_list_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    write_note(
        temp.path(),
        "one",
        "---\ntitle: One\ndate: 2025-01-01\n---\nBody.\n",
    );
    write_note(
        temp.path(),
        "two",
        "---\ntitle: Two\ndate: 2025-01-02\n---\nBody.\n",
    );

    let out = commands::list::render(&test_notebook(&temp), None, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    let entries = value.as_array().expect("JSON output is an array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["slug"], "two", "JSON keeps index order");
}

#[test]
fn test_list_with_no_notes_is_ordinary_output() {
    let temp = TempDir::new().unwrap();

    let out = commands::list::render(&test_notebook(&temp), None, false).unwrap();
    assert_eq!(out, "no notes found\n");
}

#[test]
fn test_search_marks_matches_in_every_field() {
    let temp = TempDir::new().unwrap();
    write_note(
        temp.path(),
        "rusty",
        "---\ntitle: Rust Notes\ndescription: all about rust\ntags:\n  - rustacean\n---\nBody.\n",
    );

    let out = commands::search::render(&test_notebook(&temp), "rust", 1, false).unwrap();

    assert!(out.contains(">>>Rust<<< Notes"), "title match is marked:\n{}", out);
    assert!(out.contains("all about >>>rust<<<"), "description match is marked");
    assert!(out.contains("#>>>rust<<<acean"), "tag match is marked");
}

#[test]
fn test_search_pages_results() {
    let temp = TempDir::new().unwrap();
    for i in 1..=7 {
        write_note(
            temp.path(),
            &format!("entry-{}", i),
            &format!("---\ntitle: Entry {}\ndate: 2025-01-{:02}\n---\nBody.\n", i, i),
        );
    }

    let notebook = test_notebook(&temp);

    let page_one = commands::search::render(&notebook, "Entry", 1, false).unwrap();
    assert!(page_one.contains("7 matching notes"));
    assert!(page_one.contains("page 1 of 2"));

    let page_two = commands::search::render(&notebook, "Entry", 2, false).unwrap();
    assert!(page_two.contains("page 2 of 2"));
    assert_eq!(
        page_two.matches(">>>Entry<<<").count(),
        2,
        "page 2 holds the remaining two notes:\n{}",
        page_two
    );
}

#[test]
fn test_search_without_matches_is_ordinary_output() {
    let temp = TempDir::new().unwrap();
    write_note(temp.path(), "only", "---\ntitle: Only\n---\nBody.\n");

    let out = commands::search::render(&test_notebook(&temp), "absent", 1, false).unwrap();
    assert_eq!(out, "no notes match \"absent\"\n");
}

#[test]
fn test_search_with_reserved_query_is_an_error() {
    let temp = TempDir::new().unwrap();
    write_note(
        temp.path(),
        "plus",
        "---\ntitle: c++ tricks\n---\nBody.\n",
    );

    let err = commands::search::render(&test_notebook(&temp), "+", 1, false).unwrap_err();
    assert!(err.to_string().contains("not a valid match pattern"));
}

#[test]
fn test_tags_catalog_ranks_by_count() {
    let temp = TempDir::new().unwrap();
    write_note(
        temp.path(),
        "one",
        "---\ntitle: One\ntags:\n  - common\n  - rare\n---\nBody.\n",
    );
    write_note(
        temp.path(),
        "two",
        "---\ntitle: Two\ntags:\n  - common\n---\nBody.\n",
    );

    let out = commands::tags::render(&test_notebook(&temp), false).unwrap();

    let common_at = out.find("#common").unwrap();
    let rare_at = out.find("#rare").unwrap();
    assert!(common_at < rare_at, "most used tag renders first:\n{}", out);
    assert!(out.contains("   2  #common"));
    assert!(out.contains("   1  #rare"));
}

#[test]
fn test_show_prints_header_and_body() {
    let temp = TempDir::new().unwrap();
    write_note(
        temp.path(),
        "full",
        "---\ntitle: Full Note\ndescription: Everything\ndate: 2025-04-01\ntags:\n  - demo\n---\nThe body text.\n",
    );

    let out = commands::show::render(&test_notebook(&temp), "full", false).unwrap();

    assert!(out.starts_with("# Full Note\n"));
    assert!(out.contains("date: 2025-04-01"));
    assert!(out.contains("tags: demo"));
    assert!(out.ends_with("The body text.\n"));
}

#[test]
fn test_show_unknown_slug_is_an_error() {
    let temp = TempDir::new().unwrap();
    write_note(temp.path(), "real", "---\ntitle: Real\n---\nBody.\n");

    let err = commands::show::render(&test_notebook(&temp), "ghost", false).unwrap_err();
    assert!(err.to_string().contains("no note with slug 'ghost'"));
}

#[test]
fn test_sitemap_lists_static_paths_and_titled_notes() {
    let temp = TempDir::new().unwrap();
    write_note(
        temp.path(),
        "titled",
        "---\ntitle: Hello\ndate: 2025-01-01\n---\nBody.\n",
    );
    write_note(
        temp.path(),
        "untitled",
        "---\ndescription: draft without a title\n---\nBody.\n",
    );

    let xml = commands::sitemap::render(&test_notebook(&temp));

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<loc>https://example.com/</loc>"));
    assert!(xml.contains("<loc>https://example.com/tags</loc>"));
    assert!(xml.contains("<loc>https://example.com/notes/titled</loc>"));
    assert!(
        !xml.contains("untitled"),
        "notes without a title stay out:\n{}",
        xml
    );
}
