use std::error::Error;
use std::fmt::Write;

use fieldnotes_core::Notebook;
use serde::Serialize;

#[derive(Serialize)]
struct TagCount {
    tag: String,
    count: usize,
}

/// Render the tag catalog, most used first.
pub fn render(notebook: &Notebook, json: bool) -> Result<String, Box<dyn Error>> {
    let index = notebook.index();
    let tags = index.tags();

    if json {
        let rows: Vec<TagCount> = tags
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect();
        return Ok(format!("{}\n", serde_json::to_string_pretty(&rows)?));
    }

    if tags.is_empty() {
        return Ok("no tags\n".to_string());
    }

    let mut out = String::new();
    for (tag, count) in &tags {
        writeln!(out, "{:>4}  #{}", count, tag)?;
    }
    Ok(out)
}
