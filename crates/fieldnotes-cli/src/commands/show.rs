use std::error::Error;
use std::fmt::Write;

use fieldnotes_core::Notebook;

/// Render one note in full: a metadata header followed by the body.
pub fn render(notebook: &Notebook, slug: &str, json: bool) -> Result<String, Box<dyn Error>> {
    let document = notebook.document(slug)?;

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&document)?));
    }

    let meta = &document.frontmatter;
    let mut out = String::new();
    writeln!(out, "# {}", meta.title)?;
    if !meta.description.is_empty() {
        writeln!(out, "{}", meta.description)?;
    }
    if let Some(date) = &meta.date {
        writeln!(out, "date: {}", date)?;
    }
    if !meta.tags.is_empty() {
        writeln!(out, "tags: {}", meta.tags.join(", "))?;
    }
    writeln!(out)?;
    out.push_str(&document.content);
    if !document.content.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
