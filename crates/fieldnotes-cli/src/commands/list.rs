use std::error::Error;
use std::fmt::Write;

use fieldnotes_core::{NoteMeta, Notebook};

/// Render the note index, newest first, optionally filtered to one tag.
pub fn render(
    notebook: &Notebook,
    tag: Option<&str>,
    json: bool,
) -> Result<String, Box<dyn Error>> {
    let index = notebook.index();
    let notes: Vec<&NoteMeta> = match tag {
        Some(tag) => index.with_tag(tag),
        None => index.iter().collect(),
    };

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&notes)?));
    }

    if notes.is_empty() {
        return Ok("no notes found\n".to_string());
    }

    let mut out = String::new();
    for note in &notes {
        writeln!(out, "{}", row(note))?;
    }
    Ok(out)
}

fn row(note: &NoteMeta) -> String {
    let date = note.date.as_deref().unwrap_or("");
    let mut line = format!("{:<10}  {:<24}  {}", date, note.slug, note.title);
    if !note.tags.is_empty() {
        let tags: Vec<String> = note.tags.iter().map(|tag| format!("#{}", tag)).collect();
        line.push_str("  ");
        line.push_str(&tags.join(" "));
    }
    line
}
