use std::error::Error;
use std::fmt::Write;

use fieldnotes_core::highlight::{highlight, Segment};
use fieldnotes_core::{NoteBrowser, NoteMeta, Notebook};
use serde::Serialize;

/// One search result with `>>>`/`<<<` markers applied to every field the
/// query matched in.
#[derive(Serialize)]
struct SearchHit {
    slug: String,
    title: String,
    description: String,
    tags: Vec<String>,
    date: Option<String>,
}

/// Render one page of search results. A query made of reserved pattern
/// characters fails here, in the marker pass, exactly like the engine's
/// highlighter.
pub fn render(
    notebook: &Notebook,
    query: &str,
    page: usize,
    json: bool,
) -> Result<String, Box<dyn Error>> {
    let index = notebook.index();
    let mut browser = NoteBrowser::new(&index, notebook.config().page_size);
    browser.set_query(query);
    browser.set_page(page);

    let total = browser.results().len();
    if total == 0 {
        return Ok(format!("no notes match {:?}\n", query));
    }

    let hits: Vec<SearchHit> = browser
        .page_items()
        .into_iter()
        .map(|note| mark_hit(note, query))
        .collect::<Result<_, _>>()?;

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&hits)?));
    }

    let mut out = String::new();
    writeln!(out, "{} matching notes", total)?;
    for hit in &hits {
        writeln!(out)?;
        let date = hit.date.as_deref().unwrap_or("");
        writeln!(out, "{:<10}  {}  {}", date, hit.slug, hit.title)?;
        if !hit.description.is_empty() {
            writeln!(out, "            {}", hit.description)?;
        }
        if !hit.tags.is_empty() {
            let tags: Vec<String> = hit.tags.iter().map(|tag| format!("#{}", tag)).collect();
            writeln!(out, "            {}", tags.join(" "))?;
        }
    }
    if browser.show_pagination() {
        writeln!(out)?;
        writeln!(
            out,
            "page {} of {}",
            browser.current_page(),
            browser.total_pages()
        )?;
    }
    Ok(out)
}

fn mark_hit(note: &NoteMeta, query: &str) -> Result<SearchHit, fieldnotes_core::Error> {
    Ok(SearchHit {
        slug: note.slug.clone(),
        title: mark(&note.title, query)?,
        description: mark(&note.description, query)?,
        tags: note
            .tags
            .iter()
            .map(|tag| mark(tag, query))
            .collect::<Result<_, _>>()?,
        date: note.date.clone(),
    })
}

/// Wrap every query occurrence in `>>>`/`<<<`, the terminal stand-in for
/// the web UI's highlight span.
fn mark(text: &str, query: &str) -> Result<String, fieldnotes_core::Error> {
    let segments = highlight(text, query)?;
    Ok(segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.clone(),
            Segment::Match(text) => format!(">>>{}<<<", text),
        })
        .collect())
}
