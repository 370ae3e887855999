use fieldnotes_core::Notebook;

/// Render the sitemap urlset: the static pages plus one entry per note
/// that carries a title. Untitled notes are placeholders and stay out.
pub fn render(notebook: &Notebook) -> String {
    let index = notebook.index();
    let base = notebook.config().base_url.trim_end_matches('/').to_string();

    let mut paths = vec!["/".to_string(), "/tags".to_string()];
    paths.extend(
        index
            .iter()
            .filter(|note| !note.title.is_empty())
            .map(|note| format!("/notes/{}", note.slug)),
    );

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for path in &paths {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}{}</loc>\n", base, path));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}
