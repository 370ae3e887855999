use pulldown_cmark::{Event, MetadataBlockKind, Options, Parser, Tag, TagEnd};

use crate::error::MetadataError;
use crate::model::Frontmatter;

/// Result of parsing one raw document.
#[derive(Debug)]
pub struct ParsedDocument {
    pub frontmatter: Frontmatter,
    /// Byte offset where body content begins (end of the metadata block).
    pub content_start: usize,
}

impl ParsedDocument {
    /// Body text of the document, without the metadata block.
    ///
    /// `text` must be the same string the document was parsed from.
    pub fn body<'t>(&self, text: &'t str) -> &'t str {
        text.get(self.content_start..)
            .unwrap_or("")
            .trim_start_matches('\n')
    }
}

/// Extract the YAML metadata block from the top of a raw document.
///
/// Field extraction is tolerant: `title` and `description` default to
/// empty strings, `tags` to an empty list, and a `tags` value that is not
/// a sequence counts as no tags. A document without a metadata block, or
/// with one that is not valid YAML, is an error; index builders treat
/// that as "skip this document".
pub fn parse(text: &str) -> Result<ParsedDocument, MetadataError> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

    let parser = Parser::new_ext(text, options);

    let mut in_frontmatter = false;
    let mut frontmatter_content = String::new();
    let mut block = None;

    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                in_frontmatter = true;
            }
            Event::End(TagEnd::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                in_frontmatter = false;
                block = Some((std::mem::take(&mut frontmatter_content), range.end));
                // A metadata block can only open the document.
                break;
            }
            Event::Text(cow_str) if in_frontmatter => {
                frontmatter_content.push_str(cow_str.as_ref());
            }
            _ => {}
        }
    }

    let Some((raw, content_start)) = block else {
        return Err(MetadataError::MissingBlock);
    };

    let value: serde_json::Value = serde_yaml::from_str(&raw)?;

    Ok(ParsedDocument {
        frontmatter: fields_from(&value),
        content_start,
    })
}

fn fields_from(value: &serde_json::Value) -> Frontmatter {
    let title = value
        .get("title")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let description = value
        .get("description")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let date = value
        .get("date")
        .and_then(|v| v.as_str())
        .map(str::to_string);
    let tags = value
        .get("tags")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Frontmatter {
        title,
        description,
        tags,
        date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_metadata_block() {
        let text = "---\ntitle: My Note\ndescription: About things\ndate: 2025-01-15\ntags:\n  - rust\n  - notes\n---\n# Body";
        let doc = parse(text).unwrap();

        assert_eq!(doc.frontmatter.title, "My Note");
        assert_eq!(doc.frontmatter.description, "About things");
        assert_eq!(doc.frontmatter.date.as_deref(), Some("2025-01-15"));
        assert_eq!(doc.frontmatter.tags, vec!["rust", "notes"]);
    }

    #[test]
    fn test_missing_fields_default() {
        let text = "---\ntitle: Bare\n---\nBody";
        let doc = parse(text).unwrap();

        assert_eq!(doc.frontmatter.title, "Bare");
        assert_eq!(doc.frontmatter.description, "");
        assert!(doc.frontmatter.date.is_none());
        assert!(doc.frontmatter.tags.is_empty());
    }

    #[test]
    fn test_tags_must_be_a_sequence() {
        let text = "---\ntitle: T\ntags: just-a-string\n---\nBody";
        let doc = parse(text).unwrap();

        assert!(
            doc.frontmatter.tags.is_empty(),
            "scalar tags should count as no tags"
        );
    }

    #[test]
    fn test_non_string_tag_entries_are_dropped() {
        let text = "---\ntitle: T\ntags:\n  - ok\n  - 42\n---\nBody";
        let doc = parse(text).unwrap();

        assert_eq!(doc.frontmatter.tags, vec!["ok"]);
    }

    #[test]
    fn test_missing_block_is_an_error() {
        let err = parse("Just a paragraph, no metadata.").unwrap_err();
        assert!(matches!(err, MetadataError::MissingBlock));
    }

    #[test]
    fn test_empty_document_is_an_error() {
        assert!(parse("").is_err());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let text = "---\ntitle: [unclosed\n---\nBody";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, MetadataError::InvalidYaml(_)));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let text = "---\nid: 123\nlayout: post\n---\nBody";
        let doc = parse(text).unwrap();

        assert_eq!(doc.frontmatter, Frontmatter::default());
    }

    #[test]
    fn test_body_starts_after_block() {
        let text = "---\ntitle: Hello\n---\nActual content starts here.";
        let doc = parse(text).unwrap();

        assert_eq!(doc.body(text), "Actual content starts here.");
    }
}
