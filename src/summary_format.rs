//! AI Summary Formatter
//!
//! Line-based classification of the analysis text returned by the backend:
//! - `### Title` headings
//! - `**Title**` / `**Title:**` sub-headings
//! - `*   item` / `- item` list entries, with an optional `**Label:**` prefix
//! - `---` rules
//! - paragraphs with `**bold**` spans
//!
//! Runs on every typewriter frame, so it must accept any prefix of any text.

/// Inline run within a paragraph or list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub title: Option<String>,
    pub body: Vec<Inline>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryBlock {
    Heading(String),
    Subheading(String),
    List(Vec<ListEntry>),
    Rule,
    Paragraph(Vec<Inline>),
}

pub fn format_summary(text: &str) -> Vec<SummaryBlock> {
    let mut blocks = Vec::new();
    let mut list: Vec<ListEntry> = Vec::new();

    for line in text.lines() {
        let line = line.trim();

        if let Some(content) = list_item(line) {
            list.push(parse_list_entry(content));
            continue;
        }
        if line.is_empty() {
            continue;
        }

        flush_list(&mut list, &mut blocks);

        if line.starts_with("###") {
            blocks.push(SummaryBlock::Heading(line.trim_start_matches('#').trim().to_string()));
        } else if is_bold_heading(line) {
            let label = line.replace("**", "");
            blocks.push(SummaryBlock::Subheading(label.trim().trim_end_matches(':').trim().to_string()));
        } else if line == "---" {
            blocks.push(SummaryBlock::Rule);
        } else {
            blocks.push(SummaryBlock::Paragraph(parse_inline(line)));
        }
    }

    flush_list(&mut list, &mut blocks);
    blocks
}

fn flush_list(list: &mut Vec<ListEntry>, blocks: &mut Vec<SummaryBlock>) {
    if !list.is_empty() {
        blocks.push(SummaryBlock::List(std::mem::take(list)));
    }
}

fn list_item(line: &str) -> Option<&str> {
    line.strip_prefix("* ")
        .or_else(|| line.strip_prefix("- "))
        .map(str::trim)
}

fn is_bold_heading(line: &str) -> bool {
    let body = line.strip_suffix(':').unwrap_or(line);
    body.len() >= 4 && body.starts_with("**") && body.ends_with("**") && !body[2..body.len() - 2].contains("**")
}

fn parse_list_entry(content: &str) -> ListEntry {
    if content.starts_with("**") {
        if let Some((title, rest)) = content.split_once(":**") {
            return ListEntry {
                title: Some(title.replace("**", "").trim().to_string()),
                body: parse_inline(rest.trim()),
            };
        }
    }
    ListEntry {
        title: None,
        body: parse_inline(content),
    }
}

/// Split `**bold**` spans out of a line. An unclosed `**` stays literal.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("**") else {
            break;
        };
        if start > 0 {
            out.push(Inline::Text(rest[..start].to_string()));
        }
        out.push(Inline::Bold(after[..end].to_string()));
        rest = &after[end + 2..];
    }

    if !rest.is_empty() {
        out.push(Inline::Text(rest.to_string()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_line_kinds() {
        let text = "### Resumen general\n\
                    **Hallazgos:**\n\
                    *   **Retrasos:** dos proyectos vencidos\n\
                    *   Buen ritmo en desarrollo\n\
                    ---\n\
                    Se recomienda **priorizar** la migración.";
        let blocks = format_summary(text);

        assert_eq!(blocks[0], SummaryBlock::Heading("Resumen general".to_string()));
        assert_eq!(blocks[1], SummaryBlock::Subheading("Hallazgos".to_string()));
        match &blocks[2] {
            SummaryBlock::List(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].title.as_deref(), Some("Retrasos"));
                assert_eq!(entries[0].body, vec![Inline::Text("dos proyectos vencidos".to_string())]);
                assert_eq!(entries[1].title, None);
            }
            other => panic!("expected list, got {:?}", other),
        }
        assert_eq!(blocks[3], SummaryBlock::Rule);
        assert_eq!(
            blocks[4],
            SummaryBlock::Paragraph(vec![
                Inline::Text("Se recomienda ".to_string()),
                Inline::Bold("priorizar".to_string()),
                Inline::Text(" la migración.".to_string()),
            ])
        );
        assert_eq!(blocks.len(), 5);
    }

    #[test]
    fn test_paragraph_closes_list() {
        let blocks = format_summary("* uno\n* dos\nTexto\n* tres");
        assert!(matches!(&blocks[0], SummaryBlock::List(e) if e.len() == 2));
        assert!(matches!(&blocks[1], SummaryBlock::Paragraph(_)));
        assert!(matches!(&blocks[2], SummaryBlock::List(e) if e.len() == 1));
    }

    #[test]
    fn test_unclosed_bold_is_literal() {
        assert_eq!(parse_inline("hola **mun"), vec![Inline::Text("hola **mun".to_string())]);
    }

    #[test]
    fn test_every_prefix_formats() {
        let text = "### Título\n**Sección:**\n*   **Clave:** valor **fuerte**\n---\nFin ✓";
        let mut prefix = String::new();
        for ch in text.chars() {
            prefix.push(ch);
            let _ = format_summary(&prefix);
        }
        assert!(format_summary("").is_empty());
        assert!(format_summary("\n\n   \n").is_empty());
        let _ = format_summary("**");
        let _ = format_summary("*");
        let _ = format_summary("**:");
    }
}
