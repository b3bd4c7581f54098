use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use tracing::info;

use crate::error::ReportError;
use crate::format::MARKDOWN_SPECIALS;
use crate::styles::DocumentStyles;

/// Build the printable report from rendered Markdown.
///
/// Understood subset:
/// - `#`, `##`, `###` headings
/// - `- item` bullets, `  - item` nested bullets
/// - `**bold**` and `[label](url)` inline
/// - `---` page break
///
/// Anything else becomes a normal paragraph.
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ReportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size, styles))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size, styles))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size, styles));

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let paragraph = if let Some(text) = trimmed.strip_prefix("### ") {
            heading_paragraph(text, "Heading3", styles)
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            heading_paragraph(text, "Heading2", styles)
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            heading_paragraph(text, "Heading1", styles)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            let nested = line.starts_with(' ');
            bullet_paragraph(text, nested, styles)
        } else if trimmed == "---" {
            Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
        } else {
            runs_paragraph(Paragraph::new(), trimmed, styles)
        };
        docx = docx.add_paragraph(paragraph.align(AlignmentType::Left));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ReportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    info!(bytes = bytes.len(), "report exported to DOCX");
    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize, styles: &DocumentStyles) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // half-points
        .bold()
        .color(&styles.accent_color)
        .fonts(RunFonts::new().ascii(&styles.heading_font))
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(unescape(text))
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, nested: bool, styles: &DocumentStyles) -> Paragraph {
    let marker = if nested { "    \u{25E6} " } else { "\u{2022} " };
    let para = Paragraph::new().add_run(body_run(marker, styles));
    runs_paragraph(para, text, styles)
}

fn runs_paragraph(mut para: Paragraph, text: &str, styles: &DocumentStyles) -> Paragraph {
    for run in parse_inline(text)
        .into_iter()
        .map(|span| span.into_run(styles))
    {
        para = para.add_run(run);
    }
    para
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

#[derive(Debug, PartialEq, Eq)]
enum Span<'a> {
    Plain(&'a str),
    Bold(&'a str),
    Link { label: &'a str, url: &'a str },
}

impl Span<'_> {
    fn into_run(self, styles: &DocumentStyles) -> Run {
        match self {
            Span::Plain(text) => body_run(text, styles),
            Span::Bold(text) => body_run(&unescape(text), styles).bold(),
            Span::Link { label, url } => {
                let label = unescape(label);
                let text = if label == url {
                    url.to_string()
                } else {
                    format!("{label} ({url})")
                };
                body_run(&text, styles)
                    .color(&styles.accent_color)
                    .underline("single")
            }
        }
    }
}

/// Split a line into plain, `**bold**` and `[label](url)` spans. A marker
/// that does not parse stays plain text and scanning continues after it.
/// `\*`, `\[`, `\]` and `\\` are literal characters.
fn parse_inline(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(['*', '[', '\\']) {
        let start = cursor + offset;
        let marked = &text[start..];
        let parsed = if marked.starts_with("**") {
            parse_bold(marked)
        } else if marked.starts_with('[') {
            parse_link(marked)
        } else if marked.starts_with('\\') {
            parse_escape(marked)
        } else {
            None
        };

        match parsed {
            Some((span, consumed)) => {
                if plain_start < start {
                    spans.push(Span::Plain(&text[plain_start..start]));
                }
                spans.push(span);
                cursor = start + consumed;
                plain_start = cursor;
            }
            None => cursor = start + 1,
        }
    }

    if plain_start < text.len() {
        spans.push(Span::Plain(&text[plain_start..]));
    }
    spans
}

fn parse_bold(marked: &str) -> Option<(Span<'_>, usize)> {
    let end = marked[2..].find("**")?;
    Some((Span::Bold(&marked[2..2 + end]), end + 4))
}

/// `[label](url)`. The label ends at the first unescaped `]` and may not
/// open another `[`.
fn parse_link(marked: &str) -> Option<(Span<'_>, usize)> {
    let close = closing_bracket(marked)?;
    let label = &marked[1..close];
    if !marked[close..].starts_with("](") {
        return None;
    }
    let url_start = close + 2;
    let url_len = marked[url_start..].find(')')?;
    let span = Span::Link {
        label,
        url: &marked[url_start..url_start + url_len],
    };
    Some((span, url_start + url_len + 1))
}

fn closing_bracket(marked: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in marked.char_indices().skip(1) {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '[' => return None,
            ']' => return Some(i),
            _ => {}
        }
    }
    None
}

fn parse_escape(marked: &str) -> Option<(Span<'_>, usize)> {
    let escaped = marked[1..].chars().next()?;
    MARKDOWN_SPECIALS
        .contains(&escaped)
        .then(|| (Span::Plain(&marked[1..1 + escaped.len_utf8()]), 1 + escaped.len_utf8()))
}

/// Span text with escapes removed.
fn unescape(text: &str) -> String {
    parse_inline(text)
        .into_iter()
        .map(|span| match span {
            Span::Plain(t) | Span::Bold(t) => t,
            Span::Link { label, .. } => label,
        })
        .collect()
}
