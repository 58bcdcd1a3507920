//! Markdown rendering of display trees (used by `agronomist render`)

use std::fmt::Write;

use crate::display::{Block, DisplayTree, Rich, Span, Tone, Widget};
use crate::router::AppView;

/// Render a whole screen: title, tagline, then the panel body.
pub fn render_app_md(view: &AppView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", view.title);
    let _ = writeln!(out, "### {}\n", view.tagline);
    out.push_str(&render_tree_md(&view.body));
    out
}

pub fn render_tree_md(tree: &DisplayTree) -> String {
    let mut out = String::new();
    for block in &tree.blocks {
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            let hashes = "#".repeat(usize::from((*level).clamp(1, 6)));
            let _ = writeln!(out, "{hashes} {text}\n");
        }
        Block::Paragraph { text } => {
            let _ = writeln!(out, "{}\n", rich_md(text));
        }
        Block::List { items } => {
            for item in items {
                let _ = writeln!(out, "- {}", rich_md(item));
            }
            out.push('\n');
        }
        Block::Metric { label, value, .. } => {
            let _ = writeln!(out, "**{label}**: {value}\n");
        }
        Block::Columns { columns } => {
            for block in columns.iter().flatten() {
                write_block(out, block);
            }
        }
        Block::Callout { tone, body } => {
            let mut inner = String::new();
            for block in body {
                write_block(&mut inner, block);
            }
            let _ = writeln!(out, "> [{}]", tone_label(*tone));
            for line in inner.trim_end().lines() {
                if line.is_empty() {
                    out.push_str(">\n");
                } else {
                    let _ = writeln!(out, "> {line}");
                }
            }
            out.push('\n');
        }
        Block::Divider => out.push_str("---\n\n"),
        Block::Form(form) => {
            for field in &form.fields {
                write_widget(out, field);
            }
            let _ = writeln!(out, "[{}]\n", form.submit_label);
        }
    }
}

fn write_widget(out: &mut String, widget: &Widget) {
    match widget {
        Widget::TextInput { label, value, .. } | Widget::TextArea { label, value, .. } => {
            let _ = writeln!(out, "{label} `{value}`\n");
        }
        Widget::Select {
            label,
            options,
            selected,
            ..
        } => {
            let shown = options
                .iter()
                .find(|option| Some(&option.value) == selected.as_ref())
                .or_else(|| options.first())
                .map(|option| option.label.as_str())
                .unwrap_or_default();
            let _ = writeln!(out, "{label} `{shown}`\n");
        }
    }
}

fn tone_label(tone: Tone) -> &'static str {
    match tone {
        Tone::Info => "INFO",
        Tone::Success => "SUCCESS",
        Tone::Warning => "WARNING",
    }
}

fn rich_md(text: &Rich) -> String {
    text.spans()
        .iter()
        .map(|span| match span {
            Span::Plain(t) => t.clone(),
            Span::Strong(t) => format!("**{t}**"),
            Span::Emphasis(t) => format!("*{t}*"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{Inputs, PestQuery};
    use crate::catalog::PestCategory;
    use crate::page::Page;
    use crate::panels;
    use crate::router::render_app;

    #[test]
    fn strong_spans_become_bold() {
        let md = rich_md(&Rich::term("Aphids", "Small sap-sucking insects"));
        assert_eq!(md, "**Aphids**: Small sap-sucking insects");
    }

    #[test]
    fn callouts_are_quoted() {
        let tree = panels::pest::render(&PestQuery {
            category: Some(PestCategory::Rodents),
        });
        let md = render_tree_md(&tree);
        assert!(md.contains("- **Voles**: Gnaw on bark and roots"));
        assert!(md.contains("> [SUCCESS]"));
        assert!(md.contains("> - 🔍 **Regular Monitoring**"));
    }

    #[test]
    fn app_markdown_starts_with_title() {
        let md = render_app_md(&render_app(Page::Home, Inputs::default()));
        assert!(md.starts_with("# 🌾 AIAgronomist\n"));
        assert!(md.contains("**Growing Tips**: 500+"));
    }
}
