//! HTML fragments for display trees
//!
//! Every piece of text passes through [`escape`]; user input is echoed into
//! callouts and form values, so nothing is written raw.

use std::fmt::Write;

use agronomist_core::{Block, DisplayTree, Form, Page, Rich, Span, Widget};

/// Escape text for element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the panel body. Forms post back to `page`.
pub fn render_tree_html(tree: &DisplayTree, page: Page) -> String {
    let mut out = String::new();
    for block in &tree.blocks {
        write_block(&mut out, block, page);
    }
    out
}

fn write_block(out: &mut String, block: &Block, page: Page) {
    match block {
        Block::Heading { level, text } => {
            let level = (*level).clamp(1, 6);
            let _ = write!(out, "<h{level}>{}</h{level}>", escape(text));
        }
        Block::Paragraph { text } => {
            let _ = write!(out, "<p>{}</p>", rich_html(text));
        }
        Block::List { items } => {
            out.push_str("<ul>");
            for item in items {
                let _ = write!(out, "<li>{}</li>", rich_html(item));
            }
            out.push_str("</ul>");
        }
        Block::Metric { label, value, help } => {
            let _ = write!(
                out,
                r#"<div class="metric" title="{}"><div class="metric-label">{}</div><div class="metric-value">{}</div></div>"#,
                escape(help),
                escape(label),
                escape(value)
            );
        }
        Block::Columns { columns } => {
            out.push_str(r#"<div class="columns">"#);
            for column in columns {
                out.push_str(r#"<div class="column">"#);
                for block in column {
                    write_block(out, block, page);
                }
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }
        Block::Callout { tone, body } => {
            let _ = write!(out, r#"<div class="callout callout-{}">"#, tone.as_str());
            for block in body {
                write_block(out, block, page);
            }
            out.push_str("</div>");
        }
        Block::Divider => out.push_str("<hr>"),
        Block::Form(form) => write_form(out, form, page),
    }
}

fn write_form(out: &mut String, form: &Form, page: Page) {
    let _ = write!(
        out,
        r#"<form id="{}" method="{}" action="/pages/{}">"#,
        escape(&form.id),
        form.method.as_str(),
        page.slug()
    );
    for field in &form.fields {
        write_widget(out, field);
    }
    let _ = write!(out, r#"<button type="submit">{}</button></form>"#, escape(&form.submit_label));
}

fn write_widget(out: &mut String, widget: &Widget) {
    let id = format!("field-{}", escape(widget.name()));
    match widget {
        Widget::TextInput {
            name,
            label,
            placeholder,
            value,
        } => {
            let placeholder = placeholder
                .as_deref()
                .map(|p| format!(r#" placeholder="{}""#, escape(p)))
                .unwrap_or_default();
            let _ = write!(
                out,
                r#"<label for="{id}">{}</label><input type="text" id="{id}" name="{}" value="{}"{placeholder}>"#,
                escape(label),
                escape(name),
                escape(value)
            );
        }
        Widget::TextArea { name, label, value } => {
            let _ = write!(
                out,
                r#"<label for="{id}">{}</label><textarea id="{id}" name="{}">{}</textarea>"#,
                escape(label),
                escape(name),
                escape(value)
            );
        }
        Widget::Select {
            name,
            label,
            options,
            selected,
        } => {
            let _ = write!(
                out,
                r#"<label for="{id}">{}</label><select id="{id}" name="{}">"#,
                escape(label),
                escape(name)
            );
            for option in options {
                let is_selected = selected.as_deref() == Some(option.value.as_str());
                let _ = write!(
                    out,
                    r#"<option value="{}"{}>{}</option>"#,
                    escape(&option.value),
                    if is_selected { " selected" } else { "" },
                    escape(&option.label)
                );
            }
            out.push_str("</select>");
        }
    }
}

fn rich_html(text: &Rich) -> String {
    text.spans()
        .iter()
        .map(|span| match span {
            Span::Plain(t) => escape(t),
            Span::Strong(t) => format!("<strong>{}</strong>", escape(t)),
            Span::Emphasis(t) => format!("<em>{}</em>", escape(t)),
        })
        .collect()
}
