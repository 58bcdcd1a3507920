//! Display tree produced by every panel render
//!
//! Panels never write HTML or markdown directly. They return a
//! [`DisplayTree`], and the host decides how to draw it (HTML in the
//! server, markdown on the terminal, JSON over the API).

use serde::{Deserialize, Serialize};

/// One inline run of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", content = "text", rename_all = "snake_case")]
pub enum Span {
    Plain(String),
    Strong(String),
    Emphasis(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(t) | Self::Strong(t) | Self::Emphasis(t) => t,
        }
    }
}

/// Inline rich text: a sequence of spans
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rich(pub Vec<Span>);

impl Rich {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(mut self, text: impl Into<String>) -> Self {
        self.0.push(Span::Plain(text.into()));
        self
    }

    pub fn strong(mut self, text: impl Into<String>) -> Self {
        self.0.push(Span::Strong(text.into()));
        self
    }

    pub fn emphasis(mut self, text: impl Into<String>) -> Self {
        self.0.push(Span::Emphasis(text.into()));
        self
    }

    /// `**label:** value`, the layout used for fact sheets.
    pub fn labelled(label: &str, value: &str) -> Self {
        Self::new().strong(format!("{label}:")).plain(format!(" {value}"))
    }

    /// `**term**: detail`, the layout used for bullet glossaries.
    pub fn term(term: &str, detail: &str) -> Self {
        Self::new().strong(term).plain(format!(": {detail}"))
    }

    pub fn spans(&self) -> &[Span] {
        &self.0
    }

    /// Text with all styling removed.
    pub fn to_plain(&self) -> String {
        self.0.iter().map(Span::text).collect()
    }
}

impl From<&str> for Rich {
    fn from(text: &str) -> Self {
        Self::new().plain(text)
    }
}

impl From<String> for Rich {
    fn from(text: String) -> Self {
        Self(vec![Span::Plain(text)])
    }
}

/// Visual tone of a callout box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Info,
    Success,
    Warning,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}

/// Dropdown entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Input widget requested from the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    TextInput {
        name: String,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        value: String,
    },
    TextArea {
        name: String,
        label: String,
        value: String,
    },
    Select {
        name: String,
        label: String,
        options: Vec<SelectOption>,
        /// Value of the chosen option; `None` keeps the sentinel entry selected
        selected: Option<String>,
    },
}

impl Widget {
    pub fn name(&self) -> &str {
        match self {
            Self::TextInput { name, .. } | Self::TextArea { name, .. } | Self::Select { name, .. } => {
                name
            }
        }
    }
}

/// How a form submits its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMethod {
    Get,
    Post,
}

impl FormMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
        }
    }
}

/// A group of widgets submitted together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub id: String,
    pub method: FormMethod,
    pub fields: Vec<Widget>,
    pub submit_label: String,
}

/// One display element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: Rich },
    List { items: Vec<Rich> },
    Metric {
        label: String,
        value: String,
        help: String,
    },
    Columns { columns: Vec<Vec<Block>> },
    Callout { tone: Tone, body: Vec<Block> },
    Divider,
    Form(Form),
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<Rich>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn list<I, R>(items: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Rich>,
    {
        Self::List {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn metric(label: &str, value: &str, help: &str) -> Self {
        Self::Metric {
            label: label.to_owned(),
            value: value.to_owned(),
            help: help.to_owned(),
        }
    }

    pub fn callout(tone: Tone, body: Vec<Block>) -> Self {
        Self::Callout { tone, body }
    }

    fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            Self::Heading { text, .. } => out.push(text.clone()),
            Self::Paragraph { text } => out.push(text.to_plain()),
            Self::List { items } => out.extend(items.iter().map(Rich::to_plain)),
            Self::Metric { label, value, .. } => {
                out.push(label.clone());
                out.push(value.clone());
            }
            Self::Columns { columns } => {
                for block in columns.iter().flatten() {
                    block.collect_text(out);
                }
            }
            Self::Callout { body, .. } => {
                for block in body {
                    block.collect_text(out);
                }
            }
            Self::Divider | Self::Form(_) => {}
        }
    }
}

/// Ordered output of one render pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayTree {
    pub blocks: Vec<Block>,
}

impl DisplayTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    /// All visible text, one entry per heading/paragraph/list item.
    pub fn text_lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        for block in &self.blocks {
            block.collect_text(&mut out);
        }
        out
    }

    /// Whether any visible line contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_lines().iter().any(|line| line.contains(needle))
    }

    /// Top-level callouts with the given tone.
    pub fn callouts(&self, tone: Tone) -> Vec<&[Block]> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Callout { tone: t, body } if *t == tone => Some(body.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Top-level headings at `level`.
    pub fn headings(&self, level: u8) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading { level: l, text } if *l == level => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Top-level forms.
    pub fn forms(&self) -> Vec<&Form> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Form(form) => Some(form),
                _ => None,
            })
            .collect()
    }
}

impl From<Vec<Block>> for DisplayTree {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labelled_text_keeps_label_strong() {
        let rich = Rich::labelled("Sunlight", "Full sun");
        assert_eq!(rich.spans()[0], Span::Strong("Sunlight:".into()));
        assert_eq!(rich.to_plain(), "Sunlight: Full sun");
    }

    #[test]
    fn text_lines_descend_into_columns_and_callouts() {
        let tree = DisplayTree::from(vec![
            Block::Columns {
                columns: vec![vec![Block::paragraph("left")], vec![Block::paragraph("right")]],
            },
            Block::callout(Tone::Info, vec![Block::paragraph("tip")]),
        ]);
        assert_eq!(tree.text_lines(), vec!["left", "right", "tip"]);
        assert!(tree.contains_text("tip"));
        assert_eq!(tree.callouts(Tone::Info).len(), 1);
        assert!(tree.callouts(Tone::Warning).is_empty());
    }

    #[test]
    fn blocks_serialize_with_type_tag() {
        let json = serde_json::to_value(Block::heading(2, "Hello")).unwrap();
        assert_eq!(json["type"], "heading");
        assert_eq!(json["level"], 2);

        let json = serde_json::to_value(Block::Divider).unwrap();
        assert_eq!(json["type"], "divider");
    }
}
