//! Minimal SVG element tree.
//!
//! Renderers build a complete [`SvgElement`] tree first and serialize it in one
//! pass at the end, so a failing render never yields a partial document.

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SVG_DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;
const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
    CData(String),
}

impl From<SvgElement> for SvgNode {
    fn from(element: SvgElement) -> Self {
        Self::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<SvgNode>,
}

impl SvgElement {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attributes.push((name, value.to_string()));
        self
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<SvgNode>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(SvgNode::Text(text.into()))
    }

    pub fn push(&mut self, node: impl Into<SvgNode>) {
        self.children.push(node.into());
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct child elements with the given tag name.
    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SvgElement> {
        self.children.iter().filter_map(move |node| match node {
            SvgNode::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }
}

/// Serializes `root` as a standalone SVG 1.1 document.
#[must_use]
pub fn write_document(root: &SvgElement) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(SVG_DOCTYPE);
    out.push('\n');
    write_element(&mut out, root, 0);
    out.push('\n');
    out
}

fn write_element(out: &mut String, element: &SvgElement, depth: usize) {
    out.push('<');
    out.push_str(element.name);
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_xml(value));
        out.push('"');
    }

    if element.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');

    let inline = element
        .children
        .iter()
        .all(|node| !matches!(node, SvgNode::Element(_)));
    for node in &element.children {
        if !inline {
            out.push('\n');
            push_indent(out, depth + 1);
        }
        match node {
            SvgNode::Element(child) => write_element(out, child, depth + 1),
            SvgNode::Text(text) => out.push_str(&escape_xml(text)),
            SvgNode::CData(data) => {
                out.push_str("<![CDATA[\n");
                out.push_str(data);
                out.push_str("]]>");
            }
        }
    }
    if !inline {
        out.push('\n');
        push_indent(out, depth);
    }

    out.push_str("</");
    out.push_str(element.name);
    out.push('>');
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

#[must_use]
pub fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
