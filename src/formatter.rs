//! Tab-indented dump of an element tree
//!
//! Each element is printed on its own line, followed by one line per
//! attribute and then its element children one level deeper. Elements with
//! no element children are printed as `name: text`. Elements that do have
//! element children only print their name, even if they also contain text.

use std::io::{self, Write};

use roxmltree::{Document, Node};

/// Configuration options for formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// String repeated once per nesting level
    pub indent: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
        }
    }
}

/// Writes the element tree of a parsed document
#[derive(Debug, Clone, Default)]
pub struct TreeFormatter {
    config: FormatConfig,
}

impl TreeFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Writes `element` and everything below it, in document order.
    ///
    /// Uses an explicit stack instead of recursion. The indentation prefix is
    /// one buffer that grows and shrinks with the depth.
    pub fn write<W: Write>(&self, out: &mut W, element: Node<'_, '_>) -> io::Result<()> {
        let indent = self.config.indent.as_str();
        let mut prefix = String::new();
        let mut stack = vec![(element, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            let width = depth * indent.len();
            prefix.truncate(width);
            while prefix.len() < width {
                prefix.push_str(indent);
            }

            let name = qualified_name(node);
            if has_element_children(node) {
                writeln!(out, "{}{}", prefix, name)?;
            } else {
                writeln!(out, "{}{}: {}", prefix, name, text_content(node))?;
            }

            for (attr, value) in attribute_pairs(node) {
                writeln!(out, "{}{}{}: {}", prefix, indent, attr, value)?;
            }

            let children: Vec<_> = node
                .children()
                .filter(|child| child.is_element())
                .collect();
            stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        }

        Ok(())
    }

    pub fn format(&self, element: Node<'_, '_>) -> String {
        let mut buf = Vec::new();
        // io::Write for Vec<u8> never fails
        let _ = self.write(&mut buf, element);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Formats a whole document, starting at its root element.
pub fn format_document(doc: &Document<'_>) -> String {
    TreeFormatter::default().format(doc.root_element())
}

/// True if at least one child node is an element.
pub fn has_element_children(node: Node<'_, '_>) -> bool {
    node.children().any(|child| child.is_element())
}

/// Concatenation of every descendant text node, in document order.
///
/// CDATA sections are text nodes; comments and processing instructions
/// contribute nothing.
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Element name as written in the source, `prefix:local` when prefixed.
pub fn qualified_name<'a, 'input: 'a>(node: Node<'a, 'input>) -> &'a str {
    match source_tag(node) {
        Some(tag) => tag.name,
        None => node.tag_name().name(),
    }
}

/// Attribute names and values of `node` in source order.
///
/// Namespace declarations (`xmlns`, `xmlns:p`) are listed like any other
/// attribute, and every name keeps the prefix it was written with.
pub fn attribute_pairs<'a, 'input: 'a>(node: Node<'a, 'input>) -> Vec<(&'a str, &'a str)> {
    let mut attributes = node.attributes();

    let Some(tag) = source_tag(node) else {
        return attributes
            .map(|attr| (attr.name(), attr.value()))
            .collect();
    };

    let mut pairs = Vec::with_capacity(tag.attributes.len());
    for name in tag.attributes {
        if let Some(prefix) = declared_prefix(name) {
            let uri = node
                .namespaces()
                .find(|ns| ns.name() == prefix)
                .map_or("", |ns| ns.uri());
            pairs.push((name, uri));
        } else if let Some(attr) = attributes.next() {
            pairs.push((name, attr.value()));
        }
    }
    // Anything the tag scan could not account for
    pairs.extend(attributes.map(|attr| (attr.name(), attr.value())));
    pairs
}

/// `Some(None)` for `xmlns`, `Some(Some(p))` for `xmlns:p`.
fn declared_prefix(name: &str) -> Option<Option<&str>> {
    if name == "xmlns" {
        Some(None)
    } else {
        name.strip_prefix("xmlns:").map(Some)
    }
}

/// Names in a start tag, taken from the input text.
struct SourceTag<'input> {
    name: &'input str,
    attributes: Vec<&'input str>,
}

#[allow(clippy::indexing_slicing)]
fn source_tag<'input>(node: Node<'_, 'input>) -> Option<SourceTag<'input>> {
    let text = node.document().input_text().get(node.range().start..)?;
    let rest = text.strip_prefix('<')?;

    let name_end = rest.find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')?;
    let name = &rest[..name_end];
    // Elements from entity replacement text have no tag of their own here
    if name.rsplit(':').next() != Some(node.tag_name().name()) {
        return None;
    }

    let mut attributes = Vec::new();
    let mut rest = &rest[name_end..];
    loop {
        rest = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        if rest.is_empty() || rest.starts_with('/') || rest.starts_with('>') {
            break;
        }
        let eq = rest.find('=')?;
        attributes.push(rest[..eq].trim_end());

        let value = rest[eq + 1..].trim_start_matches(|c: char| c.is_ascii_whitespace());
        let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
        let close = value[1..].find(quote)?;
        rest = &value[close + 2..];
    }

    Some(SourceTag { name, attributes })
}
