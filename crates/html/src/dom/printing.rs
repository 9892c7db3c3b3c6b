use core::fmt;

use super::{DOM, DOMNode, NodeKind};
use indextree::NodeId;

fn write_indent(formatter: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        formatter.write_str("  ")?;
    }
    Ok(())
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(character),
        }
    }
    out
}

/// Attributes sorted by name for deterministic output.
fn write_attrs(formatter: &mut fmt::Formatter<'_>, node: &DOMNode) -> fmt::Result {
    let mut pairs: Vec<&(String, String)> = node.attrs.iter().collect();
    pairs.sort_by(|left, right| left.0.cmp(&right.0));
    for (name, value) in pairs {
        write!(formatter, " {name}=\"{}\"", escape_text(value))?;
    }
    Ok(())
}

fn fmt_node(dom: &DOM, id: NodeId, formatter: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    let Ok(node) = dom.node(id) else {
        return Ok(());
    };
    match &node.kind {
        NodeKind::Document => {
            write_indent(formatter, depth)?;
            writeln!(formatter, "#document")?;
            fmt_children(dom, id, formatter, depth)?;
        }
        NodeKind::Element { tag } => {
            write_indent(formatter, depth)?;
            write!(formatter, "<{tag}")?;
            write_attrs(formatter, node)?;
            writeln!(formatter, ">")?;
            fmt_children(dom, id, formatter, depth)?;
            write_indent(formatter, depth)?;
            writeln!(formatter, "</{tag}>")?;
        }
        NodeKind::Text { text } => {
            // Whitespace-only text is skipped.
            if text.chars().all(char::is_whitespace) {
                return Ok(());
            }
            write_indent(formatter, depth)?;
            writeln!(formatter, "\"{}\"", escape_text(text))?;
        }
    }
    Ok(())
}

fn fmt_children(dom: &DOM, id: NodeId, formatter: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for child in id.children(&dom.dom) {
        fmt_node(dom, child, formatter, depth + 1)?;
    }
    Ok(())
}

impl fmt::Debug for DOM {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(formatter, "DOM (default view: {})", self.default_view)?;
        fmt_node(self, self.root, formatter, 0)
    }
}
