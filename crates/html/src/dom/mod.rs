use anyhow::{Result, anyhow};
use css_properties::StyleKey;
use css_style_attr::InlineStyle;
use indextree::{Arena, NodeId};
use smallvec::SmallVec;
use std::collections::HashMap;

mod printing;
mod style;

#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    #[default]
    Document,
    Element { tag: String },
    Text { text: String },
}

#[derive(Debug, Clone, Default)]
pub struct DOMNode {
    pub kind: NodeKind,
    pub attrs: SmallVec<(String, String), 4>,
    /// Declarations from the `style` attribute.
    pub inline: InlineStyle,
    /// Declarations that won the author style sheet cascade for this element.
    pub sheet: HashMap<StyleKey, String>,
    /// Whether the document is an inclusive ancestor. Kept current by `append_child`.
    connected: bool,
}

impl DOMNode {
    fn element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
            },
            ..Self::default()
        }
    }

    pub const fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }
}

/// A single document. Nodes live in an arena and are addressed by `NodeId`.
///
/// Created nodes start detached; they only take part in style resolution once
/// appended under the document.
pub struct DOM {
    dom: Arena<DOMNode>,
    root: NodeId,
    default_view: bool,
}

impl Default for DOM {
    fn default() -> Self {
        Self::new()
    }
}

impl DOM {
    /// A document attached to a browsing context (it has a default view).
    pub fn new() -> Self {
        let mut dom = Arena::new();
        Self {
            root: dom.new_node(DOMNode {
                connected: true,
                ..DOMNode::default()
            }),
            dom,
            default_view: true,
        }
    }

    /// A document with no default view, so computed style is unavailable.
    pub fn without_default_view() -> Self {
        Self {
            default_view: false,
            ..Self::new()
        }
    }

    pub const fn has_default_view(&self) -> bool {
        self.default_view
    }

    /// The document node.
    pub const fn document(&self) -> NodeId {
        self.root
    }

    /// The first element child of the document (`<html>` in a parsed page).
    pub fn document_element(&self) -> Option<NodeId> {
        self.root
            .children(&self.dom)
            .find(|child| self.dom.get(*child).is_some_and(|node| node.get().is_element()))
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.dom.new_node(DOMNode::element(tag))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.dom.new_node(DOMNode {
            kind: NodeKind::Text {
                text: text.to_owned(),
            },
            ..DOMNode::default()
        })
    }

    /// Append `child` as the last child of `parent`, detaching it from any previous parent.
    ///
    /// # Errors
    /// Returns an error if either node has been removed, `parent` is a text node,
    /// or the append would create a cycle.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if matches!(self.node(parent)?.kind, NodeKind::Text { .. }) {
            return Err(anyhow!("cannot append {child:?} to text node {parent:?}"));
        }
        self.node(child)?;
        // A leaf can only contain `parent` if it is `parent`.
        let has_children = self.dom.get(child).is_some_and(|entry| entry.first_child().is_some());
        if child == parent || (has_children && parent.ancestors(&self.dom).any(|ancestor| ancestor == child)) {
            return Err(anyhow!("cannot append {child:?} inside its own subtree"));
        }
        child.detach(&mut self.dom);
        parent
            .checked_append(child, &mut self.dom)
            .map_err(|err| anyhow!("cannot append {child:?} to {parent:?}: {err}"))?;
        let connected = self.node(parent)?.connected;
        let subtree: Vec<NodeId> = child.descendants(&self.dom).collect();
        for id in subtree {
            if let Some(entry) = self.dom.get_mut(id) {
                entry.get_mut().connected = connected;
            }
        }
        Ok(())
    }

    /// Create an element and append it to `parent`.
    ///
    /// # Errors
    /// Returns an error if `parent` cannot take children.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId> {
        let child = self.create_element(tag);
        self.append_child(parent, child)?;
        Ok(child)
    }

    /// Create a text node and append it to `parent`.
    ///
    /// # Errors
    /// Returns an error if `parent` cannot take children.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId> {
        let child = self.create_text(text);
        self.append_child(parent, child)?;
        Ok(child)
    }

    /// Remove a node and its subtree from the arena. Later reads of these ids fail.
    ///
    /// # Errors
    /// Returns an error for the document node or an already removed node.
    pub fn remove(&mut self, node: NodeId) -> Result<()> {
        if node == self.root {
            return Err(anyhow!("the document node cannot be removed"));
        }
        self.node(node)?;
        node.remove_subtree(&mut self.dom);
        Ok(())
    }

    /// Parent of a live node.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.dom
            .get(node)
            .filter(|entry| !entry.is_removed())
            .and_then(|entry| entry.parent())
    }

    /// Whether the node is the document or has it as an ancestor.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.node(node).is_ok_and(|entry| entry.connected)
    }

    /// Borrow a live node.
    ///
    /// # Errors
    /// Returns an error if the id is unknown or the node has been removed.
    pub fn node(&self, node: NodeId) -> Result<&DOMNode> {
        match self.dom.get(node) {
            Some(entry) if !entry.is_removed() => Ok(entry.get()),
            Some(_) => Err(anyhow!("node {node:?} has been removed")),
            None => Err(anyhow!("node {node:?} does not belong to this document")),
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut DOMNode> {
        match self.dom.get_mut(node) {
            Some(entry) if !entry.is_removed() && entry.get().is_element() => Ok(entry.get_mut()),
            Some(entry) if entry.is_removed() => Err(anyhow!("node {node:?} has been removed")),
            Some(_) => Err(anyhow!("node {node:?} is not an element")),
            None => Err(anyhow!("node {node:?} does not belong to this document")),
        }
    }

    /// Set an attribute. Setting `style` replaces the inline declaration block.
    ///
    /// # Errors
    /// Returns an error if `node` is not a live element.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        let entry = self.element_mut(node)?;
        let name = name.to_ascii_lowercase();
        if name == "style" {
            entry.inline = InlineStyle::from_attribute(value);
        }
        if let Some(slot) = entry.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            value.clone_into(&mut slot.1);
        } else {
            entry.attrs.push((name, value.to_owned()));
        }
        Ok(())
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        let entry = self.node(node).ok()?;
        entry
            .attrs
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Declare an inline property (`element.style[key] = value`) and keep the
    /// `style` attribute in sync.
    ///
    /// # Errors
    /// Returns an error if `node` is not a live element.
    pub fn set_inline_property(&mut self, node: NodeId, key: StyleKey, value: &str) -> Result<()> {
        let entry = self.element_mut(node)?;
        entry.inline.set(key, value);
        let text = entry.inline.css_text();
        if let Some(slot) = entry.attrs.iter_mut().find(|(existing, _)| existing == "style") {
            slot.1 = text;
        } else {
            entry.attrs.push(("style".to_owned(), text));
        }
        Ok(())
    }

    /// Record the author style sheet value of a property for this element.
    ///
    /// The `overflow` shorthand is stored as its two longhands.
    ///
    /// # Errors
    /// Returns an error if `node` is not a live element or an `overflow`
    /// value does not parse.
    pub fn set_sheet_property(&mut self, node: NodeId, key: StyleKey, value: &str) -> Result<()> {
        let entry = self.element_mut(node)?;
        if key == StyleKey::Overflow {
            let (horizontal, vertical) = css_cascade::expand_overflow(value)
                .ok_or_else(|| anyhow!("invalid overflow value {value:?}"))?;
            entry.sheet.insert(StyleKey::OverflowX, horizontal);
            entry.sheet.insert(StyleKey::OverflowY, vertical);
        } else {
            entry.sheet.insert(key, value.trim().to_owned());
        }
        Ok(())
    }
}
