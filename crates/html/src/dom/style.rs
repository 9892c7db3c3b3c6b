//! Style reads against the document: the inline block and computed values.

use super::{DOM, DOMNode, NodeKind};
use anyhow::{Result, anyhow};
use css_cascade::{depends_on_parent, inherit_property, initial_value, serialize_overflow};
use css_properties::StyleKey;
use indextree::{Node, NodeId};

impl DOM {
    /// `element.style[key]`: the inline declaration, `""` when unset.
    ///
    /// # Errors
    /// Returns an error if `node` has been removed or is not an element.
    pub fn inline_value(&self, node: NodeId, key: StyleKey) -> Result<String> {
        Ok(self.element(node)?.inline.get(key))
    }

    /// `getComputedStyle(element)[key]` through the document's default view.
    ///
    /// `Ok(None)` means there is no default view. Elements not connected to the
    /// document compute to `""`.
    ///
    /// # Errors
    /// Returns an error if `node` has been removed or is not an element.
    pub fn computed_value(&self, node: NodeId, key: StyleKey) -> Result<Option<String>> {
        if !self.default_view {
            log::trace!("computed {key} on {node:?}: document has no default view");
            return Ok(None);
        }
        self.element(node)?;
        if !self.is_connected(node) {
            return Ok(Some(String::new()));
        }
        if key == StyleKey::Overflow {
            let horizontal = self.computed_longhand(node, StyleKey::OverflowX);
            let vertical = self.computed_longhand(node, StyleKey::OverflowY);
            return Ok(Some(serialize_overflow(&horizontal, &vertical)));
        }
        Ok(Some(self.computed_longhand(node, key)))
    }

    /// Cascade one longhand: inline, then style sheet, then inherited, then initial.
    ///
    /// Walks up only while the value depends on the parent, then resolves the
    /// collected declarations top-down.
    fn computed_longhand(&self, node: NodeId, key: StyleKey) -> String {
        let mut pending: Vec<Option<&str>> = Vec::new();
        let mut current = Some(node);
        let mut inherited: Option<String> = None;
        while let Some(id) = current {
            let declared = self.declared_longhand(id, key);
            if !depends_on_parent(key, declared) {
                inherited = Some(inherit_property(key, declared, None));
                break;
            }
            pending.push(declared);
            current = self
                .parent(id)
                .filter(|parent| self.element(*parent).is_ok());
        }
        pending
            .into_iter()
            .rev()
            .fold(inherited, |parent_value, declared| {
                Some(inherit_property(key, declared, parent_value.as_deref()))
            })
            .unwrap_or_else(|| initial_value(key).to_owned())
    }

    /// The winning declaration for `key` on one element, inline before style sheet.
    fn declared_longhand(&self, node: NodeId, key: StyleKey) -> Option<&str> {
        let data = self.dom.get(node).map(Node::get)?;
        data.inline
            .declared(key)
            .or_else(|| data.sheet.get(&key).map(String::as_str))
    }

    fn element(&self, node: NodeId) -> Result<&DOMNode> {
        let entry = self.node(node)?;
        match entry.kind {
            NodeKind::Element { .. } => Ok(entry),
            NodeKind::Document | NodeKind::Text { .. } => {
                Err(anyhow!("node {node:?} is not an element"))
            }
        }
    }
}
