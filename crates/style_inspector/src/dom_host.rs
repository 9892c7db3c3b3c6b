//! `StyleHost` for the in-memory document.

use crate::host::StyleHost;
use anyhow::Result;
use css_properties::StyleKey;
use html::{DOM, NodeId};

impl StyleHost for DOM {
    type Node = NodeId;

    fn parent_node(&self, node: NodeId) -> Option<NodeId> {
        self.parent(node)
    }

    fn is_root_boundary(&self, node: NodeId) -> bool {
        node == self.document() || self.document_element() == Some(node)
    }

    fn inline_style(&self, node: NodeId, key: StyleKey) -> Result<String> {
        self.inline_value(node, key)
    }

    fn computed_style(&self, node: NodeId, key: StyleKey) -> Result<Option<String>> {
        self.computed_value(node, key)
    }
}
