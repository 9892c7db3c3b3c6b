use anyhow::Result;
use core::fmt::Debug;
use css_properties::StyleKey;

/// Read-only view of a document the inspector walks.
///
/// The host owns its nodes; the inspector only copies handles around and never
/// keeps one past a call.
pub trait StyleHost {
    /// Handle to a node in the host tree.
    type Node: Copy + Eq + Debug;

    /// The parent node, `None` at the top of a tree or for a detached node.
    fn parent_node(&self, node: Self::Node) -> Option<Self::Node>;

    /// Whether `node` stands for the global scroll container: the window,
    /// the document, or the document's root element.
    fn is_root_boundary(&self, node: Self::Node) -> bool;

    /// The inline style declaration for `key`, `""` when unset.
    ///
    /// # Errors
    /// Returns an error when the node's inline style cannot be read.
    fn inline_style(&self, node: Self::Node, key: StyleKey) -> Result<String>;

    /// The computed value for `key`. `Ok(None)` means the document has no
    /// default view to compute styles with.
    ///
    /// # Errors
    /// Returns an error when the node's computed style cannot be read.
    fn computed_style(&self, node: Self::Node, key: StyleKey) -> Result<Option<String>>;
}

impl<H: StyleHost + ?Sized> StyleHost for &H {
    type Node = H::Node;

    fn parent_node(&self, node: Self::Node) -> Option<Self::Node> {
        (**self).parent_node(node)
    }

    fn is_root_boundary(&self, node: Self::Node) -> bool {
        (**self).is_root_boundary(node)
    }

    fn inline_style(&self, node: Self::Node, key: StyleKey) -> Result<String> {
        (**self).inline_style(node, key)
    }

    fn computed_style(&self, node: Self::Node, key: StyleKey) -> Result<Option<String>> {
        (**self).computed_style(node, key)
    }
}
