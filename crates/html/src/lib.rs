#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]
#![allow(
    clippy::upper_case_acronyms,
    reason = "DOM is the established name for the document tree"
)]

pub mod dom;

pub use dom::{DOM, DOMNode, NodeKind};
pub use indextree::NodeId;
