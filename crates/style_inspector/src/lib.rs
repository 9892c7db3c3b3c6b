//! Style inspection helpers for UI components that position themselves
//! relative to scrolling content (popovers, tooltips, infinite lists).
//!
//! - [`get_scroll_container`] walks up from an element to the nearest ancestor
//!   that scrolls on an axis, or reports the window.
//! - [`is_scroll`] classifies a single element.
//! - [`get_style`] / [`try_get_style`] read the effective value of a property:
//!   the inline declaration if set, otherwise the computed value.
//!
//! All reads go through the [`StyleHost`] trait, so the helpers work over any
//! document model. With the default `html` feature, `html::DOM` is a host.

#![forbid(unsafe_code)]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]

#[cfg(feature = "html")]
mod dom_host;
mod host;
mod inspector;
mod scroll;
mod style;

pub use css_properties::StyleKey;
pub use host::StyleHost;
pub use inspector::StyleInspector;
pub use scroll::{Axis, SCROLL_KEYWORDS, ScrollContainer, get_scroll_container, is_scroll};
pub use style::{get_style, try_get_style};
