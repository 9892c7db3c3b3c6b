use crate::host::StyleHost;
use crate::scroll::{Axis, ScrollContainer, get_scroll_container, is_scroll};
use crate::style::{get_style, try_get_style};
use anyhow::Result;
use css_properties::StyleKey;

/// The free functions bound to one host.
pub struct StyleInspector<'host, H: StyleHost + ?Sized> {
    host: &'host H,
}

impl<'host, H: StyleHost + ?Sized> StyleInspector<'host, H> {
    pub const fn new(host: &'host H) -> Self {
        Self { host }
    }

    /// See [`get_scroll_container`].
    pub fn scroll_container(
        &self,
        element: H::Node,
        axis: impl Into<Axis>,
    ) -> Option<ScrollContainer<H::Node>> {
        get_scroll_container(self.host, element, axis)
    }

    /// See [`is_scroll`].
    pub fn is_scroll(&self, element: H::Node, axis: impl Into<Axis>) -> bool {
        is_scroll(self.host, element, axis)
    }

    /// See [`get_style`].
    pub fn style(&self, element: Option<H::Node>, property: &str) -> String {
        get_style(self.host, element, property)
    }

    /// See [`try_get_style`].
    ///
    /// # Errors
    /// Returns the host's error when the style cannot be read.
    pub fn try_style(&self, element: H::Node, key: StyleKey) -> Result<String> {
        try_get_style(self.host, element, key)
    }
}

impl<H: StyleHost + ?Sized> Clone for StyleInspector<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: StyleHost + ?Sized> Copy for StyleInspector<'_, H> {}
