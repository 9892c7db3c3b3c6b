use crate::host::StyleHost;
use crate::style::effective_style;
use css_properties::StyleKey;

/// Substrings of an overflow value that make an element scroll.
///
/// Matched by containment so two-value serializations like `auto hidden` count.
pub const SCROLL_KEYWORDS: [&str; 3] = ["scroll", "auto", "overlay"];

/// Which overflow property to inspect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The `overflow` shorthand.
    #[default]
    Unspecified,
    /// `overflow-y`.
    Vertical,
    /// `overflow-x`.
    Horizontal,
}

impl Axis {
    pub const fn overflow_key(self) -> StyleKey {
        match self {
            Self::Unspecified => StyleKey::Overflow,
            Self::Vertical => StyleKey::OverflowY,
            Self::Horizontal => StyleKey::OverflowX,
        }
    }
}

/// `None` is unspecified, `Some(true)` vertical, `Some(false)` horizontal.
impl From<Option<bool>> for Axis {
    fn from(vertical: Option<bool>) -> Self {
        match vertical {
            None => Self::Unspecified,
            Some(true) => Self::Vertical,
            Some(false) => Self::Horizontal,
        }
    }
}

impl From<bool> for Axis {
    fn from(vertical: bool) -> Self {
        Self::from(Some(vertical))
    }
}

/// Where scrolling for an element happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollContainer<N> {
    /// The viewport scrolls.
    Window,
    /// This element scrolls.
    Element(N),
}

impl<N> ScrollContainer<N> {
    pub const fn is_window(&self) -> bool {
        matches!(self, Self::Window)
    }

    pub fn element(self) -> Option<N> {
        match self {
            Self::Window => None,
            Self::Element(node) => Some(node),
        }
    }
}

/// Whether `element`'s overflow on `axis` lets its content scroll.
pub fn is_scroll<H: StyleHost + ?Sized>(host: &H, element: H::Node, axis: impl Into<Axis>) -> bool {
    let axis: Axis = axis.into();
    let overflow = effective_style(host, element, axis.overflow_key());
    SCROLL_KEYWORDS
        .iter()
        .any(|keyword| overflow.contains(*keyword))
}

/// Nearest scroll container of `element` on `axis`, `element` included.
///
/// Reaching the root boundary yields [`ScrollContainer::Window`]. `None` means
/// the parent chain ran out first, as for a detached subtree.
pub fn get_scroll_container<H: StyleHost + ?Sized>(
    host: &H,
    element: H::Node,
    axis: impl Into<Axis>,
) -> Option<ScrollContainer<H::Node>> {
    let axis: Axis = axis.into();
    let mut current = Some(element);
    while let Some(node) = current {
        if host.is_root_boundary(node) {
            return Some(ScrollContainer::Window);
        }
        if is_scroll(host, node, axis) {
            log::trace!("scroll container for {element:?} on {axis:?}: {node:?}");
            return Some(ScrollContainer::Element(node));
        }
        current = host.parent_node(node);
    }
    log::debug!("no scroll container for {element:?}: parent chain ended before the document");
    None
}
