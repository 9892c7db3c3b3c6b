use crate::host::StyleHost;
use anyhow::{Context as _, Result};
use css_properties::StyleKey;

/// Effective value of `property` on `element`, never failing.
///
/// Returns `""` when `element` is `None`, `property` is empty or not a known
/// property name. If the host fails to read the style, the inline value is
/// re-read as a best effort, and `""` is returned if that fails too. Use
/// [`try_get_style`] to see the failure instead.
pub fn get_style<H: StyleHost + ?Sized>(
    host: &H,
    element: Option<H::Node>,
    property: &str,
) -> String {
    let Some(node) = element else {
        return String::new();
    };
    if property.is_empty() {
        return String::new();
    }
    let Some(key) = StyleKey::parse(property) else {
        log::debug!("get_style: {property:?} is not a known property");
        return String::new();
    };
    effective_style(host, node, key)
}

/// Effective value of `key` on `element`: the inline declaration when it is
/// non-empty, otherwise the computed value (`""` without a default view).
///
/// # Errors
/// Returns the host's error when the inline or computed style cannot be read.
pub fn try_get_style<H: StyleHost + ?Sized>(host: &H, element: H::Node, key: StyleKey) -> Result<String> {
    let inline = host
        .inline_style(element, key)
        .with_context(|| format!("reading inline {key} of {element:?}"))?;
    if !inline.is_empty() {
        return Ok(inline);
    }
    let computed = host
        .computed_style(element, key)
        .with_context(|| format!("reading computed {key} of {element:?}"))?;
    Ok(computed.unwrap_or_default())
}

/// [`try_get_style`] with the inline fallback applied on failure.
pub(crate) fn effective_style<H: StyleHost + ?Sized>(host: &H, node: H::Node, key: StyleKey) -> String {
    match try_get_style(host, node, key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("style read failed, falling back to inline value: {err:#}");
            host.inline_style(node, key).unwrap_or_default()
        }
    }
}
