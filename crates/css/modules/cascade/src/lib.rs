//! CSS Cascading and Inheritance Level 4 — inheritance and initial values.
//! Spec: <https://www.w3.org/TR/css-cascade-4/>
//!
//! Also holds the `overflow` shorthand helpers, since computed-value
//! serialization of `overflow` is derived from its two longhands.
//! Spec: <https://www.w3.org/TR/css-overflow-3/#overflow-control>

#![forbid(unsafe_code)]

use css_properties::StyleKey;

/// Keywords accepted by `overflow-x` / `overflow-y`.
/// Spec: <https://www.w3.org/TR/css-overflow-3/#overflow-properties>
pub const OVERFLOW_KEYWORDS: &[&str] = &["visible", "hidden", "clip", "scroll", "auto", "overlay"];

/// Whether a property is inherited by default.
/// Spec: Section 7 — Inheritance
pub const fn is_inherited(key: StyleKey) -> bool {
    matches!(
        key,
        StyleKey::Color
            | StyleKey::FontSize
            | StyleKey::FontFamily
            | StyleKey::LineHeight
            | StyleKey::Visibility
            | StyleKey::WhiteSpace
            | StyleKey::PointerEvents
            | StyleKey::WebkitOverflowScrolling
    )
}

/// Initial value of a property in its serialized computed form.
/// Spec: Section 8 — Initial values
pub const fn initial_value(key: StyleKey) -> &'static str {
    match key {
        StyleKey::Overflow | StyleKey::OverflowX | StyleKey::OverflowY => "visible",
        StyleKey::OverscrollBehavior
        | StyleKey::ScrollBehavior
        | StyleKey::WebkitOverflowScrolling
        | StyleKey::Top
        | StyleKey::Right
        | StyleKey::Bottom
        | StyleKey::Left
        | StyleKey::Width
        | StyleKey::Height
        | StyleKey::MinWidth
        | StyleKey::MinHeight
        | StyleKey::ZIndex
        | StyleKey::PointerEvents => "auto",
        StyleKey::Float | StyleKey::Clear | StyleKey::MaxWidth | StyleKey::MaxHeight | StyleKey::Transform => {
            "none"
        }
        StyleKey::Display => "inline",
        StyleKey::Position => "static",
        StyleKey::Visibility => "visible",
        StyleKey::Opacity => "1",
        StyleKey::MarginTop
        | StyleKey::MarginRight
        | StyleKey::MarginBottom
        | StyleKey::MarginLeft
        | StyleKey::PaddingTop
        | StyleKey::PaddingRight
        | StyleKey::PaddingBottom
        | StyleKey::PaddingLeft => "0px",
        StyleKey::BoxSizing => "content-box",
        StyleKey::Color => "rgb(0, 0, 0)",
        StyleKey::BackgroundColor => "rgba(0, 0, 0, 0)",
        StyleKey::FontSize => "16px",
        StyleKey::FontFamily => "sans-serif",
        StyleKey::LineHeight | StyleKey::WhiteSpace => "normal",
    }
}

/// Resolve a property's computed value from its declared value.
///
/// Returns the declared value, else the parent's value for inherited
/// properties, else the initial value.
/// Spec: Section 7 — Inheritance; Section 8 — Initial values
pub fn inherit_property(
    key: StyleKey,
    declared_value: Option<&str>,
    parent_computed_value: Option<&str>,
) -> String {
    if let Some(value) = declared_value {
        return resolve_wide_keyword(key, value, parent_computed_value);
    }
    if is_inherited(key)
        && let Some(parent) = parent_computed_value
    {
        return parent.to_owned();
    }
    initial_value(key).to_owned()
}

/// Whether resolving `declared_value` needs the parent's computed value.
///
/// True for an inherited property with no declaration, for `inherit`, and for
/// `unset` on an inherited property.
/// Spec: Section 7 — Inheritance; Section 7.3 — Explicit defaulting
pub fn depends_on_parent(key: StyleKey, declared_value: Option<&str>) -> bool {
    match declared_value {
        None => is_inherited(key),
        Some(value) => {
            value.eq_ignore_ascii_case("inherit")
                || (value.eq_ignore_ascii_case("unset") && is_inherited(key))
        }
    }
}

/// Apply CSS-wide keywords (`initial`, `inherit`, `unset`) to a declared value.
/// Spec: Section 7.3 — Explicit defaulting
fn resolve_wide_keyword(key: StyleKey, value: &str, parent_computed_value: Option<&str>) -> String {
    let parent_or_initial = || parent_computed_value.unwrap_or_else(|| initial_value(key)).to_owned();
    if value.eq_ignore_ascii_case("initial") {
        initial_value(key).to_owned()
    } else if value.eq_ignore_ascii_case("inherit") {
        parent_or_initial()
    } else if value.eq_ignore_ascii_case("unset") {
        if is_inherited(key) {
            parent_or_initial()
        } else {
            initial_value(key).to_owned()
        }
    } else {
        value.to_owned()
    }
}

/// Split an `overflow` shorthand value into `(overflow-x, overflow-y)`.
///
/// One keyword sets both axes; two keywords set x then y. Anything else
/// (unknown keywords, more than two tokens) is rejected.
/// Spec: <https://www.w3.org/TR/css-overflow-3/#propdef-overflow>
pub fn expand_overflow(value: &str) -> Option<(String, String)> {
    let mut tokens = value.split_ascii_whitespace();
    let first = tokens.next()?;
    let second = tokens.next();
    if tokens.next().is_some() {
        return None;
    }
    let horizontal = overflow_keyword(first)?;
    let vertical = match second {
        Some(token) => overflow_keyword(token)?,
        None => horizontal.clone(),
    };
    Some((horizontal, vertical))
}

/// Serialize the `overflow` shorthand from its longhands.
/// Spec: <https://drafts.csswg.org/cssom/#serialize-a-css-value>
pub fn serialize_overflow(horizontal: &str, vertical: &str) -> String {
    if horizontal == vertical {
        horizontal.to_owned()
    } else {
        format!("{horizontal} {vertical}")
    }
}

/// Lowercased overflow keyword, or `None` when the token is not one.
fn overflow_keyword(token: &str) -> Option<String> {
    let lowered = token.to_ascii_lowercase();
    OVERFLOW_KEYWORDS
        .contains(&lowered.as_str())
        .then_some(lowered)
}
