//! CSS Style Attributes — style="..." attribute processing.
//! Spec: <https://www.w3.org/TR/css-style-attr/>

#![forbid(unsafe_code)]

use css_cascade::{expand_overflow, serialize_overflow};
use css_properties::StyleKey;
use std::collections::HashMap;

/// A single CSS declaration parsed from a style attribute.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name normalized to ASCII lowercase as per CSS case-insensitivity.
    pub property: String,
    /// Raw value trimmed of surrounding ASCII whitespace, `!important` removed.
    pub value: String,
}

/// Parse the value of a `style` attribute into a list of declarations.
///
/// - Splits on semicolons (`;`) into declaration items.
/// - For each item, splits on the first colon (`:`) into property and value.
/// - Trims ASCII whitespace and lowercases the property name.
/// - Drops a trailing `!important`; inline declarations have no competing origin here.
/// - Skips empty or invalid items (no colon, empty property, or empty value after trimming).
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<Declaration> = Vec::new();
    for raw_item in input.split(';') {
        let item = raw_item.trim_matches(is_ascii_whitespace);
        if item.is_empty() {
            continue;
        }
        let Some((raw_prop, raw_value)) = item.split_once(':') else {
            continue;
        };
        let property_text = raw_prop.trim_matches(is_ascii_whitespace);
        let value_text = strip_important(raw_value.trim_matches(is_ascii_whitespace));
        if property_text.is_empty() || value_text.is_empty() {
            continue;
        }
        out.push(Declaration {
            property: property_text.to_ascii_lowercase(),
            value: value_text.to_owned(),
        });
    }
    out
}

/// Remove a trailing `!important` annotation.
fn strip_important(value: &str) -> &str {
    let Some(bang) = value.rfind('!') else {
        return value;
    };
    let annotation = value[bang + 1..].trim_matches(is_ascii_whitespace);
    if annotation.eq_ignore_ascii_case("important") {
        value[..bang].trim_matches(is_ascii_whitespace)
    } else {
        value
    }
}

/// ASCII whitespace per CSS Syntax (TAB, LF, FF, CR, SPACE).
///
/// Spec: <https://www.w3.org/TR/css-syntax-3/#whitespace>
const fn is_ascii_whitespace(character: char) -> bool {
    matches!(
        character,
        '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
    )
}

/// The declaration block of an element's `style` attribute.
///
/// Values are stored per longhand; the `overflow` shorthand is split on write
/// and re-serialized on read.
/// Spec: <https://drafts.csswg.org/cssom/#the-elementcssinlinestyle-mixin>
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: HashMap<StyleKey, String>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a block from a raw attribute value.
    ///
    /// Unknown properties are skipped. If a property appears multiple times,
    /// the last one wins, matching source order.
    pub fn from_attribute(input: &str) -> Self {
        let mut style = Self::new();
        for decl in parse_style_attribute(input) {
            match StyleKey::parse(&decl.property) {
                Some(key) => style.set(key, &decl.value),
                None => log::debug!("style attribute: skipping unknown property {:?}", decl.property),
            }
        }
        style
    }

    /// Value for a property, `""` when it is not declared.
    ///
    /// `overflow` reads back only when both longhands are declared.
    pub fn get(&self, key: StyleKey) -> String {
        if key == StyleKey::Overflow {
            return match (
                self.declarations.get(&StyleKey::OverflowX),
                self.declarations.get(&StyleKey::OverflowY),
            ) {
                (Some(horizontal), Some(vertical)) => serialize_overflow(horizontal, vertical),
                _ => String::new(),
            };
        }
        self.declarations.get(&key).cloned().unwrap_or_default()
    }

    /// The declared value without shorthand serialization.
    pub fn declared(&self, key: StyleKey) -> Option<&str> {
        self.declarations.get(&key).map(String::as_str)
    }

    /// Declare a property. An empty value removes the declaration.
    pub fn set(&mut self, key: StyleKey, value: &str) {
        let trimmed = value.trim_matches(is_ascii_whitespace);
        if trimmed.is_empty() {
            self.remove(key);
            return;
        }
        if key == StyleKey::Overflow {
            let Some((horizontal, vertical)) = expand_overflow(trimmed) else {
                log::debug!("style attribute: invalid overflow value {trimmed:?}");
                return;
            };
            self.declarations.insert(StyleKey::OverflowX, horizontal);
            self.declarations.insert(StyleKey::OverflowY, vertical);
            return;
        }
        self.declarations.insert(key, trimmed.to_owned());
    }

    pub fn remove(&mut self, key: StyleKey) {
        if key == StyleKey::Overflow {
            self.declarations.remove(&StyleKey::OverflowX);
            self.declarations.remove(&StyleKey::OverflowY);
        } else {
            self.declarations.remove(&key);
        }
    }

    /// Serialize back into attribute text, longhands in table order.
    /// Spec: <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-csstext>
    pub fn css_text(&self) -> String {
        let mut entries: Vec<(&StyleKey, &String)> = self.declarations.iter().collect();
        entries.sort_by_key(|(key, _)| **key);
        entries
            .into_iter()
            .map(|(key, value)| format!("{key}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
