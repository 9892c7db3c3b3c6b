//! CSS property names — the table of properties the style inspector can read.
//! Spec: <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-camel-cased-attribute>
//!
//! Each property is known by two spellings: the hyphenated CSS name used in
//! style sheets and `style` attributes, and the camel-cased attribute name used
//! by the CSSOM. The mapping is an explicit table rather than a string
//! transform, so `float` can map to `cssFloat`.

#![forbid(unsafe_code)]

use core::fmt;

macro_rules! style_keys {
    ($($variant:ident => $css:literal, $script:literal;)+) => {
        /// A supported CSS property.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StyleKey {
            $(
                #[doc = concat!("`", $css, "`")]
                $variant,
            )+
        }

        impl StyleKey {
            /// Every property in table order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Hyphenated name as written in CSS source.
            pub const fn css_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $css,)+
                }
            }

            /// Camel-cased CSSOM attribute name.
            pub const fn script_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $script,)+
                }
            }
        }
    };
}

style_keys! {
    Overflow => "overflow", "overflow";
    OverflowX => "overflow-x", "overflowX";
    OverflowY => "overflow-y", "overflowY";
    OverscrollBehavior => "overscroll-behavior", "overscrollBehavior";
    ScrollBehavior => "scroll-behavior", "scrollBehavior";
    WebkitOverflowScrolling => "-webkit-overflow-scrolling", "WebkitOverflowScrolling";
    Float => "float", "cssFloat";
    Clear => "clear", "clear";
    Display => "display", "display";
    Position => "position", "position";
    Visibility => "visibility", "visibility";
    Opacity => "opacity", "opacity";
    ZIndex => "z-index", "zIndex";
    Top => "top", "top";
    Right => "right", "right";
    Bottom => "bottom", "bottom";
    Left => "left", "left";
    Width => "width", "width";
    Height => "height", "height";
    MinWidth => "min-width", "minWidth";
    MinHeight => "min-height", "minHeight";
    MaxWidth => "max-width", "maxWidth";
    MaxHeight => "max-height", "maxHeight";
    MarginTop => "margin-top", "marginTop";
    MarginRight => "margin-right", "marginRight";
    MarginBottom => "margin-bottom", "marginBottom";
    MarginLeft => "margin-left", "marginLeft";
    PaddingTop => "padding-top", "paddingTop";
    PaddingRight => "padding-right", "paddingRight";
    PaddingBottom => "padding-bottom", "paddingBottom";
    PaddingLeft => "padding-left", "paddingLeft";
    BoxSizing => "box-sizing", "boxSizing";
    Transform => "transform", "transform";
    PointerEvents => "pointer-events", "pointerEvents";
    Color => "color", "color";
    BackgroundColor => "background-color", "backgroundColor";
    FontSize => "font-size", "fontSize";
    FontFamily => "font-family", "fontFamily";
    LineHeight => "line-height", "lineHeight";
    WhiteSpace => "white-space", "whiteSpace";
}

/// Extra hyphenated spellings. `css-float` is the dashed form of `cssFloat`.
const ALIASES: &[(&str, StyleKey)] = &[("css-float", StyleKey::Float)];

impl StyleKey {
    /// Resolve a property name written either way.
    ///
    /// Hyphenated names match ASCII case-insensitively, as CSS property names
    /// do. Camel-cased names must match exactly, as CSSOM attributes do.
    /// Surrounding whitespace is part of the name, so `" overflow "` does not
    /// resolve. Returns `None` for names outside the table.
    pub fn parse(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        let found = Self::ALL
            .iter()
            .copied()
            .find(|key| key.css_name().eq_ignore_ascii_case(name) || key.script_name() == name)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                    .map(|(_, key)| *key)
            });
        if found.is_none() {
            log::trace!("unknown style property name {name:?}");
        }
        found
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.css_name())
    }
}

#[cfg(test)]
mod tests {
    use super::StyleKey;

    /// Dash-to-camel conversion as CSSOM defines it, used to check the table.
    fn camelize(name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        let mut upper_next = false;
        for character in name.chars() {
            if character == '-' {
                upper_next = true;
            } else if upper_next {
                out.push(character.to_ascii_uppercase());
                upper_next = false;
            } else {
                out.push(character);
            }
        }
        out
    }

    #[test]
    fn script_names_follow_camel_case_except_float() {
        for key in StyleKey::ALL {
            if *key == StyleKey::Float {
                continue;
            }
            assert_eq!(key.script_name(), camelize(key.css_name()), "{key}");
        }
    }

    #[test]
    fn float_maps_to_css_float() {
        assert_eq!(StyleKey::Float.script_name(), "cssFloat");
        assert_eq!(StyleKey::parse("float"), Some(StyleKey::Float));
        assert_eq!(StyleKey::parse("cssFloat"), Some(StyleKey::Float));
    }

    #[test]
    fn css_names_are_unique() {
        let mut names: Vec<&str> = StyleKey::ALL.iter().map(|key| key.css_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StyleKey::ALL.len());
    }
}
