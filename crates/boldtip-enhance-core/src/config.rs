//! Static widget configuration.
//!
//! The enhancement layer exposes no runtime reconfiguration API; these
//! types exist so the recognized options are spelled once, typed, and
//! serialize to the exact wire shapes the widget libraries expect. The
//! toolbar model serializes to Quill's nested-array `toolbar` option, the
//! date picker model to flatpickr's options object.

use serde::ser::Serializer;
use serde::Serialize;

// === Toolbar ===

/// One toolbar entry inside a group.
///
/// Serializes to the widget's heterogeneous wire forms: plain buttons are
/// bare strings, parameterized controls are single-key objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ToolbarItem {
    /// A simple toggle/action button, e.g. `"bold"` or `"code-block"`.
    Button(ToolbarButton),
    /// The header-level dropdown, e.g. `{"header": [1, 2, 3, false]}`.
    Header {
        /// Offered levels, in menu order.
        header: Vec<HeaderOption>,
    },
    /// A list toggle, e.g. `{"list": "ordered"}`.
    List {
        /// Which list style the button applies.
        list: ListKind,
    },
    /// A text-direction toggle, e.g. `{"direction": "rtl"}`.
    Direction {
        /// The direction the button switches to.
        direction: TextDirection,
    },
}

/// Plain toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolbarButton {
    Bold,
    Italic,
    Underline,
    Image,
    Link,
    Video,
    Blockquote,
    CodeBlock,
    /// The remove-formatting button.
    Clean,
}

/// One entry of the header-level dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderOption {
    /// A heading level, 1 through 6.
    Level(u8),
    /// Normal text; the widget expects literal `false` on the wire.
    Off,
}

impl Serialize for HeaderOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HeaderOption::Level(level) => serializer.serialize_u8(*level),
            HeaderOption::Off => serializer.serialize_bool(false),
        }
    }
}

/// List styles offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Ordered,
    Bullet,
}

/// Text directions offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextDirection {
    #[serde(rename = "rtl")]
    RightToLeft,
}

/// The full toolbar layout: groups of items, rendered with separators
/// between groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToolbarConfig(pub Vec<Vec<ToolbarItem>>);

impl Default for ToolbarConfig {
    /// The boldtip authoring toolbar: headers, inline styles, lists, media,
    /// block elements, RTL toggle, and clear-formatting.
    fn default() -> Self {
        use HeaderOption::{Level, Off};
        use ToolbarButton::*;

        ToolbarConfig(vec![
            vec![ToolbarItem::Header {
                header: vec![Level(1), Level(2), Level(3), Level(4), Level(5), Level(6), Off],
            }],
            vec![
                ToolbarItem::Button(Bold),
                ToolbarItem::Button(Italic),
                ToolbarItem::Button(Underline),
            ],
            vec![
                ToolbarItem::List {
                    list: ListKind::Ordered,
                },
                ToolbarItem::List {
                    list: ListKind::Bullet,
                },
            ],
            vec![
                ToolbarItem::Button(Image),
                ToolbarItem::Button(Link),
                ToolbarItem::Button(Video),
            ],
            vec![
                ToolbarItem::Button(Blockquote),
                ToolbarItem::Button(CodeBlock),
            ],
            vec![ToolbarItem::Direction {
                direction: TextDirection::RightToLeft,
            }],
            vec![ToolbarItem::Button(Clean)],
        ])
    }
}

// === Keyboard ===

/// A key binding overridden to a pass-through handler, leaving the
/// browser's native behavior intact.
///
/// The handler itself is a JS function and is materialized at the browser
/// boundary; this type only carries the binding's name and key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPassthrough {
    /// Binding name in the widget's keyboard module.
    pub name: &'static str,
    /// DOM key code the binding matches.
    pub key: u32,
}

impl KeyPassthrough {
    /// Tab stays a focus-navigation key instead of indenting.
    pub const TAB: KeyPassthrough = KeyPassthrough { name: "tab", key: 9 };
}

/// Keyboard module overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardConfig {
    /// Bindings forced to pass through to the browser.
    pub passthrough: Vec<KeyPassthrough>,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            passthrough: vec![KeyPassthrough::TAB],
        }
    }
}

// === Editor ===

/// Visual themes the widget ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Snow,
    Bubble,
}

impl Theme {
    /// The theme name on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Snow => "snow",
            Theme::Bubble => "bubble",
        }
    }
}

/// Everything passed to the rich-text widget constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Toolbar layout.
    pub toolbar: ToolbarConfig,
    /// Keyboard overrides.
    pub keyboard: KeyboardConfig,
    /// Visual theme.
    pub theme: Theme,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            toolbar: ToolbarConfig::default(),
            keyboard: KeyboardConfig::default(),
            theme: Theme::Snow,
        }
    }
}

// === Date picker ===

/// Options for the calendar/time-picker widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePickerConfig {
    /// Offer a time component alongside the date.
    pub enable_time: bool,
    /// Wire format of the value written into the input. `"Z"` is the
    /// widget's ISO-8601 token.
    pub date_format: String,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            enable_time: true,
            date_format: "Z".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_toolbar_serializes_to_widget_wire_shape() {
        let value = serde_json::to_value(ToolbarConfig::default()).unwrap();
        assert_eq!(
            value,
            json!([
                [{ "header": [1, 2, 3, 4, 5, 6, false] }],
                ["bold", "italic", "underline"],
                [{ "list": "ordered" }, { "list": "bullet" }],
                ["image", "link", "video"],
                ["blockquote", "code-block"],
                [{ "direction": "rtl" }],
                ["clean"]
            ])
        );
    }

    #[test]
    fn test_header_off_serializes_as_false() {
        let value = serde_json::to_value(HeaderOption::Off).unwrap();
        assert_eq!(value, json!(false));
    }

    #[test]
    fn test_date_picker_serializes_camel_case() {
        let value = serde_json::to_value(DatePickerConfig::default()).unwrap();
        assert_eq!(value, json!({ "enableTime": true, "dateFormat": "Z" }));
    }

    #[test]
    fn test_default_keyboard_passes_tab_through() {
        let config = KeyboardConfig::default();
        assert_eq!(config.passthrough, vec![KeyPassthrough::TAB]);
        assert_eq!(KeyPassthrough::TAB.key, 9);
    }

    #[test]
    fn test_theme_names_match_wire() {
        assert_eq!(Theme::Snow.as_str(), "snow");
        assert_eq!(serde_json::to_value(Theme::Snow).unwrap(), json!("snow"));
    }
}
