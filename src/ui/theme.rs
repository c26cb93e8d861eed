use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_menu: ColorSpec,
    pub footer_screen: ColorSpec,
    pub footer_logout: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
            secondary: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            banner: ColorSpec {
                r: 255,
                g: 159,
                b: 196,
            }, // Magenta
            text: ColorSpec {
                r: 169,
                g: 177,
                b: 214,
            }, // Foreground
            text_muted: ColorSpec {
                r: 117,
                g: 121,
                b: 148,
            }, // Comment
            warning: ColorSpec {
                r: 255,
                g: 202,
                b: 40,
            }, // Yellow
            error: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            }, // Red
            border_active: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
            border_normal: ColorSpec {
                r: 117,
                g: 121,
                b: 148,
            }, // Comment
            highlight_bg: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
            highlight_fg: ColorSpec {
                r: 26,
                g: 27,
                b: 38,
            }, // Background
            footer_menu: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
            footer_screen: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            footer_logout: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            }, // Red
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec {
                r: 189,
                g: 147,
                b: 249,
            }, // Purple
            secondary: ColorSpec {
                r: 139,
                g: 233,
                b: 253,
            }, // Cyan
            banner: ColorSpec {
                r: 255,
                g: 121,
                b: 198,
            }, // Pink
            text: ColorSpec {
                r: 248,
                g: 248,
                b: 242,
            }, // Foreground
            text_muted: ColorSpec {
                r: 98,
                g: 114,
                b: 164,
            }, // Comment
            warning: ColorSpec {
                r: 255,
                g: 184,
                b: 108,
            }, // Orange
            error: ColorSpec {
                r: 255,
                g: 85,
                b: 85,
            }, // Red
            border_active: ColorSpec {
                r: 189,
                g: 147,
                b: 249,
            }, // Purple
            border_normal: ColorSpec {
                r: 98,
                g: 114,
                b: 164,
            }, // Comment
            highlight_bg: ColorSpec {
                r: 139,
                g: 233,
                b: 253,
            }, // Cyan
            highlight_fg: ColorSpec {
                r: 40,
                g: 42,
                b: 54,
            }, // Background
            footer_menu: ColorSpec {
                r: 189,
                g: 147,
                b: 249,
            }, // Purple
            footer_screen: ColorSpec {
                r: 80,
                g: 250,
                b: 123,
            }, // Green
            footer_logout: ColorSpec {
                r: 255,
                g: 85,
                b: 85,
            }, // Red
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            }, // Purple
            secondary: ColorSpec {
                r: 59,
                g: 247,
                b: 209,
            }, // Green
            banner: ColorSpec {
                r: 255,
                g: 109,
                b: 146,
            }, // Pink
            text: ColorSpec {
                r: 88,
                g: 82,
                b: 96,
            }, // Text
            text_muted: ColorSpec {
                r: 152,
                g: 147,
                b: 165,
            }, // Muted
            warning: ColorSpec {
                r: 255,
                g: 210,
                b: 0,
            }, // Gold
            error: ColorSpec {
                r: 235,
                g: 111,
                b: 146,
            }, // Love
            border_active: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            }, // Purple
            border_normal: ColorSpec {
                r: 88,
                g: 82,
                b: 96,
            }, // Text
            highlight_bg: ColorSpec {
                r: 61,
                g: 174,
                b: 233,
            }, // Foam
            highlight_fg: ColorSpec { r: 0, g: 0, b: 0 }, // Black
            footer_menu: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            }, // Purple
            footer_screen: ColorSpec {
                r: 59,
                g: 247,
                b: 209,
            }, // Pine
            footer_logout: ColorSpec {
                r: 235,
                g: 111,
                b: 146,
            }, // Love
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "dracula".to_string(),
            "rose-pine-dawn".to_string(),
        ]
    }
}
