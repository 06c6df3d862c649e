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
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_pick: ColorSpec,
    pub footer_edit: ColorSpec,
    pub footer_delete: ColorSpec,
    pub footer_theme: ColorSpec,
    pub footer_debug: ColorSpec,
    pub footer_normal: ColorSpec,
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

impl Theme {
    /// Get the default theme (Tokyo Night).
    ///
    pub fn default() -> Self {
        Self::tokyo_night()
    }

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
            accent: ColorSpec {
                r: 255,
                g: 159,
                b: 196,
            }, // Magenta
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
            text_secondary: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            }, // Foreground (brighter)
            text_muted: ColorSpec {
                r: 117,
                g: 121,
                b: 148,
            }, // Comment
            background: ColorSpec {
                r: 26,
                g: 27,
                b: 38,
            }, // Background
            surface: ColorSpec {
                r: 36,
                g: 40,
                b: 59,
            }, // Selection
            success: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
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
            info: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
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
            footer_pick: ColorSpec {
                r: 125,
                g: 207,
                b: 255,
            }, // Blue
            footer_edit: ColorSpec {
                r: 255,
                g: 202,
                b: 40,
            }, // Yellow
            footer_delete: ColorSpec {
                r: 247,
                g: 118,
                b: 142,
            }, // Red
            footer_theme: ColorSpec {
                r: 255,
                g: 159,
                b: 196,
            }, // Magenta
            footer_debug: ColorSpec {
                r: 158,
                g: 206,
                b: 106,
            }, // Green
            footer_normal: ColorSpec { r: 0, g: 0, b: 0 }, // Black
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
            accent: ColorSpec {
                r: 255,
                g: 109,
                b: 146,
            }, // Pink
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
            text_secondary: ColorSpec {
                r: 121,
                g: 117,
                b: 147,
            }, // Subtext
            text_muted: ColorSpec {
                r: 152,
                g: 147,
                b: 165,
            }, // Muted
            background: ColorSpec {
                r: 250,
                g: 244,
                b: 237,
            }, // Base
            surface: ColorSpec {
                r: 255,
                g: 250,
                b: 243,
            }, // Surface
            success: ColorSpec {
                r: 59,
                g: 247,
                b: 209,
            }, // Pine
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
            info: ColorSpec {
                r: 61,
                g: 174,
                b: 233,
            }, // Foam
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
            footer_pick: ColorSpec {
                r: 61,
                g: 174,
                b: 233,
            }, // Foam
            footer_edit: ColorSpec {
                r: 255,
                g: 210,
                b: 0,
            }, // Gold
            footer_delete: ColorSpec {
                r: 235,
                g: 111,
                b: 146,
            }, // Love
            footer_theme: ColorSpec {
                r: 161,
                g: 119,
                b: 255,
            }, // Purple
            footer_debug: ColorSpec {
                r: 59,
                g: 247,
                b: 209,
            }, // Pine
            footer_normal: ColorSpec { r: 0, g: 0, b: 0 }, // Black
        }
    }

    /// Gruvbox Dark theme.
    ///
    pub fn gruvbox_dark() -> Self {
        Theme {
            name: "gruvbox-dark".to_string(),
            primary: ColorSpec {
                r: 131,
                g: 165,
                b: 152,
            }, // Blue
            secondary: ColorSpec {
                r: 184,
                g: 187,
                b: 38,
            }, // Green
            accent: ColorSpec {
                r: 211,
                g: 134,
                b: 155,
            }, // Purple
            banner: ColorSpec {
                r: 254,
                g: 128,
                b: 25,
            }, // Orange
            text: ColorSpec {
                r: 235,
                g: 219,
                b: 178,
            }, // Foreground
            text_secondary: ColorSpec {
                r: 213,
                g: 196,
                b: 161,
            }, // Foreground (dimmer)
            text_muted: ColorSpec {
                r: 146,
                g: 131,
                b: 116,
            }, // Gray
            background: ColorSpec {
                r: 40,
                g: 40,
                b: 40,
            }, // Background
            surface: ColorSpec {
                r: 60,
                g: 56,
                b: 54,
            }, // Background (lighter)
            success: ColorSpec {
                r: 184,
                g: 187,
                b: 38,
            }, // Green
            warning: ColorSpec {
                r: 250,
                g: 189,
                b: 47,
            }, // Yellow
            error: ColorSpec {
                r: 251,
                g: 73,
                b: 52,
            }, // Red
            info: ColorSpec {
                r: 131,
                g: 165,
                b: 152,
            }, // Blue
            border_active: ColorSpec {
                r: 131,
                g: 165,
                b: 152,
            }, // Blue
            border_normal: ColorSpec {
                r: 146,
                g: 131,
                b: 116,
            }, // Gray
            highlight_bg: ColorSpec {
                r: 250,
                g: 189,
                b: 47,
            }, // Yellow
            highlight_fg: ColorSpec {
                r: 40,
                g: 40,
                b: 40,
            }, // Background
            footer_pick: ColorSpec {
                r: 131,
                g: 165,
                b: 152,
            }, // Blue
            footer_edit: ColorSpec {
                r: 250,
                g: 189,
                b: 47,
            }, // Yellow
            footer_delete: ColorSpec {
                r: 251,
                g: 73,
                b: 52,
            }, // Red
            footer_theme: ColorSpec {
                r: 211,
                g: 134,
                b: 155,
            }, // Purple
            footer_debug: ColorSpec {
                r: 184,
                g: 187,
                b: 38,
            }, // Green
            footer_normal: ColorSpec { r: 0, g: 0, b: 0 }, // Black
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "gruvbox-dark" => Some(Self::gruvbox_dark()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine-dawn".to_string(),
            "gruvbox-dark".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_resolves_every_available_theme() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name);
            assert!(theme.is_some());
            assert_eq!(theme.map(|theme| theme.name), Some(name));
        }
    }

    #[test]
    fn from_name_rejects_unknown_names() {
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn default_theme_is_tokyo_night() {
        assert_eq!(Theme::default().name, "tokyo-night");
    }
}
