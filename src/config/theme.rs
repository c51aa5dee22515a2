//! Theme colours supplied by the host application.
//!
//! Each role carries a light and a dark variant; unset roles fall back to
//! built-in system colours.

use serde::{Deserialize, Serialize};

/// An sRGB colour, written as `#RRGGBB` in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let hex = value.strip_prefix('#').unwrap_or(&value);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid colour '{}', expected #RRGGBB", value));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Appearance the host is currently rendering in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeRole {
    /// Accent colour (buttons, vote badge).
    Primary,
    /// Card backgrounds.
    Secondary,
    /// Screen background.
    Tertiary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeColor {
    pub light: Color,
    pub dark: Color,
}

impl SchemeColor {
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> Color {
        match scheme {
            ColorScheme::Light => self.light,
            ColorScheme::Dark => self.dark,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub primary: Option<SchemeColor>,
    #[serde(default)]
    pub secondary: Option<SchemeColor>,
    #[serde(default)]
    pub tertiary: Option<SchemeColor>,
}

const SYSTEM_PRIMARY: SchemeColor =
    SchemeColor::new(Color::rgb(0x00, 0x7A, 0xFF), Color::rgb(0x0A, 0x84, 0xFF));
const SYSTEM_SECONDARY: SchemeColor =
    SchemeColor::new(Color::rgb(0xFF, 0xFF, 0xFF), Color::rgb(0x2C, 0x2C, 0x2E));
const SYSTEM_BACKGROUND: SchemeColor =
    SchemeColor::new(Color::rgb(0xF2, 0xF2, 0xF7), Color::rgb(0x00, 0x00, 0x00));

impl ThemeConfig {
    /// Colour for `role` in `scheme`, falling back to the system palette.
    pub fn resolve(&self, role: ThemeRole, scheme: ColorScheme) -> Color {
        let (custom, system) = match role {
            ThemeRole::Primary => (self.primary, SYSTEM_PRIMARY),
            ThemeRole::Secondary => (self.secondary, SYSTEM_SECONDARY),
            ThemeRole::Tertiary => (self.tertiary, SYSTEM_BACKGROUND),
        };
        custom.unwrap_or(system).for_scheme(scheme)
    }
}
