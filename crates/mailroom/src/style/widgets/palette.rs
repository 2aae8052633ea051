//! Color palette with light and dark theme support.

use iced::Color;
use mailroom_core::{RowShade, ThemePreference};

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Primary brand colors
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surface colors
    pub surface: Color,
    pub surface_elevated: Color,
    pub background: Color,
    pub background_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Accent colors
    pub accent_red: Color,
    pub accent_yellow: Color,

    // State colors
    pub selected: Color,
    pub hover: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,

    // Shadow color
    pub shadow: Color,
    pub shadow_medium: Color,
    pub backdrop: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.0, 0.48, 0.95),
            primary_light: Color::from_rgb(0.35, 0.65, 1.0),
            primary_dark: Color::from_rgb(0.0, 0.38, 0.80),

            surface: Color::WHITE,
            surface_elevated: Color::from_rgb(1.0, 1.0, 1.0),
            background: Color::from_rgb(0.98, 0.985, 0.99),
            background_secondary: Color::from_rgb(0.96, 0.965, 0.98),

            text_primary: Color::from_rgb(0.08, 0.10, 0.14),
            text_secondary: Color::from_rgb(0.42, 0.46, 0.54),
            text_muted: Color::from_rgb(0.60, 0.64, 0.70),
            text_on_primary: Color::WHITE,

            accent_red: Color::from_rgb(0.98, 0.28, 0.35),
            accent_yellow: Color::from_rgb(1.0, 0.75, 0.0),

            selected: Color::from_rgb(0.94, 0.97, 1.0),
            hover: Color::from_rgb(0.97, 0.98, 0.99),

            border_subtle: Color::from_rgb(0.92, 0.93, 0.95),
            border_medium: Color::from_rgb(0.86, 0.88, 0.91),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.04),
            shadow_medium: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.0, 1.0, 0.8), // #00FFCC
            primary_light: Color::from_rgb(0.2, 1.0, 0.85),
            primary_dark: Color::from_rgb(0.0, 0.8, 0.65),

            surface: Color::from_rgb(0.12, 0.13, 0.15),
            surface_elevated: Color::from_rgb(0.15, 0.16, 0.18),
            background: Color::from_rgb(0.08, 0.09, 0.11),
            background_secondary: Color::from_rgb(0.10, 0.11, 0.13),

            text_primary: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.65, 0.68, 0.72),
            text_muted: Color::from_rgb(0.50, 0.53, 0.58),
            text_on_primary: Color::from_rgb(0.08, 0.09, 0.11),

            accent_red: Color::from_rgb(1.0, 0.35, 0.4),
            accent_yellow: Color::from_rgb(1.0, 0.85, 0.2),

            selected: Color::from_rgb(0.10, 0.18, 0.20),
            hover: Color::from_rgb(0.14, 0.15, 0.17),

            border_subtle: Color::from_rgb(0.20, 0.21, 0.24),
            border_medium: Color::from_rgb(0.28, 0.29, 0.32),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.20),
            shadow_medium: Color::from_rgba(0.0, 0.0, 0.0, 0.30),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.55),
        }
    }

    /// Gets the palette for a theme.
    #[must_use]
    pub const fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to light mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(theme: ThemePreference) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_theme(theme);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}

/// Listing row background. Same in both themes.
#[must_use]
pub fn row_background(shade: RowShade) -> Color {
    let [r, g, b] = shade.rgb();
    Color::from_rgb8(r, g, b)
}

/// Text on a listing row; rows stay light, so text stays dark.
pub const ROW_TEXT: Color = Color::from_rgb(0.08, 0.10, 0.14);
