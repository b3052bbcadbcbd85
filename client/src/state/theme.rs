//! Light/dark theme preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Site color theme, mirrored to `<html data-theme>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Only `"dark"` selects the dark theme;
    /// absent or unrecognized values fall back to light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Value written to `data-theme` and to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class for the toggle button: a moon offers dark mode, a sun
    /// offers light mode.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "bx bx-moon",
            Self::Dark => "bx bx-sun",
        }
    }
}
