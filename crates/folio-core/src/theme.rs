//! Light/dark theme preference.

use std::fmt;
use std::str::FromStr;

/// localStorage key holding the saved theme.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Saved value wins; otherwise follow the system preference.
    pub fn resolve(saved: Option<&str>, system_prefers_dark: bool) -> Self {
        saved
            .and_then(|s| s.parse().ok())
            .unwrap_or(if system_prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            })
    }

    /// Class put on `<body>` for this theme.
    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
