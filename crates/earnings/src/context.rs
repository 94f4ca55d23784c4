// File: crates/earnings/src/context.rs
// Summary: Shared UI context read by dashboard components.

use chart_core::theme::LIGHT_FLAG;
use chart_core::Theme;

/// Read-only UI settings provided once per app and consumed by components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiContext {
    pub theme: String,
}

impl UiContext {
    pub fn new(theme: impl Into<String>) -> Self {
        Self { theme: theme.into() }
    }

    pub fn is_light(&self) -> bool {
        self.theme == LIGHT_FLAG
    }

    pub fn palette(&self) -> Theme {
        Theme::for_flag(&self.theme)
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new(LIGHT_FLAG)
    }
}
