// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark palettes selected by the UI theme flag.

use crate::color::Rgba;

/// Flag value that selects the light palette. Every other flag selects dark.
pub const LIGHT_FLAG: &str = "light";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub tick: Rgba,
    /// Y tick labels keep the charting default regardless of palette.
    pub value_tick: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::hex(0x1b2430),
            grid: Rgba::hex(0x26323f),
            tick: Rgba::hex(0xffffff),
            value_tick: Rgba::hex(0x666666),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::hex(0xffffff),
            grid: Rgba::hex(0xdddfe5),
            tick: Rgba::hex(0x929292),
            value_tick: Rgba::hex(0x666666),
        }
    }

    /// Palette for a UI theme flag. Exact match on `"light"`, anything else is dark.
    pub fn for_flag(flag: &str) -> Self {
        if flag == LIGHT_FLAG { Self::light() } else { Self::dark() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_flag_selects_light_palette() {
        assert_eq!(Theme::for_flag("light").grid, Rgba::hex(0xdddfe5));
        assert_eq!(Theme::for_flag("light").tick, Rgba::hex(0x929292));
    }

    #[test]
    fn other_flags_fall_back_to_dark() {
        for flag in ["dark", "Light", "", "solarized"] {
            let t = Theme::for_flag(flag);
            assert_eq!(t.name, "dark", "flag {flag:?}");
            assert_eq!(t.grid, Rgba::hex(0x26323f));
            assert_eq!(t.tick, Rgba::hex(0xffffff));
        }
    }
}
