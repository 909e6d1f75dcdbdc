use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Viewport width above which the mobile menu is never shown.
pub const MENU_BREAKPOINT_PX: f64 = 820.0;

/// Gap kept between the fixed header and a scrolled-to section.
pub const HEADER_GAP_PX: f64 = 10.0;
pub const HEADER_SELECTOR: &str = ".header";

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const REVEAL_STAGGER_MS: u32 = 45;
pub const REVEAL_MAX_DELAY_MS: u32 = 260;

/// How long the lead form confirmation stays on screen.
pub const STATUS_CLEAR_MS: u32 = 7_000;

pub const MAP_CENTER: (f64, f64) = (51.1282, 71.4304);
pub const MAP_ZOOM: u8 = 12;
pub const MAP_BOUNDS_PADDING: f64 = 0.25;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_MAX_ZOOM: u8 = 19;
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap";

pub const SCHOOL_NAME: &str = "ASTANA JAS Football School";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

// Replace with surveyed coordinates once the venues confirm them.
pub const LOCATIONS: [Location; 2] = [
    Location {
        name: "Школа-лицей №11 им. Ө. Жәнібеков",
        lat: 51.1600,
        lng: 71.4700,
    },
    Location {
        name: "Школа-лицей №71",
        lat: 51.1050,
        lng: 71.3900,
    },
];
