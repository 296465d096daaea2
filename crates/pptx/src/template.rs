//! Static parts shared by every generated presentation.

/// Slide master with a single blank layout.
pub const SLIDE_MASTER_XML: &str = include_str!("../resources/slideMaster1.xml");

/// Blank slide layout.
pub const SLIDE_LAYOUT_XML: &str = include_str!("../resources/slideLayout1.xml");

/// Office theme with Arial as both heading and body font.
pub const THEME_XML: &str = include_str!("../resources/theme1.xml");

/// 16:9 slide width, 10 inches in EMU.
pub const SLIDE_WIDTH: i64 = 9_144_000;

/// 16:9 slide height, 5.625 inches in EMU.
pub const SLIDE_HEIGHT: i64 = 5_143_500;
