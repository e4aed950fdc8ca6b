//! Shared constants for sheet composition
//!
//! Physical lengths are kept in inches; PDF output is in points.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Convert inches to points
#[inline]
pub fn in_to_pt(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}

/// Convert points to inches
#[inline]
pub fn pt_to_in(pt: f32) -> f32 {
    pt / POINTS_PER_INCH
}

// =============================================================================
// Default Layout
// =============================================================================

/// Trading card width (63 mm)
pub const DEFAULT_CARD_WIDTH_IN: f32 = 2.48;

/// Trading card height (88 mm)
pub const DEFAULT_CARD_HEIGHT_IN: f32 = 3.46;

/// A4 portrait width
pub const DEFAULT_PAGE_WIDTH_IN: f32 = 8.27;

/// A4 portrait height
pub const DEFAULT_PAGE_HEIGHT_IN: f32 = 11.69;

/// Resampling resolution in dots per inch
pub const DEFAULT_DPI: f32 = 300.0;

/// Printer-safe margin (36 pt)
pub const DEFAULT_MARGIN_IN: f32 = 0.5;

/// Gap between neighbouring cards (18 pt)
pub const DEFAULT_SPACING_IN: f32 = 0.25;

/// Gap between a label baseline and the card below it (6 pt)
pub const DEFAULT_TEXT_MARGIN_IN: f32 = 6.0 / POINTS_PER_INCH;

/// Largest card side, in pixels, that images are resampled to
pub const MAX_CARD_PIXELS: u32 = 20_000;

pub const DEFAULT_COLUMNS: usize = 3;
pub const DEFAULT_ROWS: usize = 3;

// =============================================================================
// Labels
// =============================================================================

/// Font size for card labels (points)
pub const LABEL_FONT_SIZE_PT: f32 = 8.0;
