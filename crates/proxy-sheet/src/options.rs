use crate::constants::*;
use crate::types::{Result, SheetError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_in: f32, height_in: f32 },
}

impl PaperSize {
    /// Portrait dimensions (width, height) in inches
    pub fn dimensions_in(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (11.69, 16.54),
            PaperSize::A4 => (DEFAULT_PAGE_WIDTH_IN, DEFAULT_PAGE_HEIGHT_IN),
            PaperSize::A5 => (5.83, 8.27),
            PaperSize::Letter => (8.5, 11.0),
            PaperSize::Legal => (8.5, 14.0),
            PaperSize::Tabloid => (11.0, 17.0),
            PaperSize::Custom {
                width_in,
                height_in,
            } => (width_in, height_in),
        }
    }
}

/// Card size presets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardSize {
    /// 63 × 88 mm (Magic, Pokémon)
    Standard,
    /// 59 × 86 mm (Yu-Gi-Oh!, Japanese sleeves)
    Small,
    Custom { width_in: f32, height_in: f32 },
}

impl CardSize {
    pub fn dimensions_in(self) -> (f32, f32) {
        match self {
            CardSize::Standard => (DEFAULT_CARD_WIDTH_IN, DEFAULT_CARD_HEIGHT_IN),
            CardSize::Small => (2.32, 3.39),
            CardSize::Custom {
                width_in,
                height_in,
            } => (width_in, height_in),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unit {
    Inches,
    Millimeters,
    Points,
}

impl Unit {
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Inches => "in",
            Unit::Millimeters => "mm",
            Unit::Points => "pt",
        }
    }

    pub fn to_inches(&self, value: f32) -> f32 {
        match self {
            Unit::Inches => value,
            Unit::Millimeters => value / MM_PER_INCH,
            Unit::Points => pt_to_in(value),
        }
    }

    pub fn from_inches(&self, value: f32) -> f32 {
        match self {
            Unit::Inches => value,
            Unit::Millimeters => value * MM_PER_INCH,
            Unit::Points => in_to_pt(value),
        }
    }
}

/// Page layout for a card sheet. All lengths are in inches.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    // Card
    pub card_width_in: f32,
    pub card_height_in: f32,

    // Page
    pub page_width_in: f32,
    pub page_height_in: f32,

    /// Resampling resolution for card images
    pub dpi: f32,

    // Spacing
    pub margin_in: f32,
    pub spacing_in: f32,

    // Labels
    pub text_margin_in: f32,
    pub font_size_pt: f32,

    // Grid
    pub columns: usize,
    pub rows: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width_in: DEFAULT_CARD_WIDTH_IN,
            card_height_in: DEFAULT_CARD_HEIGHT_IN,
            page_width_in: DEFAULT_PAGE_WIDTH_IN,
            page_height_in: DEFAULT_PAGE_HEIGHT_IN,
            dpi: DEFAULT_DPI,
            margin_in: DEFAULT_MARGIN_IN,
            spacing_in: DEFAULT_SPACING_IN,
            text_margin_in: DEFAULT_TEXT_MARGIN_IN,
            font_size_pt: LABEL_FONT_SIZE_PT,
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl LayoutConfig {
    /// Replace the page dimensions with a paper preset (portrait)
    pub fn with_paper(mut self, paper: PaperSize) -> Self {
        (self.page_width_in, self.page_height_in) = paper.dimensions_in();
        self
    }

    /// Replace the card dimensions with a card preset
    pub fn with_card(mut self, card: CardSize) -> Self {
        (self.card_width_in, self.card_height_in) = card.dimensions_in();
        self
    }

    pub fn cards_per_page(&self) -> usize {
        self.columns * self.rows
    }

    /// Whether the full grid fits inside the page
    pub fn grid_fits_page(&self) -> bool {
        let (content_width, content_height) = self.content_size_in();
        content_width <= self.page_width_in && content_height <= self.page_height_in
    }

    /// Size of the full grid including inter-card spacing (width, height)
    pub fn content_size_in(&self) -> (f32, f32) {
        let width = self.columns as f32 * self.card_width_in
            + self.columns.saturating_sub(1) as f32 * self.spacing_in;
        let height = self.rows as f32 * self.card_height_in
            + self.rows.saturating_sub(1) as f32 * self.spacing_in;
        (width, height)
    }

    /// Pixel size each card image is resampled to.
    ///
    /// Truncates toward zero, so a 2.48 in card at 300 dpi is 744 px wide.
    pub fn card_pixel_dimensions(&self) -> (u32, u32) {
        (
            (self.card_width_in * self.dpi).floor() as u32,
            (self.card_height_in * self.dpi).floor() as u32,
        )
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let config = serde_json::from_slice(&bytes)
            .map_err(|e| SheetError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SheetError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the layout. Called before any image is touched.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("card width", self.card_width_in),
            ("card height", self.card_height_in),
            ("page width", self.page_width_in),
            ("page height", self.page_height_in),
            ("dpi", self.dpi),
            ("font size", self.font_size_pt),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SheetError::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("margin", self.margin_in),
            ("spacing", self.spacing_in),
            ("text margin", self.text_margin_in),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SheetError::Config(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }

        if self.columns == 0 || self.rows == 0 {
            return Err(SheetError::Config(format!(
                "Grid must have at least one cell, got {}x{}",
                self.columns, self.rows
            )));
        }

        let longest_side = self.card_width_in.max(self.card_height_in) * self.dpi;
        if longest_side > MAX_CARD_PIXELS as f32 {
            return Err(SheetError::Config(format!(
                "Card resolves to {:.0} pixels per side at {} dpi, limit is {}",
                longest_side, self.dpi, MAX_CARD_PIXELS
            )));
        }

        let (px_width, px_height) = self.card_pixel_dimensions();
        if px_width == 0 || px_height == 0 {
            return Err(SheetError::Config(format!(
                "Card resolves to {}x{} pixels at {} dpi",
                px_width, px_height, self.dpi
            )));
        }

        Ok(())
    }
}
