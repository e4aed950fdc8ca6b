//! Grid layout calculation
//!
//! Pure geometry for placing cards on a page: the centered grid origin,
//! per-cell positions and label anchors, and pagination of a batch.
//! Coordinates are in inches measured from the top-left page corner.

use crate::options::LayoutConfig;
use crate::types::Result;

// =============================================================================
// Cells
// =============================================================================

/// One placement slot on a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Zero-based index within the page
    pub index: usize,
    pub col: usize,
    pub row: usize,
    /// Top-left corner of the card
    pub x_in: f32,
    pub y_in: f32,
    pub width_in: f32,
    pub height_in: f32,
}

impl Cell {
    /// Baseline start of the label, `text_margin_in` above the card
    pub fn label_anchor(&self, text_margin_in: f32) -> (f32, f32) {
        (self.x_in, self.y_in - text_margin_in)
    }
}

// =============================================================================
// Page Grid
// =============================================================================

/// The card grid of a page, centered both ways.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGrid {
    pub columns: usize,
    pub rows: usize,
    pub card_width_in: f32,
    pub card_height_in: f32,
    pub spacing_in: f32,
    pub text_margin_in: f32,
    pub content_width_in: f32,
    pub content_height_in: f32,
    pub start_x_in: f32,
    pub start_y_in: f32,
}

impl PageGrid {
    pub fn new(config: &LayoutConfig) -> Self {
        let (content_width, content_height) = config.content_size_in();
        Self {
            columns: config.columns,
            rows: config.rows,
            card_width_in: config.card_width_in,
            card_height_in: config.card_height_in,
            spacing_in: config.spacing_in,
            text_margin_in: config.text_margin_in,
            content_width_in: content_width,
            content_height_in: content_height,
            start_x_in: (config.page_width_in - content_width) / 2.0,
            start_y_in: (config.page_height_in - content_height) / 2.0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// Top-left corner of the content block
    pub fn origin(&self) -> (f32, f32) {
        (self.start_x_in, self.start_y_in)
    }

    /// Size of the content block (width, height)
    pub fn content_size(&self) -> (f32, f32) {
        (self.content_width_in, self.content_height_in)
    }

    /// Cell `index` of a page, filled row by row from the top-left.
    ///
    /// Indices past `capacity()` keep counting rows downward; pagination
    /// never produces them.
    pub fn cell(&self, index: usize) -> Cell {
        let col = index % self.columns;
        let row = index / self.columns;
        Cell {
            index,
            col,
            row,
            x_in: self.start_x_in + col as f32 * (self.card_width_in + self.spacing_in),
            y_in: self.start_y_in + row as f32 * (self.card_height_in + self.spacing_in),
            width_in: self.card_width_in,
            height_in: self.card_height_in,
        }
    }

    pub fn label_anchor(&self, index: usize) -> (f32, f32) {
        self.cell(index).label_anchor(self.text_margin_in)
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// Number of pages needed for `count` cards at `per_page` cards each.
pub fn page_count(count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    count.div_ceil(per_page)
}

/// A card assigned to a cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellPlacement {
    /// Position in the original batch
    pub source_index: usize,
    pub label: String,
    pub cell: Cell,
    pub label_anchor: (f32, f32),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    pub cells: Vec<CellPlacement>,
}

/// The complete placement plan for a batch
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub page_width_in: f32,
    pub page_height_in: f32,
    pub pages: Vec<PageLayout>,
}

impl SheetLayout {
    pub fn card_count(&self) -> usize {
        self.pages.iter().map(|page| page.cells.len()).sum()
    }
}

/// Partition labels into pages and assign each one its cell.
///
/// Order is preserved; every page except possibly the last is full.
pub fn plan_layout<S: AsRef<str>>(labels: &[S], config: &LayoutConfig) -> Result<SheetLayout> {
    config.validate()?;

    let grid = PageGrid::new(config);
    if !config.grid_fits_page() {
        log::warn!(
            "{}x{} grid ({:.2} x {:.2} in) runs past the {:.2} x {:.2} in page",
            grid.columns,
            grid.rows,
            grid.content_width_in,
            grid.content_height_in,
            config.page_width_in,
            config.page_height_in
        );
    } else if grid.start_x_in < config.margin_in || grid.start_y_in < config.margin_in {
        log::warn!(
            "Card grid starts at ({:.3}, {:.3}) in, inside the {:.3} in margin",
            grid.start_x_in,
            grid.start_y_in,
            config.margin_in
        );
    }

    let per_page = grid.capacity();
    let mut pages = Vec::with_capacity(page_count(labels.len(), per_page));

    for (page_index, chunk) in labels.chunks(per_page).enumerate() {
        let cells = chunk
            .iter()
            .enumerate()
            .map(|(j, label)| {
                let cell = grid.cell(j);
                CellPlacement {
                    source_index: page_index * per_page + j,
                    label: label.as_ref().to_string(),
                    cell,
                    label_anchor: cell.label_anchor(grid.text_margin_in),
                }
            })
            .collect();
        pages.push(PageLayout { cells });
    }

    Ok(SheetLayout {
        page_width_in: config.page_width_in,
        page_height_in: config.page_height_in,
        pages,
    })
}
