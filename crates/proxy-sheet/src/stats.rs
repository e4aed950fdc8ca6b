use crate::layout::page_count;
use crate::options::LayoutConfig;
use crate::types::{Result, SheetStatistics};

/// Calculate page statistics for a batch of `image_count` cards
pub fn calculate_statistics(image_count: usize, config: &LayoutConfig) -> Result<SheetStatistics> {
    config.validate()?;

    let cards_per_page = config.cards_per_page();
    let pages = page_count(image_count, cards_per_page);

    let cards_on_last_page = match image_count % cards_per_page {
        0 if image_count > 0 => cards_per_page,
        remainder => remainder,
    };
    let empty_slots = if pages == 0 {
        0
    } else {
        cards_per_page - cards_on_last_page
    };

    Ok(SheetStatistics {
        source_images: image_count,
        pages,
        cards_per_page,
        cards_on_last_page,
        empty_slots,
    })
}
