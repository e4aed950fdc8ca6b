use crate::constants::{MM_PER_INCH, in_to_pt};
use crate::layout::{CellPlacement, SheetLayout, plan_layout};
use crate::options::LayoutConfig;
use crate::raster::{prepare_card, to_raw_image};
use crate::types::{Result, SourceImage};
use crate::winansi::reencode_text;
use printpdf::*;
use std::path::Path;

/// Compose `images` onto card sheets and write the PDF to `output_path`.
pub async fn generate_pdf(
    images: &[SourceImage],
    config: &LayoutConfig,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let images = images.to_vec();
    let config = config.clone();
    let output_path = output_path.as_ref().to_owned();

    let bytes = tokio::task::spawn_blocking(move || compose(&images, &config)).await??;

    tokio::fs::write(&output_path, bytes).await?;

    Ok(())
}

/// Lay out `images` in a grid of labeled cards and return the PDF bytes.
///
/// The config is validated before any image is decoded. The first image
/// that fails to decode aborts the whole batch.
pub fn compose(images: &[SourceImage], config: &LayoutConfig) -> Result<Vec<u8>> {
    let labels: Vec<&str> = images.iter().map(|image| image.label.as_str()).collect();
    let layout = plan_layout(&labels, config)?;

    log::info!(
        "Composing {} cards onto {} pages",
        images.len(),
        layout.pages.len()
    );

    let mut doc = PdfDocument::new("Card Sheets");
    let (px_width, px_height) = config.card_pixel_dimensions();

    let mut pages = Vec::with_capacity(layout.pages.len());
    for (page_index, page) in layout.pages.iter().enumerate() {
        log::debug!("Page {}: {} cards", page_index + 1, page.cells.len());

        let mut ops = Vec::new();
        for placement in &page.cells {
            let card = prepare_card(&images[placement.source_index], px_width, px_height)?;
            let image_id = doc.add_image(&to_raw_image(card));

            push_label_ops(&mut ops, placement, &layout, config.font_size_pt);
            ops.push(image_op(image_id, placement, &layout, config, px_width, px_height));
        }

        pages.push(PdfPage::new(
            Mm(layout.page_width_in * MM_PER_INCH),
            Mm(layout.page_height_in * MM_PER_INCH),
            ops,
        ));
    }

    doc.pages = pages;

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    for warning in &warnings {
        log::debug!("PDF: {:?}", warning);
    }

    // Builtin Helvetica is WinAnsi; printpdf leaves label text as UTF-8
    if images.iter().any(|image| !image.label.is_ascii()) {
        return reencode_text(&bytes);
    }

    Ok(bytes)
}

/// Layout y runs down from the top edge, PDF y runs up from the bottom.
fn flip_y(layout: &SheetLayout, y_in: f32) -> Pt {
    Pt(in_to_pt(layout.page_height_in - y_in))
}

fn push_label_ops(
    ops: &mut Vec<Op>,
    placement: &CellPlacement,
    layout: &SheetLayout,
    font_size_pt: f32,
) {
    let (x_in, y_in) = placement.label_anchor;

    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point {
            x: Pt(in_to_pt(x_in)),
            y: flip_y(layout, y_in),
        },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        font: BuiltinFont::Helvetica,
        size: Pt(font_size_pt),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(placement.label.clone())],
        font: BuiltinFont::Helvetica,
    });
    ops.push(Op::EndTextSection);
}

/// Place the image with its bottom-left corner at the card's bottom-left and
/// scale it to the card's physical size.
fn image_op(
    id: XObjectId,
    placement: &CellPlacement,
    layout: &SheetLayout,
    config: &LayoutConfig,
    px_width: u32,
    px_height: u32,
) -> Op {
    let cell = &placement.cell;

    // Natural size of the image at `dpi` before scaling
    let natural_width_pt = in_to_pt(px_width as f32 / config.dpi);
    let natural_height_pt = in_to_pt(px_height as f32 / config.dpi);

    Op::UseXobject {
        id,
        transform: XObjectTransform {
            translate_x: Some(Pt(in_to_pt(cell.x_in))),
            translate_y: Some(flip_y(layout, cell.y_in + cell.height_in)),
            scale_x: Some(in_to_pt(cell.width_in) / natural_width_pt),
            scale_y: Some(in_to_pt(cell.height_in) / natural_height_pt),
            dpi: Some(config.dpi),
            ..Default::default()
        },
    }
}
