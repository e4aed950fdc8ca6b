use proxy_sheet::*;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

fn labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("card{i}")).collect()
}

#[test]
fn test_default_content_block_is_centered() {
    let grid = PageGrid::new(&LayoutConfig::default());

    let (width, height) = grid.content_size();
    assert_close(width, 7.94);
    assert_close(height, 10.88);

    let (start_x, start_y) = grid.origin();
    assert_close(start_x, 0.165);
    assert_close(start_y, 0.405);
}

#[test]
fn test_cell_rows_and_columns() {
    let grid = PageGrid::new(&LayoutConfig::default());

    for j in 0..9 {
        let cell = grid.cell(j);
        assert_eq!(cell.col, j % 3);
        assert_eq!(cell.row, j / 3);
    }

    let first = grid.cell(0);
    assert_close(first.x_in, 0.165);
    assert_close(first.y_in, 0.405);

    // Bottom-right cell of a full page
    let last = grid.cell(8);
    assert_close(last.x_in, 0.165 + 2.0 * (2.48 + 0.25));
    assert_close(last.y_in, 0.405 + 2.0 * (3.46 + 0.25));
    assert_close(last.y_in + last.height_in, 11.69 - 0.405);
}

#[test]
fn test_label_sits_above_card() {
    let config = LayoutConfig::default();
    let grid = PageGrid::new(&config);

    let (x, y) = grid.label_anchor(4);
    let cell = grid.cell(4);
    assert_close(x, cell.x_in);
    assert_close(y, cell.y_in - 6.0 / 72.0);
}

#[test]
fn test_non_square_grid() {
    let config = LayoutConfig {
        columns: 2,
        rows: 4,
        card_height_in: 2.0,
        ..Default::default()
    };
    let grid = PageGrid::new(&config);

    assert_eq!(grid.capacity(), 8);
    let cell = grid.cell(5);
    assert_eq!((cell.col, cell.row), (1, 2));
    assert_close(grid.origin().0, (8.27 - (2.0 * 2.48 + 0.25)) / 2.0);
}

#[test]
fn test_page_count() {
    assert_eq!(page_count(0, 9), 0);
    assert_eq!(page_count(1, 9), 1);
    assert_eq!(page_count(9, 9), 1);
    assert_eq!(page_count(10, 9), 2);
    assert_eq!(page_count(27, 9), 3);
    assert_eq!(page_count(28, 9), 4);
}

#[test]
fn test_plan_partitions_in_order() {
    let config = LayoutConfig::default();

    for count in [1usize, 8, 9, 10, 18, 20] {
        let layout = plan_layout(&labels(count), &config).unwrap();

        assert_eq!(layout.pages.len(), count.div_ceil(9));
        assert_eq!(layout.card_count(), count);

        let expected_last = if count % 9 == 0 { 9 } else { count % 9 };
        assert_eq!(layout.pages.last().unwrap().cells.len(), expected_last);

        for page in &layout.pages[..layout.pages.len() - 1] {
            assert_eq!(page.cells.len(), 9);
        }

        let order: Vec<usize> = layout
            .pages
            .iter()
            .flat_map(|page| page.cells.iter().map(|c| c.source_index))
            .collect();
        assert_eq!(order, (0..count).collect::<Vec<_>>());
    }
}

#[test]
fn test_plan_restarts_cells_on_each_page() {
    let layout = plan_layout(&labels(11), &LayoutConfig::default()).unwrap();
    let second = &layout.pages[1];

    assert_eq!(second.cells[0].label, "card9");
    assert_eq!(second.cells[0].cell.index, 0);
    assert_eq!(second.cells[1].cell.index, 1);
    assert_eq!(second.cells[0].cell, layout.pages[0].cells[0].cell);
}

#[test]
fn test_single_image_plan() {
    let layout = plan_layout(&["solo"], &LayoutConfig::default()).unwrap();

    assert_eq!(layout.pages.len(), 1);
    let placement = &layout.pages[0].cells[0];
    assert_eq!(placement.label, "solo");
    assert_close(placement.cell.x_in, 0.165);
    assert_close(placement.cell.y_in, 0.405);
}

#[test]
fn test_empty_plan_has_no_pages() {
    let empty: [&str; 0] = [];
    let layout = plan_layout(&empty, &LayoutConfig::default()).unwrap();
    assert!(layout.pages.is_empty());
}

#[test]
fn test_plan_is_deterministic() {
    let config = LayoutConfig::default();
    let first = plan_layout(&labels(23), &config).unwrap();
    let second = plan_layout(&labels(23), &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_plan_rejects_invalid_config() {
    let config = LayoutConfig {
        columns: 0,
        ..Default::default()
    };
    match plan_layout(&labels(3), &config) {
        Err(SheetError::Config(_)) => {}
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[test]
fn test_oversized_grid_overhangs_page() {
    let config = LayoutConfig {
        columns: 4,
        ..Default::default()
    };
    let layout = plan_layout(&labels(4), &config).unwrap();

    let first = layout.pages[0].cells[0].cell;
    // 4 × 2.48 + 3 × 0.25 = 10.67 in on an 8.27 in page
    assert_close(first.x_in, (8.27 - 10.67) / 2.0);
    assert!(first.x_in < 0.0);
}
