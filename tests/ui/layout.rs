use likert::ui::layout::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_page_layout_with_and_without_chrome() {
    let area = Rect::new(0, 0, 100, 40);

    let page = LayoutManager::page_layout(area, true, true);
    assert_eq!(page.banner, Some(Rect::new(0, 0, 100, 1)));
    assert_eq!(page.main, Rect::new(0, 1, 100, 38));
    assert_eq!(page.footer, Some(Rect::new(0, 39, 100, 1)));

    let bare = LayoutManager::page_layout(area, false, false);
    assert_eq!(bare.banner, None);
    assert_eq!(bare.footer, None);
    assert_eq!(bare.main, area);
}

#[test]
fn test_card_is_centered_and_capped() {
    let card = LayoutManager::card_rect(Rect::new(0, 0, 120, 40), LayoutManager::CARD_HEIGHT);
    assert_eq!(card, Rect::new(20, 9, 80, 22));

    // Narrow terminals get the full width
    let narrow = LayoutManager::card_rect(Rect::new(0, 0, 50, 10), LayoutManager::CARD_HEIGHT);
    assert_eq!(narrow, Rect::new(0, 0, 50, 10));
}

#[test]
fn test_card_layout_fills_card_interior() {
    let inner = Rect::new(1, 1, 78, LayoutManager::CARD_HEIGHT - 2);
    let rows = LayoutManager::card_layout(inner);

    assert_eq!(rows.header.y, 1);
    assert_eq!(rows.question.y, 4);
    assert_eq!(rows.scale.height, LayoutManager::SCALE_HEIGHT);
    assert_eq!(rows.comment.height, 6);
    assert_eq!(rows.button.bottom(), inner.bottom());
}

#[test]
fn test_score_cells() {
    let cells = LayoutManager::score_cells(Rect::new(0, 0, 78, 3), 11);
    assert_eq!(cells.len(), 11);
    assert!(cells.iter().all(|cell| cell.width == 5 && cell.height == 3));
    // Centered: 78 - 55 = 23 spare columns
    assert_eq!(cells[0].x, 11);
    assert!(cells.windows(2).all(|pair| pair[1].x == pair[0].right()));

    // Shrinks on narrow screens
    let narrow = LayoutManager::score_cells(Rect::new(0, 0, 40, 3), 11);
    assert_eq!(narrow.len(), 11);
    assert!(narrow.iter().all(|cell| cell.width == 3));

    assert!(LayoutManager::score_cells(Rect::new(0, 0, 40, 3), 0).is_empty());
}

#[test]
fn test_score_cells_never_overflow() {
    let area = Rect::new(0, 0, 20, 3);
    let cells = LayoutManager::score_cells(area, 11);
    assert!(cells.len() < 11);
    assert!(cells.iter().all(|cell| cell.right() <= area.right()));
}
