use crate::support::{buffer_text, click, hover, key, terminal};
use crossterm::event::KeyCode;
use likert::constants::{CARD_MAX_WIDTH, MAX_SCALE_VALUES};
use likert::icons::{IconService, IconTheme};
use likert::survey::{Scale, Score};
use likert::ui::components::ScoreScaleComponent;
use likert::ui::core::{Action, Component};
use ratatui::layout::Rect;
use std::collections::BTreeSet;

// 11 cells of 5 columns fill this area exactly, so score N starts at column 5 * N
const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 55,
    height: 5,
};

fn rendered(scale: Scale) -> ScoreScaleComponent {
    let mut component = ScoreScaleComponent::new(scale, "Nada probable", "Muy probable");
    component.set_icons(IconService::new(IconTheme::Ascii));
    let mut terminal = terminal(AREA.width, AREA.height);
    terminal.draw(|f| component.render(f, AREA)).unwrap();
    component
}

#[test]
fn test_arrow_keys_move_preview_without_committing() {
    let mut component = ScoreScaleComponent::new(Scale::eleven_point(), "low", "high");

    assert!(matches!(component.handle_key_events(key(KeyCode::Right)), Action::None));
    assert_eq!(component.hovered(), Some(Score::new(0)));

    component.handle_key_events(key(KeyCode::Right));
    component.handle_key_events(key(KeyCode::Char('l')));
    assert_eq!(component.hovered(), Some(Score::new(2)));

    component.handle_key_events(key(KeyCode::Left));
    assert_eq!(component.hovered(), Some(Score::new(1)));
    assert_eq!(component.value, None);
}

#[test]
fn test_preview_starts_from_committed_value() {
    let mut component = ScoreScaleComponent::new(Scale::eleven_point(), "low", "high");
    component.set_value(Some(Score::new(6)));

    component.handle_key_events(key(KeyCode::Right));
    assert_eq!(component.hovered(), Some(Score::new(7)));
    assert_eq!(component.display_score(), Some(Score::new(7)));
}

#[test]
fn test_home_end_and_saturation() {
    let mut component = ScoreScaleComponent::new(Scale::five_point(), "low", "high");

    component.handle_key_events(key(KeyCode::End));
    assert_eq!(component.hovered(), Some(Score::new(5)));
    component.handle_key_events(key(KeyCode::Right));
    assert_eq!(component.hovered(), Some(Score::new(5)));

    component.handle_key_events(key(KeyCode::Home));
    assert_eq!(component.hovered(), Some(Score::new(1)));
    component.handle_key_events(key(KeyCode::Left));
    assert_eq!(component.hovered(), Some(Score::new(1)));
}

#[test]
fn test_enter_commits_hovered_score() {
    let mut component = ScoreScaleComponent::new(Scale::eleven_point(), "low", "high");

    // Nothing to commit yet
    assert!(matches!(component.handle_key_events(key(KeyCode::Enter)), Action::None));

    component.handle_key_events(key(KeyCode::End));
    let action = component.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::CommitScore(score) if score == Score::new(10)));
}

#[test]
fn test_digit_keys_commit_directly() {
    let mut component = ScoreScaleComponent::new(Scale::five_point(), "low", "high");

    let action = component.handle_key_events(key(KeyCode::Char('4')));
    assert!(matches!(action, Action::CommitScore(score) if score == Score::new(4)));

    // Outside the 1-5 range
    assert!(matches!(component.handle_key_events(key(KeyCode::Char('0'))), Action::None));
    assert!(matches!(component.handle_key_events(key(KeyCode::Char('9'))), Action::None));
}

#[test]
fn test_escape_clears_preview() {
    let mut component = ScoreScaleComponent::new(Scale::eleven_point(), "low", "high");
    component.handle_key_events(key(KeyCode::Right));
    component.handle_key_events(key(KeyCode::Esc));
    assert_eq!(component.hovered(), None);
}

#[test]
fn test_disabled_scale_ignores_input() {
    let mut component = ScoreScaleComponent::new(Scale::eleven_point(), "low", "high");
    component.handle_key_events(key(KeyCode::Right));
    component.set_enabled(false);
    assert_eq!(component.hovered(), None);

    assert!(matches!(component.handle_key_events(key(KeyCode::Char('3'))), Action::None));
    assert!(matches!(component.handle_key_events(key(KeyCode::Right)), Action::None));
    assert_eq!(component.hovered(), None);
}

#[test]
fn test_blur_clears_preview() {
    let mut component = ScoreScaleComponent::new(Scale::eleven_point(), "low", "high");
    component.handle_key_events(key(KeyCode::Right));
    component.on_blur();
    assert!(!component.focused);
    assert_eq!(component.hovered(), None);
}

#[test]
fn test_render_lays_out_one_cell_per_score() {
    let component = rendered(Scale::eleven_point());
    assert_eq!(component.cell_at(0, 1), Some(Score::new(0)));
    assert_eq!(component.cell_at(27, 1), Some(Score::new(5)));
    assert_eq!(component.cell_at(54, 2), Some(Score::new(10)));
    // Display line sits below the cells
    assert_eq!(component.cell_at(10, 3), None);
}

#[test]
fn test_mouse_hover_and_click() {
    let mut component = rendered(Scale::eleven_point());

    component.handle_mouse_events(hover(37, 1));
    assert_eq!(component.hovered(), Some(Score::new(7)));

    let action = component.handle_mouse_events(click(47, 1));
    assert!(matches!(action, Action::CommitScore(score) if score == Score::new(9)));

    // Leaving the cells clears the preview
    component.handle_mouse_events(hover(10, 4));
    assert_eq!(component.hovered(), None);
}

#[test]
fn test_render_shows_prompt_then_selection() {
    let mut component = ScoreScaleComponent::new(Scale::eleven_point(), "Nada probable", "Muy probable");
    component.set_icons(IconService::new(IconTheme::Ascii));
    let mut terminal = terminal(AREA.width, AREA.height);

    terminal.draw(|f| component.render(f, AREA)).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Selecciona una puntuación"));
    assert!(text.contains("Nada probable"));
    assert!(text.contains("Muy probable"));

    component.set_value(Some(Score::new(9)));
    terminal.draw(|f| component.render(f, AREA)).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains(":D 9 · Muy bueno  (Promotor)"));

    // Hover wins over the committed value
    component.handle_key_events(key(KeyCode::Home));
    terminal.draw(|f| component.render(f, AREA)).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains(":( 0 · Muy malo  (Detractor)"));
}

#[test]
fn test_widest_accepted_scale_renders_every_cell() {
    let max = u8::try_from(MAX_SCALE_VALUES - 1).unwrap();
    let labels = (0..=max).map(|i| format!("label {}", i)).collect();
    let scale = Scale::new(0, max, 5, 10, labels).unwrap();

    // Card interior at full width
    let area = Rect::new(0, 0, CARD_MAX_WIDTH - 2, 5);
    let mut component = ScoreScaleComponent::new(scale.clone(), "low", "high");
    let mut terminal = terminal(area.width, area.height);
    terminal.draw(|f| component.render(f, area)).unwrap();

    let laid_out: BTreeSet<Score> = (0..area.width).filter_map(|x| component.cell_at(x, 1)).collect();
    assert_eq!(laid_out, scale.scores().collect::<BTreeSet<_>>());

    let cells_row: String = {
        let buffer = terminal.backend().buffer();
        (0..area.width).map(|x| buffer[(x, 1)].symbol().to_string()).collect()
    };
    for score in scale.scores() {
        assert!(cells_row.contains(&score.to_string()), "score {} not drawn", score);
    }
}
