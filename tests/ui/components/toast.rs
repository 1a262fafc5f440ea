use crate::support::{buffer_text, terminal};
use likert::icons::{IconService, IconTheme};
use likert::survey::{Notification, Notifier};
use likert::ui::components::{render_toasts, ToastQueue};
use std::time::{Duration, Instant};

#[test]
fn test_notifier_pushes_toasts() {
    let queue = ToastQueue::new(Duration::from_secs(4));
    assert!(queue.is_empty());

    queue.notify(Notification::error("Oops", "Algo falló"));
    let visible = queue.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].notification.title, "Oops");
    assert!(visible[0].notification.is_error());
}

#[test]
fn test_clones_share_the_queue() {
    let queue = ToastQueue::new(Duration::from_secs(4));
    let clone = queue.clone();
    clone.push(Notification::info("Hola", ""));
    assert_eq!(queue.visible().len(), 1);

    queue.clear();
    assert!(clone.is_empty());
}

#[test]
fn test_only_recent_toasts_are_kept() {
    let queue = ToastQueue::new(Duration::from_secs(4));
    for i in 0..5 {
        queue.push(Notification::info(format!("toast {}", i), ""));
    }
    let titles: Vec<String> = queue.visible().into_iter().map(|t| t.notification.title).collect();
    assert_eq!(titles, vec!["toast 2", "toast 3", "toast 4"]);
}

#[test]
fn test_prune_expires_old_toasts() {
    let queue = ToastQueue::new(Duration::from_secs(4));
    queue.push(Notification::info("a", ""));
    queue.push(Notification::info("b", ""));

    assert_eq!(queue.prune_at(Instant::now()), 0);
    assert_eq!(queue.prune_at(Instant::now() + Duration::from_secs(5)), 2);
    assert!(queue.is_empty());
}

#[test]
fn test_render_toasts() {
    let queue = ToastQueue::new(Duration::from_secs(4));
    queue.push(Notification::error("Sin puntuación", "Elige un valor"));

    let mut terminal = terminal(60, 10);
    let icons = IconService::new(IconTheme::Ascii);
    terminal
        .draw(|f| {
            let area = f.area();
            render_toasts(f, area, &queue, &icons)
        })
        .unwrap();

    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("X Sin puntuación"));
    assert!(text.contains("Elige un valor"));
}
