//! Toast notifications.
//!
//! [`ToastQueue`] is the UI's [`Notifier`]: the survey form pushes into it and
//! the app renders whatever has not expired yet, newest at the bottom.

use crate::icons::IconService;
use crate::survey::{Notification, Notifier, Severity};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Toasts shown at once; older ones are dropped
const MAX_VISIBLE_TOASTS: usize = 3;
const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub created_at: Instant,
}

/// Shared, clonable toast queue
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Arc<Mutex<VecDeque<Toast>>>,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Arc::new(Mutex::new(VecDeque::new())),
            ttl,
        }
    }

    pub fn push(&self, notification: Notification) {
        if let Ok(mut toasts) = self.toasts.lock() {
            if toasts.len() >= MAX_VISIBLE_TOASTS {
                toasts.pop_front();
            }
            toasts.push_back(Toast {
                notification,
                created_at: Instant::now(),
            });
        }
    }

    /// Drop expired toasts, returning how many were removed
    pub fn prune(&self) -> usize {
        self.prune_at(Instant::now())
    }

    pub fn prune_at(&self, now: Instant) -> usize {
        let Ok(mut toasts) = self.toasts.lock() else {
            return 0;
        };
        let before = toasts.len();
        toasts.retain(|toast| now.duration_since(toast.created_at) < self.ttl);
        before - toasts.len()
    }

    pub fn visible(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|toasts| toasts.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.lock().map(|toasts| toasts.is_empty()).unwrap_or(true)
    }

    pub fn clear(&self) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.clear();
        }
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        log::info!(
            "Toast ({:?}): {} - {}",
            notification.severity,
            notification.title,
            notification.description
        );
        self.push(notification);
    }
}

/// Stack the visible toasts in the bottom-right corner of `area`
pub fn render_toasts(f: &mut Frame, area: Rect, queue: &ToastQueue, icons: &IconService) {
    let width = area.width.min(TOAST_WIDTH);
    let mut bottom = area.bottom();

    for toast in queue.visible().iter().rev() {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        let toast_area = Rect::new(area.right() - width, bottom - TOAST_HEIGHT, width, TOAST_HEIGHT);
        bottom -= TOAST_HEIGHT;

        let (color, icon) = match toast.notification.severity {
            Severity::Info => (Color::Green, icons.success()),
            Severity::Error => (Color::Red, icons.error()),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));
        let content = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{} {}", icon, toast.notification.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                toast.notification.description.as_str(),
                Style::default().fg(Color::White),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(content, toast_area);
    }
}
