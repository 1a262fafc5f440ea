//! Reusable UI components

pub mod comment_box;
pub mod common;
pub mod logs_dialog;
pub mod score_scale;
pub mod thank_you;
pub mod toast;

// Component exports
pub use comment_box::CommentBox;
pub use logs_dialog::LogsDialog;
pub use score_scale::ScoreScaleComponent;
pub use thank_you::ThankYouComponent;
pub use toast::{render_toasts, Toast, ToastQueue};
