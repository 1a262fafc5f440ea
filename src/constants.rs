//! Constants used throughout the application
//!
//! This module centralizes UI copy, notification text and layout limits so the
//! survey wording lives in one place.

// Card copy
pub const DEFAULT_TITLE: &str = "Datos del Cliente";
pub const DEFAULT_SUBTITLE: &str = "Tu opinión nos importa mucho";
pub const DEFAULT_QUESTION: &str = "¿Recomendarías comprar en MOBO?";
pub const DEFAULT_COMMENT_PROMPT: &str = "¿Tienes algún comentario adicional?";
pub const DEFAULT_COMMENT_PLACEHOLDER: &str = "Cuéntanos más sobre tu experiencia...";
pub const DEFAULT_LOW_ANCHOR: &str = "Nada probable";
pub const DEFAULT_HIGH_ANCHOR: &str = "Muy probable";
pub const DEFAULT_BANNER: &str = "Esta es una versión de prueba de tu formulario";
pub const DEFAULT_FOOTER: &str = "Powered by MOBO";
pub const REQUIRED_MARKER: &str = "*";
pub const SCALE_PROMPT: &str = "Selecciona una puntuación";

// Buttons
pub const BUTTON_SUBMIT: &str = "Enviar";
pub const BUTTON_SUBMITTING: &str = "Enviando...";
pub const BUTTON_SEND_ANOTHER: &str = "Enviar otra respuesta";

// Thank-you screen
pub const THANK_YOU_TITLE: &str = "¡Gracias!";
pub const THANK_YOU_MESSAGE: &str = "Tu opinión nos ayuda a mejorar cada día.";
pub const THANK_YOU_REFERENCE: &str = "Referencia";

// Notifications
pub const NOTICE_NO_SCORE_TITLE: &str = "Por favor selecciona una puntuación";
/// `{min}` and `{max}` are replaced with the scale bounds.
pub const NOTICE_NO_SCORE_DESCRIPTION: &str = "Debes elegir un valor del {min} al {max}";
pub const NOTICE_THANKS_TITLE: &str = "¡Gracias por tu respuesta!";
pub const NOTICE_THANKS_DESCRIPTION: &str = "Tu opinión es muy valiosa para nosotros";
pub const NOTICE_SUBMIT_FAILED_TITLE: &str = "No pudimos enviar tu respuesta";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc' or 'F2' to close";

// UI Layout Constants
/// Widest the survey card gets, in columns
pub const CARD_MAX_WIDTH: u16 = 80;
/// Width of a single score cell, in columns
pub const SCORE_CELL_WIDTH: u16 = 5;
/// Most values a scale may have so every cell fits the card at full width
pub const MAX_SCALE_VALUES: usize = ((CARD_MAX_WIDTH - 2) / SCORE_CELL_WIDTH) as usize;
/// Height of a single score cell, in rows
pub const SCORE_CELL_HEIGHT: u16 = 3;
/// Longest allowed toast duration, in seconds
pub const TOAST_MAX_SECS: u64 = 30;
/// Upper bound for submission attempts
pub const SUBMISSION_MAX_ATTEMPTS: u32 = 5;
