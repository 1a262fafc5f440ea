use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates the rounded block that frames a card or dialog
pub fn create_card_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input block, highlighted when it has focus
pub fn create_input_block(focused: bool, accent: Color) -> Block<'static> {
    let border_color = if focused { accent } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border_color))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across the survey screens
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const TAB_FOCUS: InstructionShortcut = ("Tab", Color::Cyan, " Siguiente");
    pub const ARROWS_PREVIEW: InstructionShortcut = ("←/→", Color::Cyan, " Vista previa");
    pub const ENTER_SELECT: InstructionShortcut = ("Enter", Color::Green, " Elegir");
    pub const CTRL_S_SUBMIT: InstructionShortcut = ("Ctrl+S", Color::Green, " Enviar");
    pub const ENTER_ANOTHER: InstructionShortcut = ("Enter", Color::Green, " Nueva respuesta");
    pub const F2_LOGS: InstructionShortcut = ("F2", Color::Yellow, " Registros");
    pub const QUIT: InstructionShortcut = ("Ctrl+C", Color::Red, " Salir");
}
