use crate::config::Config;
use crate::constants::{BUTTON_SUBMIT, BUTTON_SUBMITTING, REQUIRED_MARKER};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::survey::{FormError, SubmissionPhase, SubmissionPolicy, Submitter, SurveyForm};
use crate::ui::components::common::{create_card_block, create_instructions_paragraph, shortcuts, InstructionShortcut};
use crate::ui::components::{render_toasts, CommentBox, LogsDialog, ScoreScaleComponent, ThankYouComponent, ToastQueue};
use crate::ui::core::{
    actions::{Action, FocusTarget},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::color::ACCENT;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Height of the confirmation card, borders included
const THANK_YOU_CARD_HEIGHT: u16 = 12;

/// Static copy shown on the card
#[derive(Debug, Clone)]
struct SurveyText {
    title: String,
    subtitle: String,
    question: String,
    banner: String,
    footer: String,
}

pub struct AppComponent {
    // Component composition
    scale: ScoreScaleComponent,
    comment: CommentBox,
    thank_you: ThankYouComponent,
    logs_dialog: LogsDialog,

    // Survey state
    form: SurveyForm,
    text: SurveyText,
    toasts: ToastQueue,

    // Services
    submitter: Arc<dyn Submitter>,
    policy: SubmissionPolicy,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    icons: IconService,

    // Simple UI state
    focus: FocusTarget,
    show_logs: bool,
    mouse_enabled: bool,
    should_quit: bool,
    comment_area: Rect,
    button_area: Rect,
}

impl AppComponent {
    pub fn new(config: &Config, submitter: Arc<dyn Submitter>, logger: Logger) -> anyhow::Result<Self> {
        let scale = config.survey.build_scale()?;
        let toasts = ToastQueue::new(Duration::from_secs(config.ui.toast_duration_secs));
        let form = SurveyForm::new(scale.clone(), Arc::new(toasts.clone()));
        let icons = IconService::new(config.ui.icon_theme);
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut scale_component =
            ScoreScaleComponent::new(scale, &config.survey.low_anchor, &config.survey.high_anchor);
        scale_component.set_icons(icons.clone());

        log::info!(
            "Survey ready: {} scale {}..={}, submitter '{}'",
            config.survey.question,
            form.scale().min(),
            form.scale().max(),
            submitter.name()
        );

        Ok(Self {
            scale: scale_component,
            comment: CommentBox::new(&config.survey.comment_prompt, &config.survey.comment_placeholder),
            thank_you: ThankYouComponent::new(icons.clone()),
            logs_dialog: LogsDialog::new(logger.clone()),
            form,
            text: SurveyText {
                title: config.survey.title.clone(),
                subtitle: config.survey.subtitle.clone(),
                question: config.survey.question.clone(),
                banner: config.ui.banner.clone(),
                footer: config.ui.footer.clone(),
            },
            toasts,
            submitter,
            policy: config.submission.policy(),
            task_manager,
            background_action_rx,
            logger,
            icons,
            focus: FocusTarget::Scale,
            show_logs: false,
            mouse_enabled: config.ui.mouse_enabled,
            should_quit: false,
            comment_area: Rect::default(),
            button_area: Rect::default(),
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn form(&self) -> &SurveyForm {
        &self.form
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn is_showing_logs(&self) -> bool {
        self.show_logs
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Check if a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.form.phase() == SubmissionPhase::Submitting
    }

    /// Push form state down into the components
    fn sync_component_data(&mut self) {
        self.scale.set_value(self.form.score());
        self.scale.set_enabled(self.form.is_editable());
        self.comment.enabled = self.form.phase() != SubmissionPhase::Submitted;
        self.thank_you.set_receipt(self.form.last_receipt().cloned());
    }

    fn set_focus(&mut self, target: FocusTarget) {
        if self.focus == target {
            return;
        }
        match self.focus {
            FocusTarget::Scale => self.scale.on_blur(),
            FocusTarget::Comment => self.comment.on_blur(),
            FocusTarget::SubmitButton => {}
        }
        match target {
            FocusTarget::Scale => self.scale.on_focus(),
            FocusTarget::Comment => self.comment.on_focus(),
            FocusTarget::SubmitButton => {}
        }
        log::debug!("Focus: {:?} -> {:?}", self.focus, target);
        self.focus = target;
    }

    /// Keys that work regardless of which field has focus
    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                log::info!("Global key: Ctrl+C - quitting application");
                Some(Action::Quit)
            }
            KeyCode::Char('s') if ctrl => Some(Action::Submit),
            KeyCode::F(2) => Some(Action::ShowLogs(!self.show_logs)),
            KeyCode::F(3) => Some(Action::CycleIconTheme),
            KeyCode::Tab if self.form.phase() != SubmissionPhase::Submitted => Some(Action::FocusNext),
            KeyCode::BackTab if self.form.phase() != SubmissionPhase::Submitted => Some(Action::FocusPrevious),
            _ => None,
        }
    }

    /// Route a key to the focused field, falling back to quit keys
    fn handle_field_key(&mut self, key: KeyEvent) -> Action {
        if self.form.phase() == SubmissionPhase::Submitted {
            return match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                _ => self.thank_you.handle_key_events(key),
            };
        }

        match self.focus {
            FocusTarget::Comment => match key.code {
                KeyCode::Esc => Action::Focus(FocusTarget::Scale),
                _ => self.comment.handle_key_events(key),
            },
            FocusTarget::Scale => match key.code {
                KeyCode::Char('q') => Action::Quit,
                KeyCode::Esc if self.scale.hovered().is_none() => Action::Quit,
                _ => self.scale.handle_key_events(key),
            },
            FocusTarget::SubmitButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Action::Submit,
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                _ => Action::None,
            },
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled || self.show_logs || self.form.phase() == SubmissionPhase::Submitted {
            return Action::None;
        }

        let action = self.scale.handle_mouse_events(mouse);
        if !matches!(action, Action::None) {
            return action;
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let position = Position::new(mouse.column, mouse.row);
            if self.button_area.contains(position) {
                return Action::Submit;
            }
            if self.comment_area.contains(position) {
                return Action::Focus(FocusTarget::Comment);
            }
            if self.scale.cell_at(mouse.column, mouse.row).is_some() {
                return Action::Focus(FocusTarget::Scale);
            }
        }
        Action::None
    }

    /// Apply an action to the form and UI state
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::CommitScore(score) => {
                match self.form.update_score(score) {
                    Ok(()) => log::info!("Score committed: {}", score),
                    Err(e) => log::warn!("Score {} not applied: {}", score, e),
                }
                Action::None
            }
            Action::UpdateComment(text) => {
                if let Err(e) = self.form.update_comment(text) {
                    log::warn!("Comment not applied: {}", e);
                }
                Action::None
            }
            Action::FocusNext => {
                self.set_focus(self.focus.next());
                Action::None
            }
            Action::FocusPrevious => {
                self.set_focus(self.focus.previous());
                Action::None
            }
            Action::Focus(target) => {
                self.set_focus(target);
                Action::None
            }
            Action::Submit => {
                self.start_submission();
                Action::None
            }
            Action::SubmissionSucceeded(receipt) => {
                match self.form.finish_submit(Ok(receipt)) {
                    Ok(receipt) => log::info!("Response submitted, reference {}", receipt.reference()),
                    Err(e) => log::warn!("Ignoring submission result: {}", e),
                }
                Action::None
            }
            Action::SubmissionFailed(error) => {
                match self.form.finish_submit(Err(error)) {
                    Err(e) if e.is_user_facing() => log::info!("Submission failed, back to editing: {}", e),
                    Err(e) => log::warn!("Ignoring submission result: {}", e),
                    Ok(_) => {}
                }
                Action::None
            }
            Action::Reset => {
                match self.form.reset() {
                    Ok(()) => {
                        log::info!("Form reset for a new response");
                        self.comment.set_text("");
                        self.scale.selector.set_hover_preview(None);
                        self.set_focus(FocusTarget::Scale);
                    }
                    Err(e) => log::warn!("Reset ignored: {}", e),
                }
                Action::None
            }
            Action::ShowLogs(show) => {
                self.show_logs = show;
                if show {
                    self.logs_dialog.reset_scroll();
                }
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.scale.set_icons(self.icons.clone());
                self.thank_you.icons = self.icons.clone();
                log::info!("Icon theme: {:?}", self.icons.theme());
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            Action::None => Action::None,
        }
    }

    fn start_submission(&mut self) {
        match self.form.begin_submit() {
            Ok(response) => {
                log::info!(
                    "Submitting score {} ({} chars of comment)",
                    response.score,
                    response.comment.chars().count()
                );
                let task_id = self
                    .task_manager
                    .spawn_submission(Arc::clone(&self.submitter), response, self.policy);
                log::debug!("Submission running as task {}", task_id);
            }
            // Already reported to the user through a toast
            Err(e) if e.is_user_facing() => {
                log::info!("Submit rejected: {}", e);
                if matches!(e, FormError::NoScoreSelected) {
                    self.set_focus(FocusTarget::Scale);
                }
            }
            Err(e) => log::warn!("Submit ignored: {}", e),
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received action {:?}", action);
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        for (task_id, description) in completed_tasks {
            log::debug!("Background: task {} finished ({})", task_id, description);
        }

        actions
    }

    /// Apply pending background results and expire toasts; true when something changed
    pub fn tick(&mut self) -> bool {
        let actions = self.process_background_actions();
        let changed = !actions.is_empty();
        for action in actions {
            self.handle_app_action(action);
        }
        let expired = self.toasts.prune();
        self.sync_component_data();
        changed || expired > 0
    }

    /// Wait for the next background result and apply it
    pub async fn wait_for_background_action(&mut self) -> Option<Action> {
        let action = self.background_action_rx.recv().await?;
        self.handle_app_action(action.clone());
        self.task_manager.cleanup_finished_tasks();
        self.sync_component_data();
        Some(action)
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => {
                if self.show_logs {
                    self.logs_dialog.handle_key_events(key)
                } else if let Some(action) = self.handle_global_key(key) {
                    action
                } else {
                    self.handle_field_key(key)
                }
            }
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.handle_app_action(action);
        self.sync_component_data();
        action
    }

    fn instructions(&self) -> Vec<InstructionShortcut> {
        use shortcuts::*;
        match self.form.phase() {
            SubmissionPhase::Submitted => vec![ENTER_ANOTHER, SEPARATOR, F2_LOGS, SEPARATOR, QUIT],
            _ => vec![
                TAB_FOCUS,
                SEPARATOR,
                ARROWS_PREVIEW,
                SEPARATOR,
                ENTER_SELECT,
                SEPARATOR,
                CTRL_S_SUBMIT,
                SEPARATOR,
                F2_LOGS,
                SEPARATOR,
                QUIT,
            ],
        }
    }

    fn render_header(&self, f: &mut Frame, rect: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.text.title.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(self.text.subtitle.as_str(), Style::default().fg(Color::Gray))),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
    }

    fn render_question(&self, f: &mut Frame, rect: Rect) {
        let line = Line::from(vec![
            Span::styled(
                self.text.question.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", REQUIRED_MARKER), Style::default().fg(Color::Red)),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
    }

    fn render_submit_button(&mut self, f: &mut Frame, rect: Rect) {
        let submitting = self.form.phase() == SubmissionPhase::Submitting;
        let label = if submitting {
            format!("{} {}", self.icons.spinner(), BUTTON_SUBMITTING)
        } else {
            format!("{} {}", self.icons.send(), BUTTON_SUBMIT)
        };

        let mut style = Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD);
        if submitting {
            style = Style::default().fg(Color::Gray).bg(Color::DarkGray);
        } else if self.focus == FocusTarget::SubmitButton {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let width = u16::try_from(label.chars().count() + 6).unwrap_or(rect.width).min(rect.width);
        let row = rect.y + rect.height.saturating_sub(1) / 2;
        let button = Rect::new(rect.x + (rect.width - width) / 2, row, width, rect.height.min(1));
        self.button_area = button;
        f.render_widget(
            Paragraph::new(Span::styled(format!("   {}   ", label), style)).alignment(Alignment::Center),
            button,
        );
    }

    fn render_form_card(&mut self, f: &mut Frame, area: Rect) {
        let card = LayoutManager::card_rect(area, LayoutManager::CARD_HEIGHT);
        let block = create_card_block("", ACCENT);
        let inner = block.inner(card);
        f.render_widget(block, card);

        let rows = LayoutManager::card_layout(inner);
        self.render_header(f, rows.header);
        self.render_question(f, rows.question);
        self.scale.render(f, rows.scale);
        self.comment_area = rows.comment;
        self.comment.render(f, rows.comment);
        self.render_submit_button(f, rows.button);
    }

    fn render_thank_you_card(&mut self, f: &mut Frame, area: Rect) {
        let card = LayoutManager::card_rect(area, THANK_YOU_CARD_HEIGHT);
        let block = create_card_block("", Color::Green);
        let inner = block.inner(card);
        f.render_widget(block, card);
        self.thank_you.render(f, inner);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_event(EventType::Key(key))
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.handle_event(EventType::Mouse(mouse))
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let page = LayoutManager::page_layout(rect, !self.text.banner.is_empty(), !self.text.footer.is_empty());

        if let Some(banner) = page.banner {
            let paragraph = Paragraph::new(Span::styled(
                self.text.banner.as_str(),
                Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .style(Style::default().bg(ACCENT));
            f.render_widget(paragraph, banner);
        }

        let [card_area, instructions_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(page.main);

        if self.form.phase() == SubmissionPhase::Submitted {
            self.render_thank_you_card(f, card_area);
        } else {
            self.render_form_card(f, card_area);
        }
        f.render_widget(create_instructions_paragraph(&self.instructions()), instructions_area);

        if let Some(footer) = page.footer {
            let paragraph = Paragraph::new(Span::styled(
                self.text.footer.as_str(),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center);
            f.render_widget(paragraph, footer);
        }

        render_toasts(f, rect, &self.toasts, &self.icons);

        if self.show_logs {
            self.logs_dialog.render(f, rect);
        }
    }
}
