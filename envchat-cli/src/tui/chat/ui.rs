//! Chat UI rendering components

use super::input::{HELP_TEXT, QUICK_KEYS, is_command};
use super::panels::{LABEL_MAX_CHARS, RESOURCES, truncate_label};
use super::runner::ChatOptions;
use super::view::ChatView;
use crate::tui::theme;
use envchat_session::{Sender, Session};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Below this width the side panels are hidden
const SIDEBAR_MIN_WIDTH: u16 = 100;
const SIDEBAR_WIDTH: u16 = 30;
const LOADING_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(
        frame: &mut Frame,
        session: &Session,
        view: &mut ChatView,
        options: &ChatOptions,
    ) {
        let area = frame.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        Self::render_header(frame, rows[0], session, view, options);

        let body = if area.width >= SIDEBAR_MIN_WIDTH {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(SIDEBAR_WIDTH),
                    Constraint::Min(30),
                    Constraint::Length(SIDEBAR_WIDTH),
                ])
                .split(rows[1]);
            Self::render_left_panel(frame, columns[0], session, options);
            Self::render_right_panel(frame, columns[2], session, view, options);
            columns[1]
        } else {
            rows[1]
        };

        let centre = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(body);

        if view.show_help {
            Self::render_help(frame, centre[0]);
        } else {
            Self::render_messages(frame, centre[0], session, view);
        }
        Self::render_input(frame, centre[1], session);
        Self::render_help_bar(frame, rows[2], session);
    }

    fn render_header(
        frame: &mut Frame,
        area: Rect,
        session: &Session,
        view: &ChatView,
        options: &ChatOptions,
    ) {
        let mut spans = vec![
            Span::styled(" 🌿 Nuclear & Environment AI Assistant ", theme::title()),
            Span::styled("│ ", theme::border()),
            Span::styled(options.endpoint.as_str(), theme::muted()),
        ];
        if session.is_busy() {
            spans.push(Span::styled(
                format!(" {} ", LOADING_FRAMES[view.loading_frame % LOADING_FRAMES.len()]),
                theme::loading(),
            ));
        }
        if let Some(status) = &view.status_message {
            spans.push(Span::styled(format!(" │ {status} "), theme::muted()));
        }

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_left_panel(frame: &mut Frame, area: Rect, session: &Session, options: &ChatOptions) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(6)])
            .split(area);

        let mut lines = Vec::new();
        for (index, question) in options
            .quick_questions
            .iter()
            .take(usize::from(QUICK_KEYS))
            .enumerate()
        {
            lines.push(Line::from(vec![
                Span::styled(format!("F{} ", index + 1), theme::key_hint()),
                Span::styled(question.as_str(), theme::text()),
            ]));
        }
        let questions = Paragraph::new(lines)
            .block(panel_block(" Quick Questions "))
            .wrap(Wrap { trim: true });
        frame.render_widget(questions, parts[0]);

        let stats = session.stats();
        let stat_line = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(label, theme::muted()),
                Span::styled(value, theme::stat_value()),
            ])
        };
        let lines = vec![
            stat_line("Questions:     ", stats.questions.to_string()),
            stat_line("Answers:       ", stats.answers.to_string()),
            stat_line("Total:         ", stats.total.to_string()),
            stat_line("Response Rate: ", format!("{}%", stats.response_rate)),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(panel_block(" Chat Stats ")),
            parts[1],
        );
    }

    fn render_right_panel(
        frame: &mut Frame,
        area: Rect,
        session: &Session,
        view: &ChatView,
        options: &ChatOptions,
    ) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),
                Constraint::Length(5),
                Constraint::Length(RESOURCES.len() as u16 * 2 + 2),
            ])
            .split(area);

        let recent = session.recent_questions(options.recent_limit);
        let lines: Vec<Line> = if recent.is_empty() {
            vec![Line::from(Span::styled("No questions yet", theme::muted()))]
        } else {
            recent
                .iter()
                .enumerate()
                .map(|(index, message)| {
                    Line::from(vec![
                        Span::styled(format!("Alt+{} ", index + 1), theme::key_hint()),
                        Span::styled(
                            truncate_label(&message.text, LABEL_MAX_CHARS),
                            theme::text(),
                        ),
                    ])
                })
                .collect()
        };
        frame.render_widget(
            Paragraph::new(lines)
                .block(panel_block(" Recent Questions "))
                .wrap(Wrap { trim: true }),
            parts[0],
        );

        let fact = Line::from(vec![
            Span::raw(format!("{} ", view.fact.icon)),
            Span::styled(view.fact.text, theme::text()),
        ]);
        frame.render_widget(
            Paragraph::new(fact)
                .block(panel_block(" Did you know? "))
                .wrap(Wrap { trim: true }),
            parts[1],
        );

        let mut lines = Vec::new();
        for resource in RESOURCES.iter() {
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", resource.icon)),
                Span::styled(resource.text, theme::text()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", resource.url),
                theme::muted(),
            )));
        }
        frame.render_widget(
            Paragraph::new(lines).block(panel_block(" Resources ")),
            parts[2],
        );
    }

    /// Render messages area
    fn render_messages(frame: &mut Frame, area: Rect, session: &Session, view: &mut ChatView) {
        let inner_height = area.height.saturating_sub(2) as usize;
        let mut lines: Vec<Line> = Vec::new();

        if session.history().is_empty() {
            lines.push(Line::from(Span::styled(
                "Ask anything about nuclear energy and the environment.",
                theme::muted(),
            )));
            lines.push(Line::from(Span::styled(
                "Pick a quick question with F1-F6 or type below.",
                theme::muted(),
            )));
        }

        for message in session.history() {
            let (prefix, style) = match message.sender {
                Sender::User => ("You: ", theme::user_prefix()),
                Sender::Bot => ("Assistant: ", theme::bot_prefix()),
            };

            let mut content = message.text.lines();
            lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(content.next().unwrap_or(""), theme::text()),
            ]));
            let indent = " ".repeat(prefix.len());
            for line in content {
                lines.push(Line::from(format!("{indent}{line}")));
            }
            lines.push(Line::from(""));
        }

        if session.is_busy() {
            lines.push(Line::from(Span::styled(
                format!(
                    "Assistant: {} typing...",
                    LOADING_FRAMES[view.loading_frame % LOADING_FRAMES.len()]
                ),
                theme::loading(),
            )));
        }

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        // Rows after wrapping, not logical lines
        let rows = para.line_count(area.width.saturating_sub(2));
        let max_scroll = rows.saturating_sub(inner_height);
        let max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX - 1);
        view.max_scroll = max_scroll;
        let scroll = if view.scroll_offset == u16::MAX {
            max_scroll
        } else {
            view.scroll_offset.min(max_scroll)
        };

        let para = para
            .block(panel_block(" Conversation "))
            .scroll((scroll, 0));
        frame.render_widget(para, area);
    }

    fn render_help(frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = HELP_TEXT
            .lines()
            .map(|line| Line::from(Span::styled(line, theme::text())))
            .collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_active())
            .title(Span::styled(" Help (Esc to close) ", theme::section_title()));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Render input area
    fn render_input(frame: &mut Frame, area: Rect, session: &Session) {
        let busy = session.is_busy();
        let input = session.pending_input();

        let display_input = if busy {
            "Waiting for reply...".to_string()
        } else if input.is_empty() {
            "Ask about nuclear energy or the environment...".to_string()
        } else {
            let mut chars: Vec<char> = input.chars().collect();
            if session.cursor_pos() >= chars.len() {
                chars.push('_');
            } else {
                chars.insert(session.cursor_pos(), '|');
            }
            chars.into_iter().collect()
        };
        let input_style = if busy || input.is_empty() {
            theme::muted()
        } else {
            theme::text()
        };

        let input_line = Line::from(vec![
            Span::styled("> ", theme::user_prefix()),
            Span::styled(display_input, input_style),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if busy {
                theme::border()
            } else {
                theme::border_active()
            })
            .title(if is_command(input) {
                " Command "
            } else {
                " Message "
            });

        frame.render_widget(Paragraph::new(input_line).block(block), area);
    }

    /// Render help bar
    fn render_help_bar(frame: &mut Frame, area: Rect, session: &Session) {
        let help_text = if session.is_busy() {
            Line::from(Span::styled(" Waiting for the assistant... ", theme::loading()))
        } else {
            Line::from(vec![
                Span::styled(" Enter", theme::key_hint()),
                Span::raw(": Send │ "),
                Span::styled("F1-F6", theme::key_hint()),
                Span::raw(": Quick │ "),
                Span::styled("Alt+1-5", theme::key_hint()),
                Span::raw(": Recent │ "),
                Span::styled("/help", theme::key_hint()),
                Span::raw(": Commands │ "),
                Span::styled("Ctrl+Q", theme::key_destructive()),
                Span::raw(": Exit "),
            ])
        };
        frame.render_widget(Paragraph::new(help_text), area);
    }
}

fn panel_block(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border())
        .title(Span::styled(title, theme::section_title()))
}
