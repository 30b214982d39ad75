// TUI module for rendering the terminal interface
pub mod colors;
pub mod input;

// Re-exports
pub use colors::*;
pub use input::{handle_confirm_input, handle_edit_input, handle_key_event, EditAction, KeyAction};

use crate::domain::DeleteMode;
use crate::preview::{fit_square, format_label, NO_FILE_LABEL};
use crate::session::{Session, SessionStats, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Which directory field is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirField {
    Source,
    Destination,
}

/// UI view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Main image browsing view
    Browsing,
    /// Help overlay visible
    Help,
    /// Summary screen before exit
    Summary,
    /// Confirmation dialog for delete action
    ConfirmDelete,
    /// Typing a new directory path
    Editing { field: DirField, buffer: String },
}

impl ViewState {
    fn editing(&self) -> Option<(DirField, &str)> {
        match self {
            ViewState::Editing { field, buffer } => Some((*field, buffer.as_str())),
            _ => None,
        }
    }
}

/// Renders the main screen and whichever overlay `view_state` calls for
pub fn render(frame: &mut Frame, session: &Session, view_state: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with label
            Constraint::Min(0),    // Image
            Constraint::Length(4), // Directory fields
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], session);
    render_content(frame, chunks[1], session);
    render_directories(frame, chunks[2], session, view_state.editing());
    render_footer(frame, chunks[3]);

    match view_state {
        ViewState::Help => render_help_overlay(frame),
        ViewState::Summary => render_summary(frame, &session.stats()),
        ViewState::ConfirmDelete => {
            if let Some(name) = session.cursor().current() {
                render_confirm_delete_overlay(frame, name, session.delete_mode());
            }
        }
        ViewState::Browsing | ViewState::Editing { .. } => {}
    }
}

/// The `[i/n] dir/file` label for the header
fn header_label(session: &Session) -> String {
    match session.view() {
        View::Image(rendered) => rendered.label.clone(),
        View::Failed(_) => {
            let cursor = session.cursor();
            match (cursor.directory(), cursor.current()) {
                (Some(dir), Some(name)) => {
                    format_label(dir, name, cursor.position().unwrap_or(0), cursor.len())
                }
                _ => NO_FILE_LABEL.to_string(),
            }
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, session: &Session) {
    let header = Paragraph::new(Line::from(Span::styled(
        header_label(session),
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER_COLOR))
            .title(Span::styled(
                " imgsort ",
                Style::default()
                    .fg(ACCENT_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    frame.render_widget(header, area);
}

fn render_content(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_COLOR));

    match session.view() {
        View::Image(rendered) if !rendered.is_placeholder() => {
            let inner = block.inner(area);
            let side = fit_square(inner.width, inner.height);
            let lines = rendered.halfblock_lines(side);

            let paragraph = Paragraph::new(lines)
                .block(block)
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
        }
        View::Image(_) => frame.render_widget(render_empty_state_widget(block), area),
        View::Failed(message) => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  [!] Cannot show image",
                    Style::default()
                        .fg(ACCENT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(format!("  {}", message)),
            ];

            let paragraph = Paragraph::new(lines)
                .block(block.border_style(Style::default().fg(ACCENT_PRIMARY)))
                .style(Style::default().fg(TEXT_PRIMARY))
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
    }
}

/// Creates an empty state widget for when no images are present
fn render_empty_state_widget(block: Block<'static>) -> Paragraph<'static> {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            NO_FILE_LABEL,
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The source directory has no jpg, jpeg, png, gif or bmp files.",
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(Span::styled(
            "Press s to pick another source, or r to rescan.",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
}

fn render_directories(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    editing: Option<(DirField, &str)>,
) {
    let config = session.config();
    let field_line = |field: DirField, name: &'static str, current: String| {
        let (value, style) = match editing {
            Some((f, buffer)) if f == field => (
                format!("{}▏", buffer),
                Style::default()
                    .fg(ACCENT_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            _ => (current, Style::default().fg(TEXT_PRIMARY)),
        };
        Line::from(vec![
            Span::styled(name, Style::default().fg(TEXT_SECONDARY)),
            Span::styled(value, style),
        ])
    };

    let lines = vec![
        field_line(
            DirField::Source,
            " src dir: ",
            config.src_dir.display().to_string(),
        ),
        field_line(
            DirField::Destination,
            " dst dir: ",
            config.dst_dir.display().to_string(),
        ),
    ];

    let title = if editing.is_some() {
        " Enter: save  Esc: cancel "
    } else {
        " Directories "
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER_COLOR))
            .title(title),
    );

    frame.render_widget(paragraph, area);
}

/// Renders the footer with styled controls
fn render_footer(frame: &mut Frame, area: Rect) {
    let controls = Line::from(vec![
        Span::styled(
            " → ",
            Style::default()
                .fg(ACCENT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Pos", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled(
            "← ",
            Style::default()
                .fg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Neg", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("x ", Style::default().fg(ACCENT_PRIMARY)),
        Span::styled("Del", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("↑↓ ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled("Navigate", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("r ", Style::default().fg(ACCENT_HIGHLIGHT)),
        Span::styled("Refresh", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("? ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled("Help", Style::default().fg(TEXT_SECONDARY)),
        Span::raw("  │  "),
        Span::styled("q ", Style::default().fg(TEXT_SECONDARY)),
        Span::styled("Quit", Style::default().fg(TEXT_SECONDARY)),
    ]);

    let footer = Paragraph::new(controls)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(BORDER_COLOR)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// Renders the summary screen at the end
pub fn render_summary(frame: &mut Frame, stats: &SessionStats) {
    let summary_area = centered_rect(60, 50, frame.area());

    // Clear the background
    frame.render_widget(Clear, summary_area);

    let block = Block::default()
        .title(" Session Complete ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(summary_area);
    frame.render_widget(block, summary_area);

    let count = |marker: &'static str, label: &'static str, n: usize, color| {
        Line::from(vec![
            Span::styled(marker, Style::default().fg(color)),
            Span::raw(label),
            Span::styled(
                format!("{}", n),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Summary",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        count("   + ", "Positive:  ", stats.positive, ACCENT_SECONDARY),
        count("   - ", "Negative:  ", stats.negative, ACCENT_PRIMARY),
        count("   ✗ ", "Deleted:   ", stats.deleted, TEXT_SECONDARY),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to exit",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_PRIMARY));

    frame.render_widget(paragraph, inner);
}

/// Renders the help overlay
pub fn render_help_overlay(frame: &mut Frame) {
    let help_area = centered_rect(50, 80, frame.area());

    // Clear background
    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_HIGHLIGHT))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let entry = |keys: &'static str, color, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("{:<10}", keys), Style::default().fg(color)),
            Span::raw(what),
        ])
    };

    let help_lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(ACCENT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        entry("→ / p", ACCENT_SECONDARY, "Move to dst/pos"),
        entry("← / n", ACCENT_PRIMARY, "Move to dst/neg"),
        entry("x / Del", ACCENT_PRIMARY, "Delete image"),
        Line::from(""),
        entry("↓ / j", TEXT_SECONDARY, "Next image"),
        entry("↑ / k", TEXT_SECONDARY, "Previous image"),
        entry("r", ACCENT_HIGHLIGHT, "Rescan, jump to random image"),
        Line::from(""),
        entry("s", TEXT_SECONDARY, "Edit source directory"),
        entry("o", TEXT_SECONDARY, "Edit destination directory"),
        Line::from(""),
        entry("q / Esc", TEXT_SECONDARY, "Quit"),
        entry("?", TEXT_SECONDARY, "Toggle help"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    let paragraph = Paragraph::new(help_lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_PRIMARY));

    frame.render_widget(paragraph, inner);
}

/// Renders the confirmation dialog for delete action
pub fn render_confirm_delete_overlay(frame: &mut Frame, filename: &str, mode: DeleteMode) {
    let confirm_area = centered_rect(50, 40, frame.area());

    // Clear background
    frame.render_widget(Clear, confirm_area);

    let block = Block::default()
        .title(" Confirm Delete ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT_PRIMARY))
        .style(Style::default().bg(BG_DARK));

    let inner = block.inner(confirm_area);
    frame.render_widget(block, confirm_area);

    let consequence = match mode {
        DeleteMode::Remove => "The file will be removed permanently.",
        DeleteMode::Trash => "The file will be moved to the system trash.",
    };

    let confirm_lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Delete this image?",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            filename.to_string(),
            Style::default().fg(ACCENT_HIGHLIGHT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            consequence,
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(ACCENT_SECONDARY)),
            Span::raw("es  "),
            Span::styled("[Enter]", Style::default().fg(ACCENT_SECONDARY)),
            Span::raw("     "),
            Span::styled("[N]", Style::default().fg(ACCENT_PRIMARY)),
            Span::raw("o  "),
            Span::styled("[Esc]", Style::default().fg(ACCENT_PRIMARY)),
        ]),
    ];

    let paragraph = Paragraph::new(confirm_lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(TEXT_PRIMARY));

    frame.render_widget(paragraph, inner);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
