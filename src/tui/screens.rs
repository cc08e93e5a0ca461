use super::navigation::FormFocus;
use super::state::FormState;
use crate::install::messages::text;
use crate::install::{AccountField, ValidationCode, ACCOUNT_FIELDS};
use crate::layout::PageChrome;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

const PASSWORD_MASK: char = '•';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRowView {
    pub label: String,
    pub value: String,
    pub is_placeholder: bool,
    pub focused: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallViewModel {
    pub header: String,
    pub title: String,
    pub description: String,
    pub rows: Vec<FieldRowView>,
    pub password_hint: String,
    pub password_hint_warning: bool,
    pub button_label: String,
    pub button_focused: bool,
    pub license_line: Option<String>,
    pub copyright: String,
    pub width_percent: u16,
    pub status_text: String,
    pub hint_text: String,
}

pub fn display_value(field: AccountField, value: &str, reveal_password: bool) -> String {
    if field == AccountField::Password && !reveal_password {
        return std::iter::repeat(PASSWORD_MASK)
            .take(value.chars().count())
            .collect();
    }
    value.to_string()
}

fn error_text(code: Option<ValidationCode>) -> Option<String> {
    code.map(|code| text(code.message_key()).to_string())
}

pub fn project_install_view_model(state: &FormState, chrome: &PageChrome) -> InstallViewModel {
    let rows = ACCOUNT_FIELDS
        .iter()
        .map(|field| {
            let raw = state.draft.value(*field);
            let (value, is_placeholder) = if raw.is_empty() {
                (text(field.placeholder_key()).to_string(), true)
            } else {
                (display_value(*field, raw, state.reveal_password), false)
            };
            FieldRowView {
                label: text(field.label_key()).to_string(),
                value,
                is_placeholder,
                focused: state.focus.field() == Some(*field),
                error: error_text(state.report.get(*field)),
            }
        })
        .collect();

    InstallViewModel {
        header: chrome.header.clone(),
        title: text("login.setAdminAccount").to_string(),
        description: text("login.setAdminAccountDesc").to_string(),
        rows,
        password_hint: text(ValidationCode::PasswordInvalid.message_key()).to_string(),
        password_hint_warning: state.report.get(AccountField::Password).is_some(),
        button_label: text("login.installBtn").to_string(),
        button_focused: state.focus == FormFocus::InstallButton,
        license_line: chrome.license.as_ref().map(|license| license.display_line()),
        copyright: chrome.copyright.clone(),
        width_percent: chrome.frame.width_percent(),
        status_text: state.status_text.clone(),
        hint_text: state.hint_text.clone(),
    }
}

fn focused_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

fn warning_style() -> Style {
    Style::default().fg(Color::Red)
}

fn muted_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn install_body_lines(view_model: &InstallViewModel) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            view_model.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(view_model.description.clone(), muted_style())),
        Line::from(""),
    ];

    for row in &view_model.rows {
        lines.push(Line::from(row.label.clone()));
        let marker = if row.focused { "> " } else { "  " };
        let value_style = if row.focused {
            focused_style()
        } else if row.is_placeholder {
            muted_style()
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(row.value.clone(), value_style),
        ]));
        if let Some(error) = &row.error {
            lines.push(Line::from(Span::styled(
                format!("  {error}"),
                warning_style(),
            )));
        }
        lines.push(Line::from(""));
    }

    let hint_style = if view_model.password_hint_warning {
        warning_style()
    } else {
        muted_style()
    };
    lines.push(Line::from(Span::styled(
        view_model.password_hint.clone(),
        hint_style,
    )));
    lines.push(Line::from(""));

    let button = format!("[ {} ]", view_model.button_label);
    let button_style = if view_model.button_focused {
        focused_style().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(button, button_style)));

    if let Some(license) = &view_model.license_line {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(license.clone(), muted_style())));
    }
    lines
}

pub(crate) fn content_rect(width_percent: u16, area: Rect) -> Rect {
    let width_percent = width_percent.min(100);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(area)[1]
}

struct PageAreas {
    header: Rect,
    content: Rect,
    status: Rect,
    footer: Rect,
}

fn page_areas(area: Rect) -> PageAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);
    PageAreas {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
        footer: chunks[3],
    }
}

fn draw_page_chrome(frame: &mut Frame<'_>, areas: &PageAreas, header: &str, copyright: &str) {
    let header = Paragraph::new(Line::from(Span::styled(
        header.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, areas.header);

    let footer = Paragraph::new(Line::from(Span::styled(
        copyright.to_string(),
        muted_style(),
    )))
    .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
    frame.render_widget(footer, areas.footer);
}

pub(crate) fn draw_install_ui(frame: &mut Frame<'_>, view_model: &InstallViewModel) {
    let areas = page_areas(frame.area());
    draw_page_chrome(frame, &areas, &view_model.header, &view_model.copyright);

    let body = Paragraph::new(install_body_lines(view_model))
        .wrap(Wrap { trim: false })
        .block(main_panel_block());
    frame.render_widget(body, content_rect(view_model.width_percent, areas.content));

    let status = Paragraph::new(vec![
        Line::from(view_model.hint_text.clone()),
        Line::from(format!("Status: {}", view_model.status_text)),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, areas.status);
}

pub(crate) fn draw_message_ui(frame: &mut Frame<'_>, chrome: &PageChrome, message: &str) {
    let areas = page_areas(frame.area());
    draw_page_chrome(frame, &areas, &chrome.header, &chrome.copyright);
    let body = Paragraph::new(Line::from(message.to_string())).block(main_panel_block());
    frame.render_widget(body, content_rect(chrome.frame.width_percent(), areas.content));
}

fn main_panel_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .padding(Padding::new(3, 3, 1, 1))
}
