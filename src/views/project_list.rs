//! Project list screen

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::status::{draw_key_hints, draw_status};
use super::Component;
use crate::action::Action;
use crate::output::format_created;
use crate::session::Session;

const PAGE: isize = 10;

#[derive(Default)]
pub struct ProjectListView {
    table_state: TableState,
    /// Set after `d` until the deletion is confirmed or abandoned
    confirm_delete: bool,
}

impl ProjectListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.confirm_delete
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let header = Paragraph::new(Line::from(vec![
            Span::raw(" MongoDB Atlas Projects Manager ").bold().fg(Color::Cyan),
            Span::raw(format!("{} projects", session.projects().len())).dim(),
        ]))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, area);
    }

    fn draw_table(&mut self, frame: &mut Frame, area: Rect, session: &Session) {
        let rows: Vec<Row> = session
            .projects()
            .iter()
            .map(|project| {
                Row::new(vec![
                    Cell::from(project.name.clone()),
                    Cell::from(project.id.clone()).style(Style::default().fg(Color::DarkGray)),
                    Cell::from(format_created(&project.created)),
                    Cell::from(project.cluster_count.to_string()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(35),
            Constraint::Length(26),
            Constraint::Length(19),
            Constraint::Length(9),
        ];

        let header = Row::new(vec![
            Cell::from("PROJECT NAME"),
            Cell::from("PROJECT ID"),
            Cell::from("CREATED"),
            Cell::from("CLUSTERS"),
        ])
        .style(Style::default().add_modifier(Modifier::DIM))
        .bottom_margin(1);

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(" Projects "))
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        self.table_state.select(session.selected());
        frame.render_stateful_widget(table, area, &mut self.table_state);
    }
}

impl Component for ProjectListView {
    fn handle_key_event(&mut self, key: KeyEvent, session: &Session) -> Option<Action> {
        if self.confirm_delete {
            self.confirm_delete = false;
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::Delete),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('a') => Some(Action::Authenticate),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('v') => Some(Action::OpenClusters),
            KeyCode::Enter => match session.selected() {
                Some(index) => Some(Action::SelectRow(index)),
                None => Some(Action::OpenClusters),
            },
            KeyCode::Char('d') => {
                if session.selected_project().is_some() {
                    self.confirm_delete = true;
                    None
                } else {
                    // lets the session report the missing selection
                    Some(Action::Delete)
                }
            }
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelection(-1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelection(1)),
            KeyCode::PageUp => Some(Action::MoveSelection(-PAGE)),
            KeyCode::PageDown => Some(Action::MoveSelection(PAGE)),
            _ => None,
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, session: &Session) {
        let layout = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

        self.draw_header(frame, layout[0], session);
        self.draw_table(frame, layout[1], session);
        draw_status(frame, layout[2], session.status(), session.is_loading());

        if self.is_confirming_delete() {
            let target = session
                .selected_project()
                .map(|p| format!("{} ({})", p.name, p.id))
                .unwrap_or_default();
            let prompt = Paragraph::new(Line::from(vec![
                Span::raw(" Delete project ").fg(Color::Red).bold(),
                Span::raw(target).bold(),
                Span::raw("? This cannot be undone. ").fg(Color::Red),
                Span::raw("[y]").fg(Color::Yellow),
                Span::raw(" confirm  ").dim(),
                Span::raw("[any]").fg(Color::Yellow),
                Span::raw(" cancel").dim(),
            ]));
            frame.render_widget(prompt, layout[3]);
        } else {
            draw_key_hints(
                frame,
                layout[3],
                &[
                    ("a", "authenticate"),
                    ("enter/v", "clusters"),
                    ("d", "delete"),
                    ("r", "refresh"),
                    ("q", "quit"),
                ],
            );
        }
    }
}
