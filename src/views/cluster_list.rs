//! Cluster list screen for one project

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
use crate::output::{format_created, truncate};
use crate::session::{Screen, Session};
use crate::types::Cluster;

pub struct ClusterListView {
    project_id: String,
    table_state: TableState,
}

fn state_color(state: &str) -> Color {
    match state.to_ascii_uppercase().as_str() {
        "IDLE" => Color::Green,
        "CREATING" | "UPDATING" | "REPAIRING" => Color::Yellow,
        "DELETING" | "DELETED" => Color::Red,
        _ => Color::DarkGray,
    }
}

impl ClusterListView {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            table_state: TableState::default(),
        }
    }

    /// Project this view was opened for
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let next = match self.table_state.selected() {
            None => 0,
            Some(current) => current.saturating_add_signed(delta).min(len - 1),
        };
        self.table_state.select(Some(next));
    }

    fn highlighted<'a>(&self, session: &'a Session) -> Option<&'a Cluster> {
        self.table_state
            .selected()
            .and_then(|i| session.clusters().get(i))
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let (name, id) = match session.screen() {
            Screen::ClusterList(project) => (project.name.as_str(), project.id.as_str()),
            Screen::ProjectList => ("", self.project_id.as_str()),
        };
        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::raw(" Clusters in Project: ").fg(Color::Cyan),
                Span::raw(name.to_string()).bold().fg(Color::Cyan),
            ]),
            Line::from(Span::raw(format!(" Project ID: {id}")).dim()),
        ])
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, area);
    }

    fn draw_table(&mut self, frame: &mut Frame, area: Rect, session: &Session) {
        let rows: Vec<Row> = session
            .clusters()
            .iter()
            .map(|cluster| {
                Row::new(vec![
                    Cell::from(cluster.name.clone()),
                    Cell::from(cluster.state_name.clone())
                        .style(Style::default().fg(state_color(&cluster.state_name))),
                    Cell::from(cluster.provider.clone()),
                    Cell::from(cluster.region.clone()),
                    Cell::from(cluster.instance_size.clone()),
                    Cell::from(cluster.mongo_version.clone()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Percentage(24),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Percentage(18),
            Constraint::Length(14),
            Constraint::Length(16),
        ];

        let header = Row::new(vec![
            Cell::from("CLUSTER NAME"),
            Cell::from("STATUS"),
            Cell::from("PROVIDER"),
            Cell::from("REGION"),
            Cell::from("INSTANCE SIZE"),
            Cell::from("MONGODB VERSION"),
        ])
        .style(Style::default().add_modifier(Modifier::DIM))
        .bottom_margin(1);

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(" Clusters "))
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn draw_detail(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let Some(cluster) = self.highlighted(session) else {
            return;
        };

        let label = |text: &'static str| Span::raw(text).dim();
        let lines = vec![
            Line::from(vec![
                label("Type: "),
                Span::raw(cluster.cluster_type.clone()),
                label("   Backup: "),
                Span::raw(if cluster.backup_enabled { "enabled" } else { "disabled" }),
                label("   Encryption at rest: "),
                Span::raw(cluster.encryption_at_rest.clone()),
                label("   Created: "),
                Span::raw(format_created(&cluster.created)),
            ]),
            Line::from(vec![
                label("Connection: "),
                Span::raw(
                    cluster
                        .connection_string
                        .as_deref()
                        .map(|cs| truncate(cs, usize::from(area.width.saturating_sub(16))))
                        .unwrap_or_else(|| "-".to_string()),
                )
                .fg(Color::Cyan),
            ]),
        ];

        let para = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", cluster.name)),
        );
        frame.render_widget(para, area);
    }
}

impl Component for ClusterListView {
    fn handle_key_event(&mut self, key: KeyEvent, session: &Session) -> Option<Action> {
        let len = session.clusters().len();
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Backspace => Some(Action::Back),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1, len);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1, len);
                None
            }
            _ => None,
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, session: &Session) {
        let len = session.clusters().len();
        match self.table_state.selected() {
            Some(i) if i >= len => self.table_state.select(len.checked_sub(1)),
            None if len > 0 => self.table_state.select(Some(0)),
            _ => {}
        }

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

        self.draw_header(frame, layout[0], session);
        self.draw_table(frame, layout[1], session);
        self.draw_detail(frame, layout[2], session);
        draw_status(frame, layout[3], session.status(), session.is_loading());
        draw_key_hints(
            frame,
            layout[4],
            &[("esc", "back"), ("j/k", "move"), ("r", "refresh"), ("q", "quit")],
        );
    }
}
