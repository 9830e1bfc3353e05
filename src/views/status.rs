//! Status line and key hints shared by both screens

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::session::{Severity, Status};

pub trait SeverityExt {
    fn color(&self) -> Color;
}

impl SeverityExt for Severity {
    fn color(&self) -> Color {
        match self {
            Severity::Neutral => Color::White,
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
        }
    }
}

pub fn draw_status(frame: &mut Frame, area: Rect, status: &Status, loading: bool) {
    let mut spans = Vec::new();
    if loading {
        spans.push(Span::raw("… ").fg(Color::Yellow));
    }
    spans.push(Span::styled(
        status.message.clone(),
        Style::default()
            .fg(status.severity.color())
            .add_modifier(if status.severity == Severity::Error {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
    ));

    let para = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Status "),
    );
    frame.render_widget(para, area);
}

/// Render `[key] label` pairs on one line
pub fn draw_key_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::raw(format!(" [{key}]")).fg(Color::Yellow));
        spans.push(Span::raw(format!(" {label} ")).dim());
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
