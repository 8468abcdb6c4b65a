//! Dashboard header component
//!
//! Renders the title and refresh countdown gauge

use super::super::state::DashboardState;
use crate::consts::cli_consts::refresh;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and refresh progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!("TRADING BOT DASHBOARD v{}", version);

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Countdown to the next refresh cycle
    let (progress_text, progress_percent) = match state.refresh_started_at() {
        Some(started_at) => {
            let interval_secs = refresh::interval().as_secs();
            let elapsed_secs = started_at.elapsed().as_secs().min(interval_secs);
            let remaining_secs = interval_secs - elapsed_secs;
            let progress = if interval_secs > 0 {
                ((elapsed_secs as f64 / interval_secs as f64) * 100.0) as u16
            } else {
                100
            };
            (
                format!("Next refresh in {}s", remaining_secs),
                progress.min(100),
            )
        }
        None => {
            // Animated dots while the first cycle is still in flight
            let dots = ".".repeat(state.tick / 5 % 4);
            (format!("Waiting for first snapshot{}", dots), 0)
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
