//! Dashboard footer component

use super::super::state::DashboardState;
use super::super::utils::format_compact_timestamp;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer with quit instructions and session status.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let uptime = state.start_time.elapsed();
    let uptime_text = if uptime.as_secs() >= 3600 {
        format!(
            "{}h {}m",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60
        )
    } else {
        format!("{}m {}s", uptime.as_secs() / 60, uptime.as_secs() % 60)
    };

    let mut footer_text = format!(
        "[Q] Quit | {} | Up {}",
        state.environment.api_base_url(),
        uptime_text
    );
    if let Some(timestamp) = &state.last_status_at {
        footer_text.push_str(&format!(
            " | Updated {}",
            format_compact_timestamp(timestamp)
        ));
    }
    if state.fetch_failures > 0 {
        footer_text.push_str(&format!(" | {} failed fetches", state.fetch_failures));
    }

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
