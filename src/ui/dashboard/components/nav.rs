//! NAV summary cards
//!
//! Renders the total/spot/futures valuation cards

use super::super::state::DashboardState;
use super::super::utils::format_currency;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Render the three NAV cards side by side.
pub fn render_nav_cards(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_nav_card(f, card_chunks[0], "Total NAV", state.nav.total);
    render_nav_card(f, card_chunks[1], "Spot NAV", state.nav.spot);
    render_nav_card(f, card_chunks[2], "Futures NAV", state.nav.fut);
}

fn render_nav_card(f: &mut Frame, area: ratatui::layout::Rect, title: &str, value: f64) {
    let card = Paragraph::new(Line::from(Span::styled(
        format_currency(value),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .title(title)
            .title_style(Style::default().fg(Color::Gray))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(card, area);
}
