//! Recent signals panel component
//!
//! Renders screener signals grouped by market

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, format_expected_return};
use crate::model::MarketKind;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the signals panel with the SPOT and FUT groups in fixed order.
pub fn render_signals_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines: Vec<Line> = Vec::new();

    for kind in MarketKind::ALL {
        lines.push(Line::from(Span::styled(
            kind.to_string(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )));

        // An absent group renders as a header with no entries.
        for signal in state.signals.market(kind) {
            let action_color = match signal.action.as_str() {
                "BUY" | "LONG" => Color::Green,
                "SELL" | "SHORT" => Color::Red,
                _ => Color::Yellow,
            };
            lines.push(Line::from(vec![
                Span::styled(
                    signal.symbol.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" | "),
                Span::styled(signal.action.clone(), Style::default().fg(action_color)),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "  Score: {:.2} | ATR%: {:.2} | Exp: {}",
                    signal.score,
                    signal.atr_pct,
                    format_expected_return(signal.expected_return)
                ),
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines.push(Line::from(""));
    }

    if let Some(timestamp) = &state.last_signals_at {
        lines.push(Line::from(Span::styled(
            format!("updated {}", format_compact_timestamp(timestamp)),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let signals_block = Block::default()
        .title("RECENT SIGNALS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let signals_paragraph = Paragraph::new(lines)
        .block(signals_block)
        .wrap(Wrap { trim: false });
    f.render_widget(signals_paragraph, area);
}
