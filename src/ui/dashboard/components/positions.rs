//! Open positions table component

use super::super::state::DashboardState;
use super::super::utils::{format_price, format_qty};

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table};

/// Render the open positions table.
pub fn render_positions_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header = Row::new(vec!["Symbol", "Side", "Qty", "SL", "TP", "Status"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .positions
        .iter()
        .map(|pos| {
            let side_color = match pos.side.as_str() {
                "LONG" | "BUY" => Color::Green,
                "SHORT" | "SELL" => Color::Red,
                _ => Color::White,
            };
            Row::new(vec![
                Cell::from(pos.symbol.clone())
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(pos.side.clone()).style(Style::default().fg(side_color)),
                Cell::from(format_qty(pos.qty)),
                Cell::from(format_price(pos.sl)),
                Cell::from(format_price(pos.tp)),
                Cell::from(pos.status.clone()).style(Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(6),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title("OPEN POSITIONS")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );

    f.render_widget(table, area);
}
