use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::evaluate::BudgetSummary;
use crate::money::format_amount;
use crate::ui::theme;
use crate::ui::util::{progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, summary: &BudgetSummary) {
    if !summary.has_expenses() {
        render_empty(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_bar_chart(f, chunks[0], summary);
    render_shares(f, chunks[1], summary);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No expenses entered yet", theme::dim_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Use +/- or Enter on a category, or :set <category> <amount>",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Expense Distribution ", theme::title_style())),
    );
    f.render_widget(msg, area);
}

fn render_bar_chart(f: &mut Frame, area: Rect, summary: &BudgetSummary) {
    let bars: Vec<Bar> = summary
        .slices
        .iter()
        .map(|slice| {
            let color = theme::category_color(slice.category);
            Bar::default()
                .value(slice.amount.round().to_u64().unwrap_or(0))
                .text_value(format_amount(slice.amount))
                .label(Line::from(truncate(slice.category.as_str(), 10)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(" Expense Distribution ", theme::title_style())),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .label_style(theme::normal_style());

    f.render_widget(chart, area);
}

fn render_shares(f: &mut Frame, area: Rect, summary: &BudgetSummary) {
    let bar_width = (area.width as usize).saturating_sub(32).clamp(4, 20);

    let items: Vec<ListItem> = summary
        .slices
        .iter()
        .map(|slice| {
            let color = theme::category_color(slice.category);
            let ratio = (slice.share / rust_decimal::Decimal::ONE_HUNDRED)
                .to_f64()
                .unwrap_or(0.0);
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(
                    format!("{:<12}", truncate(slice.category.as_str(), 11)),
                    theme::normal_style(),
                ),
                Span::styled(progress_bar(ratio, bar_width), Style::default().fg(color)),
                Span::styled(
                    format!(" {:>6}", slice.share_label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Share of Spending ", theme::title_style())),
    );
    f.render_widget(list, area);
}
