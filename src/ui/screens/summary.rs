use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use rust_decimal::Decimal;

use crate::evaluate::{Advice, AdviceOutcome, BudgetSummary};
use crate::ui::theme;

pub(crate) fn render_cards(f: &mut Frame, area: Rect, summary: &BudgetSummary) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_card(f, cards[0], "Total Budget", summary.budget_display(), theme::ACCENT);
    render_card(
        f,
        cards[1],
        "Total Expenses",
        summary.total_expenses_display(),
        theme::RED,
    );
    render_card(
        f,
        cards[2],
        "Remaining Budget",
        summary.remaining_display(),
        if summary.remaining() >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, display: String, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

pub(crate) fn render_advice(f: &mut Frame, area: Rect, advice: Option<&AdviceOutcome>) {
    let line = match advice {
        None => Line::from(Span::styled(
            "Fill in your budget and expenses, then press a for advice.",
            theme::dim_style(),
        )),
        Some(AdviceOutcome::Warning(msg)) => Line::from(vec![
            Span::styled(
                "⚠ ",
                Style::default()
                    .fg(theme::YELLOW)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*msg, Style::default().fg(theme::YELLOW)),
        ]),
        Some(AdviceOutcome::Advice(advice)) => Line::from(Span::styled(
            advice.message(),
            Style::default()
                .fg(advice_color(*advice))
                .add_modifier(Modifier::ITALIC),
        )),
    };

    let panel = Paragraph::new(vec![Line::from(""), line])
        .wrap(Wrap { trim: true })
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(Span::styled(" Financial Advice ", theme::title_style())),
        );
    f.render_widget(panel, area);
}

fn advice_color(advice: Advice) -> Color {
    match advice {
        Advice::WithinBudget => theme::GREEN,
        Advice::ExactlyUsed => theme::YELLOW,
        Advice::Exceeded => theme::RED,
    }
}
