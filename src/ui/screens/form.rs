use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::money::format_amount;
use crate::ui::app::{App, Field, InputMode};
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(Field::COUNT as u16 + 4), // Fields
            Constraint::Length(3),                    // Advice button
        ])
        .split(area);

    render_fields(f, chunks[0], app);
    render_advice_button(f, chunks[1]);
}

fn render_fields(f: &mut Frame, area: Rect, app: &App) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let label_width = inner_width.saturating_sub(16).max(8);

    let mut items: Vec<ListItem> = Vec::with_capacity(Field::COUNT + 1);
    for i in 0..Field::COUNT {
        let Some(field) = Field::at(i) else { continue };
        if i == 1 {
            items.push(ListItem::new(Line::from(Span::styled(
                " Expense Categories",
                Style::default()
                    .fg(theme::YELLOW)
                    .add_modifier(Modifier::BOLD),
            ))));
        }

        let selected = i == app.field_index;
        let editing = selected && app.input_mode == InputMode::Editing;
        let style = if selected {
            theme::selected_style()
        } else if i % 2 == 0 {
            theme::alt_row_style()
        } else {
            theme::normal_style()
        };

        let value = if editing {
            format!("{}▏", app.command_input)
        } else {
            format_amount(app.field_value(field))
        };
        let label = truncate(field.label(), label_width);

        items.push(
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {label:<label_width$}"), style),
                Span::styled(format!("{value:>14} "), style),
            ]))
            .style(style),
        );
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Quick Input ", theme::title_style())),
    );
    f.render_widget(list, area);
}

fn render_advice_button(f: &mut Frame, area: Rect) {
    let button = Paragraph::new(Line::from(vec![
        Span::styled(
            " Get Financial Advice ",
            Style::default()
                .fg(theme::HEADER_BG)
                .bg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  press a", theme::dim_style()),
    ]))
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY)),
    );
    f.render_widget(button, area);
}
