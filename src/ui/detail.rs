use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::detail::{DetailRow, DetailState};

/// Opened recipe: title banner, ingredient checklist, numbered steps with
/// timer affordances, and the key hints.
pub fn render_detail(detail: &DetailState, f: &mut Frame, area: Rect) {
    let recipe = &detail.recipe;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            recipe.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} | {} | {}",
                recipe.total_time, recipe.difficulty, recipe.category
            ),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(banner, chunks[0]);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "Ingredients",
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    )));

    for (i, ingredient) in recipe.ingredients.iter().enumerate() {
        let selected = detail.current_row() == Some(DetailRow::Ingredient(i));
        let checked = detail.checked.contains(&i);
        let marker = if checked { "[x]" } else { "[ ]" };

        let mut style = if checked {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
        };
        if selected {
            style = style.bg(Color::Rgb(60, 30, 20));
        }

        lines.push(Line::from(Span::styled(
            format!("{} {}", marker, ingredient),
            style,
        )));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Preparation",
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    )));

    for (i, step) in recipe.steps.iter().enumerate() {
        let selected = detail.current_row() == Some(DetailRow::Step(i));

        let mut style = Style::default();
        if selected {
            style = style.bg(Color::Rgb(60, 30, 20));
        }

        let timer_hint = match step.duration_secs {
            Some(secs) => format!("  [start {} min timer]", secs / 60),
            None => String::new(),
        };

        lines.push(Line::from(vec![
            Span::styled(format!("Step {}: ", i + 1), style.fg(Color::LightRed)),
            Span::styled(step.text.clone(), style),
            Span::styled(timer_hint, style.fg(Color::Yellow)),
        ]));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(body, chunks[1]);

    let hints = Paragraph::new(
        "(space) check / start timer  (p) pause  (x) dismiss timer  (o) share  (esc) back",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, chunks[2]);
}
