use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::recipe::{Category, Recipe};

/// Filter bar with the "everything" slot first, the active slot highlighted
pub fn filter_bar(filter: Option<Category>, slots: &[(Option<Category>, String)]) -> Line<'static> {
    let active = Style::default()
        .fg(Color::Black)
        .bg(Color::LightRed)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::Gray);

    let mut spans = Vec::new();
    for (i, (slot, label)) in slots.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", label),
            if filter == *slot { active } else { inactive },
        ));
    }

    Line::from(spans)
}

/// Library slots carry per-category recipe counts
fn library_slots(app: &App) -> Vec<(Option<Category>, String)> {
    let mut slots = vec![(None, format!("All {}", app.library.recipes.len()))];
    for (category, count) in app.library.category_counts() {
        slots.push((Some(category), format!("{} {}", category, count)));
    }
    slots
}

fn recipe_card(recipe: &Recipe) -> ListItem<'static> {
    let title_line = Line::from(Span::styled(
        recipe.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    let meta_line = Line::from(vec![
        Span::styled(
            format!("  {} ", recipe.total_time),
            Style::default().fg(Color::LightRed),
        ),
        Span::styled(
            format!("| {} ", recipe.difficulty),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("| {}", recipe.category),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    ListItem::new(vec![title_line, meta_line, Line::raw("")])
}

/// Recipes tab: header, filter bar, and the filtered recipe cards
pub fn render_library(app: &App, f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "My Recipes",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your personal kitchen, organized",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    f.render_widget(header, chunks[0]);

    f.render_widget(
        Paragraph::new(filter_bar(app.library.filter, &library_slots(app))),
        chunks[1],
    );

    let recipes = app.library.filtered();
    if recipes.is_empty() {
        let empty = Paragraph::new("No recipes in this category")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, chunks[2]);
        return;
    }

    let items: Vec<ListItem> = recipes.iter().map(|r| recipe_card(r)).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::Rgb(60, 30, 20)))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.library.cursor.min(recipes.len() - 1)));
    f.render_stateful_widget(list, chunks[2], &mut state);
}
