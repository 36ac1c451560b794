use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::recipe::{Category, Recipe};
use crate::ui::list::filter_bar;

fn feed_card(recipe: &Recipe) -> ListItem<'static> {
    let author = recipe
        .author
        .as_ref()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| "Community".to_string());

    let author_line = Line::from(vec![
        Span::styled(author, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("  Gourmet Chef", Style::default().fg(Color::LightRed)),
    ]);

    let title_line = Line::from(Span::styled(
        format!("  {}", recipe.title),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let heart = if recipe.liked { "♥" } else { "♡" };
    let save_marker = if recipe.saved { "[saved]" } else { "[save]" };
    let meta_line = Line::from(vec![
        Span::styled(
            format!("  {} {}  ", heart, recipe.likes),
            if recipe.liked {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Gray)
            },
        ),
        Span::styled(
            format!("{}  ", save_marker),
            if recipe.saved {
                Style::default().fg(Color::LightRed)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ),
        Span::styled(
            format!("{} | {} | {}", recipe.total_time, recipe.difficulty, recipe.category),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    ListItem::new(vec![author_line, title_line, meta_line, Line::raw("")])
}

/// Explore tab: community feed with author bylines, likes, and saves
pub fn render_explore(app: &App, f: &mut Frame, area: Rect) {
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
            "Explore",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "(l) like  (s) save  (enter) open",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    f.render_widget(header, chunks[0]);

    let slots: Vec<(Option<Category>, String)> = std::iter::once((None, "Trending".to_string()))
        .chain(Category::ALL.iter().map(|c| (Some(*c), c.to_string())))
        .collect();
    f.render_widget(
        Paragraph::new(filter_bar(app.explore.filter, &slots)),
        chunks[1],
    );

    let recipes = app.explore.filtered();
    if recipes.is_empty() {
        let empty = Paragraph::new("Nothing trending in this category")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, chunks[2]);
        return;
    }

    let items: Vec<ListItem> = recipes.iter().map(|r| feed_card(r)).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::Rgb(60, 30, 20)))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.explore.cursor.min(recipes.len() - 1)));
    f.render_stateful_widget(list, chunks[2], &mut state);
}
