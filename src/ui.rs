pub mod detail;
pub mod explore;
pub mod form;
pub mod list;
pub mod timer;
pub mod toast;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Tab};

/// Top-level render: active tab (or the detail overlay), bottom nav, the
/// floating timer, and toasts on top of everything.
pub fn ui(app: &App, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let content = chunks[0];

    if let Some(detail_state) = &app.detail {
        detail::render_detail(detail_state, f, content);
    } else {
        match app.tab {
            Tab::Recipes => list::render_library(app, f, content),
            Tab::Explore => explore::render_explore(app, f, content),
            Tab::Create => form::render_form(&app.form, f, content),
        }
    }

    render_bottom_nav(app, f, chunks[1]);

    if let Some(detail_state) = &app.detail {
        if let Some(step_timer) = &detail_state.timer {
            timer::render_floating_timer(step_timer, f, content);
        }
    }

    toast::render_toasts(&app.toasts, f, f.area());
}

fn render_bottom_nav(app: &App, f: &mut Frame, area: Rect) {
    let tabs = [
        (Tab::Recipes, "1 My Recipes"),
        (Tab::Explore, "2 Explore"),
        (Tab::Create, "3 Create"),
    ];

    let mut spans = vec![Span::raw("  ")];
    for (tab, label) in tabs {
        let style = if app.tab == tab && app.detail.is_none() {
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw("   "));
    }

    let nav = Paragraph::new(Line::from(spans)).style(Style::default());
    f.render_widget(nav, area);
}
