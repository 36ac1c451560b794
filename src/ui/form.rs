use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::form::{FormField, FormMode, RecipeForm};
use crate::recipe::Difficulty;

pub fn render_form(form: &RecipeForm, f: &mut Frame, area: Rect) {
    match form.mode {
        FormMode::Selection => render_selection(f, area),
        FormMode::Manual => render_manual(form, f, area),
        FormMode::AiImport => render_import(form, f, area),
    }
}

fn render_selection(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "New Recipe",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Upload your own creations or let the AI import a video.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                " (m) Manual ",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("create step by step", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled(
                " (a) AI Chef Vision ",
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("import from a link", Style::default().fg(Color::Gray)),
        ]),
    ];

    let menu = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(
        menu,
        area.inner(ratatui::layout::Margin {
            horizontal: 2,
            vertical: 1,
        }),
    );
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(Color::Rgb(60, 30, 20))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn text_value(value: &str, focused: bool) -> String {
    if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    }
}

fn render_manual(form: &RecipeForm, f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(area);

    let focus = form.current_field();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "New Recipe",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::raw(""));

    // Title
    let title_focused = focus == FormField::Title;
    lines.push(Line::from(vec![
        Span::styled("Title: ", Style::default().fg(Color::Gray)),
        Span::styled(
            text_value(&form.title, title_focused),
            field_style(title_focused),
        ),
    ]));

    // Difficulty selector
    let diff_focused = focus == FormField::Difficulty;
    let mut diff_spans = vec![Span::styled(
        "Difficulty: ",
        Style::default().fg(Color::Gray),
    )];
    for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let style = if form.difficulty == d {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightRed)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        diff_spans.push(Span::styled(format!(" {} ", d), style));
        diff_spans.push(Span::raw(" "));
    }
    if diff_focused {
        diff_spans.push(Span::styled(
            "(←/→)",
            Style::default().fg(Color::Yellow),
        ));
    }
    lines.push(Line::from(diff_spans));
    lines.push(Line::raw(""));

    lines.push(Line::from(Span::styled(
        "Ingredients",
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    )));
    for (i, ingredient) in form.ingredients.iter().enumerate() {
        let focused = focus == FormField::Ingredient(i);
        lines.push(Line::from(vec![
            Span::raw("  - "),
            Span::styled(text_value(ingredient, focused), field_style(focused)),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Steps",
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    )));
    for (i, step) in form.steps.iter().enumerate() {
        let text_focused = focus == FormField::StepText(i);
        let duration_focused = focus == FormField::StepDuration(i);

        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), Style::default().fg(Color::Gray)),
            Span::styled(text_value(&step.text, text_focused), field_style(text_focused)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled("minutes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                text_value(&step.duration_mins, duration_focused),
                field_style(duration_focused),
            ),
        ]));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(body, chunks[0]);

    let hints = Paragraph::new(
        "(tab/↓) next  (shift-tab/↑) prev  (enter) add row  (ctrl-d) remove row  (ctrl-s) save  (esc) back",
    )
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, chunks[1]);
}

fn render_import(form: &RecipeForm, f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "AI Chef Vision",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Paste a TikTok, Reels or YouTube link and we'll build the recipe step by step.",
            Style::default().fg(Color::Gray),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Link: ", Style::default().fg(Color::Gray)),
            Span::styled(
                text_value(&form.link, !form.is_analyzing()),
                field_style(!form.is_analyzing()),
            ),
        ]),
        Line::raw(""),
    ];

    if let Some(job) = form.import {
        let dots = ".".repeat((4 - job.ticks_remaining.min(3)) as usize);
        lines.push(Line::from(Span::styled(
            format!("Analyzing{}", dots),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )));
        lines.push(Line::from(Span::styled(
            "(esc) cancel",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "(enter) analyze  (esc) back",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(
        body,
        area.inner(ratatui::layout::Margin {
            horizontal: 2,
            vertical: 1,
        }),
    );
}
