use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge},
    Frame,
};

use crate::timer::StepTimer;

/// Floating countdown pinned above the bottom nav, like the original
/// floating timer card.
pub fn render_floating_timer(timer: &StepTimer, f: &mut Frame, area: Rect) {
    if area.height < 4 || area.width < 20 {
        return;
    }

    let width = (area.width / 2).clamp(20, 44);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height - 4,
        width,
        height: 3,
    };

    let status = if timer.is_running() {
        "cooking..."
    } else {
        "paused"
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Timer: {} ", status)),
        )
        .gauge_style(
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )
        .ratio(timer.progress())
        .label(timer.display());

    f.render_widget(Clear, popup);
    f.render_widget(gauge, popup);
}
