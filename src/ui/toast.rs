use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::toast::{ToastLevel, ToastQueue};

fn level_color(level: ToastLevel) -> Color {
    match level {
        ToastLevel::Success => Color::Green,
        ToastLevel::Info => Color::Cyan,
        ToastLevel::Error => Color::Red,
    }
}

/// Stack the visible toasts in the top-right corner, newest on top
pub fn render_toasts(toasts: &ToastQueue, f: &mut Frame, area: Rect) {
    for (row, toast) in toasts.visible().iter().enumerate() {
        let text = format!(" {} ", toast.message);
        let width = (text.width() as u16).min(area.width);
        let y = area.y + row as u16;
        if y >= area.y + area.height {
            break;
        }

        let slot = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y,
            width,
            height: 1,
        };

        let widget = Paragraph::new(text).style(
            Style::default()
                .fg(Color::Black)
                .bg(level_color(toast.level))
                .add_modifier(Modifier::BOLD),
        );

        f.render_widget(Clear, slot);
        f.render_widget(widget, slot);
    }
}
