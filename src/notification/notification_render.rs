//! Notification rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::notification_state::NotificationState;

/// Distance from the top and right edges of the frame
const MARGIN: u16 = 1;

/// Render the current notification in the top-right corner of the frame
///
/// Call after the rest of the UI so the overlay is drawn on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(current) = notification.current() else {
        return;
    };

    // message + one space padding each side + borders
    let width = current.message.chars().count() as u16 + 4;
    let area = top_right(frame.area(), width, 3);
    if area.width < 5 || area.height < 3 {
        return;
    }

    let style = current.style;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));
    let text = Line::from(Span::styled(
        format!(" {} ", current.message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn top_right(frame_area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width.saturating_sub(MARGIN * 2));
    let height = height.min(frame_area.height.saturating_sub(MARGIN));
    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(width + MARGIN),
        y: frame_area.y + MARGIN,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    fn render_to_terminal(
        notification: &mut NotificationState,
        width: u16,
        height: u16,
    ) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_notification(f, notification))
            .unwrap();
        terminal
    }

    #[test]
    fn snapshot_notification_top_right() {
        let mut notification = NotificationState::new();
        notification.show("Saved top.v");

        let terminal = render_to_terminal(&mut notification, 24, 5);

        assert_snapshot!(terminal.backend().to_string(), @r#"
        "                        "
        "        ┌─────────────┐ "
        "        │ Saved top.v │ "
        "        └─────────────┘ "
        "                        "
        "#);
    }

    #[test]
    fn test_no_notification_renders_nothing() {
        let mut notification = NotificationState::new();
        let terminal = render_to_terminal(&mut notification, 20, 4);
        let rendered = terminal.backend().to_string();
        assert!(rendered.chars().all(|c| c == ' ' || c == '"' || c == '\n'));
    }

    #[test]
    fn test_warning_uses_warning_colors() {
        let mut notification = NotificationState::new();
        notification.show_warning("Bad config");

        let terminal = render_to_terminal(&mut notification, 30, 5);
        // Message starts after the left border and one space of padding
        let x = 30 - MARGIN - (10 + 4) + 2;
        let cell = &terminal.backend().buffer()[(x, 2)];

        assert_eq!(cell.symbol(), "B");
        assert_eq!(cell.fg, Color::Black);
        assert_eq!(cell.bg, Color::Yellow);
    }

    #[test]
    fn test_too_small_frame_skips_render() {
        let mut notification = NotificationState::new();
        notification.show("Saved top.v");

        let terminal = render_to_terminal(&mut notification, 4, 2);
        let rendered = terminal.backend().to_string();
        assert!(!rendered.contains("Saved"));
    }

    #[test]
    fn test_long_message_is_clipped_to_frame() {
        let area = top_right(Rect::new(0, 0, 20, 10), 40, 3);
        assert_eq!(area.width, 18);
        assert_eq!(area.x, 1);
        assert_eq!(area.y, 1);
    }
}
