//! Overlay rendering (filter panel, help popup)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{BrowseState, FilterField, PageSize, SortOrder, UiState};

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

pub fn render_filter_panel(frame: &mut Frame, state: &BrowseState, ui_state: &UiState) {
    let popup_area = centered(frame.area(), 50, 9);
    frame.render_widget(Clear, popup_area);

    let pending = state.pending_filters;

    let choice = |selected: bool, text: String| {
        if selected {
            Span::styled(
                format!("[{}]", text),
                Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", text), Style::default().fg(Color::White))
        }
    };

    let field_label = |field: FilterField, text: &'static str| {
        let style = if ui_state.filter_field == field {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        Span::styled(format!("{:<12}", text), style)
    };

    let mut size_line = vec![field_label(FilterField::PageSize, "Page size")];
    for size in PageSize::ALL {
        size_line.push(choice(size == pending.page_size, size.get().to_string()));
    }

    let mut sort_line = vec![field_label(FilterField::SortOrder, "Sort by")];
    for order in [SortOrder::Relevance, SortOrder::Newest] {
        sort_line.push(choice(order == pending.sort_order, order.label().to_string()));
    }

    let lines = vec![
        Line::from(""),
        Line::from(size_line),
        Line::from(""),
        Line::from(sort_line),
        Line::from(""),
        Line::from(Span::styled(
            "↑/↓ field  ←/→ change  Enter apply  Esc close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Filters ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(panel, popup_area);
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    // Define keybindings organized by category
    let keybindings = vec![
        ("", "── Navigation ──"),
        ("Tab / Shift+Tab", "Cycle sections"),
        ("↑ / ↓", "Move selection"),
        ("← / →", "Move through genres"),
        ("Enter", "Open book / run search"),
        ("Backspace / Esc", "Back to results"),
        ("/", "Focus search"),
        ("", ""),
        ("", "── Browsing ──"),
        ("p", "Most read books (home)"),
        ("g", "Browse by genre"),
        ("m", "Load more results"),
        ("f", "Filters"),
        ("r", "Refresh / retry"),
        ("", ""),
        ("", "── General ──"),
        ("? / h", "Toggle this help"),
        ("q / Ctrl+C", "Quit"),
    ];

    let popup_area = centered(area, 56, keybindings.len() as u16 + 2);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (? or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_fits_inside_small_areas() {
        let area = Rect::new(0, 0, 30, 8);
        let popup = centered(area, 50, 9);
        assert_eq!(popup.width, 28);
        assert_eq!(popup.height, 6);
        assert_eq!(popup.x, 1);
        assert_eq!(popup.y, 1);
    }
}
