//! Layout rendering (top bar, genre strip, error banner, footer)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, BrowseMode, BrowseState, ErrorInfo, ErrorKind, Status, UiState, GENRES};

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

pub fn render_top_bar(frame: &mut Frame, area: Rect, state: &BrowseState, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(36), // Mode tabs
        ])
        .split(area);

    let search_focused = ui_state.active_section == ActiveSection::Search;
    let search_style = if search_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_input.is_empty() && !search_focused {
        "Search for books... (/)".to_string()
    } else if search_focused {
        format!("{}▏", ui_state.search_input)
    } else {
        ui_state.search_input.clone()
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(border_style(search_focused)),
        );
    frame.render_widget(search, chunks[0]);

    let selected_tab = match state.mode {
        BrowseMode::Popular => Some(0),
        BrowseMode::Genre(_) => Some(1),
        BrowseMode::Search(_) => None,
    };

    let tabs_title = match state.mode.search_term() {
        Some(term) => format!(" Searching \"{}\" ", term),
        None => " Browse ".to_string(),
    };

    let tabs = Tabs::new(vec!["Most Read (p)", "By Genre (g)"])
        .select(selected_tab)
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(tabs_title));
    frame.render_widget(tabs, chunks[1]);
}

/// Horizontal genre picker, scrolled so the highlighted genre stays visible
pub fn render_genre_strip(frame: &mut Frame, area: Rect, state: &BrowseState, ui_state: &UiState) {
    let focused = ui_state.active_section == ActiveSection::Genres;
    let active_genre = state.mode.genre_id();
    let highlighted = ui_state.genre_selected.min(GENRES.len() - 1);

    let inner_width = area.width.saturating_sub(4) as usize;
    let labels: Vec<String> = GENRES.iter().map(|g| format!(" {} ", g.label)).collect();

    // First genre to show: step back from the highlight until the row is full
    let mut start = highlighted;
    let mut used = labels[highlighted].chars().count();
    while start > 0 {
        let width = labels[start - 1].chars().count() + 1;
        if used + width > inner_width {
            break;
        }
        used += width;
        start -= 1;
    }

    let mut spans = Vec::new();
    if start > 0 {
        spans.push(Span::styled("‹", Style::default().fg(Color::DarkGray)));
    }
    for (i, genre) in GENRES.iter().enumerate().skip(start) {
        let style = if i == highlighted && focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if Some(genre.id) == active_genre {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(labels[i].clone(), style));
        spans.push(Span::raw(" "));
    }

    let strip = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Genres (←/→ Enter) ")
            .padding(Padding::horizontal(1))
            .border_style(border_style(focused)),
    );
    frame.render_widget(strip, area);
}

pub fn render_error_banner(frame: &mut Frame, area: Rect, error: &ErrorInfo) {
    let label = match error.kind {
        ErrorKind::Network => " ⚠ Network error: ",
    };
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(error.message.clone(), Style::default().fg(Color::Red)),
        Span::styled("  (r to retry)", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(banner, area);
}

pub fn render_footer(frame: &mut Frame, area: Rect, state: &BrowseState) {
    let filters = state.filters;
    let (status_text, status_color) = match state.status() {
        Status::Idle => ("● Ready", Color::Green),
        Status::Loading => ("◌ Loading", Color::Yellow),
        Status::Error => ("✕ Error", Color::Red),
    };
    let mut status = vec![
        Span::styled(format!(" {}  ", status_text), Style::default().fg(status_color)),
        Span::styled("Page size: ", Style::default().fg(Color::DarkGray)),
        Span::styled(filters.page_size.get().to_string(), Style::default().fg(Color::White)),
        Span::styled("  Sort: ", Style::default().fg(Color::DarkGray)),
        Span::styled(filters.sort_order.label(), Style::default().fg(Color::White)),
    ];
    if state.has_pending_filter_changes() {
        status.push(Span::styled(
            "  (pending changes, Enter in filters to apply)",
            Style::default().fg(Color::Yellow),
        ));
    }

    status.push(Span::styled("  Offset: ", Style::default().fg(Color::DarkGray)));
    status.push(Span::styled(state.cursor.offset.to_string(), Style::default().fg(Color::White)));
    status.push(Span::styled("  Showing: ", Style::default().fg(Color::DarkGray)));
    let showing = match state.total_items {
        Some(total) => format!("{} of ~{}", state.items.len(), total),
        None => state.items.len().to_string(),
    };
    status.push(Span::styled(showing, Style::default().fg(Color::White)));

    let hints = Line::from(Span::styled(
        " Tab: sections  Enter: open  m: more  f: filters  r: refresh  ?: help  q: quit",
        Style::default().fg(Color::DarkGray),
    ));

    let footer = Paragraph::new(vec![Line::from(status), hints])
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}
