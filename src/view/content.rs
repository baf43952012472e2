//! Main content area rendering (result list, detail view)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, BrowseState, CatalogItem, UiState};
use super::utils::{calculate_num_width, render_scrollable_list, strip_html, truncate_string};

pub fn render_main_content(frame: &mut Frame, area: Rect, state: &BrowseState, ui_state: &UiState) {
    match &state.selected {
        Some(item) => render_item_detail(frame, area, item),
        None => render_results(frame, area, state, ui_state),
    }
}

fn render_results(frame: &mut Frame, area: Rect, state: &BrowseState, ui_state: &UiState) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let title = format!(" {} ", state.heading());

    if state.items.is_empty() {
        let placeholder = if state.is_loading {
            Paragraph::new("Loading books...").style(Style::default().fg(Color::Yellow))
        } else if state.error.is_some() {
            Paragraph::new("Nothing to show. Press r to try again.")
                .style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new("No books found\n\nTry a different search term or genre.")
                .style(Style::default().fg(Color::DarkGray))
        };
        let placeholder = placeholder.block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
        frame.render_widget(placeholder, area);
        return;
    }

    let content_width = area.width.saturating_sub(4) as usize;
    let num_width = calculate_num_width(state.items.len());
    let year_width = 6;
    let rating_width = 6;
    let fixed_width = 1 + num_width + 3 + 3 + 3 + year_width + 3 + rating_width;
    let remaining_width = content_width.saturating_sub(fixed_width);
    let title_width = (remaining_width * 60) / 100;
    let author_width = remaining_width.saturating_sub(title_width);

    let mut items = vec![
        ListItem::new(format!(
            " {:<num_w$}   {:<title_w$}   {:<author_w$}   {:<year_w$}   {:>rating_w$}",
            "#", "Title", "Author", "Year", "Rating",
            num_w = num_width,
            title_w = title_width,
            author_w = author_width,
            year_w = year_width,
            rating_w = rating_width
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    ];

    let rows: Vec<ListItem> = state.items.iter().enumerate().map(|(i, book)| {
        let style = if i == ui_state.result_selected && is_focused {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if i == ui_state.result_selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let year = book.published_year().map(|y| y.to_string()).unwrap_or_else(|| "-".to_string());
        let rating = book
            .average_rating
            .map(|r| format!("★ {:.1}", r))
            .unwrap_or_else(|| "-".to_string());

        ListItem::new(format!(
            " {:<num_w$}   {}   {}   {:<year_w$}   {:>rating_w$}",
            i + 1,
            truncate_string(book.display_title(), title_width),
            truncate_string(&book.author_line(), author_width),
            year,
            rating,
            num_w = num_width,
            year_w = year_width,
            rating_w = rating_width
        )).style(style)
    }).collect();
    items.extend(rows);

    if state.is_loading {
        items.push(ListItem::new(" Loading more...").style(Style::default().fg(Color::Yellow)));
    } else if state.can_load_more() {
        items.push(
            ListItem::new(" ↓ Load more (m)").style(Style::default().fg(Color::DarkGray)),
        );
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    // Offset by one for the header row
    render_scrollable_list(frame, area, items, ui_state.result_selected + 1, block);
}

fn render_item_detail(frame: &mut Frame, area: Rect, item: &CatalogItem) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header
            Constraint::Min(0),    // Description and facts
        ])
        .split(area);

    let mut header_lines = vec![Line::from(Span::styled(
        item.display_title().to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = item.subtitle.as_deref().filter(|s| !s.is_empty()) {
        header_lines.push(Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
        )));
    }
    header_lines.push(Line::from(format!("by {}", item.author_line())));
    if let Some(publication) = item.publication_line() {
        header_lines.push(Line::from(Span::styled(publication, Style::default().fg(Color::DarkGray))));
    }

    let header = Paragraph::new(header_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Book (Esc to go back) ")
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(header, chunks[0]);

    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    let description = item
        .description
        .as_deref()
        .map(strip_html)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "No description available.".to_string());
    for line in description.lines() {
        lines.push(Line::from(line.to_string()));
    }
    lines.push(Line::from(""));

    let mut fact = |name: &str, value: String| {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", name), label),
            Span::raw(value),
        ]));
    };

    if !item.categories.is_empty() {
        fact("Categories", item.categories.join(", "));
    }
    if let Some(pages) = item.page_count {
        fact("Pages", pages.to_string());
    }
    if let Some(rating) = item.rating_line() {
        fact("Rating", rating);
    }
    if let Some(language) = item.language.as_deref() {
        fact("Language", language.to_uppercase());
    }
    if let Some(url) = item.preview_url.as_deref() {
        fact("Preview", url.to_string());
    }
    if let Some(url) = item.buy_url.as_deref() {
        fact("Buy", url.to_string());
    }
    if let Some(url) = item.info_url.as_deref() {
        fact("More info", url.to_string());
    }

    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(body, chunks[1]);
}
