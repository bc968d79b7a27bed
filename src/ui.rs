//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).
//!
//! ## For contributors
//!
//! * The layout is a two-row split: the article list (or a placeholder for
//!   the current [`FeedState`]) on top and a one-line status bar below.
//! * Colours and styles are defined inline.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, FeedState};
use crate::source::{Article, FeedError};

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [main_area, status_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let placeholder = match &app.state {
        FeedState::Loaded if !app.articles.is_empty() => None,
        FeedState::Loaded => Some(("No articles".to_string(), Color::DarkGray)),
        FeedState::Idle | FeedState::Loading => Some(("Loading…".to_string(), Color::Yellow)),
        FeedState::Failed(FeedError::Offline(_)) => {
            Some(("No internet connection".to_string(), Color::Red))
        }
        FeedState::Failed(e) => Some((format!("Could not load feed: {e}"), Color::Red)),
    };

    match placeholder {
        Some((message, colour)) => draw_placeholder(&message, colour, frame, main_area),
        None => draw_article_list(app, frame, main_area),
    }
    draw_status_bar(app, frame, status_area);
}

/// Format `publishedAt` for display, e.g. `2 Jan, 2023 03:04`.
fn display_date(article: &Article) -> String {
    article
        .published_at()
        .map(|d| d.format("%-d %b, %Y %H:%M").to_string())
        .unwrap_or_else(|_| "no date".into())
}

/// Render the scrollable article list.
fn draw_article_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .articles
        .iter()
        .map(|article| {
            let headline = Line::from(vec![
                Span::styled(
                    format!("{:<18}", display_date(article)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::styled(&article.title, Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", article.source.name),
                    Style::default().fg(Color::Cyan),
                ),
            ]);
            let summary = Line::from(Span::styled(
                format!("{:19}{}", "", article.description),
                Style::default().fg(Color::Gray),
            ));

            ListItem::new(vec![headline, summary])
        })
        .collect();

    let list = List::new(list_items)
        .block(Block::default().title(" News ").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render a centred message in place of the list.
fn draw_placeholder(message: &str, colour: Color, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(colour),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().title(" News ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!("{} items", app.articles.len()),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  "),
        Span::styled(
            format!("s: {}", app.sort_order.label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  r: refresh  ⏎: open  q: quit"),
    ]));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::source::{make_article, FeedResult};
    use crate::worker::FetchMsg;

    fn render(app: &mut App) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(app, f)).unwrap();

        let buf = terminal.backend().buffer().clone();
        buf.content()
            .iter()
            .map(|c| c.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    fn finish_fetch(app: &mut App, result: Result<FeedResult, FeedError>) {
        let generation = app.begin_fetch();
        app.apply_fetch(FetchMsg { generation, result });
    }

    #[test]
    fn shows_loading_before_first_result() {
        let mut app = App::new();
        app.begin_fetch();
        assert!(render(&mut app).contains("Loading"));
    }

    #[test]
    fn shows_articles_with_formatted_dates() {
        let mut app = App::new();
        finish_fetch(
            &mut app,
            Ok(FeedResult {
                articles: vec![
                    make_article("Headline", "2023-01-02T03:04:05Z"),
                    make_article("Undated", "sometime"),
                ],
                status: "ok".into(),
            }),
        );

        let text = render(&mut app);
        assert!(text.contains("Headline"));
        assert!(text.contains("2 Jan, 2023 03:04"));
        assert!(text.contains("no date"));
        assert!(text.contains("[test]"));
        assert!(text.contains("2 items"), "status bar should show item count");
    }

    #[test]
    fn shows_no_internet_when_offline() {
        let mut app = App::new();
        finish_fetch(&mut app, Err(FeedError::Offline("probe failed".into())));
        assert!(render(&mut app).contains("No internet connection"));
    }

    #[test]
    fn shows_decode_failure_distinctly() {
        let mut app = App::new();
        let err = serde_json::from_str::<FeedResult>("[]").unwrap_err();
        finish_fetch(&mut app, Err(err.into()));
        assert!(render(&mut app).contains("Could not load feed"));
    }

    #[test]
    fn shows_empty_feed_message() {
        let mut app = App::new();
        finish_fetch(
            &mut app,
            Ok(FeedResult {
                articles: Vec::new(),
                status: "ok".into(),
            }),
        );
        assert!(render(&mut app).contains("No articles"));
    }

    #[test]
    fn status_bar_shows_next_sort_direction() {
        let mut app = App::new();
        finish_fetch(
            &mut app,
            Ok(FeedResult {
                articles: vec![make_article("a", "2023-01-01T00:00:00Z")],
                status: "ok".into(),
            }),
        );
        assert!(render(&mut app).contains("s: old → new"));

        app.sort_by_date();
        assert!(render(&mut app).contains("s: new → old"));
    }
}
