use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
};

use super::app::{App, Focus};
use crate::labels;
use crate::wiki::Language;

const HEADING: Color = Color::Rgb(0x2c, 0x3e, 0x50);
const LABEL: Color = Color::Rgb(0x34, 0x49, 0x5e);
const MUTED: Color = Color::Rgb(0x7f, 0x8c, 0x8d);

pub fn render(app: &mut App, frame: &mut Frame) {
    let [
        title_area,
        language_area,
        label_area,
        input_area,
        controls_area,
        results_area,
        status_area,
    ] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(labels::TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(HEADING).add_modifier(Modifier::BOLD)),
        title_area,
    );

    render_language(app, frame, language_area);

    frame.render_widget(
        Paragraph::new(labels::SEARCH_TERM).style(Style::default().fg(LABEL)),
        label_area,
    );
    render_input(app, frame, input_area);
    render_controls(app, frame, controls_area);
    render_results(app, frame, results_area);

    let status_style = if app.status.is_error() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(MUTED)
    };
    frame.render_widget(
        Paragraph::new(app.status.label())
            .alignment(Alignment::Center)
            .style(status_style),
        status_area,
    );

    if app.show_input_warning {
        render_input_warning(frame);
    }
}

fn focus_style(app: &App, focus: Focus) -> Style {
    if app.focus == focus {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn render_language(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(labels::LANGUAGE, Style::default().fg(LABEL)), Span::raw(" ")];
    for language in Language::ALL {
        let marker = if language == app.language { "(•)" } else { "( )" };
        let style = if language == app.language {
            focus_style(app, Focus::Language)
        } else {
            Style::default()
        };
        spans.push(Span::styled(
            format!("{marker} {}", language.display_name()),
            style,
        ));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let border = if app.focus == Focus::Topic {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(MUTED)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);

    // Keep the cursor visible when the topic is wider than the box.
    let width = usize::from(inner.width.max(1));
    let offset = app.cursor.saturating_sub(width - 1);
    let visible: String = app.topic.chars().skip(offset).take(width).collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);

    if app.focus == Focus::Topic && !app.show_input_warning {
        let x = inner.x + u16::try_from(app.cursor - offset).unwrap_or(inner.width);
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_controls(app: &App, frame: &mut Frame, area: Rect) {
    let checkbox = if app.full_article { "[x]" } else { "[ ]" };
    let line = Line::from(vec![
        Span::styled(
            format!("{checkbox} {}", labels::FULL_ARTICLE),
            focus_style(app, Focus::FullArticle),
        ),
        Span::raw("    "),
        Span::styled(
            format!("[ {} ]", labels::SEARCH_BUTTON),
            focus_style(app, Focus::SearchButton).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_results(app: &mut App, frame: &mut Frame, area: Rect) {
    let border = if app.focus == Focus::Results {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(MUTED)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(labels::RESULTS, Style::default().fg(LABEL)));
    let inner = block.inner(area);

    app.result_height = inner.height;
    app.result_lines = wrapped_line_count(&app.result, inner.width);
    app.scroll = app.scroll.min(app.result_lines.saturating_sub(app.result_height));

    let paragraph = Paragraph::new(app.result.as_str())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);

    if app.result_lines > app.result_height {
        let mut state = ScrollbarState::new(usize::from(app.result_lines - app.result_height))
            .position(usize::from(app.scroll));
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
}

fn render_input_warning(frame: &mut Frame) {
    let area = centered(frame.area(), 60, 7);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(labels::INPUT_REQUIRED_TITLE.bold());

    let mut lines: Vec<Line> = labels::INPUT_REQUIRED_MESSAGE.lines().map(Line::from).collect();
    lines.push(Line::default());
    lines.push(Line::from("OK".bold()));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Approximate row count of `text` wrapped at `width` columns.
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    if text.is_empty() || width == 0 {
        return 0;
    }
    let width = usize::from(width);
    let rows: usize = text
        .lines()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}
