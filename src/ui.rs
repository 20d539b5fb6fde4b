pub mod charting;

use std::time::Instant;

use marmoset_type::{
    highlight::{overflow, CharState},
    session::Session,
    time_series::summary,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;
const TITLE: &str = "marmoset type";

struct Styles {
    bold: Style,
    correct: Style,
    incorrect: Style,
    cursor: Style,
    untyped: Style,
    done: Style,
    italic: Style,
    chart: Style,
}

impl Styles {
    fn new() -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let dim_bold = Style::default().patch(bold).add_modifier(Modifier::DIM);

        Self {
            bold,
            correct: Style::default().patch(bold).fg(Color::Green),
            incorrect: Style::default().patch(bold).fg(Color::Red),
            cursor: Style::default().patch(bold).add_modifier(Modifier::UNDERLINED),
            untyped: bold,
            done: dim_bold,
            italic: Style::default().add_modifier(Modifier::ITALIC),
            chart: Style::default().fg(Color::Yellow),
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let styles = Styles::new();

        if self.session.has_finished() {
            render_results(&self.session, &styles, area, buf);
        } else {
            let blink = self.blink_cursor && self.session.is_idle(Instant::now());
            render_typing(&self.session, blink, &styles, area, buf);
        }
    }
}

/// Spans for the whole word list with the active word highlighted per character.
fn word_spans<'a>(session: &'a Session, blink: bool, styles: &Styles) -> Vec<Span<'a>> {
    let active = session.active_index();
    let mut spans = Vec::new();

    for (idx, word) in session.words().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }

        if idx != active {
            let style = if idx < active {
                styles.done
            } else {
                styles.untyped
            };
            spans.push(Span::styled(word.as_str(), style));
            continue;
        }

        for (c, state) in word.chars().zip(session.active_word_states()) {
            let style = match state {
                CharState::Correct => styles.correct,
                CharState::Incorrect => styles.incorrect,
                CharState::Cursor if blink => styles.cursor.add_modifier(Modifier::SLOW_BLINK),
                CharState::Cursor => styles.cursor,
                CharState::Untyped => styles.untyped,
            };
            spans.push(Span::styled(c.to_string(), style));
        }

        let extra = overflow(word, session.buffer());
        if !extra.is_empty() {
            spans.push(Span::styled(extra, styles.incorrect.add_modifier(Modifier::CROSSED_OUT)));
        }
    }

    spans
}

fn render_typing(session: &Session, blink: bool, styles: &Styles, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Min(1),    // words
            Constraint::Length(3), // input box
            Constraint::Length(1), // status
        ])
        .split(area);

    Paragraph::new(Span::styled(TITLE, styles.bold))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2) as usize;
    let prompt_width = session.words().iter().map(|w| w.width() + 1).sum::<usize>();

    Paragraph::new(Line::from(word_spans(session, blink, styles)))
        .alignment(if prompt_width <= max_chars_per_line {
            // a short list fits on one line and reads best centered
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);

    Paragraph::new(Span::raw(session.buffer()))
        .block(Block::default().borders(Borders::ALL))
        .render(chunks[2], buf);

    let status = if session.has_started() {
        format!(
            "{}s   {} wpm   word {}/{}",
            session.elapsed_secs(),
            session.current_wpm(),
            session.active_index() + 1,
            session.words().len()
        )
    } else {
        String::from("start typing to begin / (tab) new words / (esc)ape")
    };

    Paragraph::new(Span::styled(status, styles.italic))
        .alignment(Alignment::Center)
        .render(chunks[3], buf);
}

fn render_results(session: &Session, styles: &Styles, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // heading
            Constraint::Length(1), // score
            Constraint::Length(1), // summary
            Constraint::Min(1),    // chart
            Constraint::Length(1), // padding
            Constraint::Length(1), // legend
        ])
        .split(area);

    Paragraph::new(Span::styled("Test Completed!", styles.bold))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    Paragraph::new(Span::styled(
        format!("Your Score: {} WPM", session.final_wpm()),
        styles.bold.fg(Color::Yellow),
    ))
    .alignment(Alignment::Center)
    .render(chunks[1], buf);

    let line = match summary(session.samples()) {
        Some(s) => format!(
            "{}s   {:.1} avg   {:.2} sd   {} peak",
            session.elapsed_secs(),
            s.mean,
            s.std_dev,
            s.peak
        ),
        None => format!("{}s", session.elapsed_secs()),
    };
    Paragraph::new(Span::styled(line, styles.italic))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

    let (overall_duration, highest_wpm) = charting::compute_chart_params(session.samples());
    let points = charting::chart_points(session.samples());
    let datasets = vec![Dataset::default()
        .name("wpm")
        .marker(Marker::Braille)
        .style(styles.chart)
        .graph_type(GraphType::Line)
        .data(&points)];

    Chart::new(datasets)
        .block(Block::default().title("WPM Over Time"))
        .x_axis(
            Axis::default()
                .title("seconds")
                .bounds([0.0, overall_duration])
                .labels(vec![
                    Span::styled("0", styles.bold),
                    Span::styled(charting::format_label(overall_duration), styles.bold),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("wpm")
                .bounds([0.0, highest_wpm])
                .labels(vec![
                    Span::styled("0", styles.bold),
                    Span::styled(charting::format_label(highest_wpm), styles.bold),
                ]),
        )
        .render(chunks[3], buf);

    Paragraph::new(Span::styled(
        "(r)etry / (enter) try again / (esc)ape",
        styles.italic,
    ))
    .render(chunks[5], buf);
}
