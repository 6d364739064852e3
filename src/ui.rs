pub mod summary;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::{App, Theme},
    metrics::CharState,
    storage::KeyValueStore,
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

const LEGEND: &str = "(←) restart / (→) next / (tab) difficulty / (ctrl+t) theme / (esc)ape";

/// Colors for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub base: Style,
    pub correct: Color,
    pub incorrect: Color,
    pub accent: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                base: Style::default(),
                correct: Color::Green,
                incorrect: Color::Red,
                accent: Color::Magenta,
            },
            Theme::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                correct: Color::Rgb(0, 128, 0),
                incorrect: Color::Rgb(200, 0, 0),
                accent: Color::Blue,
            },
        }
    }
}

impl<S: KeyValueStore> Widget for &App<S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = Palette::for_theme(self.theme);
        let session = self.session();
        let metrics = session.metrics();

        Block::default().style(palette.base).render(area, buf);

        let bold_style = palette.base.add_modifier(Modifier::BOLD);
        let italic_style = palette.base.add_modifier(Modifier::ITALIC);

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let quote_width = session.target().width();
        let quote_lines = if quote_width <= max_chars_per_line as usize {
            1
        } else {
            (quote_width as f64 / max_chars_per_line as f64).ceil() as u16 + 1
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1),           // stats
                Constraint::Length(1),           // padding
                Constraint::Length(1),           // progress
                Constraint::Min(0),              // padding
                Constraint::Length(quote_lines), // quote
                Constraint::Min(0),              // padding
                Constraint::Length(1),           // legend
            ])
            .split(area);

        let stats = Line::from(vec![
            Span::styled(
                format!("{}", self.difficulty()),
                bold_style.fg(palette.accent),
            ),
            Span::styled(
                format!(
                    "   {} s   {} WPM   {}%   best {} WPM",
                    session.elapsed_secs(),
                    metrics.wpm,
                    metrics.accuracy,
                    self.best()
                ),
                bold_style,
            ),
        ]);
        Paragraph::new(stats)
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        Gauge::default()
            .gauge_style(palette.base.fg(palette.accent))
            .percent(metrics.progress.min(100) as u16)
            .label(format!("{}%", metrics.progress))
            .render(chunks[2], buf);

        Paragraph::new(Line::from(quote_spans(self, &palette)))
            .alignment(if quote_lines == 1 {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: true })
            .render(chunks[4], buf);

        Paragraph::new(Span::styled(LEGEND, italic_style))
            .alignment(Alignment::Center)
            .render(chunks[6], buf);

        if let Some(summary) = self.summary() {
            summary::render_summary(summary, &self.celebration, &palette, area, buf);
        }
    }
}

/// Styled target quote: typed positions colored by correctness, the next
/// position underlined, and anything typed past the end shown as errors.
fn quote_spans<'a, S: KeyValueStore>(app: &'a App<S>, palette: &Palette) -> Vec<Span<'a>> {
    let session = app.session();
    let bold_style = palette.base.add_modifier(Modifier::BOLD);
    let correct_style = bold_style.fg(palette.correct);
    let incorrect_style = bold_style.fg(palette.incorrect);
    let pending_style = bold_style.add_modifier(Modifier::DIM);
    let cursor_style = pending_style.add_modifier(Modifier::UNDERLINED);

    let cursor = session.typed().chars().count();
    let mut spans: Vec<Span> = session
        .target()
        .chars()
        .zip(session.char_states())
        .enumerate()
        .map(|(idx, (expected, state))| match state {
            CharState::Correct => Span::styled(expected.to_string(), correct_style),
            CharState::Incorrect => Span::styled(
                match expected {
                    ' ' => "·".to_owned(),
                    c => c.to_string(),
                },
                incorrect_style,
            ),
            CharState::Unset if idx == cursor && !session.is_complete() => {
                Span::styled(expected.to_string(), cursor_style)
            }
            CharState::Unset => Span::styled(expected.to_string(), pending_style),
        })
        .collect();

    let extra: String = session
        .typed()
        .chars()
        .skip(session.target().chars().count())
        .map(|c| if c == ' ' { '·' } else { c })
        .collect();
    if !extra.is_empty() {
        spans.push(Span::styled(
            extra,
            incorrect_style.add_modifier(Modifier::CROSSED_OUT),
        ));
    }

    spans
}

#[cfg(test)]
pub(crate) fn rendered_text(buffer: &Buffer) -> String {
    let width = buffer.area().width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;
    use crate::quotes::QuoteBank;
    use crate::storage::MemoryStore;
    use std::collections::HashMap;
    use std::time::Duration;

    fn create_test_app(quote: &str) -> App<MemoryStore> {
        let pools: HashMap<Difficulty, Vec<String>> = Difficulty::ALL
            .into_iter()
            .map(|d| (d, vec![quote.to_string()]))
            .collect();
        App::new(
            QuoteBank::from_pools(pools).unwrap(),
            MemoryStore::new(),
            Some(Difficulty::Easy),
        )
    }

    fn render(app: &App<MemoryStore>, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer
    }

    fn cell_at(buffer: &Buffer, needle: char, row_hint: &str) -> Option<ratatui::buffer::Cell> {
        let text = rendered_text(buffer);
        let (y, line) = text
            .lines()
            .enumerate()
            .find(|(_, l)| l.contains(row_hint))?;
        let x = line.chars().position(|c| c == needle)?;
        buffer.cell((x as u16, y as u16)).cloned()
    }

    #[test]
    fn test_idle_screen_shows_quote_and_zeroed_stats() {
        let app = create_test_app("Keep calm and code on.");

        let text = rendered_text(&render(&app, 80, 24));

        assert!(text.contains("Keep calm and code on."));
        assert!(text.contains("0 s   0 WPM   0%   best 0 WPM"));
        assert!(text.contains("easy"));
        assert!(text.contains("(esc)ape"));
    }

    #[test]
    fn test_typed_chars_are_colored() {
        let mut app = create_test_app("abcd");
        app.write('a');
        app.write('x');

        let buffer = render(&app, 80, 24);

        let a = cell_at(&buffer, 'a', "abcd").unwrap();
        assert_eq!(a.fg, Color::Green);
        let b = cell_at(&buffer, 'b', "abcd").unwrap();
        assert_eq!(b.fg, Color::Red);
        let c = cell_at(&buffer, 'c', "abcd").unwrap();
        assert!(c.modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_stats_line_tracks_metrics() {
        let mut app = create_test_app("The sun is shining bright today.");
        app.write('T');
        app.on_tick(Duration::from_secs(10));
        for c in "he sun".chars() {
            app.write(c);
        }

        let text = rendered_text(&render(&app, 80, 24));

        assert!(text.contains("10 s   12 WPM   100%"));
        assert!(text.contains("22%"));
    }

    #[test]
    fn test_overflow_is_rendered() {
        let mut app = create_test_app("ab");
        app.set_input("abzz");

        let text = rendered_text(&render(&app, 80, 24));

        assert!(text.contains("abzz"));
    }

    #[test]
    fn test_summary_popup_after_completion() {
        let mut app = create_test_app("ab");
        app.write('a');
        app.on_tick(Duration::from_secs(2));
        app.write('b');

        let text = rendered_text(&render(&app, 80, 24));

        assert!(text.contains("2 s"));
        assert!(text.contains("30 WPM"));
        assert!(text.contains("100%"));
        assert!(text.contains("(n)ext"));
    }

    #[test]
    fn test_light_theme_background() {
        let mut app = create_test_app("ab");
        app.toggle_theme();

        let buffer = render(&app, 40, 10);

        assert_eq!(buffer.cell((0, 0)).unwrap().bg, Color::White);
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let app = create_test_app(
            "Consistency is the key to mastering typing speed. Practicing deliberately helps.",
        );

        let buffer = render(&app, 8, 3);

        assert_eq!(buffer.area().width, 8);
    }

    #[test]
    fn test_long_quote_wraps() {
        let quote = "Software engineering requires clear thinking, collaboration, and a focus on maintainable, well-tested code that solves user problems.";
        let app = create_test_app(quote);

        let text = rendered_text(&render(&app, 40, 20));

        assert!(text.contains("Software"));
        assert!(text.contains("problems."));
    }
}
