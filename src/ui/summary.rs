use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::Palette;
use crate::{app::Summary, celebration::Bounce};

const POPUP_WIDTH: u16 = 40;
const POPUP_HEIGHT: u16 = 9;

/// Centered dialog area, lifted by `lift` rows while a bounce plays
pub fn popup_rect(area: Rect, lift: u16) -> Rect {
    let width = POPUP_WIDTH.min(area.width);
    let height = POPUP_HEIGHT.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = (area.y + (area.height - height) / 2).saturating_sub(lift).max(area.y);
    Rect::new(x, y, width, height)
}

pub fn render_summary(
    summary: &Summary,
    celebration: &Bounce,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let rect = popup_rect(area, celebration.lift());
    let bold_style = palette.base.add_modifier(Modifier::BOLD);
    let accent_style = bold_style.fg(palette.accent);

    let title = if summary.new_best {
        format!(" {} ", celebration.banner)
    } else {
        " finished ".to_string()
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("time      ", palette.base),
            Span::styled(format!("{} s", summary.elapsed_secs), bold_style),
        ]),
        Line::from(vec![
            Span::styled("speed     ", palette.base),
            Span::styled(format!("{} WPM", summary.wpm), bold_style),
        ]),
        Line::from(vec![
            Span::styled("accuracy  ", palette.base),
            Span::styled(format!("{}%", summary.accuracy), bold_style),
        ]),
    ];
    if summary.new_best {
        lines.push(Line::from(Span::styled(
            format!("new best on {}", summary.difficulty),
            accent_style,
        )));
    } else {
        lines.push(Line::default());
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "(n)ext / (r)estart / (c)lose",
        palette.base.add_modifier(Modifier::ITALIC),
    )));

    Clear.render(rect, buf);
    Paragraph::new(lines)
        .style(palette.base)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(accent_style)
                .title(Span::styled(title, accent_style)),
        )
        .render(rect, buf);
}
