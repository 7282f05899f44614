use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::Snapshot;

/// Supplemental values displayed next to the live score.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub high_score: u32,
    pub grid_size: u16,
}

/// Renders the single-line HUD into `area`.
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot,
    info: HudInfo,
    theme: &Theme,
) {
    let line = Line::from(vec![
        Span::styled(
            format!(" Score {}", snapshot.score),
            Style::default().fg(theme.hud_score),
        ),
        Span::styled(
            format!("   High {}", info.high_score),
            Style::default().fg(theme.menu_footer),
        ),
        Span::styled(
            format!("   {0}\u{d7}{0}", info.grid_size),
            Style::default().fg(theme.menu_footer),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
