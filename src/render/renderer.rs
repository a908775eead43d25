use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, Drawable, GameEngine, Paint, Palette, Rgb};
use crate::metrics::GameMetrics;

/// Each cell is two terminal columns wide so it looks roughly square
const CELL_GLYPH: &str = "  ";

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn render(&self, frame: &mut Frame, engine: &GameEngine, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(engine, metrics), chunks[0]);
        frame.render_widget(self.render_board(engine), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// Resolve what sits on every painted cell; later layers win
    fn paint_map(&self, layers: &[&dyn Drawable]) -> HashMap<Cell, Paint> {
        layers.iter().flat_map(|layer| layer.cells()).collect()
    }

    fn render_board(&self, engine: &GameEngine) -> Paragraph<'_> {
        let grid = engine.grid();
        let painted = self.paint_map(&[engine.apple(), engine.snake()]);
        let background = Style::default().bg(to_color(self.palette.background));

        let lines: Vec<Line> = (0..grid.height())
            .map(|y| {
                let spans: Vec<Span> = (0..grid.width())
                    .map(|x| match painted.get(&Cell::new(x, y)) {
                        Some(&paint) => Span::styled(
                            CELL_GLYPH,
                            Style::default().bg(to_color(self.palette.color(paint))),
                        ),
                        None => Span::styled(CELL_GLYPH, background),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Plain)
                    .border_style(Style::default().fg(to_color(self.palette.border)))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, engine: &GameEngine, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let text = Line::from(vec![
            Span::styled("Length: ", label),
            Span::styled(engine.snake().len().to_string(), value),
            Span::raw("    "),
            Span::styled("Apples: ", label),
            Span::styled(metrics.apples_eaten.to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_length.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}
