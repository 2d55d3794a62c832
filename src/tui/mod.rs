//! Terminal User Interface
//!
//! Full-screen front end for the mansion using ratatui

pub mod app;

pub use app::App;

use crate::game::Tone;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Get color for a message tone
pub fn tone_color(tone: Tone, theme: &Theme) -> Color {
    match tone {
        Tone::Info => theme.fg,
        Tone::Discovery => theme.accent,
        Tone::Warning => theme.warning,
        Tone::Success => theme.success,
        Tone::Failure => theme.alert,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// Key help for the status bar
pub const EXPLORE_KEYS: &str = " e/← esquerda │ d/→ direita │ s/Esc sair da exploração ";
pub const ACCUSE_KEYS: &str = " digite o nome │ Enter acusar │ Backspace apagar ";
pub const SUMMARY_KEYS: &str = " q/Enter/Esc fechar ";

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(3),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (room panel + main area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),  // Room and exits
            Constraint::Percentage(65),  // Main area
        ])
        .split(area)
        .to_vec()
}

/// Create the main area layout (messages + clues)
pub fn create_main_area_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60),  // Messages
            Constraint::Percentage(40),  // Clues
        ])
        .split(area)
        .to_vec()
}

/// A rectangle centered in `area`
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_the_area() {
        let area = Rect::new(0, 0, 100, 30);
        let popup = centered_rect(60, 6, area);
        assert_eq!(popup, Rect::new(20, 12, 60, 6));
    }

    #[test]
    fn centered_rect_handles_wide_terminals() {
        let area = Rect::new(0, 0, 2_000, 50);
        let popup = centered_rect(70, 7, area);
        assert_eq!(popup.width, 1_400);
        assert_eq!(popup.x, 300);

        let clamped = centered_rect(150, 80, Rect::new(5, 5, 40, 10));
        assert_eq!(clamped, Rect::new(5, 5, 40, 10));
    }
}
