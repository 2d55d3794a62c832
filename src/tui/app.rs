//! Main application state and rendering

use crate::game::{narrative, Branch, Command, ExplorationEngine, Game, GameMessage, Variant, Verdict};
use crate::tui::{centered_rect, styled_block, tone_color, Theme, ACCUSE_KEYS, EXPLORE_KEYS, SUMMARY_KEYS};
use crate::tui::{create_content_layout, create_main_area_layout, create_main_layout};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Application state
pub struct App<'w> {
    pub game: &'w Game,
    pub engine: ExplorationEngine<'w>,
    pub theme: Theme,
    pub running: bool,
    pub current_screen: Screen,
    pub input_buffer: String,
    pub message_log: Vec<GameMessage>,
    pub verdict: Option<Verdict>,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Exploring,
    Accusing,
    Summary,
}

impl<'w> App<'w> {
    pub fn new(game: &'w Game, variant: Variant) -> Self {
        let mut engine = game.explore(variant);
        let mut message_log: Vec<GameMessage> = narrative::banner(&game.title, game.map.entry().name())
            .iter()
            .map(|line| GameMessage::info(line))
            .collect();
        message_log.extend(engine.take_opening().iter().map(GameMessage::from));

        let mut app = Self {
            game,
            engine,
            theme: Theme::default(),
            running: true,
            current_screen: Screen::Exploring,
            input_buffer: String::new(),
            message_log,
            verdict: None,
        };
        // A tour can end on its very first room
        app.after_step();
        app
    }

    /// Handle keyboard input
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(self.running)
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match self.current_screen {
            Screen::Exploring => {
                let command = match code {
                    KeyCode::Left => Command::Go(Branch::Left),
                    KeyCode::Right => Command::Go(Branch::Right),
                    KeyCode::Esc => Command::Quit,
                    KeyCode::Char(c) => Command::parse(&c.to_string()),
                    _ => return,
                };
                let notices = self.engine.step(command);
                self.message_log.extend(notices.iter().map(GameMessage::from));
                self.after_step();
            }
            Screen::Accusing => match code {
                KeyCode::Enter => self.accuse(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                _ => {}
            },
            Screen::Summary => {
                if matches!(code, KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc) {
                    self.running = false;
                }
            }
        }
    }

    fn after_step(&mut self) {
        if !self.engine.is_exited() {
            return;
        }
        self.current_screen = if self.engine.variant().resolves_suspects() {
            self.message_log.push(GameMessage::info(narrative::ACCUSATION_PROMPT));
            Screen::Accusing
        } else {
            Screen::Summary
        };
    }

    fn accuse(&mut self) {
        let verdict = self.game.accuse(self.engine.clues(), &self.input_buffer);
        self.message_log.push(GameMessage::from(&verdict));
        self.verdict = Some(verdict);
        self.current_screen = Screen::Summary;
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = create_main_layout(area);

        self.render_header(frame, layout[0]);

        let content_layout = create_content_layout(layout[1]);
        self.render_room_panel(frame, content_layout[0]);

        let main_layout = create_main_area_layout(content_layout[1]);
        self.render_messages(frame, main_layout[0]);
        self.render_clues(frame, main_layout[1]);

        self.render_status_bar(frame, layout[2]);

        match self.current_screen {
            Screen::Accusing => self.render_accusation(frame),
            Screen::Summary => self.render_summary(frame),
            Screen::Exploring => {}
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(self.game.title.as_str())
            .style(Style::default().fg(self.theme.header).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(styled_block(&format!("v{}", crate::VERSION), &self.theme));
        frame.render_widget(title, area);
    }

    fn render_room_panel(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        match self.engine.current() {
            Some(room) => {
                lines.push(Line::from(Span::styled(
                    room.name().to_string(),
                    Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));
                for choice in narrative::choices(room) {
                    lines.push(Line::from(choice));
                }
            }
            None => lines.push(Line::from(Span::styled(
                "Exploração encerrada.",
                Style::default().fg(self.theme.warning),
            ))),
        }

        let path = self
            .engine
            .path()
            .iter()
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(" → ");
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Caminho: {}", if path.is_empty() { "-" } else { path.as_str() })));

        if self.engine.variant().resolves_suspects() {
            lines.push(Line::from(""));
            lines.push(Line::from("Suspeitos:"));
            for suspect in self.game.suspects() {
                lines.push(Line::from(format!("  • {}", suspect)));
            }
        }

        let panel = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(styled_block("Local", &self.theme));
        frame.render_widget(panel, area);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let skip = self.message_log.len().saturating_sub(visible);
        let items: Vec<ListItem> = self
            .message_log
            .iter()
            .skip(skip)
            .map(|m| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("[{}] ", m.timestamp.format("%H:%M:%S")),
                        Style::default().fg(self.theme.border),
                    ),
                    Span::styled(m.message.clone(), Style::default().fg(tone_color(m.tone, &self.theme))),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items).block(styled_block("Diário", &self.theme)), area);
    }

    fn render_clues(&self, frame: &mut Frame, area: Rect) {
        let title = format!("Pistas ({})", self.engine.clues().len());
        let lines: Vec<Line> = if self.engine.variant().collects_clues() {
            narrative::clue_listing(self.engine.clues())
                .into_iter()
                .map(Line::from)
                .collect()
        } else {
            vec![Line::from("Pistas não são coletadas neste modo.")]
        };
        let panel = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(styled_block(&title, &self.theme));
        frame.render_widget(panel, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let keys = match self.current_screen {
            Screen::Exploring => EXPLORE_KEYS,
            Screen::Accusing => ACCUSE_KEYS,
            Screen::Summary => SUMMARY_KEYS,
        };
        let status = Paragraph::new(keys)
            .style(Style::default().fg(self.theme.fg))
            .block(styled_block(&format!("Modo: {}", self.engine.variant()), &self.theme));
        frame.render_widget(status, area);
    }

    fn render_accusation(&self, frame: &mut Frame) {
        let area = centered_rect(60, 6, frame.area());
        frame.render_widget(Clear, area);
        let prompt = Paragraph::new(vec![
            Line::from(narrative::ACCUSATION_PROMPT),
            Line::from(""),
            Line::from(Span::styled(
                format!("→ {}▏", self.input_buffer),
                Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD),
            )),
        ])
        .wrap(Wrap { trim: false })
        .block(styled_block("Julgamento Final", &self.theme));
        frame.render_widget(prompt, area);
    }

    fn render_summary(&self, frame: &mut Frame) {
        let mut lines = vec![Line::from("")];
        match &self.verdict {
            Some(verdict) => {
                let message = GameMessage::from(verdict);
                lines.push(Line::from(Span::styled(
                    message.message,
                    Style::default().fg(tone_color(message.tone, &self.theme)).add_modifier(Modifier::BOLD),
                )));
            }
            None => lines.push(Line::from(format!(
                "Exploração concluída com {} pista(s).",
                self.engine.clues().len()
            ))),
        }
        lines.push(Line::from(""));
        lines.push(Line::from(narrative::FAREWELL));

        let area = centered_rect(70, 7, frame.area());
        frame.render_widget(Clear, area);
        let summary = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(styled_block("Resultado", &self.theme));
        frame.render_widget(summary, area);
    }
}
