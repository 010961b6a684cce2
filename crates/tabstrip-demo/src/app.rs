//! Demo application: a tab bar on the top row, status below.
//!
//! Left-clicking a label activates that tab. The click column is resolved
//! through the range cache of the last render.

use color_eyre::eyre::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info};

use tabstrip::{TabHeaders, theme};

use crate::tui::Tui;

/// Row of the tab bar within the terminal.
const HEADER_ROW: u16 = 0;

pub struct App {
    headers: TabHeaders,
    running: bool,
}

impl App {
    pub fn new(headers: TabHeaders) -> Self {
        Self {
            headers,
            running: true,
        }
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        info!(active = self.headers().active_name(), "tab bar running");

        while self.running {
            tui.draw(|frame| self.render(frame))?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse)?,
                // Resize and everything else just trigger a redraw.
                _ => {}
            }
        }

        tui.exit();
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || mouse.row != HEADER_ROW {
            return Ok(());
        }
        self.click(mouse.column)
    }

    /// Activate whatever tab label sits under `column`, if any.
    pub fn click(&mut self, column: u16) -> Result<()> {
        let Some(name) = self.headers.tab_at(column).map(str::to_owned) else {
            debug!(column, "click outside any tab label");
            return Ok(());
        };
        if name != self.headers.active_name() {
            info!(tab = %name, column, "activating tab");
            self.headers.set_active(&name)?;
        }
        Ok(())
    }

    pub fn headers(&self) -> &TabHeaders {
        &self.headers
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        frame.render_widget(&mut self.headers, header);
        self.render_body(frame, body);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(vec![
            Span::styled("active: ", theme::body_text()),
            Span::styled(self.headers.active_name().to_owned(), theme::title_style()),
        ])];
        lines.extend(self.headers.ranges().iter().map(|(name, range)| {
            Line::styled(
                format!("  {name:<12} {}..{}", range.start, range.end),
                theme::body_text(),
            )
        }));
        lines.push(Line::default());
        lines.push(Line::styled("click a tab · q quit", theme::key_hint()));

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(theme::key_hint())
            .title(Span::styled(" ranges ", theme::title_style()));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
