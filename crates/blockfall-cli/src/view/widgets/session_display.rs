use blockfall_engine::{GameSession, PieceSource, Status};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use super::{BoardDisplay, StatsDisplay, color, style};

/// The board with a stats panel beside it and a banner for the current
/// status.
#[derive(Debug)]
pub struct SessionDisplay<'a, S> {
    session: &'a GameSession<S>,
}

impl<'a, S> SessionDisplay<'a, S>
where
    S: PieceSource,
{
    pub fn new(session: &'a GameSession<S>) -> Self {
        Self { session }
    }

    fn board_display(&self) -> BoardDisplay<'static> {
        BoardDisplay::new(self.session.render()).block(
            Block::bordered()
                .border_style(self.border_color())
                .style(style::DEFAULT),
        )
    }

    fn stats_display(&self) -> StatsDisplay<'static> {
        StatsDisplay::new(*self.session.state().stats()).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::symmetric(1, 0))
                .border_style(self.border_color())
                .style(style::DEFAULT),
        )
    }

    fn border_color(&self) -> ratatui::style::Color {
        match self.session.state().status() {
            Status::NotStarted => color::GRAY,
            Status::Running => color::WHITE,
            Status::Paused => color::YELLOW,
            Status::GameOver => color::RED,
        }
    }

    pub fn height(&self) -> u16 {
        self.board_display().height()
    }
}

impl<S> Widget for SessionDisplay<'_, S>
where
    S: PieceSource,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        let game_board = self.board_display();
        let stats = self.stats_display();

        let [board_column, stats_column] = Layout::horizontal([
            Constraint::Length(game_board.width()),
            Constraint::Length(stats.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);
        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(board_column);
        let [stats_area] =
            Layout::vertical([Constraint::Length(stats.height())]).areas(stats_column);

        let board_width = game_board.width();
        game_board.render(board_area, buf);
        stats.render(stats_area, buf);

        let popup = match self.session.state().status() {
            Status::Running => None,
            Status::NotStarted => Some((
                "PRESS ENTER",
                Style::new().fg(color::BLACK).bg(color::GRAY),
            )),
            Status::Paused => Some(("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW))),
            Status::GameOver => Some((
                "Game Over!",
                Style::new().fg(color::WHITE).bg(color::RED),
            )),
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area = board_area.centered(Constraint::Length(board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
