use std::iter;

use blockfall_engine::{Board, HEIGHT, WIDTH};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use super::CellDisplay;

/// Draws a rendered board grid, top row first.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: Board,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: Board) -> Self {
        Self { board, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        WIDTH as u16 * CellDisplay::WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        HEIGHT as u16 * CellDisplay::HEIGHT + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..WIDTH).map(|_| Constraint::Length(CellDisplay::WIDTH));
        let row_constraints = (0..HEIGHT).map(|_| Constraint::Length(CellDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints).flex(Flex::Center);

        let row_areas = vertical.split(area);
        for (row, row_area) in iter::zip(self.board.rows(), row_areas.iter().copied()) {
            let cell_areas = horizontal.split(row_area);
            for (cell, cell_area) in iter::zip(row, cell_areas.iter().copied()) {
                CellDisplay::from_cell(*cell).render(cell_area, buf);
            }
        }
    }
}
