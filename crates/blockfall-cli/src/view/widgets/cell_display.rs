use blockfall_engine::{Cell, PieceColor};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use super::style;

/// One board cell, drawn two columns wide so it looks square.
#[derive(Debug)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const WIDTH: u16 = 2;
    pub const HEIGHT: u16 = 1;

    pub const fn from_cell(cell: Cell) -> Self {
        let style = match cell {
            Cell::Empty => {
                return Self {
                    style: style::EMPTY_DOT,
                    symbol: ".",
                };
            }
            Cell::Filled(PieceColor::Cyan) => style::CYAN_CELL,
            Cell::Filled(PieceColor::Blue) => style::BLUE_CELL,
            Cell::Filled(PieceColor::Orange) => style::ORANGE_CELL,
            Cell::Filled(PieceColor::Yellow) => style::YELLOW_CELL,
            Cell::Filled(PieceColor::Green) => style::GREEN_CELL,
            Cell::Filled(PieceColor::Purple) => style::PURPLE_CELL,
            Cell::Filled(PieceColor::Red) => style::RED_CELL,
        };
        Self { style, symbol: "" }
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
