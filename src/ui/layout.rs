use crate::ui::app::Control;
use ratatui::layout::{Constraint, Layout, Position, Rect};

pub const CARD_WIDTH: u16 = 44;
pub const CARD_HEIGHT: u16 = 11;
pub const BUTTON_WIDTH: u16 = 15;
pub const BUTTON_HEIGHT: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Where each element of the counter widget lands on screen.
///
/// Shared by the renderer and mouse hit-testing so clicks always match what
/// was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterLayout {
    pub card: Rect,
    pub display: Rect,
    pub increment: Rect,
    pub decrement: Rect,
    pub error: Rect,
}

impl CounterLayout {
    /// Lays the widget out in the body region of a `screen`-sized terminal.
    pub fn for_screen(screen: Rect) -> Self {
        Self::for_body(body_rect(screen))
    }

    pub fn for_body(body: Rect) -> Self {
        let card = centered_rect_by_size(body, CARD_WIDTH, CARD_HEIGHT);
        let inner = Rect {
            x: card.x.saturating_add(1),
            y: card.y.saturating_add(1),
            width: card.width.saturating_sub(2),
            height: card.height.saturating_sub(2),
        };

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        let buttons = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(2),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Fill(1),
        ])
        .split(rows[3]);

        Self {
            card,
            display: rows[1],
            increment: buttons[1],
            decrement: buttons[3],
            error: rows[5],
        }
    }

    pub fn control_area(&self, control: Control) -> Rect {
        match control {
            Control::Increment => self.increment,
            Control::Decrement => self.decrement,
        }
    }

    /// Control under the terminal cell (`column`, `row`), if any.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        Control::ALL
            .into_iter()
            .find(|control| self.control_area(*control).contains(position))
    }
}
