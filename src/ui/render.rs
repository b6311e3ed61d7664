use crate::ui::app::{App, Control};
use crate::ui::counter::{CounterView, Element, TestId};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, CounterLayout};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BUTTON_BORDER, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.counter()), header);
    frame.render_widget(Clear, body);
    draw_counter(frame, &app.view(), CounterLayout::for_body(body), app.focus());
    frame.render_widget(Footer::new(app.keys()).widget(footer), footer);
}

/// Draws each element of the view into its slot of `layout`.
fn draw_counter(frame: &mut Frame<'_>, view: &CounterView, layout: CounterLayout, focus: Control) {
    let root = view.root();
    let card = Block::default()
        .title(Span::styled(root.text.clone(), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(card, layout.card);

    for element in view.children() {
        match element.id {
            TestId::CounterDisplay => {
                let style = Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD);
                render_text(frame, element, layout.display, style);
            }
            TestId::ErrorMessage => {
                render_text(frame, element, layout.error, Style::default().fg(STATUS_ERROR));
            }
            TestId::IncrementButton => {
                render_button(frame, element, layout.increment, focus == Control::Increment);
            }
            TestId::DecrementButton => {
                render_button(frame, element, layout.decrement, focus == Control::Decrement);
            }
            TestId::ComponentApp => {}
        }
    }
}

fn presentation(element: &Element, style: Style) -> Style {
    if element.hidden {
        style.add_modifier(Modifier::HIDDEN)
    } else {
        style
    }
}

fn render_text(frame: &mut Frame<'_>, element: &Element, area: Rect, style: Style) {
    let widget = Paragraph::new(element.text.clone())
        .style(presentation(element, style))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_button(frame: &mut Frame<'_>, element: &Element, area: Rect, focused: bool) {
    let (border, background) = if focused {
        (Style::default().fg(ACCENT), Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        (Style::default().fg(BUTTON_BORDER), Style::default())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .style(background);
    let widget = Paragraph::new(element.text.clone())
        .style(presentation(element, Style::default().fg(HEADER_TEXT)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(widget, area);
}
