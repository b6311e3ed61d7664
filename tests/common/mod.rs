//! Shared test utilities.

#![allow(dead_code)]

use click_counter::config::Config;
use click_counter::ui::app::{App, Control};
use click_counter::ui::counter::{CounterView, Element, TestId};
use click_counter::ui::render::draw;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Modifier;
use ratatui::Terminal;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SCREEN_COLS: u16 = 80;
pub const SCREEN_ROWS: u16 = 24;

/// Mounts the widget on an 80x24 screen, optionally preset to `counter`.
pub fn setup(counter: Option<u64>) -> App {
    let mut config = Config::default();
    if let Some(counter) = counter {
        config.counter.initial = counter;
    }
    let mut app = App::new(&config);
    app.on_resize(SCREEN_COLS, SCREEN_ROWS);
    app
}

/// Elements of the rendered view whose identifying attribute equals `value`.
pub fn find_by_test_attr<'a>(view: &'a CounterView, value: &str) -> Vec<&'a Element> {
    match TestId::parse(value) {
        Some(id) => view.find_all(id).collect(),
        None => Vec::new(),
    }
}

pub fn control_for(id: TestId) -> Control {
    match id {
        TestId::IncrementButton => Control::Increment,
        TestId::DecrementButton => Control::Decrement,
        other => panic!("{} is not clickable", other.as_str()),
    }
}

/// Left-clicks the middle of the control identified by `id`.
pub fn click(app: &mut App, id: TestId) {
    let control = control_for(id);
    let area = app.layout().control_area(control);
    let hit = app.on_click(area.x + area.width / 2, area.y + area.height / 2);
    assert_eq!(hit, Some(control), "click missed {}", id.as_str());
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

/// Draws one frame of `app` into an in-memory terminal.
pub fn render(app: &App) -> Buffer {
    let mut terminal =
        Terminal::new(TestBackend::new(SCREEN_COLS, SCREEN_ROWS)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal.backend().buffer().clone()
}

/// Position of the first cell where `needle` starts, scanning row by row.
pub fn find_text(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    let needle: Vec<String> = needle.chars().map(|c| c.to_string()).collect();
    let area = buffer.area;
    for y in area.top()..area.bottom() {
        let row: Vec<&str> = (area.left()..area.right())
            .map(|x| buffer.cell((x, y)).map(|cell| cell.symbol()).unwrap_or(""))
            .collect();
        if row.len() < needle.len() {
            continue;
        }
        for start in 0..=(row.len() - needle.len()) {
            if row[start..start + needle.len()]
                .iter()
                .zip(&needle)
                .all(|(cell, ch)| *cell == ch.as_str())
            {
                return Some((area.left() + start as u16, y));
            }
        }
    }
    None
}

/// True when every cell of `text` at its first occurrence carries HIDDEN.
pub fn text_is_hidden(buffer: &Buffer, text: &str) -> bool {
    let (x, y) = find_text(buffer, text).expect("text not rendered");
    (x..x + text.chars().count() as u16).all(|cx| {
        buffer
            .cell((cx, y))
            .map(|cell| cell.modifier.contains(Modifier::HIDDEN))
            .unwrap_or(false)
    })
}

/// Writes `contents` to `config.toml` in a fresh temp dir.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, contents).expect("Failed to write config");
    (temp_dir, config_path)
}
