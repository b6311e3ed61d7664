use crate::ui::app::{App, Control};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    let keys = app.keys().clone();
    match key.code {
        KeyCode::Char(ch) if ch == keys.quit => app.request_quit(),
        KeyCode::Char(ch) if ch == keys.increment => app.activate(Control::Increment),
        KeyCode::Char(ch) if ch == keys.decrement => app.activate(Control::Decrement),
        KeyCode::Char('k') | KeyCode::Up => app.activate(Control::Increment),
        KeyCode::Char('j') | KeyCode::Down => app.activate(Control::Decrement),
        KeyCode::Tab | KeyCode::BackTab => app.focus_next(),
        KeyCode::Left => app.set_focus(Control::Increment),
        KeyCode::Right => app.set_focus(Control::Decrement),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
        app.on_click(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
