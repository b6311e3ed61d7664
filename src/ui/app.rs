use crate::config::{Config, KeyBindings};
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState, CounterView};
use crate::ui::layout::CounterLayout;
use crate::ui::mvi::Reducer;
use ratatui::layout::Rect;

/// One of the two activatable controls of the counter widget.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Control {
    Increment,
    Decrement,
}

impl Control {
    pub const ALL: [Control; 2] = [Control::Increment, Control::Decrement];

    pub fn intent(self) -> CounterIntent {
        match self {
            Control::Increment => CounterIntent::Increment,
            Control::Decrement => CounterIntent::Decrement,
        }
    }

    /// Focus order wraps; with two controls next and previous coincide.
    pub fn next(self) -> Self {
        match self {
            Control::Increment => Control::Decrement,
            Control::Decrement => Control::Increment,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Application shell around the counter widget.
///
/// Owns the widget state (mutated only through [`App::dispatch_counter`]),
/// keyboard focus, the last known screen size for hit-testing, and the quit
/// flag.
pub struct App {
    should_quit: bool,
    counter: CounterState,
    focus: Control,
    screen: Rect,
    keys: KeyBindings,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            counter: CounterState::with_counter(config.counter.initial),
            focus: Control::Increment,
            screen: Rect::default(),
            keys: config.keys.clone(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn keys(&self) -> &KeyBindings {
        &self.keys
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn view(&self) -> CounterView {
        self.counter.view()
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn set_focus(&mut self, control: Control) {
        self.focus = control;
    }

    /// Presses the control: moves focus to it and dispatches its intent.
    pub fn activate(&mut self, control: Control) {
        self.focus = control;
        self.dispatch_counter(control.intent());
    }

    pub fn activate_focused(&mut self) {
        self.activate(self.focus);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.screen = Rect::new(0, 0, cols, rows);
    }

    /// Layout matching the last drawn frame.
    pub fn layout(&self) -> CounterLayout {
        CounterLayout::for_screen(self.screen)
    }

    /// Left click at a terminal cell. Returns the control that was hit.
    pub fn on_click(&mut self, column: u16, row: u16) -> Option<Control> {
        let control = self.layout().control_at(column, row)?;
        self.activate(control);
        Some(control)
    }

    /// Dispatch an intent to the counter reducer.
    pub fn dispatch_counter(&mut self, intent: CounterIntent) {
        let before = self.counter;
        dispatch_mvi!(self, counter, CounterReducer, intent);
        tracing::debug!(
            ?intent,
            from = before.counter(),
            to = self.counter.counter(),
            error_visible = self.counter.error_visible(),
            "counter intent"
        );
        if is_rejected_decrement(&before, intent) {
            tracing::warn!(already_visible = before.error_visible(), "decrement rejected at zero");
        }
    }
}

/// A decrement at zero is rejected every time, not only on the first attempt.
fn is_rejected_decrement(before: &CounterState, intent: CounterIntent) -> bool {
    intent == CounterIntent::Decrement && before.counter() == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app(initial: u64) -> App {
        let mut config = Config::default();
        config.counter.initial = initial;
        let mut app = App::new(&config);
        app.on_resize(80, 24);
        app
    }

    #[test]
    fn mounts_with_configured_counter() {
        let app = make_app(7);
        assert_eq!(app.counter().counter(), 7);
        assert!(!app.counter().error_visible());
        assert_eq!(app.focus(), Control::Increment);
        assert!(!app.should_quit());
    }

    #[test]
    fn activate_moves_focus() {
        let mut app = make_app(7);
        app.activate(Control::Decrement);
        assert_eq!(app.focus(), Control::Decrement);
        assert_eq!(app.counter().counter(), 6);
    }

    #[test]
    fn activate_focused_uses_current_focus() {
        let mut app = make_app(0);
        app.focus_next();
        app.activate_focused();
        assert_eq!(app.counter().counter(), 0);
        assert!(app.counter().error_visible());
    }

    #[test]
    fn click_on_button_dispatches() {
        let mut app = make_app(0);
        let area = app.layout().increment;
        assert_eq!(app.on_click(area.x + 1, area.y + 1), Some(Control::Increment));
        assert_eq!(app.counter().counter(), 1);
    }

    #[test]
    fn click_outside_buttons_is_ignored() {
        let mut app = make_app(4);
        assert_eq!(app.on_click(0, 0), None);
        assert_eq!(app.counter().counter(), 4);
    }

    #[test]
    fn click_before_first_resize_hits_nothing() {
        let mut app = App::new(&Config::default());
        assert_eq!(app.on_click(0, 0), None);
        assert_eq!(app.counter().counter(), 0);
    }

    #[test]
    fn every_decrement_at_zero_counts_as_rejected() {
        let mut app = make_app(0);
        assert!(is_rejected_decrement(app.counter(), CounterIntent::Decrement));
        app.activate(Control::Decrement);
        assert!(app.counter().error_visible());
        assert!(is_rejected_decrement(app.counter(), CounterIntent::Decrement));
        assert!(!is_rejected_decrement(app.counter(), CounterIntent::Increment));
        assert!(!is_rejected_decrement(
            &CounterState::with_counter(1),
            CounterIntent::Decrement
        ));
    }

    #[test]
    fn focus_wraps() {
        let mut app = make_app(0);
        app.focus_next();
        app.focus_next();
        assert_eq!(app.focus(), Control::Increment);
    }
}
