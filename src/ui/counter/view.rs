//! `State -> View` projection.
//!
//! The view is a flat element list under one root. Every element carries a
//! stable [`TestId`] so callers (the terminal renderer, tests) can locate it
//! without depending on layout.

use super::state::CounterState;

pub const ERROR_MESSAGE: &str = "The counter cannot go below zero";

pub const WIDGET_TITLE: &str = "Click Counter";

/// Stable identifying attribute of a rendered element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestId {
    ComponentApp,
    IncrementButton,
    DecrementButton,
    CounterDisplay,
    ErrorMessage,
}

impl TestId {
    pub const ALL: [TestId; 5] = [
        TestId::ComponentApp,
        TestId::IncrementButton,
        TestId::DecrementButton,
        TestId::CounterDisplay,
        TestId::ErrorMessage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TestId::ComponentApp => "component-app",
            TestId::IncrementButton => "increment-button",
            TestId::DecrementButton => "decrement-button",
            TestId::CounterDisplay => "counter-display",
            TestId::ErrorMessage => "error-message",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: TestId,
    pub text: String,
    /// Present in the output but visually suppressed.
    pub hidden: bool,
}

impl Element {
    fn shown(id: TestId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            hidden: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    root: Element,
    children: Vec<Element>,
}

impl CounterView {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// All elements carrying `id`, root included.
    pub fn find_all(&self, id: TestId) -> impl Iterator<Item = &Element> {
        std::iter::once(&self.root)
            .chain(self.children.iter())
            .filter(move |element| element.id == id)
    }

    pub fn find(&self, id: TestId) -> Option<&Element> {
        self.find_all(id).next()
    }

    pub fn counter_text(&self) -> &str {
        self.find(TestId::CounterDisplay)
            .map(|element| element.text.as_str())
            .unwrap_or_default()
    }

    pub fn error_hidden(&self) -> bool {
        self.find(TestId::ErrorMessage)
            .map(|element| element.hidden)
            .unwrap_or(true)
    }
}

impl CounterState {
    pub fn view(&self) -> CounterView {
        CounterView {
            root: Element::shown(TestId::ComponentApp, WIDGET_TITLE),
            children: vec![
                Element::shown(TestId::CounterDisplay, format!("Counter: {}", self.counter())),
                Element::shown(TestId::IncrementButton, "Increment"),
                Element::shown(TestId::DecrementButton, "Decrement"),
                Element {
                    id: TestId::ErrorMessage,
                    text: ERROR_MESSAGE.to_string(),
                    hidden: !self.error_visible(),
                },
            ],
        }
    }
}
