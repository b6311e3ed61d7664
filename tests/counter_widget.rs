//! Rendered-element behavior of the counter widget: every element is found by
//! its identifying attribute, and clicks drive the display and error indicator.

mod common;

use click_counter::ui::counter::TestId;
use common::*;

#[test]
fn renders_without_errors() {
    let app = setup(None);
    let view = app.view();
    assert_eq!(find_by_test_attr(&view, "component-app").len(), 1);
}

#[test]
fn renders_increment_button() {
    let app = setup(None);
    let view = app.view();
    assert_eq!(find_by_test_attr(&view, "increment-button").len(), 1);
}

#[test]
fn renders_counter_display() {
    let app = setup(None);
    let view = app.view();
    assert_eq!(find_by_test_attr(&view, "counter-display").len(), 1);
}

#[test]
fn counter_starts_at_0() {
    let app = setup(None);
    assert_eq!(app.counter().counter(), 0);
}

#[test]
fn clicking_increment_increments_counter_display() {
    let counter = 7;
    let mut app = setup(Some(counter));

    click(&mut app, TestId::IncrementButton);

    let view = app.view();
    let display = find_by_test_attr(&view, "counter-display");
    assert!(display[0].text.contains(&(counter + 1).to_string()));
}

#[test]
fn unknown_attribute_finds_nothing() {
    let app = setup(None);
    let view = app.view();
    assert!(find_by_test_attr(&view, "reset-button").is_empty());
}

mod decrement {
    use super::common::*;
    use click_counter::ui::counter::TestId;

    #[test]
    fn renders_decrement_button() {
        let app = setup(None);
        let view = app.view();
        assert_eq!(find_by_test_attr(&view, "decrement-button").len(), 1);
    }

    #[test]
    fn clicking_decrement_decrements_counter_display_above_zero() {
        let counter = 7;
        let mut app = setup(Some(counter));

        click(&mut app, TestId::DecrementButton);

        let view = app.view();
        let display = find_by_test_attr(&view, "counter-display");
        assert!(display[0].text.contains(&(counter - 1).to_string()));
    }

    #[test]
    fn error_does_not_show_when_not_needed() {
        let app = setup(None);
        let view = app.view();
        let error = find_by_test_attr(&view, "error-message");
        assert_eq!(error.len(), 1);
        assert!(error[0].hidden);
    }

    mod counter_is_0_and_decrement_is_clicked {
        use super::super::common::*;
        use click_counter::ui::app::App;
        use click_counter::ui::counter::TestId;

        fn clicked_at_zero() -> App {
            let mut app = setup(None);
            click(&mut app, TestId::DecrementButton);
            app
        }

        #[test]
        fn error_shows() {
            let app = clicked_at_zero();
            let view = app.view();
            let error = find_by_test_attr(&view, "error-message");
            assert!(!error[0].hidden);
        }

        #[test]
        fn counter_still_displays_0() {
            let app = clicked_at_zero();
            let view = app.view();
            let display = find_by_test_attr(&view, "counter-display");
            assert!(display[0].text.contains('0'));
            assert_eq!(app.counter().counter(), 0);
        }

        #[test]
        fn clicking_increment_clears_the_error() {
            let mut app = clicked_at_zero();
            click(&mut app, TestId::IncrementButton);

            let view = app.view();
            let error = find_by_test_attr(&view, "error-message");
            assert!(error[0].hidden);
            assert!(find_by_test_attr(&view, "counter-display")[0]
                .text
                .contains('1'));
        }

        #[test]
        fn repeated_decrements_keep_error_and_zero() {
            let mut app = clicked_at_zero();
            click(&mut app, TestId::DecrementButton);
            click(&mut app, TestId::DecrementButton);

            let view = app.view();
            assert!(!view.error_hidden());
            assert_eq!(view.counter_text(), "Counter: 0");
        }
    }
}
