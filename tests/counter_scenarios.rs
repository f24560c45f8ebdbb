use tcounter::application::App;
use tcounter::domain::{Counter, DisplayColor, SecondaryCounter, HISTORY_CAPACITY};

#[test]
fn step_change_then_reset_scenario() {
    let mut counter = Counter::default();
    assert_eq!(counter.count(), 0);
    assert_eq!(counter.step().get(), 1);
    assert!(counter.history().is_empty());

    let snapshot = counter.increment();
    assert_eq!(snapshot.count, 1);
    assert_eq!(snapshot.history, vec![1]);

    counter.set_step("5");
    let snapshot = counter.increment();
    assert_eq!(snapshot.count, 6);
    assert_eq!(snapshot.history, vec![6, 1]);

    let snapshot = counter.reset();
    assert_eq!(snapshot.count, 0);
    assert_eq!(snapshot.history, vec![0, 6, 1]);
}

#[test]
fn six_increments_evict_the_oldest_entry() {
    let mut counter = Counter::default();
    for _ in 0..6 {
        counter.increment();
    }
    assert_eq!(counter.count(), 6);
    assert_eq!(counter.history().to_vec(), vec![6, 5, 4, 3, 2]);
}

#[test]
fn count_is_sum_of_signed_steps() {
    let mut counter = Counter::default();
    let ops: [(&str, bool); 8] = [
        ("2", true),
        ("7", false),
        ("1", false),
        ("13", true),
        ("4", false),
        ("abc", true),
        ("3", true),
        ("0", false),
    ];
    let mut expected = 0i64;
    for (raw, up) in ops {
        counter.set_step(raw);
        let step = counter.step().get();
        if up {
            counter.increment();
            expected += step;
        } else {
            counter.decrement();
            expected -= step;
        }
        assert!(counter.history().len() <= HISTORY_CAPACITY);
        assert_eq!(counter.history().latest(), Some(counter.count()));
    }
    assert_eq!(counter.count(), expected);
}

#[test]
fn invalid_step_inputs_fall_back_to_one() {
    let mut counter = Counter::default();
    for raw in ["", "abc", "0"] {
        counter.set_step("8");
        assert_eq!(counter.set_step(raw).step.get(), 1);
    }
    counter.set_step("3");
    assert_eq!(counter.step().get(), 3);
    assert_eq!(counter.increment().count, 3);
}

#[test]
fn toggle_color_parity() {
    let mut counter = Counter::default();
    let original = counter.color();
    counter.toggle_color();
    counter.toggle_color();
    assert_eq!(counter.color(), original);
    for _ in 0..3 {
        counter.toggle_color();
    }
    assert_eq!(counter.color(), DisplayColor::Blue);
}

#[test]
fn secondary_counter_is_independent_of_primary() {
    let mut app = App::default();
    app.increment();
    app.set_step("5");
    app.increment();
    assert_eq!(app.snapshot.count, 6);

    app.secondary_decrement();
    assert_eq!(app.secondary.count(), -1);
    assert_eq!(app.counter().count(), 6);
    assert_eq!(app.snapshot.history, vec![6, 1]);

    let mut standalone = SecondaryCounter::default();
    assert_eq!(standalone.decrement(), -1);
}
