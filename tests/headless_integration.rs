use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use receta::app::{App, Tab};
use receta::runtime::{AppEvent, FixedTicker, Runner, TestEventSource};
use receta::timer::StepTimer;

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn runner(rx: mpsc::Receiver<AppEvent>) -> Runner<TestEventSource, FixedTicker> {
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(2));
    Runner::new(es, ticker)
}

fn drive(app: &mut App, runner: &Runner<TestEventSource, FixedTicker>, steps: u32) {
    for _ in 0..steps {
        match runner.step() {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize => {}
        }
    }
}

// Headless cooking flow without a TTY: open the first recipe, start its
// step timer, pause it, resume it, then dismiss it.
#[test]
fn headless_cooking_flow_drives_timer() {
    let mut app = App::new(Tab::Recipes);

    let (tx, rx) = mpsc::channel();
    let runner = runner(rx);

    tx.send(key(KeyCode::Enter)).unwrap();
    for _ in 0..5 {
        tx.send(key(KeyCode::Down)).unwrap();
    }
    tx.send(key(KeyCode::Char(' '))).unwrap();
    drive(&mut app, &runner, 7);

    let timer = app.detail.as_ref().unwrap().timer.as_ref().unwrap();
    assert_eq!(timer.display(), "10:00");

    // Channel is now empty, so each step times out into a Tick
    drive(&mut app, &runner, 3);
    let timer = app.detail.as_ref().unwrap().timer.as_ref().unwrap();
    assert_eq!(timer.remaining_secs(), 597);

    tx.send(key(KeyCode::Char('p'))).unwrap();
    drive(&mut app, &runner, 3); // pause key + two ticks that must not count
    let timer = app.detail.as_ref().unwrap().timer.as_ref().unwrap();
    assert!(!timer.is_running());
    assert_eq!(timer.remaining_secs(), 597);

    tx.send(key(KeyCode::Char('p'))).unwrap();
    tx.send(key(KeyCode::Char('x'))).unwrap();
    drive(&mut app, &runner, 2);
    assert!(app.detail.as_ref().unwrap().timer.is_none());
    assert!(app.toasts.is_empty());
}

#[test]
fn headless_timer_completion_raises_toast_once() {
    let mut app = App::new(Tab::Recipes);

    let (tx, rx) = mpsc::channel();
    let runner = runner(rx);

    tx.send(key(KeyCode::Enter)).unwrap();
    drive(&mut app, &runner, 1);

    app.detail.as_mut().unwrap().timer = Some(StepTimer::start(3).unwrap());

    // Tick until the countdown fires, bounded
    let mut fired = false;
    for _ in 0..20u32 {
        if let AppEvent::Tick = runner.step() {
            app.on_tick();
        }
        if !app.toasts.is_empty() {
            fired = true;
            break;
        }
    }

    assert!(fired, "countdown should raise a completion toast");
    assert_eq!(app.toasts.visible()[0].message, "Time's up!");
    assert!(app.detail.as_ref().unwrap().timer.is_none());

    // The toast expires after its TTL and nothing re-fires it
    drive(&mut app, &runner, 5);
    assert!(app.toasts.is_empty());
}

#[test]
fn headless_manual_authoring_lands_in_library() {
    let mut app = App::new(Tab::Create);

    let (tx, rx) = mpsc::channel();
    let runner = runner(rx);

    tx.send(key(KeyCode::Char('m'))).unwrap();
    for c in "Focaccia".chars() {
        tx.send(key(KeyCode::Char(c))).unwrap();
    }
    tx.send(key(KeyCode::Down)).unwrap(); // difficulty
    tx.send(key(KeyCode::Down)).unwrap(); // ingredient 0
    for c in "flour".chars() {
        tx.send(key(KeyCode::Char(c))).unwrap();
    }
    tx.send(key(KeyCode::Down)).unwrap(); // step 0 text
    for c in "Bake until golden.".chars() {
        tx.send(key(KeyCode::Char(c))).unwrap();
    }
    tx.send(key(KeyCode::Down)).unwrap(); // step 0 duration
    for c in "20".chars() {
        tx.send(key(KeyCode::Char(c))).unwrap();
    }
    tx.send(ctrl('s')).unwrap();

    drive(&mut app, &runner, 40);

    assert_eq!(app.tab, Tab::Recipes);
    assert_eq!(app.library.recipes[0].title, "Focaccia");
    assert_eq!(app.library.recipes[0].total_time, "20 min");
    assert_eq!(app.library.recipes.len(), 3);
}

#[test]
fn headless_import_flow_prefills_after_analysis() {
    let mut app = App::new(Tab::Create);

    let (tx, rx) = mpsc::channel();
    let runner = runner(rx);

    tx.send(key(KeyCode::Char('a'))).unwrap();
    for c in "https://youtu.be/abc".chars() {
        tx.send(key(KeyCode::Char(c))).unwrap();
    }
    tx.send(key(KeyCode::Enter)).unwrap();

    // Consume queued keys, then let timeouts produce the analysis ticks
    let mut extracted = false;
    for _ in 0..60u32 {
        match runner.step() {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize => {}
        }
        if !app.form.is_analyzing() && app.form.title == "Pasta alla Gricia" {
            extracted = true;
            break;
        }
    }

    assert!(extracted, "analysis should prefill the manual form");
    assert_eq!(
        app.toasts.visible()[0].message,
        "Recipe extracted! You can edit it now."
    );
    assert_eq!(app.form.steps.len(), 2);
}
