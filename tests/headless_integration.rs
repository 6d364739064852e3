use std::collections::HashMap;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use typist::app::{App, Flow};
use typist::difficulty::Difficulty;
use typist::quotes::QuoteBank;
use typist::runtime::{AppEvent, FixedTicker, Runner, TestEventSource};
use typist::session::Phase;
use typist::storage::MemoryStore;

fn single_quote_app(quote: &str) -> App<MemoryStore> {
    let pools: HashMap<Difficulty, Vec<String>> = Difficulty::ALL
        .into_iter()
        .map(|d| (d, vec![quote.to_string()]))
        .collect();
    App::new(QuoteBank::from_pools(pools).unwrap(), MemoryStore::new(), None)
}

fn key(c: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

// Drive the app the way the binary does, minus the terminal
fn drive<S: typist::storage::KeyValueStore>(
    app: &mut App<S>,
    runner: &mut Runner<TestEventSource, FixedTicker>,
    max_steps: u32,
) {
    for _ in 0..max_steps {
        match runner.step() {
            AppEvent::Tick(dt) => app.on_tick(dt),
            AppEvent::Resize => {}
            AppEvent::Key(k) => {
                let was_running = app.session().is_running();
                if app.on_key(k) == Flow::Quit {
                    return;
                }
                if !was_running && app.session().is_running() {
                    runner.resync();
                }
            }
            AppEvent::Closed => return,
        }
        if app.summary().is_some() {
            return;
        }
    }
}

#[test]
fn headless_typing_flow_completes() {
    let mut app = single_quote_app("hi");

    let (tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    tx.send(key('h')).unwrap();
    tx.send(key('i')).unwrap();

    drive(&mut app, &mut runner, 100);

    assert_eq!(app.session().phase(), Phase::Complete);
    let summary = app.summary().copied().unwrap();
    assert_eq!(summary.accuracy, 100);
}

#[test]
fn headless_timer_counts_whole_seconds_while_typing() {
    let mut app = single_quote_app("abc");

    let (tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(20)),
    );

    tx.send(key('a')).unwrap();
    // at most ~2s of ticks with nothing else queued
    for _ in 0..100u32 {
        match runner.step() {
            AppEvent::Tick(dt) => app.on_tick(dt),
            AppEvent::Key(k) => {
                app.on_key(k);
            }
            AppEvent::Resize | AppEvent::Closed => {}
        }
        if app.session().elapsed_secs() >= 1 {
            break;
        }
    }

    assert!(app.session().is_running());
    assert!(app.session().elapsed_secs() >= 1);

    tx.send(key('b')).unwrap();
    tx.send(key('c')).unwrap();
    drive(&mut app, &mut runner, 100);

    let summary = app.summary().copied().unwrap();
    assert!(summary.elapsed_secs >= 1);
    assert!(!app.session().is_running());
}

#[test]
fn headless_idle_session_never_ticks() {
    let mut app = single_quote_app("abc");

    let (_tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(10)),
    );

    for _ in 0..20u32 {
        if let AppEvent::Tick(_) = runner.step() {
            app.on_tick(Duration::from_secs(1));
        }
    }

    assert_eq!(app.session().phase(), Phase::Idle);
    assert_eq!(app.session().elapsed_secs(), 0);
}

#[test]
fn headless_next_quote_after_summary() {
    let mut app = single_quote_app("ok");

    let (tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    tx.send(key('o')).unwrap();
    tx.send(key('k')).unwrap();
    drive(&mut app, &mut runner, 100);
    assert!(app.summary().is_some());

    app.on_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));

    assert!(app.summary().is_none());
    assert_eq!(app.session().phase(), Phase::Idle);
    assert_eq!(app.session().elapsed_secs(), 0);
    assert_eq!(app.session().typed(), "");
}

#[test]
fn headless_first_second_starts_at_first_keystroke() {
    let mut app = single_quote_app("abc");

    let (tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(100)),
    );

    // burn one tick, then type most of the way into the next tick period
    assert!(matches!(runner.step(), AppEvent::Tick(_)));
    std::thread::sleep(Duration::from_millis(90));
    let typed_at = Instant::now();
    tx.send(key('a')).unwrap();

    // the key is handled like the binary does, resync included
    drive(&mut app, &mut runner, 3);
    assert!(app.session().is_running());

    let mut fired_after = None;
    for _ in 0..100u32 {
        if let AppEvent::Tick(dt) = runner.step() {
            app.on_tick(dt);
        }
        if app.session().elapsed_secs() >= 1 {
            fired_after = Some(typed_at.elapsed());
            break;
        }
    }

    let fired_after = fired_after.expect("clock never reached one second");
    assert!(
        fired_after >= Duration::from_secs(1),
        "first second fired after {fired_after:?}"
    );
}
