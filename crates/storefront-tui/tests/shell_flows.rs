//! End-to-end flows through the shell, driven by key events

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use storefront_core::{Navigation, Route, RouteKind, Size};
use storefront_tui::app::{App, Event, EventHandler, Page, StorefrontConfig};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
}

/// App sitting on the entry screen, reached through the real splash timer
async fn app_at_auth() -> (App, EventHandler) {
    let mut events = EventHandler::new();
    let mut app = App::new(StorefrontConfig::default(), events.sender());
    let event = events.recv().await.expect("splash timer event");
    app.handle_event(event);
    assert_eq!(app.current_kind(), Some(RouteKind::Auth));
    (app, events)
}

async fn app_at_catalog() -> (App, EventHandler) {
    let (mut app, events) = app_at_auth().await;
    app.handle_event(key(KeyCode::Enter));
    assert_eq!(app.current_kind(), Some(RouteKind::Catalog));
    (app, events)
}

#[tokio::test(start_paused = true)]
async fn splash_replaces_itself_with_auth_after_delay() {
    let mut events = EventHandler::new();
    let started = tokio::time::Instant::now();
    let mut app = App::new(StorefrontConfig::default(), events.sender());
    assert_eq!(app.current_kind(), Some(RouteKind::Splash));

    let event = events.recv().await.expect("splash timer event");
    assert!(started.elapsed() >= Duration::from_millis(3000));
    assert!(matches!(event, Event::SplashElapsed(_)));

    app.handle_event(event);
    assert_eq!(app.current_kind(), Some(RouteKind::Auth));
    assert_eq!(app.router.depth(), 1);
    assert!(!app.router.contains(RouteKind::Splash));
    assert!(!app.router.can_go_back());
}

#[tokio::test(start_paused = true)]
async fn splash_ignores_keys_except_force_quit() {
    let events = EventHandler::new();
    let mut app = App::new(StorefrontConfig::default(), events.sender());

    app.handle_event(key(KeyCode::Enter));
    app.handle_event(key(KeyCode::Char('q')));
    assert_eq!(app.current_kind(), Some(RouteKind::Splash));
    assert!(!app.should_quit);

    app.handle_event(Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    assert!(app.should_quit);
}

#[tokio::test(start_paused = true)]
async fn leaving_splash_early_cancels_the_transition() {
    let mut events = EventHandler::new();
    let mut app = App::new(StorefrontConfig::default(), events.sender());

    tokio::time::sleep(Duration::from_millis(1500)).await;
    app.navigate(Navigation::Reset(Route::Catalog));

    tokio::time::sleep(Duration::from_millis(3000)).await;
    assert!(events.try_recv().is_none());
    assert_eq!(app.current_kind(), Some(RouteKind::Catalog));
}

#[tokio::test(start_paused = true)]
async fn stale_splash_timer_is_ignored() {
    let events = EventHandler::new();
    let mut app = App::new(StorefrontConfig::default(), events.sender());
    let old_id = match app.page() {
        Some(Page::Splash(splash)) => splash.timer_id(),
        _ => panic!("expected splash"),
    };

    // A fresh splash gets a fresh timer
    app.navigate(Navigation::Reset(Route::Splash));
    app.handle_event(Event::SplashElapsed(old_id));
    assert_eq!(app.current_kind(), Some(RouteKind::Splash));
}

#[tokio::test(start_paused = true)]
async fn custom_splash_delay_is_honoured() {
    let mut events = EventHandler::new();
    let config = StorefrontConfig {
        splash_delay_ms: 500,
        ..StorefrontConfig::default()
    };
    let started = tokio::time::Instant::now();
    let mut app = App::new(config, events.sender());

    let event = events.recv().await.expect("splash timer event");
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(500) && elapsed < Duration::from_millis(3000));
    app.handle_event(event);
    assert_eq!(app.current_kind(), Some(RouteKind::Auth));
}

#[tokio::test(start_paused = true)]
async fn auth_quit_choice_stops_the_app() {
    let (mut app, _events) = app_at_auth().await;
    app.handle_event(key(KeyCode::Down));
    app.handle_event(key(KeyCode::Enter));
    assert!(app.should_quit);
}

#[tokio::test(start_paused = true)]
async fn search_then_add_to_cart_and_view_cart_keeps_filter() {
    let (mut app, _events) = app_at_catalog().await;

    app.handle_event(key(KeyCode::Char('/')));
    type_text(&mut app, "watch");
    match app.page() {
        Some(Page::Catalog(screen)) => {
            let names: Vec<_> = screen.displayed().iter().map(|p| p.name.clone()).collect();
            assert_eq!(names, vec!["Smart Watch"]);
        }
        _ => panic!("expected catalog"),
    }

    app.handle_event(key(KeyCode::Enter)); // leave the search field
    app.handle_event(key(KeyCode::Enter)); // open the selected card
    assert_eq!(app.current_kind(), Some(RouteKind::Detail));
    assert_eq!(app.router.depth(), 2);

    app.handle_event(key(KeyCode::Char('+')));
    app.handle_event(key(KeyCode::Char('5')));
    match app.page() {
        Some(Page::Detail(screen)) => {
            assert_eq!(screen.product().name, "Smart Watch");
            assert_eq!(screen.quantity(), 2);
            assert_eq!(screen.selection().size(), Size::XL);
            assert!((screen.total() - 399.98).abs() < 1e-9);
        }
        _ => panic!("expected detail"),
    }

    app.handle_event(key(KeyCode::Enter));
    match app.page() {
        Some(Page::Detail(screen)) => {
            let confirmation = screen.confirmation().expect("confirmation shown");
            assert_eq!(confirmation.message, "2 Smart Watch added to cart!");
        }
        _ => panic!("expected detail"),
    }
    assert_eq!(app.cart.lines().len(), 1);
    assert_eq!(app.cart.item_count(), 2);

    app.handle_event(key(KeyCode::Char('v')));
    assert_eq!(app.current_kind(), Some(RouteKind::Catalog));
    match app.page() {
        Some(Page::Catalog(screen)) => {
            assert_eq!(screen.search_text(), "watch");
            assert_eq!(screen.displayed_len(), 1);
        }
        _ => panic!("expected catalog"),
    }
}

#[tokio::test(start_paused = true)]
async fn continue_shopping_stays_on_detail() {
    let (mut app, _events) = app_at_catalog().await;
    app.handle_event(key(KeyCode::Enter));
    app.handle_event(key(KeyCode::Char('a')));
    app.handle_event(key(KeyCode::Char('c')));

    assert_eq!(app.current_kind(), Some(RouteKind::Detail));
    match app.page() {
        Some(Page::Detail(screen)) => assert!(screen.confirmation().is_none()),
        _ => panic!("expected detail"),
    }
}

#[tokio::test(start_paused = true)]
async fn detail_state_is_fresh_on_every_visit() {
    let (mut app, _events) = app_at_catalog().await;

    app.handle_event(key(KeyCode::Enter));
    app.handle_event(key(KeyCode::Char('+')));
    app.handle_event(key(KeyCode::Char('f')));
    app.handle_event(key(KeyCode::Esc));
    assert_eq!(app.current_kind(), Some(RouteKind::Catalog));

    app.handle_event(key(KeyCode::Enter));
    match app.page() {
        Some(Page::Detail(screen)) => {
            assert_eq!(screen.quantity(), 1);
            assert_eq!(screen.selection().size(), Size::M);
            assert!(!screen.selection().is_favorite());
        }
        _ => panic!("expected detail"),
    }
}

#[tokio::test(start_paused = true)]
async fn detail_without_product_falls_back_with_warning() {
    let (mut app, _events) = app_at_catalog().await;
    app.navigate(Navigation::Push(Route::Detail { product: None }));

    match app.page() {
        Some(Page::Detail(screen)) => assert_eq!(screen.product().name, "Wireless Headphones"),
        _ => panic!("expected detail"),
    }
    assert_eq!(app.notifications.active().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn profile_menu_and_switches() {
    let (mut app, _events) = app_at_catalog().await;
    app.handle_event(key(KeyCode::Char('p')));
    assert_eq!(app.current_kind(), Some(RouteKind::Profile));

    // First menu row surfaces an acknowledgment
    app.handle_event(key(KeyCode::Enter));
    let messages: Vec<_> = app
        .notifications
        .active()
        .iter()
        .map(|n| n.message.clone())
        .collect();
    assert_eq!(messages, vec!["Edit personal information"]);

    // Past the seven menu rows sits the notifications switch
    for _ in 0..7 {
        app.handle_event(key(KeyCode::Down));
    }
    app.handle_event(key(KeyCode::Enter));
    match app.page() {
        Some(Page::Profile(screen)) => {
            assert!(!screen.settings().notifications);
            assert!(!screen.settings().dark_mode);
            assert!(screen.settings().location);
        }
        _ => panic!("expected profile"),
    }
}

#[tokio::test(start_paused = true)]
async fn profile_logout_cancel_then_confirm() {
    let (mut app, _events) = app_at_catalog().await;
    app.handle_event(key(KeyCode::Char('p')));

    app.handle_event(key(KeyCode::Char('L')));
    app.handle_event(key(KeyCode::Char('n')));
    assert_eq!(app.current_kind(), Some(RouteKind::Profile));

    app.handle_event(key(KeyCode::Char('L')));
    app.handle_event(key(KeyCode::Char('y')));
    assert_eq!(app.current_kind(), Some(RouteKind::Auth));
    assert!(!app.router.contains(RouteKind::Profile));

    // Starting over from the entry screen drops everything behind it
    app.handle_event(key(KeyCode::Enter));
    assert_eq!(app.current_kind(), Some(RouteKind::Catalog));
    assert_eq!(app.router.depth(), 1);
}

#[tokio::test(start_paused = true)]
async fn back_on_root_catalog_is_a_noop() {
    let (mut app, _events) = app_at_catalog().await;
    app.navigate(Navigation::Back);
    assert_eq!(app.current_kind(), Some(RouteKind::Catalog));
    assert!(!app.should_quit);
}

#[tokio::test(start_paused = true)]
async fn ticks_expire_notifications() {
    let (mut app, _events) = app_at_catalog().await;
    app.handle_event(key(KeyCode::Char('p')));
    app.handle_event(key(KeyCode::Char('e')));
    assert_eq!(app.notifications.active().len(), 1);

    for _ in 0..30 {
        app.handle_event(Event::Tick);
    }
    assert!(app.notifications.is_empty());
    assert_eq!(app.tick, 30);
}

#[tokio::test(start_paused = true)]
async fn enter_on_logout_dialog_keeps_the_session() {
    let (mut app, _events) = app_at_catalog().await;
    app.handle_event(key(KeyCode::Char('p')));

    // Enter opens the dialog from the logout row, a second Enter must not confirm it
    for _ in 0..20 {
        app.handle_event(key(KeyCode::Down));
    }
    app.handle_event(key(KeyCode::Enter));
    app.handle_event(key(KeyCode::Enter));

    assert_eq!(app.current_kind(), Some(RouteKind::Profile));
    match app.page() {
        Some(Page::Profile(screen)) => assert!(!screen.logout_pending()),
        _ => panic!("expected profile"),
    }
}

#[tokio::test(start_paused = true)]
async fn esc_on_auth_after_logout_returns_to_catalog() {
    let (mut app, _events) = app_at_catalog().await;
    app.handle_event(key(KeyCode::Char('/')));
    type_text(&mut app, "watch");
    app.handle_event(key(KeyCode::Enter));

    app.handle_event(key(KeyCode::Char('p')));
    app.handle_event(key(KeyCode::Char('L')));
    app.handle_event(key(KeyCode::Char('y')));
    assert_eq!(app.current_kind(), Some(RouteKind::Auth));
    assert!(app.router.can_go_back());

    app.handle_event(key(KeyCode::Esc));
    assert!(!app.should_quit);
    assert_eq!(app.current_kind(), Some(RouteKind::Catalog));
    match app.page() {
        Some(Page::Catalog(screen)) => assert_eq!(screen.search_text(), "watch"),
        _ => panic!("expected catalog"),
    }
}

#[tokio::test(start_paused = true)]
async fn esc_on_root_auth_quits() {
    let (mut app, _events) = app_at_auth().await;
    app.handle_event(key(KeyCode::Esc));
    assert!(app.should_quit);
}

#[tokio::test(start_paused = true)]
async fn closed_input_stops_the_app() {
    let (mut app, _events) = app_at_catalog().await;
    app.handle_event(Event::InputClosed("terminal input stream ended".to_string()));
    assert!(app.should_quit);
}

#[tokio::test(start_paused = true)]
async fn run_loop_exits_when_input_closes() {
    let mut events = EventHandler::new();
    let mut app = App::new(StorefrontConfig::default(), events.sender());
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");

    events
        .sender()
        .send(Event::InputClosed("terminal reader panicked".to_string()))
        .expect("queue event");
    let result = app.run(&mut terminal, &mut events).await;

    let err = result.expect_err("closed input is an error");
    assert!(err.to_string().contains("terminal reader panicked"));
    assert!(app.should_quit);
}
