//! Full-frame rendering through `ui::ui` with a `TestBackend`, driven by
//! keyboard and mouse events the way the runtime would deliver them.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use product_dash::events::handle_event;
use product_dash::logic;
use product_dash::state::{AppState, Category, Product, SortColumn};
use product_dash::ui::ui;
use ratatui::{Terminal, backend::TestBackend};

fn catalog() -> Vec<Product> {
    (1..=12)
        .map(|i| Product {
            id: i,
            title: format!("Gadget {i:02}"),
            description: format!("Gadget number {i}"),
            category: Category {
                id: Some(3),
                name: "Electronics".to_string(),
            },
            price: f64::from(u32::try_from(i).unwrap_or(0)) * 2.5,
            image: (i % 2 == 0).then(|| format!("https://img.example.com/{i}.jpg")),
        })
        .collect()
}

fn draw(term: &mut Terminal<TestBackend>, app: &mut AppState) -> String {
    term.draw(|f| ui(f, app)).expect("draw frame");
    let buf = term.backend().buffer();
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn click(rect: Option<(u16, u16, u16, u16)>) -> Event {
    let (x, y, _, _) = rect.expect("rect recorded by last frame");
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::empty(),
    })
}

#[test]
/// What: Header and pager clicks recorded by one frame drive the next
///
/// - Input: Twelve gadgets; click Price header twice, then Next
/// - Output: Price descending glyph; page 2 shows the next five gadgets by price
fn clicks_on_recorded_rects_drive_pipeline() {
    let mut term = Terminal::new(TestBackend::new(140, 22)).expect("terminal");
    let mut app = AppState::default();
    app.catalog_loaded = true;
    logic::load_catalog(&mut app.view, catalog());

    let screen = draw(&mut term, &mut app);
    assert!(screen.contains("Page 1 / 3"));

    handle_event(click(app.price_header_rect), &mut app);
    draw(&mut term, &mut app);
    handle_event(click(app.price_header_rect), &mut app);
    let screen = draw(&mut term, &mut app);
    assert_eq!(app.view.sort.column, Some(SortColumn::Price));
    assert!(!app.view.sort.ascending);
    assert!(screen.contains("Price ↓"));
    assert!(screen.contains("Gadget 12"));

    handle_event(click(app.next_button_rect), &mut app);
    let screen = draw(&mut term, &mut app);
    assert!(screen.contains("Page 2 / 3"));
    assert!(screen.contains("Gadget 07"));
    assert!(!screen.contains("Gadget 12"));
}

#[test]
/// What: Odd gadgets without images render the placeholder reference
///
/// - Input: First page of twelve gadgets (ids 1..=5)
/// - Output: Placeholder host appears alongside real image hosts
fn missing_images_render_placeholder() {
    let mut term = Terminal::new(TestBackend::new(160, 22)).expect("terminal");
    let mut app = AppState::default();
    logic::load_catalog(&mut app.view, catalog());
    let screen = draw(&mut term, &mut app);
    assert!(screen.contains("via.placeholder.com"));
    assert!(screen.contains("img.example.com"));
}

#[test]
/// What: Typing a query that matches nothing shows the empty state
///
/// - Input: Keys 'x', 'y', 'z'
/// - Output: "No data found" and "Page 0 / 0"
fn typed_query_without_matches_shows_empty_state() {
    let mut term = Terminal::new(TestBackend::new(140, 22)).expect("terminal");
    let mut app = AppState::default();
    logic::load_catalog(&mut app.view, catalog());
    for ch in ['x', 'y', 'z'] {
        handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::empty())),
            &mut app,
        );
    }
    let screen = draw(&mut term, &mut app);
    assert!(screen.contains("> xyz"));
    assert!(screen.contains("No data found"));
    assert!(screen.contains("Page 0 / 0"));
}
