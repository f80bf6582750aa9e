//! Mouse event handling for the dashboard.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::navigation;
use crate::state::{AppState, HitRect, SortColumn};

/// What: Check if a point is within a rectangle.
///
/// Inputs:
/// - `mx`: Mouse X coordinate
/// - `my`: Mouse Y coordinate
/// - `rect`: Optional rectangle as (x, y, width, height)
///
/// Output:
/// - `true` if point is within rectangle, `false` otherwise
const fn point_in_rect(mx: u16, my: u16, rect: HitRect) -> bool {
    if let Some((x, y, w, h)) = rect {
        mx >= x && mx < x.saturating_add(w) && my >= y && my < y.saturating_add(h)
    } else {
        false
    }
}

/// What: Handle a mouse event against the rectangles recorded by the last frame.
///
/// Inputs:
/// - `m`: Mouse event
/// - `app`: Mutable application state
///
/// Output:
/// - `true` when the click hit a clickable element.
///
/// Details:
/// - Only left-button presses are considered; scrolling and drags are ignored.
/// - A click on the page-size selector steps forward through the options.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState) -> bool {
    if !matches!(m.kind, MouseEventKind::Down(MouseButton::Left)) {
        return false;
    }
    let (mx, my) = (m.column, m.row);

    if point_in_rect(mx, my, app.title_header_rect) {
        navigation::handle_sort(app, SortColumn::Title);
    } else if point_in_rect(mx, my, app.price_header_rect) {
        navigation::handle_sort(app, SortColumn::Price);
    } else if point_in_rect(mx, my, app.prev_button_rect) {
        navigation::handle_prev(app);
    } else if point_in_rect(mx, my, app.next_button_rect) {
        navigation::handle_next(app);
    } else if point_in_rect(mx, my, app.page_size_rect) {
        navigation::handle_page_size_cycle(app, true);
    } else {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic;
    use crate::test_utils::{new_app, seven_products};
    use crossterm::event::KeyModifiers;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    /// What: Point-in-rect treats the far edges as exclusive
    ///
    /// - Input: Rect (2, 3, 4, 1)
    /// - Output: (2,3) and (5,3) inside; (6,3), (2,4) and a missing rect outside
    fn point_in_rect_edges() {
        let r = Some((2, 3, 4, 1));
        assert!(point_in_rect(2, 3, r));
        assert!(point_in_rect(5, 3, r));
        assert!(!point_in_rect(6, 3, r));
        assert!(!point_in_rect(2, 4, r));
        assert!(!point_in_rect(2, 3, None));
    }

    #[test]
    /// What: Clicks on headers, pager, and selector dispatch to their operations
    ///
    /// - Input: Rects placed by hand; click each one
    /// - Output: Price sort, next page, prev page, page size 10
    fn clicks_dispatch() {
        let mut app = new_app();
        logic::load_catalog(&mut app.view, seven_products());
        app.title_header_rect = Some((10, 2, 8, 1));
        app.price_header_rect = Some((60, 2, 8, 1));
        app.prev_button_rect = Some((1, 15, 8, 1));
        app.next_button_rect = Some((25, 15, 8, 1));
        app.page_size_rect = Some((40, 15, 10, 1));

        assert!(handle_mouse_event(click(61, 2), &mut app));
        assert_eq!(app.view.sort.column, Some(SortColumn::Price));

        assert!(handle_mouse_event(click(26, 15), &mut app));
        assert_eq!(app.view.current_page, 2);
        assert!(handle_mouse_event(click(2, 15), &mut app));
        assert_eq!(app.view.current_page, 1);

        assert!(handle_mouse_event(click(41, 15), &mut app));
        assert_eq!(app.view.page_size, 10);

        assert!(!handle_mouse_event(click(100, 0), &mut app));
    }

    #[test]
    /// What: Non-left-button events are ignored
    ///
    /// - Input: Scroll down over the price header
    /// - Output: Not handled; sort unchanged
    fn scroll_is_ignored() {
        let mut app = new_app();
        app.price_header_rect = Some((60, 2, 8, 1));
        let ev = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 61,
            row: 2,
            modifiers: KeyModifiers::empty(),
        };
        assert!(!handle_mouse_event(ev, &mut app));
        assert_eq!(app.view.sort.column, None);
    }
}
