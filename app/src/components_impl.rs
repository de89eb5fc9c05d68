//! Presentation logic extracted from Leptos components for testability.
//!
//! Code inside `#[component]` bodies is hard to exercise from unit tests, so
//! anything that makes a decision lives here as a plain function.

use crate::route_selector::{RouteSelection, RouteSelector};
use leptos::prelude::*;

// === Route Toggle ===

/// Make `route` the active route of the map widget.
///
/// Subscribers are notified only when the selection actually changes.
pub fn apply_route(selector: RwSignal<RouteSelector>, route: RouteSelection) -> bool {
    let mut changed = false;
    selector.maybe_update(|s| {
        changed = s.select_route(route);
        changed
    });
    if changed {
        tracing::debug!(%route, "map route selected");
    }
    changed
}

const TOGGLE_BASE_CLASS: &str =
    "px-3 py-1.5 text-xs font-medium rounded-lg shadow-sm transition-all border";

/// CSS classes of a map route toggle button.
pub fn route_toggle_class(active: bool) -> String {
    let state = if active {
        "bg-indigo-600 text-white border-indigo-600"
    } else {
        "bg-white text-slate-600 border-slate-200 hover:bg-slate-50"
    };
    format!("{TOGGLE_BASE_CLASS} {state}")
}

/// Value of `aria-pressed` for a toggle button.
pub fn aria_pressed(active: bool) -> &'static str {
    if active { "true" } else { "false" }
}

// === Meal Status ===

/// Get the CSS classes for a meal row.
pub fn meal_row_class(provided: bool) -> &'static str {
    if provided {
        "flex items-center justify-between text-sm p-2 bg-green-50 text-green-700 rounded-lg"
    } else {
        "flex items-center justify-between text-sm p-2 bg-rose-50 text-rose-700 rounded-lg"
    }
}

/// Get the display text for a meal status.
pub fn meal_status_text(provided: bool) -> &'static str {
    if provided { "Provided" } else { "Not Provided" }
}

// === Layout ===

/// Slides the page header down into place on load.
pub const REVEAL_HEADER_CLASS: &str = "reveal-down";

/// Scales the important notice in on load.
pub const REVEAL_NOTICE_CLASS: &str = "reveal-scale";

/// Fades a card up as it scrolls into view.
pub const REVEAL_CARD_CLASS: &str = "reveal-on-view";

/// Split a list into two display columns. The first column takes the extra
/// item when the length is odd.
pub fn split_columns<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

/// Join the base classes of a card with caller-supplied extras.
pub fn section_class(extra: &str) -> String {
    let base = "bg-white rounded-2xl shadow-sm border border-slate-200 overflow-hidden";
    if extra.is_empty() {
        format!("{REVEAL_CARD_CLASS} {base}")
    } else {
        format!("{REVEAL_CARD_CLASS} {base} {extra}")
    }
}
