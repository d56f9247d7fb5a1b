use dioxus::prelude::*;

use crate::Counter;

/// The counter display and its two buttons.
///
/// Renders a `div.tally-counter` containing:
/// - `span.count` with the current count
/// - `button.tally`, which calls [`Counter::tally`]
/// - `button.reset`, which calls [`Counter::reset`]
///
/// `initial` seeds the view-model when the component mounts. Changing the prop afterwards does
/// not touch the live count.
#[component]
pub fn TallyCounter(#[props(default)] initial: u64) -> Element {
    let mut counter = use_signal(move || {
        tracing::info!(initial, "mounting tally counter");
        Counter::with_count(initial)
    });

    rsx! {
        div { class: "tally-counter",
            span { class: "count", "{counter}" }
            button { class: "tally", onclick: move |_| counter.write().tally(), "Tally" }
            button { class: "reset", onclick: move |_| counter.write().reset(), "Reset" }
        }
    }
}
