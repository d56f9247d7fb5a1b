use dioxus::prelude::*;

use crate::TallyCounter;

/// Title of the page, also shown as the heading.
pub const TITLE: &str = "Superheroic Tally Counting";

/// The root component handed to [`dioxus::launch`].
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "{TITLE}" }
        h1 { "{TITLE}" }
        ErrorBoundary {
            handle_error: |_: ErrorContext| rsx! {
                p { class: "error", "The counter failed to render." }
            },
            TallyCounter {}
        }
    }
}
