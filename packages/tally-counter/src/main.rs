//! Run with:
//!
//! ```sh
//! dx serve --platform web
//! ```

use dioxus::logger::tracing::Level;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    dioxus::logger::init(level).expect("failed to init logger");
    dioxus::launch(tally_counter::App);
}
