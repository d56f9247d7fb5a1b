#![doc = include_str!("../README.md")]

mod app;
mod counter;
mod view;

pub use app::{App, TITLE};
pub use counter::Counter;
pub use view::{TallyCounter, TallyCounterProps};
