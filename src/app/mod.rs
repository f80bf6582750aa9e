//! Interactive dashboard runtime: terminal setup, background workers, and the event loop.

mod runtime;
mod terminal;

pub use runtime::run;
