pub mod cli;
pub mod io;
pub mod model;
pub mod query;
pub mod spoiler;
pub mod tui;
pub mod util;
