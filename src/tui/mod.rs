pub mod app;
pub mod input;
pub mod render;
pub mod theme;
pub mod tooltip;

pub use app::run;
