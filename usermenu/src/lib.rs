pub mod app;
pub mod consts;
pub mod errors;
mod ui;

pub use ui::UserAreaEntry;
