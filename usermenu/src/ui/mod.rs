mod menubar;
mod side_panel;
mod status_bar;

pub use side_panel::UserAreaEntry;
