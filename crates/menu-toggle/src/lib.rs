mod document;
mod errors;
mod memory;
mod toggle;

pub use document::{Document, ElementId, Listener, ListenerId};
pub use errors::ToggleError;
pub use memory::MemoryDocument;
pub use toggle::{InitialVisibility, MenuToggle, ToggleHandle, ToggleOptions, ToggleState};
