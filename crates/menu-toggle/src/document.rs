use std::fmt;
use std::rc::Rc;

/// Identifier of an element inside a host document, e.g. `user` or `user-area`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle of one registered activation listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Activation callback. The document hands itself back so the callback can
/// change visibility of other elements.
pub type Listener = Rc<dyn Fn(&mut dyn Document)>;

/// The host boundary: element lookup, visibility and activation listeners.
///
/// Everything here runs on the thread that owns the document; listeners are
/// invoked synchronously from whatever delivers activation events.
pub trait Document {
    fn contains(&self, id: &ElementId) -> bool;

    /// `None` when the element does not exist.
    fn is_visible(&self, id: &ElementId) -> Option<bool>;

    fn show(&mut self, id: &ElementId);

    fn hide(&mut self, id: &ElementId);

    fn add_listener(&mut self, target: &ElementId, listener: Listener) -> ListenerId;

    /// Returns `false` if the listener was not registered.
    fn remove_listener(&mut self, listener: ListenerId) -> bool;
}
