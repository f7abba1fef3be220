use crate::{Document, ElementId, Listener, ListenerId};
use indexmap::IndexMap;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Element {
    visible: bool,
}

/// A document kept entirely in memory.
///
/// Elements only carry a visibility flag. Listeners fire in registration
/// order and their ids are never reused within one document.
#[derive(Default)]
pub struct MemoryDocument {
    elements: IndexMap<ElementId, Element>,
    listeners: IndexMap<ListenerId, (ElementId, Listener)>,
    next_listener: u64,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: impl Into<ElementId>, visible: bool) -> Self {
        self.insert(id, visible);
        self
    }

    /// Adds an element or replaces the visibility of an existing one.
    pub fn insert(&mut self, id: impl Into<ElementId>, visible: bool) {
        self.elements.insert(id.into(), Element { visible });
    }

    /// Removes an element. Listeners registered on it stay registered but
    /// can no longer be reached through [`MemoryDocument::dispatch_activate`].
    pub fn remove(&mut self, id: &ElementId) -> bool {
        self.elements.shift_remove(id).is_some()
    }

    pub fn listener_count(&self, target: &ElementId) -> usize {
        self.listeners
            .values()
            .filter(|(element, _)| element == target)
            .count()
    }

    /// Delivers one activation event to `target` and returns how many
    /// listeners ran.
    pub fn dispatch_activate(&mut self, target: &ElementId) -> usize {
        if !self.elements.contains_key(target) {
            trace!("activation on missing element #{target}");
            return 0;
        }
        let listeners: Vec<Listener> = self
            .listeners
            .values()
            .filter(|(element, _)| element == target)
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in &listeners {
            listener(&mut *self);
        }
        listeners.len()
    }

    fn set_visible(&mut self, id: &ElementId, visible: bool) {
        if let Some(element) = self.elements.get_mut(id) {
            element.visible = visible;
        }
    }
}

impl Document for MemoryDocument {
    fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    fn is_visible(&self, id: &ElementId) -> Option<bool> {
        self.elements.get(id).map(|element| element.visible)
    }

    fn show(&mut self, id: &ElementId) {
        self.set_visible(id, true);
    }

    fn hide(&mut self, id: &ElementId) {
        self.set_visible(id, false);
    }

    fn add_listener(&mut self, target: &ElementId, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, (target.clone(), listener));
        id
    }

    fn remove_listener(&mut self, listener: ListenerId) -> bool {
        self.listeners.shift_remove(&listener).is_some()
    }
}
