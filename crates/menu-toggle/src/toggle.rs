use crate::{Document, ElementId, ListenerId, ToggleError};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Closed,
    Open,
}

impl ToggleState {
    pub fn is_open(self) -> bool {
        matches!(self, ToggleState::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            ToggleState::Closed => ToggleState::Open,
            ToggleState::Open => ToggleState::Closed,
        }
    }
}

impl From<bool> for ToggleState {
    fn from(open: bool) -> Self {
        if open {
            ToggleState::Open
        } else {
            ToggleState::Closed
        }
    }
}

/// How the state is initialised when a toggle is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialVisibility {
    /// Start closed and hide the panel so the two agree.
    #[default]
    AssumeClosed,
    /// Start from whatever the document currently renders.
    FromDocument,
}

#[derive(Debug, Clone, Default)]
pub struct ToggleOptions {
    pub initial: InitialVisibility,
}

impl ToggleOptions {
    pub fn with_initial(mut self, initial: InitialVisibility) -> Self {
        self.initial = initial;
        self
    }
}

/// Flips a panel's visibility each time its trigger is activated.
#[derive(Debug, Clone, Default)]
pub struct MenuToggle {
    options: ToggleOptions,
}

impl MenuToggle {
    pub fn new(options: ToggleOptions) -> Self {
        Self { options }
    }

    /// Registers the activation listener on `trigger`.
    ///
    /// Both elements have to exist in `document`. When one is missing nothing
    /// is registered and the panel is left as it is.
    pub fn attach<D: Document + ?Sized>(
        &self,
        document: &mut D,
        trigger: impl Into<ElementId>,
        panel: impl Into<ElementId>,
    ) -> Result<ToggleHandle, ToggleError> {
        let trigger = trigger.into();
        let panel = panel.into();
        for id in [&trigger, &panel] {
            if !document.contains(id) {
                return Err(ToggleError::ElementNotFound { id: id.clone() });
            }
        }

        let initial = match self.options.initial {
            InitialVisibility::AssumeClosed => {
                document.hide(&panel);
                ToggleState::Closed
            }
            InitialVisibility::FromDocument => {
                ToggleState::from(document.is_visible(&panel).unwrap_or_default())
            }
        };
        let state = Rc::new(Cell::new(initial));

        let listener = {
            let state = state.clone();
            let panel = panel.clone();
            Rc::new(move |document: &mut dyn Document| on_activate(document, &panel, &state))
        };
        let listener = document.add_listener(&trigger, listener);
        info!("menu #{panel} attached to #{trigger}, initially {initial:?}");

        Ok(ToggleHandle {
            trigger,
            panel,
            listener,
            state,
        })
    }
}

fn on_activate(document: &mut dyn Document, panel: &ElementId, state: &Cell<ToggleState>) {
    if !document.contains(panel) {
        warn!("menu panel #{panel} is gone from the document");
    }
    let next = state.get().toggled();
    match next {
        ToggleState::Open => document.show(panel),
        ToggleState::Closed => document.hide(panel),
    }
    state.set(next);
    debug!("menu #{panel} -> {next:?}");
}

/// An attached toggle. Dropping it keeps the listener registered; call
/// [`ToggleHandle::detach`] to remove it.
#[derive(Debug)]
pub struct ToggleHandle {
    trigger: ElementId,
    panel: ElementId,
    listener: ListenerId,
    state: Rc<Cell<ToggleState>>,
}

impl ToggleHandle {
    pub fn state(&self) -> ToggleState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn trigger(&self) -> &ElementId {
        &self.trigger
    }

    pub fn panel(&self) -> &ElementId {
        &self.panel
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }

    /// Removes the activation listener. Returns `false` when the document no
    /// longer had it.
    pub fn detach<D: Document + ?Sized>(self, document: &mut D) -> bool {
        let removed = document.remove_listener(self.listener);
        info!(
            "menu #{} detached from #{} (listener present: {removed})",
            self.panel, self.trigger
        );
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryDocument;
    use proptest::prelude::*;

    const USER: &str = "user";
    const USER_AREA: &str = "user-area";

    fn page() -> MemoryDocument {
        MemoryDocument::new()
            .with_element(USER, true)
            .with_element(USER_AREA, false)
    }

    fn panel_visible(doc: &MemoryDocument) -> bool {
        doc.is_visible(&ElementId::from(USER_AREA)) == Some(true)
    }

    fn click(doc: &mut MemoryDocument) -> usize {
        doc.dispatch_activate(&ElementId::from(USER))
    }

    #[test]
    fn starts_closed_with_panel_hidden() {
        let mut doc = page();
        let handle = MenuToggle::default().attach(&mut doc, USER, USER_AREA).unwrap();

        assert_eq!(handle.state(), ToggleState::Closed);
        assert!(!handle.is_open());
        assert!(!panel_visible(&doc));
        assert_eq!(doc.listener_count(handle.trigger()), 1);
    }

    #[test]
    fn one_click_opens() {
        let mut doc = page();
        let handle = MenuToggle::default().attach(&mut doc, USER, USER_AREA).unwrap();

        assert_eq!(click(&mut doc), 1);
        assert!(handle.is_open());
        assert!(panel_visible(&doc));
    }

    #[test]
    fn two_clicks_close_again() {
        let mut doc = page();
        let handle = MenuToggle::default().attach(&mut doc, USER, USER_AREA).unwrap();

        click(&mut doc);
        click(&mut doc);
        assert!(!handle.is_open());
        assert!(!panel_visible(&doc));
    }

    #[test]
    fn missing_panel_fails_without_listener() {
        let mut doc = MemoryDocument::new().with_element(USER, true);
        let err = MenuToggle::default()
            .attach(&mut doc, USER, USER_AREA)
            .unwrap_err();

        assert_eq!(
            err,
            ToggleError::ElementNotFound {
                id: ElementId::from(USER_AREA)
            }
        );
        assert_eq!(doc.listener_count(&ElementId::from(USER)), 0);
        assert_eq!(click(&mut doc), 0);
    }

    #[test]
    fn missing_trigger_is_reported_first() {
        let mut doc = MemoryDocument::new();
        let err = MenuToggle::default()
            .attach(&mut doc, USER, USER_AREA)
            .unwrap_err();

        assert_eq!(
            err,
            ToggleError::ElementNotFound {
                id: ElementId::from(USER)
            }
        );
    }

    #[test]
    fn failed_attach_leaves_panel_alone() {
        let mut doc = MemoryDocument::new().with_element(USER_AREA, true);
        assert!(MenuToggle::default().attach(&mut doc, USER, USER_AREA).is_err());
        assert!(panel_visible(&doc));
    }

    #[test]
    fn attach_hides_a_panel_that_starts_visible() {
        let mut doc = page();
        doc.insert(USER_AREA, true);
        let handle = MenuToggle::default().attach(&mut doc, USER, USER_AREA).unwrap();

        assert!(!handle.is_open());
        assert!(!panel_visible(&doc));
    }

    #[test]
    fn from_document_reads_current_visibility() {
        let mut doc = page();
        doc.insert(USER_AREA, true);
        let toggle =
            MenuToggle::new(ToggleOptions::default().with_initial(InitialVisibility::FromDocument));
        let handle = toggle.attach(&mut doc, USER, USER_AREA).unwrap();

        assert!(handle.is_open());
        click(&mut doc);
        assert!(!handle.is_open());
        assert!(!panel_visible(&doc));
    }

    #[test]
    fn detach_stops_toggling() {
        let mut doc = page();
        let handle = MenuToggle::default().attach(&mut doc, USER, USER_AREA).unwrap();
        click(&mut doc);

        assert!(handle.detach(&mut doc));
        assert_eq!(click(&mut doc), 0);
        assert!(panel_visible(&doc));
    }

    #[test]
    fn detach_reports_missing_listener() {
        let mut doc = page();
        let handle = MenuToggle::default().attach(&mut doc, USER, USER_AREA).unwrap();
        assert!(doc.remove_listener(handle.listener()));
        assert!(!handle.detach(&mut doc));
    }

    #[test]
    fn reattach_resets_to_closed() {
        let mut doc = page();
        let toggle = MenuToggle::default();
        let handle = toggle.attach(&mut doc, USER, USER_AREA).unwrap();
        click(&mut doc);
        assert!(handle.is_open());
        handle.detach(&mut doc);

        let handle = toggle.attach(&mut doc, USER, USER_AREA).unwrap();
        assert_eq!(handle.state(), ToggleState::Closed);
        assert!(!panel_visible(&doc));
        assert_eq!(doc.listener_count(&ElementId::from(USER)), 1);
        click(&mut doc);
        assert!(handle.is_open());
    }

    #[test]
    fn instances_do_not_interfere() {
        let mut doc = page()
            .with_element("help", true)
            .with_element("help-area", false);
        let toggle = MenuToggle::default();
        let user = toggle.attach(&mut doc, USER, USER_AREA).unwrap();
        let help = toggle.attach(&mut doc, "help", "help-area").unwrap();

        click(&mut doc);
        assert!(user.is_open());
        assert!(!help.is_open());
        assert_eq!(doc.is_visible(&ElementId::from("help-area")), Some(false));

        doc.dispatch_activate(&ElementId::from("help"));
        doc.dispatch_activate(&ElementId::from("help"));
        doc.dispatch_activate(&ElementId::from("help"));
        assert!(user.is_open());
        assert!(help.is_open());
        assert!(panel_visible(&doc));
    }

    #[test]
    fn vanished_panel_still_flips_state() {
        let mut doc = page();
        let handle = MenuToggle::default().attach(&mut doc, USER, USER_AREA).unwrap();
        doc.remove(&ElementId::from(USER_AREA));

        click(&mut doc);
        assert!(handle.is_open());
        assert_eq!(doc.is_visible(&ElementId::from(USER_AREA)), None);
    }

    #[test]
    fn reinserted_panel_resyncs_after_a_full_cycle() {
        let mut doc = page();
        let handle = MenuToggle::default().attach(&mut doc, USER, USER_AREA).unwrap();
        doc.remove(&ElementId::from(USER_AREA));
        click(&mut doc);
        doc.insert(USER_AREA, false);

        // state flipped while the panel was gone
        assert!(handle.is_open());
        assert!(!panel_visible(&doc));

        click(&mut doc);
        assert!(!handle.is_open());
        assert!(!panel_visible(&doc));

        click(&mut doc);
        assert!(handle.is_open());
        assert!(panel_visible(&doc));
    }

    #[test]
    fn attaches_through_a_trait_object() {
        let mut doc = page();
        let dyn_doc: &mut dyn Document = &mut doc;
        let handle = MenuToggle::default().attach(dyn_doc, USER, USER_AREA).unwrap();

        click(&mut doc);
        assert!(handle.is_open());
    }

    proptest! {
        #[test]
        fn panel_visible_iff_odd_number_of_clicks(clicks in 0usize..64) {
            let mut doc = page();
            let handle = MenuToggle::default().attach(&mut doc, USER, USER_AREA).unwrap();
            for _ in 0..clicks {
                click(&mut doc);
            }
            prop_assert_eq!(panel_visible(&doc), clicks % 2 == 1);
            prop_assert_eq!(handle.is_open(), clicks % 2 == 1);
        }

        #[test]
        fn reattach_always_closes(clicks in 0usize..16) {
            let mut doc = page();
            let toggle = MenuToggle::default();
            let handle = toggle.attach(&mut doc, USER, USER_AREA).unwrap();
            for _ in 0..clicks {
                click(&mut doc);
            }
            handle.detach(&mut doc);
            let handle = toggle.attach(&mut doc, USER, USER_AREA).unwrap();
            prop_assert_eq!(handle.state(), ToggleState::Closed);
            prop_assert!(!panel_visible(&doc));
        }
    }
}
