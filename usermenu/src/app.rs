use crate::consts::{PKG_NAME, USER_AREA, USER_TRIGGER};
use crate::errors::UiError;
use crate::ui::UserAreaEntry;
use eframe::{egui, NativeOptions};
use menu_toggle::{
    Document, ElementId, InitialVisibility, MemoryDocument, MenuToggle, ToggleHandle,
    ToggleOptions,
};
use tracing::{error, info, warn};

#[derive(Debug, Clone)]
pub struct UserMenuOptions {
    pub username: String,
    pub is_admin: bool,
    pub initial: InitialVisibility,
}

impl Default for UserMenuOptions {
    fn default() -> Self {
        Self {
            username: "admin".to_owned(),
            is_admin: true,
            initial: InitialVisibility::AssumeClosed,
        }
    }
}

pub struct UserMenu {
    pub document: MemoryDocument,
    pub opts: UserMenuOptions,
    pub last_action: Option<UserAreaEntry>,
    pub attach_error: Option<String>,
    toggle: MenuToggle,
    handle: Option<ToggleHandle>,
    trigger: ElementId,
    panel: ElementId,
}

impl UserMenu {
    /// A page holding the user trigger and a hidden user area.
    pub fn new(opts: UserMenuOptions) -> Self {
        let document = MemoryDocument::new()
            .with_element(USER_TRIGGER, true)
            .with_element(USER_AREA, false);
        Self::with_document(opts, document)
    }

    /// Attaches the menu to an existing document. A failed attach leaves the
    /// trigger inert and is reported in the status bar.
    pub fn with_document(opts: UserMenuOptions, document: MemoryDocument) -> Self {
        let toggle = MenuToggle::new(ToggleOptions::default().with_initial(opts.initial));
        let mut menu = Self {
            document,
            opts,
            last_action: None,
            attach_error: None,
            toggle,
            handle: None,
            trigger: ElementId::from(USER_TRIGGER),
            panel: ElementId::from(USER_AREA),
        };
        if let Err(err) = menu.attach() {
            error!("user menu is not interactive: {err}");
        }
        menu
    }

    pub fn start(options: NativeOptions, opts: UserMenuOptions) -> eframe::Result<()> {
        eframe::run_native(
            PKG_NAME,
            options,
            Box::new(|cc| {
                cc.egui_ctx
                    .options_mut(|opt| opt.zoom_with_keyboard = false);
                Ok(Box::new(UserMenu::new(opts)))
            }),
        )
    }

    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.handle.as_ref().is_some_and(ToggleHandle::is_open)
    }

    pub fn attach(&mut self) -> Result<(), UiError> {
        if self.handle.is_some() {
            return Err(UiError::Plain("user menu is already attached".to_owned()));
        }
        match self
            .toggle
            .attach(&mut self.document, self.trigger.clone(), self.panel.clone())
        {
            Ok(handle) => {
                self.handle = Some(handle);
                self.attach_error = None;
                Ok(())
            }
            Err(err) => {
                self.attach_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Returns `false` when nothing was attached.
    pub fn detach(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => handle.detach(&mut self.document),
            None => false,
        }
    }

    /// Delivers a click on the user trigger.
    pub fn click_user(&mut self) -> usize {
        self.document.dispatch_activate(&self.trigger)
    }

    pub fn user_area_visible(&self) -> bool {
        self.document.is_visible(&self.panel).unwrap_or_default()
    }

    /// Records the chosen entry and closes the menu the same way a click on
    /// the trigger would. A detached menu leaves its panel as it was, so
    /// entries are ignored until the menu is attached again.
    pub fn choose(&mut self, entry: UserAreaEntry) -> bool {
        if !self.is_attached() {
            warn!("user menu is detached, ignoring {}", entry.label());
            return false;
        }
        info!("user {} chose {}", self.opts.username, entry.label());
        self.last_action = Some(entry);
        if self.is_open() {
            self.click_user();
        }
        true
    }
}

impl eframe::App for UserMenu {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("main_top_panel").show(ctx, |ui| {
            self.menubar(ui);
        });
        egui::TopBottomPanel::bottom("main_bottom_panel").show(ctx, |ui| {
            self.status_bar(ui);
        });
        let visible = self.user_area_visible();
        self.user_area(ctx, visible);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Scripts");
            ui.label(format!("Signed in as {}", self.opts.username));
        });
    }
}
