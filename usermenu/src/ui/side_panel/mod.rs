use crate::app::UserMenu;
use crate::consts::USER_AREA;
use egui::{Button, RichText};

/// Entries of the account menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAreaEntry {
    ChangePassword,
    Users,
    LogOut,
}

impl UserAreaEntry {
    pub fn label(self) -> &'static str {
        match self {
            UserAreaEntry::ChangePassword => "Change Password",
            UserAreaEntry::Users => "Users",
            UserAreaEntry::LogOut => "Log out",
        }
    }

    /// `Users` is only offered to administrators.
    pub fn visible_to(is_admin: bool) -> Vec<UserAreaEntry> {
        let mut entries = vec![UserAreaEntry::ChangePassword];
        if is_admin {
            entries.push(UserAreaEntry::Users);
        }
        entries.push(UserAreaEntry::LogOut);
        entries
    }
}

pub struct UserArea;

impl UserArea {
    pub const DEFAULT_WIDTH: f32 = 200.0;
    pub const MIN_WIDTH: f32 = 150.0;
    pub const MAX_WIDTH: f32 = 400.0;
}

impl UserMenu {
    pub fn user_area(&mut self, ctx: &egui::Context, visible: bool) {
        egui::SidePanel::right(USER_AREA)
            .resizable(true)
            .default_width(UserArea::DEFAULT_WIDTH)
            .width_range(UserArea::MIN_WIDTH..=UserArea::MAX_WIDTH)
            .show_animated(ctx, visible, |ui| {
                ui.label(RichText::new(self.opts.username.as_str()).strong());
                ui.separator();

                let attached = self.is_attached();
                let mut chosen = None;
                for entry in UserAreaEntry::visible_to(self.opts.is_admin) {
                    let btn = Button::new(entry.label()).min_size((UserArea::MIN_WIDTH, 0.).into());
                    if ui.add_enabled(attached, btn).clicked() {
                        chosen = Some(entry);
                    }
                }
                if !attached {
                    ui.weak("Menu detached");
                }
                if let Some(entry) = chosen {
                    self.choose(entry);
                }
            });
    }
}
