use crate::app::UserMenu;
use egui::{Button, Layout};
use tracing::error;

const BTN_WIDTH: f32 = 200.0;

impl UserMenu {
    pub fn menubar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            // Window
            self.window_menu(ui);
            // User
            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                self.user_button(ui);
            });
        });
    }

    fn window_menu(&mut self, ui: &mut egui::Ui) {
        ui.menu_button("Window", |ui| {
            let attached = self.is_attached();
            let attach_btn = Button::new("Attach Menu").min_size((BTN_WIDTH, 0.).into());
            if ui.add_enabled(!attached, attach_btn).clicked() {
                if let Err(err) = self.attach() {
                    error!("attach user menu error: {err}");
                }
                ui.close();
            }
            let detach_btn = Button::new("Detach Menu").min_size((BTN_WIDTH, 0.).into());
            if ui.add_enabled(attached, detach_btn).clicked() {
                self.detach();
                ui.close();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    fn user_button(&mut self, ui: &mut egui::Ui) {
        let user_btn = Button::new(self.opts.username.as_str()).selected(self.user_area_visible());
        if ui.add(user_btn).clicked() {
            self.click_user();
        }
    }
}
