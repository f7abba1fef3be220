use crate::app::UserMenu;

impl UserMenu {
    pub fn status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(err) = &self.attach_error {
                ui.colored_label(ui.visuals().error_fg_color, err);
            } else if let Some(entry) = self.last_action {
                ui.label(format!("Last action: {}", entry.label()));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::widgets::global_theme_preference_switch(ui);
            });
        });
    }
}
