use tv_core::{Fluid, filter_fluid_catalog, fluid_catalog};

#[derive(Debug, Default)]
pub struct SearchableFluidPicker {
    search_query: String,
}

impl SearchableFluidPicker {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        id_salt: impl std::hash::Hash,
        selected: &mut Fluid,
    ) -> bool {
        let mut changed = false;

        egui::ComboBox::from_id_salt(id_salt)
            .selected_text(selected.display_name())
            .width(220.0)
            .show_ui(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Search:");
                    let search_response = ui
                        .text_edit_singleline(&mut self.search_query)
                        .on_hover_text("Type to filter fluids");
                    if search_response.changed() || self.search_query.is_empty() {
                        search_response.request_focus();
                    }

                    if ui.small_button("Clear").clicked() {
                        self.search_query.clear();
                    }
                });

                ui.separator();

                let filtered = filter_fluid_catalog(&self.search_query);
                if filtered.is_empty() {
                    ui.label("No fluids found");
                    return;
                }

                egui::ScrollArea::vertical()
                    .max_height(240.0)
                    .show(ui, |ui| {
                        for entry in filtered {
                            let label =
                                format!("{} ({})", entry.display_name, entry.canonical_id);
                            changed |= ui
                                .selectable_value(selected, entry.fluid, label)
                                .changed();
                        }
                    });
            });

        changed
    }
}
