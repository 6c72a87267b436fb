use crate::*;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Action {
    None,
    Plot,
    Clear,
}

pub fn add_controls(
    ui: &mut egui::Ui,
    request: &mut figure::PlotRequest,
    selected_example: &mut Option<&'static str>,
) -> Action {
    let mut action = Action::None;
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.label("Type function in x:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut request.expression)
                    .desired_width(480_f32)
                    .hint_text(constants::DEFAULT_EXPRESSION),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = Action::Plot;
            }
        });

        add_domain_fields(ui, request);

        ui.horizontal(|ui| {
            if ui.button("Plot").clicked() {
                action = Action::Plot;
            }
            if ui.button("Clear plots").clicked() {
                action = Action::Clear;
            }
            if ui.button("Examples").clicked() {
                if let Some(example) = selected_example {
                    request.expression = String::from(*example);
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("Quick examples:");
            egui::ComboBox::from_id_salt("examples")
                .selected_text(selected_example.unwrap_or(""))
                .width(320_f32)
                .show_ui(ui, |ui| {
                    for example in constants::EXAMPLES {
                        if ui
                            .selectable_value(&mut *selected_example, Some(example), example)
                            .clicked()
                        {
                            request.expression = String::from(example);
                        }
                    }
                });
        });

        ui.label(constants::HELP_TEXT);
    });
    action
}

fn add_domain_fields(ui: &mut egui::Ui, request: &mut figure::PlotRequest) {
    egui::Grid::new("domain").num_columns(3).show(ui, |ui| {
        ui.label("x start");
        ui.label("x end");
        ui.label("points");
        ui.end_row();

        ui.add(egui::TextEdit::singleline(&mut request.start).desired_width(64_f32));
        ui.add(egui::TextEdit::singleline(&mut request.end).desired_width(64_f32));
        ui.add(egui::TextEdit::singleline(&mut request.points).desired_width(48_f32));
        ui.end_row();
    });
}
