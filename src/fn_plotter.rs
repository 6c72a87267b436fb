use crate::*;

pub struct FnPlotter {
    request: figure::PlotRequest,
    selected_example: Option<&'static str>,
    session: figure::PlotSession,
    error: Option<Error>,
}

impl Default for FnPlotter {
    fn default() -> Self {
        Self::new(figure::PlotRequest::default())
    }
}

impl eframe::App for FnPlotter {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::default()
                    .inner_margin(20)
                    .fill(constants::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                // the error dialog is modal, like a message box
                let action = ui
                    .add_enabled_ui(self.error.is_none(), |ui| {
                        control::add_controls(ui, &mut self.request, &mut self.selected_example)
                    })
                    .inner;
                match action {
                    control::Action::Plot => self.plot(),
                    control::Action::Clear => self.clear(),
                    control::Action::None => {}
                }
            });

        plotter::show_figures(ctx, &mut self.session);
        self.show_error(ctx);
    }
}

impl FnPlotter {
    pub fn new(request: figure::PlotRequest) -> Self {
        Self {
            request,
            selected_example: None,
            session: figure::PlotSession::new(),
            error: None,
        }
    }

    /// Runs the current form as a plot request, opening a figure or recording the error.
    pub fn plot(&mut self) {
        match self.request.evaluate() {
            Ok(figure) => {
                let number = self.session.plot(figure);
                log::info!("opened figure {}", number);
                self.error = None;
            }
            Err(error) => {
                log::warn!("{}: {}", error.title(), error);
                self.error = Some(error);
            }
        }
    }

    pub fn clear(&mut self) {
        log::info!("closing {} figure(s)", self.session.figures().len());
        self.session.clear();
    }

    pub fn session(&self) -> &figure::PlotSession {
        &self.session
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    fn show_error(&mut self, ctx: &egui::Context) {
        let Some(error) = &self.error else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(error.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0_f32, 0_f32])
            .show(ctx, |ui| {
                ui.colored_label(egui::Color32::LIGHT_RED, error.to_string());
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed {
            self.error = None;
        }
    }
}
