use crate::*;

/// Draws every open figure in its own window; closed windows leave the session.
pub fn show_figures(ctx: &egui::Context, session: &mut figure::PlotSession) {
    let mut closed = Vec::new();
    for (number, figure) in session.figures() {
        let mut open = true;
        egui::Window::new(format!("Figure {}", number))
            .id(egui::Id::new(("figure", *number)))
            .open(&mut open)
            .default_size(constants::FIGURE_SIZE)
            .default_pos(figure_position(*number))
            .show(ctx, |ui| add_figure(ui, *number, figure));
        if !open {
            closed.push(*number);
        }
    }
    for number in closed {
        log::debug!("closing figure {}", number);
        session.close(number);
    }
}

/// Cascades new windows so they do not stack exactly on top of each other.
fn figure_position(number: usize) -> egui::Pos2 {
    let offset = 30_f32 * ((number - 1) % 10) as f32;
    egui::Pos2::new(60_f32 + offset, 260_f32 + offset)
}

fn add_figure(ui: &mut egui::Ui, number: usize, figure: &figure::Figure) {
    ui.vertical_centered(|ui| ui.heading(figure.title()));
    egui_plot::Plot::new(("figure plot", number))
        .x_axis_label("x")
        .y_axis_label("y")
        .label_formatter(|_, point| format!("x = {:.4}, y = {:.4}", point.x, point.y))
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            // segments share one name, so the legend lists the curve once
            for segment in figure.segments() {
                plot_ui.line(
                    egui_plot::Line::new(egui_plot::PlotPoints::new(segment))
                        .name(figure.title())
                        .color(constants::LINE_COLOR),
                );
            }
        });
}
