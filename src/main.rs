use clap::Parser;
use fn_plotter::constants;
use fn_plotter::fn_plotter::FnPlotter;
use fn_plotter::options::Options;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse();
    log::debug!("{:?}", options);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                constants::INIT_WINDOW_SIZE[0] as f32,
                constants::INIT_WINDOW_SIZE[1] as f32,
            ])
            .with_title(constants::WINDOW_TITLE)
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        constants::WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| {
            let mut app = FnPlotter::new(options.request());
            if options.plot {
                app.plot();
            }
            Ok(Box::new(app))
        }),
    )
}
