pub const WINDOW_TITLE: &str = "Student Graph Plotter";
pub const INIT_WINDOW_SIZE: [u32; 2] = [1100, 800]; // [width, height]
pub const FIGURE_SIZE: [f32; 2] = [640.0, 400.0]; // [width, height]

pub const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(32, 35, 38);
pub const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(31, 119, 180);

pub const DEFAULT_EXPRESSION: &str = "sin(x)";
pub const DEFAULT_START: &str = "-10";
pub const DEFAULT_END: &str = "10";
pub const DEFAULT_POINTS: &str = "500";

pub const EXAMPLES: [&str; 8] = [
    "sin(x)",
    "cos(x)",
    "tan(x)",
    "x**2",
    "x**3 - 2*x + 3",
    "sin(x) + 0.5*x**2",
    "exp(-x**2)",
    "np.sinc(x)",
];

pub const HELP_TEXT: &str = "Enter expression using variable x. Allowed functions: sin, cos, tan, \
    arcsin, arccos, arctan, exp, log, sqrt, abs, pi, e, np. Press Enter to plot.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use crate::expression;

    #[test]
    fn examples_plot_over_default_domain() {
        let samples = Domain::parse(DEFAULT_START, DEFAULT_END, DEFAULT_POINTS)
            .unwrap()
            .samples()
            .unwrap();
        for example in EXAMPLES {
            let values = expression::evaluate(example, &samples).unwrap();
            assert_eq!(values.len(), samples.len(), "{example}");
        }
        assert!(expression::evaluate(DEFAULT_EXPRESSION, &samples).is_ok());
    }

    #[test]
    fn help_text_lists_every_top_level_function() {
        for function in expression::Function::TOP_LEVEL {
            assert!(HELP_TEXT.contains(function.name()), "{}", function.name());
        }
    }
}
