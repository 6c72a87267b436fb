use crate::constants;
use crate::figure::PlotRequest;

/// Command line options; they only prefill the form.
#[derive(clap::Parser, Debug, Clone, PartialEq)]
#[command(version, about = "Plot a function of x")]
pub struct Options {
    /// Expression in x, e.g. "sin(x) + 0.5*x**2"
    #[arg(short, long, default_value = constants::DEFAULT_EXPRESSION)]
    pub expression: String,

    /// First x value
    #[arg(long, default_value = constants::DEFAULT_START, allow_hyphen_values = true)]
    pub start: String,

    /// Last x value
    #[arg(long, default_value = constants::DEFAULT_END, allow_hyphen_values = true)]
    pub end: String,

    /// Number of samples
    #[arg(long, default_value = constants::DEFAULT_POINTS, allow_hyphen_values = true)]
    pub points: String,

    /// Plot the prefilled form right away
    #[arg(long)]
    pub plot: bool,
}

impl Options {
    pub fn request(&self) -> PlotRequest {
        PlotRequest {
            expression: self.expression.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            points: self.points.clone(),
        }
    }
}
