use crate::constants;
use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::expression;

/// Raw form contents of one plot request.
#[derive(Debug, PartialEq, Clone)]
pub struct PlotRequest {
    pub expression: String,
    pub start: String,
    pub end: String,
    pub points: String,
}

impl Default for PlotRequest {
    fn default() -> Self {
        Self {
            expression: String::from(constants::DEFAULT_EXPRESSION),
            start: String::from(constants::DEFAULT_START),
            end: String::from(constants::DEFAULT_END),
            points: String::from(constants::DEFAULT_POINTS),
        }
    }
}

impl PlotRequest {
    /// Validates the domain, then evaluates the expression over it.
    pub fn evaluate(&self) -> Result<Figure> {
        let domain = Domain::parse(&self.start, &self.end, &self.points)?;
        let expression = self.expression.trim();
        if expression.is_empty() {
            return Err(Error::EmptyExpression);
        }
        let xs = domain.samples()?;
        let ys = expression::evaluate(expression, &xs)?;
        log::info!("evaluated y = {} over {}", expression, domain);
        Ok(Figure {
            expression: String::from(expression),
            xs,
            ys,
        })
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Figure {
    pub expression: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Figure {
    pub fn title(&self) -> String {
        format!("y = {}", self.expression)
    }

    /// Runs of consecutive finite points; NaN and infinite values leave gaps.
    pub fn segments(&self) -> Vec<Vec<[f64; 2]>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (x, y) in self.xs.iter().zip(&self.ys) {
            if x.is_finite() && y.is_finite() {
                current.push([*x, *y]);
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// The figures currently open, each under its own number.
#[derive(Debug, Default)]
pub struct PlotSession {
    figures: Vec<(usize, Figure)>,
}

impl PlotSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a figure under the lowest free number and returns that number.
    pub fn plot(&mut self, figure: Figure) -> usize {
        let number = (1..)
            .find(|candidate| self.figures.iter().all(|(n, _)| n != candidate))
            .unwrap_or(self.figures.len() + 1);
        self.figures.push((number, figure));
        number
    }

    pub fn close(&mut self, number: usize) {
        self.figures.retain(|(n, _)| *n != number);
    }

    pub fn clear(&mut self) {
        self.figures.clear();
    }

    pub fn figures(&self) -> &[(usize, Figure)] {
        &self.figures
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}
