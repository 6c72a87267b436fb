pub mod constants;
pub mod control;
pub mod domain;
pub mod error;
pub mod expression;
pub mod figure;
pub mod fn_plotter;
pub mod options;
pub mod plotter;

pub use error::{Error, Result};
