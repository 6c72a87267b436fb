use crate::error::{DomainField, Error, Result};
use num_traits::Float;
use num_traits::cast::FromPrimitive;
use std::collections::TryReserveError;

/// Sampling interval for `x`, `count` points from `start` to `end` inclusive.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl Domain {
    pub fn new(start: f64, end: f64, count: i64) -> Result<Self> {
        if count <= 1 || start == end {
            return Err(Error::Range { start, end, count });
        }
        Ok(Self {
            start,
            end,
            count: count as usize,
        })
    }

    /// Reads the three raw form fields, checked in the order start, end, points.
    pub fn parse(start: &str, end: &str, count: &str) -> Result<Self> {
        let start = parse_field::<f64>(start, DomainField::Start)?;
        let end = parse_field::<f64>(end, DomainField::End)?;
        let count = parse_field::<i64>(count, DomainField::Points)?;
        Self::new(start, end, count)
    }

    /// Fails instead of aborting when the sample buffer cannot be allocated.
    pub fn samples(&self) -> Result<Vec<f64>> {
        linspace(self.start, self.end, self.count).map_err(|_| Error::Allocation {
            count: self.count,
        })
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}] ({} points)", self.start, self.end, self.count)
    }
}

fn parse_field<T: std::str::FromStr>(input: &str, field: DomainField) -> Result<T> {
    input.trim().parse::<T>().map_err(|_| Error::Parse {
        field,
        input: String::from(input),
    })
}

/// `count` evenly spaced values over `[start, end]`, both endpoints included.
pub fn linspace<F: Float + FromPrimitive>(
    start: F,
    end: F,
    count: usize,
) -> std::result::Result<Vec<F>, TryReserveError> {
    let mut samples = Vec::new();
    samples.try_reserve_exact(count)?;
    match count {
        0 => return Ok(samples),
        1 => {
            samples.push(start);
            return Ok(samples);
        }
        _ => {}
    }
    let steps = F::from_usize(count - 1).unwrap_or_else(F::one);
    let step = (end - start) / steps;
    samples.extend(
        (0..count - 1).map(|index| start + F::from_usize(index).unwrap_or_else(F::zero) * step),
    );
    // the last sample is pinned so rounding never moves the endpoint
    samples.push(end);
    Ok(samples)
}
