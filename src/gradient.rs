//! Gradient generation over RGB colors.
//!
//! Two entry points: `gradient` interpolates between two colors, and
//! `advanced_gradient` samples a path through an arbitrary ordered set of
//! color stops. `to_style_pattern` turns the resulting colors into a
//! repeating style pattern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::color::Rgb;
use crate::style::Style;

/// Errors from gradient construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradientError {
    #[error("Gradient needs at least 2 steps, got {0}")]
    TooFewSteps(usize),

    #[error("Gradient needs at least one color stop")]
    NoStops,

    #[error("Color stop percentage must be within 0..=100, got {0}")]
    PercentOutOfRange(u8),

    #[error("Color stop must look like #RRGGBB@percent, got: {0}")]
    MalformedStop(String),

    #[error("Color target must be \"fore\" or \"back\", got: {0}")]
    InvalidTarget(String),
}

/// A color anchored at a percentage position along a gradient's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: Rgb,
    /// Placement in 0..=100.
    pub percent: u8,
}

impl ColorStop {
    pub const fn new(color: Rgb, percent: u8) -> Self {
        Self { color, percent }
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.color.to_hex(), self.percent)
    }
}

impl FromStr for ColorStop {
    type Err = GradientError;

    /// Parse `#RRGGBB@percent`, e.g. `#FF0000@30`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GradientError::MalformedStop(s.to_string());
        let (hex, percent) = s.split_once('@').ok_or_else(malformed)?;
        let color: Rgb = hex.parse().map_err(|_| malformed())?;
        // Digits only: parse::<u8> would accept a leading `+`.
        if percent.is_empty() || !percent.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let percent: u8 = percent.parse().map_err(|_| malformed())?;
        if percent > 100 {
            return Err(GradientError::PercentOutOfRange(percent));
        }
        Ok(ColorStop::new(color, percent))
    }
}

/// Which side of a style gradient colors land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTarget {
    #[default]
    Fore,
    Back,
}

impl fmt::Display for ColorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorTarget::Fore => write!(f, "fore"),
            ColorTarget::Back => write!(f, "back"),
        }
    }
}

impl FromStr for ColorTarget {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fore" => Ok(ColorTarget::Fore),
            "back" => Ok(ColorTarget::Back),
            other => Err(GradientError::InvalidTarget(other.to_string())),
        }
    }
}

/// Linear interpolation between two colors, inclusive of both endpoints.
///
/// Each channel follows `from + (to - from) * i / (steps - 1)` with integer
/// truncation. `steps` must be at least 2 so both endpoints exist.
pub fn gradient(from: Rgb, to: Rgb, steps: usize) -> Result<Vec<Rgb>, GradientError> {
    if steps < 2 {
        return Err(GradientError::TooFewSteps(steps));
    }
    Ok(interpolate(from, to, steps))
}

/// Interpolation core shared with the multi-stop engine.
///
/// Unlike the public `gradient`, this tolerates the 0- and 1-sample
/// allocations that per-span rounding can produce: 0 yields nothing and 1
/// yields the segment's start color.
fn interpolate(from: Rgb, to: Rgb, steps: usize) -> Vec<Rgb> {
    match steps {
        0 => return Vec::new(),
        1 => return vec![from],
        _ => {}
    }

    // Channel math in i64: the (b - a) * i product outgrows i32 for
    // step counts in the millions.
    let span = (steps - 1) as i64;
    (0..steps)
        .map(|i| {
            let i = i as i64;
            let channel =
                |a: u8, b: u8| (a as i64 + (b as i64 - a as i64) * i / span) as u8;
            Rgb {
                red: channel(from.red, to.red),
                green: channel(from.green, to.green),
                blue: channel(from.blue, to.blue),
            }
        })
        .collect()
}

/// Multi-stop gradient over an ordered set of color stops.
///
/// Stops are sorted by percentage. When the lowest stop is not at 0% (or the
/// highest not at 100%), the uncovered span is filled with a constant run of
/// the boundary color rather than interpolated. `steps` is split across the
/// spans proportionally with per-span rounding, so the returned length may
/// drift from `steps` by a few samples - an accepted approximation, not a
/// guarantee.
pub fn advanced_gradient(stops: &[ColorStop], steps: usize) -> Result<Vec<Rgb>, GradientError> {
    if stops.is_empty() {
        return Err(GradientError::NoStops);
    }
    if let Some(bad) = stops.iter().find(|s| s.percent > 100) {
        return Err(GradientError::PercentOutOfRange(bad.percent));
    }

    let mut sorted = stops.to_vec();
    sorted.sort_by_key(|s| s.percent);
    let first = sorted[0];
    let last = sorted[sorted.len() - 1];

    // Marker positions, with synthetic 0/100 endpoints when missing.
    let leading = first.percent != 0;
    let trailing = last.percent != 100;
    let mut marks: Vec<u8> = Vec::with_capacity(sorted.len() + 2);
    if leading {
        marks.push(0);
    }
    marks.extend(sorted.iter().map(|s| s.percent));
    if trailing {
        marks.push(100);
    }

    // Allocate steps to each span proportionally to its width.
    let total: u32 = marks.windows(2).map(|w| u32::from(w[1] - w[0])).sum();
    let mut alloc: Vec<usize> = marks
        .windows(2)
        .map(|w| {
            let fraction = f64::from(w[1] - w[0]) / f64::from(total);
            (fraction * steps as f64).round() as usize
        })
        .collect();
    trace!(stops = sorted.len(), steps, spans = alloc.len(), "allocated gradient spans");

    let mut result = Vec::with_capacity(steps + alloc.len());

    // Leading constant run for a synthetic 0% marker.
    if leading {
        let run = alloc.remove(0);
        result.extend(std::iter::repeat(first.color).take(run));
    }
    let trailing_run = if trailing { alloc.pop() } else { None };

    // Interpolated middle segments between real consecutive stops.
    for (pair, run) in sorted.windows(2).zip(alloc) {
        result.extend(interpolate(pair[0].color, pair[1].color, run));
    }

    // Trailing constant run for a synthetic 100% marker.
    if let Some(run) = trailing_run {
        result.extend(std::iter::repeat(last.color).take(run));
    }

    Ok(result)
}

/// Map each color onto a default style with the color as foreground or
/// background, producing a ready-to-use repeating style pattern.
pub fn to_style_pattern(colors: &[Rgb], target: ColorTarget) -> Vec<Style> {
    colors
        .iter()
        .map(|&color| match target {
            ColorTarget::Fore => Style::new().with_fore(color),
            ColorTarget::Back => Style::new().with_back(color),
        })
        .collect()
}
