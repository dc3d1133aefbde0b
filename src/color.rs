//! Colors for rendering subgraphs
//!
//! Nodes are colored by their enrichment significance on a two-color
//! [`Gradient`], edges by their [`RelationType`](crate::RelationType).

use std::fmt::Display;
use std::str::FromStr;

use crate::{GoError, GRADIENT_BINS};

/// An RGB color, displayed as hex code `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Background of seed terms
    pub const WHITE: Color = Color::new(255, 255, 255);
    /// Background of all other terms, before enrichment coloring
    pub const NEUTRAL: Color = Color::new(211, 211, 211);
    /// `black`
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// `green`
    pub const GREEN: Color = Color::new(0, 128, 0);
    /// `red`
    pub const RED: Color = Color::new(255, 0, 0);
    /// `gold`
    pub const GOLD: Color = Color::new(255, 215, 0);
    /// `blue`
    pub const BLUE: Color = Color::new(0, 0, 255);
    /// `purple`
    pub const PURPLE: Color = Color::new(128, 0, 128);
    /// `lightblue`, start of the default gradient
    pub const LIGHT_BLUE: Color = Color::new(173, 216, 230);
    /// `orange`, end of the default gradient
    pub const ORANGE: Color = Color::new(255, 165, 0);

    /// Constructs a new [`Color`] from its red, green and blue channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the red, green and blue channels
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Linear interpolation between `self` (`fraction = 0`) and `other` (`fraction = 1`)
    fn mix(&self, other: &Color, fraction: f64) -> Color {
        let channel = |a: u8, b: u8| -> u8 {
            let value = f64::from(a) + (f64::from(b) - f64::from(a)) * fraction;
            // value is always within 0..=255
            value.round().clamp(0.0, 255.0) as u8
        };
        Color::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = GoError;

    /// Parses hex codes like `#ADD8E6` or `add8e6`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(GoError::InvalidInput(format!("invalid color {s}")));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| GoError::InvalidInput(format!("invalid color {s}")))
        };
        Ok(Color::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// A two-color gradient, divided into equally spaced color bins
///
/// # Examples
///
/// ```
/// use godag::color::{Color, Gradient};
///
/// let gradient = Gradient::default();
/// assert_eq!(gradient.len(), 100);
///
/// // The lowest value gets the first color, the highest value the last
/// assert_eq!(gradient.color_for(0.0, 0.0, 8.0), Color::LIGHT_BLUE);
/// assert_eq!(gradient.color_for(8.0, 0.0, 8.0), Color::ORANGE);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    colors: Vec<Color>,
}

impl Gradient {
    /// Constructs a new gradient from `start` to `end` with `bins` colors
    ///
    /// A gradient needs at least one color, `bins = 0` is treated as `1`.
    pub fn new(start: Color, end: Color, bins: usize) -> Self {
        let bins = bins.max(1);
        let colors = (0..bins)
            .map(|idx| {
                if bins == 1 {
                    start
                } else {
                    start.mix(&end, idx as f64 / (bins - 1) as f64)
                }
            })
            .collect();
        Self { colors }
    }

    /// Returns the number of color bins
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`, a gradient contains at least one color
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the colors of all bins
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the bin index of `value` within the range `min..=max`
    ///
    /// The range is divided into equal-width bins. Values outside of the range
    /// are clamped to the first or last bin. A degenerate range (`max <= min`)
    /// or a `NaN` value map to the first bin.
    pub fn bin(&self, value: f64, min: f64, max: f64) -> usize {
        let width = max - min;
        if width.is_nan() || width <= 0.0 || value.is_nan() {
            return 0;
        }
        let position = ((value - min) / width * self.len() as f64).floor();
        if position <= 0.0 {
            0
        } else {
            (position as usize).min(self.len() - 1)
        }
    }

    /// Returns the color for `value` within the range `min..=max`
    pub fn color_for(&self, value: f64, min: f64, max: f64) -> Color {
        self.colors[self.bin(value, min, max)]
    }
}

impl Default for Gradient {
    /// Light blue to orange in 100 bins
    fn default() -> Self {
        Gradient::new(Color::LIGHT_BLUE, Color::ORANGE, GRADIENT_BINS)
    }
}
