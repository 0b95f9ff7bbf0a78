// ABOUTME: Feature vector of aggregate pixel statistics and dominant-color flags
// ABOUTME: Immutable value derived once per image and consumed by validator and matcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// A perceived dominant hue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DominantColor {
    /// Red exceeds green and blue by a margin
    Red,
    /// Green exceeds red and blue by a margin
    Green,
    /// Bright red and green with little blue
    Yellow,
    /// Mid-range red and green with little blue
    Brown,
    /// Bright and unsaturated
    White,
}

impl DominantColor {
    /// All colors in rule evaluation order
    pub const ALL: [Self; 5] = [Self::Green, Self::Red, Self::Yellow, Self::Brown, Self::White];

    /// Lowercase name used in logs and serialized output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Brown => "brown",
            Self::White => "white",
        }
    }
}

impl fmt::Display for DominantColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Independent dominance flags; any combination may be set
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DominanceFlags {
    /// Red dominant
    pub red: bool,
    /// Green dominant
    pub green: bool,
    /// Yellow dominant
    pub yellow: bool,
    /// Brown dominant
    pub brown: bool,
    /// White dominant
    pub white: bool,
}

impl DominanceFlags {
    /// Flags with exactly one color set
    #[must_use]
    pub fn only(color: DominantColor) -> Self {
        let mut flags = Self::default();
        flags.set(color, true);
        flags
    }

    /// Whether the flag for `color` is set
    #[must_use]
    pub const fn is(&self, color: DominantColor) -> bool {
        match color {
            DominantColor::Red => self.red,
            DominantColor::Green => self.green,
            DominantColor::Yellow => self.yellow,
            DominantColor::Brown => self.brown,
            DominantColor::White => self.white,
        }
    }

    /// Set or clear the flag for `color`
    pub fn set(&mut self, color: DominantColor, value: bool) {
        match color {
            DominantColor::Red => self.red = value,
            DominantColor::Green => self.green = value,
            DominantColor::Yellow => self.yellow = value,
            DominantColor::Brown => self.brown = value,
            DominantColor::White => self.white = value,
        }
    }

    /// Colors whose flag is set, in rule evaluation order
    #[must_use]
    pub fn active(&self) -> Vec<DominantColor> {
        DominantColor::ALL
            .into_iter()
            .filter(|color| self.is(*color))
            .collect()
    }

    /// Whether no flag is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.red || self.green || self.yellow || self.brown || self.white)
    }
}

/// Aggregate statistics over a normalized image
///
/// All channel values are on a 0-255 scale. `saturation` is the standard
/// deviation over every channel value of every pixel, not an HSV saturation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    /// Mean red, green, blue
    pub avg_color: [f64; 3],
    /// Mean of `avg_color`
    pub brightness: f64,
    /// Standard deviation over all pixel channel values
    pub saturation: f64,
    /// Mean absolute gray difference between horizontally adjacent pixels
    pub edges_horizontal: f64,
    /// Mean absolute gray difference between vertically adjacent pixels
    pub edges_vertical: f64,
    /// Mean of the horizontal and vertical edge means
    pub texture_score: f64,
    /// Dominant-color flags
    pub dominance: DominanceFlags,
}

impl FeatureVector {
    /// Mean red channel value
    #[must_use]
    pub const fn red(&self) -> f64 {
        self.avg_color[0]
    }

    /// Mean green channel value
    #[must_use]
    pub const fn green(&self) -> f64 {
        self.avg_color[1]
    }

    /// Mean blue channel value
    #[must_use]
    pub const fn blue(&self) -> f64 {
        self.avg_color[2]
    }

    /// Population standard deviation of the three channel averages
    #[must_use]
    pub fn channel_spread(&self) -> f64 {
        let mean = self.avg_color.iter().sum::<f64>() / 3.0;
        let variance = self
            .avg_color
            .iter()
            .map(|channel| (channel - mean).powi(2))
            .sum::<f64>()
            / 3.0;
        variance.sqrt()
    }

    /// Whether every statistic is a finite number
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.avg_color.iter().all(|c| c.is_finite())
            && self.brightness.is_finite()
            && self.saturation.is_finite()
            && self.edges_horizontal.is_finite()
            && self.edges_vertical.is_finite()
            && self.texture_score.is_finite()
    }
}
