// ABOUTME: Benchmark fixtures generating deterministic synthetic food photos
// ABOUTME: Photos come in fixed sizes so resize cost shows up in measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! Deterministic synthetic photos for reproducible performance measurements.

use image::{Rgb, RgbImage};

/// Predefined photo sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum PhotoSize {
    /// Thumbnail, upscaled during analysis
    Thumbnail,
    /// Already at the analysis size
    Analysis,
    /// Typical phone upload, downscaled during analysis
    Phone,
}

impl PhotoSize {
    pub const ALL: [Self; 3] = [Self::Thumbnail, Self::Analysis, Self::Phone];

    #[must_use]
    pub const fn edge(self) -> u32 {
        match self {
            Self::Thumbnail => 96,
            Self::Analysis => 224,
            Self::Phone => 1024,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Analysis => "analysis",
            Self::Phone => "phone",
        }
    }
}

/// Curry-like photo: warm base color with a repeating texture pattern
#[must_use]
pub fn curry_photo(size: PhotoSize) -> RgbImage {
    let edge = size.edge();
    RgbImage::from_fn(edge, edge, |x, y| {
        let grain = ((x * 7 + y * 13) % 41) as u8;
        Rgb([170 + grain, 90 + grain / 2, 50 + grain / 3])
    })
}

/// Green leafy photo with horizontal bands
#[must_use]
pub fn leafy_photo(size: PhotoSize) -> RgbImage {
    let edge = size.edge();
    RgbImage::from_fn(edge, edge, |_, y| {
        if y % 2 == 0 {
            Rgb([40, 160, 40])
        } else {
            Rgb([60, 200, 60])
        }
    })
}
