// ABOUTME: Error types for image analysis failures in the vision crate
// ABOUTME: Converted into AppError with InvalidImage or ConfigInvalid at the crate boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

use foodscan_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Failures raised while computing image statistics
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisionError {
    /// Image has zero width or height
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage {
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// A statistic came out as NaN or infinity
    #[error("feature statistics are not finite")]
    Degenerate,

    /// Threshold configuration is unusable
    #[error("invalid vision configuration: {0}")]
    InvalidConfig(String),
}

impl From<VisionError> for AppError {
    fn from(error: VisionError) -> Self {
        let code = match error {
            VisionError::InvalidConfig(_) => ErrorCode::ConfigInvalid,
            VisionError::EmptyImage { .. } | VisionError::Degenerate => ErrorCode::InvalidImage,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
