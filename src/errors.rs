// ABOUTME: Unified error handling re-exports plus a serializable error report
// ABOUTME: ErrorResponse is what the CLI prints when a scan fails in JSON mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! # Unified Error Handling System
//!
//! Error codes and [`AppError`] live in `foodscan-core` so the vision crate can
//! share them. This module re-exports them and adds the response shape used
//! by front ends.

use serde::{Deserialize, Serialize};

pub use foodscan_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};

/// Error report format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Error payload of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Internal message
    pub message: String,
    /// Message for the person who submitted the photo
    pub user_message: String,
    /// Scan the error belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_id: Option<String>,
    /// File or entry the error refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Extra structured context
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                user_message: error.user_message(),
                message: error.message,
                scan_id: error.context.scan_id,
                resource: error.context.resource,
                details: error.context.details,
            },
        }
    }
}
