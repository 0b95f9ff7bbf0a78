// ABOUTME: Unified error type and stable error codes for the FoodScan workspace
// ABOUTME: Maps image, validation, and configuration failures to user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodScan Contributors

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace surfaces an [`AppError`] carrying a
//! stable [`ErrorCode`]. Failures that the scan pipeline is expected to absorb
//! (unknown labels, low confidence, validator faults) never become errors.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input has the wrong format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric input outside its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Image processing (4000-4999)
    /// Image bytes could not be decoded
    #[serde(rename = "IMAGE_DECODE_FAILED")]
    ImageDecode = 4000,
    /// Image decoded but cannot be analyzed
    #[serde(rename = "INVALID_IMAGE")]
    InvalidImage = 4001,
    /// Image does not plausibly depict food
    #[serde(rename = "NOT_FOOD")]
    NotFood = 4002,
    /// File extension is not a supported image format
    #[serde(rename = "UNSUPPORTED_FORMAT")]
    UnsupportedFormat = 4003,

    // Resource Management (5000-5999)
    /// Requested file or entry does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 5000,

    // Configuration (6000-6999)
    /// Configuration value or file is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Filesystem read/write failure
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Data serialization/deserialization failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Numeric code for logs and exit statuses
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Get a short description of this error class
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ImageDecode => "The image could not be decoded",
            Self::InvalidImage => "The image cannot be analyzed",
            Self::NotFood => "The image does not appear to contain food",
            Self::UnsupportedFormat => "The image format is not supported",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether a caller can fix the problem by changing the input
    #[must_use]
    pub const fn is_user_error(self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::InvalidFormat
                | Self::ValueOutOfRange
                | Self::ImageDecode
                | Self::InvalidImage
                | Self::NotFood
                | Self::UnsupportedFormat
                | Self::ResourceNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Scan ID for log correlation
    pub scan_id: Option<String>,
    /// File or entry the error refers to
    pub resource: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            scan_id: None,
            resource: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a scan ID to the error context
    #[must_use]
    pub fn with_scan_id(mut self, scan_id: impl Into<String>) -> Self {
        self.context.scan_id = Some(scan_id.into());
        self
    }

    /// Add a resource (file path, label) to the error context
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.context.resource = Some(resource.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Message suitable for showing to the person who submitted the photo
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.code {
            ErrorCode::NotFood => {
                "This doesn't appear to be a food image. Please upload a photo of actual food."
                    .into()
            }
            ErrorCode::ImageDecode | ErrorCode::UnsupportedFormat => {
                "Could not read the image. Please upload a valid JPG or PNG file.".into()
            }
            ErrorCode::InvalidImage => {
                "The image could not be analyzed. Please try a different photo.".into()
            }
            ErrorCode::InvalidInput | ErrorCode::ValueOutOfRange | ErrorCode::InvalidFormat => {
                self.message.clone()
            }
            _ => "Something went wrong while analyzing the image. Please try again.".into(),
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Numeric value outside its accepted range
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::new(ErrorCode::ResourceNotFound, format!("{resource} not found"))
            .with_resource(resource)
    }

    /// Image bytes could not be decoded
    #[must_use]
    pub fn image_decode(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ImageDecode, message)
    }

    /// Decoded image cannot be analyzed
    #[must_use]
    pub fn invalid_image(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidImage, message)
    }

    /// Unsupported image format
    #[must_use]
    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnsupportedFormat, message)
    }

    /// The validator rejected the image as non-food
    #[must_use]
    pub fn not_food(confidence: f64, reason: &str) -> Self {
        Self::new(
            ErrorCode::NotFood,
            format!("image rejected by food validator ({reason})"),
        )
        .with_details(serde_json::json!({
            "confidence": confidence,
            "reason": reason,
        }))
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Filesystem failure
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}
