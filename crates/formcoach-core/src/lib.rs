// ABOUTME: Core types and constants for the Formcoach tracking engine
// ABOUTME: Foundation crate with models, error types, geometry, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Formcoach Fitness

#![deny(unsafe_code)]

//! # Formcoach Core
//!
//! Foundation crate providing shared types and constants for the Formcoach
//! exercise tracking engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `CoachError` and `CoachResult`
//! - **constants**: Tracking thresholds, feedback strings, and record limits
//! - **geometry**: Joint-angle calculation over normalized image coordinates
//! - **models**: Core data models (`LandmarkFrame`, `ExerciseKind`, session types)

/// Unified error handling with `CoachError` and the `CoachResult` alias
pub mod errors;

/// Tracking thresholds, feedback strings, and record limits organized by domain
pub mod constants;

/// Joint-angle calculation over normalized image coordinates
pub mod geometry;

/// Core data models (landmarks, exercises, session state and records)
pub mod models;
