// ABOUTME: Configuration module for the Aminotrack server
// ABOUTME: Environment-driven server settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Environment-based server configuration
pub mod environment;
