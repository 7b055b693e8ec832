// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8000` |
//! | `SIWE_DOMAIN` | Domain sign-in messages must name | `localhost:3000` |
//! | `SEED_ACCOUNT` | Seed profile as `address:username` | unset |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the expected sign-in domain.
///
/// Incoming messages naming any other domain are rejected, since the
/// signature binds the serving origin.
pub const SIWE_DOMAIN_ENV: &str = "SIWE_DOMAIN";

/// Environment variable name for seeding one account profile at startup,
/// formatted `address:username`.
pub const SEED_ACCOUNT_ENV: &str = "SEED_ACCOUNT";

/// Environment variable name for the logging format switch.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default serving domain for sign-in messages.
pub const DEFAULT_SIWE_DOMAIN: &str = "localhost:3000";

/// Default origin URI of the requesting application.
pub const DEFAULT_SIWE_URI: &str = "http://localhost:3000";

/// Default purpose line shown in the wallet prompt.
pub const DEFAULT_STATEMENT: &str = "Sign in to Digi-tionary";
