// # Routes Module
//
// - This module contains all HTTP route handlers for the auth service.
// - Routes are organized by functionality into separate submodules.

/// Authentication endpoint (preflight + authenticate)
pub mod auth;

/// Greeting / health-check fallback endpoint
pub mod greeting;
