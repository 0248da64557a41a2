//! # Authentication Module
//!
//! Session token issuance for authenticated users. Tokens are self-contained
//! (signature + expiry); nothing is stored server-side and there is no
//! revocation path.

pub mod jwt;
pub mod models;
