// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Phone-bound access tokens for the protected USSD route.
//!
//! ## Token Flow
//!
//! 1. Client posts `{ "phone": ... }` to `/auth/token`
//! 2. Server returns an HS256 JWT with claims `phone`, `iat`, `exp`
//! 3. Client posts `{ "token": ... }` to `/ussd/protected`
//!
//! Tokens expire after `TOKEN_TTL_SECS` (5 minutes by default).

pub mod error;
pub mod token;

pub use error::AuthError;
pub use token::{TokenClaims, TokenIssuer};
