// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! KudiSwap USSD Gateway - Custodial Wallet Menu Service
//!
//! This crate serves the carrier callback for the KudiSwap USSD short code.
//! Each request carries the whole dial string entered so far; the menu
//! position is reconstructed from it on every request.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `ussd` - Stateless menu engine
//! - `accounts` - Account opening shared by USSD and web registration
//! - `auth` - Phone-bound access tokens
//! - `security` - PIN hashing and wallet address generation
//! - `storage` - User and wallet database (redb)

pub mod accounts;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod security;
pub mod state;
pub mod storage;
pub mod ussd;
