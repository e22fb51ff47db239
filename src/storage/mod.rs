// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Storage Module
//!
//! Durable user and wallet records. Everything else in a USSD conversation is
//! rebuilt from the request; these records are the only state that outlives
//! one.
//!
//! ## Storage Layout
//!
//! ```text
//! $DATA_DIR/
//!   users.redb    # users (by phone) and wallets (by user id)
//! ```

pub mod paths;
pub mod user_db;

pub use paths::StoragePaths;
pub use user_db::{
    NewUser, StorageError, StorageResult, UserDatabase, UserDirectory, UserRecord, WalletRecord,
};
