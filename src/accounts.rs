// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account opening shared by the USSD menu and web registration.
//!
//! Opening an account hashes the PIN, generates a custodial wallet address and
//! stores the user together with the wallet.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{
    security::{generate_wallet_address, HashError, PinHasher},
    storage::{NewUser, StorageError, UserDirectory, UserRecord},
    ussd::pin::{self, PinRejection},
};

/// Nigerian mobile numbers: `0XXXXXXXXXX` or `+234XXXXXXXXXX`.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+234[0-9]{10}|0[0-9]{10})$").expect("phone pattern is valid")
});

/// Whether a phone number is in a format accepted for web registration.
/// Surrounding whitespace is ignored.
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone.trim())
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("phone number is already registered")]
    AlreadyRegistered,
    #[error("weak PIN: {0}")]
    WeakPin(#[from] PinRejection),
    #[error("PIN hashing failed: {0}")]
    Hashing(#[from] HashError),
    #[error("wallet address generation failed: system randomness unavailable")]
    AddressGeneration,
    #[error("storage failure: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for AccountError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::AlreadyExists(_) => AccountError::AlreadyRegistered,
            other => AccountError::Storage(other),
        }
    }
}

/// Register `phone` with `pin` and open its wallet.
pub fn open_account(
    directory: &dyn UserDirectory,
    hasher: &dyn PinHasher,
    phone: &str,
    pin: &str,
) -> Result<UserRecord, AccountError> {
    pin::validate(pin)?;

    if directory.find_by_phone(phone)?.is_some() {
        return Err(AccountError::AlreadyRegistered);
    }

    let pin_hash = hasher.hash(pin)?;
    let wallet_address =
        generate_wallet_address().map_err(|_| AccountError::AddressGeneration)?;

    let user = directory.create_user(NewUser {
        phone_number: phone.to_string(),
        pin_hash,
        wallet_address: wallet_address.clone(),
    })?;

    tracing::info!(
        user_id = %user.user_id,
        wallet_address = %wallet_address,
        "Account opened"
    );

    Ok(user)
}
