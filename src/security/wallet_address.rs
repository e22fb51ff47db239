// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Custodial wallet address generation.

use ring::{
    error::Unspecified,
    rand::{SecureRandom, SystemRandom},
};

use crate::models::WalletAddress;

/// Address length in bytes (40 hex characters).
pub const ADDRESS_BYTES: usize = 20;

/// Generate a fresh `0x`-prefixed, lowercase hex wallet address.
/// Fails only if the system randomness source is unavailable.
pub fn generate_wallet_address() -> Result<WalletAddress, Unspecified> {
    let mut bytes = [0u8; ADDRESS_BYTES];
    SystemRandom::new().fill(&mut bytes)?;
    Ok(WalletAddress::from_bytes(&bytes))
}
