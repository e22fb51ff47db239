// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! PIN hashing and wallet address entropy, both backed by `ring`.

pub mod pin_hash;
pub mod wallet_address;

pub use pin_hash::{HashError, Pbkdf2PinHasher, PinHasher, DEFAULT_ITERATIONS};
pub use wallet_address::generate_wallet_address;
