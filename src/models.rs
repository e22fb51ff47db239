// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies for the HTTP surface. JSON fields use the
//! camelCase names the carrier gateway and the web client already send.
//!
//! ## Model Categories
//!
//! - **USSD**: the carrier callback payload
//! - **Registration**: web sign-up with phone number and PIN
//! - **Tokens**: short-lived phone-bound access tokens

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Wallet Address Type
// =============================================================================

/// Custodial wallet address: `0x` followed by 40 lowercase hex characters.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct WalletAddress(pub String);

impl WalletAddress {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut address = String::with_capacity(2 + bytes.len() * 2);
        address.push_str("0x");
        for byte in bytes {
            address.push_str(&format!("{byte:02x}"));
        }
        WalletAddress(address)
    }

    pub fn is_well_formed(&self) -> bool {
        self.0
            .strip_prefix("0x")
            .is_some_and(|hex| {
                hex.len() == 40 && hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
            })
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// USSD Models
// =============================================================================

/// Carrier callback for one USSD interaction.
///
/// Accepted as `application/x-www-form-urlencoded` (what gateways send) or
/// JSON.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DialInput {
    /// Subscriber MSISDN as reported by the carrier.
    pub phone_number: String,
    /// Everything entered since dialing the short code, `*`-separated.
    /// Empty on the first request of a session.
    #[serde(default)]
    pub text: String,
    /// Gateway session identifier. Logged only; menu state comes from `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Short code that was dialed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,
}

// =============================================================================
// Registration Models
// =============================================================================

/// Web registration request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// `0XXXXXXXXXX` or `+234XXXXXXXXXX`.
    #[serde(default)]
    pub phone_number: Option<String>,
    /// 6-digit transaction PIN.
    #[serde(default)]
    pub pin: String,
}

/// Outcome of a registration or access check.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// =============================================================================
// Token Models
// =============================================================================

/// Request for an access token bound to a phone number.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenRequest {
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub success: bool,
    pub token: String,
}

/// Body of a token-protected call; the token travels in the body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProtectedRequest {
    #[serde(default)]
    pub token: Option<String>,
}
