// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # USSD Menu Engine
//!
//! The carrier sends the whole accumulated dial string on every request and
//! no session identifier. This module turns `(phoneNumber, text)` into the
//! next `CON`/`END` reply without keeping any state of its own.
//!
//! ## Modules
//!
//! - `tokens` - splitting the dial string into step tokens
//! - `node` - classifying tokens into one menu position
//! - `pin` - PIN strength rules
//! - `amount` - amount parsing and NGN conversion
//! - `menu` - prompt and message texts
//! - `response` - `CON`/`END` framing
//! - `resolver` - the per-request state machine

pub mod amount;
pub mod menu;
pub mod node;
pub mod pin;
pub mod resolver;
pub mod response;
pub mod tokens;

pub use amount::{AmountError, AmountParser, Quote};
pub use node::ConversationNode;
pub use pin::PinRejection;
pub use resolver::{ResolveError, StepResolver};
pub use response::{ProtocolResponse, ResponseKind};
pub use tokens::StepTokens;
