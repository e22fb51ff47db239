// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Stateless resolution of one USSD request into one carrier reply.
//!
//! Nothing is remembered between requests: the dial string is tokenized,
//! classified into a [`ConversationNode`] and answered. Only the session
//! start, which picks the menu by registration status, and the PIN
//! confirmation, which opens the account, touch the user directory.

use std::sync::Arc;

use thiserror::Error;

use super::{
    amount::AmountParser,
    menu,
    node::ConversationNode,
    pin,
    response::ProtocolResponse,
    tokens::StepTokens,
};
use crate::{
    accounts::{self, AccountError},
    security::{HashError, PinHasher},
    storage::{StorageError, UserDirectory},
};

/// Collaborator failures. Input problems are never errors; they become
/// `END` replies.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("user directory failure: {0}")]
    Storage(#[from] StorageError),
    #[error("PIN hashing failure: {0}")]
    Hashing(#[from] HashError),
    #[error("wallet address generation failed")]
    AddressGeneration,
}

pub struct StepResolver {
    directory: Arc<dyn UserDirectory>,
    hasher: Arc<dyn PinHasher>,
    amounts: AmountParser,
}

impl StepResolver {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        hasher: Arc<dyn PinHasher>,
        amounts: AmountParser,
    ) -> Self {
        Self {
            directory,
            hasher,
            amounts,
        }
    }

    /// Answer one request from `phone` carrying the accumulated `text`.
    ///
    /// Blocks on storage and PIN hashing; call from a blocking context.
    pub fn resolve(&self, phone: &str, text: &str) -> Result<ProtocolResponse, ResolveError> {
        let tokens = StepTokens::parse(text);
        let node = ConversationNode::classify(&tokens);

        tracing::debug!(
            step_count = tokens.step_count(),
            node = node.label(),
            "Resolved USSD step"
        );

        let response = match node {
            ConversationNode::Root => self.session_start(phone)?,
            ConversationNode::SendTokenSelect => ProtocolResponse::proceed(menu::SEND_TOKEN_MENU),
            ConversationNode::SendRecipientPrompt => {
                ProtocolResponse::proceed(menu::ENTER_RECIPIENT)
            }
            ConversationNode::SendAmountPrompt { .. } => {
                ProtocolResponse::proceed(menu::ENTER_STRK_AMOUNT)
            }
            ConversationNode::SendConfirmPrompt { recipient, amount } => {
                match self.amounts.parse(amount) {
                    Ok(quote) => {
                        ProtocolResponse::proceed(menu::send_confirmation(recipient, &quote))
                    }
                    Err(_) => ProtocolResponse::end(menu::INVALID_AMOUNT),
                }
            }
            ConversationNode::NewUserPinPrompt { pin } => {
                if pin::is_strong(pin) {
                    ProtocolResponse::proceed(menu::REPEAT_PIN)
                } else {
                    ProtocolResponse::end(menu::WEAK_PIN)
                }
            }
            ConversationNode::NewUserPinConfirm { pin, confirmation } => {
                self.confirm_registration(phone, pin, confirmation)?
            }
            ConversationNode::Unrecognized => ProtocolResponse::end(menu::INVALID_OPTION),
        };

        Ok(response)
    }

    fn session_start(&self, phone: &str) -> Result<ProtocolResponse, ResolveError> {
        if self.directory.find_by_phone(phone)?.is_some() {
            Ok(ProtocolResponse::proceed(menu::MAIN_MENU))
        } else {
            Ok(ProtocolResponse::proceed(menu::CREATE_PIN))
        }
    }

    fn confirm_registration(
        &self,
        phone: &str,
        pin: &str,
        confirmation: &str,
    ) -> Result<ProtocolResponse, ResolveError> {
        if pin != confirmation {
            return Ok(ProtocolResponse::end(menu::PIN_MISMATCH));
        }

        // A crafted request can skip the step that checked the first entry.
        let opened =
            accounts::open_account(self.directory.as_ref(), self.hasher.as_ref(), phone, pin);
        match opened {
            Ok(_) => Ok(ProtocolResponse::end(menu::REGISTERED)),
            Err(AccountError::AlreadyRegistered) => {
                Ok(ProtocolResponse::end(menu::ALREADY_REGISTERED))
            }
            Err(AccountError::WeakPin(_)) => Ok(ProtocolResponse::end(menu::WEAK_PIN)),
            Err(AccountError::Hashing(e)) => Err(e.into()),
            Err(AccountError::AddressGeneration) => Err(ResolveError::AddressGeneration),
            Err(AccountError::Storage(e)) => Err(e.into()),
        }
    }
}
