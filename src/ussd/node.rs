// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Mapping of a token sequence onto the menu conversation.
//!
//! The carrier sends no session identifier, so the position in the menu is
//! read off the shape of the accumulated input. Every token sequence maps to
//! exactly one node:
//!
//! | Tokens | Node |
//! |---|---|
//! | *(none)* | `Root` |
//! | `1` | `SendTokenSelect` |
//! | `1 1` | `SendRecipientPrompt` |
//! | `1 1 r` | `SendAmountPrompt` |
//! | `1 1 r a` | `SendConfirmPrompt` |
//! | any other single token | `NewUserPinPrompt` |
//! | any other pair | `NewUserPinConfirm` |
//! | anything else | `Unrecognized` |

use super::tokens::StepTokens;

/// Menu position reconstructed from one dial string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationNode<'a> {
    /// Session just opened.
    Root,
    /// Picked "Send" from the main menu.
    SendTokenSelect,
    /// Picked STRK; next entry is the recipient.
    SendRecipientPrompt,
    /// Recipient entered; next entry is the amount.
    SendAmountPrompt { recipient: &'a str },
    /// Amount entered; summary and PIN prompt follow.
    SendConfirmPrompt { recipient: &'a str, amount: &'a str },
    /// Answer to "create a 6-digit PIN".
    NewUserPinPrompt { pin: &'a str },
    /// Answer to "Repeat pin".
    NewUserPinConfirm { pin: &'a str, confirmation: &'a str },
    Unrecognized,
}

impl<'a> ConversationNode<'a> {
    pub fn classify(tokens: &StepTokens<'a>) -> Self {
        match *tokens.as_slice() {
            [] => Self::Root,
            ["1"] => Self::SendTokenSelect,
            ["1", "1"] => Self::SendRecipientPrompt,
            ["1", "1", recipient] => Self::SendAmountPrompt { recipient },
            ["1", "1", recipient, amount] => Self::SendConfirmPrompt { recipient, amount },
            [pin] => Self::NewUserPinPrompt { pin },
            [pin, confirmation] => Self::NewUserPinConfirm { pin, confirmation },
            _ => Self::Unrecognized,
        }
    }

    /// Short name for logs. Carries no subscriber input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::SendTokenSelect => "send_token_select",
            Self::SendRecipientPrompt => "send_recipient_prompt",
            Self::SendAmountPrompt { .. } => "send_amount_prompt",
            Self::SendConfirmPrompt { .. } => "send_confirm_prompt",
            Self::NewUserPinPrompt { .. } => "new_user_pin_prompt",
            Self::NewUserPinConfirm { .. } => "new_user_pin_confirm",
            Self::Unrecognized => "unrecognized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> ConversationNode<'_> {
        ConversationNode::classify(&StepTokens::parse(text))
    }

    #[test]
    fn send_flow_nodes() {
        assert_eq!(classify(""), ConversationNode::Root);
        assert_eq!(classify("1"), ConversationNode::SendTokenSelect);
        assert_eq!(classify("1*1"), ConversationNode::SendRecipientPrompt);
        assert_eq!(
            classify("1*1*08031234567"),
            ConversationNode::SendAmountPrompt {
                recipient: "08031234567"
            }
        );
        assert_eq!(
            classify("1*1*08031234567*26.6"),
            ConversationNode::SendConfirmPrompt {
                recipient: "08031234567",
                amount: "26.6"
            }
        );
    }

    #[test]
    fn literal_one_wins_over_pin_entry() {
        assert_ne!(classify("1"), ConversationNode::NewUserPinPrompt { pin: "1" });
        assert_eq!(
            classify("482913"),
            ConversationNode::NewUserPinPrompt { pin: "482913" }
        );
    }

    #[test]
    fn send_path_wins_over_pin_confirmation() {
        assert_eq!(classify("1*1"), ConversationNode::SendRecipientPrompt);
        assert_eq!(
            classify("482913*482913"),
            ConversationNode::NewUserPinConfirm {
                pin: "482913",
                confirmation: "482913"
            }
        );
        assert_eq!(
            classify("1*2"),
            ConversationNode::NewUserPinConfirm {
                pin: "1",
                confirmation: "2"
            }
        );
    }

    #[test]
    fn empty_entries_are_still_tokens() {
        assert_eq!(classify("*"), ConversationNode::NewUserPinConfirm {
            pin: "",
            confirmation: ""
        });
        assert_eq!(
            classify("1*1*"),
            ConversationNode::SendAmountPrompt { recipient: "" }
        );
    }

    #[test]
    fn everything_else_is_unrecognized() {
        assert_eq!(classify("1*2*08031234567"), ConversationNode::Unrecognized);
        assert_eq!(classify("2*1*x"), ConversationNode::Unrecognized);
        assert_eq!(classify("1*1*08031234567*26.6*482913"), ConversationNode::Unrecognized);
    }
}
