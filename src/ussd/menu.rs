// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Menu prompts and terminal messages shown on the handset.

use super::amount::Quote;

pub const MAIN_MENU: &str = "KudiSwap\n\
1. Send\n\
2. Check Balance\n\
3. Withdraw\n\
4. Swap\n\
5. Change Pin\n\
6. View Rates";

pub const CREATE_PIN: &str = "Welcome to Kudiswap!\nPlease create a 6-digit PIN";

pub const SEND_TOKEN_MENU: &str = "1. Send STRK\n2. Send USDT";

pub const ENTER_RECIPIENT: &str = "Enter Phone Number";

pub const ENTER_STRK_AMOUNT: &str = "Enter STRK Amount";

pub const INVALID_AMOUNT: &str = "Invalid amount. Please start over.";

pub const WEAK_PIN: &str = "Weak PIN!\n\
Avoid 1234, sequential or repeated digits.\n\
Try a stronger 6-digit PIN";

pub const REPEAT_PIN: &str = "Repeat pin";

pub const PIN_MISMATCH: &str = "PINs do not match.\nPlease start over.";

pub const REGISTERED: &str =
    "Success!\nYour Starknet Address has been created, you will get an SMS shortly";

pub const ALREADY_REGISTERED: &str = "You already have a wallet linked to this number.";

pub const INVALID_OPTION: &str = "Invalid option. Please try again.";

/// Transfer summary shown before the subscriber enters their PIN.
pub fn send_confirmation(recipient: &str, quote: &Quote) -> String {
    format!(
        "Send to {recipient}\n{amount} STRK ({converted} NGN)\n\nEnter pin to send",
        amount = quote.display_amount(),
        converted = quote.display_converted(),
    )
}
