// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Carrier reply framing.
//!
//! The carrier reads the first word of the body: `CON` keeps the session open
//! and shows the prompt, `END` shows the message and hangs up.

use axum::{
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

const CONTINUE_PREFIX: &str = "CON ";
const TERMINATE_PREFIX: &str = "END ";

/// Whether the carrier should keep the session open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Continue,
    Terminate,
}

impl ResponseKind {
    fn prefix(self) -> &'static str {
        match self {
            ResponseKind::Continue => CONTINUE_PREFIX,
            ResponseKind::Terminate => TERMINATE_PREFIX,
        }
    }
}

/// One reply to the carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolResponse {
    pub kind: ResponseKind,
    pub body: String,
}

impl ProtocolResponse {
    /// Prompt for another entry.
    pub fn proceed(body: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Continue,
            body: body.into(),
        }
    }

    /// Final message; the carrier closes the session.
    pub fn end(body: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Terminate,
            body: body.into(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind == ResponseKind::Terminate
    }

    /// Wire form of the reply. The body is passed through untouched.
    pub fn render(&self) -> String {
        let prefix = self.kind.prefix();
        let mut out = String::with_capacity(prefix.len() + self.body.len());
        out.push_str(prefix);
        out.push_str(&self.body);
        out
    }
}

impl IntoResponse for ProtocolResponse {
    fn into_response(self) -> Response {
        (
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.render(),
        )
            .into_response()
    }
}
