// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::{
    auth::TokenIssuer,
    config::AppConfig,
    security::{HashError, Pbkdf2PinHasher, PinHasher},
    storage::{UserDatabase, UserDirectory},
    ussd::{AmountParser, StepResolver},
};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<UserDatabase>,
    pub hasher: Arc<dyn PinHasher>,
    pub resolver: Arc<StepResolver>,
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(db: UserDatabase, config: &AppConfig) -> Result<Self, HashError> {
        let db = Arc::new(db);
        let hasher: Arc<dyn PinHasher> =
            Arc::new(Pbkdf2PinHasher::new(config.pin_hash_iterations)?);
        let directory: Arc<dyn UserDirectory> = db.clone();

        let resolver = StepResolver::new(
            directory,
            hasher.clone(),
            AmountParser::new(config.strk_ngn_rate),
        );

        Ok(Self {
            db,
            hasher,
            resolver: Arc::new(resolver),
            tokens: Arc::new(TokenIssuer::new(&config.jwt_secret, config.token_ttl_secs)),
        })
    }

    /// State over an in-memory database with a cheap hash work factor.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        let config = AppConfig {
            pin_hash_iterations: 1_000,
            ..AppConfig::default()
        };
        let db = UserDatabase::open_in_memory().expect("in-memory database");
        Self::new(db, &config).expect("test state")
    }
}
