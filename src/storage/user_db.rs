// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Embedded user and wallet database backed by redb (pure Rust, ACID).
//!
//! ## Table Layout
//!
//! - `users`: phone number → serialized UserRecord
//! - `wallets`: user_id → serialized WalletRecord
//!
//! A user and their wallet are written in one write transaction. redb runs
//! write transactions one at a time, so the existence check and the insert
//! cannot interleave with a concurrent registration for the same phone.

use std::path::Path;

use chrono::{DateTime, Utc};
use redb::{backends::InMemoryBackend, Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};

use crate::models::WalletAddress;

// =============================================================================
// Table Definitions
// =============================================================================

/// phone number → serialized UserRecord (JSON bytes).
const USERS: TableDefinition<&str, &[u8]> = TableDefinition::new("users");

/// user_id → serialized WalletRecord (JSON bytes).
const WALLETS: TableDefinition<&str, &[u8]> = TableDefinition::new("wallets");

// =============================================================================
// Error Type
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("redb error: {0}")]
    Redb(#[from] redb::Error),

    #[error("redb database error: {0}")]
    RedbDatabase(#[from] redb::DatabaseError),

    #[error("redb transaction error: {0}")]
    RedbTransaction(#[from] redb::TransactionError),

    #[error("redb table error: {0}")]
    RedbTable(#[from] redb::TableError),

    #[error("redb storage error: {0}")]
    RedbStorage(#[from] redb::StorageError),

    #[error("redb commit error: {0}")]
    RedbCommit(#[from] redb::CommitError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("already exists: {0}")]
    AlreadyExists(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Records
// =============================================================================

/// A registered subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: String,
    pub phone_number: String,
    /// PHC-style PIN hash; never the plaintext.
    pub pin_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The custodial wallet opened alongside a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletRecord {
    pub wallet_id: String,
    pub user_id: String,
    pub address: WalletAddress,
    pub created_at: DateTime<Utc>,
}

/// Everything needed to open an account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub phone_number: String,
    pub pin_hash: String,
    pub wallet_address: WalletAddress,
}

// =============================================================================
// UserDirectory
// =============================================================================

/// Lookup and creation of subscribers by phone number.
pub trait UserDirectory: Send + Sync {
    fn find_by_phone(&self, phone: &str) -> StorageResult<Option<UserRecord>>;

    /// Create the user and their wallet.
    ///
    /// Returns `StorageError::AlreadyExists` when the phone number is already
    /// registered, including when a concurrent request registered it first.
    fn create_user(&self, new_user: NewUser) -> StorageResult<UserRecord>;

    fn wallet_for_user(&self, user_id: &str) -> StorageResult<Option<WalletRecord>>;
}

// =============================================================================
// UserDatabase
// =============================================================================

pub struct UserDatabase {
    db: Database,
}

impl UserDatabase {
    /// Open (or create) the database at the given path.
    pub fn open(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Self::init(Database::create(path)?)
    }

    /// Non-persistent database for tests and throwaway runs.
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::init(Database::builder().create_with_backend(InMemoryBackend::new())?)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Pre-create all tables so later read transactions don't fail
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(USERS)?;
            let _ = write_txn.open_table(WALLETS)?;
        }
        write_txn.commit()?;
        Ok(Self { db })
    }

    /// Verify the database answers a read transaction.
    pub fn health_check(&self) -> StorageResult<()> {
        let read_txn = self.db.begin_read()?;
        let _ = read_txn.open_table(USERS)?;
        Ok(())
    }

    pub fn user_count(&self) -> StorageResult<usize> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(USERS)?;
        Ok(table.iter()?.count())
    }
}

impl UserDirectory for UserDatabase {
    fn find_by_phone(&self, phone: &str) -> StorageResult<Option<UserRecord>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(USERS)?;
        match table.get(phone)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    fn create_user(&self, new_user: NewUser) -> StorageResult<UserRecord> {
        let now = Utc::now();
        let user = UserRecord {
            user_id: uuid::Uuid::new_v4().to_string(),
            phone_number: new_user.phone_number,
            pin_hash: new_user.pin_hash,
            created_at: now,
        };
        let wallet = WalletRecord {
            wallet_id: uuid::Uuid::new_v4().to_string(),
            user_id: user.user_id.clone(),
            address: new_user.wallet_address,
            created_at: now,
        };
        let user_json = serde_json::to_vec(&user)?;
        let wallet_json = serde_json::to_vec(&wallet)?;

        let write_txn = self.db.begin_write()?;
        let duplicate = {
            let mut users = write_txn.open_table(USERS)?;
            if users.get(user.phone_number.as_str())?.is_some() {
                true
            } else {
                users.insert(user.phone_number.as_str(), user_json.as_slice())?;
                let mut wallets = write_txn.open_table(WALLETS)?;
                wallets.insert(user.user_id.as_str(), wallet_json.as_slice())?;
                false
            }
        };

        if duplicate {
            write_txn.abort()?;
            return Err(StorageError::AlreadyExists(format!(
                "User {}",
                user.phone_number
            )));
        }

        write_txn.commit()?;
        Ok(user)
    }

    fn wallet_for_user(&self, user_id: &str) -> StorageResult<Option<WalletRecord>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(WALLETS)?;
        match table.get(user_id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn new_user(phone: &str) -> NewUser {
        NewUser {
            phone_number: phone.to_string(),
            pin_hash: "pbkdf2-sha256$1000$c2FsdA==$aGFzaA==".to_string(),
            wallet_address: WalletAddress::from_bytes(&[0x11; 20]),
        }
    }

    #[test]
    fn create_and_find_user() {
        let db = UserDatabase::open_in_memory().unwrap();
        assert!(db.find_by_phone("+2348031234567").unwrap().is_none());

        let created = db.create_user(new_user("+2348031234567")).unwrap();
        let found = db.find_by_phone("+2348031234567").unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(db.user_count().unwrap(), 1);
    }

    #[test]
    fn wallet_is_created_with_user() {
        let db = UserDatabase::open_in_memory().unwrap();
        let user = db.create_user(new_user("08031234567")).unwrap();

        let wallet = db.wallet_for_user(&user.user_id).unwrap().unwrap();
        assert_eq!(wallet.user_id, user.user_id);
        assert_eq!(wallet.address, WalletAddress::from_bytes(&[0x11; 20]));
    }

    #[test]
    fn duplicate_phone_is_rejected_without_side_effects() {
        let db = UserDatabase::open_in_memory().unwrap();
        let first = db.create_user(new_user("08031234567")).unwrap();

        let second = db.create_user(new_user("08031234567"));
        assert!(matches!(second, Err(StorageError::AlreadyExists(_))));

        assert_eq!(db.user_count().unwrap(), 1);
        assert_eq!(db.find_by_phone("08031234567").unwrap().unwrap(), first);
    }

    #[test]
    fn concurrent_registrations_have_one_winner() {
        let db = Arc::new(UserDatabase::open_in_memory().unwrap());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let db = Arc::clone(&db);
                std::thread::spawn(move || db.create_user(new_user("08031234567")))
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter(|r| r.is_err())
            .all(|r| matches!(r, Err(StorageError::AlreadyExists(_)))));
        assert_eq!(db.user_count().unwrap(), 1);
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("users.redb");

        {
            let db = UserDatabase::open(&path).unwrap();
            db.create_user(new_user("08031234567")).unwrap();
        }

        let db = UserDatabase::open(&path).unwrap();
        assert!(db.find_by_phone("08031234567").unwrap().is_some());
        db.health_check().unwrap();
    }
}
