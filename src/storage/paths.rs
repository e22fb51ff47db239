// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Path constants and utilities for the on-disk data layout.

use std::path::{Path, PathBuf};

/// Default data directory, relative to the working directory.
pub const DATA_ROOT: &str = "./data";

/// File name of the user/wallet database.
pub const USERS_DB_FILE: &str = "users.redb";

/// Storage path utilities.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self::new(DATA_ROOT)
    }
}

impl StoragePaths {
    /// Create a new StoragePaths with a custom root (useful for testing).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the redb file holding users and wallets.
    pub fn users_db(&self) -> PathBuf {
        self.root.join(USERS_DB_FILE)
    }
}
