//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `Store` trait.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, Direction, IteratorMode,
    MultiThreaded, Options, WriteBatch,
};

use budget_buddy_core::{Expense, ExpenseId, Scope, Settings, UserId};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::{sort_newest_first, Store};

/// RocksDB-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
    /// Held across the read-check-delete sequence so each expense is
    /// reported deleted at most once.
    delete_lock: Mutex<()>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self {
            db: Arc::new(db),
            delete_lock: Mutex::new(()),
        })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Collect the expense IDs indexed under a user, oldest first.
    fn user_expense_ids(&self, user_id: &UserId) -> Result<Vec<ExpenseId>> {
        let cf_by_user = self.cf(cf::EXPENSES_BY_USER)?;
        let prefix = keys::user_expenses_prefix(user_id);

        let iter = self
            .db
            .iterator_cf(&cf_by_user, IteratorMode::From(&prefix, Direction::Forward));

        let mut ids = Vec::new();
        for item in iter {
            let (key, _) = item.map_err(|e| StoreError::Database(e.to_string()))?;

            if !key.starts_with(&prefix) {
                break;
            }

            ids.push(keys::expense_id_from_user_key(&key)?);
        }

        Ok(ids)
    }

    /// Read every expense in the database.
    fn all_expenses(&self) -> Result<Vec<Expense>> {
        let cf = self.cf(cf::EXPENSES)?;

        self.db
            .iterator_cf(&cf, IteratorMode::Start)
            .map(|item| {
                let (_, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;
                Self::deserialize(&value)
            })
            .collect()
    }
}

impl Store for RocksStore {
    // =========================================================================
    // Expense Operations
    // =========================================================================

    fn put_expense(&self, expense: &Expense) -> Result<()> {
        let cf_expenses = self.cf(cf::EXPENSES)?;
        let cf_by_user = self.cf(cf::EXPENSES_BY_USER)?;

        let key = keys::expense_key(&expense.id);
        let user_key = keys::user_expense_key(&expense.user_id, &expense.id);
        let value = Self::serialize(expense)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_expenses, &key, &value);
        batch.put_cf(&cf_by_user, &user_key, b""); // Index entry (empty value)

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn get_expense(&self, expense_id: &ExpenseId) -> Result<Option<Expense>> {
        let cf = self.cf(cf::EXPENSES)?;
        let key = keys::expense_key(expense_id);

        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    fn list_expenses(&self, scope: &Scope) -> Result<Vec<Expense>> {
        let mut expenses = match scope {
            Scope::User(user_id) => {
                let mut expenses = Vec::new();
                for expense_id in self.user_expense_ids(user_id)? {
                    if let Some(expense) = self.get_expense(&expense_id)? {
                        expenses.push(expense);
                    } else {
                        tracing::warn!(expense_id = %expense_id, "Dangling expense index entry");
                    }
                }
                expenses
            }
            Scope::Global => self.all_expenses()?,
        };

        sort_newest_first(&mut expenses);
        Ok(expenses)
    }

    fn delete_expense(&self, expense_id: &ExpenseId, scope: &Scope) -> Result<bool> {
        let _guard = self
            .delete_lock
            .lock()
            .map_err(|_| StoreError::Database("delete lock poisoned".into()))?;

        let Some(expense) = self.get_expense(expense_id)? else {
            return Ok(false);
        };

        if !scope.includes(&expense) {
            return Ok(false);
        }

        let cf_expenses = self.cf(cf::EXPENSES)?;
        let cf_by_user = self.cf(cf::EXPENSES_BY_USER)?;

        let mut batch = WriteBatch::default();
        batch.delete_cf(&cf_expenses, keys::expense_key(expense_id));
        batch.delete_cf(
            &cf_by_user,
            keys::user_expense_key(&expense.user_id, expense_id),
        );

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(true)
    }

    // =========================================================================
    // Settings Operations
    // =========================================================================

    fn put_settings(&self, settings: &Settings) -> Result<()> {
        let cf = self.cf(cf::SETTINGS)?;
        let key = keys::settings_key(&settings.user_id);
        let value = Self::serialize(settings)?;

        self.db
            .put_cf(&cf, key, value)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn get_settings(&self, user_id: &UserId) -> Result<Option<Settings>> {
        let cf = self.cf(cf::SETTINGS)?;
        let key = keys::settings_key(user_id);

        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }
}
