//! Key encoding utilities for `RocksDB`.
//!
//! This module provides functions for encoding and decoding keys used in column families.

use budget_buddy_core::{ExpenseId, UserId};

use crate::error::{Result, StoreError};

/// Separates the user ID from the expense ID in index keys.
///
/// User IDs come from HTTP header values, which never contain NUL.
const SEPARATOR: u8 = 0x00;

/// Length of an encoded expense ID.
const EXPENSE_ID_LEN: usize = 16;

/// Create an expense key from an expense ID.
#[must_use]
pub fn expense_key(expense_id: &ExpenseId) -> Vec<u8> {
    expense_id.to_bytes().to_vec()
}

/// Create a user-expense index key.
///
/// Format: `user_id || 0x00 || expense_id (16 bytes)`
///
/// Since ULIDs are time-ordered, expenses for a user sort by creation time.
#[must_use]
pub fn user_expense_key(user_id: &UserId, expense_id: &ExpenseId) -> Vec<u8> {
    let mut key = user_expenses_prefix(user_id);
    key.extend_from_slice(&expense_id.to_bytes());
    key
}

/// Create a prefix for iterating all expenses for a user.
#[must_use]
pub fn user_expenses_prefix(user_id: &UserId) -> Vec<u8> {
    let mut prefix = Vec::with_capacity(user_id.as_bytes().len() + 1 + EXPENSE_ID_LEN);
    prefix.extend_from_slice(user_id.as_bytes());
    prefix.push(SEPARATOR);
    prefix
}

/// Extract the expense ID from a user-expense index key.
///
/// # Errors
///
/// Returns `StoreError::CorruptKey` if the key is too short to hold an ID.
pub fn expense_id_from_user_key(key: &[u8]) -> Result<ExpenseId> {
    let start = key
        .len()
        .checked_sub(EXPENSE_ID_LEN)
        .ok_or_else(|| StoreError::CorruptKey(format!("index key of {} bytes", key.len())))?;

    let mut bytes = [0u8; EXPENSE_ID_LEN];
    bytes.copy_from_slice(&key[start..]);
    Ok(ExpenseId::from_bytes(bytes))
}

/// Create a settings key from a user ID.
#[must_use]
pub fn settings_key(user_id: &UserId) -> Vec<u8> {
    user_id.as_bytes().to_vec()
}

/// Decode an expense ID stored as a primary key.
///
/// # Errors
///
/// Returns `StoreError::CorruptKey` if the key is not exactly 16 bytes.
pub fn expense_id_from_key(key: &[u8]) -> Result<ExpenseId> {
    let bytes: [u8; EXPENSE_ID_LEN] = key
        .try_into()
        .map_err(|_| StoreError::CorruptKey(format!("expense key of {} bytes", key.len())))?;
    Ok(ExpenseId::from_bytes(bytes))
}
