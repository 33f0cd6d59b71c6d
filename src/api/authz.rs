//! Ownership predicates
//!
//! Jobs belong to the user who posted them, applications to the user who
//! submitted them. Mutations check the acting principal against the row's
//! owner through one predicate instead of per-handler queries.

use crate::api::error::ApiError;
use crate::db::models::{ApplicationRef, JobRef};

/// Rows that belong to exactly one user
pub trait OwnedRow {
    fn owner_id(&self) -> i64;

    fn is_owned_by(&self, principal: i64) -> bool {
        self.owner_id() == principal
    }
}

impl OwnedRow for JobRef {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

impl OwnedRow for ApplicationRef {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

/// Reject with Forbidden unless the principal owns the row
pub fn ensure_owner<R: OwnedRow>(row: &R, principal: i64, message: &str) -> Result<(), ApiError> {
    if row.is_owned_by(principal) {
        Ok(())
    } else {
        Err(ApiError::Forbidden(message.to_string()))
    }
}
