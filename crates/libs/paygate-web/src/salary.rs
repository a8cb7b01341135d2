//! Salary projection for the authenticated user.

use chrono::NaiveDate;
use paygate_models::db::connection::DbConnection;
use paygate_models::salary::Salary;
use serde::{Deserialize, Serialize};

use crate::ctx::ActiveUser;
use crate::prelude::*;

/// Salary info returned by the gated salary route.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SalaryInfo {
    /// The user the record belongs to.
    pub user_id: i32,
    /// Display name of that user.
    pub name: String,
    /// Salary amount.
    pub value: i32,
    /// Date the amount applies to.
    pub target_date: NaiveDate,
}

/// Returns the salary projection for the acting user.
///
/// The display name comes from the already-resolved [`ActiveUser`]; only
/// the salary row itself can still be missing here.
pub fn get_salary(user: &ActiveUser, connection: &DbConnection) -> Result<SalaryInfo> {
    let record = Salary::fetch_by_user(user.id, connection)?.ok_or(Error::SalaryNotFound)?;

    Ok(SalaryInfo {
        user_id: user.id,
        name: user.name.clone(),
        value: record.value,
        target_date: record.target_date,
    })
}
