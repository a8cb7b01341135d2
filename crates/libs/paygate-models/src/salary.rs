//! Salary model. One row per user, written at registration.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::db::connection::DbConnection;
use crate::prelude::*;
use crate::schema::salary::dsl::*;

/// A salary record for a user.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::salary)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Salary {
    /// Row ID.
    pub id: i32,
    /// Salary amount.
    pub value: i32,
    /// Date the amount applies to.
    pub target_date: NaiveDate,
    /// Owning user.
    pub user_id: i32,
}

/// Data for writing a user's salary record.
#[derive(Insertable, PartialEq, Debug, Clone, Deserialize)]
#[diesel(table_name = crate::schema::salary)]
pub struct SalaryCreate {
    /// Salary amount.
    pub value: i32,
    /// Date the amount applies to.
    pub target_date: NaiveDate,
    /// Owning user.
    pub user_id: i32,
}

impl SalaryCreate {
    /// Inserts the salary row for the user, or updates it when one
    /// already exists.
    pub fn upsert(self, connection: &DbConnection) -> Result<Salary> {
        let conn = &mut connection.pool.get()?;

        let existing: Option<Salary> = salary
            .filter(user_id.eq(self.user_id))
            .select(Salary::as_select())
            .first(conn)
            .optional()?;

        match existing {
            Some(row) => Ok(diesel::update(salary.filter(id.eq(row.id)))
                .set((value.eq(self.value), target_date.eq(self.target_date)))
                .returning(Salary::as_returning())
                .get_result(conn)?),
            None => Ok(diesel::insert_into(salary)
                .values(&self)
                .returning(Salary::as_returning())
                .get_result(conn)?),
        }
    }
}

impl Salary {
    /// Fetches the salary row for a user, if present.
    pub fn fetch_by_user(target: i32, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(salary
            .filter(user_id.eq(target))
            .select(Salary::as_select())
            .first(conn)
            .optional()?)
    }
}
