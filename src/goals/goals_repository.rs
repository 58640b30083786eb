use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::goals::goals_model::{Goal, GoalStatus, NewGoal};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::schema::goals;

use chrono::NaiveDateTime;
use diesel::dsl::sum;
use diesel::prelude::*;

use std::sync::Arc;
use uuid::Uuid;

pub struct GoalRepository {
    pool: Arc<DbPool>,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        GoalRepository { pool }
    }
}

impl GoalRepositoryTrait for GoalRepository {
    fn insert_new_goal(&self, mut new_goal: NewGoal) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;

        new_goal.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(goals::table)
            .values(&new_goal)
            .returning(goals::all_columns)
            .get_result(&mut conn)?)
    }

    fn load_goals(&self, owner_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(goals::table
            .filter(goals::owner_id.eq(owner_id))
            .order(goals::created_at.desc())
            .load::<Goal>(&mut conn)?)
    }

    fn load_goals_created_between(
        &self,
        owner_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(goals::table
            .filter(goals::owner_id.eq(owner_id))
            .filter(goals::created_at.between(start, end))
            .order(goals::created_at.desc())
            .load::<Goal>(&mut conn)?)
    }

    fn find_goal_by_id(&self, goal_id: &str) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(goals::table
            .find(goal_id)
            .first::<Goal>(&mut conn)
            .optional()?)
    }

    // Read-modify-write inside one transaction so concurrent toggles of the
    // same goal serialize at the store instead of clobbering each other.
    fn toggle_goal_status(&self, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;

        conn.transaction::<Goal, Error, _>(|conn| {
            let goal = goals::table
                .find(goal_id)
                .first::<Goal>(conn)
                .optional()?
                .ok_or_else(|| Error::NotFound {
                    entity: "Goal",
                    id: goal_id.to_string(),
                })?;

            let next_status = if goal.is_complete() {
                GoalStatus::Incomplete
            } else {
                GoalStatus::Complete
            };

            diesel::update(goals::table.find(goal_id))
                .set(goals::status.eq(next_status.as_str()))
                .execute(conn)?;

            goals::table
                .find(goal_id)
                .first::<Goal>(conn)
                .map_err(Error::from)
        })
    }

    fn sum_completed_points(&self, owner_id: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let total: Option<i64> = goals::table
            .filter(goals::owner_id.eq(owner_id))
            .filter(goals::status.eq(GoalStatus::Complete.as_str()))
            .select(sum(goals::assigned_points))
            .first(&mut conn)?;
        Ok(total.unwrap_or(0))
    }
}
