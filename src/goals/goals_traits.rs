use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalScope, NewGoal};

/// Trait for goal repository operations
pub trait GoalRepositoryTrait: Send + Sync {
    fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    fn load_goals(&self, owner_id: &str) -> Result<Vec<Goal>>;
    fn load_goals_created_between(
        &self,
        owner_id: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Goal>>;
    fn find_goal_by_id(&self, goal_id: &str) -> Result<Option<Goal>>;
    fn toggle_goal_status(&self, goal_id: &str) -> Result<Goal>;
    fn sum_completed_points(&self, owner_id: &str) -> Result<i64>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn create_goal(&self, owner_id: &str, text: &str, assigned_points: i32)
        -> Result<Goal>;
    async fn get_goals(&self, owner_id: &str, scope: GoalScope) -> Result<Vec<Goal>>;
    async fn toggle_goal_status(&self, goal_id: &str) -> Result<Goal>;
}
