use crate::errors::{Result, ValidationError};
use crate::goals::goals_model::{week_bounds, Goal, GoalScope, GoalStatus, NewGoal, WeekStart};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Highest point value a goal may carry.
pub const MAX_GOAL_POINTS: i32 = 5;

pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
    week_start: WeekStart,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>, week_start: WeekStart) -> Self {
        GoalService {
            goal_repo,
            week_start,
        }
    }
}

fn validate_goal_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("text".to_string()).into());
    }
    Ok(trimmed.to_string())
}

fn validate_goal_points(assigned_points: i32) -> Result<()> {
    if !(0..=MAX_GOAL_POINTS).contains(&assigned_points) {
        return Err(ValidationError::InvalidInput(format!(
            "assigned points must be between 0 and {}, got {}",
            MAX_GOAL_POINTS, assigned_points
        ))
        .into());
    }
    Ok(())
}

#[async_trait]
impl<T: GoalRepositoryTrait> GoalServiceTrait for GoalService<T> {
    async fn create_goal(
        &self,
        owner_id: &str,
        text: &str,
        assigned_points: i32,
    ) -> Result<Goal> {
        // Fail fast, before any store call
        let text = validate_goal_text(text)?;
        validate_goal_points(assigned_points)?;

        let new_goal = NewGoal {
            id: None,
            owner_id: owner_id.to_string(),
            text,
            status: GoalStatus::Incomplete.as_str().to_string(),
            assigned_points,
            created_at: Utc::now().naive_utc(),
        };

        self.goal_repo.insert_new_goal(new_goal)
    }

    async fn get_goals(&self, owner_id: &str, scope: GoalScope) -> Result<Vec<Goal>> {
        match scope {
            GoalScope::All => self.goal_repo.load_goals(owner_id),
            GoalScope::ThisWeek => {
                let (start, end) = week_bounds(self.week_start, Utc::now().naive_utc());
                self.goal_repo
                    .load_goals_created_between(owner_id, start, end)
            }
        }
    }

    async fn toggle_goal_status(&self, goal_id: &str) -> Result<Goal> {
        // The point balance is derived from goal status at read time, so the
        // status flip is the only write and the balance cannot drift from it.
        self.goal_repo.toggle_goal_status(goal_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn text_is_trimmed() {
        assert_eq!(validate_goal_text("  Run 5k  ").unwrap(), "Run 5k");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(matches!(
            validate_goal_text("   "),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn points_range_is_enforced() {
        assert!(validate_goal_points(0).is_ok());
        assert!(validate_goal_points(MAX_GOAL_POINTS).is_ok());
        assert!(validate_goal_points(-1).is_err());
        assert!(validate_goal_points(MAX_GOAL_POINTS + 1).is_err());
    }
}
