use crate::errors::Result;
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::points::points_model::PointBalance;
use crate::rewards::rewards_traits::RewardRepositoryTrait;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for point balance operations
#[async_trait]
pub trait PointsServiceTrait: Send + Sync {
    async fn compute_balance(&self, owner_id: &str) -> Result<PointBalance>;
}

/// Aggregates the owner's completed-goal points and redeemed-reward points
/// into one balance. Every caller that needs a balance goes through here.
pub struct PointsService<G: GoalRepositoryTrait, R: RewardRepositoryTrait> {
    goal_repo: Arc<G>,
    reward_repo: Arc<R>,
}

impl<G: GoalRepositoryTrait, R: RewardRepositoryTrait> PointsService<G, R> {
    pub fn new(goal_repo: Arc<G>, reward_repo: Arc<R>) -> Self {
        PointsService {
            goal_repo,
            reward_repo,
        }
    }

    pub fn balance_for(&self, owner_id: &str) -> Result<PointBalance> {
        let earned = self.goal_repo.sum_completed_points(owner_id)?;
        let used = self.reward_repo.sum_redeemed_points(owner_id)?;
        Ok(PointBalance::new(earned, used))
    }
}

#[async_trait]
impl<G: GoalRepositoryTrait, R: RewardRepositoryTrait> PointsServiceTrait
    for PointsService<G, R>
{
    async fn compute_balance(&self, owner_id: &str) -> Result<PointBalance> {
        self.balance_for(owner_id)
    }
}
