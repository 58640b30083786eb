use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_traits::GoalRepositoryTrait;
use crate::points::points_service::PointsService;
use crate::rewards::rewards_model::{NewReward, Reward, RewardFilter};
use crate::rewards::rewards_traits::{RewardRepositoryTrait, RewardServiceTrait};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

pub struct RewardService<R: RewardRepositoryTrait, G: GoalRepositoryTrait> {
    reward_repo: Arc<R>,
    points_service: PointsService<G, R>,
}

impl<R: RewardRepositoryTrait, G: GoalRepositoryTrait> RewardService<R, G> {
    pub fn new(reward_repo: Arc<R>, goal_repo: Arc<G>) -> Self {
        let points_service = PointsService::new(goal_repo, reward_repo.clone());
        RewardService {
            reward_repo,
            points_service,
        }
    }
}

fn validate_reward_name(reward_name: &str) -> Result<String> {
    let trimmed = reward_name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("rewardName".to_string()).into());
    }
    Ok(trimmed.to_string())
}

fn validate_reward_cost(assigned_points: i32) -> Result<()> {
    if assigned_points < 1 {
        return Err(ValidationError::InvalidInput(format!(
            "reward cost must be a positive integer, got {}",
            assigned_points
        ))
        .into());
    }
    Ok(())
}

#[async_trait]
impl<R: RewardRepositoryTrait, G: GoalRepositoryTrait> RewardServiceTrait
    for RewardService<R, G>
{
    async fn create_reward(
        &self,
        owner_id: &str,
        reward_name: &str,
        assigned_points: i32,
    ) -> Result<Reward> {
        // Fail fast, before any store call
        let reward_name = validate_reward_name(reward_name)?;
        validate_reward_cost(assigned_points)?;

        let new_reward = NewReward {
            id: None,
            owner_id: owner_id.to_string(),
            reward_name,
            assigned_points,
            redeemed: false,
            created_at: Utc::now().naive_utc(),
        };

        self.reward_repo.insert_new_reward(new_reward)
    }

    async fn get_rewards(&self, owner_id: &str, filter: RewardFilter) -> Result<Vec<Reward>> {
        self.reward_repo.load_rewards(owner_id, filter)
    }

    async fn redeem_reward(&self, reward_id: &str) -> Result<Reward> {
        let reward = self
            .reward_repo
            .find_reward_by_id(reward_id)?
            .ok_or_else(|| Error::NotFound {
                entity: "Reward",
                id: reward_id.to_string(),
            })?;

        if reward.redeemed {
            return Err(Error::AlreadyRedeemed(reward.id));
        }

        // Redemption blocks when the owner cannot cover the cost. The flag
        // flip itself re-checks the redeemed state inside a transaction.
        let balance = self.points_service.balance_for(&reward.owner_id)?;
        let cost = i64::from(reward.assigned_points);
        if balance.available < cost {
            return Err(Error::InsufficientPoints {
                available: balance.available,
                cost,
            });
        }

        self.reward_repo.mark_redeemed(reward_id)
    }
}
