use async_trait::async_trait;

use crate::errors::Result;
use crate::rewards::rewards_model::{NewReward, Reward, RewardFilter};

/// Trait for reward repository operations
pub trait RewardRepositoryTrait: Send + Sync {
    fn insert_new_reward(&self, new_reward: NewReward) -> Result<Reward>;
    fn load_rewards(&self, owner_id: &str, filter: RewardFilter) -> Result<Vec<Reward>>;
    fn find_reward_by_id(&self, reward_id: &str) -> Result<Option<Reward>>;
    fn mark_redeemed(&self, reward_id: &str) -> Result<Reward>;
    fn sum_redeemed_points(&self, owner_id: &str) -> Result<i64>;
}

/// Trait for reward service operations
#[async_trait]
pub trait RewardServiceTrait: Send + Sync {
    async fn create_reward(
        &self,
        owner_id: &str,
        reward_name: &str,
        assigned_points: i32,
    ) -> Result<Reward>;
    async fn get_rewards(&self, owner_id: &str, filter: RewardFilter) -> Result<Vec<Reward>>;
    async fn redeem_reward(&self, reward_id: &str) -> Result<Reward>;
}
