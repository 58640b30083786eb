use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::rewards::rewards_model::{NewReward, Reward, RewardFilter};
use crate::rewards::rewards_traits::RewardRepositoryTrait;
use crate::schema::rewards;

use diesel::dsl::sum;
use diesel::prelude::*;

use std::sync::Arc;
use uuid::Uuid;

pub struct RewardRepository {
    pool: Arc<DbPool>,
}

impl RewardRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        RewardRepository { pool }
    }
}

impl RewardRepositoryTrait for RewardRepository {
    fn insert_new_reward(&self, mut new_reward: NewReward) -> Result<Reward> {
        let mut conn = get_connection(&self.pool)?;

        new_reward.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(rewards::table)
            .values(&new_reward)
            .returning(rewards::all_columns)
            .get_result(&mut conn)?)
    }

    fn load_rewards(&self, owner_id: &str, filter: RewardFilter) -> Result<Vec<Reward>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = rewards::table
            .filter(rewards::owner_id.eq(owner_id))
            .order(rewards::created_at.desc())
            .into_boxed();

        query = match filter {
            RewardFilter::All => query,
            RewardFilter::Redeemed => query.filter(rewards::redeemed.eq(true)),
            RewardFilter::Unredeemed => query.filter(rewards::redeemed.eq(false)),
        };

        Ok(query.load::<Reward>(&mut conn)?)
    }

    fn find_reward_by_id(&self, reward_id: &str) -> Result<Option<Reward>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(rewards::table
            .find(reward_id)
            .first::<Reward>(&mut conn)
            .optional()?)
    }

    // The redeemed flag is one-way. Checking and setting it inside one
    // transaction means a second redeem attempt always sees the flag and is
    // rejected instead of silently rewriting it.
    fn mark_redeemed(&self, reward_id: &str) -> Result<Reward> {
        let mut conn = get_connection(&self.pool)?;

        conn.transaction::<Reward, Error, _>(|conn| {
            let reward = rewards::table
                .find(reward_id)
                .first::<Reward>(conn)
                .optional()?
                .ok_or_else(|| Error::NotFound {
                    entity: "Reward",
                    id: reward_id.to_string(),
                })?;

            if reward.redeemed {
                return Err(Error::AlreadyRedeemed(reward.id));
            }

            diesel::update(rewards::table.find(reward_id))
                .set(rewards::redeemed.eq(true))
                .execute(conn)?;

            rewards::table
                .find(reward_id)
                .first::<Reward>(conn)
                .map_err(Error::from)
        })
    }

    fn sum_redeemed_points(&self, owner_id: &str) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let total: Option<i64> = rewards::table
            .filter(rewards::owner_id.eq(owner_id))
            .filter(rewards::redeemed.eq(true))
            .select(sum(rewards::assigned_points))
            .first(&mut conn)?;
        Ok(total.unwrap_or(0))
    }
}
