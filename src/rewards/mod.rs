pub mod rewards_model;
pub mod rewards_repository;
pub mod rewards_service;
pub mod rewards_traits;

pub use rewards_model::{NewReward, Reward, RewardFilter};
pub use rewards_repository::RewardRepository;
pub use rewards_service::RewardService;
pub use rewards_traits::{RewardRepositoryTrait, RewardServiceTrait};
