use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::Queryable;
use diesel::Selectable;
use serde::{Deserialize, Serialize};

/// Which slice of an owner's rewards to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardFilter {
    All,
    Redeemed,
    Unredeemed,
}

#[derive(
    Queryable,
    Identifiable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::rewards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    pub owner_id: String,
    pub reward_name: String,
    pub assigned_points: i32,
    pub redeemed: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::rewards)]
#[serde(rename_all = "camelCase")]
pub struct NewReward {
    pub id: Option<String>,
    pub owner_id: String,
    pub reward_name: String,
    pub assigned_points: i32,
    pub redeemed: bool,
    pub created_at: NaiveDateTime,
}
