pub mod points_model;
pub mod points_service;

pub use points_model::PointBalance;
pub use points_service::{PointsService, PointsServiceTrait};
