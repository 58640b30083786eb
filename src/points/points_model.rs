use serde::{Deserialize, Serialize};

/// Derived point balance for one owner. Never stored; always recomputed
/// from the goal and reward collections, so it cannot drift from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointBalance {
    pub earned: i64,
    pub used: i64,
    pub available: i64,
}

impl PointBalance {
    /// The one place the available-points formula lives.
    pub fn new(earned: i64, used: i64) -> Self {
        PointBalance {
            earned,
            used,
            available: earned - used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_is_earned_minus_used() {
        let balance = PointBalance::new(3, 2);
        assert_eq!(balance.earned, 3);
        assert_eq!(balance.used, 2);
        assert_eq!(balance.available, 1);
    }

    #[test]
    fn zero_balance() {
        assert_eq!(PointBalance::new(0, 0).available, 0);
    }
}
