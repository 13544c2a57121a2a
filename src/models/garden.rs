//! Garden shop models: catalog items, purchases, and the coin ledger.

use serde::{Deserialize, Serialize};


/// A decoration available in the garden shop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenItem {
    pub id: i64,
    pub name: String,
    pub cost: i64,
}


/// A purchased item, with the price captured at purchase time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    pub item_id: i64,
    pub item_name: String,
    pub cost_at_purchase: i64,
    pub purchased_at: String,
}


/// Coins earned from completions versus spent in the shop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoinLedger {
    pub earned: i64,
    pub spent: i64,
    pub balance: i64,
}


impl CoinLedger {
    /// The balance never goes negative, even if the ledger does.
    pub fn new(earned: i64, spent: i64) -> Self {
        Self {
            earned,
            spent,
            balance: (earned - spent).max(0),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance() {
        let ledger = CoinLedger::new(250, 100);
        assert_eq!(ledger.balance, 150);
    }

    #[test]
    fn test_balance_floors_at_zero() {
        let ledger = CoinLedger::new(50, 100);
        assert_eq!(ledger.balance, 0);
        assert_eq!(ledger.earned, 50);
        assert_eq!(ledger.spent, 100);
    }
}
