//! Per-item turnover (buy) limit lookup

use std::collections::HashMap;

use anyhow::Context;
use tracing::info;

/// How many units of an item one trader can acquire per replenishment window.
///
/// Loaded once at startup and injected into the scorer; the table is never
/// mutated after construction. Unknown items report a limit of 0, which
/// disables the cycle-time economics for them without failing the score.
#[derive(Debug, Clone, Default)]
pub struct BuyLimits {
    limits: HashMap<u32, i64>,
}

impl BuyLimits {
    /// Builds the table from a JSON object of item id -> limit, the format
    /// of the externally maintained limits asset.
    pub fn from_json(body: &str) -> anyhow::Result<Self> {
        let limits: HashMap<u32, i64> =
            serde_json::from_str(body).context("malformed buy limits table")?;
        info!(items = limits.len(), "loaded buy limits table");
        Ok(Self { limits })
    }

    /// A built-in table of well-known limits for common flipping items,
    /// usable when no external asset is supplied.
    pub fn builtin() -> Self {
        let table: &[(u32, i64)] = &[
            // Bonds
            (13190, 5),
            // Runes
            (554, 25000),
            (555, 25000),
            (556, 25000),
            (557, 25000),
            (558, 25000),
            (560, 18000),
            (561, 18000),
            (562, 18000),
            (563, 18000),
            (564, 18000),
            (565, 11000),
            (566, 11000),
            (9075, 18000),
            (21880, 11000),
            // Herbs
            (199, 13000),
            (201, 13000),
            (203, 13000),
            (205, 13000),
            (207, 13000),
            (209, 13000),
            (211, 13000),
            (213, 13000),
            (215, 13000),
            (217, 13000),
            (219, 13000),
            (2485, 13000),
            // Potions
            (2434, 2000),
            (3024, 2000),
            (2444, 2000),
            (12695, 2000),
            (12625, 2000),
            // Food
            (385, 13000),
            (3144, 13000),
            (13441, 10000),
            (6685, 10000),
            (391, 13000),
            (7946, 13000),
            // Bones
            (536, 13000),
            (22124, 13000),
            // Ore and bars
            (440, 25000),
            (453, 25000),
            (444, 25000),
            (449, 18000),
            (451, 11000),
            (2351, 13000),
            (2361, 9000),
            (2363, 7000),
            // Logs
            (1515, 25000),
            (1513, 11000),
            // Seeds
            (5295, 200),
            (5304, 200),
            // High value equipment (shared 8-per-window limit)
            (4151, 8),
            (11802, 8),
            (11832, 8),
            (11834, 8),
            (13576, 8),
            (21006, 8),
            (12924, 8),
            (22322, 8),
        ];

        Self {
            limits: table.iter().copied().collect(),
        }
    }

    /// Returns the turnover limit for an item, 0 when unknown.
    pub fn get(&self, item_id: u32) -> i64 {
        self.limits.get(&item_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

impl FromIterator<(u32, i64)> for BuyLimits {
    fn from_iter<T: IntoIterator<Item = (u32, i64)>>(iter: T) -> Self {
        Self {
            limits: iter.into_iter().collect(),
        }
    }
}
