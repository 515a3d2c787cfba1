//! Static menu catalog and cook roster.
//!
//! Both are loaded once before intake begins and are read-only afterwards.
//! The JSON shapes match the kitchen's data files (`menu.json`, `cooks.json`).

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::KitchenError;
use crate::util::serde::{CookId, Equipment, FoodId};

/// Immutable description of one menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FoodSpec {
    /// Stable menu identifier.
    pub id: FoodId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Preparation duration in time units.
    #[serde(alias = "preparationTime")]
    pub preparation_time: u32,
    /// Complexity score.
    pub complexity: u32,
    /// Equipment the item occupies while cooking, if any.
    #[serde(default, alias = "cookingApparatus")]
    pub cooking_apparatus: Option<Equipment>,
}

/// Menu lookup by food id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    foods: Vec<FoodSpec>,
    by_id: HashMap<FoodId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate or zero identifiers.
    pub fn new(foods: Vec<FoodSpec>) -> Result<Self, KitchenError> {
        let mut by_id = HashMap::with_capacity(foods.len());
        for (idx, food) in foods.iter().enumerate() {
            if food.id == 0 {
                return Err(KitchenError::InvalidConfig(format!(
                    "food `{}` has id 0; ids must be positive",
                    food.name
                )));
            }
            if by_id.insert(food.id, idx).is_some() {
                return Err(KitchenError::InvalidConfig(format!(
                    "duplicate food id {}",
                    food.id
                )));
            }
        }
        Ok(Self { foods, by_id })
    }

    /// Parse a catalog from the menu JSON array.
    pub fn from_json_str(input: &str) -> Result<Self, KitchenError> {
        let foods: Vec<FoodSpec> = serde_json::from_str(input)
            .map_err(|e| KitchenError::InvalidConfig(format!("menu parse error: {e}")))?;
        Self::new(foods)
    }

    /// Look up a food by id.
    #[must_use]
    pub fn get(&self, id: FoodId) -> Option<&FoodSpec> {
        self.by_id.get(&id).map(|&idx| &self.foods[idx])
    }

    /// All foods in load order.
    #[must_use]
    pub fn foods(&self) -> &[FoodSpec] {
        &self.foods
    }

    /// Number of menu entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the menu is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// A cook from the static roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Cook {
    /// Roster identifier.
    pub id: CookId,
    /// Proficiency rating; feeds the estimator's throughput term.
    pub proficiency: u32,
    /// Seniority rank.
    #[serde(default)]
    pub rank: u32,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Catch phrase.
    #[serde(default, alias = "catchPhrase")]
    pub catch_phrase: String,
}

/// Read-only cook roster.
#[derive(Debug, Clone)]
pub struct Roster {
    cooks: Vec<Cook>,
    total_proficiency: u32,
}

impl Roster {
    /// Build a roster. It must be non-empty with positive proficiencies and
    /// unique ids, so the estimator's proficiency sum is never zero.
    pub fn new(cooks: Vec<Cook>) -> Result<Self, KitchenError> {
        if cooks.is_empty() {
            return Err(KitchenError::InvalidConfig("cook roster is empty".into()));
        }
        let mut seen = HashSet::with_capacity(cooks.len());
        let mut total_proficiency: u32 = 0;
        for cook in &cooks {
            if cook.proficiency == 0 {
                return Err(KitchenError::InvalidConfig(format!(
                    "cook {} has zero proficiency",
                    cook.id
                )));
            }
            if !seen.insert(cook.id) {
                return Err(KitchenError::InvalidConfig(format!(
                    "duplicate cook id {}",
                    cook.id
                )));
            }
            total_proficiency = total_proficiency.saturating_add(cook.proficiency);
        }
        Ok(Self {
            cooks,
            total_proficiency,
        })
    }

    /// Parse a roster from the cooks JSON array.
    pub fn from_json_str(input: &str) -> Result<Self, KitchenError> {
        let cooks: Vec<Cook> = serde_json::from_str(input)
            .map_err(|e| KitchenError::InvalidConfig(format!("roster parse error: {e}")))?;
        Self::new(cooks)
    }

    /// Cooks in roster order.
    #[must_use]
    pub fn cooks(&self) -> &[Cook] {
        &self.cooks
    }

    /// Sum of all proficiency ratings.
    #[must_use]
    pub const fn total_proficiency(&self) -> u32 {
        self.total_proficiency
    }

    /// Number of cooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cooks.len()
    }

    /// Always false for a constructed roster.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cooks.is_empty()
    }
}
