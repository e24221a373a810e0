//! Asset inventory view.

use chrono::NaiveDate;

use crate::entities::Asset;
use crate::errors::CoreError;
use crate::filter::{self, AssetFilter};

const ENTITY: &str = "asset";

/// One view's working copy of the asset list, keyed by unique id.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    assets: Vec<Asset>,
}

impl Inventory {
    /// Build an inventory, rejecting repeated ids.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Duplicate` for the first id seen twice.
    pub fn new(assets: Vec<Asset>) -> Result<Self, CoreError> {
        let mut inventory = Self::default();
        for asset in assets {
            inventory.insert(asset)?;
        }
        Ok(inventory)
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Add an asset.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Duplicate` if the id is already tracked.
    pub fn insert(&mut self, asset: Asset) -> Result<(), CoreError> {
        if self.assets.iter().any(|a| a.id == asset.id) {
            return Err(CoreError::Duplicate {
                entity_type: ENTITY.into(),
                id: asset.id,
            });
        }
        self.assets.push(asset);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no asset has this id.
    pub fn get(&self, id: &str) -> Result<&Asset, CoreError> {
        self.assets
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| CoreError::not_found(ENTITY, id))
    }

    #[must_use]
    pub fn filtered(&self, predicate: &AssetFilter) -> Vec<Asset> {
        filter::filter(&self.assets, predicate)
    }

    /// Assets whose next scheduled maintenance falls on or before `today`.
    #[must_use]
    pub fn maintenance_due(&self, today: NaiveDate) -> Vec<&Asset> {
        self.assets
            .iter()
            .filter(|a| a.maintenance_due(today))
            .collect()
    }
}
