use crate::core::{AreaLookup, DeliveryLocation, LocationStore};
use crate::utils::error::Result;
use crate::utils::validation;

/// Storage key for the structured delivery location payload.
pub const LOCATION_KEY: &str = "snf.delivery-location";

/// Storage key of the legacy bare-pincode entry, read once for migration.
pub const LEGACY_PINCODE_KEY: &str = "snf.pincode";

/// Single source of truth for which pincode and depot the user is currently
/// shopping under. The store holds at most one location; every update is a
/// full replacement.
///
/// Outcomes are typed: `Ok(Some(_))` is a resolved location, `Ok(None)` means
/// no location is known or the pincode is not serviceable, and `Err(_)` is a
/// transport, storage, or input failure. Callers decide how to degrade.
pub struct DeliveryLocationService<S: LocationStore, L: AreaLookup> {
    store: S,
    lookup: L,
}

impl<S: LocationStore, L: AreaLookup> DeliveryLocationService<S, L> {
    pub fn new(store: S, lookup: L) -> Self {
        Self { store, lookup }
    }

    /// Reads the persisted location. A stored payload that no longer parses
    /// is treated as unset, not as an error.
    pub async fn current_location(&self) -> Result<Option<DeliveryLocation>> {
        let Some(raw) = self.store.get(LOCATION_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(location) => Ok(Some(location)),
            Err(e) => {
                tracing::warn!("Stored delivery location does not parse, treating as unset: {}", e);
                Ok(None)
            }
        }
    }

    pub async fn set_current_location(&self, location: &DeliveryLocation) -> Result<()> {
        let payload = serde_json::to_string(location)?;
        self.store.set(LOCATION_KEY, &payload).await
    }

    pub async fn clear_current_location(&self) -> Result<()> {
        self.store.remove(LOCATION_KEY).await
    }

    /// Resolves a pincode to a depot via the area lookup and persists the
    /// result. Picks the first area in server order that carries a depot.
    /// `Ok(None)` means no area or no depot covers the pincode; the store is
    /// left untouched in that case.
    pub async fn depot_for_pincode(&self, pincode: &str) -> Result<Option<DeliveryLocation>> {
        let areas = self.lookup.areas_by_pincode(pincode).await?;

        if areas.is_empty() {
            tracing::info!("No service areas cover pincode {}", pincode);
            return Ok(None);
        }

        let Some((area, depot)) = areas
            .iter()
            .find_map(|area| area.depot.as_ref().map(|depot| (area, depot)))
        else {
            tracing::info!(
                "None of the {} area(s) covering pincode {} has a depot",
                areas.len(),
                pincode
            );
            return Ok(None);
        };

        let location = DeliveryLocation {
            postal_code: pincode.to_string(),
            depot_id: Some(depot.id.to_string()),
            depot_name: Some(depot.name.clone()),
            area_id: Some(area.id),
            area_name: Some(area.name.clone()),
        };

        self.set_current_location(&location).await?;
        tracing::info!(
            "Resolved pincode {} to depot {} via area {}",
            pincode,
            depot.id,
            area.id
        );
        Ok(Some(location))
    }

    /// Primary entry point: replace the current location with whatever the
    /// pincode resolves to. The slot is cleared up front, so an invalid or
    /// unserviceable pincode leaves no location set.
    pub async fn update_location_by_pincode(
        &self,
        pincode: &str,
    ) -> Result<Option<DeliveryLocation>> {
        self.clear_current_location().await?;
        validation::validate_pincode(pincode)?;
        self.depot_for_pincode(pincode).await
    }

    pub async fn current_depot_id(&self) -> Result<Option<String>> {
        Ok(self
            .current_location()
            .await?
            .and_then(|location| location.depot_id))
    }

    pub async fn has_delivery_location(&self) -> Result<bool> {
        Ok(self
            .current_location()
            .await?
            .map_or(false, |location| location.is_complete()))
    }

    /// One-time upgrade of the legacy bare-pincode entry into the structured
    /// payload. Safe to call on every start: once a structured location
    /// parses, or the legacy key is gone, this is a no-op. A lookup failure
    /// keeps the legacy key so the next start retries.
    pub async fn migrate_from_legacy_pincode(&self) -> Result<Option<DeliveryLocation>> {
        if self.current_location().await?.is_some() {
            return Ok(None);
        }

        let Some(raw) = self.store.get(LEGACY_PINCODE_KEY).await? else {
            return Ok(None);
        };

        let pincode = raw.trim().to_string();
        if !validation::is_valid_pincode(&pincode) {
            tracing::warn!("Dropping legacy pincode entry '{}': not a 6-digit pincode", pincode);
            self.store.remove(LEGACY_PINCODE_KEY).await?;
            return Ok(None);
        }

        tracing::info!("Migrating legacy pincode {} to a structured delivery location", pincode);
        let resolved = self.update_location_by_pincode(&pincode).await?;
        self.store.remove(LEGACY_PINCODE_KEY).await?;
        Ok(resolved)
    }
}
