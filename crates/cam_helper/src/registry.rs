//! HelperRegistry - camera helper lookup by sensor model name
//!
//! Two phases:
//! 1. Start-up: factories are registered on a `HelperRegistryBuilder`,
//!    possibly from several threads at once.
//! 2. Run time: `freeze` turns the builder into an immutable
//!    `HelperRegistry`; lookups take no lock.
//!
//! Duplicate names are rejected and the first registration stays in place.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use contracts::{SensorModel, DEFAULT_HELPER_NAME};
use tracing::{debug, info, warn};

use crate::error::{CamHelperError, Result};
use crate::helper::{CamHelper, DefaultCamHelper, Imx219CamHelper, Imx477CamHelper};

/// Factory producing a fresh helper instance
pub type HelperFactory = Arc<dyn Fn() -> Box<dyn CamHelper> + Send + Sync>;

/// Mutable registration phase of the registry
#[derive(Default)]
pub struct HelperRegistryBuilder {
    factories: Mutex<HashMap<SensorModel, HelperFactory>>,
}

impl HelperRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`
    ///
    /// # Errors
    /// `DuplicateRegistration` if `name` is taken; the existing factory is kept.
    pub fn register<F>(&self, name: impl Into<SensorModel>, factory: F) -> Result<()>
    where
        F: Fn() -> Box<dyn CamHelper> + Send + Sync + 'static,
    {
        let name = name.into();
        let mut factories = self
            .factories
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if factories.contains_key(&name) {
            warn!(helper = %name, "duplicate camera helper registration rejected");
            return Err(CamHelperError::duplicate_registration(name.as_str()));
        }

        debug!(helper = %name, "camera helper registered");
        factories.insert(name, Arc::new(factory));
        Ok(())
    }

    /// End the registration phase
    pub fn freeze(self) -> HelperRegistry {
        let factories = self
            .factories
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);

        info!(helpers = factories.len(), "camera helper registry frozen");
        HelperRegistry { factories }
    }
}

/// Register every helper shipped with this crate
///
/// Call once at start-up, before `freeze`.
pub fn register_builtin_helpers(builder: &HelperRegistryBuilder) -> Result<()> {
    builder.register(DEFAULT_HELPER_NAME, || Box::new(DefaultCamHelper))?;
    builder.register("imx219", || Box::new(Imx219CamHelper))?;
    builder.register("imx477", || Box::new(Imx477CamHelper))?;
    Ok(())
}

/// Frozen name -> factory map
pub struct HelperRegistry {
    factories: HashMap<SensorModel, HelperFactory>,
}

impl HelperRegistry {
    /// Registry holding exactly the builtin helpers
    pub fn builtin() -> Result<Self> {
        let builder = HelperRegistryBuilder::new();
        register_builtin_helpers(&builder)?;
        Ok(builder.freeze())
    }

    /// Instantiate the helper registered under `name`
    ///
    /// # Errors
    /// `UnknownSensor` if nothing is registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn CamHelper>> {
        match self.factories.get(name) {
            Some(factory) => {
                observability::record_helper_created(name);
                Ok(factory())
            }
            None => {
                debug!(helper = name, "no camera helper registered");
                observability::record_helper_lookup_miss(name);
                Err(CamHelperError::unknown_sensor(name))
            }
        }
    }

    /// Helper for `name`, or the default helper if `name` is unknown
    ///
    /// Falls back to `DefaultCamHelper` directly when the registry was built
    /// without a default entry, so this never fails.
    pub fn create_or_default(&self, name: &str) -> Box<dyn CamHelper> {
        self.create(name)
            .or_else(|_| self.create(DEFAULT_HELPER_NAME))
            .unwrap_or_else(|_| Box::new(DefaultCamHelper))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<SensorModel> {
        let mut names: Vec<SensorModel> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for HelperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelperRegistry")
            .field("helpers", &self.names())
            .finish()
    }
}
