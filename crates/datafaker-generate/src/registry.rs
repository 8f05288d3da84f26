use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::catalog::DataType;
use crate::errors::FakerError;
use crate::generators::{GeneratorClass, SharedGenerator};

/// Flyweight cache of generator instances, keyed by generator type.
///
/// Each class is instantiated at most once per registry; every later
/// resolution returns the same `Arc`. Stateful generators resolved by class
/// therefore keep their state across sessions sharing the registry.
#[derive(Debug, Default)]
pub struct GeneratorRegistry {
    instances: Mutex<HashMap<TypeId, SharedGenerator>>,
    classes: RwLock<BTreeMap<String, GeneratorClass>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry shared by sessions that do not bring their own.
    pub fn global() -> Arc<GeneratorRegistry> {
        static GLOBAL: OnceLock<Arc<GeneratorRegistry>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(GeneratorRegistry::new())))
    }

    /// Returns the cached instance for `class`, constructing it on first use.
    ///
    /// Construction runs under the cache lock, so concurrent first use still
    /// yields exactly one instance. Factories must not call back into the
    /// registry. A failed construction is not cached.
    pub fn instance(&self, class: &GeneratorClass) -> Result<SharedGenerator, FakerError> {
        let mut instances = self.instances.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = instances.get(&class.type_id()) {
            return Ok(Arc::clone(existing));
        }

        let created = class
            .instantiate()
            .map_err(|message| FakerError::Instantiation {
                class: class.name().to_string(),
                message,
            })?;
        debug!(class = class.short_name(), "generator instantiated");
        instances.insert(class.type_id(), Arc::clone(&created));
        Ok(created)
    }

    pub fn data_type(&self, data_type: DataType) -> Result<SharedGenerator, FakerError> {
        self.instance(&data_type.generator_class())
    }

    /// Registers `class` under `name`, returning the class it replaced.
    pub fn register_class(
        &self,
        name: impl Into<String>,
        class: GeneratorClass,
    ) -> Option<GeneratorClass> {
        let mut classes = self.classes.write().unwrap_or_else(PoisonError::into_inner);
        classes.insert(name.into(), class)
    }

    pub fn class_named(&self, name: &str) -> Option<GeneratorClass> {
        let classes = self.classes.read().unwrap_or_else(PoisonError::into_inner);
        classes.get(name).cloned()
    }

    /// Registered class names in sorted order.
    pub fn class_names(&self) -> Vec<String> {
        let classes = self.classes.read().unwrap_or_else(PoisonError::into_inner);
        classes.keys().cloned().collect()
    }

    pub fn is_cached(&self, class: &GeneratorClass) -> bool {
        let instances = self.instances.lock().unwrap_or_else(PoisonError::into_inner);
        instances.contains_key(&class.type_id())
    }

    pub fn cached_count(&self) -> usize {
        let instances = self.instances.lock().unwrap_or_else(PoisonError::into_inner);
        instances.len()
    }
}
