use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use rand::RngCore;

pub use datafaker_core::GeneratedValue;

pub mod primitives;
pub mod semantic;
pub mod sequence;

pub use primitives::{CandidateSetGenerator, RangeGenerator, RangeSpec};
pub use sequence::{SequenceGenerator, SequenceSpec};

/// Capability shared by every generator: produce the next value.
///
/// Implementations that keep state across calls must use interior mutability,
/// since one instance may be shared by several sessions through the registry.
pub trait RandomData: Send + Sync + fmt::Debug {
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue;
}

/// Generator instance shared between bindings, sessions and the registry.
pub type SharedGenerator = Arc<dyn RandomData>;

/// Wraps a generator so it can be bound directly as an instance.
pub fn shared<G: RandomData + 'static>(generator: G) -> SharedGenerator {
    Arc::new(generator)
}

type Factory = Arc<dyn Fn() -> Result<SharedGenerator, String> + Send + Sync>;

/// Reference to a generator type, instantiated at most once per registry.
#[derive(Clone)]
pub struct GeneratorClass {
    id: TypeId,
    name: &'static str,
    factory: Factory,
}

impl GeneratorClass {
    /// Class for a generator type constructed through `Default`.
    pub fn of<T>() -> Self
    where
        T: RandomData + Default + 'static,
    {
        Self::with_factory::<T, _>(|| Ok(T::default()))
    }

    /// Class whose construction may fail; the error becomes an
    /// instantiation error on first resolution.
    pub fn with_factory<T, F>(factory: F) -> Self
    where
        T: RandomData + 'static,
        F: Fn() -> Result<T, String> + Send + Sync + 'static,
    {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            factory: Arc::new(move || factory().map(|generator| Arc::new(generator) as SharedGenerator)),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Short type name without the module path.
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }

    pub(crate) fn instantiate(&self) -> Result<SharedGenerator, String> {
        (self.factory)()
    }
}

impl fmt::Debug for GeneratorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorClass")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for GeneratorClass {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for GeneratorClass {}
