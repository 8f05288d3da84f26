use rand::{Rng, RngCore};

use datafaker_generate::{GeneratedValue, GeneratorClass, GeneratorRegistry, RandomData};

/// Name under which job files reference [`EnglishNameGenerator`].
pub const ENGLISH_NAME: &str = "english_name";

const ENGLISH_NAMES: [&str; 3] = ["Kim Lily", "Andy Wang", "July Six"];

/// Picks a full English name from a fixed list.
#[derive(Debug, Default)]
pub struct EnglishNameGenerator;

impl RandomData for EnglishNameGenerator {
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let index = rng.random_range(0..ENGLISH_NAMES.len());
        GeneratedValue::from(ENGLISH_NAMES[index])
    }
}

/// Registers the generator classes shipped with the binary.
pub fn register_builtin_classes(registry: &GeneratorRegistry) {
    registry.register_class(ENGLISH_NAME, GeneratorClass::of::<EnglishNameGenerator>());
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn english_names_come_from_the_list() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let value = EnglishNameGenerator.next(&mut rng);
            assert!(ENGLISH_NAMES.contains(&value.as_str().expect("text")));
        }
    }

    #[test]
    fn builtin_classes_are_registered_by_name() {
        let registry = GeneratorRegistry::new();
        register_builtin_classes(&registry);
        assert_eq!(registry.class_names(), [ENGLISH_NAME]);
    }
}
