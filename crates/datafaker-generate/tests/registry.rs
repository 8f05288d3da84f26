use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::RngCore;

use datafaker_generate::errors::FakerError;
use datafaker_generate::generators::semantic::AgeGenerator;
use datafaker_generate::{DataType, GeneratedValue, GeneratorClass, GeneratorRegistry, RandomData};

#[derive(Debug)]
struct CountedGenerator;

impl RandomData for CountedGenerator {
    fn next(&self, _rng: &mut dyn RngCore) -> GeneratedValue {
        GeneratedValue::Int(1)
    }
}

#[derive(Debug)]
struct BrokenGenerator;

impl RandomData for BrokenGenerator {
    fn next(&self, _rng: &mut dyn RngCore) -> GeneratedValue {
        GeneratedValue::Null
    }
}

#[derive(Debug, Default)]
struct NicknameGenerator;

impl RandomData for NicknameGenerator {
    fn next(&self, _rng: &mut dyn RngCore) -> GeneratedValue {
        GeneratedValue::from("ace")
    }
}

#[test]
fn data_type_resolves_to_the_same_instance() {
    let registry = GeneratorRegistry::new();
    let first = registry.data_type(DataType::Age).expect("age");
    let second = registry.data_type(DataType::Age).expect("age");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.cached_count(), 1);
}

#[test]
fn data_type_and_class_share_one_instance() {
    let registry = GeneratorRegistry::new();
    let by_type = registry.data_type(DataType::Age).expect("age");
    let by_class = registry
        .instance(&GeneratorClass::of::<AgeGenerator>())
        .expect("age class");
    assert!(Arc::ptr_eq(&by_type, &by_class));
}

#[test]
fn every_data_type_gets_its_own_instance() {
    let registry = GeneratorRegistry::new();
    for data_type in DataType::ALL {
        registry.data_type(data_type).expect("catalog generator");
    }
    assert_eq!(registry.cached_count(), DataType::ALL.len());
}

#[test]
fn global_registry_is_a_singleton() {
    let first = GeneratorRegistry::global();
    let second = GeneratorRegistry::global();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn concurrent_first_use_constructs_once() {
    static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);
    let registry = Arc::new(GeneratorRegistry::new());
    let class = GeneratorClass::with_factory::<CountedGenerator, _>(|| {
        CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
        Ok(CountedGenerator)
    });

    let instances: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let class = class.clone();
                scope.spawn(move || registry.instance(&class).expect("instance"))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker"))
            .collect()
    });

    assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 1);
    let first = &instances[0];
    assert!(instances.iter().all(|instance| Arc::ptr_eq(first, instance)));
}

#[test]
fn failed_construction_is_reported_and_not_cached() {
    let registry = GeneratorRegistry::new();
    let class = GeneratorClass::with_factory::<BrokenGenerator, _>(|| {
        Err("word list is missing".to_string())
    });

    let result = registry.instance(&class);
    match result {
        Err(FakerError::Instantiation { class: name, message }) => {
            assert!(name.ends_with("BrokenGenerator"), "{name}");
            assert_eq!(message, "word list is missing");
        }
        other => panic!("expected instantiation error, got {other:?}"),
    }
    assert!(!registry.is_cached(&class));
    assert_eq!(registry.cached_count(), 0);
}

#[test]
fn named_classes_are_listed_and_resolved() {
    let registry = GeneratorRegistry::new();
    assert!(registry.class_named("nickname").is_none());

    let previous = registry.register_class("nickname", GeneratorClass::of::<NicknameGenerator>());
    assert!(previous.is_none());
    registry.register_class("age", GeneratorClass::of::<AgeGenerator>());

    assert_eq!(registry.class_names(), ["age", "nickname"]);
    let class = registry.class_named("nickname").expect("registered");
    assert_eq!(class.short_name(), "NicknameGenerator");
    assert_eq!(class, GeneratorClass::of::<NicknameGenerator>());

    let replaced = registry.register_class("nickname", GeneratorClass::of::<AgeGenerator>());
    assert_eq!(replaced, Some(GeneratorClass::of::<NicknameGenerator>()));
}

#[test]
fn registering_a_name_does_not_instantiate() {
    let registry = GeneratorRegistry::new();
    let class = GeneratorClass::of::<NicknameGenerator>();
    registry.register_class("nickname", class.clone());
    assert!(!registry.is_cached(&class));

    registry.instance(&class).expect("instance");
    assert!(registry.is_cached(&class));
}
