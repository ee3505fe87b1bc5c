use crate::{FakeDataGenerator, SamplePools};

/// Generator over the built-in pools with a fixed seed.
pub fn seeded_generator(seed: u64) -> FakeDataGenerator {
    FakeDataGenerator::seeded(SamplePools::default(), seed)
}

/// Pools with exactly one shop, product and variant.
pub fn single_entry_pools() -> SamplePools {
    SamplePools::new(
        vec!["Corner Store".to_string()],
        vec!["Tea".to_string()],
        vec!["Jasmine".to_string()],
    )
    .unwrap()
}
