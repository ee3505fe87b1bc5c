use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::PoolsError;

const SHOP_NAMES: [&str; 6] = [
    "giadungtuyetnhi",
    "Shop ABC",
    "Green Electronics",
    "Cat Fashion",
    "Shopee Mall",
    "Books 24h",
];

const PRODUCTS: [&str; 10] = [
    "Hand wash",
    "Men's T-shirt",
    "Bluetooth headphones",
    "Sneakers",
    "Exam prep book",
    "Thermos bottle",
    "Laptop backpack",
    "LED desk lamp",
    "Facial cleanser",
    "Ballpoint pen",
];

const VARIANTS: [&str; 8] = [
    "Strawberry scent",
    "Size XL",
    "Black",
    "500ml",
    "2-book bundle",
    "Blue",
    "2025 edition",
    "Box of 10",
];

/// Names the generator draws shops, products and variants from.
///
/// Every pool holds at least one entry, which is what lets generation never
/// fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplePools {
    shop_names: Vec<String>,
    products: Vec<String>,
    variants: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PoolsFile {
    shop_names: Vec<String>,
    products: Vec<String>,
    variants: Vec<String>,
}

impl SamplePools {
    pub fn new(
        shop_names: Vec<String>,
        products: Vec<String>,
        variants: Vec<String>,
    ) -> Result<Self, PoolsError> {
        let pools = Self {
            shop_names,
            products,
            variants,
        };
        pools.validate()?;
        Ok(pools)
    }

    pub fn validate(&self) -> Result<(), PoolsError> {
        for (pool, entries) in [
            ("shopNames", &self.shop_names),
            ("products", &self.products),
            ("variants", &self.variants),
        ] {
            if entries.is_empty() {
                return Err(PoolsError::EmptyPool { pool });
            }
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, PoolsError> {
        let file: PoolsFile = serde_json::from_str(json)?;
        Self::new(file.shop_names, file.products, file.variants)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PoolsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let pools = Self::from_json_str(&contents)?;

        debug!(
            "Loaded sample pools from {}: {} shops, {} products, {} variants",
            path.display(),
            pools.shop_names.len(),
            pools.products.len(),
            pools.variants.len()
        );

        Ok(pools)
    }

    pub fn shop_names(&self) -> &[String] {
        &self.shop_names
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }
}

fn owned(pool: &[&str]) -> Vec<String> {
    pool.iter().map(ToString::to_string).collect()
}

impl Default for SamplePools {
    fn default() -> Self {
        Self {
            shop_names: owned(&SHOP_NAMES),
            products: owned(&PRODUCTS),
            variants: owned(&VARIANTS),
        }
    }
}
