use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tracing::debug;

use crate::{Order, OrderId, OrderItem, OrderStatus, SamplePools};

/// Orders produced by every [`FakeDataGenerator::generate_orders`] call.
pub const ORDER_COUNT: u32 = 40;

pub const ORDER_YEAR: i32 = 2025;
pub const ORDER_MONTH: u32 = 4;
pub const ORDER_DAYS: RangeInclusive<u32> = 1..=28;
pub const ITEMS_PER_ORDER: RangeInclusive<usize> = 1..=3;
pub const ITEM_PRICE: RangeInclusive<u64> = 50_000..=949_999;
pub const ITEM_QUANTITY: RangeInclusive<u32> = 1..=3;

/// Synthesizes sample orders for screens that run without a backend.
///
/// Shape is fixed (count, id sequence, shipping history per status) while
/// content is drawn from `pools` using the generator's own RNG. Two
/// generators built with [`FakeDataGenerator::seeded`] and the same seed
/// produce identical data.
#[derive(Debug)]
pub struct FakeDataGenerator<R = StdRng> {
    pools: SamplePools,
    rng: R,
}

impl FakeDataGenerator<StdRng> {
    pub fn seeded(pools: SamplePools, seed: u64) -> Self {
        Self::new(pools, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(pools: SamplePools) -> Self {
        Self::new(pools, StdRng::from_entropy())
    }
}

impl<R: Rng> FakeDataGenerator<R> {
    pub fn new(pools: SamplePools, rng: R) -> Self {
        Self { pools, rng }
    }

    pub fn pools(&self) -> &SamplePools {
        &self.pools
    }

    /// Produces [`ORDER_COUNT`] orders numbered from 1.
    pub fn generate_orders(&mut self) -> Vec<Order> {
        let orders: Vec<Order> = (1..=ORDER_COUNT)
            .map(|id| self.generate_order(OrderId(id)))
            .collect();

        debug!(
            "Generated {} fake orders across {} shops",
            orders.len(),
            self.pools.shop_names().len()
        );

        orders
    }

    /// Regenerates the whole order set and returns the order with `order_id`.
    ///
    /// Content comes from a fresh generation pass, so repeated lookups of the
    /// same id return different orders unless the generator is re-seeded in
    /// between.
    pub fn find_order_by_id(&mut self, order_id: OrderId) -> Option<Order> {
        let found = self
            .generate_orders()
            .into_iter()
            .find(|order| order.order_id == order_id);

        if found.is_none() {
            debug!("No generated order with id {order_id}");
        }

        found
    }

    fn generate_order(&mut self, order_id: OrderId) -> Order {
        let shop_name = pick(&mut self.rng, self.pools.shop_names()).to_string();
        let order_date = self.order_date();
        let status = OrderStatus::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(OrderStatus::Pending);

        // ITEMS_PER_ORDER starts at 1, so every order has items.
        let item_count = self.rng.gen_range(ITEMS_PER_ORDER);
        let items = (0..item_count).map(|_| self.generate_item()).collect();

        Order::assemble(order_id, order_date, status, items, shop_name)
    }

    fn generate_item(&mut self) -> OrderItem {
        let product_name = pick(&mut self.rng, self.pools.products());
        let variant = pick(&mut self.rng, self.pools.variants());
        let price = self.rng.gen_range(ITEM_PRICE);
        let quantity = self.rng.gen_range(ITEM_QUANTITY);

        OrderItem::new(product_name, variant, price, quantity)
    }

    fn order_date(&mut self) -> NaiveDate {
        let day = self.rng.gen_range(ORDER_DAYS);
        // Days never exceed 28, so every month has them.
        NaiveDate::from_ymd_opt(ORDER_YEAR, ORDER_MONTH, day).unwrap_or_default()
    }
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &'a [String]) -> &'a str {
    pool.choose(rng).map_or("", String::as_str)
}
