mod vocab;

use anyhow::Result;
use chrono::{Duration, NaiveDateTime, Utc};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng, TryRngCore};

use crate::config::SeedSpec;
use crate::model::{Customer, Order, OrderItem, Product, TableRows};

/// One run's worth of synthetic rows, parents generated before children.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
}

impl Dataset {
    /// Tables in the order they must be loaded.
    pub fn tables(&self) -> Vec<TableRows> {
        vec![
            TableRows {
                table: Customer::TABLE,
                columns: Customer::COLUMNS,
                rows: self.customers.iter().map(Customer::to_row).collect(),
            },
            TableRows {
                table: Product::TABLE,
                columns: Product::COLUMNS,
                rows: self.products.iter().map(Product::to_row).collect(),
            },
            TableRows {
                table: Order::TABLE,
                columns: Order::COLUMNS,
                rows: self.orders.iter().map(Order::to_row).collect(),
            },
            TableRows {
                table: OrderItem::TABLE,
                columns: OrderItem::COLUMNS,
                rows: self.order_items.iter().map(OrderItem::to_row).collect(),
            },
        ]
    }

    pub fn total_rows(&self) -> usize {
        self.customers.len() + self.products.len() + self.orders.len() + self.order_items.len()
    }
}

pub struct SeedGenerator {
    rng: StdRng,
    now: NaiveDateTime,
}

impl SeedGenerator {
    /// With a seed the dataset's drawn values are reproducible; without one
    /// the RNG is seeded from OS entropy.
    pub fn new(seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => {
                let mut bytes = [0u8; 32];
                OsRng.try_fill_bytes(&mut bytes)?;
                StdRng::from_seed(bytes)
            }
        };

        Ok(Self {
            rng,
            now: Utc::now().naive_utc(),
        })
    }

    pub fn generate(&mut self, spec: &SeedSpec) -> Dataset {
        let customers = self.customers(spec.customers);
        let products = self.products(spec.products);
        let (orders, order_items) = self.orders(spec, customers.len() as i64, products.len() as i64);

        Dataset {
            customers,
            products,
            orders,
            order_items,
        }
    }

    fn customers(&mut self, count: u32) -> Vec<Customer> {
        let mut customers = Vec::with_capacity(count as usize);
        for i in 1..=i64::from(count) {
            customers.push(Customer {
                customer_id: i,
                first_name: self.pick(vocab::FIRST_NAMES),
                last_name: self.pick(vocab::LAST_NAMES),
                email: format!("user{i}@test.com"),
                phone: format!("555-000-{i:04}"),
                address: format!("{i} Main St"),
                city: self.pick(vocab::CITIES),
                state: self.pick(vocab::STATES),
                zip_code: self.rng.random_range(10000..=99999).to_string(),
                country: "USA".to_string(),
                created_at: self.now,
                updated_at: self.now,
            });
        }
        customers
    }

    fn products(&mut self, count: u32) -> Vec<Product> {
        let mut products = Vec::with_capacity(count as usize);
        for i in 1..=i64::from(count) {
            products.push(Product {
                product_id: i,
                product_name: format!("Product {i}"),
                category: self.pick(vocab::CATEGORIES),
                brand: self.pick(vocab::BRANDS),
                price: self.money(10.0, 500.0),
                cost: self.money(5.0, 250.0),
                stock_quantity: self.rng.random_range(0..=1000),
                description: format!("Description {i}"),
                created_at: self.now,
                updated_at: self.now,
            });
        }
        products
    }

    /// Orders reference only customer ids generated this run, and every
    /// order's total is the sum of its items' totals.
    fn orders(&mut self, spec: &SeedSpec, customers: i64, products: i64) -> (Vec<Order>, Vec<OrderItem>) {
        let mut orders = Vec::with_capacity(spec.orders as usize);
        let mut items = Vec::new();
        let mut next_item_id = 1i64;

        for i in 1..=i64::from(spec.orders) {
            let order_date = self.now - Duration::days(self.rng.random_range(0..=30));
            let item_count = self.rng.random_range(1..=spec.max_items_per_order.max(1));

            let mut total = 0.0;
            for _ in 0..item_count {
                let quantity = self.rng.random_range(1..=5);
                let unit_price = self.money(10.0, 100.0);
                let total_price = round2(quantity as f64 * unit_price);
                total += total_price;

                items.push(OrderItem {
                    order_item_id: next_item_id,
                    order_id: i,
                    product_id: self.rng.random_range(1..=products.max(1)),
                    quantity,
                    unit_price,
                    total_price,
                    created_at: order_date,
                });
                next_item_id += 1;
            }

            orders.push(Order {
                order_id: i,
                customer_id: self.rng.random_range(1..=customers.max(1)),
                order_date,
                total_amount: round2(total),
                status: self.pick(vocab::STATUSES),
                shipping_address: format!("{i} Shipping Rd"),
                shipping_city: self.pick(vocab::CITIES),
                shipping_state: self.pick(vocab::STATES),
                shipping_zip: self.rng.random_range(10000..=99999).to_string(),
                created_at: order_date,
                updated_at: order_date,
            });
        }

        (orders, items)
    }

    fn pick(&mut self, items: &[&str]) -> String {
        items[self.rng.random_range(0..items.len())].to_string()
    }

    fn money(&mut self, low: f64, high: f64) -> f64 {
        round2(self.rng.random_range(low..high))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
