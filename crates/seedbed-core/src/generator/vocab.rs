//! Fixed vocabularies the generator draws from. Values are picked
//! independently of each other; no cross-field consistency is attempted.

pub const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Sarah", "David", "Lisa", "Robert", "Emily", "James", "Jessica",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
];

pub const CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
];

pub const STATES: &[&str] = &["NY", "CA", "IL", "TX", "AZ", "PA", "TX", "CA", "TX", "CA"];

pub const CATEGORIES: &[&str] = &[
    "Electronics",
    "Clothing",
    "Home & Garden",
    "Sports",
    "Books",
    "Toys",
    "Health & Beauty",
];

pub const BRANDS: &[&str] = &[
    "Apple",
    "Samsung",
    "Nike",
    "Adidas",
    "Sony",
    "LG",
    "Canon",
    "Dell",
    "HP",
    "Microsoft",
];

pub const STATUSES: &[&str] = &["pending", "processing", "shipped", "delivered", "cancelled"];
