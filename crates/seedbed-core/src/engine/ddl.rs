//! Ordered, re-runnable DDL per dialect. Every statement is guarded so a run
//! can be pointed at an engine that already holds a previous run's schema.

pub fn postgres() -> Vec<String> {
    vec![
        r#"CREATE TABLE IF NOT EXISTS customers (
            customer_id BIGINT PRIMARY KEY,
            first_name VARCHAR(50) NOT NULL,
            last_name VARCHAR(50) NOT NULL,
            email VARCHAR(100) NOT NULL,
            phone VARCHAR(20),
            address VARCHAR(200),
            city VARCHAR(50),
            state VARCHAR(50),
            zip_code VARCHAR(20),
            country VARCHAR(50),
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )"#
        .to_string(),
        r#"CREATE TABLE IF NOT EXISTS products (
            product_id BIGINT PRIMARY KEY,
            product_name VARCHAR(100) NOT NULL,
            category VARCHAR(50),
            brand VARCHAR(50),
            price DECIMAL(10,2) NOT NULL,
            cost DECIMAL(10,2),
            stock_quantity INT,
            description TEXT,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )"#
        .to_string(),
        r#"CREATE TABLE IF NOT EXISTS orders (
            order_id BIGINT PRIMARY KEY,
            customer_id BIGINT NOT NULL REFERENCES customers(customer_id),
            order_date TIMESTAMP NOT NULL,
            total_amount DECIMAL(12,2) NOT NULL,
            status VARCHAR(20),
            shipping_address VARCHAR(200),
            shipping_city VARCHAR(50),
            shipping_state VARCHAR(50),
            shipping_zip VARCHAR(20),
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )"#
        .to_string(),
        r#"CREATE TABLE IF NOT EXISTS order_items (
            order_item_id BIGINT PRIMARY KEY,
            order_id BIGINT NOT NULL REFERENCES orders(order_id),
            product_id BIGINT NOT NULL REFERENCES products(product_id),
            quantity INT NOT NULL,
            unit_price DECIMAL(10,2) NOT NULL,
            total_price DECIMAL(12,2) NOT NULL,
            created_at TIMESTAMP NOT NULL
        )"#
        .to_string(),
    ]
}

/// Postgres DDL with the Timescale specifics: the extension, a composite
/// primary key on orders (the hypertable partition column must be part of
/// it), and no foreign key into the hypertable, which Timescale rejects.
pub fn timescale() -> Vec<String> {
    let mut statements = vec!["CREATE EXTENSION IF NOT EXISTS timescaledb".to_string()];
    for statement in postgres() {
        match statement {
            s if s.contains("CREATE TABLE IF NOT EXISTS orders") => {
                statements.push(
                    r#"CREATE TABLE IF NOT EXISTS orders (
            order_id BIGINT NOT NULL,
            customer_id BIGINT NOT NULL REFERENCES customers(customer_id),
            order_date TIMESTAMP NOT NULL,
            total_amount DECIMAL(12,2) NOT NULL,
            status VARCHAR(20),
            shipping_address VARCHAR(200),
            shipping_city VARCHAR(50),
            shipping_state VARCHAR(50),
            shipping_zip VARCHAR(20),
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL,
            PRIMARY KEY (order_id, order_date)
        )"#
                    .to_string(),
                );
            }
            s if s.contains("CREATE TABLE IF NOT EXISTS order_items") => {
                statements.push(
                    r#"CREATE TABLE IF NOT EXISTS order_items (
            order_item_id BIGINT PRIMARY KEY,
            order_id BIGINT NOT NULL,
            product_id BIGINT NOT NULL REFERENCES products(product_id),
            quantity INT NOT NULL,
            unit_price DECIMAL(10,2) NOT NULL,
            total_price DECIMAL(12,2) NOT NULL,
            created_at TIMESTAMP NOT NULL
        )"#
                    .to_string(),
                );
            }
            s => statements.push(s),
        }
    }
    statements.push(
        "SELECT create_hypertable('orders', 'order_date', if_not_exists => TRUE)".to_string(),
    );
    statements
}

pub fn sqlite() -> Vec<String> {
    vec![
        r#"CREATE TABLE IF NOT EXISTS customers (
            customer_id INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT,
            address TEXT,
            city TEXT,
            state TEXT,
            zip_code TEXT,
            country TEXT,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )"#
        .to_string(),
        r#"CREATE TABLE IF NOT EXISTS products (
            product_id INTEGER PRIMARY KEY,
            product_name TEXT NOT NULL,
            category TEXT,
            brand TEXT,
            price REAL NOT NULL,
            cost REAL,
            stock_quantity INTEGER,
            description TEXT,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )"#
        .to_string(),
        r#"CREATE TABLE IF NOT EXISTS orders (
            order_id INTEGER PRIMARY KEY,
            customer_id INTEGER NOT NULL REFERENCES customers(customer_id),
            order_date TIMESTAMP NOT NULL,
            total_amount REAL NOT NULL,
            status TEXT,
            shipping_address TEXT,
            shipping_city TEXT,
            shipping_state TEXT,
            shipping_zip TEXT,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )"#
        .to_string(),
        r#"CREATE TABLE IF NOT EXISTS order_items (
            order_item_id INTEGER PRIMARY KEY,
            order_id INTEGER NOT NULL REFERENCES orders(order_id),
            product_id INTEGER NOT NULL REFERENCES products(product_id),
            quantity INTEGER NOT NULL,
            unit_price REAL NOT NULL,
            total_price REAL NOT NULL,
            created_at TIMESTAMP NOT NULL
        )"#
        .to_string(),
    ]
}

pub fn cassandra() -> Vec<String> {
    vec![
        concat!(
            "CREATE KEYSPACE IF NOT EXISTS ecommerce WITH replication = ",
            "{'class': 'SimpleStrategy', 'replication_factor': 1};"
        )
        .to_string(),
        r#"CREATE TABLE IF NOT EXISTS ecommerce.customers (
            customer_id bigint PRIMARY KEY,
            first_name text,
            last_name text,
            email text,
            phone text,
            address text,
            city text,
            state text,
            zip_code text,
            country text,
            created_at timestamp,
            updated_at timestamp
        );"#
        .to_string(),
        r#"CREATE TABLE IF NOT EXISTS ecommerce.products (
            product_id bigint PRIMARY KEY,
            product_name text,
            category text,
            brand text,
            price decimal,
            cost decimal,
            stock_quantity int,
            description text,
            created_at timestamp,
            updated_at timestamp
        );"#
        .to_string(),
        r#"CREATE TABLE IF NOT EXISTS ecommerce.orders (
            order_id bigint PRIMARY KEY,
            customer_id bigint,
            order_date timestamp,
            total_amount decimal,
            status text,
            shipping_address text,
            shipping_city text,
            shipping_state text,
            shipping_zip text,
            created_at timestamp,
            updated_at timestamp
        );"#
        .to_string(),
        r#"CREATE TABLE IF NOT EXISTS ecommerce.order_items (
            order_item_id bigint,
            order_id bigint,
            product_id bigint,
            quantity int,
            unit_price decimal,
            total_price decimal,
            created_at timestamp,
            PRIMARY KEY ((order_id), order_item_id)
        );"#
        .to_string(),
    ]
}

pub fn mssql() -> Vec<String> {
    vec![
        "IF DB_ID('ecommerce') IS NULL CREATE DATABASE ecommerce;".to_string(),
        r#"USE ecommerce;
IF OBJECT_ID('dbo.customers', 'U') IS NULL
CREATE TABLE dbo.customers (
    customer_id BIGINT PRIMARY KEY,
    first_name NVARCHAR(50) NOT NULL,
    last_name NVARCHAR(50) NOT NULL,
    email NVARCHAR(100) NOT NULL,
    phone NVARCHAR(20),
    address NVARCHAR(200),
    city NVARCHAR(50),
    state NVARCHAR(50),
    zip_code NVARCHAR(20),
    country NVARCHAR(50),
    created_at DATETIME2 NOT NULL,
    updated_at DATETIME2 NOT NULL
);"#
        .to_string(),
        r#"USE ecommerce;
IF OBJECT_ID('dbo.products', 'U') IS NULL
CREATE TABLE dbo.products (
    product_id BIGINT PRIMARY KEY,
    product_name NVARCHAR(100) NOT NULL,
    category NVARCHAR(50),
    brand NVARCHAR(50),
    price DECIMAL(10,2) NOT NULL,
    cost DECIMAL(10,2),
    stock_quantity INT,
    description NVARCHAR(MAX),
    created_at DATETIME2 NOT NULL,
    updated_at DATETIME2 NOT NULL
);"#
        .to_string(),
        r#"USE ecommerce;
IF OBJECT_ID('dbo.orders', 'U') IS NULL
CREATE TABLE dbo.orders (
    order_id BIGINT PRIMARY KEY,
    customer_id BIGINT NOT NULL REFERENCES dbo.customers(customer_id),
    order_date DATETIME2 NOT NULL,
    total_amount DECIMAL(12,2) NOT NULL,
    status NVARCHAR(20),
    shipping_address NVARCHAR(200),
    shipping_city NVARCHAR(50),
    shipping_state NVARCHAR(50),
    shipping_zip NVARCHAR(20),
    created_at DATETIME2 NOT NULL,
    updated_at DATETIME2 NOT NULL
);"#
        .to_string(),
        r#"USE ecommerce;
IF OBJECT_ID('dbo.order_items', 'U') IS NULL
CREATE TABLE dbo.order_items (
    order_item_id BIGINT PRIMARY KEY,
    order_id BIGINT NOT NULL REFERENCES dbo.orders(order_id),
    product_id BIGINT NOT NULL REFERENCES dbo.products(product_id),
    quantity INT NOT NULL,
    unit_price DECIMAL(10,2) NOT NULL,
    total_price DECIMAL(12,2) NOT NULL,
    created_at DATETIME2 NOT NULL
);"#
        .to_string(),
    ]
}

pub fn clickhouse() -> Vec<String> {
    vec![
        "CREATE DATABASE IF NOT EXISTS ecommerce;".to_string(),
        r#"CREATE TABLE IF NOT EXISTS ecommerce.customers (
            customer_id UInt64,
            first_name String,
            last_name String,
            email String,
            phone String,
            address String,
            city String,
            state String,
            zip_code String,
            country String,
            created_at DateTime,
            updated_at DateTime
        ) ENGINE = MergeTree() ORDER BY customer_id;"#
            .to_string(),
        r#"CREATE TABLE IF NOT EXISTS ecommerce.products (
            product_id UInt64,
            product_name String,
            category String,
            brand String,
            price Decimal(10,2),
            cost Decimal(10,2),
            stock_quantity Int32,
            description String,
            created_at DateTime,
            updated_at DateTime
        ) ENGINE = MergeTree() ORDER BY product_id;"#
            .to_string(),
        r#"CREATE TABLE IF NOT EXISTS ecommerce.orders (
            order_id UInt64,
            customer_id UInt64,
            order_date DateTime,
            total_amount Decimal(12,2),
            status String,
            shipping_address String,
            shipping_city String,
            shipping_state String,
            shipping_zip String,
            created_at DateTime,
            updated_at DateTime
        ) ENGINE = MergeTree() ORDER BY order_id;"#
            .to_string(),
        r#"CREATE TABLE IF NOT EXISTS ecommerce.order_items (
            order_item_id UInt64,
            order_id UInt64,
            product_id UInt64,
            quantity Int32,
            unit_price Decimal(10,2),
            total_price Decimal(12,2),
            created_at DateTime
        ) ENGINE = MergeTree() ORDER BY order_item_id;"#
            .to_string(),
    ]
}

pub fn firebird() -> Vec<String> {
    let guarded_table = |table: &str, create: &str| {
        format!(
            "SET TERM ^ ;\nEXECUTE BLOCK AS BEGIN\nIF (NOT EXISTS(SELECT 1 FROM rdb$relations WHERE rdb$relation_name = '{}')) THEN\nEXECUTE STATEMENT '{}';\nEND^\nSET TERM ; ^\nCOMMIT;",
            table, create
        )
    };
    let guarded_index = |index: &str, create: &str| {
        format!(
            "SET TERM ^ ;\nEXECUTE BLOCK AS BEGIN\nIF (NOT EXISTS(SELECT 1 FROM rdb$indices WHERE rdb$index_name = '{}')) THEN\nEXECUTE STATEMENT '{}';\nEND^\nSET TERM ; ^\nCOMMIT;",
            index, create
        )
    };

    vec![
        guarded_table(
            "CUSTOMERS",
            "CREATE TABLE customers (customer_id BIGINT NOT NULL PRIMARY KEY, first_name VARCHAR(50) NOT NULL, last_name VARCHAR(50) NOT NULL, email VARCHAR(100) NOT NULL, phone VARCHAR(20), address VARCHAR(200), city VARCHAR(50), state VARCHAR(50), zip_code VARCHAR(20), country VARCHAR(50), created_at TIMESTAMP NOT NULL, updated_at TIMESTAMP NOT NULL)",
        ),
        guarded_table(
            "PRODUCTS",
            "CREATE TABLE products (product_id BIGINT NOT NULL PRIMARY KEY, product_name VARCHAR(100) NOT NULL, category VARCHAR(50), brand VARCHAR(50), price DECIMAL(10,2) NOT NULL, cost DECIMAL(10,2), stock_quantity INTEGER, description VARCHAR(500), created_at TIMESTAMP NOT NULL, updated_at TIMESTAMP NOT NULL)",
        ),
        guarded_table(
            "ORDERS",
            "CREATE TABLE orders (order_id BIGINT NOT NULL PRIMARY KEY, customer_id BIGINT NOT NULL REFERENCES customers(customer_id), order_date TIMESTAMP NOT NULL, total_amount DECIMAL(12,2) NOT NULL, status VARCHAR(20), shipping_address VARCHAR(200), shipping_city VARCHAR(50), shipping_state VARCHAR(50), shipping_zip VARCHAR(20), created_at TIMESTAMP NOT NULL, updated_at TIMESTAMP NOT NULL)",
        ),
        guarded_table(
            "ORDER_ITEMS",
            "CREATE TABLE order_items (order_item_id BIGINT NOT NULL PRIMARY KEY, order_id BIGINT NOT NULL REFERENCES orders(order_id), product_id BIGINT NOT NULL REFERENCES products(product_id), quantity INTEGER NOT NULL, unit_price DECIMAL(10,2) NOT NULL, total_price DECIMAL(12,2) NOT NULL, created_at TIMESTAMP NOT NULL)",
        ),
        guarded_index(
            "IDX_ORDERS_CUSTOMER",
            "CREATE INDEX idx_orders_customer ON orders (customer_id)",
        ),
        guarded_index(
            "IDX_ITEMS_ORDER",
            "CREATE INDEX idx_items_order ON order_items (order_id)",
        ),
        guarded_index(
            "IDX_ITEMS_PRODUCT",
            "CREATE INDEX idx_items_product ON order_items (product_id)",
        ),
    ]
}
