//! Order Repository
//!
//! Header + line items across two tables. Creation is transactional so
//! an order never appears without its lines.

use super::{RepoError, RepoResult};
use chrono::{DateTime, Utc};
use shared::models::{Order, OrderFieldsUpdate, OrderItem, OrderStatus, OrderSummary};
use shared::util::now;
use sqlx::SqlitePool;

/// Fully-resolved order ready for insertion. Snapshots and totals are
/// computed by the workflow layer before it gets here.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub notes: String,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub subtotal: f64,
}

/// List filters and pagination
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    customer_address: String,
    total_amount: f64,
    status: String,
    notes: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: i64,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    total_amount: f64,
    status: String,
    created_at: DateTime<Utc>,
}

fn parse_status(raw: &str) -> RepoResult<OrderStatus> {
    OrderStatus::parse(raw).map_err(|e| RepoError::Database(e.to_string()))
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> RepoResult<Order> {
        Ok(Order {
            id: self.id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            customer_address: self.customer_address,
            total_amount: self.total_amount,
            status: parse_status(&self.status)?,
            notes: self.notes,
            items,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

pub async fn create(pool: &SqlitePool, order: NewOrder) -> RepoResult<Order> {
    let ts = now();
    let mut tx = pool.begin().await?;

    let order_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders (customer_name, customer_email, customer_phone, customer_address, \
         total_amount, status, notes, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&order.customer_name)
    .bind(&order.customer_email)
    .bind(&order.customer_phone)
    .bind(&order.customer_address)
    .bind(order.total_amount)
    .bind(order.status.as_str())
    .bind(&order.notes)
    .bind(ts)
    .bind(ts)
    .fetch_one(&mut *tx)
    .await?;

    for item in &order.items {
        sqlx::query(
            "INSERT INTO order_items (order_id, product_id, product_name, quantity, \
             unit_price, subtotal) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(order_id)
        .bind(item.product_id)
        .bind(&item.product_name)
        .bind(item.quantity)
        .bind(item.unit_price)
        .bind(item.subtotal)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    get(pool, order_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let row = sqlx::query_as::<_, OrderRow>(
        "SELECT id, customer_name, customer_email, customer_phone, customer_address, \
         total_amount, status, notes, created_at, updated_at FROM orders WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    let items = items_for(pool, id).await?;
    Ok(Some(row.into_order(items)?))
}

async fn items_for(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderItem>> {
    let items = sqlx::query_as::<_, OrderItem>(
        "SELECT id, order_id, product_id, product_name, quantity, unit_price, subtotal \
         FROM order_items WHERE order_id = ? ORDER BY id ASC",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// Paginated order list, newest first. Items are not loaded here.
pub async fn list(pool: &SqlitePool, filter: &OrderFilter) -> RepoResult<(Vec<OrderSummary>, i64)> {
    let mut sql = String::from("FROM orders WHERE 1=1");
    let mut args: Vec<String> = Vec::new();

    if let Some(status) = filter.status {
        sql.push_str(" AND status = ?");
        args.push(status.as_str().to_string());
    }

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        sql.push_str(" AND (customer_name LIKE ? OR customer_email LIKE ? OR id LIKE ?)");
        let term = format!("%{search}%");
        args.push(term.clone());
        args.push(term.clone());
        args.push(term);
    }

    let count_sql = format!("SELECT COUNT(*) {sql}");
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    for arg in &args {
        count_query = count_query.bind(arg);
    }
    let total = count_query.fetch_one(pool).await?;

    let page_sql = format!(
        "SELECT id, customer_name, customer_email, customer_phone, total_amount, status, \
         created_at {sql} ORDER BY created_at DESC LIMIT ? OFFSET ?"
    );
    let mut page_query = sqlx::query_as::<_, SummaryRow>(&page_sql);
    for arg in &args {
        page_query = page_query.bind(arg);
    }
    let rows = page_query
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(pool)
        .await?;

    let mut summaries = Vec::with_capacity(rows.len());
    for row in rows {
        summaries.push(OrderSummary {
            id: row.id,
            customer_name: row.customer_name,
            customer_email: row.customer_email,
            customer_phone: row.customer_phone,
            total_amount: row.total_amount,
            status: parse_status(&row.status)?,
            created_at: row.created_at,
        });
    }

    Ok((summaries, total))
}

pub async fn update_status(pool: &SqlitePool, id: i64, status: OrderStatus) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE orders SET status = ?, updated_at = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(now())
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("pedido {id} no encontrado")));
    }
    Ok(())
}

/// Contact/notes update. Omitted fields keep their stored value.
pub async fn update_fields(
    pool: &SqlitePool,
    id: i64,
    data: &OrderFieldsUpdate,
) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE orders SET \
         customer_name = COALESCE(?, customer_name), \
         customer_email = COALESCE(?, customer_email), \
         customer_phone = COALESCE(?, customer_phone), \
         customer_address = COALESCE(?, customer_address), \
         notes = COALESCE(?, notes), \
         updated_at = ? \
         WHERE id = ?",
    )
    .bind(&data.customer_name)
    .bind(&data.customer_email)
    .bind(&data.customer_phone)
    .bind(&data.customer_address)
    .bind(&data.notes)
    .bind(now())
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("pedido {id} no encontrado")));
    }
    Ok(())
}

/// Delete an order; line items go with it via ON DELETE CASCADE.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("pedido {id} no encontrado")));
    }
    Ok(())
}
