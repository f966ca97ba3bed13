//! Order Workflow
//!
//! Order mutations that must keep the catalog stock consistent:
//! creation deducts, cancellation and deletion restore. The rules live
//! here instead of the repository so handlers stay thin and the stock
//! invariants are in one place.

use shared::models::{Order, OrderCreate, OrderFieldsUpdate, OrderStatus};
use sqlx::SqlitePool;

use crate::db::repository::{self, order::NewOrder, order::NewOrderItem};
use crate::utils::{AppError, AppResult};

/// Create an order: validate, snapshot product data, deduct stock.
///
/// Orders created directly as `Cancelado` never touch stock. Stock
/// deduction failures after the order row exists are logged and left
/// for the admin to reconcile rather than failing the whole request.
pub async fn create_order(pool: &SqlitePool, payload: OrderCreate) -> AppResult<Order> {
    payload.validate()?;

    let mut items = Vec::with_capacity(payload.items.len());
    let mut total_amount = 0.0;

    for line in &payload.items {
        let product = repository::product::find_by_id(pool, line.product_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("producto {} no encontrado", line.product_id))
            })?;

        if product.stock < line.quantity {
            return Err(AppError::InsufficientStock(format!(
                "stock insuficiente para producto {} (Stock: {}, Solicitado: {})",
                product.nombre, product.stock, line.quantity
            )));
        }

        let unit_price = line.unit_price.unwrap_or(product.precio);
        let subtotal = unit_price * line.quantity as f64;
        total_amount += subtotal;

        items.push(NewOrderItem {
            product_id: line.product_id,
            product_name: product.nombre,
            quantity: line.quantity,
            unit_price,
            subtotal,
        });
    }

    let order = repository::order::create(
        pool,
        NewOrder {
            customer_name: payload.customer_name,
            customer_email: payload.customer_email,
            customer_phone: payload.customer_phone,
            customer_address: payload.customer_address,
            total_amount,
            status: payload.status,
            notes: payload.notes,
            items,
        },
    )
    .await?;

    if order.status != OrderStatus::Cancelado {
        for item in &order.items {
            if let Some(product_id) = item.product_id {
                if let Err(e) =
                    repository::product::reduce_stock(pool, product_id, item.quantity).await
                {
                    tracing::error!(target: "orders", order_id = order.id, product_id, error = %e,
                        "failed to reduce stock for new order");
                }
            }
        }
    }

    tracing::info!(target: "orders", order_id = order.id, total = order.total_amount,
        status = %order.status, "order created");
    Ok(order)
}

/// Change an order's status.
///
/// Moving into `Cancelado` restores the stock of every line exactly
/// once; any later transition out of `Cancelado` does NOT deduct again,
/// so repeated cancel/reactivate cycles cannot drift the stock.
pub async fn set_status(pool: &SqlitePool, id: i64, status: OrderStatus) -> AppResult<()> {
    let order = repository::order::get(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("pedido {id} no encontrado")))?;

    if status == OrderStatus::Cancelado && order.status != OrderStatus::Cancelado {
        restore_stock(pool, &order).await;
    }

    repository::order::update_status(pool, id, status).await?;
    tracing::info!(target: "orders", order_id = id, from = %order.status, to = %status,
        "order status updated");
    Ok(())
}

/// Update contact fields and notes. Totals and stock are untouched.
pub async fn update_order_fields(
    pool: &SqlitePool,
    id: i64,
    data: &OrderFieldsUpdate,
) -> AppResult<()> {
    repository::order::get(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("pedido {id} no encontrado")))?;
    repository::order::update_fields(pool, id, data).await?;
    Ok(())
}

/// Delete an order, restoring stock first unless it was already
/// cancelled (cancellation restored it).
pub async fn delete_order(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let order = repository::order::get(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("pedido {id} no encontrado")))?;

    if order.status != OrderStatus::Cancelado {
        restore_stock(pool, &order).await;
    }

    repository::order::delete(pool, id).await?;
    tracing::info!(target: "orders", order_id = id, "order deleted");
    Ok(())
}

/// Put every line's quantity back on the shelf. A line whose product
/// was deleted is skipped; failures are logged, not fatal.
async fn restore_stock(pool: &SqlitePool, order: &Order) {
    for item in &order.items {
        let Some(product_id) = item.product_id else {
            continue;
        };
        if let Err(e) = repository::product::increase_stock(pool, product_id, item.quantity).await {
            tracing::error!(target: "orders", order_id = order.id, product_id, error = %e,
                "failed to restore stock");
        }
    }
}
