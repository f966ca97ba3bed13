//! Product Repository
//!
//! The catalog store. Array-valued columns (`tallas`, `colores`,
//! `imagenes`, `stock_by_size`) live as JSON text in SQLite and are
//! (de)serialized at the row boundary.

use super::{RepoError, RepoResult};
use chrono::{DateTime, Utc};
use shared::models::{Product, ProductCreate, ProductPatch, ProductUpdate};
use shared::util::now;
use sqlx::SqlitePool;
use std::collections::HashMap;

const PRODUCT_COLUMNS: &str = "id, nombre, descripcion, categoria, genero, temporada, precio, \
     precio_lista, stock, stock_by_size, tallas, colores, imagenes, activo, destacado, \
     created_at, updated_at";

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    nombre: String,
    descripcion: Option<String>,
    categoria: String,
    genero: Option<String>,
    temporada: Option<String>,
    precio: f64,
    precio_lista: Option<f64>,
    stock: i64,
    stock_by_size: Option<String>,
    tallas: Option<String>,
    colores: Option<String>,
    imagenes: Option<String>,
    activo: bool,
    destacado: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn decode_list(raw: Option<String>) -> Vec<String> {
    raw.filter(|s| !s.is_empty())
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

fn decode_map(raw: Option<String>) -> HashMap<String, i64> {
    raw.filter(|s| !s.is_empty())
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

fn encode_json<T: serde::Serialize>(value: &T, empty: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| empty.to_string())
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            nombre: row.nombre,
            descripcion: row.descripcion.unwrap_or_default(),
            categoria: row.categoria,
            genero: row.genero.unwrap_or_default(),
            temporada: row.temporada.unwrap_or_default(),
            precio: row.precio,
            precio_lista: row.precio_lista.unwrap_or_default(),
            stock: row.stock,
            stock_by_size: decode_map(row.stock_by_size),
            tallas: decode_list(row.tallas),
            colores: decode_list(row.colores),
            imagenes: decode_list(row.imagenes),
            activo: row.activo,
            destacado: row.destacado,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Catalog list filters and pagination
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub categories: Vec<String>,
    pub genders: Vec<String>,
    pub sizes: Vec<String>,
    pub temporadas: Vec<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

/// Build the shared WHERE clause and its bind values for `query`.
fn build_filter(q: &ProductQuery) -> (String, Vec<String>) {
    let mut sql = String::from("FROM products WHERE 1=1");
    let mut args: Vec<String> = Vec::new();

    if !q.categories.is_empty() {
        sql.push_str(&format!(
            " AND LOWER(categoria) IN ({})",
            placeholders(q.categories.len())
        ));
        args.extend(q.categories.iter().map(|c| c.to_lowercase()));
    }

    if !q.genders.is_empty() {
        sql.push_str(&format!(
            " AND LOWER(genero) IN ({})",
            placeholders(q.genders.len())
        ));
        args.extend(q.genders.iter().map(|g| g.to_lowercase()));
    }

    if !q.sizes.is_empty() {
        // tallas is a JSON array; membership via the quoted-element pattern
        let clauses = vec!["tallas LIKE ?"; q.sizes.len()].join(" OR ");
        sql.push_str(&format!(" AND ({clauses})"));
        args.extend(q.sizes.iter().map(|s| format!("%\"{s}\"%")));
    }

    if !q.temporadas.is_empty() {
        sql.push_str(&format!(
            " AND LOWER(temporada) IN ({})",
            placeholders(q.temporadas.len())
        ));
        args.extend(q.temporadas.iter().map(|t| t.to_lowercase()));
    }

    if let Some(search) = q.search.as_deref().filter(|s| !s.is_empty()) {
        sql.push_str(" AND (LOWER(nombre) LIKE ? OR LOWER(descripcion) LIKE ?)");
        let term = format!("%{}%", search.to_lowercase());
        args.push(term.clone());
        args.push(term);
    }

    (sql, args)
}

fn order_by(sort: Option<&str>) -> &'static str {
    match sort {
        Some("price_asc") => "precio ASC",
        Some("price_desc") => "precio DESC",
        _ => "created_at DESC",
    }
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let row = sqlx::query_as::<_, ProductRow>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Product::from))
}

pub async fn create(pool: &SqlitePool, data: ProductCreate) -> RepoResult<Product> {
    let ts = now();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO products (nombre, descripcion, categoria, genero, temporada, precio, \
         precio_lista, stock, stock_by_size, tallas, colores, imagenes, activo, destacado, \
         created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.nombre)
    .bind(&data.descripcion)
    .bind(&data.categoria)
    .bind(&data.genero)
    .bind(&data.temporada)
    .bind(data.precio)
    .bind(data.precio_lista)
    .bind(data.stock)
    .bind(encode_json(&data.stock_by_size, "{}"))
    .bind(encode_json(&data.tallas, "[]"))
    .bind(encode_json(&data.colores, "[]"))
    .bind(encode_json(&data.imagenes, "[]"))
    .bind(data.activo)
    .bind(data.destacado)
    .bind(ts)
    .bind(ts)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ProductUpdate) -> RepoResult<Product> {
    let rows = sqlx::query(
        "UPDATE products SET nombre = ?, descripcion = ?, categoria = ?, genero = ?, \
         temporada = ?, precio = ?, precio_lista = ?, stock = ?, stock_by_size = ?, \
         tallas = ?, colores = ?, imagenes = ?, activo = ?, destacado = ?, updated_at = ? \
         WHERE id = ?",
    )
    .bind(&data.nombre)
    .bind(&data.descripcion)
    .bind(&data.categoria)
    .bind(&data.genero)
    .bind(&data.temporada)
    .bind(data.precio)
    .bind(data.precio_lista)
    .bind(data.stock)
    .bind(encode_json(&data.stock_by_size, "{}"))
    .bind(encode_json(&data.tallas, "[]"))
    .bind(encode_json(&data.colores, "[]"))
    .bind(encode_json(&data.imagenes, "[]"))
    .bind(data.activo)
    .bind(data.destacado)
    .bind(now())
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("producto {id} no encontrado")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("producto {id} no encontrado")))
}

pub async fn partial_update(pool: &SqlitePool, id: i64, data: ProductPatch) -> RepoResult<Product> {
    if data.is_empty() {
        return Err(RepoError::Validation(
            "no hay campos para actualizar".into(),
        ));
    }

    let rows = sqlx::query(
        "UPDATE products SET \
         nombre = COALESCE(?, nombre), \
         descripcion = COALESCE(?, descripcion), \
         categoria = COALESCE(?, categoria), \
         genero = COALESCE(?, genero), \
         temporada = COALESCE(?, temporada), \
         precio = COALESCE(?, precio), \
         precio_lista = COALESCE(?, precio_lista), \
         stock = COALESCE(?, stock), \
         stock_by_size = COALESCE(?, stock_by_size), \
         tallas = COALESCE(?, tallas), \
         colores = COALESCE(?, colores), \
         imagenes = COALESCE(?, imagenes), \
         activo = COALESCE(?, activo), \
         destacado = COALESCE(?, destacado), \
         updated_at = ? \
         WHERE id = ?",
    )
    .bind(&data.nombre)
    .bind(&data.descripcion)
    .bind(&data.categoria)
    .bind(&data.genero)
    .bind(&data.temporada)
    .bind(data.precio)
    .bind(data.precio_lista)
    .bind(data.stock)
    .bind(data.stock_by_size.as_ref().map(|m| encode_json(m, "{}")))
    .bind(data.tallas.as_ref().map(|v| encode_json(v, "[]")))
    .bind(data.colores.as_ref().map(|v| encode_json(v, "[]")))
    .bind(data.imagenes.as_ref().map(|v| encode_json(v, "[]")))
    .bind(data.activo)
    .bind(data.destacado)
    .bind(now())
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("producto {id} no encontrado")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("producto {id} no encontrado")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("producto {id} no encontrado")));
    }
    Ok(())
}

pub async fn bulk_delete(pool: &SqlitePool, ids: &[i64]) -> RepoResult<u64> {
    if ids.is_empty() {
        return Ok(0);
    }

    let sql = format!(
        "DELETE FROM products WHERE id IN ({})",
        placeholders(ids.len())
    );
    let mut query = sqlx::query(&sql);
    for id in ids {
        query = query.bind(id);
    }
    let rows = query.execute(pool).await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(
            "no se encontraron productos para eliminar".into(),
        ));
    }
    Ok(rows.rows_affected())
}

/// Atomically deduct stock; the `stock >= ?` guard makes over-selling
/// impossible even with concurrent orders.
pub async fn reduce_stock(pool: &SqlitePool, id: i64, quantity: i64) -> RepoResult<()> {
    let rows = sqlx::query(
        "UPDATE products SET stock = stock - ?, updated_at = ? WHERE id = ? AND stock >= ?",
    )
    .bind(quantity)
    .bind(now())
    .bind(id)
    .bind(quantity)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::InsufficientStock(format!(
            "stock insuficiente o producto no encontrado para ID {id}"
        )));
    }
    Ok(())
}

/// Atomically restore stock (order cancelled or deleted).
pub async fn increase_stock(pool: &SqlitePool, id: i64, quantity: i64) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE products SET stock = stock + ?, updated_at = ? WHERE id = ?")
        .bind(quantity)
        .bind(now())
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "producto {id} no encontrado"
        )));
    }
    Ok(())
}

/// Filtered, sorted, paginated catalog listing. Returns the page and
/// the total row count before pagination.
pub async fn query(pool: &SqlitePool, q: &ProductQuery) -> RepoResult<(Vec<Product>, i64)> {
    let (filter, args) = build_filter(q);

    let count_sql = format!("SELECT COUNT(*) {filter}");
    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    for arg in &args {
        count_query = count_query.bind(arg);
    }
    let total = count_query.fetch_one(pool).await?;

    let page_sql = format!(
        "SELECT {PRODUCT_COLUMNS} {filter} ORDER BY {} LIMIT ? OFFSET ?",
        order_by(q.sort.as_deref())
    );
    let mut page_query = sqlx::query_as::<_, ProductRow>(&page_sql);
    for arg in &args {
        page_query = page_query.bind(arg);
    }
    let rows = page_query
        .bind(q.limit)
        .bind(q.offset)
        .fetch_all(pool)
        .await?;

    Ok((rows.into_iter().map(Product::from).collect(), total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_builds_placeholders_and_lowercases() {
        let q = ProductQuery {
            categories: vec!["Remeras".into(), "Buzos".into()],
            sizes: vec!["S".into(), "M".into()],
            search: Some("Nike".into()),
            ..Default::default()
        };
        let (sql, args) = build_filter(&q);
        assert!(sql.contains("LOWER(categoria) IN (?, ?)"));
        assert!(sql.contains("tallas LIKE ? OR tallas LIKE ?"));
        assert!(sql.contains("LOWER(nombre) LIKE ?"));
        assert_eq!(
            args,
            vec![
                "remeras", "buzos", "%\"S\"%", "%\"M\"%", "%nike%", "%nike%"
            ]
        );
    }

    #[test]
    fn sort_mapping() {
        assert_eq!(order_by(Some("price_asc")), "precio ASC");
        assert_eq!(order_by(Some("price_desc")), "precio DESC");
        assert_eq!(order_by(Some("newest")), "created_at DESC");
        assert_eq!(order_by(None), "created_at DESC");
        assert_eq!(order_by(Some("garbage")), "created_at DESC");
    }

    #[test]
    fn json_decode_tolerates_null_and_garbage() {
        assert!(decode_list(None).is_empty());
        assert!(decode_list(Some(String::new())).is_empty());
        assert!(decode_list(Some("not-json".into())).is_empty());
        assert_eq!(
            decode_list(Some("[\"S\",\"M\"]".into())),
            vec!["S".to_string(), "M".to_string()]
        );
        assert_eq!(decode_map(Some("{\"S\":3}".into())).get("S"), Some(&3));
    }
}
