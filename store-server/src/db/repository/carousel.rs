//! Carousel Slide Repository

use super::{RepoError, RepoResult};
use shared::models::{CarouselSlide, CarouselSlideCreate, CarouselSlideUpdate};
use shared::util::now;
use sqlx::SqlitePool;

const SLIDE_COLUMNS: &str = "id, titulo, subtitulo, imagen_url, link_cta, producto_id, orden, \
     activo, position_y, created_at, updated_at";

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM carousel_slides")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// Active slides in display order, for the public storefront.
pub async fn list_active(pool: &SqlitePool) -> RepoResult<Vec<CarouselSlide>> {
    let slides = sqlx::query_as::<_, CarouselSlide>(&format!(
        "SELECT {SLIDE_COLUMNS} FROM carousel_slides WHERE activo = 1 ORDER BY orden ASC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(slides)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<CarouselSlide>> {
    let slide = sqlx::query_as::<_, CarouselSlide>(&format!(
        "SELECT {SLIDE_COLUMNS} FROM carousel_slides WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(slide)
}

pub async fn create(pool: &SqlitePool, data: CarouselSlideCreate) -> RepoResult<CarouselSlide> {
    let ts = now();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO carousel_slides (titulo, subtitulo, imagen_url, link_cta, producto_id, \
         orden, activo, position_y, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.titulo)
    .bind(&data.subtitulo)
    .bind(&data.imagen_url)
    .bind(&data.link_cta)
    .bind(data.producto_id)
    .bind(data.orden)
    .bind(data.activo)
    .bind(data.position_y)
    .bind(ts)
    .bind(ts)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create carousel slide".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: CarouselSlideUpdate,
) -> RepoResult<CarouselSlide> {
    let rows = sqlx::query(
        "UPDATE carousel_slides SET \
         titulo = COALESCE(?, titulo), \
         subtitulo = COALESCE(?, subtitulo), \
         imagen_url = COALESCE(?, imagen_url), \
         link_cta = COALESCE(?, link_cta), \
         producto_id = COALESCE(?, producto_id), \
         orden = COALESCE(?, orden), \
         activo = COALESCE(?, activo), \
         position_y = COALESCE(?, position_y), \
         updated_at = ? \
         WHERE id = ?",
    )
    .bind(&data.titulo)
    .bind(&data.subtitulo)
    .bind(&data.imagen_url)
    .bind(&data.link_cta)
    .bind(data.producto_id)
    .bind(data.orden)
    .bind(data.activo)
    .bind(data.position_y)
    .bind(now())
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("slide {id} no encontrado")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("slide {id} no encontrado")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM carousel_slides WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("slide {id} no encontrado")));
    }
    Ok(())
}
