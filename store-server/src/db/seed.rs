//! Startup seeding
//!
//! Creates the admin account and the example carousel slides the first
//! time the server runs against an empty database.

use shared::models::{CarouselSlideCreate, User};
use sqlx::SqlitePool;

use super::repository::{self, RepoError, RepoResult};

/// Seed the admin user when the users table is empty.
///
/// The password comes from `ADMIN_PASSWORD` (default `admin123`); the
/// hash cannot live in a migration file, so this runs after migrations.
pub async fn seed_admin_user(pool: &SqlitePool, admin_password: &str) -> RepoResult<()> {
    if repository::user::count(pool).await? > 0 {
        return Ok(());
    }

    let hash = User::hash_password(admin_password)
        .map_err(|e| RepoError::Database(format!("failed to hash admin password: {e}")))?;
    repository::user::create(pool, "admin", &hash).await?;
    tracing::info!("Default admin user created (username: admin)");
    Ok(())
}

/// Seed example carousel slides when the table is empty.
pub async fn seed_carousel_slides(pool: &SqlitePool) -> RepoResult<()> {
    if repository::carousel::count(pool).await? > 0 {
        tracing::debug!("Carousel slides already exist, skipping seed");
        return Ok(());
    }

    let slides = [
        ("Chaquetas para el Hombre Moderno", "Borde Urbano",
         "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=1200&q=80", 1),
        ("Nueva Colección Otoño", "Estilo Urbano",
         "https://images.unsplash.com/photo-1483985988355-763728e1935b?w=1200&q=80", 2),
        ("Zapatillas Deportivas", "Comodidad y Estilo",
         "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=1200&q=80", 3),
    ];

    for (titulo, subtitulo, imagen_url, orden) in slides {
        let slide = CarouselSlideCreate {
            titulo: titulo.to_string(),
            subtitulo: subtitulo.to_string(),
            imagen_url: imagen_url.to_string(),
            link_cta: "/".to_string(),
            producto_id: None,
            orden,
            activo: true,
            position_y: 50,
        };
        let created = repository::carousel::create(pool, slide).await?;
        tracing::info!(id = created.id, titulo = %created.titulo, "Carousel slide seeded");
    }

    Ok(())
}
