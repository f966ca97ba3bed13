//! Carousel Slide Model

use super::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Home page carousel slide
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CarouselSlide {
    pub id: i64,
    pub titulo: String,
    pub subtitulo: String,
    pub imagen_url: String,
    /// Custom link or a product deep-link
    pub link_cta: String,
    pub producto_id: Option<i64>,
    pub orden: i64,
    pub activo: bool,
    /// Vertical focal point of the image, percent
    pub position_y: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create slide payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselSlideCreate {
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub subtitulo: String,
    pub imagen_url: String,
    #[serde(default)]
    pub link_cta: String,
    pub producto_id: Option<i64>,
    #[serde(default)]
    pub orden: i64,
    #[serde(default = "default_true")]
    pub activo: bool,
    #[serde(default = "default_position_y")]
    pub position_y: i64,
}

fn default_true() -> bool {
    true
}

fn default_position_y() -> i64 {
    50
}

/// Update slide payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CarouselSlideUpdate {
    pub titulo: Option<String>,
    pub subtitulo: Option<String>,
    pub imagen_url: Option<String>,
    pub link_cta: Option<String>,
    pub producto_id: Option<i64>,
    pub orden: Option<i64>,
    pub activo: Option<bool>,
    pub position_y: Option<i64>,
}

impl CarouselSlideCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.imagen_url.trim().is_empty() {
            return Err(ValidationError::new("la imagen es requerida"));
        }
        Ok(())
    }
}

impl CarouselSlideUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.imagen_url {
            if url.trim().is_empty() {
                return Err(ValidationError::new("la imagen no puede estar vacía"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_image() {
        let slide: CarouselSlideCreate = serde_json::from_value(serde_json::json!({
            "imagen_url": "/uploads/images/promo.jpg"
        }))
        .unwrap();
        assert!(slide.validate().is_ok());
        assert!(slide.activo);
        assert_eq!(slide.position_y, 50);

        let blank: CarouselSlideCreate =
            serde_json::from_value(serde_json::json!({ "imagen_url": "  " })).unwrap();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn update_allows_omitted_image_but_not_blank() {
        assert!(CarouselSlideUpdate::default().validate().is_ok());
        let update = CarouselSlideUpdate {
            imagen_url: Some("".into()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
