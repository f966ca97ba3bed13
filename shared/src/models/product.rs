//! Product Model

use super::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Product entity (producto del catálogo)
///
/// The array/map fields are stored as JSON text in SQLite; the server
/// crate's row type handles the (de)serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    pub categoria: String,
    pub genero: String,
    pub temporada: String,
    pub precio: f64,
    pub precio_lista: f64,
    pub stock: i64,
    pub stock_by_size: HashMap<String, i64>,
    pub tallas: Vec<String>,
    pub colores: Vec<String>,
    pub imagenes: Vec<String>,
    pub activo: bool,
    pub destacado: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    pub categoria: String,
    #[serde(default = "default_genero")]
    pub genero: String,
    #[serde(default)]
    pub temporada: String,
    pub precio: f64,
    #[serde(default)]
    pub precio_lista: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub stock_by_size: HashMap<String, i64>,
    #[serde(default)]
    pub tallas: Vec<String>,
    #[serde(default)]
    pub colores: Vec<String>,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
    #[serde(default)]
    pub destacado: bool,
}

fn default_genero() -> String {
    "unisex".to_string()
}

fn default_true() -> bool {
    true
}

/// Full update payload (PUT)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    pub categoria: String,
    #[serde(default = "default_genero")]
    pub genero: String,
    #[serde(default)]
    pub temporada: String,
    pub precio: f64,
    #[serde(default)]
    pub precio_lista: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub stock_by_size: HashMap<String, i64>,
    #[serde(default)]
    pub tallas: Vec<String>,
    #[serde(default)]
    pub colores: Vec<String>,
    #[serde(default)]
    pub imagenes: Vec<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
    #[serde(default)]
    pub destacado: bool,
}

/// Partial update payload (PATCH), each field optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductPatch {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub categoria: Option<String>,
    pub genero: Option<String>,
    pub temporada: Option<String>,
    pub precio: Option<f64>,
    pub precio_lista: Option<f64>,
    pub stock: Option<i64>,
    pub stock_by_size: Option<HashMap<String, i64>>,
    pub tallas: Option<Vec<String>>,
    pub colores: Option<Vec<String>>,
    pub imagenes: Option<Vec<String>>,
    pub activo: Option<bool>,
    pub destacado: Option<bool>,
}

const MAX_IMAGES: usize = 4;

fn validate_price(precio: f64) -> Result<(), ValidationError> {
    if precio <= 0.0 {
        return Err(ValidationError::new("el precio debe ser mayor a 0"));
    }
    Ok(())
}

fn validate_images(imagenes: &[String]) -> Result<(), ValidationError> {
    if imagenes.len() > MAX_IMAGES {
        return Err(ValidationError::new(
            "no se permiten más de 4 imágenes por producto",
        ));
    }
    Ok(())
}

impl ProductCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.nombre.trim().is_empty() {
            return Err(ValidationError::new("el nombre es requerido"));
        }
        if self.categoria.trim().is_empty() {
            return Err(ValidationError::new("la categoría es requerida"));
        }
        validate_price(self.precio)?;
        validate_images(&self.imagenes)
    }
}

impl ProductUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.nombre.trim().is_empty() {
            return Err(ValidationError::new("el nombre no puede estar vacío"));
        }
        if self.categoria.trim().is_empty() {
            return Err(ValidationError::new("la categoría no puede estar vacía"));
        }
        validate_price(self.precio)?;
        validate_images(&self.imagenes)
    }
}

impl ProductPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(nombre) = &self.nombre {
            if nombre.trim().is_empty() {
                return Err(ValidationError::new("el nombre no puede estar vacío"));
            }
        }
        if let Some(categoria) = &self.categoria {
            if categoria.trim().is_empty() {
                return Err(ValidationError::new("la categoría no puede estar vacía"));
            }
        }
        if let Some(precio) = self.precio {
            validate_price(precio)?;
        }
        if let Some(imagenes) = &self.imagenes {
            validate_images(imagenes)?;
        }
        if let Some(stock) = self.stock {
            if stock < 0 {
                return Err(ValidationError::new("el stock no puede ser negativo"));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.descripcion.is_none()
            && self.categoria.is_none()
            && self.genero.is_none()
            && self.temporada.is_none()
            && self.precio.is_none()
            && self.precio_lista.is_none()
            && self.stock.is_none()
            && self.stock_by_size.is_none()
            && self.tallas.is_none()
            && self.colores.is_none()
            && self.imagenes.is_none()
            && self.activo.is_none()
            && self.destacado.is_none()
    }
}
