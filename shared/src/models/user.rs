//! User Model

use super::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Administrator account. A single `admin` row is seeded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    pub fn validate_new_password(password: &str) -> Result<(), ValidationError> {
        if password.len() < 6 {
            return Err(ValidationError::new(
                "la contraseña debe tener al menos 6 caracteres",
            ));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), ValidationError> {
        let trimmed = email.trim();
        let valid = trimmed.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains(' ')
                && !local.contains(' ')
        });
        if !valid {
            return Err(ValidationError::new("el formato del email es inválido"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = User::hash_password("admin123").unwrap();
        let user = User {
            id: 1,
            username: "admin".into(),
            email: None,
            password_hash: hash,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert!(user.verify_password("admin123").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }

    #[test]
    fn password_hash_never_serialized() {
        let user = User {
            id: 1,
            username: "admin".into(),
            email: Some("admin@tienda.com".into()),
            password_hash: "secret".into(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "admin");
    }

    #[test]
    fn email_format() {
        assert!(User::validate_email("admin@tienda.com").is_ok());
        assert!(User::validate_email("no-at-sign").is_err());
        assert!(User::validate_email("a@b").is_err());
        assert!(User::validate_email("a b@c.com").is_err());
    }

    #[test]
    fn password_minimum_length() {
        assert!(User::validate_new_password("12345").is_err());
        assert!(User::validate_new_password("123456").is_ok());
    }
}
