use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use secrecy::SecretString;

#[derive(Debug, FromRow, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub favorite_team: Option<String>,
    pub bio: Option<String>,
    pub join_date: DateTime<Utc>,
    pub is_admin: bool,
}

/// What other users get to see. Never carries the password hash.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub favorite_team: Option<String>,
    pub bio: Option<String>,
    pub join_date: DateTime<Utc>,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            favorite_team: user.favorite_team,
            bio: user.bio,
            join_date: user.join_date,
            is_admin: user.is_admin,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub username: String,
    pub favorite_team: Option<String>,
    pub bio: Option<String>,
    pub join_date: DateTime<Utc>,
    pub is_admin: bool,
    pub comment_count: i64,
}

#[derive(Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    #[serde(serialize_with = "serialize_secret_string", deserialize_with = "deserialize_secret_string")]
    pub password: SecretString,
    #[serde(default)]
    pub favorite_team: Option<String>,
}

impl fmt::Display for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username: {}, Email: {}", self.username, self.email)
    }
}

impl RegistrationRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username cannot be empty".to_string());
        }
        if self.username.chars().count() > 100 {
            return Err("Username cannot exceed 100 characters".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err("A valid email address is required".to_string());
        }
        if email.chars().count() > 100 {
            return Err("Email cannot exceed 100 characters".to_string());
        }
        if secrecy::ExposeSecret::expose_secret(&self.password).is_empty() {
            return Err("Password cannot be empty".to_string());
        }
        if let Some(team) = &self.favorite_team {
            if team.chars().count() > 100 {
                return Err("Favorite team cannot exceed 100 characters".to_string());
            }
        }
        Ok(())
    }
}

pub fn serialize_secret_string<S>(_: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str("[REDACTED]")
}

pub fn deserialize_secret_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(SecretString::new(s.into_boxed_str()))
}
