use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::model::Model;
use crate::error::NotesServiceError;

/// Account role. Stored and serialized in SCREAMING_SNAKE_CASE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    PublicUser,
    SalePerson,
    Admin,
    SuperAdmin,
    Developer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PublicUser => "PUBLIC_USER",
            Self::SalePerson => "SALE_PERSON",
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Developer => "DEVELOPER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = NotesServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUBLIC_USER" => Ok(Self::PublicUser),
            "SALE_PERSON" => Ok(Self::SalePerson),
            "ADMIN" => Ok(Self::Admin),
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            "DEVELOPER" => Ok(Self::Developer),
            other => Err(NotesServiceError::UnknownRole(other.to_owned())),
        }
    }
}

/// User account. The password is accepted on input only and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned by the store; never read from the client.
    #[serde(default, skip_deserializing)]
    pub id: Option<i64>,
    #[validate(
        custom(function = not_blank, message = "username is required"),
        length(min = 3, max = 30, message = "username must be between 3 and 30 characters")
    )]
    pub username: String,
    #[validate(
        custom(function = not_blank, message = "email is required"),
        length(min = 3, max = 50, message = "email must be between 3 and 50 characters"),
        email(message = "email is not valid")
    )]
    pub email: String,
    #[serde(skip_serializing)]
    #[validate(
        custom(function = not_blank, message = "password is required"),
        length(min = 8, max = 28, message = "password must be between 8 and 28 characters")
    )]
    pub password: String,
    #[serde(default)]
    pub role: Role,
    #[validate(
        custom(function = not_blank, message = "first name is required"),
        length(min = 3, max = 120, message = "first name must be between 3 and 120 characters")
    )]
    pub first_name: String,
    #[validate(
        custom(function = not_blank, message = "last name is required"),
        length(min = 3, max = 120, message = "last name must be between 3 and 120 characters")
    )]
    pub last_name: String,
}

impl Model for User {
    type Id = i64;
    const NAME: &'static str = "user";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

/// Contact details owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    /// Assigned by the store; never read from the client.
    #[serde(default, skip_deserializing)]
    pub id: Option<i64>,
    #[validate(
        custom(function = not_blank, message = "phone number is required"),
        length(min = 8, max = 12, message = "phone number must be between 8 and 12 characters")
    )]
    pub phone_number: String,
    #[serde(default)]
    #[validate(custom(function = not_in_future, message = "birth date cannot be in the future"))]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(length(min = 3, max = 120, message = "address must be between 3 and 120 characters"))]
    pub address: Option<String>,
    /// Assigned by the composite user save, never by the client.
    #[serde(default, skip_deserializing)]
    pub user_id: Option<i64>,
}

impl Model for UserDetails {
    type Id = i64;
    const NAME: &'static str = "user details";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

/// A note written by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Assigned by the store; never read from the client.
    #[serde(default, skip_deserializing)]
    pub id: Option<i64>,
    #[validate(
        custom(function = not_blank, message = "title is required"),
        length(min = 3, max = 120, message = "title must be between 3 and 120 characters")
    )]
    pub title: String,
    #[validate(
        custom(function = not_blank, message = "content is required"),
        length(min = 3, max = 2400, message = "content must be between 3 and 2400 characters")
    )]
    pub content: String,
    /// Set by the store on insert and never changed afterwards.
    #[serde(default, skip_deserializing)]
    pub creation_date: Option<NaiveDate>,
    #[serde(default)]
    #[validate(required(message = "note has no owning user"))]
    pub user_id: Option<i64>,
}

impl Note {
    /// Update merge: only the title and content of `incoming` are taken.
    pub fn merge(existing: Self, incoming: Self) -> Self {
        Self {
            title: incoming.title,
            content: incoming.content,
            ..existing
        }
    }
}

impl Model for Note {
    type Id = i64;
    const NAME: &'static str = "note";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

pub fn not_in_future(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date > Utc::now().date_naive() {
        return Err(ValidationError::new("past_or_present"));
    }
    Ok(())
}
