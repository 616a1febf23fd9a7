//! Normalized response shapes for the shop API.
//!
//! # Design
//! The remote answers every call with HTTP 200 and a JSON object whose
//! `responseCode` carries the real outcome. Each endpoint gets its own
//! result type, decoded strictly at the boundary: a missing `responseCode`
//! or a payload of the wrong shape is a schema error, not a silently empty
//! field. Payload fields stay `Option` because error replies omit them.

use serde::{Deserialize, Serialize};

/// Common view over every normalized response.
pub trait Normalized {
    fn response_code(&self) -> u16;

    fn message(&self) -> Option<&str>;

    /// Opt-in code check, see `crate::client::validate_response_code`.
    fn ensure_code(&self, expected: u16) -> Result<&Self, crate::ApiError>
    where
        Self: Sized,
    {
        crate::client::validate_response_code(self, expected)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserType {
    pub usertype: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductCategory {
    pub usertype: UserType,
    pub category: String,
}

/// A catalog entry. `price` is a display string such as `"Rs. 500"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: String,
    pub brand: String,
    pub category: ProductCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    pub id: u64,
    pub brand: String,
}

/// Account details as returned by `getUserDetailByEmail`.
///
/// Field names follow the remote's read model, which differs from the
/// create/update form (`birth_day` vs `birth_date`, `first_name` vs
/// `firstname`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDetail {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub birth_day: String,
    #[serde(default)]
    pub birth_month: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    pub response_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BrandsResponse {
    pub response_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<Brand>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Outcome of verify/delete/update calls: always a code and a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub response_code: u16,
    pub message: String,
}

/// Outcome of `createAccount` plus the email the account was created with.
///
/// `email` is filled locally, the remote does not echo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserResponse {
    pub response_code: u16,
    pub message: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsResponse {
    pub response_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDetail>,
}

impl Normalized for ProductsResponse {
    fn response_code(&self) -> u16 {
        self.response_code
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Normalized for BrandsResponse {
    fn response_code(&self) -> u16 {
        self.response_code
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Normalized for UserResponse {
    fn response_code(&self) -> u16 {
        self.response_code
    }

    fn message(&self) -> Option<&str> {
        Some(&self.message)
    }
}

impl Normalized for CreateUserResponse {
    fn response_code(&self) -> u16 {
        self.response_code
    }

    fn message(&self) -> Option<&str> {
        Some(&self.message)
    }
}

impl Normalized for UserDetailsResponse {
    fn response_code(&self) -> u16 {
        self.response_code
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
