//! Typed clients and page objects for end-to-end testing of the
//! automationexercise.com demo shop.
//!
//! # Overview
//! Resource clients (`ProductsApi`, `UserApi`) turn each remote endpoint into
//! one method returning a normalized, strongly typed response. Requests are
//! executed by an injected `Transport`; `UreqTransport` is provided.
//!
//! # Design
//! - Clients compose an `ApiClient` (transport + base URL) with a fixed
//!   endpoint table. They hold no other state and are `Clone` when the
//!   transport is.
//! - Each operation has a pure `build_*` and `parse_*` half, so request
//!   shapes and response normalization are testable without a network.
//! - Remote business errors (`responseCode` 400/404) are data, not `Err`.
//!   `validate_response_code` is the opt-in check.
//! - `user_data` supplies default and unique account data for tests.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod pages;
pub mod products;
pub mod transport;
pub mod types;
pub mod user;
pub mod user_data;

pub use client::{parse_response, validate_response_code, ApiClient};
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use products::{ProductEndpoints, ProductsApi};
pub use transport::{Transport, UreqTransport};
pub use types::{
    Brand, BrandsResponse, CreateUserResponse, Normalized, Product, ProductsResponse, UserDetail,
    UserDetailsResponse, UserResponse,
};
pub use user::{UserApi, UserEndpoints};
pub use user_data::{generate_unique_email, UserData, UserForm, DEFAULT_PASSWORD, DEFAULT_USER};
