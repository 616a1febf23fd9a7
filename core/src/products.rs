//! Products resource client: catalog, brands and search.
//!
//! Each operation is split into a pure `build_*` producing the request and a
//! pure `parse_*` normalizing the reply; the plain method runs both around
//! one transport round-trip.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{BrandsResponse, ProductsResponse};

/// Paths of the product endpoints, fixed at client construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductEndpoints {
    pub products_list: &'static str,
    pub brands_list: &'static str,
    pub search_product: &'static str,
}

impl Default for ProductEndpoints {
    fn default() -> Self {
        Self {
            products_list: "/api/productsList",
            brands_list: "/api/brandsList",
            search_product: "/api/searchProduct",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductsApi<T> {
    client: ApiClient<T>,
    endpoints: ProductEndpoints,
}

impl<T: Transport> ProductsApi<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self::with_endpoints(transport, base_url, ProductEndpoints::default())
    }

    pub fn with_endpoints(transport: T, base_url: &str, endpoints: ProductEndpoints) -> Self {
        Self {
            client: ApiClient::new(transport, base_url),
            endpoints,
        }
    }

    pub fn build_get_all_products(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.client.url(self.endpoints.products_list))
    }

    pub fn build_get_all_brands(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, self.client.url(self.endpoints.brands_list))
    }

    pub fn build_search_products(&self, term: &str) -> HttpRequest {
        HttpRequest::form(
            HttpMethod::Post,
            self.client.url(self.endpoints.search_product),
            [("search_product", term)],
        )
    }

    /// The search request with no body at all, not even an empty field.
    pub fn build_search_products_without_param(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Post, self.client.url(self.endpoints.search_product))
    }

    pub fn parse_products(&self, response: HttpResponse) -> Result<ProductsResponse, ApiError> {
        self.client.decode(response)
    }

    pub fn parse_brands(&self, response: HttpResponse) -> Result<BrandsResponse, ApiError> {
        self.client.decode(response)
    }

    pub fn get_all_products(&self) -> Result<ProductsResponse, ApiError> {
        let response = self.client.execute(self.build_get_all_products())?;
        self.parse_products(response)
    }

    pub fn get_all_brands(&self) -> Result<BrandsResponse, ApiError> {
        let response = self.client.execute(self.build_get_all_brands())?;
        self.parse_brands(response)
    }

    /// Search the catalog. A remote 400 comes back as a normal response.
    pub fn search_products(&self, term: &str) -> Result<ProductsResponse, ApiError> {
        let response = self.client.execute(self.build_search_products(term))?;
        self.parse_products(response)
    }

    pub fn search_products_without_param(&self) -> Result<ProductsResponse, ApiError> {
        let response = self
            .client
            .execute(self.build_search_products_without_param())?;
        self.parse_products(response)
    }
}
