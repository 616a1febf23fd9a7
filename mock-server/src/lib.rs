//! In-memory stand-in for the automationexercise.com REST API.
//!
//! Every reply is HTTP 200 with a JSON body whose `responseCode` carries the
//! outcome, the way the real site answers. Bodies are read as
//! `application/x-www-form-urlencoded` regardless of the declared content
//! type, and a missing body reads as an empty form.

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

pub const METHOD_NOT_SUPPORTED: &str = "This request method is not supported.";
pub const SEARCH_PARAM_MISSING: &str =
    "Bad request, search_product parameter is missing in POST request.";

type Form = HashMap<String, String>;

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct UserType {
    pub usertype: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Category {
    pub usertype: UserType,
    pub category: String,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: String,
    pub brand: String,
    pub category: Category,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Brand {
    pub id: u64,
    pub brand: String,
}

/// A stored account, serialized in the read-model layout of
/// `getUserDetailByEmail`.
#[derive(Clone, Debug, Serialize)]
pub struct Account {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub title: String,
    pub birth_day: String,
    pub birth_month: String,
    pub birth_year: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub address1: String,
    pub address2: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub zipcode: String,
    #[serde(skip_serializing)]
    pub mobile_number: String,
}

/// Form keys mapped onto the account fields they set.
const ACCOUNT_FIELDS: [&str; 16] = [
    "name",
    "password",
    "title",
    "birth_date",
    "birth_month",
    "birth_year",
    "firstname",
    "lastname",
    "company",
    "address1",
    "address2",
    "country",
    "zipcode",
    "state",
    "city",
    "mobile_number",
];

/// Fields `createAccount` refuses to go without.
const REQUIRED_ON_CREATE: [&str; 11] = [
    "name",
    "email",
    "password",
    "firstname",
    "lastname",
    "address1",
    "country",
    "zipcode",
    "state",
    "city",
    "mobile_number",
];

impl Account {
    fn from_form(id: u64, email: &str, form: &Form) -> Self {
        let mut account = Account {
            id,
            name: String::new(),
            email: email.to_string(),
            password: String::new(),
            title: String::new(),
            birth_day: String::new(),
            birth_month: String::new(),
            birth_year: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            company: String::new(),
            address1: String::new(),
            address2: String::new(),
            country: String::new(),
            state: String::new(),
            city: String::new(),
            zipcode: String::new(),
            mobile_number: String::new(),
        };
        account.apply(form);
        account
    }

    /// Overwrite every field present in `form`. The email never changes.
    fn apply(&mut self, form: &Form) {
        for key in ACCOUNT_FIELDS {
            let Some(value) = form.get(key) else {
                continue;
            };
            let slot = match key {
                "name" => &mut self.name,
                "password" => &mut self.password,
                "title" => &mut self.title,
                "birth_date" => &mut self.birth_day,
                "birth_month" => &mut self.birth_month,
                "birth_year" => &mut self.birth_year,
                "firstname" => &mut self.first_name,
                "lastname" => &mut self.last_name,
                "company" => &mut self.company,
                "address1" => &mut self.address1,
                "address2" => &mut self.address2,
                "country" => &mut self.country,
                "zipcode" => &mut self.zipcode,
                "state" => &mut self.state,
                "city" => &mut self.city,
                "mobile_number" => &mut self.mobile_number,
                _ => continue,
            };
            slot.clone_from(value);
        }
    }
}

/// The JSON envelope of every reply.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub response_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<Brand>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Account>,
}

impl Reply {
    fn code(response_code: u16) -> Self {
        Self {
            response_code,
            message: None,
            products: None,
            brands: None,
            user: None,
        }
    }

    fn message(response_code: u16, message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: Some(message.into()),
            ..Self::code(response_code)
        })
    }
}

#[derive(Debug)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub brands: Vec<Brand>,
}

fn product(id: u64, name: &str, price: u32, brand: &str, usertype: &str, category: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price: format!("Rs. {price}"),
        brand: brand.to_string(),
        category: Category {
            usertype: UserType {
                usertype: usertype.to_string(),
            },
            category: category.to_string(),
        },
    }
}

impl Catalog {
    /// A slice of the real shop's catalog.
    pub fn seeded() -> Self {
        let products = vec![
            product(1, "Blue Top", 500, "Polo", "Women", "Tops"),
            product(2, "Men Tshirt", 400, "H&M", "Men", "Tshirts"),
            product(3, "Sleeveless Dress", 1000, "Madame", "Women", "Dress"),
            product(4, "Stylish Dress", 1500, "Madame", "Women", "Dress"),
            product(5, "Winter Top", 600, "Mast & Harbour", "Women", "Tops"),
            product(6, "Summer White Top", 400, "H&M", "Women", "Tops"),
            product(7, "Madame Top For Women", 1000, "Madame", "Women", "Tops"),
            product(11, "Little Girls Mr. Panda Shirt", 543, "Allen Solly Junior", "Kids", "Tops & Shirts"),
            product(12, "Sleeves Printed Top - White", 499, "Kookie Kids", "Kids", "Tops & Shirts"),
            product(13, "Frozen Tops For Kids", 278, "Babyhug", "Kids", "Tops & Shirts"),
            product(21, "Sleeveless Unicorn Patch Gown - Pink", 1050, "Biba", "Kids", "Dress"),
            product(33, "Soft Stretch Jeans", 799, "Mast & Harbour", "Men", "Jeans"),
        ];
        let brands = ["Polo", "H&M", "Madame", "Mast & Harbour", "Babyhug", "Allen Solly Junior", "Kookie Kids", "Biba"]
            .iter()
            .zip(1..)
            .map(|(brand, id)| Brand {
                id,
                brand: brand.to_string(),
            })
            .collect();
        Self { products, brands }
    }

    /// Case-insensitive match against name, brand and category.
    pub fn search(&self, term: &str) -> Vec<Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.brand.to_lowercase().contains(&needle)
                    || p.category.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

#[derive(Debug, Default)]
struct Accounts {
    next_id: u64,
    by_email: HashMap<String, Account>,
}

#[derive(Clone)]
pub struct AppState {
    accounts: Arc<RwLock<Accounts>>,
    catalog: Arc<Catalog>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(Accounts::default())),
            catalog: Arc::new(Catalog::seeded()),
        }
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/api/productsList", get(list_products).fallback(method_not_supported))
        .route("/api/brandsList", get(list_brands).fallback(method_not_supported))
        .route("/api/searchProduct", post(search_product).fallback(method_not_supported))
        .route("/api/createAccount", post(create_account).fallback(method_not_supported))
        .route("/api/verifyLogin", post(verify_login).fallback(method_not_supported))
        .route("/api/deleteAccount", delete(delete_account).fallback(method_not_supported))
        .route("/api/updateAccount", put(update_account).fallback(method_not_supported))
        .route("/api/getUserDetailByEmail", get(user_detail).fallback(method_not_supported))
        .with_state(AppState::default())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn parse_form(body: &[u8]) -> Form {
    url::form_urlencoded::parse(body).into_owned().collect()
}

/// A present, non-blank form value.
fn param<'a>(form: &'a Form, key: &str) -> Option<&'a str> {
    form.get(key).map(String::as_str).filter(|v| !v.trim().is_empty())
}

async fn method_not_supported() -> Json<Reply> {
    Reply::message(405, METHOD_NOT_SUPPORTED)
}

async fn list_products(State(state): State<AppState>) -> Json<Reply> {
    Json(Reply {
        products: Some(state.catalog.products.clone()),
        ..Reply::code(200)
    })
}

async fn list_brands(State(state): State<AppState>) -> Json<Reply> {
    Json(Reply {
        brands: Some(state.catalog.brands.clone()),
        ..Reply::code(200)
    })
}

async fn search_product(State(state): State<AppState>, body: Bytes) -> Json<Reply> {
    let form = parse_form(&body);
    let Some(term) = param(&form, "search_product") else {
        return Reply::message(400, SEARCH_PARAM_MISSING);
    };
    let products = state.catalog.search(term);
    debug!(term, hits = products.len(), "search");
    Json(Reply {
        products: Some(products),
        ..Reply::code(200)
    })
}

async fn create_account(State(state): State<AppState>, body: Bytes) -> Json<Reply> {
    let form = parse_form(&body);
    if let Some(missing) = REQUIRED_ON_CREATE.iter().find(|key| param(&form, key).is_none()) {
        return Reply::message(
            400,
            format!("Bad request, {missing} parameter is missing in POST request."),
        );
    }
    let email = form["email"].clone();

    let mut accounts = state.accounts.write().await;
    if accounts.by_email.contains_key(&email) {
        return Reply::message(400, "Email already exists!");
    }
    accounts.next_id += 1;
    let account = Account::from_form(accounts.next_id, &email, &form);
    accounts.by_email.insert(email.clone(), account);
    info!(email = %email, "account created");
    Reply::message(201, "User created!")
}

async fn verify_login(State(state): State<AppState>, body: Bytes) -> Json<Reply> {
    let form = parse_form(&body);
    // Blank credentials are looked up like any other; only absence is a 400.
    let (Some(email), Some(password)) = (form.get("email"), form.get("password")) else {
        return Reply::message(
            400,
            "Bad request, email or password parameter is missing in POST request.",
        );
    };
    let accounts = state.accounts.read().await;
    match accounts.by_email.get(email.as_str()) {
        Some(account) if account.password == *password => Reply::message(200, "User exists!"),
        _ => Reply::message(404, "User not found!"),
    }
}

async fn delete_account(State(state): State<AppState>, body: Bytes) -> Json<Reply> {
    let form = parse_form(&body);
    let (Some(email), Some(password)) = (param(&form, "email"), param(&form, "password")) else {
        return Reply::message(
            400,
            "Bad request, email or password parameter is missing in DELETE request.",
        );
    };
    let mut accounts = state.accounts.write().await;
    let known = accounts
        .by_email
        .get(email)
        .is_some_and(|account| account.password == password);
    if !known {
        return Reply::message(404, "Account not found!");
    }
    accounts.by_email.remove(email);
    info!(email, "account deleted");
    Reply::message(200, "Account deleted!")
}

async fn update_account(State(state): State<AppState>, body: Bytes) -> Json<Reply> {
    let form = parse_form(&body);
    let (Some(email), Some(password)) = (param(&form, "email"), param(&form, "password")) else {
        return Reply::message(
            400,
            "Bad request, email or password parameter is missing in PUT request.",
        );
    };
    let mut accounts = state.accounts.write().await;
    match accounts.by_email.get_mut(email) {
        Some(account) if account.password == password => {
            account.apply(&form);
            Reply::message(200, "User updated!")
        }
        _ => Reply::message(404, "Account not found!"),
    }
}

async fn user_detail(State(state): State<AppState>, Query(query): Query<Form>) -> Json<Reply> {
    let Some(email) = param(&query, "email") else {
        return Reply::message(400, "Bad request, email parameter is missing in GET request.");
    };
    let accounts = state.accounts.read().await;
    match accounts.by_email.get(email) {
        Some(account) => Json(Reply {
            user: Some(account.clone()),
            ..Reply::code(200)
        }),
        None => Reply::message(404, "Account not found with this email, try another email!"),
    }
}
