//! User resource client: account lifecycle and login checks.
//!
//! # Design
//! `create_user` is the only operation that fills in defaults; it also
//! returns the email it used so a test can keep working with the account
//! whatever the remote answered. `update_user` takes a `UserForm`, so a
//! partial update payload cannot be expressed.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::http::{encode_form, HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{CreateUserResponse, UserDetailsResponse, UserResponse};
use crate::user_data::{UserData, UserForm};

/// Paths of the account endpoints, fixed at client construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserEndpoints {
    pub create_account: &'static str,
    pub verify_login: &'static str,
    pub delete_account: &'static str,
    pub update_account: &'static str,
    pub get_user_by_email: &'static str,
}

impl Default for UserEndpoints {
    fn default() -> Self {
        Self {
            create_account: "/api/createAccount",
            verify_login: "/api/verifyLogin",
            delete_account: "/api/deleteAccount",
            update_account: "/api/updateAccount",
            get_user_by_email: "/api/getUserDetailByEmail",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserApi<T> {
    client: ApiClient<T>,
    endpoints: UserEndpoints,
}

impl<T: Transport> UserApi<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self::with_endpoints(transport, base_url, UserEndpoints::default())
    }

    pub fn with_endpoints(transport: T, base_url: &str, endpoints: UserEndpoints) -> Self {
        Self {
            client: ApiClient::new(transport, base_url),
            endpoints,
        }
    }

    pub fn build_create_user(&self, form: &UserForm) -> Result<HttpRequest, ApiError> {
        if form.email.is_empty() {
            return Err(ApiError::MissingField("email"));
        }
        Ok(HttpRequest::form(
            HttpMethod::Post,
            self.client.url(self.endpoints.create_account),
            form.form_fields(),
        ))
    }

    pub fn build_verify_login(&self, email: &str, password: &str) -> HttpRequest {
        HttpRequest::form(
            HttpMethod::Post,
            self.client.url(self.endpoints.verify_login),
            [("email", email), ("password", password)],
        )
    }

    /// Verify-login request with the `email` field left out entirely.
    pub fn build_verify_login_without_email(&self, password: &str) -> HttpRequest {
        HttpRequest::form(
            HttpMethod::Post,
            self.client.url(self.endpoints.verify_login),
            [("password", password)],
        )
    }

    pub fn build_delete_user(&self, email: &str, password: &str) -> HttpRequest {
        HttpRequest::form(
            HttpMethod::Delete,
            self.client.url(self.endpoints.delete_account),
            [("email", email), ("password", password)],
        )
    }

    pub fn build_update_user(&self, form: &UserForm) -> Result<HttpRequest, ApiError> {
        if form.email.is_empty() {
            return Err(ApiError::MissingField("email"));
        }
        Ok(HttpRequest::form(
            HttpMethod::Put,
            self.client.url(self.endpoints.update_account),
            form.form_fields(),
        ))
    }

    pub fn build_get_user_by_email(&self, email: &str) -> HttpRequest {
        let query = encode_form([("email", email)]);
        HttpRequest::bare(
            HttpMethod::Get,
            format!("{}?{query}", self.client.url(self.endpoints.get_user_by_email)),
        )
    }

    pub fn parse_user_response(&self, response: HttpResponse) -> Result<UserResponse, ApiError> {
        self.client.decode(response)
    }

    pub fn parse_user_details(
        &self,
        response: HttpResponse,
    ) -> Result<UserDetailsResponse, ApiError> {
        self.client.decode(response)
    }

    /// Create an account from `partial`, defaulting every unset field.
    ///
    /// Callers check `response_code` themselves; a rejected create is still
    /// `Ok`.
    pub fn create_user(&self, partial: UserData) -> Result<CreateUserResponse, ApiError> {
        let form = partial.fill_missing();
        debug!(email = %form.email, "creating account");
        let response = self.client.execute(self.build_create_user(&form)?)?;
        let UserResponse {
            response_code,
            message,
        } = self.parse_user_response(response)?;
        Ok(CreateUserResponse {
            response_code,
            message,
            email: form.email,
        })
    }

    pub fn verify_login(&self, email: &str, password: &str) -> Result<UserResponse, ApiError> {
        let response = self.client.execute(self.build_verify_login(email, password))?;
        self.parse_user_response(response)
    }

    pub fn verify_login_without_email(&self, password: &str) -> Result<UserResponse, ApiError> {
        let response = self
            .client
            .execute(self.build_verify_login_without_email(password))?;
        self.parse_user_response(response)
    }

    pub fn delete_user(&self, email: &str, password: &str) -> Result<UserResponse, ApiError> {
        let response = self.client.execute(self.build_delete_user(email, password))?;
        self.parse_user_response(response)
    }

    pub fn update_user(&self, form: &UserForm) -> Result<UserResponse, ApiError> {
        let response = self.client.execute(self.build_update_user(form)?)?;
        self.parse_user_response(response)
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<UserDetailsResponse, ApiError> {
        let response = self.client.execute(self.build_get_user_by_email(email))?;
        self.parse_user_details(response)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::user_data::DEFAULT_PASSWORD;

    /// Replies with a fixed body and remembers what it was asked to send.
    struct Recorder {
        reply: &'static str,
        sent: RefCell<Vec<HttpRequest>>,
    }

    impl Recorder {
        fn replying(reply: &'static str) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Recorder {
        fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sent.borrow_mut().push(request);
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: self.reply.to_string(),
            })
        }
    }

    fn form_of(req: &HttpRequest) -> Vec<(String, String)> {
        url::form_urlencoded::parse(req.body.as_deref().unwrap().as_bytes())
            .into_owned()
            .collect()
    }

    #[test]
    fn build_create_user_refuses_empty_email() {
        let recorder = Recorder::replying("{}");
        let api = UserApi::new(&recorder, "http://localhost:3000");
        let err = api.build_create_user(&UserForm::with_email("")).unwrap_err();
        assert!(matches!(err, ApiError::MissingField("email")));
        assert!(recorder.sent.borrow().is_empty());
    }

    #[test]
    fn build_create_user_posts_every_field() {
        let recorder = Recorder::replying("{}");
        let api = UserApi::new(&recorder, "http://localhost:3000");
        let req = api
            .build_create_user(&UserForm::with_email("a@example.com"))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/api/createAccount");
        let form = form_of(&req);
        assert_eq!(form.len(), 17);
        assert_eq!(form[1], ("email".to_string(), "a@example.com".to_string()));
    }

    #[test]
    fn build_verify_login_sends_exactly_two_fields() {
        let recorder = Recorder::replying("{}");
        let api = UserApi::new(&recorder, "http://localhost:3000");
        let req = api.build_verify_login("a@example.com", "secret");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/api/verifyLogin");
        assert_eq!(
            form_of(&req),
            vec![
                ("email".to_string(), "a@example.com".to_string()),
                ("password".to_string(), "secret".to_string()),
            ]
        );
    }

    #[test]
    fn build_verify_login_without_email_omits_field() {
        let recorder = Recorder::replying("{}");
        let api = UserApi::new(&recorder, "http://localhost:3000");
        let req = api.build_verify_login_without_email(DEFAULT_PASSWORD);
        assert_eq!(form_of(&req), vec![("password".to_string(), "test1234".to_string())]);
    }

    #[test]
    fn build_delete_user_uses_delete_with_form() {
        let recorder = Recorder::replying("{}");
        let api = UserApi::new(&recorder, "http://localhost:3000");
        let req = api.build_delete_user("a@example.com", "pw");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/api/deleteAccount");
        assert_eq!(form_of(&req).len(), 2);
    }

    #[test]
    fn build_get_user_by_email_encodes_query() {
        let recorder = Recorder::replying("{}");
        let api = UserApi::new(&recorder, "http://localhost:3000");
        let req = api.build_get_user_by_email("a+b@example.com");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.path,
            "http://localhost:3000/api/getUserDetailByEmail?email=a%2Bb%40example.com"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn update_rejects_empty_email() {
        let recorder = Recorder::replying("{}");
        let api = UserApi::new(&recorder, "http://localhost:3000");
        let mut form = UserForm::with_email("a@example.com");
        form.email.clear();
        let err = api.update_user(&form).unwrap_err();
        assert!(matches!(err, ApiError::MissingField("email")));
        assert!(recorder.sent.borrow().is_empty());
    }

    #[test]
    fn build_update_user_sends_every_field() {
        let recorder = Recorder::replying("{}");
        let api = UserApi::new(&recorder, "http://localhost:3000");
        let req = api.build_update_user(&UserForm::with_email("a@example.com")).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(form_of(&req).len(), 17);
    }

    #[test]
    fn create_user_generates_email_and_returns_it() {
        let recorder = Recorder::replying(r#"{"responseCode":201,"message":"User created!"}"#);
        let api = UserApi::new(&recorder, "http://localhost:3000");
        let resp = api.create_user(UserData::default()).unwrap();
        assert_eq!(resp.response_code, 201);
        assert_eq!(resp.message, "User created!");
        assert!(resp.email.starts_with("test-"));

        let sent = recorder.sent.borrow();
        let fields = form_of(&sent[0]);
        assert!(fields.contains(&("email".to_string(), resp.email.clone())));
        assert!(fields.contains(&("name".to_string(), "Mark Flint".to_string())));
    }

    #[test]
    fn create_user_returns_email_even_when_rejected() {
        let recorder = Recorder::replying(r#"{"responseCode":400,"message":"Email already exists!"}"#);
        let api = UserApi::new(&recorder, "http://localhost:3000");
        let resp = api
            .create_user(UserData {
                email: Some("taken@example.com".to_string()),
                ..UserData::default()
            })
            .unwrap();
        assert_eq!(resp.response_code, 400);
        assert_eq!(resp.email, "taken@example.com");
    }

    #[test]
    fn parse_user_details_found() {
        let recorder = Recorder::replying(
            r#"{"responseCode":200,"user":{"id":3,"name":"Mark Flint","email":"m@example.com","first_name":"Mark"}}"#,
        );
        let api = UserApi::new(&recorder, "http://localhost:3000");
        let resp = api.get_user_by_email("m@example.com").unwrap();
        assert_eq!(resp.response_code, 200);
        assert_eq!(resp.user.unwrap().first_name, "Mark");
    }

    #[test]
    fn parse_user_response_not_found() {
        let recorder = Recorder::replying(r#"{"responseCode":404,"message":"User not found!"}"#);
        let api = UserApi::new(&recorder, "http://localhost:3000");
        let resp = api.verify_login("nobody@example.com", "wrong").unwrap();
        assert_eq!(resp.response_code, 404);
        assert_eq!(resp.message, "User not found!");
    }
}
