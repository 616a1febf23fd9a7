//! Test data for account endpoints.
//!
//! # Design
//! `UserData` is what a test writes: only the fields it cares about.
//! `UserForm` is what goes on the wire: every field present. The only way
//! from one to the other is `fill_missing`, which names each field
//! explicitly so a new field cannot be silently dropped from the merge.

use chrono::Utc;
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Password of every account created from the defaults.
pub const DEFAULT_PASSWORD: &str = "test1234";

/// Default values for every account field except `email`.
#[derive(Debug, Clone, Copy)]
pub struct UserDefaults {
    pub name: &'static str,
    pub password: &'static str,
    pub title: &'static str,
    pub birth_date: &'static str,
    pub birth_month: &'static str,
    pub birth_year: &'static str,
    pub firstname: &'static str,
    pub lastname: &'static str,
    pub company: &'static str,
    pub address1: &'static str,
    pub address2: &'static str,
    pub country: &'static str,
    pub zipcode: &'static str,
    pub state: &'static str,
    pub city: &'static str,
    pub mobile_number: &'static str,
}

pub const DEFAULT_USER: UserDefaults = UserDefaults {
    name: "Mark Flint",
    password: DEFAULT_PASSWORD,
    title: "Mr",
    birth_date: "01",
    birth_month: "01",
    birth_year: "1980",
    firstname: "Mark",
    lastname: "Flint",
    company: "testOrg",
    address1: "main st.",
    address2: "apt 1",
    country: "USA",
    zipcode: "10001",
    state: "NY",
    city: "NYC",
    mobile_number: "2122345678",
};

/// `test-<unix millis>-<6 base36 chars>@example.com`.
///
/// Unique enough for sequential runs in one process; not a security token.
pub fn generate_unique_email() -> String {
    let timestamp = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..6)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect();
    format!("test-{timestamp}-{suffix}@example.com")
}

/// A partial account record. Unset fields take `DEFAULT_USER` values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub title: Option<String>,
    pub birth_date: Option<String>,
    pub birth_month: Option<String>,
    pub birth_year: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub country: Option<String>,
    pub zipcode: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub mobile_number: Option<String>,
}

impl UserData {
    /// Populate every unset field. An absent or empty email is generated.
    pub fn fill_missing(self) -> UserForm {
        let d = DEFAULT_USER;
        let or = |value: Option<String>, default: &str| value.unwrap_or_else(|| default.to_string());

        UserForm {
            email: self
                .email
                .filter(|e| !e.is_empty())
                .unwrap_or_else(generate_unique_email),
            name: or(self.name, d.name),
            password: or(self.password, d.password),
            title: or(self.title, d.title),
            birth_date: or(self.birth_date, d.birth_date),
            birth_month: or(self.birth_month, d.birth_month),
            birth_year: or(self.birth_year, d.birth_year),
            firstname: or(self.firstname, d.firstname),
            lastname: or(self.lastname, d.lastname),
            company: or(self.company, d.company),
            address1: or(self.address1, d.address1),
            address2: or(self.address2, d.address2),
            country: or(self.country, d.country),
            zipcode: or(self.zipcode, d.zipcode),
            state: or(self.state, d.state),
            city: or(self.city, d.city),
            mobile_number: or(self.mobile_number, d.mobile_number),
        }
    }
}

/// A complete account record, the body of create and update requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub title: String,
    pub birth_date: String,
    pub birth_month: String,
    pub birth_year: String,
    pub firstname: String,
    pub lastname: String,
    pub company: String,
    pub address1: String,
    pub address2: String,
    pub country: String,
    pub zipcode: String,
    pub state: String,
    pub city: String,
    pub mobile_number: String,
}

impl UserForm {
    /// Defaults with the given email.
    pub fn with_email(email: &str) -> Self {
        UserData {
            email: Some(email.to_string()),
            ..UserData::default()
        }
        .fill_missing()
    }

    /// Form fields in the order the remote documents them.
    pub fn form_fields(&self) -> [(&'static str, &str); 17] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
            ("title", self.title.as_str()),
            ("birth_date", self.birth_date.as_str()),
            ("birth_month", self.birth_month.as_str()),
            ("birth_year", self.birth_year.as_str()),
            ("firstname", self.firstname.as_str()),
            ("lastname", self.lastname.as_str()),
            ("company", self.company.as_str()),
            ("address1", self.address1.as_str()),
            ("address2", self.address2.as_str()),
            ("country", self.country.as_str()),
            ("zipcode", self.zipcode.as_str()),
            ("state", self.state.as_str()),
            ("city", self.city.as_str()),
            ("mobile_number", self.mobile_number.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn email_has_expected_shape() {
        let email = generate_unique_email();
        let (local, domain) = email.split_once('@').unwrap();
        assert_eq!(domain, "example.com");
        let parts: Vec<&str> = local.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "test");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 6);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn consecutive_emails_differ() {
        let emails: HashSet<String> = (0..100).map(|_| generate_unique_email()).collect();
        assert_eq!(emails.len(), 100);
    }

    #[test]
    fn empty_record_is_fully_defaulted() {
        let form = UserData::default().fill_missing();
        assert_eq!(form.name, "Mark Flint");
        assert_eq!(form.password, DEFAULT_PASSWORD);
        assert_eq!(form.mobile_number, "2122345678");
        assert!(form.email.starts_with("test-"));
        assert!(form.form_fields().iter().all(|(_, v)| !v.is_empty()));
    }

    #[test]
    fn provided_fields_win_over_defaults() {
        let form = UserData {
            name: Some("Jane Smith".to_string()),
            title: Some("Mrs".to_string()),
            city: Some("Boston".to_string()),
            email: Some("jane@example.com".to_string()),
            ..UserData::default()
        }
        .fill_missing();
        assert_eq!(form.name, "Jane Smith");
        assert_eq!(form.title, "Mrs");
        assert_eq!(form.city, "Boston");
        assert_eq!(form.email, "jane@example.com");
        assert_eq!(form.state, "NY");
    }

    #[test]
    fn empty_email_is_replaced() {
        let form = UserData {
            email: Some(String::new()),
            ..UserData::default()
        }
        .fill_missing();
        assert!(form.email.ends_with("@example.com"));
    }

    #[test]
    fn form_fields_cover_every_field_once() {
        let form = UserForm::with_email("a@example.com");
        let keys: HashSet<&str> = form.form_fields().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), 17);
        assert!(keys.contains("birth_date"));
        assert!(keys.contains("mobile_number"));
    }
}
