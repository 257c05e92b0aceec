use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::domain::messages::message::MAX_MESSAGE_LEN;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex")
});

const MIN_PASSWORD_LEN: usize = 6;
const REQUIRED: &str = "This field is required.";

/// Validation errors keyed by form field name.
#[derive(Debug, Default, Clone)]
pub struct FormErrors(BTreeMap<&'static str, Vec<String>>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    fn required(&mut self, field: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.add(field, REQUIRED);
            false
        } else {
            true
        }
    }

    fn email(&mut self, field: &'static str, value: &str) {
        if self.required(field, value) && !EMAIL_RE.is_match(value.trim()) {
            self.add(field, "Invalid email address.");
        }
    }

    fn min_len(&mut self, field: &'static str, value: &str, min: usize) {
        if value.chars().count() < min {
            self.add(
                field,
                format!("Field must be at least {} characters long.", min),
            );
        }
    }

    fn max_len(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.add(field, format!("Field cannot be longer than {} characters.", max));
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub image_url: String,
    pub csrf_token: String,
}

impl SignupForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors.required("username", &self.username);
        errors.email("email", &self.email);
        errors.min_len("password", &self.password, MIN_PASSWORD_LEN);
        errors.max_len("image_url", &self.image_url, 255);
        errors
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub csrf_token: String,
}

impl LoginForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors.required("username", &self.username);
        errors.min_len("password", &self.password, MIN_PASSWORD_LEN);
        errors
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct MessageForm {
    pub text: String,
    pub csrf_token: String,
}

impl MessageForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        if errors.required("text", &self.text) {
            errors.max_len("text", self.text.trim(), MAX_MESSAGE_LEN);
        }
        errors
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub image_url: String,
    pub header_image_url: String,
    pub bio: String,
    pub location: String,
    pub password: String,
    pub csrf_token: String,
}

impl ProfileForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        errors.required("username", &self.username);
        errors.email("email", &self.email);
        errors.required("password", &self.password);
        errors.max_len("image_url", &self.image_url, 255);
        errors.max_len("header_image_url", &self.header_image_url, 255);
        errors
    }
}

/// Body of the small button forms (follow, like, delete, logout).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ActionForm {
    pub csrf_token: String,
    pub url: Option<String>,
}

/// Only same-site absolute paths are honored as post-action redirect targets.
pub fn local_redirect_target(url: Option<&str>) -> Option<String> {
    let url = url?.trim();
    let local = url.starts_with('/')
        && !url.starts_with("//")
        && !url.starts_with("/\\")
        && !url.chars().any(|c| c.is_control());
    local.then(|| url.to_string())
}
