//! Contact form route handlers.
//!
//! There is no mail backend: a valid submission is logged and answered with
//! a success toast, nothing else. Validation mirrors the cart flow - one
//! error at a time, everything user-correctable.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::models::toast::Toast;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

/// Toast fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub toast: Toast,
}

/// Submit the contact form.
///
/// POST /contact
#[instrument(skip(form), fields(email = %form.email))]
pub async fn submit(Form(form): Form<ContactForm>) -> impl IntoResponse {
    let email = form.email.trim().to_lowercase();

    if form.name.trim().is_empty() || form.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            ToastTemplate {
                toast: Toast::error("Заполните имя и сообщение"),
            },
        );
    }

    if !is_valid_email(&email) {
        return (
            StatusCode::BAD_REQUEST,
            ToastTemplate {
                toast: Toast::error("Укажите корректный email"),
            },
        );
    }

    tracing::info!(
        email = %email,
        phone = %form.phone.as_deref().unwrap_or("").trim(),
        "Contact message received"
    );

    (
        StatusCode::OK,
        ToastTemplate {
            toast: Toast::success("Сообщение отправлено! Мы свяжемся с вами в ближайшее время."),
        },
    )
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.ru"));
        assert!(is_valid_email("a.b@mail.example.com"));

        assert!(!is_valid_email("userexample.ru"));
        assert!(!is_valid_email("@example.ru"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email(""));
    }
}
