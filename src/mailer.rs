//! Outbound contact-form delivery. Only this module knows about EmailJS.

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::state::contact::ContactPayload;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("request could not be built: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

pub trait EmailSender {
    fn send(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), DeliveryError>>;
}

/// Shared handle to the sender used by the contact form. Equality is by
/// identity so it can sit in component properties.
#[derive(Clone)]
pub struct Mailer(pub Rc<dyn EmailSender>);

impl Mailer {
    pub fn new(sender: impl EmailSender + 'static) -> Self {
        Self(Rc::new(sender))
    }
}

impl Default for Mailer {
    fn default() -> Self {
        Self::new(EmailJs::from_config())
    }
}

impl PartialEq for Mailer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailJs {
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

impl EmailJs {
    pub fn from_config() -> Self {
        Self {
            endpoint: config::emailjs_endpoint().to_string(),
            service_id: config::emailjs_service_id().to_string(),
            template_id: config::emailjs_template_id().to_string(),
            public_key: config::emailjs_public_key().to_string(),
        }
    }

    fn request<'a>(&'a self, payload: &'a ContactPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: payload,
        }
    }
}

impl EmailSender for EmailJs {
    fn send(&self, payload: ContactPayload) -> LocalBoxFuture<'static, Result<(), DeliveryError>> {
        let built = Request::post(&self.endpoint)
            .json(&self.request(&payload))
            .map_err(|e| DeliveryError::Encode(e.to_string()));

        async move {
            let response = built?
                .send()
                .await
                .map_err(|e| DeliveryError::Network(e.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                Err(DeliveryError::Rejected { status, body })
            }
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_emailjs_send_api() {
        let mailer = EmailJs {
            endpoint: "https://example.test/send".into(),
            service_id: "service_1".into(),
            template_id: "template_1".into(),
            public_key: "pk".into(),
        };
        let payload = ContactPayload {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            phone: "".into(),
            message: "Hello".into(),
        };

        let body = serde_json::to_value(mailer.request(&payload)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_1",
                "template_id": "template_1",
                "user_id": "pk",
                "template_params": {
                    "name": "Jane",
                    "email": "jane@x.com",
                    "phone": "",
                    "message": "Hello"
                }
            })
        );
    }

    #[test]
    fn default_config_targets_emailjs() {
        let mailer = EmailJs::from_config();
        assert!(mailer.endpoint.ends_with("/email/send"));
        assert!(!mailer.service_id.is_empty());
    }

    #[test]
    fn rejection_message_includes_status() {
        let err = DeliveryError::Rejected { status: 400, body: "bad template".into() };
        assert_eq!(err.to_string(), "email service rejected the message (400): bad template");
    }
}
