use std::rc::Rc;

use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::mailer::EmailSender;
use crate::notify::{Notice, Notifier};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form control name, also the key used in the delivery payload.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Phone => "Your Phone",
            Field::Message => "Your Message",
        }
    }
}

/// What gets handed to the email service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("missing required fields: {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

fn join_fields(fields: &[Field]) -> String {
    fields.iter().map(|field| field.name()).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a submission is already in flight")]
    InFlight,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }

    /// Required fields are checked exactly as typed; whitespace counts as content.
    pub fn validate(&self) -> Result<ContactPayload, ValidationError> {
        let missing: Vec<Field> = Field::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }
        Ok(ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactMsg {
    Update(Field, String),
    Delivered,
    DeliveryFailed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub pending: bool,
}

impl ContactFormState {
    /// Validates the form and marks it pending. Only one delivery may be in
    /// flight at a time.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, SubmitError> {
        if self.pending {
            return Err(SubmitError::InFlight);
        }
        let payload = self.fields.validate()?;
        self.pending = true;
        Ok(payload)
    }

    pub fn apply(&mut self, msg: ContactMsg) -> bool {
        match msg {
            ContactMsg::Update(field, value) => {
                let slot = self.fields.slot(field);
                if *slot == value {
                    return false;
                }
                *slot = value;
                true
            }
            ContactMsg::Delivered => {
                self.fields = ContactFields::default();
                self.pending = false;
                true
            }
            ContactMsg::DeliveryFailed => {
                self.pending = false;
                true
            }
        }
    }
}

/// Sends one message, tells the visitor how it went, and returns the
/// completion message for the form.
pub async fn deliver(
    sender: Rc<dyn EmailSender>,
    notifier: Rc<dyn Notifier>,
    payload: ContactPayload,
) -> ContactMsg {
    match sender.send(payload).await {
        Ok(()) => {
            info!("Contact message sent");
            notifier.notify(Notice::Sent);
            ContactMsg::Delivered
        }
        Err(e) => {
            warn!("Contact message failed: {}", e);
            notifier.notify(Notice::Failed);
            ContactMsg::DeliveryFailed
        }
    }
}
