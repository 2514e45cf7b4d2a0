use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field is empty: {0}")]
    MissingField(&'static str),
}

/// The five fields the contact page collects. Field values are kept
/// verbatim; trimming only happens for the emptiness check so a submission
/// of pure whitespace does not count as filled in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        for (name, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(name));
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Map the form onto the delivery provider's fixed template.
    pub fn delivery_payload<'a>(
        &'a self,
        service_id: &'a str,
        template_id: &'a str,
        public_key: &'a str,
    ) -> DeliveryPayload<'a> {
        DeliveryPayload {
            service_id,
            template_id,
            user_id: public_key,
            template_params: TemplateParams {
                first_name: &self.first_name,
                last_name: &self.last_name,
                email: &self.email,
                phone: &self.phone,
                message: &self.message,
            },
        }
    }

    /// Fold a submission result back into the form: success wipes the
    /// fields, failure keeps them so the user can retry without retyping.
    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) -> Toast {
        match outcome {
            SubmitOutcome::Sent => {
                self.clear();
                Toast {
                    kind: ToastKind::Success,
                    message: "Thank you — your message was sent! We will get back to you soon.",
                }
            }
            SubmitOutcome::Failed => Toast {
                kind: ToastKind::Error,
                message: "There was an error sending your message. Please try again later.",
            },
        }
    }
}

/// Wire shape of the email-delivery API request body.
#[derive(Debug, Serialize)]
pub struct DeliveryPayload<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
pub struct TemplateParams<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: &'static str,
}
