use crate::constants::{
    CONTACT_FORM_ID, DELIVERY_ENDPOINT, DELIVERY_PUBLIC_KEY, DELIVERY_SERVICE_ID,
    DELIVERY_TEMPLATE_ID,
};
use crate::dom::ListenerGuard;
use crate::toast;
use gloo_net::http::Request;
use site_core::{ContactForm, SubmitOutcome, ToastKind};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Contact form bound to the DOM; dropping detaches the submit handler.
pub struct ContactWiring {
    _submit: ListenerGuard,
}

#[derive(Clone)]
struct FormFields {
    first_name: web::HtmlInputElement,
    last_name: web::HtmlInputElement,
    email: web::HtmlInputElement,
    phone: web::HtmlInputElement,
    message: web::HtmlTextAreaElement,
    submit: Option<web::HtmlButtonElement>,
}

impl FormFields {
    fn find(document: &web::Document) -> Option<Self> {
        let input = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        };
        Some(Self {
            first_name: input("firstName")?,
            last_name: input("lastName")?,
            email: input("email")?,
            phone: input("phone")?,
            message: document
                .get_element_by_id("message")
                .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())?,
            submit: document
                .get_element_by_id("contact-submit")
                .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok()),
        })
    }

    fn read(&self) -> ContactForm {
        ContactForm {
            first_name: self.first_name.value(),
            last_name: self.last_name.value(),
            email: self.email.value(),
            phone: self.phone.value(),
            message: self.message.value(),
        }
    }

    fn clear(&self) {
        self.first_name.set_value("");
        self.last_name.set_value("");
        self.email.set_value("");
        self.phone.set_value("");
        self.message.set_value("");
    }

    fn set_busy(&self, busy: bool) {
        if let Some(button) = &self.submit {
            button.set_disabled(busy);
            button.set_text_content(Some(if busy { "Submitting..." } else { "Submit Form" }));
        }
    }
}

/// Bind the contact form if the page has one. Submission posts to the
/// email-delivery API; success clears the fields, failure keeps them so
/// the user can retry. Either way a transient toast reports the result.
pub fn wire(document: &web::Document) -> Option<ContactWiring> {
    let form = document.get_element_by_id(CONTACT_FORM_ID)?;
    let fields = FormFields::find(document)?;
    let document = document.clone();

    let submit = ListenerGuard::new(&form, "submit", move |ev| {
        ev.prevent_default();

        let mut model = fields.read();
        if let Err(err) = model.validate() {
            log::warn!("[contact] rejected: {err}");
            toast::show(
                &document,
                ToastKind::Error,
                "Please fill in every field before submitting.",
            );
            return;
        }

        fields.set_busy(true);
        let fields = fields.clone();
        let document = document.clone();
        spawn_local(async move {
            let outcome = deliver(&model).await;
            let notice = model.apply_outcome(outcome);
            if outcome == SubmitOutcome::Sent {
                fields.clear();
            }
            fields.set_busy(false);
            toast::show(&document, notice.kind, notice.message);
        });
    });

    log::info!("[contact] form wired");
    Some(ContactWiring { _submit: submit })
}

async fn deliver(model: &ContactForm) -> SubmitOutcome {
    let payload =
        model.delivery_payload(DELIVERY_SERVICE_ID, DELIVERY_TEMPLATE_ID, DELIVERY_PUBLIC_KEY);
    let request = match Request::post(DELIVERY_ENDPOINT).json(&payload) {
        Ok(request) => request,
        Err(err) => {
            log::error!("[contact] payload encoding failed: {err}");
            return SubmitOutcome::Failed;
        }
    };
    match request.send().await {
        Ok(response) if response.ok() => SubmitOutcome::Sent,
        Ok(response) => {
            log::error!("[contact] delivery rejected: HTTP {}", response.status());
            SubmitOutcome::Failed
        }
        Err(err) => {
            log::error!("[contact] delivery failed: {err}");
            SubmitOutcome::Failed
        }
    }
}
