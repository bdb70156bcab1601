//! Contact form with client-side validation. Nothing is sent anywhere.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::contact::{CONTACT_THANKS, STATUS_CLEAR_SECS};
use folio_core::ContactForm as ContactInput;
use folio_ui::{Button, ButtonVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormStatus {
    Sent,
    Incomplete(&'static str),
}

impl FormStatus {
    fn class(&self) -> &'static str {
        match self {
            FormStatus::Sent => "form-status is-success",
            FormStatus::Incomplete(_) => "form-status is-error",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            FormStatus::Sent => CONTACT_THANKS,
            FormStatus::Incomplete(message) => message,
        }
    }
}

/// Validate a submission. The visitor's details stay out of the log.
fn submit_status(input: &ContactInput) -> FormStatus {
    match input.validate() {
        Ok(_) => {
            tracing::info!("Contact message accepted");
            FormStatus::Sent
        }
        Err(e) => {
            tracing::debug!(error = %e, "Contact form incomplete");
            FormStatus::Incomplete(e.user_message())
        }
    }
}

#[component]
pub fn ContactForm() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(|| None::<FormStatus>);
    // Bumped on every submit so an older clear timer leaves a newer status alone.
    let mut status_token = use_signal(|| 0u64);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let input = ContactInput {
            name: name(),
            email: email(),
            message: message(),
        };
        let outcome = submit_status(&input);
        if outcome == FormStatus::Sent {
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        }
        status.set(Some(outcome));

        *status_token.write() += 1;
        let token = *status_token.peek();
        spawn(async move {
            gloo::timers::future::sleep(Duration::from_secs(STATUS_CLEAR_SECS)).await;
            if *status_token.peek() == token {
                status.set(None);
            }
        });
    };

    rsx! {
        form {
            class: "contact-form",
            novalidate: true,
            onsubmit: on_submit,

            label {
                "Name"
                input {
                    name: "name",
                    r#type: "text",
                    autocomplete: "name",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
            }
            label {
                "Email"
                input {
                    name: "email",
                    r#type: "email",
                    autocomplete: "email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }
            label {
                "Message"
                textarea {
                    name: "message",
                    value: "{message}",
                    oninput: move |e| message.set(e.value()),
                }
            }

            Button { variant: ButtonVariant::Primary, button_type: "submit".to_string(), "Send" }

            p {
                class: status().map(|s| s.class()).unwrap_or("form-status"),
                role: "status",
                "aria-live": "polite",
                if let Some(status) = status() {
                    "{status.message()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::contact::CONTACT_INCOMPLETE;

    #[test]
    fn status_classes_and_messages() {
        assert_eq!(FormStatus::Sent.message(), CONTACT_THANKS);
        assert_eq!(FormStatus::Sent.class(), "form-status is-success");

        let incomplete = FormStatus::Incomplete(CONTACT_INCOMPLETE);
        assert_eq!(incomplete.message(), "Please fill in all required fields.");
        assert_eq!(incomplete.class(), "form-status is-error");
    }

    #[test]
    fn submit_status_follows_validation() {
        let mut input = ContactInput {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        };
        assert_eq!(submit_status(&input), FormStatus::Sent);

        input.message = "   ".into();
        assert_eq!(
            submit_status(&input),
            FormStatus::Incomplete(CONTACT_INCOMPLETE)
        );
    }
}
