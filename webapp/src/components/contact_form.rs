use chrono::Utc;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use gloo_console::error as console_error;
use gloo_timers::callback::Timeout;

use crate::{Route, common::storage::BrowserStore};
use landing::form::{BANNER_MS, ContactForm, Field, FieldMark, FormConfig, SubmitOutcome, SuccessMode};

#[derive(Clone, PartialEq, Props)]
struct FormFieldProps {
    form: Signal<ContactForm>,
    field: Field,
    label: &'static str,
    id: &'static str,
    #[props(default = "text")]
    kind: &'static str,
    #[props(default)]
    multiline: bool,
    #[props(default)]
    placeholder: &'static str,
}

#[component]
fn FormField(props: FormFieldProps) -> Element {
    let mut form = props.form;
    let field = props.field;

    let (value, mark, error) = {
        let form = form.read();
        (
            form.value(field).to_owned(),
            form.mark(field),
            form.error(field).map(str::to_owned),
        )
    };

    let class = match mark {
        FieldMark::Neutral => "form-input",
        FieldMark::Valid => "form-input field-valid",
        FieldMark::Invalid => "form-input field-invalid",
    };

    rsx! {
        div { class: "form-group",
            label { r#for: props.id, "{props.label}" }
            if props.multiline {
                textarea {
                    id: props.id,
                    class,
                    rows: "5",
                    placeholder: props.placeholder,
                    value: "{value}",
                    oninput: move |evt| form.with_mut(|f| f.set_field(field, evt.value())),
                    onblur: move |_| form.with_mut(|f| f.blur(field)),
                }
            } else {
                input {
                    id: props.id,
                    class,
                    r#type: props.kind,
                    placeholder: props.placeholder,
                    value: "{value}",
                    oninput: move |evt| form.with_mut(|f| f.set_field(field, evt.value())),
                    onblur: move |_| form.with_mut(|f| f.blur(field)),
                }
            }
            if let Some(error) = error {
                span { class: "form-error", "{error}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ContactFormBoxProps {
    config: FormConfig,
}

#[component]
pub fn ContactFormBox(props: ContactFormBoxProps) -> Element {
    let config = props.config;
    let navigator = use_navigator();

    let mut form = use_signal(|| ContactForm::new(config));
    let mut status = use_signal(|| None::<String>);
    let mut banner = use_signal(|| false);
    let mut banner_timer = use_signal(|| None::<Timeout>);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let outcome = form.with_mut(|f| f.submit(&BrowserStore, Utc::now()));

        match outcome {
            SubmitOutcome::Rejected => status.set(None),
            SubmitOutcome::Saved(SuccessMode::Navigate) => {
                status.set(None);
                navigator.push(Route::Submissions {});
            }
            SubmitOutcome::Saved(SuccessMode::InlineBanner) => {
                status.set(None);
                banner.set(true);
                banner_timer.set(Some(Timeout::new(BANNER_MS, move || banner.set(false))));
            }
            SubmitOutcome::StorageFailed(err) => {
                console_error!(format!("Failed to save submission: {err}"));
                status.set(Some("Your message could not be saved. Please try again.".into()));
            }
        }
    };

    rsx! {
        form {
            id: "contactForm",
            class: "contact-form card",
            novalidate: true,
            onsubmit: handle_submit,

            if banner() {
                div { class: "success-banner",
                    i { class: "fa fa-check-circle" }
                    " Thank you! Your message has been sent successfully."
                }
            }

            FormField {
                form,
                field: Field::Name,
                label: "Name",
                id: "name",
                placeholder: "Your name",
            }
            FormField {
                form,
                field: Field::Email,
                label: "Email",
                id: "email",
                kind: "email",
                placeholder: "you@example.com",
            }
            FormField {
                form,
                field: Field::Subject,
                label: "Subject",
                id: "subject",
                placeholder: "What is this about?",
            }
            FormField {
                form,
                field: Field::Message,
                label: "Message",
                id: "message",
                multiline: true,
                placeholder: "Tell us about your project",
            }

            if let Some(status) = status() {
                p { class: "form-status", "{status}" }
            }

            button { class: "btn btn-primary", r#type: "submit", "Send Message" }
        }
    }
}
