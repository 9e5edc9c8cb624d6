use yew::prelude::*;

use crate::config::FORM_RELAY_URL;

/// Field names the form relay receives, in form order.
pub const FORM_FIELDS: &[&str] = &["name", "email", "subject", "message"];

/// Plain HTML form posting straight to the relay; the browser handles the
/// response.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    html! {
        <form action={FORM_RELAY_URL} method="POST" class="contact-form">
            <div class="form-row">
                <Field label="Nom">
                    <input name="name" required={true} class="form-input" />
                </Field>
                <Field label="Email">
                    <input type="email" name="email" required={true} class="form-input" />
                </Field>
            </div>
            <Field label="Sujet">
                <input name="subject" class="form-input" />
            </Field>
            <Field label="Message">
                <textarea name="message" rows="6" class="form-input"></textarea>
            </Field>
            <div class="form-actions">
                <button class="button-primary">{"Envoyer"}</button>
            </div>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{props.label.clone()}</span>
            { for props.children.iter() }
        </label>
    }
}
