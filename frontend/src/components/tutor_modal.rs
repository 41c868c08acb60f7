use shared::{FieldErrors, Tutor, TutorDraft};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use super::field_error;

#[derive(Properties, PartialEq)]
pub struct TutorModalProps {
    pub is_open: bool,
    pub tutor: Option<Tutor>,
    pub submitting: bool,
    pub on_submit: Callback<TutorDraft>,
    pub on_close: Callback<()>,
}

#[function_component(TutorModal)]
pub fn tutor_modal(props: &TutorModalProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(String::new);
    let errors = use_state(FieldErrors::new);

    use_effect_with((props.is_open, props.tutor.clone()), {
        let name = name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let errors = errors.clone();
        move |(is_open, tutor): &(bool, Option<Tutor>)| {
            if *is_open {
                match tutor {
                    Some(tutor) => {
                        name.set(tutor.name.clone());
                        email.set(tutor.email.clone());
                        subject.set(tutor.subject.clone());
                    }
                    None => {
                        name.set(String::new());
                        email.set(String::new());
                        subject.set(String::new());
                    }
                }
                errors.set(FieldErrors::new());
            }
            || ()
        }
    });

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_subject_change = {
        let subject = subject.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            subject.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = TutorDraft {
                name: (*name).trim().to_string(),
                email: (*email).trim().to_string(),
                subject: (*subject).trim().to_string(),
            };
            let next_errors = draft.validate();
            if !next_errors.is_empty() {
                errors.set(next_errors);
                return;
            }
            errors.set(FieldErrors::new());
            on_submit.emit(draft);
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let title = if props.tutor.is_some() { "Edit Tutor" } else { "Add Tutor" };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{title}</h3>
                    <form class="modal-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="tutor-name">{"Name"}</label>
                            <input
                                id="tutor-name"
                                type="text"
                                placeholder="Tutor's full name"
                                value={(*name).clone()}
                                onchange={on_name_change}
                                disabled={props.submitting}
                                autofocus=true
                            />
                            {field_error(&errors, "name")}
                        </div>

                        <div class="form-group">
                            <label for="tutor-email">{"Email"}</label>
                            <input
                                id="tutor-email"
                                type="email"
                                placeholder="tutor@example.com"
                                value={(*email).clone()}
                                onchange={on_email_change}
                                disabled={props.submitting}
                            />
                            {field_error(&errors, "email")}
                        </div>

                        <div class="form-group">
                            <label for="tutor-subject">{"Subject"}</label>
                            <input
                                id="tutor-subject"
                                type="text"
                                placeholder="Math"
                                value={(*subject).clone()}
                                onchange={on_subject_change}
                                disabled={props.submitting}
                            />
                            {field_error(&errors, "subject")}
                        </div>

                        <div class="modal-buttons">
                            <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                                {if props.submitting { "Saving..." } else { "Save Tutor" }}
                            </button>
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={on_cancel}
                                disabled={props.submitting}
                            >
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
