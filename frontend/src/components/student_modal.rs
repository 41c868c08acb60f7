use shared::{FieldErrors, Student, StudentDraft};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use super::field_error;

#[derive(Properties, PartialEq)]
pub struct StudentModalProps {
    pub is_open: bool,
    pub student: Option<Student>,
    pub submitting: bool,
    pub on_submit: Callback<StudentDraft>,
    pub on_close: Callback<()>,
}

#[function_component(StudentModal)]
pub fn student_modal(props: &StudentModalProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let grade_level = use_state(String::new);
    let errors = use_state(FieldErrors::new);

    use_effect_with((props.is_open, props.student.clone()), {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let grade_level = grade_level.clone();
        let errors = errors.clone();
        move |(is_open, student): &(bool, Option<Student>)| {
            if *is_open {
                match student {
                    Some(student) => {
                        name.set(student.name.clone());
                        email.set(student.email.clone());
                        phone.set(student.phone.clone());
                        grade_level.set(student.grade_level.clone());
                    }
                    None => {
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        grade_level.set(String::new());
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

    let on_phone_change = {
        let phone = phone.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };

    let on_grade_change = {
        let grade_level = grade_level.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            grade_level.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let grade_level = grade_level.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = StudentDraft {
                name: (*name).trim().to_string(),
                email: (*email).trim().to_string(),
                phone: (*phone).trim().to_string(),
                grade_level: (*grade_level).trim().to_string(),
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

    let title = if props.student.is_some() { "Edit Student" } else { "Add Student" };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{title}</h3>
                    <form class="modal-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="student-name">{"Name"}</label>
                            <input
                                id="student-name"
                                type="text"
                                placeholder="Student's full name"
                                value={(*name).clone()}
                                onchange={on_name_change}
                                disabled={props.submitting}
                                autofocus=true
                            />
                            {field_error(&errors, "name")}
                        </div>

                        <div class="form-group">
                            <label for="student-email">{"Email"}</label>
                            <input
                                id="student-email"
                                type="email"
                                placeholder="student@example.com"
                                value={(*email).clone()}
                                onchange={on_email_change}
                                disabled={props.submitting}
                            />
                            {field_error(&errors, "email")}
                        </div>

                        <div class="form-group">
                            <label for="student-phone">{"Phone"}</label>
                            <input
                                id="student-phone"
                                type="tel"
                                placeholder="Optional"
                                value={(*phone).clone()}
                                onchange={on_phone_change}
                                disabled={props.submitting}
                            />
                        </div>

                        <div class="form-group">
                            <label for="student-grade">{"Grade Level"}</label>
                            <input
                                id="student-grade"
                                type="text"
                                placeholder="9"
                                value={(*grade_level).clone()}
                                onchange={on_grade_change}
                                disabled={props.submitting}
                            />
                        </div>

                        <div class="modal-buttons">
                            <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                                {if props.submitting { "Saving..." } else { "Save Student" }}
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
