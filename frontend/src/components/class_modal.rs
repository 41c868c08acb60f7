use shared::{ClassDraft, ClassSession, FieldErrors};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use super::field_error;

#[derive(Properties, PartialEq)]
pub struct ClassModalProps {
    pub is_open: bool,
    pub class: Option<ClassSession>,
    pub submitting: bool,
    pub on_submit: Callback<ClassDraft>,
    pub on_close: Callback<()>,
}

/// Schedule or edit one class session. The tutor sets the two one-time
/// attendance codes here; students later quote them back through the
/// sign-in/sign-out forms.
#[function_component(ClassModal)]
pub fn class_modal(props: &ClassModalProps) -> Html {
    let course_id = use_state(String::new);
    let start_time = use_state(String::new);
    let end_time = use_state(String::new);
    let location = use_state(String::new);
    let sign_in_code = use_state(String::new);
    let sign_out_code = use_state(String::new);
    let errors = use_state(FieldErrors::new);

    use_effect_with((props.is_open, props.class.clone()), {
        let course_id = course_id.clone();
        let start_time = start_time.clone();
        let end_time = end_time.clone();
        let location = location.clone();
        let sign_in_code = sign_in_code.clone();
        let sign_out_code = sign_out_code.clone();
        let errors = errors.clone();
        move |(is_open, class): &(bool, Option<ClassSession>)| {
            if *is_open {
                match class {
                    Some(class) => {
                        course_id.set(class.course_id.clone());
                        start_time.set(class.start_time.clone());
                        end_time.set(class.end_time.clone());
                        location.set(class.location.clone().unwrap_or_default());
                    }
                    None => {
                        course_id.set(String::new());
                        start_time.set(String::new());
                        end_time.set(String::new());
                        location.set(String::new());
                    }
                }
                // Codes are never echoed back by the server; editing always
                // requires entering them fresh
                sign_in_code.set(String::new());
                sign_out_code.set(String::new());
                errors.set(FieldErrors::new());
            }
            || ()
        }
    });

    let text_change = |state: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_course_change = text_change(course_id.clone());
    let on_start_change = text_change(start_time.clone());
    let on_end_change = text_change(end_time.clone());
    let on_location_change = text_change(location.clone());
    let on_sign_in_code_change = text_change(sign_in_code.clone());
    let on_sign_out_code_change = text_change(sign_out_code.clone());

    let on_submit = {
        let course_id = course_id.clone();
        let start_time = start_time.clone();
        let end_time = end_time.clone();
        let location = location.clone();
        let sign_in_code = sign_in_code.clone();
        let sign_out_code = sign_out_code.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = ClassDraft {
                course_id: (*course_id).trim().to_string(),
                start_time: (*start_time).trim().to_string(),
                end_time: (*end_time).trim().to_string(),
                location: (*location).trim().to_string(),
                sign_in_code: (*sign_in_code).trim().to_string(),
                sign_out_code: (*sign_out_code).trim().to_string(),
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

    let title = if props.class.is_some() { "Edit Class" } else { "Schedule Class" };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{title}</h3>
                    <form class="modal-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="class-course">{"Course ID"}</label>
                            <input
                                id="class-course"
                                type="text"
                                placeholder="course-1042"
                                value={(*course_id).clone()}
                                onchange={on_course_change}
                                disabled={props.submitting}
                                autofocus=true
                            />
                            {field_error(&errors, "course_id")}
                        </div>

                        <div class="form-group">
                            <label for="class-start">{"Starts"}</label>
                            <input
                                id="class-start"
                                type="text"
                                placeholder="2026-03-02T09:00:00Z"
                                value={(*start_time).clone()}
                                onchange={on_start_change}
                                disabled={props.submitting}
                            />
                            {field_error(&errors, "start_time")}
                        </div>

                        <div class="form-group">
                            <label for="class-end">{"Ends"}</label>
                            <input
                                id="class-end"
                                type="text"
                                placeholder="2026-03-02T10:00:00Z"
                                value={(*end_time).clone()}
                                onchange={on_end_change}
                                disabled={props.submitting}
                            />
                            {field_error(&errors, "end_time")}
                        </div>

                        <div class="form-group">
                            <label for="class-location">{"Location"}</label>
                            <input
                                id="class-location"
                                type="text"
                                placeholder="Room 12 / online"
                                value={(*location).clone()}
                                onchange={on_location_change}
                                disabled={props.submitting}
                            />
                        </div>

                        <div class="form-group">
                            <label for="class-sign-in-code">{"Sign-in Code"}</label>
                            <input
                                id="class-sign-in-code"
                                type="text"
                                placeholder="Code students enter at the start"
                                value={(*sign_in_code).clone()}
                                onchange={on_sign_in_code_change}
                                disabled={props.submitting}
                            />
                            {field_error(&errors, "sign_in_code")}
                        </div>

                        <div class="form-group">
                            <label for="class-sign-out-code">{"Sign-out Code"}</label>
                            <input
                                id="class-sign-out-code"
                                type="text"
                                placeholder="Code students enter at the end"
                                value={(*sign_out_code).clone()}
                                onchange={on_sign_out_code_change}
                                disabled={props.submitting}
                            />
                            {field_error(&errors, "sign_out_code")}
                        </div>

                        <div class="modal-buttons">
                            <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                                {if props.submitting { "Saving..." } else { "Save Class" }}
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
