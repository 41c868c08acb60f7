use shared::{Course, CourseDraft, FieldErrors};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use super::field_error;

#[derive(Properties, PartialEq)]
pub struct CourseModalProps {
    pub is_open: bool,
    /// `Some` = edit, `None` = create.
    pub course: Option<Course>,
    pub submitting: bool,
    pub on_submit: Callback<CourseDraft>,
    pub on_close: Callback<()>,
}

#[function_component(CourseModal)]
pub fn course_modal(props: &CourseModalProps) -> Html {
    let name = use_state(String::new);
    let subject = use_state(String::new);
    let description = use_state(String::new);
    let price = use_state(String::new);
    let errors = use_state(FieldErrors::new);

    // Seed the fields each time the modal opens
    use_effect_with((props.is_open, props.course.clone()), {
        let name = name.clone();
        let subject = subject.clone();
        let description = description.clone();
        let price = price.clone();
        let errors = errors.clone();
        move |(is_open, course): &(bool, Option<Course>)| {
            if *is_open {
                match course {
                    Some(course) => {
                        name.set(course.name.clone());
                        subject.set(course.subject.clone());
                        description.set(course.description.clone());
                        price.set(course.price_per_hour.to_string());
                    }
                    None => {
                        name.set(String::new());
                        subject.set(String::new());
                        description.set(String::new());
                        price.set(String::new());
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

    let on_subject_change = {
        let subject = subject.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            subject.set(input.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_price_change = {
        let price = price.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            price.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let subject = subject.clone();
        let description = description.clone();
        let price = price.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next_errors = FieldErrors::new();
            let price_value = match (*price).trim().parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    next_errors.add("price_per_hour", "Hourly rate must be a number");
                    0.0
                }
            };

            let draft = CourseDraft {
                name: (*name).trim().to_string(),
                subject: (*subject).trim().to_string(),
                description: (*description).trim().to_string(),
                price_per_hour: price_value,
            };
            next_errors.merge(draft.validate());

            // Validation failures stay local; nothing goes on the wire
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

    let title = if props.course.is_some() { "Edit Course" } else { "Add Course" };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{title}</h3>
                    <form class="modal-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="course-name">{"Course Name"}</label>
                            <input
                                id="course-name"
                                type="text"
                                placeholder="Algebra II"
                                value={(*name).clone()}
                                onchange={on_name_change}
                                disabled={props.submitting}
                                autofocus=true
                            />
                            {field_error(&errors, "name")}
                        </div>

                        <div class="form-group">
                            <label for="course-subject">{"Subject"}</label>
                            <input
                                id="course-subject"
                                type="text"
                                placeholder="Math"
                                value={(*subject).clone()}
                                onchange={on_subject_change}
                                disabled={props.submitting}
                            />
                            {field_error(&errors, "subject")}
                        </div>

                        <div class="form-group">
                            <label for="course-description">{"Description"}</label>
                            <textarea
                                id="course-description"
                                placeholder="What this course covers"
                                value={(*description).clone()}
                                onchange={on_description_change}
                                disabled={props.submitting}
                            />
                        </div>

                        <div class="form-group">
                            <label for="course-price">{"Hourly Rate"}</label>
                            <input
                                id="course-price"
                                type="number"
                                step="0.01"
                                min="0.01"
                                placeholder="40.00"
                                value={(*price).clone()}
                                onchange={on_price_change}
                                disabled={props.submitting}
                            />
                            {field_error(&errors, "price_per_hour")}
                        </div>

                        <div class="modal-buttons">
                            <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                                {if props.submitting { "Saving..." } else { "Save Course" }}
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
