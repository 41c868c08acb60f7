pub mod attendance;
pub mod class_modal;
pub mod classes;
pub mod confirm_delete_modal;
pub mod course_modal;
pub mod courses;
pub mod dashboard;
pub mod header;
pub mod pagination;
pub mod search_box;
pub mod student_modal;
pub mod students;
pub mod toast;
pub mod tutor_modal;
pub mod tutors;

use shared::FieldErrors;
use yew::prelude::*;

/// Inline validation message rendered under a form input.
pub(crate) fn field_error(errors: &FieldErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <div class="field-error">{message}</div> },
        None => html! {},
    }
}
