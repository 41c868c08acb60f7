use shared::{Course, CourseDraft, ResourceQuery, UserSession, SEARCH_DEBOUNCE_MS};
use yew::prelude::*;

use crate::components::confirm_delete_modal::ConfirmDeleteModal;
use crate::components::course_modal::CourseModal;
use crate::components::pagination::Pagination;
use crate::components::search_box::SearchBox;
use crate::hooks::use_debounced_search::use_debounced_search;
use crate::hooks::use_resource_list::use_resource_list;
use crate::services::api::ApiClient;
use crate::services::notify::Notifier;

#[derive(Properties, PartialEq)]
pub struct CoursesScreenProps {
    pub api_client: ApiClient,
    pub session: UserSession,
    pub notifier: Notifier,
}

#[function_component(CoursesScreen)]
pub fn courses_screen(props: &CoursesScreenProps) -> Html {
    let modal_open = use_state(|| false);
    let editing = use_state(|| Option::<Course>::None);
    let deleting = use_state(|| Option::<Course>::None);

    let close_modals = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        let deleting = deleting.clone();
        Callback::from(move |_| {
            modal_open.set(false);
            editing.set(None);
            deleting.set(None);
        })
    };

    let list = use_resource_list(
        props.api_client.courses(),
        ResourceQuery::new().with_filter("organization", props.session.organization.clone()),
        "Course",
        props.notifier.clone(),
        close_modals.clone(),
    );
    let search = use_debounced_search(SEARCH_DEBOUNCE_MS, list.actions.set_search.clone());

    let open_add = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            editing.set(None);
            modal_open.set(true);
        })
    };

    let open_edit = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        Callback::from(move |course: Course| {
            editing.set(Some(course));
            modal_open.set(true);
        })
    };

    let request_delete = {
        let deleting = deleting.clone();
        Callback::from(move |course: Course| {
            deleting.set(Some(course));
        })
    };

    let on_modal_submit = {
        let editing = editing.clone();
        let submit_create = list.actions.submit_create.clone();
        let submit_update = list.actions.submit_update.clone();
        Callback::from(move |draft: CourseDraft| match &*editing {
            Some(course) => submit_update.emit((course.id.clone(), draft)),
            None => submit_create.emit(draft),
        })
    };

    let on_confirm_delete = {
        let deleting = deleting.clone();
        let submit_delete = list.actions.submit_delete.clone();
        Callback::from(move |_| {
            if let Some(course) = &*deleting {
                submit_delete.emit(course.id.clone());
            }
        })
    };

    let delete_message = deleting
        .as_ref()
        .map(|course| format!("Delete \"{}\"? This cannot be undone.", course.name))
        .unwrap_or_default();

    html! {
        <div class="screen courses-screen">
            <div class="screen-header">
                <h2>{"Courses"}</h2>
                <button type="button" class="btn btn-primary" onclick={open_add}>
                    {"Add Course"}
                </button>
            </div>

            <SearchBox
                value={search.text.clone()}
                placeholder={"Search courses...".to_string()}
                on_input={search.on_input.clone()}
            />

            {if let Some(error) = list.state.error.as_ref() {
                html! { <div class="list-error">{error}</div> }
            } else { html! {} }}

            {if list.state.loading && list.state.page.is_none() {
                html! { <div class="loading">{"Loading courses..."}</div> }
            } else if let Some(page) = list.state.page.as_ref() {
                html! {
                    <>
                        <div class="table-container">
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>{"Name"}</th>
                                        <th>{"Subject"}</th>
                                        <th>{"Tutor"}</th>
                                        <th>{"Hourly Rate"}</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if page.is_empty() {
                                        html! {
                                            <tr>
                                                <td colspan="5" class="empty-row">{"No courses found"}</td>
                                            </tr>
                                        }
                                    } else {
                                        html! {
                                            <>
                                                {for page.items.iter().map(|course| {
                                                    let edit = {
                                                        let open_edit = open_edit.clone();
                                                        let course = course.clone();
                                                        Callback::from(move |_| open_edit.emit(course.clone()))
                                                    };
                                                    let delete = {
                                                        let request_delete = request_delete.clone();
                                                        let course = course.clone();
                                                        Callback::from(move |_| request_delete.emit(course.clone()))
                                                    };
                                                    html! {
                                                        <tr key={course.id.clone()}>
                                                            <td>{&course.name}</td>
                                                            <td>{&course.subject}</td>
                                                            <td>{course.tutor_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                            <td>{format!("${:.2}", course.price_per_hour)}</td>
                                                            <td class="row-actions">
                                                                <button type="button" class="btn btn-link" onclick={edit}>{"Edit"}</button>
                                                                <button type="button" class="btn btn-link btn-link-danger" onclick={delete}>{"Delete"}</button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })}
                                            </>
                                        }
                                    }}
                                </tbody>
                            </table>
                        </div>
                        <Pagination
                            current_page={page.current_page}
                            total_pages={page.total_pages}
                            on_navigate={list.actions.go_to_page.clone()}
                        />
                    </>
                }
            } else {
                html! {}
            }}

            <CourseModal
                is_open={*modal_open}
                course={(*editing).clone()}
                submitting={list.state.mutating}
                on_submit={on_modal_submit}
                on_close={close_modals.clone()}
            />
            <ConfirmDeleteModal
                is_open={deleting.is_some()}
                title={"Delete course".to_string()}
                message={delete_message}
                submitting={list.state.mutating}
                on_confirm={on_confirm_delete}
                on_close={close_modals}
            />
        </div>
    }
}
