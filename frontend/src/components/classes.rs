use shared::{ClassDraft, ClassSession, ResourceQuery, Role, UserSession, SEARCH_DEBOUNCE_MS};
use yew::prelude::*;

use crate::components::class_modal::ClassModal;
use crate::components::confirm_delete_modal::ConfirmDeleteModal;
use crate::components::pagination::Pagination;
use crate::components::search_box::SearchBox;
use crate::hooks::use_debounced_search::use_debounced_search;
use crate::hooks::use_resource_list::use_resource_list;
use crate::services::api::ApiClient;
use crate::services::notify::Notifier;
use crate::services::time_utils;

/// Status tabs over the schedule. The filter value goes to the server as a
/// CSV (`status=coming,active`); an empty value clears the filter.
const STATUS_TABS: &[(&str, &str)] = &[
    ("All", ""),
    ("Upcoming", "coming"),
    ("In progress", "active"),
    ("Completed", "completed"),
];

#[derive(Properties, PartialEq)]
pub struct ClassesScreenProps {
    pub api_client: ApiClient,
    pub session: UserSession,
    pub notifier: Notifier,
}

#[function_component(ClassesScreen)]
pub fn classes_screen(props: &ClassesScreenProps) -> Html {
    let modal_open = use_state(|| false);
    let editing = use_state(|| Option::<ClassSession>::None);
    let deleting = use_state(|| Option::<ClassSession>::None);

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
        props.api_client.classes(),
        ResourceQuery::new().with_filter("organization", props.session.organization.clone()),
        "Class",
        props.notifier.clone(),
        close_modals.clone(),
    );
    let search = use_debounced_search(SEARCH_DEBOUNCE_MS, list.actions.set_search.clone());

    // Students get a read-only schedule; scheduling stays with staff
    let can_manage = matches!(props.session.role, Role::Admin | Role::Tutor);

    let active_status = list
        .state
        .query
        .filters
        .get("status")
        .cloned()
        .unwrap_or_default();

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
        Callback::from(move |class: ClassSession| {
            editing.set(Some(class));
            modal_open.set(true);
        })
    };

    let request_delete = {
        let deleting = deleting.clone();
        Callback::from(move |class: ClassSession| {
            deleting.set(Some(class));
        })
    };

    let on_modal_submit = {
        let editing = editing.clone();
        let submit_create = list.actions.submit_create.clone();
        let submit_update = list.actions.submit_update.clone();
        Callback::from(move |draft: ClassDraft| match &*editing {
            Some(class) => submit_update.emit((class.id.clone(), draft)),
            None => submit_create.emit(draft),
        })
    };

    let on_confirm_delete = {
        let deleting = deleting.clone();
        let submit_delete = list.actions.submit_delete.clone();
        Callback::from(move |_| {
            if let Some(class) = &*deleting {
                submit_delete.emit(class.id.clone());
            }
        })
    };

    let delete_message = deleting
        .as_ref()
        .map(|class| {
            format!(
                "Cancel the {} class on {}? This cannot be undone.",
                class.course_name,
                time_utils::format_datetime(&class.start_time)
            )
        })
        .unwrap_or_default();

    html! {
        <div class="screen classes-screen">
            <div class="screen-header">
                <h2>{"Class Schedule"}</h2>
                {if can_manage {
                    html! {
                        <button type="button" class="btn btn-primary" onclick={open_add}>
                            {"Schedule Class"}
                        </button>
                    }
                } else { html! {} }}
            </div>

            <div class="status-tabs">
                {for STATUS_TABS.iter().map(|(label, value)| {
                    let class = if active_status == *value {
                        "tab tab-active"
                    } else {
                        "tab"
                    };
                    let on_click = {
                        let set_filter = list.actions.set_filter.clone();
                        let value = value.to_string();
                        Callback::from(move |_| {
                            set_filter.emit(("status".to_string(), value.clone()))
                        })
                    };
                    html! {
                        <button type="button" class={class} onclick={on_click} key={*label}>
                            {*label}
                        </button>
                    }
                })}
            </div>

            <SearchBox
                value={search.text.clone()}
                placeholder={"Search classes...".to_string()}
                on_input={search.on_input.clone()}
            />

            {if let Some(error) = list.state.error.as_ref() {
                html! { <div class="list-error">{error}</div> }
            } else { html! {} }}

            {if list.state.loading && list.state.page.is_none() {
                html! { <div class="loading">{"Loading classes..."}</div> }
            } else if let Some(page) = list.state.page.as_ref() {
                html! {
                    <>
                        <div class="table-container">
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>{"Course"}</th>
                                        <th>{"Tutor"}</th>
                                        <th>{"When"}</th>
                                        <th>{"Location"}</th>
                                        <th>{"Status"}</th>
                                        {if can_manage { html! { <th></th> } } else { html! {} }}
                                    </tr>
                                </thead>
                                <tbody>
                                    {if page.is_empty() {
                                        html! {
                                            <tr>
                                                <td colspan="6" class="empty-row">{"No classes found"}</td>
                                            </tr>
                                        }
                                    } else {
                                        html! {
                                            <>
                                                {for page.items.iter().map(|class| {
                                                    let status_class = match class.status {
                                                        shared::ClassStatus::Coming => "status-chip status-coming",
                                                        shared::ClassStatus::Active => "status-chip status-active",
                                                        shared::ClassStatus::Completed => "status-chip status-completed",
                                                    };
                                                    let actions = if can_manage {
                                                        let edit = {
                                                            let open_edit = open_edit.clone();
                                                            let class = class.clone();
                                                            Callback::from(move |_| open_edit.emit(class.clone()))
                                                        };
                                                        let delete = {
                                                            let request_delete = request_delete.clone();
                                                            let class = class.clone();
                                                            Callback::from(move |_| request_delete.emit(class.clone()))
                                                        };
                                                        html! {
                                                            <td class="row-actions">
                                                                <button type="button" class="btn btn-link" onclick={edit}>{"Edit"}</button>
                                                                <button type="button" class="btn btn-link btn-link-danger" onclick={delete}>{"Cancel"}</button>
                                                            </td>
                                                        }
                                                    } else {
                                                        html! {}
                                                    };
                                                    html! {
                                                        <tr key={class.id.clone()}>
                                                            <td>{&class.course_name}</td>
                                                            <td>{class.tutor_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                            <td>
                                                                {format!(
                                                                    "{} ({})",
                                                                    time_utils::format_datetime(&class.start_time),
                                                                    time_utils::format_time_range(&class.start_time, &class.end_time)
                                                                )}
                                                            </td>
                                                            <td>{class.location.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                            <td><span class={status_class}>{class.status.label()}</span></td>
                                                            {actions}
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

            <ClassModal
                is_open={*modal_open}
                class={(*editing).clone()}
                submitting={list.state.mutating}
                on_submit={on_modal_submit}
                on_close={close_modals.clone()}
            />
            <ConfirmDeleteModal
                is_open={deleting.is_some()}
                title={"Cancel class".to_string()}
                message={delete_message}
                submitting={list.state.mutating}
                on_confirm={on_confirm_delete}
                on_close={close_modals}
            />
        </div>
    }
}
