use shared::{ResourceQuery, Tutor, TutorDraft, UserSession, SEARCH_DEBOUNCE_MS};
use yew::prelude::*;

use crate::components::confirm_delete_modal::ConfirmDeleteModal;
use crate::components::pagination::Pagination;
use crate::components::search_box::SearchBox;
use crate::components::tutor_modal::TutorModal;
use crate::hooks::use_debounced_search::use_debounced_search;
use crate::hooks::use_resource_list::use_resource_list;
use crate::services::api::ApiClient;
use crate::services::notify::Notifier;

#[derive(Properties, PartialEq)]
pub struct TutorsScreenProps {
    pub api_client: ApiClient,
    pub session: UserSession,
    pub notifier: Notifier,
}

#[function_component(TutorsScreen)]
pub fn tutors_screen(props: &TutorsScreenProps) -> Html {
    let modal_open = use_state(|| false);
    let editing = use_state(|| Option::<Tutor>::None);
    let deleting = use_state(|| Option::<Tutor>::None);

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
        props.api_client.tutors(),
        ResourceQuery::new().with_filter("organization", props.session.organization.clone()),
        "Tutor",
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
        Callback::from(move |tutor: Tutor| {
            editing.set(Some(tutor));
            modal_open.set(true);
        })
    };

    let request_delete = {
        let deleting = deleting.clone();
        Callback::from(move |tutor: Tutor| {
            deleting.set(Some(tutor));
        })
    };

    let on_modal_submit = {
        let editing = editing.clone();
        let submit_create = list.actions.submit_create.clone();
        let submit_update = list.actions.submit_update.clone();
        Callback::from(move |draft: TutorDraft| match &*editing {
            Some(tutor) => submit_update.emit((tutor.id.clone(), draft)),
            None => submit_create.emit(draft),
        })
    };

    let on_confirm_delete = {
        let deleting = deleting.clone();
        let submit_delete = list.actions.submit_delete.clone();
        Callback::from(move |_| {
            if let Some(tutor) = &*deleting {
                submit_delete.emit(tutor.id.clone());
            }
        })
    };

    let delete_message = deleting
        .as_ref()
        .map(|tutor| format!("Remove \"{}\"? This cannot be undone.", tutor.name))
        .unwrap_or_default();

    html! {
        <div class="screen tutors-screen">
            <div class="screen-header">
                <h2>{"Tutors"}</h2>
                <button type="button" class="btn btn-primary" onclick={open_add}>
                    {"Add Tutor"}
                </button>
            </div>

            <SearchBox
                value={search.text.clone()}
                placeholder={"Search tutors...".to_string()}
                on_input={search.on_input.clone()}
            />

            {if let Some(error) = list.state.error.as_ref() {
                html! { <div class="list-error">{error}</div> }
            } else { html! {} }}

            {if list.state.loading && list.state.page.is_none() {
                html! { <div class="loading">{"Loading tutors..."}</div> }
            } else if let Some(page) = list.state.page.as_ref() {
                html! {
                    <>
                        <div class="table-container">
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>{"Name"}</th>
                                        <th>{"Email"}</th>
                                        <th>{"Subject"}</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if page.is_empty() {
                                        html! {
                                            <tr>
                                                <td colspan="4" class="empty-row">{"No tutors found"}</td>
                                            </tr>
                                        }
                                    } else {
                                        html! {
                                            <>
                                                {for page.items.iter().map(|tutor| {
                                                    let edit = {
                                                        let open_edit = open_edit.clone();
                                                        let tutor = tutor.clone();
                                                        Callback::from(move |_| open_edit.emit(tutor.clone()))
                                                    };
                                                    let delete = {
                                                        let request_delete = request_delete.clone();
                                                        let tutor = tutor.clone();
                                                        Callback::from(move |_| request_delete.emit(tutor.clone()))
                                                    };
                                                    html! {
                                                        <tr key={tutor.id.clone()}>
                                                            <td>{&tutor.name}</td>
                                                            <td>{&tutor.email}</td>
                                                            <td>{&tutor.subject}</td>
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

            <TutorModal
                is_open={*modal_open}
                tutor={(*editing).clone()}
                submitting={list.state.mutating}
                on_submit={on_modal_submit}
                on_close={close_modals.clone()}
            />
            <ConfirmDeleteModal
                is_open={deleting.is_some()}
                title={"Remove tutor".to_string()}
                message={delete_message}
                submitting={list.state.mutating}
                on_confirm={on_confirm_delete}
                on_close={close_modals}
            />
        </div>
    }
}
