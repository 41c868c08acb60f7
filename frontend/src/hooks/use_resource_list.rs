use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{ListPage, RequestSequence, ResourceQuery};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ResourceClient;
use crate::services::logging::Logger;
use crate::services::notify::Notifier;

const COMPONENT: &str = "resource-list";

/// Snapshot of one paginated list screen.
#[derive(Clone, PartialEq)]
pub struct ListState<T: Clone + PartialEq> {
    /// Last successfully fetched page. Stays on screen through reloads and
    /// failures; replaced wholesale on every accepted response.
    pub page: Option<ListPage<T>>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: ResourceQuery,
    /// True while a create/update/delete is in flight; the active modal
    /// disables its submit control on this.
    pub mutating: bool,
}

pub struct UseResourceListResult<T: Clone + PartialEq, D> {
    pub state: ListState<T>,
    pub actions: ListActions<D>,
}

/// Callbacks a list screen wires into its table, search box, pager, and
/// modals.
#[derive(Clone, PartialEq)]
pub struct ListActions<D> {
    /// Refetch the current page without changing the query.
    pub reload: Callback<()>,
    /// No-op outside `[1, total_pages]`; otherwise navigates and fetches.
    pub go_to_page: Callback<u32>,
    /// Settled search text; resets the page to 1 and fetches.
    pub set_search: Callback<String>,
    /// Set or clear (empty value) an extra filter; resets the page to 1.
    pub set_filter: Callback<(String, String)>,
    pub submit_create: Callback<D>,
    pub submit_update: Callback<(String, D)>,
    pub submit_delete: Callback<String>,
}

/// Owns "what page of which filtered resource set is on screen" for one
/// view, including the stale-response guard: every fetch takes a ticket and
/// a completion is applied only if its ticket is still the latest, so a slow
/// page-2 reply can never clobber a faster page-1 reply requested after it.
///
/// Mutations re-fetch the current page on success instead of patching local
/// state, so the pagination counters stay correct after inserts and deletes.
#[hook]
pub fn use_resource_list<T, D>(
    resource: ResourceClient<T, D>,
    base_query: ResourceQuery,
    noun: &'static str,
    notifier: Notifier,
    on_mutation_success: Callback<()>,
) -> UseResourceListResult<T, D>
where
    T: Clone + PartialEq + DeserializeOwned + 'static,
    D: Clone + PartialEq + Serialize + 'static,
{
    let page = use_state(|| Option::<ListPage<T>>::None);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    let query = use_state(|| base_query.clone());
    let mutating = use_state(|| false);

    // Authoritative copies read by callbacks and in-flight tasks; the state
    // handles above only drive rendering.
    let query_ref = use_mut_ref(|| base_query);
    let total_pages_ref = use_mut_ref(|| 1u32);
    let sequence = use_mut_ref(RequestSequence::new);
    let mutation_in_flight = use_mut_ref(|| false);
    let is_mounted = use_mut_ref(|| true);

    {
        let is_mounted = is_mounted.clone();
        let sequence = sequence.clone();
        use_effect_with((), move |_| {
            move || {
                *is_mounted.borrow_mut() = false;
                // Invalidate any ticket still in flight
                sequence.borrow_mut().begin();
            }
        });
    }

    let load = {
        let resource = resource.clone();
        let page = page.clone();
        let loading = loading.clone();
        let error = error.clone();
        let sequence = sequence.clone();
        let total_pages_ref = total_pages_ref.clone();
        let is_mounted = is_mounted.clone();

        use_callback((), move |query_to_load: ResourceQuery, _| {
            let resource = resource.clone();
            let page = page.clone();
            let loading = loading.clone();
            let error = error.clone();
            let sequence = sequence.clone();
            let total_pages_ref = total_pages_ref.clone();
            let is_mounted = is_mounted.clone();

            let ticket = sequence.borrow_mut().begin();
            loading.set(true);

            spawn_local(async move {
                let result = resource.list(&query_to_load).await;

                if !*is_mounted.borrow() || !sequence.borrow().is_current(ticket) {
                    // Superseded while in flight; drop the result silently
                    return;
                }

                match result {
                    Ok(list_page) => {
                        *total_pages_ref.borrow_mut() = list_page.total_pages;
                        page.set(Some(list_page));
                        error.set(None);
                    }
                    Err(err) => {
                        Logger::warn_with_component(
                            COMPONENT,
                            &format!("listing {} failed: {}", noun.to_lowercase(), err),
                        );
                        // Keep the last good page on screen
                        error.set(Some(err.user_message(&format!(
                            "Failed to load {} list",
                            noun.to_lowercase()
                        ))));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Fetch on mount and again whenever the query changes (page navigation,
    // settled search, filter change).
    {
        let load = load.clone();
        use_effect_with((*query).clone(), move |current: &ResourceQuery| {
            load.emit(current.clone());
            || ()
        });
    }

    let reload = {
        let load = load.clone();
        let query_ref = query_ref.clone();
        use_callback((), move |_, _| {
            let current = query_ref.borrow().clone();
            load.emit(current);
        })
    };

    let go_to_page = {
        let query = query.clone();
        let query_ref = query_ref.clone();
        let total_pages_ref = total_pages_ref.clone();
        use_callback((), move |n: u32, _| {
            let current = query_ref.borrow().clone();
            let total_pages = *total_pages_ref.borrow();
            if n < 1 || n > total_pages || n == current.page {
                return;
            }
            let next = current.with_page(n);
            *query_ref.borrow_mut() = next.clone();
            query.set(next);
        })
    };

    let set_search = {
        let query = query.clone();
        let query_ref = query_ref.clone();
        use_callback((), move |text: String, _| {
            let next = query_ref.borrow().clone().with_search(text);
            *query_ref.borrow_mut() = next.clone();
            query.set(next);
        })
    };

    let set_filter = {
        let query = query.clone();
        let query_ref = query_ref.clone();
        use_callback((), move |(key, value): (String, String), _| {
            let next = query_ref.borrow().clone().with_filter(key, value);
            *query_ref.borrow_mut() = next.clone();
            query.set(next);
        })
    };

    let submit_create = {
        let resource = resource.clone();
        let notifier = notifier.clone();
        let on_mutation_success = on_mutation_success.clone();
        let mutating = mutating.clone();
        let mutation_in_flight = mutation_in_flight.clone();
        let is_mounted = is_mounted.clone();
        let load = load.clone();
        let query_ref = query_ref.clone();

        use_callback((), move |draft: D, _| {
            if *mutation_in_flight.borrow() {
                return;
            }
            *mutation_in_flight.borrow_mut() = true;
            mutating.set(true);

            let resource = resource.clone();
            let notifier = notifier.clone();
            let on_mutation_success = on_mutation_success.clone();
            let mutating = mutating.clone();
            let mutation_in_flight = mutation_in_flight.clone();
            let is_mounted = is_mounted.clone();
            let load = load.clone();
            let query_ref = query_ref.clone();

            spawn_local(async move {
                let result = resource.create(&draft).await;
                *mutation_in_flight.borrow_mut() = false;
                if !*is_mounted.borrow() {
                    return;
                }
                mutating.set(false);

                match result {
                    Ok(message) => {
                        notifier
                            .success(message.unwrap_or_else(|| format!("{} created", noun)));
                        on_mutation_success.emit(());
                        let current = query_ref.borrow().clone();
                        load.emit(current);
                    }
                    Err(err) => {
                        Logger::warn_with_component(
                            COMPONENT,
                            &format!("creating {} failed: {}", noun.to_lowercase(), err),
                        );
                        notifier.error(err.user_message(&format!(
                            "Failed to create {}",
                            noun.to_lowercase()
                        )));
                    }
                }
            });
        })
    };

    let submit_update = {
        let resource = resource.clone();
        let notifier = notifier.clone();
        let on_mutation_success = on_mutation_success.clone();
        let mutating = mutating.clone();
        let mutation_in_flight = mutation_in_flight.clone();
        let is_mounted = is_mounted.clone();
        let load = load.clone();
        let query_ref = query_ref.clone();

        use_callback((), move |(id, draft): (String, D), _| {
            if *mutation_in_flight.borrow() {
                return;
            }
            *mutation_in_flight.borrow_mut() = true;
            mutating.set(true);

            let resource = resource.clone();
            let notifier = notifier.clone();
            let on_mutation_success = on_mutation_success.clone();
            let mutating = mutating.clone();
            let mutation_in_flight = mutation_in_flight.clone();
            let is_mounted = is_mounted.clone();
            let load = load.clone();
            let query_ref = query_ref.clone();

            spawn_local(async move {
                let result = resource.update(&id, &draft).await;
                *mutation_in_flight.borrow_mut() = false;
                if !*is_mounted.borrow() {
                    return;
                }
                mutating.set(false);

                match result {
                    Ok(message) => {
                        notifier
                            .success(message.unwrap_or_else(|| format!("{} updated", noun)));
                        on_mutation_success.emit(());
                        let current = query_ref.borrow().clone();
                        load.emit(current);
                    }
                    Err(err) => {
                        Logger::warn_with_component(
                            COMPONENT,
                            &format!("updating {} failed: {}", noun.to_lowercase(), err),
                        );
                        notifier.error(err.user_message(&format!(
                            "Failed to update {}",
                            noun.to_lowercase()
                        )));
                    }
                }
            });
        })
    };

    let submit_delete = {
        let resource = resource.clone();
        let notifier = notifier.clone();
        let on_mutation_success = on_mutation_success.clone();
        let mutating = mutating.clone();
        let mutation_in_flight = mutation_in_flight.clone();
        let is_mounted = is_mounted.clone();
        let load = load.clone();
        let query_ref = query_ref.clone();

        use_callback((), move |id: String, _| {
            if *mutation_in_flight.borrow() {
                return;
            }
            *mutation_in_flight.borrow_mut() = true;
            mutating.set(true);

            let resource = resource.clone();
            let notifier = notifier.clone();
            let on_mutation_success = on_mutation_success.clone();
            let mutating = mutating.clone();
            let mutation_in_flight = mutation_in_flight.clone();
            let is_mounted = is_mounted.clone();
            let load = load.clone();
            let query_ref = query_ref.clone();

            spawn_local(async move {
                let result = resource.delete(&id).await;
                *mutation_in_flight.borrow_mut() = false;
                if !*is_mounted.borrow() {
                    return;
                }
                mutating.set(false);

                match result {
                    Ok(message) => {
                        notifier
                            .success(message.unwrap_or_else(|| format!("{} deleted", noun)));
                        on_mutation_success.emit(());
                        let current = query_ref.borrow().clone();
                        load.emit(current);
                    }
                    Err(err) => {
                        Logger::warn_with_component(
                            COMPONENT,
                            &format!("deleting {} failed: {}", noun.to_lowercase(), err),
                        );
                        notifier.error(err.user_message(&format!(
                            "Failed to delete {}",
                            noun.to_lowercase()
                        )));
                    }
                }
            });
        })
    };

    let state = ListState {
        page: (*page).clone(),
        loading: *loading,
        error: (*error).clone(),
        query: (*query).clone(),
        mutating: *mutating,
    };

    let actions = ListActions {
        reload,
        go_to_page,
        set_search,
        set_filter,
        submit_create,
        submit_update,
        submit_delete,
    };

    UseResourceListResult { state, actions }
}
