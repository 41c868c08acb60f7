use shared::{
    AttendanceRecord, ClassSession, ResourceQuery, SessionPhase, UserSession, SEARCH_DEBOUNCE_MS,
};
use yew::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::search_box::SearchBox;
use crate::hooks::use_attendance::use_attendance;
use crate::hooks::use_debounced_search::use_debounced_search;
use crate::hooks::use_resource_list::use_resource_list;
use crate::services::api::ApiClient;
use crate::services::notify::Notifier;
use crate::services::time_utils;

#[derive(Properties, PartialEq)]
pub struct AttendanceScreenProps {
    pub api_client: ApiClient,
    pub session: UserSession,
    pub notifier: Notifier,
}

/// Student attendance view: today's and upcoming classes as sign-in/out
/// cards, with the append-only attendance history underneath.
#[function_component(AttendanceScreen)]
pub fn attendance_screen(props: &AttendanceScreenProps) -> Html {
    let classes = use_resource_list(
        props.api_client.classes(),
        ResourceQuery::new()
            .with_filter("organization", props.session.organization.clone())
            .with_filter("status", "coming,active"),
        "Class",
        props.notifier.clone(),
        Callback::noop(),
    );
    let history = use_resource_list(
        props.api_client.attendance_records(),
        ResourceQuery::new(),
        "Attendance record",
        props.notifier.clone(),
        Callback::noop(),
    );
    let search = use_debounced_search(SEARCH_DEBOUNCE_MS, classes.actions.set_search.clone());

    // Sign-in changes the class's server-side status; sign-out also appends
    // to the history. Refetch instead of patching local state.
    let on_signed_in = classes.actions.reload.clone();
    let on_signed_out = {
        let reload_classes = classes.actions.reload.clone();
        let reload_history = history.actions.reload.clone();
        Callback::from(move |_| {
            reload_classes.emit(());
            reload_history.emit(());
        })
    };

    let record_for = |class_id: &str| -> Option<AttendanceRecord> {
        history.state.page.as_ref().and_then(|page| {
            page.items
                .iter()
                .find(|record| record.class_id == class_id)
                .cloned()
        })
    };

    html! {
        <div class="screen attendance-screen">
            <div class="screen-header">
                <h2>{"My Classes"}</h2>
            </div>

            <SearchBox
                value={search.text.clone()}
                placeholder={"Search classes...".to_string()}
                on_input={search.on_input.clone()}
            />

            {if let Some(error) = classes.state.error.as_ref() {
                html! { <div class="list-error">{error}</div> }
            } else { html! {} }}

            {if classes.state.loading && classes.state.page.is_none() {
                html! { <div class="loading">{"Loading classes..."}</div> }
            } else if let Some(page) = classes.state.page.as_ref() {
                if page.is_empty() {
                    html! { <div class="empty-message">{"No upcoming classes"}</div> }
                } else {
                    html! {
                        <>
                            <div class="class-cards">
                                {for page.items.iter().map(|class| html! {
                                    <ClassAttendanceCard
                                        key={class.id.clone()}
                                        api_client={props.api_client.clone()}
                                        class={class.clone()}
                                        record={record_for(&class.id)}
                                        notifier={props.notifier.clone()}
                                        on_signed_in={on_signed_in.clone()}
                                        on_signed_out={on_signed_out.clone()}
                                    />
                                })}
                            </div>
                            <Pagination
                                current_page={page.current_page}
                                total_pages={page.total_pages}
                                on_navigate={classes.actions.go_to_page.clone()}
                            />
                        </>
                    }
                }
            } else {
                html! {}
            }}

            <div class="screen-header history-header">
                <h2>{"Attendance History"}</h2>
            </div>

            {if let Some(error) = history.state.error.as_ref() {
                html! { <div class="list-error">{error}</div> }
            } else { html! {} }}

            {if history.state.loading && history.state.page.is_none() {
                html! { <div class="loading">{"Loading attendance history..."}</div> }
            } else if let Some(page) = history.state.page.as_ref() {
                html! {
                    <>
                        <div class="table-container">
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>{"Course"}</th>
                                        <th>{"Signed In"}</th>
                                        <th>{"Signed Out"}</th>
                                        <th>{"Status"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {if page.is_empty() {
                                        html! {
                                            <tr>
                                                <td colspan="4" class="empty-row">{"No attendance records yet"}</td>
                                            </tr>
                                        }
                                    } else {
                                        html! {
                                            <>
                                                {for page.items.iter().map(|record| html! {
                                                    <tr key={record.id.clone()}>
                                                        <td>{&record.course_name}</td>
                                                        <td>
                                                            {record.sign_in_time.as_deref()
                                                                .map(time_utils::format_datetime)
                                                                .unwrap_or_else(|| "-".to_string())}
                                                        </td>
                                                        <td>
                                                            {record.sign_out_time.as_deref()
                                                                .map(time_utils::format_datetime)
                                                                .unwrap_or_else(|| "-".to_string())}
                                                        </td>
                                                        <td>{record.status.label()}</td>
                                                    </tr>
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
                            on_navigate={history.actions.go_to_page.clone()}
                        />
                    </>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClassAttendanceCardProps {
    pub api_client: ApiClient,
    pub class: ClassSession,
    /// This student's attendance record for the class, if one exists.
    pub record: Option<AttendanceRecord>,
    pub notifier: Notifier,
    pub on_signed_in: Callback<()>,
    pub on_signed_out: Callback<()>,
}

/// One class session's sign-in/sign-out card.
///
/// The phase is re-derived from the wall clock on every render, so the card
/// moves from "not started" to "open" to "completed" without any user
/// action. Sign-in is only offered while the window is open; sign-out stays
/// available from sign-in until it succeeds.
#[function_component(ClassAttendanceCard)]
pub fn class_attendance_card(props: &ClassAttendanceCardProps) -> Html {
    let attendance = use_attendance(
        props.api_client.clone(),
        props.class.id.clone(),
        props.notifier.clone(),
        props.on_signed_in.clone(),
        props.on_signed_out.clone(),
    );

    let phase = props.class.phase(time_utils::now_millis());
    let signed_in = attendance.state.signed_in
        || props
            .record
            .as_ref()
            .map(|record| record.sign_in_time.is_some())
            .unwrap_or(false);
    let signed_out = attendance.state.signed_out
        || props
            .record
            .as_ref()
            .map(|record| record.sign_out_time.is_some())
            .unwrap_or(false);

    let show_sign_in = phase == SessionPhase::Open && !signed_in && !signed_out;
    let show_sign_out = !signed_out && (phase == SessionPhase::Open || signed_in);

    let on_sign_in_submit = {
        let submit = attendance.actions.submit_sign_in.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_sign_out_submit = {
        let submit = attendance.actions.submit_sign_out.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let phase_line = match phase {
        SessionPhase::NotStarted => format!(
            "Starts {}",
            time_utils::format_datetime(&props.class.start_time)
        ),
        SessionPhase::Open => format!(
            "In session, {}",
            time_utils::format_time_range(&props.class.start_time, &props.class.end_time)
        ),
        SessionPhase::Completed => "Session ended".to_string(),
    };

    html! {
        <div class="class-card">
            <div class="class-card-header">
                <h3>{&props.class.course_name}</h3>
                {if signed_out {
                    html! { <span class="status-chip status-completed">{"Attended"}</span> }
                } else if signed_in {
                    html! { <span class="status-chip status-active">{"Signed in"}</span> }
                } else {
                    html! {}
                }}
            </div>
            <div class="class-card-meta">
                <span>{phase_line}</span>
                {if let Some(tutor) = props.class.tutor_name.as_ref() {
                    html! { <span>{format!("with {}", tutor)}</span> }
                } else { html! {} }}
                {if let Some(location) = props.class.location.as_ref() {
                    html! { <span>{location}</span> }
                } else { html! {} }}
            </div>

            {if show_sign_in {
                html! {
                    <form class="code-form" onsubmit={on_sign_in_submit}>
                        <input
                            type="text"
                            class="code-input"
                            placeholder="Sign-in code"
                            value={attendance.state.sign_in_code.clone()}
                            onchange={attendance.actions.on_sign_in_code_change.clone()}
                            disabled={attendance.state.signing_in}
                        />
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={attendance.state.signing_in}
                        >
                            {if attendance.state.signing_in { "Signing In..." } else { "Sign In" }}
                        </button>
                        {if let Some(error) = attendance.state.sign_in_error.as_ref() {
                            html! { <div class="field-error">{error}</div> }
                        } else { html! {} }}
                    </form>
                }
            } else { html! {} }}

            {if show_sign_out {
                html! {
                    <form class="code-form" onsubmit={on_sign_out_submit}>
                        <input
                            type="text"
                            class="code-input"
                            placeholder="Sign-out code"
                            value={attendance.state.sign_out_code.clone()}
                            onchange={attendance.actions.on_sign_out_code_change.clone()}
                            disabled={attendance.state.signing_out}
                        />
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={attendance.state.signing_out}
                        >
                            {if attendance.state.signing_out { "Signing Out..." } else { "Sign Out" }}
                        </button>
                        {if let Some(error) = attendance.state.sign_out_error.as_ref() {
                            html! { <div class="field-error">{error}</div> }
                        } else { html! {} }}
                    </form>
                }
            } else { html! {} }}
        </div>
    }
}
