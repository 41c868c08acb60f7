use shared::{AdminDashboard, Role, StudentDashboard, TutorDashboard, UserSession};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::time_utils;

#[derive(Properties, PartialEq)]
pub struct DashboardScreenProps {
    pub api_client: ApiClient,
    pub session: UserSession,
}

#[derive(Clone, PartialEq)]
enum DashboardData {
    Admin(AdminDashboard),
    Tutor(TutorDashboard),
    Student(StudentDashboard),
}

#[function_component(DashboardScreen)]
pub fn dashboard_screen(props: &DashboardScreenProps) -> Html {
    let data = use_state(|| Option::<DashboardData>::None);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    use_effect_with(props.session.role, {
        let api_client = props.api_client.clone();
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();
        move |role: &Role| {
            let role = *role;
            let api_client = api_client.clone();
            let data = data.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                loading.set(true);
                let result = match role {
                    Role::Admin => api_client.admin_dashboard().await.map(DashboardData::Admin),
                    Role::Tutor => api_client.tutor_dashboard().await.map(DashboardData::Tutor),
                    Role::Student => api_client
                        .student_dashboard()
                        .await
                        .map(DashboardData::Student),
                };
                match result {
                    Ok(dashboard) => {
                        data.set(Some(dashboard));
                        error.set(None);
                    }
                    Err(err) => {
                        Logger::warn_with_component(
                            "dashboard",
                            &format!("dashboard fetch failed: {}", err),
                        );
                        error.set(Some(err.user_message("Failed to load dashboard")));
                    }
                }
                loading.set(false);
            });
            || ()
        }
    });

    html! {
        <div class="screen dashboard-screen">
            <div class="screen-header">
                <h2>{format!("Welcome, {}", props.session.display_name)}</h2>
            </div>

            {if let Some(error) = error.as_ref() {
                html! { <div class="list-error">{error}</div> }
            } else { html! {} }}

            {if *loading && data.is_none() {
                html! { <div class="loading">{"Loading dashboard..."}</div> }
            } else {
                match data.as_ref() {
                    Some(DashboardData::Admin(dashboard)) => admin_view(dashboard),
                    Some(DashboardData::Tutor(dashboard)) => tutor_view(dashboard),
                    Some(DashboardData::Student(dashboard)) => student_view(dashboard),
                    None => html! {},
                }
            }}
        </div>
    }
}

fn stat_card(label: &str, value: u32) -> Html {
    html! {
        <div class="stat-card">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

fn class_rows(classes: &[shared::ClassSession]) -> Html {
    if classes.is_empty() {
        return html! { <div class="empty-message">{"No classes scheduled"}</div> };
    }
    html! {
        <ul class="record-list">
            {for classes.iter().map(|class| html! {
                <li key={class.id.clone()}>
                    <span class="record-title">{&class.course_name}</span>
                    <span class="record-detail">
                        {format!(
                            "{} ({})",
                            time_utils::format_datetime(&class.start_time),
                            time_utils::format_time_range(&class.start_time, &class.end_time)
                        )}
                    </span>
                </li>
            })}
        </ul>
    }
}

fn admin_view(dashboard: &AdminDashboard) -> Html {
    html! {
        <>
            <div class="stat-grid">
                {stat_card("Courses", dashboard.counts.courses)}
                {stat_card("Students", dashboard.counts.students)}
                {stat_card("Tutors", dashboard.counts.tutors)}
                {stat_card("Classes", dashboard.counts.classes)}
            </div>

            <section class="dashboard-section">
                <h3>{"Recently Added Students"}</h3>
                {if dashboard.recent_students.is_empty() {
                    html! { <div class="empty-message">{"No students yet"}</div> }
                } else {
                    html! {
                        <ul class="record-list">
                            {for dashboard.recent_students.iter().map(|student| html! {
                                <li key={student.id.clone()}>
                                    <span class="record-title">{&student.name}</span>
                                    <span class="record-detail">{&student.email}</span>
                                </li>
                            })}
                        </ul>
                    }
                }}
            </section>

            <section class="dashboard-section">
                <h3>{"Upcoming Classes"}</h3>
                {class_rows(&dashboard.upcoming_classes)}
            </section>
        </>
    }
}

fn tutor_view(dashboard: &TutorDashboard) -> Html {
    html! {
        <>
            <div class="stat-grid">
                {stat_card("Upcoming", dashboard.class_counts.coming)}
                {stat_card("In Progress", dashboard.class_counts.active)}
                {stat_card("Completed", dashboard.class_counts.completed)}
            </div>

            <section class="dashboard-section">
                <h3>{"Today's Classes"}</h3>
                {class_rows(&dashboard.today_classes)}
            </section>
        </>
    }
}

fn student_view(dashboard: &StudentDashboard) -> Html {
    html! {
        <>
            <section class="dashboard-section">
                <h3>{"Upcoming Classes"}</h3>
                {class_rows(&dashboard.upcoming_classes)}
            </section>

            <section class="dashboard-section">
                <h3>{"Recent Attendance"}</h3>
                {if dashboard.recent_attendance.is_empty() {
                    html! { <div class="empty-message">{"No attendance records yet"}</div> }
                } else {
                    html! {
                        <ul class="record-list">
                            {for dashboard.recent_attendance.iter().map(|record| html! {
                                <li key={record.id.clone()}>
                                    <span class="record-title">{&record.course_name}</span>
                                    <span class="record-detail">{record.status.label()}</span>
                                </li>
                            })}
                        </ul>
                    }
                }}
            </section>
        </>
    }
}
