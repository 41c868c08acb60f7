use shared::UserSession;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::attendance::AttendanceScreen;
use components::classes::ClassesScreen;
use components::courses::CoursesScreen;
use components::dashboard::DashboardScreen;
use components::header::Header;
use components::students::StudentsScreen;
use components::toast::ToastStack;
use components::tutors::TutorsScreen;
use services::api::ApiClient;
use services::logging::Logger;
use services::notify::{Notifier, ToastAction, ToastList};

/// Top-level screens. Which ones are reachable depends on the session role
/// (see `components::header::nav_items`); selection is plain component
/// state, not a URL router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Courses,
    Students,
    Tutors,
    Classes,
    Attendance,
}

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let session = use_state(|| Option::<UserSession>::None);
    let screen = use_state(|| Screen::Dashboard);
    let toasts = use_reducer(ToastList::default);
    let notifier = Notifier::new(toasts.dispatcher());

    // Resolve the signed-in user once on startup. Auth itself is the
    // server's business; the client only needs the read-only answer.
    use_effect_with((), {
        let session = session.clone();
        let api_client = api_client.clone();
        move |_| {
            spawn_local(async move {
                match api_client.current_session().await {
                    Ok(user) => session.set(Some(user)),
                    Err(err) => {
                        Logger::warn_with_component(
                            "app",
                            &format!("session lookup failed, using local fallback: {}", err),
                        );
                        session.set(Some(UserSession::local_fallback()));
                    }
                }
            });
            || ()
        }
    });

    let on_navigate = {
        let screen = screen.clone();
        Callback::from(move |next: Screen| screen.set(next))
    };

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: String| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let Some(user) = (*session).clone() else {
        return html! { <div class="app-loading">{"Loading..."}</div> };
    };

    html! {
        <>
            <Header session={user.clone()} active={*screen} on_navigate={on_navigate} />
            <main class="main">
                <div class="container">
                    {match *screen {
                        Screen::Dashboard => html! {
                            <DashboardScreen
                                api_client={api_client.clone()}
                                session={user.clone()}
                            />
                        },
                        Screen::Courses => html! {
                            <CoursesScreen
                                api_client={api_client.clone()}
                                session={user.clone()}
                                notifier={notifier.clone()}
                            />
                        },
                        Screen::Students => html! {
                            <StudentsScreen
                                api_client={api_client.clone()}
                                session={user.clone()}
                                notifier={notifier.clone()}
                            />
                        },
                        Screen::Tutors => html! {
                            <TutorsScreen
                                api_client={api_client.clone()}
                                session={user.clone()}
                                notifier={notifier.clone()}
                            />
                        },
                        Screen::Classes => html! {
                            <ClassesScreen
                                api_client={api_client.clone()}
                                session={user.clone()}
                                notifier={notifier.clone()}
                            />
                        },
                        Screen::Attendance => html! {
                            <AttendanceScreen
                                api_client={api_client.clone()}
                                session={user.clone()}
                                notifier={notifier.clone()}
                            />
                        },
                    }}
                </div>
            </main>
            <ToastStack toasts={toasts.toasts.clone()} on_dismiss={on_dismiss} />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
