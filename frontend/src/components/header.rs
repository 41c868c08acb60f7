use shared::{Role, UserSession};
use yew::prelude::*;

use crate::Screen;

/// Which screens each role can reach. The screen enum in `main` is the whole
/// routing story; there is no URL router.
pub fn nav_items(role: Role) -> Vec<(Screen, &'static str)> {
    match role {
        Role::Admin => vec![
            (Screen::Dashboard, "Dashboard"),
            (Screen::Courses, "Courses"),
            (Screen::Students, "Students"),
            (Screen::Tutors, "Tutors"),
            (Screen::Classes, "Classes"),
        ],
        Role::Tutor => vec![
            (Screen::Dashboard, "Dashboard"),
            (Screen::Classes, "Classes"),
        ],
        Role::Student => vec![
            (Screen::Dashboard, "Dashboard"),
            (Screen::Attendance, "Attendance"),
        ],
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub session: UserSession,
    pub active: Screen,
    pub on_navigate: Callback<Screen>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"TutorHub"}</h1>
                <nav class="nav">
                    {for nav_items(props.session.role).into_iter().map(|(screen, label)| {
                        let class = if screen == props.active {
                            "nav-btn nav-btn-active"
                        } else {
                            "nav-btn"
                        };
                        let on_click = {
                            let on_navigate = props.on_navigate.clone();
                            Callback::from(move |_| on_navigate.emit(screen))
                        };
                        html! {
                            <button type="button" class={class} onclick={on_click} key={label}>
                                {label}
                            </button>
                        }
                    })}
                </nav>
                <div class="header-user">
                    <span class="user-name">{&props.session.display_name}</span>
                    <span class="user-role">{props.session.role.label()}</span>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_admin_sees_every_screen() {
        let items = nav_items(Role::Admin);
        assert_eq!(items.len(), 5);
        assert!(items.iter().any(|(screen, _)| *screen == Screen::Tutors));
    }

    #[wasm_bindgen_test]
    fn test_student_nav_is_dashboard_and_attendance_only() {
        let items = nav_items(Role::Student);
        let screens: Vec<Screen> = items.iter().map(|(screen, _)| *screen).collect();
        assert_eq!(screens, vec![Screen::Dashboard, Screen::Attendance]);
    }

    #[wasm_bindgen_test]
    fn test_tutor_cannot_reach_roster_screens() {
        let items = nav_items(Role::Tutor);
        assert!(!items.iter().any(|(screen, _)| *screen == Screen::Students));
        assert!(!items.iter().any(|(screen, _)| *screen == Screen::Tutors));
    }
}
