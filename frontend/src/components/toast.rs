use yew::prelude::*;

use crate::services::notify::{Toast, ToastKind};

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<String>,
}

/// Renders the live notifications in a fixed corner stack. Each toast
/// dismisses itself after a few seconds (see the notify service) or when
/// clicked away.
#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    if props.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="toast-stack">
            {for props.toasts.iter().map(|toast| {
                let kind_class = match toast.kind {
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Error => "toast toast-error",
                };
                let on_dismiss = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id.clone();
                    Callback::from(move |_| on_dismiss.emit(id.clone()))
                };
                html! {
                    <div class={kind_class} key={toast.id.clone()}>
                        <span class="toast-message">{&toast.message}</span>
                        <button type="button" class="toast-close" onclick={on_dismiss}>
                            {"×"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
