use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDeleteModalProps {
    pub is_open: bool,
    pub title: String,
    pub message: String,
    pub submitting: bool,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

/// Delete confirmation. No field validation here; the delete call goes
/// straight out on confirm and the modal stays open if the server rejects.
#[function_component(ConfirmDeleteModal)]
pub fn confirm_delete_modal(props: &ConfirmDeleteModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            on_confirm.emit(());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{&props.title}</h3>
                    <p class="modal-message">{&props.message}</p>
                    <div class="modal-buttons">
                        <button
                            type="button"
                            class="btn btn-danger"
                            onclick={on_confirm}
                            disabled={props.submitting}
                        >
                            {if props.submitting { "Deleting..." } else { "Delete" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={on_cancel}
                            disabled={props.submitting}
                        >
                            {"Cancel"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
