use gloo::timers::future::TimeoutFuture;
use std::rc::Rc;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// How long a toast stays on screen before dismissing itself.
const TOAST_DISMISS_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// All live toasts, oldest first.
#[derive(Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(String),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

/// Fire-and-forget notification sink handed to every screen.
///
/// Wraps the toast reducer's dispatcher, so a notification can be emitted
/// from any callback or in-flight task without touching render state
/// directly.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<ToastList>,
}

impl Notifier {
    pub fn new(dispatcher: UseReducerDispatcher<ToastList>) -> Self {
        Self { dispatcher }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message.into());
    }

    pub fn notify(&self, kind: ToastKind, message: String) {
        let toast = Toast {
            id: Uuid::new_v4().to_string(),
            kind,
            message,
        };
        let id = toast.id.clone();
        self.dispatcher.dispatch(ToastAction::Push(toast));

        // Schedule the auto-dismiss
        let dispatcher = self.dispatcher.clone();
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            dispatcher.dispatch(ToastAction::Dismiss(id));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn toast(id: &str, message: &str) -> Toast {
        Toast {
            id: id.to_string(),
            kind: ToastKind::Success,
            message: message.to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn test_push_appends_in_order() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(toast("a", "saved")));
        let list = list.reduce(ToastAction::Push(toast("b", "deleted")));
        assert_eq!(list.toasts.len(), 2);
        assert_eq!(list.toasts[0].message, "saved");
        assert_eq!(list.toasts[1].message, "deleted");
    }

    #[wasm_bindgen_test]
    fn test_dismiss_removes_only_the_target() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(toast("a", "saved")));
        let list = list.reduce(ToastAction::Push(toast("b", "deleted")));
        let list = list.reduce(ToastAction::Dismiss("a".to_string()));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].id, "b");
    }

    #[wasm_bindgen_test]
    fn test_dismissing_unknown_id_is_a_noop() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(toast("a", "saved")));
        let list = list.reduce(ToastAction::Dismiss("zz".to_string()));
        assert_eq!(list.toasts.len(), 1);
    }
}
