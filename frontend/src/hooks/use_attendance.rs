use shared::{SignInRequest, SignOutRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::notify::Notifier;

const COMPONENT: &str = "attendance";

/// Form state for one class session's sign-in/sign-out pair.
///
/// The two submissions are independent: each has its own code field,
/// in-flight flag, and inline error, and submitting one never blocks the
/// other.
#[derive(Clone, PartialEq)]
pub struct AttendanceFormState {
    pub sign_in_code: String,
    pub sign_out_code: String,
    pub signing_in: bool,
    pub signing_out: bool,
    pub sign_in_error: Option<String>,
    pub sign_out_error: Option<String>,
    /// Set after a successful sign-in this session; the card combines it
    /// with the fetched attendance record.
    pub signed_in: bool,
    pub signed_out: bool,
}

pub struct UseAttendanceResult {
    pub state: AttendanceFormState,
    pub actions: AttendanceActions,
}

#[derive(Clone, PartialEq)]
pub struct AttendanceActions {
    pub on_sign_in_code_change: Callback<Event>,
    pub on_sign_out_code_change: Callback<Event>,
    pub submit_sign_in: Callback<()>,
    pub submit_sign_out: Callback<()>,
}

#[hook]
pub fn use_attendance(
    api_client: ApiClient,
    class_id: String,
    notifier: Notifier,
    on_signed_in: Callback<()>,
    on_signed_out: Callback<()>,
) -> UseAttendanceResult {
    let sign_in_code = use_state(String::new);
    let sign_out_code = use_state(String::new);
    let signing_in = use_state(|| false);
    let signing_out = use_state(|| false);
    let sign_in_error = use_state(|| Option::<String>::None);
    let sign_out_error = use_state(|| Option::<String>::None);
    let signed_in = use_state(|| false);
    let signed_out = use_state(|| false);

    // Current values for the submit callbacks and in-flight tasks
    let sign_in_code_ref = use_mut_ref(String::new);
    let sign_out_code_ref = use_mut_ref(String::new);
    let signing_in_ref = use_mut_ref(|| false);
    let signing_out_ref = use_mut_ref(|| false);
    let is_mounted = use_mut_ref(|| true);

    {
        let is_mounted = is_mounted.clone();
        use_effect_with((), move |_| {
            move || {
                *is_mounted.borrow_mut() = false;
            }
        });
    }

    let on_sign_in_code_change = {
        let sign_in_code = sign_in_code.clone();
        let sign_in_code_ref = sign_in_code_ref.clone();
        let sign_in_error = sign_in_error.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            *sign_in_code_ref.borrow_mut() = value.clone();
            sign_in_code.set(value);
            sign_in_error.set(None);
        })
    };

    let on_sign_out_code_change = {
        let sign_out_code = sign_out_code.clone();
        let sign_out_code_ref = sign_out_code_ref.clone();
        let sign_out_error = sign_out_error.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            *sign_out_code_ref.borrow_mut() = value.clone();
            sign_out_code.set(value);
            sign_out_error.set(None);
        })
    };

    let submit_sign_in = {
        let api_client = api_client.clone();
        let class_id = class_id.clone();
        let notifier = notifier.clone();
        let on_signed_in = on_signed_in.clone();
        let sign_in_code = sign_in_code.clone();
        let sign_in_code_ref = sign_in_code_ref.clone();
        let signing_in = signing_in.clone();
        let signing_in_ref = signing_in_ref.clone();
        let sign_in_error = sign_in_error.clone();
        let signed_in = signed_in.clone();
        let is_mounted = is_mounted.clone();

        use_callback((), move |_, _| {
            if *signing_in_ref.borrow() {
                return;
            }
            let code = sign_in_code_ref.borrow().trim().to_string();
            if code.is_empty() {
                // Local gate only; code correctness is the server's call
                sign_in_error.set(Some("Enter the sign-in code".to_string()));
                return;
            }
            *signing_in_ref.borrow_mut() = true;
            signing_in.set(true);
            sign_in_error.set(None);

            let api_client = api_client.clone();
            let class_id = class_id.clone();
            let notifier = notifier.clone();
            let on_signed_in = on_signed_in.clone();
            let sign_in_code = sign_in_code.clone();
            let sign_in_code_ref = sign_in_code_ref.clone();
            let signing_in = signing_in.clone();
            let signing_in_ref = signing_in_ref.clone();
            let signed_in = signed_in.clone();
            let is_mounted = is_mounted.clone();

            spawn_local(async move {
                let request = SignInRequest {
                    class_id,
                    sign_in_code: code,
                };
                let result = api_client.sign_in(&request).await;
                *signing_in_ref.borrow_mut() = false;
                if !*is_mounted.borrow() {
                    return;
                }
                signing_in.set(false);

                match result {
                    Ok(message) => {
                        signed_in.set(true);
                        sign_in_code.set(String::new());
                        sign_in_code_ref.borrow_mut().clear();
                        notifier.success(message.unwrap_or_else(|| "Signed in".to_string()));
                        on_signed_in.emit(());
                    }
                    Err(err) => {
                        Logger::warn_with_component(
                            COMPONENT,
                            &format!("sign-in failed: {}", err),
                        );
                        notifier.error(err.user_message("Failed to sign in"));
                    }
                }
            });
        })
    };

    let submit_sign_out = {
        let api_client = api_client.clone();
        let class_id = class_id.clone();
        let notifier = notifier.clone();
        let on_signed_out = on_signed_out.clone();
        let sign_out_code = sign_out_code.clone();
        let sign_out_code_ref = sign_out_code_ref.clone();
        let signing_out = signing_out.clone();
        let signing_out_ref = signing_out_ref.clone();
        let sign_out_error = sign_out_error.clone();
        let signed_out = signed_out.clone();
        let is_mounted = is_mounted.clone();

        use_callback((), move |_, _| {
            if *signing_out_ref.borrow() {
                return;
            }
            let code = sign_out_code_ref.borrow().trim().to_string();
            if code.is_empty() {
                sign_out_error.set(Some("Enter the sign-out code".to_string()));
                return;
            }
            *signing_out_ref.borrow_mut() = true;
            signing_out.set(true);
            sign_out_error.set(None);

            let api_client = api_client.clone();
            let class_id = class_id.clone();
            let notifier = notifier.clone();
            let on_signed_out = on_signed_out.clone();
            let sign_out_code = sign_out_code.clone();
            let sign_out_code_ref = sign_out_code_ref.clone();
            let signing_out = signing_out.clone();
            let signing_out_ref = signing_out_ref.clone();
            let signed_out = signed_out.clone();
            let is_mounted = is_mounted.clone();

            spawn_local(async move {
                let request = SignOutRequest {
                    class_id,
                    sign_out_code: code,
                };
                let result = api_client.sign_out(&request).await;
                *signing_out_ref.borrow_mut() = false;
                if !*is_mounted.borrow() {
                    return;
                }
                signing_out.set(false);

                match result {
                    Ok(message) => {
                        signed_out.set(true);
                        sign_out_code.set(String::new());
                        sign_out_code_ref.borrow_mut().clear();
                        notifier.success(message.unwrap_or_else(|| "Signed out".to_string()));
                        on_signed_out.emit(());
                    }
                    Err(err) => {
                        Logger::warn_with_component(
                            COMPONENT,
                            &format!("sign-out failed: {}", err),
                        );
                        notifier.error(err.user_message("Failed to sign out"));
                    }
                }
            });
        })
    };

    let state = AttendanceFormState {
        sign_in_code: (*sign_in_code).clone(),
        sign_out_code: (*sign_out_code).clone(),
        signing_in: *signing_in,
        signing_out: *signing_out,
        sign_in_error: (*sign_in_error).clone(),
        sign_out_error: (*sign_out_error).clone(),
        signed_in: *signed_in,
        signed_out: *signed_out,
    };

    let actions = AttendanceActions {
        on_sign_in_code_change,
        on_sign_out_code_change,
        submit_sign_in,
        submit_sign_out,
    };

    UseAttendanceResult { state, actions }
}
