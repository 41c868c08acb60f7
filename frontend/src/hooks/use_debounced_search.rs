use gloo::timers::future::TimeoutFuture;
use shared::RequestSequence;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// What the search box binds to: the live input text plus its handler.
pub struct UseDebouncedSearchResult {
    pub text: String,
    pub on_input: Callback<InputEvent>,
}

/// Turn a stream of keystrokes into one settled value per quiet period.
///
/// Every keystroke records the latest text and restarts the quiet-period
/// timer; only the timer belonging to the newest keystroke is allowed to
/// emit, so `on_settled` fires exactly once per pause, carrying the final
/// text. Unmounting invalidates any pending timer, so nothing fires into a
/// dead component.
#[hook]
pub fn use_debounced_search(
    delay_ms: u32,
    on_settled: Callback<String>,
) -> UseDebouncedSearchResult {
    let text = use_state(String::new);

    // Each keystroke takes a new ticket; a timer only emits if its ticket is
    // still the latest when it fires.
    let generation = use_mut_ref(RequestSequence::new);
    let is_mounted = use_mut_ref(|| true);

    {
        let generation = generation.clone();
        let is_mounted = is_mounted.clone();
        use_effect_with((), move |_| {
            move || {
                *is_mounted.borrow_mut() = false;
                generation.borrow_mut().begin();
            }
        });
    }

    let on_input = {
        let text = text.clone();
        let generation = generation.clone();
        let is_mounted = is_mounted.clone();
        use_callback(on_settled, move |e: InputEvent, on_settled| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            text.set(value.clone());

            let ticket = generation.borrow_mut().begin();
            let generation = generation.clone();
            let is_mounted = is_mounted.clone();
            let on_settled = on_settled.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                if !*is_mounted.borrow() || !generation.borrow().is_current(ticket) {
                    // Restarted by a newer keystroke, or the view is gone
                    return;
                }
                on_settled.emit(value);
            });
        })
    };

    UseDebouncedSearchResult {
        text: (*text).clone(),
        on_input,
    }
}
