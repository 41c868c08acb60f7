use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: u32,
    pub total_pages: u32,
    pub on_navigate: Callback<u32>,
}

/// Prev/next plus numbered page buttons. Navigation outside
/// `[1, total_pages]` is already a no-op in the list hook; the bound
/// buttons are disabled here as well so the UI reads right.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }

    let go = |target: u32| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(target))
    };

    html! {
        <div class="pagination">
            <button
                type="button"
                class="page-btn"
                disabled={props.current_page <= 1}
                onclick={go(props.current_page.saturating_sub(1))}
            >
                {"‹"}
            </button>
            {for (1..=props.total_pages).map(|n| {
                let class = if n == props.current_page {
                    "page-btn page-btn-active"
                } else {
                    "page-btn"
                };
                html! {
                    <button type="button" class={class} onclick={go(n)} key={n.to_string()}>
                        {n}
                    </button>
                }
            })}
            <button
                type="button"
                class="page-btn"
                disabled={props.current_page >= props.total_pages}
                onclick={go(props.current_page + 1)}
            >
                {"›"}
            </button>
        </div>
    }
}
