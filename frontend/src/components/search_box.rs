use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub value: String,
    pub placeholder: String,
    pub on_input: Callback<InputEvent>,
}

#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    html! {
        <div class="search-box">
            <input
                type="search"
                class="search-input"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={props.on_input.clone()}
            />
        </div>
    }
}
