use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub search_term: String,
    pub suggestions: Vec<String>,
    pub dropdown_visible: bool,
    pub input_ref: NodeRef,
    pub dropdown_ref: NodeRef,

    pub on_input: Callback<String>,
    pub on_focus: Callback<()>,
    pub on_select: Callback<String>,
}

#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let on_focus = {
        let on_focus = props.on_focus.clone();
        Callback::from(move |_: FocusEvent| on_focus.emit(()))
    };

    html! {
        <div class="search-box">
            <div class="search-input-row">
                <span class="search-icon">{"🔍"}</span>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search Student Name"
                    value={props.search_term.clone()}
                    oninput={on_input}
                    onfocus={on_focus}
                    ref={props.input_ref.clone()}
                />
            </div>
            if props.dropdown_visible {
                <ul class="search-suggestions" ref={props.dropdown_ref.clone()}>
                    {for props.suggestions.iter().map(|suggestion| {
                        let on_click = {
                            let on_select = props.on_select.clone();
                            let suggestion = suggestion.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(suggestion.clone()))
                        };
                        html! {
                            <li class="search-suggestion" onclick={on_click}>
                                {suggestion}
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
