use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

/// Inline spinner shown while a request is in flight
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex items-center gap-2">
            <span class="loading loading-spinner loading-sm"></span>
            {if let Some(text) = &props.text {
                html! { <span class="text-sm text-gray-500">{text}</span> }
            } else {
                html! {}
            }}
        </div>
    }
}
