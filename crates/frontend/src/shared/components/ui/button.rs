use leptos::prelude::*;

#[component]
pub fn Button(
    /// "primary" (default), "secondary" or "ghost"
    #[prop(optional)]
    variant: &'static str,
    /// "button" (default) or "submit"
    #[prop(optional)]
    button_type: Option<&'static str>,
    #[prop(optional, into)]
    disabled: Option<Signal<bool>>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "secondary" => "button--secondary",
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=format!("button {}", variant_class)
            disabled=move || disabled.is_some_and(|d| d.get())
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
