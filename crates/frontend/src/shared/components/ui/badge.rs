use leptos::prelude::*;

/// Coloured pill around a status value
#[component]
pub fn Badge(
    /// "success", "warning", "error" or "neutral" (default)
    #[prop(optional)]
    variant: &'static str,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=format!("badge {}", variant_class)>
            {children()}
        </span>
    }
}
