use leptos::prelude::*;

/// Labelled form input. `input_type` covers text, number and date fields.
#[component]
pub fn Input(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// "text" (default), "number", "date", ...
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)]
    placeholder: Option<&'static str>,
    /// Lower bound for number inputs
    #[prop(optional)]
    min: Option<&'static str>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>
                {label}
                {required.then_some(" *")}
            </label>
            <input
                id=id
                class="form__input"
                type=input_type.unwrap_or("text")
                prop:value=move || value.get()
                placeholder=placeholder
                min=min
                required=required
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
