use leptos::prelude::*;

#[component]
pub fn Textarea(
    #[prop(into)] label: String,
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>
                {label}
                {required.then_some(" *")}
            </label>
            <textarea
                id=id
                class="form__textarea"
                rows=rows.unwrap_or(4)
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
