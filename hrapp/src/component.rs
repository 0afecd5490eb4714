use leptos::prelude::*;

/// A form control's view of one leaf of editable state.
#[derive(Clone, Copy)]
pub struct Binding {
    pub value: Signal<String>,
    pub set: Callback<String>,
}

#[component]
pub fn TextInput(
    name: &'static str,
    label: &'static str,
    binding: Binding,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    let Binding { value, set } = binding;
    view! {
        <label>
            {label}
            <input
                type=kind
                name=name
                prop:value=move || value.get()
                on:input=move |ev| set.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextArea(
    name: &'static str,
    label: &'static str,
    binding: Binding,
) -> impl IntoView {
    let Binding { value, set } = binding;
    view! {
        <label>
            {label}
            <textarea
                name=name
                prop:value=move || value.get()
                on:input=move |ev| set.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// A select over `(value, label)` pairs, led by an empty choice.
#[component]
pub fn SelectMap(
    name: &'static str,
    label: &'static str,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    binding: Binding,
) -> impl IntoView {
    let Binding { value, set } = binding;
    let options_view = move || options.get()
        .into_iter()
        .map(|(option, label)| {
            let selected = {
                let option = option.clone();
                move || value.with(|value| value == &option)
            };
            view! { <option value=option prop:selected=selected>{label}</option> }
        })
        .collect_view();
    view! {
        <label>
            {label}
            <select
                name=name
                on:change=move |ev| set.run(event_target_value(&ev))
            >
                <option value="" prop:selected=move || value.with(String::is_empty)></option>
                {options_view}
            </select>
        </label>
    }
}
