use hrcore::{
    form::{
        self,
        Subject,
    },
    reference::ReferenceKind,
};
use leptos::{
    ev::SubmitEvent,
    logging,
    prelude::*,
    task::spawn_local,
};
use leptos_router::hooks::use_navigate;

use crate::api::HttpPlatform;
use crate::component::{
    Binding,
    TextInput,
};
use crate::conf::Config;

#[component]
pub fn SkillAdd() -> impl IntoView {
    view! { <ReferenceForm kind=ReferenceKind::Skill/> }
}

#[component]
pub fn CertificationAdd() -> impl IntoView {
    view! { <ReferenceForm kind=ReferenceKind::Certification/> }
}

#[component]
pub fn LanguageAdd() -> impl IntoView {
    view! { <ReferenceForm kind=ReferenceKind::Language/> }
}

/// Single-field create form; returns to the root view once created.
#[component]
fn ReferenceForm(kind: ReferenceKind) -> impl IntoView {
    let platform = HttpPlatform::from(&expect_context::<Config>());
    let name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        error.set(None);
        let value = name.get_untracked();
        let platform = platform.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = form::submit_reference(&platform, kind, &value).await;
            if submitting.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(href) => navigate(&href, Default::default()),
                Err(e) => {
                    logging::warn!("failed to add {kind}: {e}");
                    error.set(Some(e.message(Subject::Reference(kind))));
                }
            }
        });
    };

    let binding = Binding {
        value: name.into(),
        set: Callback::new(move |value: String| name.set(value)),
    };

    view! {
        <h1>{format!("Add {}", kind.label().to_lowercase())}</h1>
        <form on:submit=on_submit>
            <TextInput name="name" label="Name" binding=binding/>
            {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
            <button type="submit" disabled=move || submitting.get()>"Add"</button>
        </form>
    }
}
