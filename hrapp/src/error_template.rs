use crate::error::AppError;
use http::status::StatusCode;
use leptos::{logging::log, prelude::*};

#[component]
pub fn ErrorTemplate(
    #[prop(into)] errors: Signal<Vec<AppError>>,
) -> impl IntoView {
    log!("Errors: {:#?}", errors.get_untracked());

    view! {
        {move || {
            errors.get()
                .into_iter()
                .map(|error| {
                    let error_code = error.status_code();
                    let error_string = (error_code == StatusCode::INTERNAL_SERVER_ERROR)
                        .then(|| format!("Error: {error}"));
                    view! {
                        <h1>{error_code.to_string()}</h1>
                        <p>{error_string}</p>
                    }
                })
                .collect_view()
        }}
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! { <ErrorTemplate errors=vec![AppError::NotFound]/> }
}
