use hrcore::{
    reference::ReferenceKind,
    route,
};
use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::use_navigate,
};

#[component]
pub fn Navbar() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let navigate = use_navigate();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate(&route::search_href(&query.get_untracked()), Default::default());
    };

    let reference_links = ReferenceKind::ALL.into_iter()
        .map(|kind| view! {
            <A href=kind.new_href()>{format!("Add {}", kind.label().to_lowercase())}</A>
        })
        .collect_view();

    view! {
        <nav>
            <A href=route::EMPLOYEE_LISTING attr:class="brand">"HR Management App"</A>
            <form role="search" on:submit=on_search>
                <input
                    type="search"
                    name="query"
                    placeholder="Search employees"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
            <A href=route::EMPLOYEE_LISTING>"Employees"</A>
            <A href=route::EMPLOYEE_NEW>"Add employee"</A>
            {reference_links}
        </nav>
    }
}
