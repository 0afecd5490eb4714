use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{
        Route,
        Router,
        Routes,
    },
    StaticSegment,
    ParamSegment,
};

mod navigation;

use crate::conf::Config;
use crate::error_template::NotFound;
use crate::employee::{
    EmployeeCreate,
    EmployeeEdit,
    EmployeeListing,
    EmployeeView,
    SearchResults,
};
use crate::reference::{
    CertificationAdd,
    LanguageAdd,
    SkillAdd,
};
use navigation::Navbar;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(Config::default());

    view! {
        <Title text="HR Management App"/>
        <Router>
            <header>
                <Navbar/>
            </header>
            <main>
                <Routes fallback=NotFound>
                    <Route path=StaticSegment("") view=EmployeeListing/>
                    <Route path=(StaticSegment("employees"), StaticSegment("new")) view=EmployeeCreate/>
                    <Route path=(StaticSegment("employees"), ParamSegment("id")) view=EmployeeView/>
                    <Route
                        path=(StaticSegment("employees"), ParamSegment("id"), StaticSegment("edit"))
                        view=EmployeeEdit
                        />
                    <Route path=(StaticSegment("skills"), StaticSegment("new")) view=SkillAdd/>
                    <Route path=(StaticSegment("certifications"), StaticSegment("new")) view=CertificationAdd/>
                    <Route path=(StaticSegment("languages"), StaticSegment("new")) view=LanguageAdd/>
                    <Route path=StaticSegment("search") view=SearchResults/>
                </Routes>
            </main>
        </Router>
    }
}
