use hrcore::{
    employee::{
        Employee,
        ListEntry,
    },
    form,
    platform::EmployeeBackend,
    route,
};
use leptos::logging;
use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::{
        use_params,
        use_query_map,
    },
    params::Params,
};

mod editor;

pub use editor::{
    EmployeeCreate,
    EmployeeEdit,
};

use crate::api::HttpPlatform;
use crate::conf::Config;
use crate::error_template::NotFound;

#[derive(Params, PartialEq, Clone, Debug)]
pub struct EmployeeParams {
    id: Option<i64>,
}

/// The id from the route, if it parses.
pub fn use_employee_id() -> Signal<Option<i64>> {
    let params = use_params::<EmployeeParams>();
    Signal::derive(move || params.with(|params| params.as_ref()
        .ok()
        .and_then(|params| params.id)))
}

fn platform() -> HttpPlatform {
    HttpPlatform::from(&expect_context::<Config>())
}

fn loading() -> AnyView {
    view! { <p>"Loading..."</p> }.into_any()
}

fn entry_list(entries: Vec<ListEntry>) -> impl IntoView {
    view! {
        <ul class="employees">
            {entries.into_iter()
                .map(|ListEntry { label, href, .. }| view! {
                    <li><A href=href>{label}</A></li>
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn EmployeeListing() -> impl IntoView {
    let platform = platform();
    let employees = LocalResource::new(move || {
        let platform = platform.clone();
        async move { platform.list_employees(None).await }
    });

    let listing = move || Suspend::new(async move {
        match employees.await {
            Ok(employees) => {
                logging::log!("loaded {} employee entries", employees.len());
                entry_list(employees.entries()).into_any()
            }
            Err(e) => {
                logging::error!("error loading employees: {e}");
                loading()
            }
        }
    });

    view! {
        <h1>"Employees"</h1>
        <Suspense fallback=loading>
            {listing}
        </Suspense>
    }
}

#[component]
pub fn EmployeeView() -> impl IntoView {
    let id = use_employee_id();
    move || match id.get() {
        Some(id) => view! { <EmployeeDetail id=id/> }.into_any(),
        None => view! { <NotFound/> }.into_any(),
    }
}

#[component]
fn EmployeeDetail(id: i64) -> impl IntoView {
    let platform = platform();
    let employee = LocalResource::new(move || {
        let platform = platform.clone();
        async move { platform.get_employee(id).await }
    });

    let detail = move || Suspend::new(async move {
        match employee.await {
            Ok(employee) => employee_detail(employee).into_any(),
            Err(e) => {
                logging::error!("error loading employee {id}: {e}");
                loading()
            }
        }
    });

    view! {
        <Suspense fallback=loading>
            {detail}
        </Suspense>
    }
}

fn field(label: &'static str, value: String) -> impl IntoView {
    view! { <p><strong>{label}": "</strong>{value}</p> }
}

fn employee_detail(employee: Employee) -> impl IntoView {
    let passport = employee.passport_info.clone().map(|passport| view! {
        <section>
            <h2>"Passport"</h2>
            {field("Passport number", passport.passport_number)}
            {field("Issued by", passport.issued_by)}
            {field("Date issued", passport.date_issued.unwrap_or_default())}
            {field("Expiry date", passport.date_expiry.unwrap_or_default())}
        </section>
    });
    let family = employee.family.clone().map(|family| view! {
        <section>
            <h2>"Family"</h2>
            {field("Marital status", family.marital_status
                .map(|status| status.label().to_string())
                .unwrap_or_default())}
            {field("Number of children", family.number_of_children.to_string())}
        </section>
    });
    let educations = (!employee.educations.is_empty()).then(|| view! {
        <section>
            <h2>"Education"</h2>
            {employee.educations.iter()
                .cloned()
                .map(|education| view! {
                    <div class="card">
                        {field("Institution", education.institution)}
                        {field("Education level", education.education_level
                            .map(|level| level.label().to_string())
                            .unwrap_or_default())}
                        {field("Graduation year", education.graduation_year
                            .map(|year| year.to_string())
                            .unwrap_or_default())}
                        {field("Specialty", education.specialty)}
                    </div>
                })
                .collect_view()}
        </section>
    });
    let work_experiences = (!employee.work_experiences.is_empty()).then(|| view! {
        <section>
            <h2>"Work experience"</h2>
            {employee.work_experiences.iter()
                .map(|work| {
                    let end_date = work.end_date_label().to_string();
                    view! {
                        <div class="card">
                            {field("Employer", work.employer.clone())}
                            {field("Position", work.position.clone())}
                            {field("Start date", work.start_date.clone())}
                            {field("End date", end_date)}
                            {field("Responsibilities", work.responsibilities.clone()
                                .unwrap_or_default())}
                        </div>
                    }
                })
                .collect_view()}
        </section>
    });
    let skills = (!employee.skills_info.is_empty()).then(|| view! {
        <section>
            <h2>"Skills"</h2>
            <ul>
                {employee.skills_info.iter()
                    .map(|item| view! { <li>{item.skill.name.clone()}</li> })
                    .collect_view()}
            </ul>
        </section>
    });
    let certifications = (!employee.certifications_info.is_empty()).then(|| view! {
        <section>
            <h2>"Certifications"</h2>
            <ul>
                {employee.certifications_info.iter()
                    .map(|item| view! {
                        <li>{format!(
                            "{} (obtained {})",
                            item.certification.name,
                            item.date_obtained,
                        )}</li>
                    })
                    .collect_view()}
            </ul>
        </section>
    });
    let languages = (!employee.languages_info.is_empty()).then(|| view! {
        <section>
            <h2>"Languages"</h2>
            <ul>
                {employee.languages_info.iter()
                    .map(|item| view! {
                        <li>{format!(
                            "{} ({})",
                            item.language.name,
                            item.proficiency_level.label(),
                        )}</li>
                    })
                    .collect_view()}
            </ul>
        </section>
    });

    view! {
        <h1>{employee.full_name()}</h1>
        <section>
            {field("Date of birth", employee.date_of_birth.clone().unwrap_or_default())}
            {field("Gender", employee.gender
                .map(|gender| gender.label().to_string())
                .unwrap_or_default())}
            {field("Nationality", employee.nationality.clone())}
            {field("Email", employee.email.clone())}
            {field("Phone number", employee.phone_number.clone())}
            {field("Address", employee.address.clone())}
        </section>
        {passport}
        {family}
        {educations}
        {work_experiences}
        {skills}
        {certifications}
        {languages}
        <p><A href=employee.edit_href()>"Edit"</A></p>
    }
}

#[component]
pub fn SearchResults() -> impl IntoView {
    let query_map = use_query_map();
    let query = Signal::derive(move || query_map.with(|map| map.get("query")
        .unwrap_or_default()));

    let platform = platform();
    let results = LocalResource::new(move || {
        let platform = platform.clone();
        let query = query.get();
        async move { form::search(&platform, &query).await }
    });

    let listing = move || Suspend::new(async move {
        match results.await {
            Ok(results) if results.is_empty() => view! { <p>"No results."</p> }.into_any(),
            Ok(results) => entry_list(results.entries()).into_any(),
            Err(e) => {
                logging::error!("error searching employees: {e}");
                loading()
            }
        }
    });

    view! {
        <h1>{move || route::search_heading(&query.get())}</h1>
        <Transition fallback=loading>
            {listing}
        </Transition>
    }
}
