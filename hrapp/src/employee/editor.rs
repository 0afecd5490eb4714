use hrcore::{
    editor::{
        CertificationField,
        Collection,
        EducationField,
        EmployeeDraft,
        EmployeeField,
        FamilyField,
        LanguageField,
        Mode,
        PassportField,
        RowField,
        RowKey,
        SkillField,
        WorkExperienceField,
    },
    employee::{
        EducationLevel,
        Gender,
        MaritalStatus,
        ProficiencyLevel,
    },
    error::ValueError,
    form::{
        self,
        Subject,
    },
    reference::{
        ReferenceKind,
        References,
    },
};
use leptos::{
    ev::SubmitEvent,
    logging,
    prelude::*,
    task::spawn_local,
};
use leptos_router::hooks::use_navigate;

use crate::component::{
    Binding,
    SelectMap,
    TextArea,
    TextInput,
};
use crate::error_template::NotFound;
use super::{
    loading,
    platform,
    use_employee_id,
};

/// Editable state shared by every control of one editor instance.
#[derive(Clone, Copy)]
struct EditorCtx {
    draft: RwSignal<EmployeeDraft>,
    skills: RwSignal<References>,
    certifications: RwSignal<References>,
    languages: RwSignal<References>,
}

impl EditorCtx {
    fn new() -> Self {
        Self {
            draft: RwSignal::new(EmployeeDraft::default()),
            skills: RwSignal::new(References::default()),
            certifications: RwSignal::new(References::default()),
            languages: RwSignal::new(References::default()),
        }
    }

    fn references(&self, kind: ReferenceKind) -> RwSignal<References> {
        match kind {
            ReferenceKind::Skill => self.skills,
            ReferenceKind::Certification => self.certifications,
            ReferenceKind::Language => self.languages,
        }
    }

    fn options(&self, kind: ReferenceKind) -> Signal<Vec<(String, String)>> {
        let references = self.references(kind);
        Signal::derive(move || references.with(References::options))
    }

    fn bind(
        &self,
        read: impl Fn(&EmployeeDraft) -> String + Send + Sync + 'static,
        write: impl Fn(&mut EmployeeDraft, &str) -> Result<(), ValueError> + Send + Sync + 'static,
    ) -> Binding {
        let draft = self.draft;
        Binding {
            value: Signal::derive(move || draft.with(&read)),
            set: Callback::new(move |value: String| draft.update(|draft| {
                if let Err(e) = write(draft, &value) {
                    logging::warn!("rejected input {value:?}: {e}");
                }
            })),
        }
    }

    fn scalar(&self, field: EmployeeField) -> Binding {
        self.bind(
            move |draft| draft.field(field),
            move |draft, value| draft.set_field(field, value),
        )
    }

    fn passport(&self, field: PassportField) -> Binding {
        self.bind(
            move |draft| draft.passport(field),
            move |draft, value| {
                draft.set_passport(field, value);
                Ok(())
            },
        )
    }

    fn family(&self, field: FamilyField) -> Binding {
        self.bind(
            move |draft| draft.family(field),
            move |draft, value| draft.set_family(field, value),
        )
    }

    fn row(&self, key: RowKey, field: RowField) -> Binding {
        self.bind(
            move |draft| draft.row_value(key, field).unwrap_or_default(),
            move |draft, value| draft.set_row_value(key, field, value),
        )
    }

    fn append(&self, collection: Collection) {
        self.draft.update(|draft| {
            draft.append(collection);
        });
    }

    fn remove(&self, collection: Collection, key: RowKey) {
        self.draft.update(|draft| {
            let removed = draft.position(collection, key)
                .map(|index| draft.remove(collection, index));
            if let Some(Err(e)) = removed {
                logging::warn!("failed to remove {collection} row: {e}");
            }
        });
    }
}

#[component]
pub fn EmployeeCreate() -> impl IntoView {
    view! { <EmployeeEditor mode=Mode::Create/> }
}

#[component]
pub fn EmployeeEdit() -> impl IntoView {
    let id = use_employee_id();
    move || match id.get() {
        Some(id) => view! { <EmployeeEditor mode=Mode::Edit(id)/> }.into_any(),
        None => view! { <NotFound/> }.into_any(),
    }
}

#[component]
fn EmployeeEditor(mode: Mode) -> impl IntoView {
    let platform = platform();
    let ctx = EditorCtx::new();
    let ready = RwSignal::new(!mode.is_edit());

    for kind in ReferenceKind::ALL {
        let platform = platform.clone();
        let target = ctx.references(kind);
        spawn_local(async move {
            let references = form::load_references(&platform, kind).await;
            target.try_set(references);
        });
    }

    if mode.is_edit() {
        spawn_local(async move {
            match form::load_draft(&platform, mode).await {
                Ok(draft) => {
                    ctx.draft.try_set(draft);
                    ready.try_set(true);
                }
                Err(e) => logging::error!("error loading employee for editing: {e}"),
            }
        });
    }

    view! {
        <h1>{mode.heading()}</h1>
        <Show when=move || ready.get() fallback=loading>
            <EditorForm mode=mode ctx=ctx/>
        </Show>
    }
}

#[component]
fn EditorForm(mode: Mode, ctx: EditorCtx) -> impl IntoView {
    let platform = platform();
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
        let draft = ctx.draft.get_untracked();
        let platform = platform.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = form::submit_employee(&platform, mode, &draft).await;
            if submitting.try_set(false).is_some() {
                // the form is gone
                return;
            }
            match result {
                Ok(href) => navigate(&href, Default::default()),
                Err(e) => {
                    logging::warn!("employee submission failed: {e}");
                    error.set(Some(e.message(Subject::Employee)));
                }
            }
        });
    };

    let scalar = move |field: EmployeeField, kind: &'static str| view! {
        <TextInput name=field.name() label=field.label() kind=kind binding=ctx.scalar(field)/>
    };
    let passport = move |field: PassportField, kind: &'static str| view! {
        <TextInput name=field.name() label=field.label() kind=kind binding=ctx.passport(field)/>
    };

    view! {
        <form on:submit=on_submit>
            <fieldset>
                <legend>"Personal details"</legend>
                {scalar(EmployeeField::LastName, "text")}
                {scalar(EmployeeField::FirstName, "text")}
                {scalar(EmployeeField::Patronymic, "text")}
                {scalar(EmployeeField::DateOfBirth, "date")}
                <SelectMap
                    name=EmployeeField::Gender.name()
                    label=EmployeeField::Gender.label()
                    options=Gender::options()
                    binding=ctx.scalar(EmployeeField::Gender)/>
                {scalar(EmployeeField::Nationality, "text")}
                {scalar(EmployeeField::Email, "email")}
                {scalar(EmployeeField::PhoneNumber, "tel")}
                {scalar(EmployeeField::Address, "text")}
            </fieldset>
            <fieldset>
                <legend>"Passport"</legend>
                {passport(PassportField::PassportNumber, "text")}
                {passport(PassportField::IssuedBy, "text")}
                {passport(PassportField::DateIssued, "date")}
                {passport(PassportField::DateExpiry, "date")}
            </fieldset>
            <fieldset>
                <legend>"Family"</legend>
                <SelectMap
                    name=FamilyField::MaritalStatus.name()
                    label=FamilyField::MaritalStatus.label()
                    options=MaritalStatus::options()
                    binding=ctx.family(FamilyField::MaritalStatus)/>
                <TextInput
                    name=FamilyField::NumberOfChildren.name()
                    label=FamilyField::NumberOfChildren.label()
                    kind="number"
                    binding=ctx.family(FamilyField::NumberOfChildren)/>
            </fieldset>
            {Collection::ALL.into_iter()
                .map(|collection| view! { <CollectionFieldset ctx=ctx collection=collection/> })
                .collect_view()}
            {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
            <button type="submit" disabled=move || submitting.get()>{mode.submit_label()}</button>
        </form>
    }
}

#[component]
fn CollectionFieldset(ctx: EditorCtx, collection: Collection) -> impl IntoView {
    view! {
        <fieldset>
            <legend>{collection.label()}</legend>
            <For
                each=move || ctx.draft.with(|draft| draft.keys(collection))
                key=|key| *key
                children=move |key| view! {
                    <div class="row">
                        {row_fields(ctx, collection, key)}
                        <button type="button" on:click=move |_| ctx.remove(collection, key)>
                            "Remove"
                        </button>
                    </div>
                }
            />
            <button type="button" on:click=move |_| ctx.append(collection)>
                {collection.add_label()}
            </button>
        </fieldset>
    }
}

fn row_input(
    ctx: EditorCtx,
    key: RowKey,
    field: impl Into<RowField>,
    kind: &'static str,
) -> impl IntoView {
    let field = field.into();
    view! {
        <TextInput name=field.name() label=field.label() kind=kind binding=ctx.row(key, field)/>
    }
}

fn row_select(
    ctx: EditorCtx,
    key: RowKey,
    field: impl Into<RowField>,
    options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    let field = field.into();
    view! {
        <SelectMap name=field.name() label=field.label() options=options binding=ctx.row(key, field)/>
    }
}

fn row_fields(ctx: EditorCtx, collection: Collection, key: RowKey) -> AnyView {
    match collection {
        Collection::Educations => view! {
            {row_select(ctx, key, EducationField::EducationLevel,
                Signal::stored(EducationLevel::options()))}
            {row_input(ctx, key, EducationField::Institution, "text")}
            {row_input(ctx, key, EducationField::GraduationYear, "number")}
            {row_input(ctx, key, EducationField::Specialty, "text")}
        }.into_any(),
        Collection::WorkExperiences => {
            let field = RowField::from(WorkExperienceField::Responsibilities);
            view! {
                {row_input(ctx, key, WorkExperienceField::Employer, "text")}
                {row_input(ctx, key, WorkExperienceField::Position, "text")}
                {row_input(ctx, key, WorkExperienceField::StartDate, "date")}
                {row_input(ctx, key, WorkExperienceField::EndDate, "date")}
                <TextArea name=field.name() label=field.label() binding=ctx.row(key, field)/>
            }.into_any()
        }
        Collection::Skills => view! {
            {row_select(ctx, key, SkillField::SkillId, ctx.options(ReferenceKind::Skill))}
        }.into_any(),
        Collection::Certifications => view! {
            {row_select(ctx, key, CertificationField::CertificationId,
                ctx.options(ReferenceKind::Certification))}
            {row_input(ctx, key, CertificationField::DateObtained, "date")}
        }.into_any(),
        Collection::Languages => view! {
            {row_select(ctx, key, LanguageField::LanguageId, ctx.options(ReferenceKind::Language))}
            {row_select(ctx, key, LanguageField::ProficiencyLevel,
                Signal::stored(ProficiencyLevel::options()))}
        }.into_any(),
    }
}
