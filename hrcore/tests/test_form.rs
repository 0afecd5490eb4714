use mockall::predicate::eq;
use hrcore::{
    editor::{
        Collection,
        EmployeeDraft,
        LanguageField,
        Mode,
    },
    employee::Employee,
    error::{
        BackendError,
        FieldErrors,
        ValueError,
    },
    form::{
        self,
        Subject,
        SubmitError,
        CONNECTIVITY_FAILURE,
        DECODE_FAILURE,
        EMPLOYEE_FAILURE,
    },
    reference::{
        Reference,
        ReferenceKind,
        References,
    },
    route,
};
use test_hr::{
    core::MockPlatform,
    fixture,
};

fn saved(id: i64) -> Employee {
    Employee {
        id,
        first_name: "Anna".to_string(),
        last_name: "Ivanova".to_string(),
        .. Default::default()
    }
}

#[async_std::test]
async fn skill_created_then_root() -> anyhow::Result<()> {
    let mut platform = MockPlatform::new();
    platform.expect_reference_create()
        .times(1)
        .withf(|kind: &ReferenceKind, name: &str| {
            *kind == ReferenceKind::Skill && name == "SQL"
        })
        .returning(|_, name| Ok(Reference { id: 11, name: name.to_string() }));

    let href = form::submit_reference(&platform, ReferenceKind::Skill, "SQL").await?;
    assert_eq!(href, "/");
    assert_eq!(ReferenceKind::Skill.collection_path(), "/skills/");
    Ok(())
}

#[async_std::test]
async fn reference_validation_message() -> anyhow::Result<()> {
    let mut platform = MockPlatform::new();
    platform.expect_reference_create()
        .times(1)
        .returning(|_, _| Err(BackendError::Validation(FieldErrors::from([
            ("name", "language with this name already exists."),
        ]))));

    let kind = ReferenceKind::Language;
    let err = form::submit_reference(&platform, kind, "English").await
        .expect_err("should be an error");
    assert_eq!(
        err.message(Subject::Reference(kind)),
        "language with this name already exists.",
    );
    Ok(())
}

#[async_std::test]
async fn reference_blank_name_not_sent() -> anyhow::Result<()> {
    let mut platform = MockPlatform::new();
    platform.expect_reference_create()
        .times(0);

    let err = form::submit_reference(&platform, ReferenceKind::Certification, "  ").await
        .expect_err("should be an error");
    assert_eq!(err, SubmitError::Value(ValueError::Required("Name")));
    assert_eq!(
        err.message(Subject::Reference(ReferenceKind::Certification)),
        "Name is required.",
    );
    Ok(())
}

#[async_std::test]
async fn reference_fetch_failure_degrades() -> anyhow::Result<()> {
    let mut platform = MockPlatform::new();
    platform.expect_reference_list()
        .with(eq(ReferenceKind::Skill))
        .times(1)
        .returning(|_| Err(BackendError::Transport("connection refused".to_string())));
    platform.expect_reference_list()
        .with(eq(ReferenceKind::Language))
        .times(1)
        .returning(|_| Ok(References::from([
            Reference { id: 1, name: "English".to_string() },
        ])));

    let skills = form::load_references(&platform, ReferenceKind::Skill).await;
    let languages = form::load_references(&platform, ReferenceKind::Language).await;
    assert!(skills.is_empty());
    assert_eq!(languages.options(), vec![("1".to_string(), "English".to_string())]);
    Ok(())
}

#[async_std::test]
async fn create_posts_and_links_to_new_record() -> anyhow::Result<()> {
    let mut draft = EmployeeDraft::from(fixture::employee()?);
    // an incomplete language entry must not be sent
    let key = draft.append(Collection::Languages);
    draft.set_row_value(key, LanguageField::ProficiencyLevel.into(), "beginner")?;

    let mut platform = MockPlatform::new();
    platform.expect_employee_update()
        .times(0);
    platform.expect_employee_create()
        .times(1)
        .withf(|payload| payload.languages.len() == 2 && payload.skills.len() == 2)
        .returning(|_| Ok(saved(42)));

    let href = form::submit_employee(&platform, Mode::Create, &draft).await?;
    assert_eq!(href, "/employees/42");
    // the draft is left intact
    assert_eq!(draft.len(Collection::Languages), 3);
    Ok(())
}

#[async_std::test]
async fn edit_puts_to_own_record() -> anyhow::Result<()> {
    let mut platform = MockPlatform::new();
    platform.expect_employee_get()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(fixture::employee().expect("fixture decodes")));
    platform.expect_employee_create()
        .times(0);
    platform.expect_employee_update()
        .withf(|id, payload| *id == 1 && payload.first_name == "Anya")
        .times(1)
        .returning(|id, _| Ok(saved(id)));

    let mode = Mode::from(Some(1));
    let mut draft = form::load_draft(&platform, mode).await?;
    draft.first_name = "Anya".to_string();
    let href = form::submit_employee(&platform, mode, &draft).await?;
    assert_eq!(href, route::employee_href(1));
    Ok(())
}

#[async_std::test]
async fn create_mode_loads_without_request() -> anyhow::Result<()> {
    let mut platform = MockPlatform::new();
    platform.expect_employee_get()
        .times(0);
    let draft = form::load_draft(&platform, Mode::Create).await?;
    assert_eq!(draft, EmployeeDraft::default());
    Ok(())
}

#[async_std::test]
async fn missing_required_field_not_sent() -> anyhow::Result<()> {
    let mut draft = EmployeeDraft::from(fixture::employee()?);
    draft.phone_number.clear();

    let mut platform = MockPlatform::new();
    platform.expect_employee_create()
        .times(0);

    let err = form::submit_employee(&platform, Mode::Create, &draft).await
        .expect_err("should be an error");
    assert_eq!(err.message(Subject::Employee), "Phone number is required.");
    Ok(())
}

#[async_std::test]
async fn employee_failure_messages() -> anyhow::Result<()> {
    let draft = EmployeeDraft::from(fixture::employee()?);

    let mut platform = MockPlatform::new();
    let mut seq = mockall::Sequence::new();
    platform.expect_employee_update()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Err(BackendError::Validation(FieldErrors::from([
            ("first_name", "Ensure this field has no more than 100 characters."),
        ]))));
    platform.expect_employee_update()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Err(BackendError::Validation(FieldErrors::from([
            ("email", "Enter a valid email address."),
        ]))));
    platform.expect_employee_update()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Err(BackendError::Transport("timed out".to_string())));
    platform.expect_employee_update()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Err(BackendError::Decode("expected value at line 1".to_string())));

    let mode = Mode::Edit(1);
    let err = form::submit_employee(&platform, mode, &draft).await
        .expect_err("should be an error");
    assert_eq!(
        err.message(Subject::Employee),
        "Ensure this field has no more than 100 characters.",
    );
    let err = form::submit_employee(&platform, mode, &draft).await
        .expect_err("should be an error");
    assert_eq!(err.message(Subject::Employee), EMPLOYEE_FAILURE);
    let err = form::submit_employee(&platform, mode, &draft).await
        .expect_err("should be an error");
    assert_eq!(err.message(Subject::Employee), CONNECTIVITY_FAILURE);
    let err = form::submit_employee(&platform, mode, &draft).await
        .expect_err("should be an error");
    assert_eq!(err.message(Subject::Employee), DECODE_FAILURE);
    Ok(())
}

#[async_std::test]
async fn search_results() -> anyhow::Result<()> {
    let mut platform = MockPlatform::new();
    platform.expect_employee_list()
        .with(eq(Some("Ivan".to_string())))
        .times(1)
        .returning(|_| Ok(serde_json::from_str(r#"[
            {"id": 1, "first_name": "Ivan", "last_name": "Petrov"},
            {"id": 2, "first_name": "Anna", "last_name": "Ivanova"}
        ]"#).expect("valid listing")));

    let query = "Ivan";
    let results = form::search(&platform, query).await?;
    let entries = results.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].href, "/employees/2");
    assert_eq!(route::search_heading(query), "Search results for: \"Ivan\"");
    Ok(())
}

#[async_std::test]
async fn empty_search_issues_no_request() -> anyhow::Result<()> {
    let mut platform = MockPlatform::new();
    platform.expect_employee_list()
        .times(0);
    assert!(form::search(&platform, "").await?.is_empty());
    assert!(form::search(&platform, "   ").await?.is_empty());
    Ok(())
}
