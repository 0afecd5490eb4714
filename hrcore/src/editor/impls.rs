use crate::{
    employee::payload::{
        EmployeePayload,
        FamilyPayload,
        PassportPayload,
    },
    error::ValueError,
};
use super::{
    row::{parse_choice, parse_number, show},
    *,
};

// Dispatch over the five sub-collections with a body generic in `Row`.
macro_rules! with_rows {
    (mut $draft:expr, $collection:expr, $rows:ident => $body:expr) => {
        match $collection {
            Collection::Educations => { let $rows = &mut $draft.educations; $body }
            Collection::WorkExperiences => { let $rows = &mut $draft.work_experiences; $body }
            Collection::Skills => { let $rows = &mut $draft.skills; $body }
            Collection::Certifications => { let $rows = &mut $draft.certifications; $body }
            Collection::Languages => { let $rows = &mut $draft.languages; $body }
        }
    };
    ($draft:expr, $collection:expr, $rows:ident => $body:expr) => {
        match $collection {
            Collection::Educations => { let $rows = &$draft.educations; $body }
            Collection::WorkExperiences => { let $rows = &$draft.work_experiences; $body }
            Collection::Skills => { let $rows = &$draft.skills; $body }
            Collection::Certifications => { let $rows = &$draft.certifications; $body }
            Collection::Languages => { let $rows = &$draft.languages; $body }
        }
    };
}

// As above, but also unwraps the typed field out of a `RowField`.
macro_rules! with_row_field {
    (mut $draft:expr, $field:expr, ($rows:ident, $f:ident) => $body:expr) => {
        match $field {
            RowField::Education($f) => { let $rows = &mut $draft.educations; $body }
            RowField::WorkExperience($f) => { let $rows = &mut $draft.work_experiences; $body }
            RowField::Skill($f) => { let $rows = &mut $draft.skills; $body }
            RowField::Certification($f) => { let $rows = &mut $draft.certifications; $body }
            RowField::Language($f) => { let $rows = &mut $draft.languages; $body }
        }
    };
    ($draft:expr, $field:expr, ($rows:ident, $f:ident) => $body:expr) => {
        match $field {
            RowField::Education($f) => { let $rows = &$draft.educations; $body }
            RowField::WorkExperience($f) => { let $rows = &$draft.work_experiences; $body }
            RowField::Skill($f) => { let $rows = &$draft.skills; $body }
            RowField::Certification($f) => { let $rows = &$draft.certifications; $body }
            RowField::Language($f) => { let $rows = &$draft.languages; $body }
        }
    };
}

fn out_of_range(index: usize, len: usize) -> ValueError {
    ValueError::IndexOutOfRange { index, len }
}

const REQUIRED_FIELDS: [EmployeeField; 8] = [
    EmployeeField::FirstName,
    EmployeeField::LastName,
    EmployeeField::DateOfBirth,
    EmployeeField::Gender,
    EmployeeField::Nationality,
    EmployeeField::Email,
    EmployeeField::PhoneNumber,
    EmployeeField::Address,
];

impl RowKey {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Mode {
    pub fn is_edit(&self) -> bool {
        matches!(self, Mode::Edit(_))
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Mode::Create => "Add employee",
            Mode::Edit(_) => "Edit employee",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Mode::Create => "Add employee",
            Mode::Edit(_) => "Save changes",
        }
    }
}

impl From<Option<i64>> for Mode {
    fn from(id: Option<i64>) -> Self {
        id.map(Mode::Edit).unwrap_or(Mode::Create)
    }
}

impl EmployeeDraft {
    pub(super) fn next_key(&mut self) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        key
    }

    pub fn field(&self, field: EmployeeField) -> String {
        match field {
            EmployeeField::FirstName => self.first_name.clone(),
            EmployeeField::LastName => self.last_name.clone(),
            EmployeeField::Patronymic => self.patronymic.clone(),
            EmployeeField::DateOfBirth => self.date_of_birth.clone(),
            EmployeeField::Gender => show(&self.gender),
            EmployeeField::Nationality => self.nationality.clone(),
            EmployeeField::Email => self.email.clone(),
            EmployeeField::PhoneNumber => self.phone_number.clone(),
            EmployeeField::Address => self.address.clone(),
        }
    }

    pub fn set_field(&mut self, field: EmployeeField, value: &str) -> Result<(), ValueError> {
        match field {
            EmployeeField::FirstName => self.first_name = value.to_string(),
            EmployeeField::LastName => self.last_name = value.to_string(),
            EmployeeField::Patronymic => self.patronymic = value.to_string(),
            EmployeeField::DateOfBirth => self.date_of_birth = value.to_string(),
            EmployeeField::Gender => self.gender = parse_choice(value)?,
            EmployeeField::Nationality => self.nationality = value.to_string(),
            EmployeeField::Email => self.email = value.to_string(),
            EmployeeField::PhoneNumber => self.phone_number = value.to_string(),
            EmployeeField::Address => self.address = value.to_string(),
        }
        Ok(())
    }

    pub fn passport(&self, field: PassportField) -> String {
        let passport = &self.passport_info;
        match field {
            PassportField::PassportNumber => passport.passport_number.clone(),
            PassportField::IssuedBy => passport.issued_by.clone(),
            PassportField::DateIssued => passport.date_issued.clone(),
            PassportField::DateExpiry => passport.date_expiry.clone(),
        }
    }

    pub fn set_passport(&mut self, field: PassportField, value: &str) {
        let passport = &mut self.passport_info;
        let value = value.to_string();
        match field {
            PassportField::PassportNumber => passport.passport_number = value,
            PassportField::IssuedBy => passport.issued_by = value,
            PassportField::DateIssued => passport.date_issued = value,
            PassportField::DateExpiry => passport.date_expiry = value,
        }
    }

    pub fn family(&self, field: FamilyField) -> String {
        match field {
            FamilyField::MaritalStatus => show(&self.family.marital_status),
            FamilyField::NumberOfChildren => self.family.number_of_children.to_string(),
        }
    }

    /// An empty number of children resets it to zero.
    pub fn set_family(&mut self, field: FamilyField, value: &str) -> Result<(), ValueError> {
        match field {
            FamilyField::MaritalStatus => self.family.marital_status = parse_choice(value)?,
            FamilyField::NumberOfChildren => self.family.number_of_children =
                parse_number(value)?.unwrap_or_default(),
        }
        Ok(())
    }

    /// Append an empty element to the collection, returning its key.
    pub fn append(&mut self, collection: Collection) -> RowKey {
        let key = self.next_key();
        with_rows!(mut self, collection, rows => rows.push(Row::with_key(key)));
        key
    }

    /// Remove the element at `index`; later elements shift down by one.
    pub fn remove(&mut self, collection: Collection, index: usize) -> Result<(), ValueError> {
        with_rows!(mut self, collection, rows => {
            if index < rows.len() {
                rows.remove(index);
                Ok(())
            } else {
                Err(out_of_range(index, rows.len()))
            }
        })
    }

    pub fn len(&self, collection: Collection) -> usize {
        with_rows!(self, collection, rows => rows.len())
    }

    pub fn keys(&self, collection: Collection) -> Vec<RowKey> {
        with_rows!(self, collection, rows => rows.iter()
            .map(Row::key)
            .collect())
    }

    /// The current index of the element identified by `key`.
    pub fn position(&self, collection: Collection, key: RowKey) -> Option<usize> {
        with_rows!(self, collection, rows => rows.iter()
            .position(|row| row.key() == key))
    }

    pub fn row_field(&self, index: usize, field: RowField) -> Option<String> {
        with_row_field!(self, field, (rows, f) => rows.get(index)
            .map(|row| row.get(f)))
    }

    pub fn set_row_field(
        &mut self,
        index: usize,
        field: RowField,
        value: &str,
    ) -> Result<(), ValueError> {
        with_row_field!(mut self, field, (rows, f) => {
            let len = rows.len();
            rows.get_mut(index)
                .ok_or_else(|| out_of_range(index, len))?
                .set(f, value)
        })
    }

    pub fn row_value(&self, key: RowKey, field: RowField) -> Option<String> {
        self.position(field.collection(), key)
            .and_then(|index| self.row_field(index, field))
    }

    /// Keyed variant of [`set_row_field`](Self::set_row_field); the position
    /// is resolved at call time.
    pub fn set_row_value(
        &mut self,
        key: RowKey,
        field: RowField,
        value: &str,
    ) -> Result<(), ValueError> {
        let index = self.position(field.collection(), key)
            .ok_or(ValueError::UnknownRow(key.0))?;
        self.set_row_field(index, field, value)
    }

    /// Label of the first required field left blank, if any.
    pub fn missing_required(&self) -> Option<&'static str> {
        REQUIRED_FIELDS.iter()
            .find(|field| self.field(**field).trim().is_empty())
            .map(EmployeeField::label)
            .or_else(|| PassportField::ALL.iter()
                .find(|field| self.passport(**field).trim().is_empty())
                .map(PassportField::label))
            .or_else(|| self.family.marital_status
                .is_none()
                .then(|| FamilyField::MaritalStatus.label()))
    }

    /// Reduce to the write shape, dropping incomplete sub-collection entries.
    pub fn to_payload(&self) -> EmployeePayload {
        EmployeePayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            patronymic: self.patronymic.clone(),
            date_of_birth: self.date_of_birth.clone(),
            gender: self.gender,
            nationality: self.nationality.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            address: self.address.clone(),
            passport_info: PassportPayload {
                passport_number: self.passport_info.passport_number.clone(),
                issued_by: self.passport_info.issued_by.clone(),
                date_issued: self.passport_info.date_issued.clone(),
                date_expiry: self.passport_info.date_expiry.clone(),
            },
            family: FamilyPayload {
                marital_status: self.family.marital_status,
                number_of_children: self.family.number_of_children,
            },
            educations: complete(&self.educations),
            work_experiences: complete(&self.work_experiences),
            skills: complete(&self.skills),
            certifications: complete(&self.certifications),
            languages: complete(&self.languages),
        }
    }
}

fn complete<'a, R, T>(rows: &'a [R]) -> Vec<T>
where
    R: Row,
    T: TryFrom<&'a R, Error = ValueError>,
{
    rows.iter()
        .filter_map(|row| match T::try_from(row) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("dropping {} entry: {e}", R::COLLECTION);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use crate::employee::payload::{
        CertificationEntry,
        LanguageEntry,
        SkillEntry,
    };
    use super::*;

    fn filled() -> anyhow::Result<EmployeeDraft> {
        let mut draft = EmployeeDraft::default();
        for (field, value) in [
            (EmployeeField::FirstName, "Anna"),
            (EmployeeField::LastName, "Ivanova"),
            (EmployeeField::DateOfBirth, "1990-05-17"),
            (EmployeeField::Gender, "F"),
            (EmployeeField::Nationality, "Russian"),
            (EmployeeField::Email, "anna@example.com"),
            (EmployeeField::PhoneNumber, "+7 900 000 0000"),
            (EmployeeField::Address, "Moscow"),
        ] {
            draft.set_field(field, value)?;
        }
        for field in PassportField::ALL {
            draft.set_passport(*field, "x");
        }
        draft.set_family(FamilyField::MaritalStatus, "single")?;
        Ok(draft)
    }

    #[test]
    fn create_seed() {
        let draft = EmployeeDraft::default();
        assert_eq!(draft.family(FamilyField::NumberOfChildren), "0");
        assert_eq!(draft.family(FamilyField::MaritalStatus), "");
        assert_eq!(draft.passport(PassportField::DateIssued), "");
        for collection in Collection::ALL {
            assert_eq!(draft.len(collection), 0);
        }
        assert_eq!(draft.missing_required(), Some("First name"));
    }

    #[test]
    fn mode() {
        assert_eq!(Mode::from(None::<i64>), Mode::Create);
        assert_eq!(Mode::from(Some(3)), Mode::Edit(3));
        assert_eq!(Mode::Create.submit_label(), "Add employee");
        assert_eq!(Mode::Edit(3).heading(), "Edit employee");
        assert!(Mode::Edit(3).is_edit());
        assert!(!Mode::Create.is_edit());
    }

    #[test]
    fn append_remove_inverse() -> anyhow::Result<()> {
        let mut draft = EmployeeDraft::default();
        draft.append(Collection::Skills);
        draft.set_row_field(0, SkillField::SkillId.into(), "2")?;
        for collection in Collection::ALL {
            let before = draft.clone();
            draft.append(collection);
            assert_eq!(draft.len(collection), before.len(collection) + 1);
            draft.remove(collection, draft.len(collection) - 1)?;
            assert_eq!(draft.len(collection), before.len(collection));
            assert_eq!(draft.keys(collection), before.keys(collection));
            assert_eq!(draft.skills, before.skills);
        }
        Ok(())
    }

    #[test]
    fn remove_shifts_and_keys_follow() -> anyhow::Result<()> {
        let mut draft = EmployeeDraft::default();
        let first = draft.append(Collection::Certifications);
        let second = draft.append(Collection::Certifications);
        let field = RowField::from(CertificationField::DateObtained);
        draft.set_row_value(second, field, "2021-06-01")?;
        assert_eq!(draft.position(Collection::Certifications, second), Some(1));

        draft.remove(Collection::Certifications, 0)?;
        assert_eq!(draft.position(Collection::Certifications, first), None);
        assert_eq!(draft.position(Collection::Certifications, second), Some(0));
        assert_eq!(draft.row_field(0, field).as_deref(), Some("2021-06-01"));
        assert_eq!(draft.row_value(second, field).as_deref(), Some("2021-06-01"));
        assert_eq!(
            draft.set_row_value(first, field, "2020-01-01"),
            Err(ValueError::UnknownRow(first.get())),
        );
        // keys are never reused
        let third = draft.append(Collection::Certifications);
        assert_ne!(third, first);
        Ok(())
    }

    #[test]
    fn out_of_range() {
        let mut draft = EmployeeDraft::default();
        draft.append(Collection::Languages);
        assert_eq!(
            draft.remove(Collection::Languages, 1),
            Err(ValueError::IndexOutOfRange { index: 1, len: 1 }),
        );
        assert_eq!(
            draft.set_row_field(2, LanguageField::LanguageId.into(), "1"),
            Err(ValueError::IndexOutOfRange { index: 2, len: 1 }),
        );
        assert_eq!(draft.row_field(5, LanguageField::LanguageId.into()), None);
    }

    #[test]
    fn updates_do_not_alias() -> anyhow::Result<()> {
        let mut draft = filled()?;
        draft.append(Collection::Educations);
        let before = draft.clone();
        draft.set_row_field(0, EducationField::Institution.into(), "MSU")?;
        draft.set_passport(PassportField::IssuedBy, "FMS");
        assert_eq!(before.educations[0].institution, "");
        assert_eq!(before.passport(PassportField::IssuedBy), "x");
        assert_eq!(draft.passport(PassportField::IssuedBy), "FMS");
        assert_eq!(draft.first_name, before.first_name);
        Ok(())
    }

    #[test]
    fn family_number_of_children() -> anyhow::Result<()> {
        let mut draft = EmployeeDraft::default();
        draft.set_family(FamilyField::NumberOfChildren, "2")?;
        assert_eq!(draft.family.number_of_children, 2);
        draft.set_family(FamilyField::NumberOfChildren, "")?;
        assert_eq!(draft.family.number_of_children, 0);
        assert!(draft.set_family(FamilyField::NumberOfChildren, "-1").is_err());
        assert!(draft.set_field(EmployeeField::Gender, "X").is_err());
        Ok(())
    }

    #[test]
    fn missing_required() -> anyhow::Result<()> {
        let mut draft = filled()?;
        assert_eq!(draft.missing_required(), None);
        draft.set_passport(PassportField::DateExpiry, " ");
        assert_eq!(draft.missing_required(), Some("Expiry date"));
        draft.set_field(EmployeeField::Email, "")?;
        assert_eq!(draft.missing_required(), Some("Email"));
        // patronymic is optional
        let mut draft = filled()?;
        draft.set_field(EmployeeField::Patronymic, "")?;
        draft.set_family(FamilyField::MaritalStatus, "")?;
        assert_eq!(draft.missing_required(), Some("Marital status"));
        Ok(())
    }

    #[test]
    fn payload_filters_incomplete_entries() -> anyhow::Result<()> {
        let mut draft = filled()?;

        // skill without id, then one with
        draft.append(Collection::Skills);
        let skill = draft.append(Collection::Skills);
        draft.set_row_value(skill, SkillField::SkillId.into(), "7")?;

        // certification with id but no date
        let cert = draft.append(Collection::Certifications);
        draft.set_row_value(cert, CertificationField::CertificationId.into(), "3")?;

        // language with id and level, then one missing its level
        let lang = draft.append(Collection::Languages);
        draft.set_row_value(lang, LanguageField::LanguageId.into(), "1")?;
        draft.set_row_value(lang, LanguageField::ProficiencyLevel.into(), "native")?;
        let lang = draft.append(Collection::Languages);
        draft.set_row_value(lang, LanguageField::LanguageId.into(), "2")?;

        // education missing its specialty
        let education = draft.append(Collection::Educations);
        draft.set_row_value(education, EducationField::EducationLevel.into(), "bachelor")?;
        draft.set_row_value(education, EducationField::Institution.into(), "MSU")?;
        draft.set_row_value(education, EducationField::GraduationYear.into(), "2012")?;

        let payload = draft.to_payload();
        assert_eq!(payload.skills, vec![SkillEntry { skill_id: 7 }]);
        assert_eq!(payload.certifications, Vec::<CertificationEntry>::new());
        assert_eq!(payload.languages, vec![LanguageEntry {
            language_id: 1,
            proficiency_level: ProficiencyLevel::Native,
        }]);
        assert!(payload.educations.is_empty());
        assert!(payload.work_experiences.is_empty());

        // the draft itself keeps every entry
        assert_eq!(draft.len(Collection::Skills), 2);
        assert_eq!(draft.len(Collection::Languages), 2);

        let value = serde_json::to_value(&payload)?;
        assert!(value.get("id").is_none());
        assert_eq!(value["gender"], "F");
        assert_eq!(value["family"]["marital_status"], "single");
        Ok(())
    }

    #[test]
    fn payload_drops_entry_missing_any_required_field() -> anyhow::Result<()> {
        let education = [
            (EducationField::EducationLevel, "bachelor"),
            (EducationField::Institution, "MSU"),
            (EducationField::GraduationYear, "2012"),
            (EducationField::Specialty, "Physics"),
        ];
        for (blank, _) in education {
            let mut draft = filled()?;
            let key = draft.append(Collection::Educations);
            for (field, value) in education {
                let value = if field == blank { "" } else { value };
                draft.set_row_value(key, field.into(), value)?;
            }
            assert!(draft.to_payload().educations.is_empty(), "kept without {blank}");
        }

        let work = [
            (WorkExperienceField::Employer, "Acme"),
            (WorkExperienceField::Position, "Engineer"),
            (WorkExperienceField::StartDate, "2019-03-01"),
        ];
        for (blank, _) in work {
            let mut draft = filled()?;
            let key = draft.append(Collection::WorkExperiences);
            for (field, value) in work {
                let value = if field == blank { "" } else { value };
                draft.set_row_value(key, field.into(), value)?;
            }
            assert!(draft.to_payload().work_experiences.is_empty(), "kept without {blank}");
        }

        // nothing blank, both survive
        let mut draft = filled()?;
        let key = draft.append(Collection::Educations);
        for (field, value) in education {
            draft.set_row_value(key, field.into(), value)?;
        }
        let key = draft.append(Collection::WorkExperiences);
        for (field, value) in work {
            draft.set_row_value(key, field.into(), value)?;
        }
        let payload = draft.to_payload();
        assert_eq!(payload.educations.len(), 1);
        assert_eq!(payload.work_experiences.len(), 1);
        Ok(())
    }
}
