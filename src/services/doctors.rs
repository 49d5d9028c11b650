use std::collections::HashSet;

use crate::db::models::{
    validate_email, validate_specialization, Doctor, DoctorForm, DoctorStatus, ValidationError,
    SPECIALIZATIONS,
};
use crate::entity::EntityList;

/// Fields of the add-doctor form, in the order they are asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoctorField {
    #[default]
    Name,
    Email,
    Phone,
    Specialization,
    Experience,
    Location,
}

impl DoctorField {
    pub fn next(self) -> Option<DoctorField> {
        match self {
            DoctorField::Name => Some(DoctorField::Email),
            DoctorField::Email => Some(DoctorField::Phone),
            DoctorField::Phone => Some(DoctorField::Specialization),
            DoctorField::Specialization => Some(DoctorField::Experience),
            DoctorField::Experience => Some(DoctorField::Location),
            DoctorField::Location => None,
        }
    }

    pub fn prompt(self) -> String {
        match self {
            DoctorField::Name => "Full name (e.g. Dr. John Doe):".to_string(),
            DoctorField::Email => "Email (e.g. john.doe@hospital.com):".to_string(),
            DoctorField::Phone => "Phone (e.g. +1 (555) 123-4567):".to_string(),
            DoctorField::Specialization => {
                format!("Specialization, one of: {}", SPECIALIZATIONS.join(", "))
            }
            DoctorField::Experience => "Experience (e.g. 10 years):".to_string(),
            DoctorField::Location => "Location (e.g. Building A, Floor 2):".to_string(),
        }
    }
}

/// Stores one answer of the add-doctor form. Email and specialization are
/// checked as they are entered; every field must be non-blank.
pub fn fill_field(
    form: &mut DoctorForm,
    field: DoctorField,
    input: &str,
) -> Result<(), ValidationError> {
    let value = input.trim();
    match field {
        DoctorField::Email => form.email = validate_email(value)?,
        DoctorField::Specialization => form.specialization = validate_specialization(value)?,
        _ if value.is_empty() => return Err(ValidationError::MissingField(field_name(field))),
        DoctorField::Name => form.name = value.to_string(),
        DoctorField::Phone => form.phone = value.to_string(),
        DoctorField::Experience => form.experience = value.to_string(),
        DoctorField::Location => form.location = value.to_string(),
    }
    Ok(())
}

fn field_name(field: DoctorField) -> &'static str {
    match field {
        DoctorField::Name => "name",
        DoctorField::Email => "email",
        DoctorField::Phone => "phone",
        DoctorField::Specialization => "specialization",
        DoctorField::Experience => "experience",
        DoctorField::Location => "location",
    }
}

pub fn add_doctor(
    doctors: &mut EntityList<Doctor>,
    form: &DoctorForm,
) -> Result<u32, ValidationError> {
    doctors.add(|id| Doctor::from_form(id, form))
}

/// Figures shown above the doctors table, computed from the live list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterStats {
    pub total: usize,
    pub active: usize,
    pub specializations: usize,
    pub patients: u32,
}

pub fn roster_stats(doctors: &EntityList<Doctor>) -> RosterStats {
    let items = doctors.items();
    RosterStats {
        total: items.len(),
        active: items
            .iter()
            .filter(|d| d.status == DoctorStatus::Active)
            .count(),
        specializations: items
            .iter()
            .map(|d| d.specialization.as_str())
            .collect::<HashSet<_>>()
            .len(),
        patients: items.iter().map(|d| d.patients).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_field_order_ends_at_location() {
        let mut field = DoctorField::default();
        let mut seen = vec![field];
        while let Some(next) = field.next() {
            seen.push(next);
            field = next;
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(field, DoctorField::Location);
    }

    #[test]
    fn test_fill_whole_form_and_add() {
        let answers = [
            "Dr. Grace Hopper",
            "grace@hospital.com",
            "+1 (555) 111-2222",
            "general medicine",
            "30 years",
            "Building E",
        ];
        let mut form = DoctorForm::default();
        let mut field = Some(DoctorField::Name);
        for answer in answers {
            let current = field.unwrap();
            fill_field(&mut form, current, answer).unwrap();
            field = current.next();
        }
        assert!(field.is_none());
        assert_eq!(form.specialization, "General Medicine");

        let mut doctors = EntityList::seeded(seed::doctors());
        let id = add_doctor(&mut doctors, &form).unwrap();
        assert_eq!(id, 6);
        assert_eq!(doctors.get(6).unwrap().email, "grace@hospital.com");
    }

    #[test]
    fn test_fill_field_rejects_bad_values() {
        let mut form = DoctorForm::default();
        assert_eq!(
            fill_field(&mut form, DoctorField::Phone, "  "),
            Err(ValidationError::MissingField("phone"))
        );
        assert!(fill_field(&mut form, DoctorField::Email, "nope").is_err());
        assert!(fill_field(&mut form, DoctorField::Specialization, "Alchemy").is_err());
        assert_eq!(form, DoctorForm::default());
    }

    #[test]
    fn test_add_incomplete_form_fails() {
        let mut doctors = EntityList::seeded(seed::doctors());
        assert!(add_doctor(&mut doctors, &DoctorForm::default()).is_err());
        assert_eq!(doctors.len(), 5);
    }

    #[test]
    fn test_roster_stats_follow_list() {
        let mut doctors = EntityList::seeded(seed::doctors());
        assert_eq!(
            roster_stats(&doctors),
            RosterStats {
                total: 5,
                active: 4,
                specializations: 5,
                patients: 205,
            }
        );

        doctors.toggle_status(4);
        doctors.delete(1);
        let stats = roster_stats(&doctors);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 4);
        assert_eq!(stats.patients, 160);
    }
}
