use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::{Entity, Toggle};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("unknown role '{0}', expected admin, doctor or patient")]
    UnknownRole(String),
    #[error("unknown specialization '{0}'")]
    UnknownSpecialization(String),
    #[error("unknown appointment type '{0}'")]
    UnknownAppointmentType(String),
}

/// Specializations offered by the add-doctor form.
pub const SPECIALIZATIONS: [&str; 6] = [
    "Cardiology",
    "Pediatrics",
    "Orthopedics",
    "Dermatology",
    "Neurology",
    "General Medicine",
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    #[default]
    Patient,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Doctor, Role::Patient];

    /// Display name given to every account of this role.
    pub fn account_name(self) -> &'static str {
        match self {
            Role::Admin => "Admin User",
            Role::Doctor => "Dr. Smith",
            Role::Patient => "John Doe",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "doctor" => Ok(Role::Doctor),
            "patient" => Ok(Role::Patient),
            other => Err(ValidationError::UnknownRole(other.to_string())),
        }
    }
}

/// The signed-in account persisted in the session store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub role: Role,
    pub name: String,
}

impl User {
    /// Builds the account for a login. There is no account lookup: the name
    /// comes from the role alone.
    pub fn sign_in(email: &str, role: Role) -> Result<Self, ValidationError> {
        Ok(Self {
            email: validate_email(email)?,
            role,
            name: role.account_name().to_string(),
        })
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn validate_email(input: &str) -> Result<String, ValidationError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingField("email"));
    }
    if !email_pattern().is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(email.to_string())
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

pub fn validate_specialization(input: &str) -> Result<String, ValidationError> {
    let value = required("specialization", input)?;
    SPECIALIZATIONS
        .iter()
        .find(|s| s.eq_ignore_ascii_case(&value))
        .map(|s| s.to_string())
        .ok_or(ValidationError::UnknownSpecialization(value))
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DoctorStatus {
    Active,
    Inactive,
}

impl fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoctorStatus::Active => f.write_str("active"),
            DoctorStatus::Inactive => f.write_str("inactive"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub experience: String,
    pub status: DoctorStatus,
    pub patients: u32,
    pub location: String,
}

/// Fields collected by the add-doctor form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub experience: String,
    pub location: String,
}

impl Doctor {
    /// New doctors start active with no patients.
    pub fn from_form(id: u32, form: &DoctorForm) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: required("name", &form.name)?,
            email: validate_email(&form.email)?,
            phone: required("phone", &form.phone)?,
            specialization: validate_specialization(&form.specialization)?,
            experience: required("experience", &form.experience)?,
            status: DoctorStatus::Active,
            patients: 0,
            location: required("location", &form.location)?,
        })
    }
}

impl Entity for Doctor {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.specialization.as_str(), self.email.as_str()]
    }
}

impl Toggle for Doctor {
    fn toggled(&self) -> Self {
        let status = match self.status {
            DoctorStatus::Active => DoctorStatus::Inactive,
            DoctorStatus::Inactive => DoctorStatus::Active,
        };
        Self {
            status,
            ..self.clone()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Completed,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Confirmed => f.write_str("confirmed"),
            AppointmentStatus::Completed => f.write_str("completed"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentType {
    #[default]
    Consultation,
    FollowUp,
    CheckUp,
    Treatment,
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AppointmentType::Consultation => "Consultation",
            AppointmentType::FollowUp => "Follow-up",
            AppointmentType::CheckUp => "Check-up",
            AppointmentType::Treatment => "Treatment",
        };
        f.write_str(label)
    }
}

impl FromStr for AppointmentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "consultation" => Ok(AppointmentType::Consultation),
            "follow-up" | "followup" => Ok(AppointmentType::FollowUp),
            "check-up" | "checkup" => Ok(AppointmentType::CheckUp),
            "treatment" => Ok(AppointmentType::Treatment),
            other => Err(ValidationError::UnknownAppointmentType(other.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: u32,
    pub doctor: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time: String,
    pub kind: AppointmentType,
    pub status: AppointmentStatus,
    pub notes: String,
}

impl Appointment {
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.status == AppointmentStatus::Confirmed && self.date >= today
    }

    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.status == AppointmentStatus::Completed || self.date < today
    }
}

impl Entity for Appointment {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.doctor.as_str(), self.specialty.as_str(), self.notes.as_str()]
    }
}

/// A doctor that can be picked when booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableDoctor {
    pub id: u32,
    pub name: &'static str,
    pub specialty: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prescription {
    pub id: u32,
    pub medicine: &'static str,
    pub dosage: &'static str,
    pub frequency: &'static str,
    pub next_dose: &'static str,
    pub progress: u8,
    pub doctor: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderStatus {
    Taken,
    Pending,
    Missed,
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReminderStatus::Taken => f.write_str("taken"),
            ReminderStatus::Pending => f.write_str("pending"),
            ReminderStatus::Missed => f.write_str("missed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MedicineReminder {
    pub id: u32,
    pub medicine: &'static str,
    pub time: &'static str,
    pub status: ReminderStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub id: u32,
    pub doctor: &'static str,
    pub date: &'static str,
    pub kind: &'static str,
    pub notes: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingVisit {
    pub id: u32,
    pub doctor: &'static str,
    pub specialty: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: u32,
    pub action: &'static str,
    pub user: &'static str,
    pub time: &'static str,
}

/// One line of a day schedule. `doctor` is empty on the doctor's own view.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledVisit {
    pub id: u32,
    pub patient: &'static str,
    pub doctor: &'static str,
    pub time: &'static str,
    pub kind: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientSummary {
    pub id: u32,
    pub name: &'static str,
    pub last_visit: &'static str,
    pub condition: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntakeAlert {
    pub id: u32,
    pub patient: &'static str,
    pub medicine: &'static str,
    pub status: ReminderStatus,
    pub time: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminStats {
    pub total_doctors: u32,
    pub total_patients: u32,
    pub today_appointments: u32,
    pub total_prescriptions: u32,
    pub monthly_growth: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoctorStats {
    pub today_appointments: u32,
    pub total_patients: u32,
    pub active_prescriptions: u32,
    pub completed_today: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientStats {
    pub upcoming_appointments: u32,
    pub active_prescriptions: u32,
    pub medicine_compliance: u8,
    pub next_appointment: &'static str,
    pub notifications: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> DoctorForm {
        DoctorForm {
            name: "Dr. Ada Lovelace".to_string(),
            email: "ada@hospital.com".to_string(),
            phone: "+1 (555) 000-0000".to_string(),
            specialization: "neurology".to_string(),
            experience: "3 years".to_string(),
            location: "Building D".to_string(),
        }
    }

    #[test]
    fn test_sign_in_derives_name_from_role() {
        let user = User::sign_in("  someone@example.com ", Role::Doctor).unwrap();
        assert_eq!(user.email, "someone@example.com");
        assert_eq!(user.name, "Dr. Smith");
        assert_eq!(User::sign_in("x@y.io", Role::Admin).unwrap().name, "Admin User");
        assert_eq!(User::sign_in("x@y.io", Role::Patient).unwrap().name, "John Doe");
    }

    #[test]
    fn test_sign_in_rejects_bad_email() {
        assert_eq!(
            User::sign_in("", Role::Patient),
            Err(ValidationError::MissingField("email"))
        );
        assert!(matches!(
            User::sign_in("not-an-email", Role::Patient),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" doctor ".parse::<Role>(), Ok(Role::Doctor));
        assert!("nurse".parse::<Role>().is_err());
    }

    #[test]
    fn test_user_json_layout() {
        let user = User::sign_in("a@b.co", Role::Admin).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.co", "role": "admin", "name": "Admin User"})
        );
    }

    #[test]
    fn test_doctor_from_form_defaults() {
        let doctor = Doctor::from_form(9, &form()).unwrap();
        assert_eq!(doctor.id, 9);
        assert_eq!(doctor.status, DoctorStatus::Active);
        assert_eq!(doctor.patients, 0);
        assert_eq!(doctor.specialization, "Neurology");
        assert_eq!(doctor.name, "Dr. Ada Lovelace");
    }

    #[test]
    fn test_doctor_from_form_requires_fields() {
        let mut incomplete = form();
        incomplete.location = "   ".to_string();
        assert_eq!(
            Doctor::from_form(1, &incomplete),
            Err(ValidationError::MissingField("location"))
        );

        let mut unknown = form();
        unknown.specialization = "Astrology".to_string();
        assert!(matches!(
            Doctor::from_form(1, &unknown),
            Err(ValidationError::UnknownSpecialization(_))
        ));
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        let doctor = Doctor::from_form(1, &form()).unwrap();
        let once = doctor.toggled();
        assert_eq!(once.status, DoctorStatus::Inactive);
        assert_eq!(once.name, doctor.name);
        assert_eq!(once.toggled(), doctor);
    }

    #[test]
    fn test_appointment_type_labels() {
        assert_eq!("follow-up".parse::<AppointmentType>(), Ok(AppointmentType::FollowUp));
        assert_eq!(AppointmentType::CheckUp.to_string(), "Check-up");
        assert!("surgery".parse::<AppointmentType>().is_err());
    }
}
