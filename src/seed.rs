use chrono::NaiveDate;

use crate::db::models::{
    Activity, AdminStats, Appointment, AppointmentStatus, AppointmentType, AvailableDoctor,
    Doctor, DoctorStats, DoctorStatus, IntakeAlert, MedicineReminder, PatientStats,
    PatientSummary, Prescription, ReminderStatus, ScheduledVisit, UpcomingVisit, Visit,
};

/// Bookable time slots, in display order.
pub const TIME_SLOTS: [&str; 12] = [
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "02:00 PM",
    "02:30 PM", "03:00 PM", "03:30 PM", "04:00 PM", "04:30 PM",
];

pub const AVAILABLE_DOCTORS: [AvailableDoctor; 5] = [
    AvailableDoctor { id: 1, name: "Dr. John Smith", specialty: "Cardiology" },
    AvailableDoctor { id: 2, name: "Dr. Sarah Johnson", specialty: "General Medicine" },
    AvailableDoctor { id: 3, name: "Dr. Michael Davis", specialty: "Orthopedics" },
    AvailableDoctor { id: 4, name: "Dr. Emily Wilson", specialty: "Dermatology" },
    AvailableDoctor { id: 5, name: "Dr. Robert Brown", specialty: "Neurology" },
];

#[allow(clippy::too_many_arguments)]
fn doctor(
    id: u32,
    name: &str,
    specialization: &str,
    experience: &str,
    status: DoctorStatus,
    patients: u32,
    location: &str,
    phone: &str,
) -> Doctor {
    let email = name
        .trim_start_matches("Dr. ")
        .to_lowercase()
        .replace(' ', ".");
    Doctor {
        id,
        name: name.to_string(),
        email: format!("{}@hospital.com", email),
        phone: phone.to_string(),
        specialization: specialization.to_string(),
        experience: experience.to_string(),
        status,
        patients,
        location: location.to_string(),
    }
}

pub fn doctors() -> Vec<Doctor> {
    use DoctorStatus::{Active, Inactive};
    vec![
        doctor(1, "Dr. John Smith", "Cardiology", "15 years", Active, 45, "Building A, Floor 2", "+1 (555) 123-4567"),
        doctor(2, "Dr. Sarah Johnson", "Pediatrics", "12 years", Active, 38, "Building B, Floor 1", "+1 (555) 234-5678"),
        doctor(3, "Dr. Michael Davis", "Orthopedics", "18 years", Active, 52, "Building C, Floor 3", "+1 (555) 345-6789"),
        doctor(4, "Dr. Emily Wilson", "Dermatology", "8 years", Inactive, 29, "Building A, Floor 1", "+1 (555) 456-7890"),
        doctor(5, "Dr. Robert Brown", "Neurology", "20 years", Active, 41, "Building B, Floor 3", "+1 (555) 567-8901"),
    ]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The signed-in patient's appointments.
pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            doctor: "Dr. John Smith".to_string(),
            specialty: "Cardiology".to_string(),
            date: date(2024, 12, 26),
            time: "10:00 AM".to_string(),
            kind: AppointmentType::FollowUp,
            status: AppointmentStatus::Confirmed,
            notes: "Blood pressure check and medication review".to_string(),
        },
        Appointment {
            id: 2,
            doctor: "Dr. Sarah Johnson".to_string(),
            specialty: "General Medicine".to_string(),
            date: date(2024, 12, 28),
            time: "02:30 PM".to_string(),
            kind: AppointmentType::CheckUp,
            status: AppointmentStatus::Confirmed,
            notes: "Annual physical examination".to_string(),
        },
        Appointment {
            id: 3,
            doctor: "Dr. Michael Davis".to_string(),
            specialty: "Orthopedics".to_string(),
            date: date(2024, 12, 20),
            time: "09:00 AM".to_string(),
            kind: AppointmentType::Consultation,
            status: AppointmentStatus::Completed,
            notes: "Knee pain evaluation - completed".to_string(),
        },
        Appointment {
            id: 4,
            doctor: "Dr. Emily Wilson".to_string(),
            specialty: "Dermatology".to_string(),
            date: date(2024, 12, 15),
            time: "11:30 AM".to_string(),
            kind: AppointmentType::Treatment,
            status: AppointmentStatus::Completed,
            notes: "Skin condition treatment - completed".to_string(),
        },
    ]
}

pub const ADMIN_STATS: AdminStats = AdminStats {
    total_doctors: 25,
    total_patients: 342,
    today_appointments: 18,
    total_prescriptions: 156,
    monthly_growth: 12.5,
};

pub const RECENT_APPOINTMENTS: [ScheduledVisit; 4] = [
    ScheduledVisit { id: 1, patient: "John Doe", doctor: "Dr. Smith", time: "09:00 AM", kind: "", status: "confirmed" },
    ScheduledVisit { id: 2, patient: "Jane Wilson", doctor: "Dr. Johnson", time: "10:30 AM", kind: "", status: "pending" },
    ScheduledVisit { id: 3, patient: "Mike Brown", doctor: "Dr. Davis", time: "02:00 PM", kind: "", status: "completed" },
    ScheduledVisit { id: 4, patient: "Sarah Lee", doctor: "Dr. Wilson", time: "03:30 PM", kind: "", status: "confirmed" },
];

pub const RECENT_ACTIVITIES: [Activity; 4] = [
    Activity { id: 1, action: "New patient registered", user: "John Doe", time: "2 hours ago" },
    Activity { id: 2, action: "Prescription updated", user: "Dr. Smith", time: "3 hours ago" },
    Activity { id: 3, action: "Appointment scheduled", user: "Jane Wilson", time: "4 hours ago" },
    Activity { id: 4, action: "Doctor profile updated", user: "Dr. Johnson", time: "5 hours ago" },
];

pub const DOCTOR_STATS: DoctorStats = DoctorStats {
    today_appointments: 8,
    total_patients: 45,
    active_prescriptions: 23,
    completed_today: 5,
};

pub const TODAY_SCHEDULE: [ScheduledVisit; 4] = [
    ScheduledVisit { id: 1, patient: "John Doe", doctor: "", time: "09:00 AM", kind: "Consultation", status: "upcoming" },
    ScheduledVisit { id: 2, patient: "Jane Wilson", doctor: "", time: "10:30 AM", kind: "Follow-up", status: "completed" },
    ScheduledVisit { id: 3, patient: "Mike Brown", doctor: "", time: "02:00 PM", kind: "Check-up", status: "upcoming" },
    ScheduledVisit { id: 4, patient: "Sarah Lee", doctor: "", time: "03:30 PM", kind: "Consultation", status: "upcoming" },
];

pub const RECENT_PATIENTS: [PatientSummary; 4] = [
    PatientSummary { id: 1, name: "John Doe", last_visit: "Today", condition: "Hypertension", status: "stable" },
    PatientSummary { id: 2, name: "Jane Wilson", last_visit: "Yesterday", condition: "Diabetes", status: "monitoring" },
    PatientSummary { id: 3, name: "Mike Brown", last_visit: "2 days ago", condition: "Asthma", status: "stable" },
    PatientSummary { id: 4, name: "Sarah Lee", last_visit: "3 days ago", condition: "Migraine", status: "improving" },
];

pub const INTAKE_ALERTS: [IntakeAlert; 3] = [
    IntakeAlert { id: 1, patient: "John Doe", medicine: "Lisinopril", status: ReminderStatus::Missed, time: "8:00 AM" },
    IntakeAlert { id: 2, patient: "Jane Wilson", medicine: "Metformin", status: ReminderStatus::Taken, time: "9:00 AM" },
    IntakeAlert { id: 3, patient: "Mike Brown", medicine: "Albuterol", status: ReminderStatus::Missed, time: "12:00 PM" },
];

pub const PATIENT_STATS: PatientStats = PatientStats {
    upcoming_appointments: 2,
    active_prescriptions: 3,
    medicine_compliance: 85,
    next_appointment: "Tomorrow",
    notifications: 3,
};

/// Upcoming appointments shown on the patient dashboard. Dates are display
/// labels, independent of the appointments page.
pub const DASHBOARD_APPOINTMENTS: [UpcomingVisit; 2] = [
    UpcomingVisit { id: 1, doctor: "Dr. Smith", specialty: "Cardiology", date: "Tomorrow", time: "10:00 AM", kind: "Follow-up" },
    UpcomingVisit { id: 2, doctor: "Dr. Johnson", specialty: "General", date: "Dec 28", time: "02:30 PM", kind: "Check-up" },
];

pub const PRESCRIPTIONS: [Prescription; 3] = [
    Prescription { id: 1, medicine: "Lisinopril", dosage: "10mg", frequency: "Once daily", next_dose: "8:00 AM", progress: 75, doctor: "Dr. Smith" },
    Prescription { id: 2, medicine: "Metformin", dosage: "500mg", frequency: "Twice daily", next_dose: "6:00 PM", progress: 90, doctor: "Dr. Johnson" },
    Prescription { id: 3, medicine: "Vitamin D", dosage: "1000 IU", frequency: "Once daily", next_dose: "9:00 AM", progress: 60, doctor: "Dr. Smith" },
];

pub const MEDICINE_REMINDERS: [MedicineReminder; 4] = [
    MedicineReminder { id: 1, medicine: "Lisinopril", time: "8:00 AM", status: ReminderStatus::Taken },
    MedicineReminder { id: 2, medicine: "Metformin", time: "12:00 PM", status: ReminderStatus::Taken },
    MedicineReminder { id: 3, medicine: "Metformin", time: "6:00 PM", status: ReminderStatus::Pending },
    MedicineReminder { id: 4, medicine: "Vitamin D", time: "9:00 AM", status: ReminderStatus::Missed },
];

pub const RECENT_VISITS: [Visit; 3] = [
    Visit { id: 1, doctor: "Dr. Smith", date: "Dec 15, 2024", kind: "Consultation", notes: "Blood pressure check" },
    Visit { id: 2, doctor: "Dr. Johnson", date: "Dec 10, 2024", kind: "Follow-up", notes: "Diabetes monitoring" },
    Visit { id: 3, doctor: "Dr. Wilson", date: "Dec 5, 2024", kind: "Check-up", notes: "Annual physical" },
];
