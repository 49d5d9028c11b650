use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

use crate::db::models::{Appointment, AppointmentStatus, AppointmentType, ValidationError};
use crate::entity::EntityList;
use crate::seed::{AVAILABLE_DOCTORS, TIME_SLOTS};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("No doctor with id {0}. Pick one from the list.")]
    UnknownDoctor(u32),
    #[error("'{0}' is not an available time slot.")]
    UnknownTimeSlot(String),
    #[error("{0} is not a future date.")]
    PastDate(NaiveDate),
    #[error("{0} falls on a weekend.")]
    Weekend(NaiveDate),
    #[error("{doctor} is already booked on {date} at {time}.")]
    SlotTaken {
        doctor: String,
        date: NaiveDate,
        time: String,
    },
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    #[error("Usage: /book <doctor id> <YYYY-MM-DD> <time> [type] [notes]")]
    Usage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub doctor_id: u32,
    pub date: NaiveDate,
    pub time: String,
    pub kind: AppointmentType,
    pub notes: String,
}

/// Normalises `10:00AM`, `10:00 am`, `9:00 AM` and friends to the slot
/// label. Returns `None` when the result is not a known slot.
pub fn normalize_slot(input: &str) -> Option<&'static str> {
    let mut compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    if compact.find(':') == Some(1) {
        compact.insert(0, '0');
    }
    TIME_SLOTS
        .iter()
        .find(|slot| slot.replace(' ', "") == compact)
        .copied()
}

impl BookingRequest {
    /// Parses `<doctor id> <YYYY-MM-DD> <time> [type] [notes…]`, where the
    /// time may be written with or without a space before AM/PM. Type
    /// defaults to consultation.
    pub fn parse(input: &str) -> Result<Self, BookingError> {
        let mut tokens = input.split_whitespace().peekable();

        let doctor_id = tokens
            .next()
            .and_then(|t| t.parse::<u32>().ok())
            .ok_or(BookingError::Usage)?;
        let date = tokens
            .next()
            .and_then(|t| NaiveDate::parse_from_str(t, "%Y-%m-%d").ok())
            .ok_or(BookingError::Usage)?;

        let mut time = tokens.next().ok_or(BookingError::Usage)?.to_string();
        if let Some(meridiem) = tokens.peek() {
            if meridiem.eq_ignore_ascii_case("am") || meridiem.eq_ignore_ascii_case("pm") {
                time.push_str(meridiem);
                tokens.next();
            }
        }
        let time = normalize_slot(&time)
            .ok_or(BookingError::UnknownTimeSlot(time))?
            .to_string();

        // Without a recognised type the rest of the line is all notes.
        let kind = match tokens.peek().and_then(|t| t.parse::<AppointmentType>().ok()) {
            Some(kind) => {
                tokens.next();
                kind
            }
            None => AppointmentType::default(),
        };
        let notes = tokens.collect::<Vec<_>>().join(" ");

        Ok(Self {
            doctor_id,
            date,
            time,
            kind,
            notes,
        })
    }
}

/// Adds a confirmed appointment to the list.
///
/// Rejects unknown doctors and slots, past dates, weekends and a slot the
/// same doctor already has confirmed.
pub fn book(
    appointments: &mut EntityList<Appointment>,
    request: &BookingRequest,
    today: NaiveDate,
) -> Result<u32, BookingError> {
    let doctor = AVAILABLE_DOCTORS
        .iter()
        .find(|d| d.id == request.doctor_id)
        .ok_or(BookingError::UnknownDoctor(request.doctor_id))?;
    let time = normalize_slot(&request.time)
        .ok_or_else(|| BookingError::UnknownTimeSlot(request.time.clone()))?;

    if request.date <= today {
        return Err(BookingError::PastDate(request.date));
    }
    if matches!(request.date.weekday(), Weekday::Sat | Weekday::Sun) {
        return Err(BookingError::Weekend(request.date));
    }

    let taken = appointments.items().iter().any(|a| {
        a.status == AppointmentStatus::Confirmed
            && a.doctor == doctor.name
            && a.date == request.date
            && a.time == time
    });
    if taken {
        return Err(BookingError::SlotTaken {
            doctor: doctor.name.to_string(),
            date: request.date,
            time: time.to_string(),
        });
    }

    appointments.add(|id| {
        Ok(Appointment {
            id,
            doctor: doctor.name.to_string(),
            specialty: doctor.specialty.to_string(),
            date: request.date,
            time: time.to_string(),
            kind: request.kind,
            status: AppointmentStatus::Confirmed,
            notes: request.notes.trim().to_string(),
        })
    })
}

pub fn upcoming(appointments: &EntityList<Appointment>, today: NaiveDate) -> Vec<&Appointment> {
    appointments
        .items()
        .iter()
        .filter(|a| a.is_upcoming(today))
        .collect()
}

pub fn past(appointments: &EntityList<Appointment>, today: NaiveDate) -> Vec<&Appointment> {
    appointments
        .items()
        .iter()
        .filter(|a| a.is_past(today))
        .collect()
}
