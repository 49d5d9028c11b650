use chrono::NaiveDate;
use teloxide::prelude::*;

use crate::db::models::{Appointment, ReminderStatus, User};
use crate::handlers::{not_on_page, today};
use crate::routes::Page;
use crate::seed::{
    AVAILABLE_DOCTORS, DASHBOARD_APPOINTMENTS, MEDICINE_REMINDERS, PATIENT_STATS, PRESCRIPTIONS,
    RECENT_VISITS, TIME_SLOTS,
};
use crate::services::appointments::{book as book_appointment, past, upcoming, BookingRequest};
use crate::state::{AppointmentsPage, MyDialogue, State};
use crate::utils::{format_date, initials, progress_bar};
use crate::Error;

pub fn render_dashboard(user: &User) -> String {
    let stats = &PATIENT_STATS;
    let mut lines = vec![
        "Patient Dashboard".to_string(),
        format!("Welcome back, {}", user.name),
        String::new(),
        format!(
            "Upcoming Appointments: {} (next: {})",
            stats.upcoming_appointments, stats.next_appointment
        ),
        format!("Active Prescriptions: {}", stats.active_prescriptions),
        format!(
            "Medicine Compliance: {}",
            progress_bar(stats.medicine_compliance)
        ),
        format!("Notifications: {}", stats.notifications),
        String::new(),
        "Upcoming Appointments".to_string(),
    ];
    lines.extend(DASHBOARD_APPOINTMENTS.iter().map(|a| {
        format!(
            "• {} ({}) - {}, {} [{}]",
            a.doctor, a.specialty, a.date, a.time, a.kind
        )
    }));

    lines.push(String::new());
    lines.push("Today's Medicine".to_string());
    lines.extend(MEDICINE_REMINDERS.iter().map(|r| match r.status {
        ReminderStatus::Pending => {
            format!("• {} at {} [{}] /taken {}", r.medicine, r.time, r.status, r.id)
        }
        _ => format!("• {} at {} [{}]", r.medicine, r.time, r.status),
    }));

    lines.push(String::new());
    lines.push("Active Prescriptions".to_string());
    lines.extend(PRESCRIPTIONS.iter().map(|p| {
        format!(
            "• {} {} - {}, next dose {} ({})\n   {}",
            p.medicine,
            p.dosage,
            p.frequency,
            p.next_dose,
            p.doctor,
            progress_bar(p.progress)
        )
    }));

    lines.push(String::new());
    lines.push("Recent Visits".to_string());
    lines.extend(
        RECENT_VISITS
            .iter()
            .map(|v| format!("• {} - {} with {}: {}", v.date, v.kind, v.doctor, v.notes)),
    );
    lines.push(String::new());
    lines.push("Manage appointments: /appointments".to_string());
    lines.join("\n")
}

fn render_appointment(appointment: &Appointment) -> String {
    format!(
        "#{} [{}] {} - {}\n   {} at {} • {}{}",
        appointment.id,
        initials(&appointment.doctor),
        appointment.doctor,
        appointment.specialty,
        format_date(appointment.date),
        appointment.time,
        appointment.kind,
        if appointment.notes.is_empty() {
            String::new()
        } else {
            format!("\n   {}", appointment.notes)
        }
    )
}

pub fn render_appointments(page: &AppointmentsPage, today: NaiveDate) -> String {
    let upcoming = upcoming(&page.appointments, today);
    let past = past(&page.appointments, today);

    let mut lines = vec![
        "My Appointments".to_string(),
        String::new(),
        format!(
            "Upcoming: {} | Past: {} | Total: {}",
            upcoming.len(),
            past.len(),
            page.appointments.len()
        ),
        String::new(),
        "Upcoming Appointments".to_string(),
    ];
    if upcoming.is_empty() {
        lines.push("No upcoming appointments.".to_string());
    }
    for appointment in &upcoming {
        lines.push(format!(
            "{}\n   /cancel {}",
            render_appointment(appointment),
            appointment.id
        ));
    }

    lines.push(String::new());
    lines.push("Past Appointments".to_string());
    for appointment in &past {
        lines.push(format!(
            "{}\n   [{}]",
            render_appointment(appointment),
            appointment.status
        ));
    }

    lines.push(String::new());
    lines.push("Book Appointment: /book <doctor id> <YYYY-MM-DD> <time> [type] [notes]".to_string());
    lines.extend(
        AVAILABLE_DOCTORS
            .iter()
            .map(|d| format!("   {} - {} - {}", d.id, d.name, d.specialty)),
    );
    lines.push(format!("   Times: {}", TIME_SLOTS.join(", ")));
    lines.push("   Types: consultation, follow-up, check-up, treatment".to_string());
    lines.join("\n")
}

async fn current_page(dialogue: &MyDialogue) -> Result<Option<AppointmentsPage>, Error> {
    Ok(match dialogue.get().await? {
        Some(State::PatientAppointments(page)) => Some(page),
        _ => None,
    })
}

async fn show(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &MyDialogue,
    page: AppointmentsPage,
) -> Result<(), Error> {
    let text = render_appointments(&page, today());
    dialogue.update(State::PatientAppointments(page)).await?;
    bot.send_message(chat_id, text).await?;
    Ok(())
}

/// Books an appointment from `/book` arguments.
///
/// # Arguments
///
/// * `bot` - The Telegram Bot instance used to reply.
/// * `chat_id` - The chat on the appointments page.
/// * `dialogue` - The chat's page state holding the appointment list.
/// * `args` - Everything after `/book`.
///
/// # Returns
///
/// Rejected bookings are answered with the reason and leave the list as it
/// was; only transport and storage failures are returned as errors.
pub async fn book(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &MyDialogue,
    args: &str,
) -> Result<(), Error> {
    let Some(mut page) = current_page(dialogue).await? else {
        return not_on_page(bot, chat_id, Page::PatientAppointments).await;
    };

    let booked = BookingRequest::parse(args)
        .and_then(|request| book_appointment(&mut page.appointments, &request, today()));
    match booked {
        Ok(id) => {
            log::info!("Chat {} booked appointment {}", chat_id.0, id);
            bot.send_message(chat_id, format!("Appointment #{} booked.", id))
                .await?;
            show(bot, chat_id, dialogue, page).await
        }
        Err(e) => {
            log::info!("Chat {} booking rejected: {}", chat_id.0, e);
            bot.send_message(chat_id, e.to_string()).await?;
            Ok(())
        }
    }
}

pub async fn cancel(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &MyDialogue,
    id: u32,
) -> Result<(), Error> {
    let Some(mut page) = current_page(dialogue).await? else {
        return not_on_page(bot, chat_id, Page::PatientAppointments).await;
    };
    if page.appointments.delete(id).is_some() {
        log::info!("Chat {} cancelled appointment {}", chat_id.0, id);
    }
    show(bot, chat_id, dialogue, page).await
}

/// Acknowledges a reminder. Reminder state is seed data and stays as it was.
pub async fn mark_taken(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &MyDialogue,
    id: u32,
) -> Result<(), Error> {
    if dialogue.get().await? != Some(State::PatientDashboard) {
        return not_on_page(bot, chat_id, Page::PatientDashboard).await;
    }
    log::info!("Marked medicine {} as taken", id);
    bot.send_message(chat_id, format!("Reminder {} noted.", id))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Role;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dashboard_sections() {
        let user = User::sign_in("john@example.com", Role::Patient).unwrap();
        let text = render_dashboard(&user);
        assert!(text.contains("Welcome back, John Doe"));
        assert!(text.contains("Medicine Compliance: [########--] 85%"));
        assert!(text.contains("• Metformin at 6:00 PM [pending] /taken 3"));
        assert!(text.contains("• Vitamin D at 9:00 AM [missed]"));
        assert!(text.contains("Metformin 500mg - Twice daily, next dose 6:00 PM (Dr. Johnson)"));
        assert!(text.contains("Dec 10, 2024 - Follow-up with Dr. Johnson: Diabetes monitoring"));
    }

    #[test]
    fn test_appointments_page_counts() {
        let page = AppointmentsPage::fresh();
        let text = render_appointments(&page, day(2024, 12, 23));
        assert!(text.contains("Upcoming: 2 | Past: 2 | Total: 4"));
        assert!(text.contains("/cancel 1"));
        assert!(text.contains("Dec 26, 2024 at 10:00 AM • Follow-up"));
        assert!(!text.contains("No upcoming appointments."));

        let text = render_appointments(&page, day(2026, 10, 18));
        assert!(text.contains("Upcoming: 0 | Past: 4 | Total: 4"));
        assert!(text.contains("No upcoming appointments."));
    }

    #[test]
    fn test_appointment_line_uses_initials() {
        let page = AppointmentsPage::fresh();
        let line = render_appointment(&page.appointments.items()[0]);
        assert!(line.starts_with("#1 [JS] Dr. John Smith - Cardiology"));
    }
}
