use teloxide::prelude::*;

use crate::db::models::{DoctorStatus, User};
use crate::handlers::not_on_page;
use crate::routes::Page;
use crate::seed::{ADMIN_STATS, RECENT_ACTIVITIES, RECENT_APPOINTMENTS};
use crate::services::doctors::{add_doctor, fill_field, roster_stats};
use crate::state::{DoctorFormPage, DoctorsPage, MyDialogue, State};
use crate::Error;

pub fn render_dashboard(user: &User) -> String {
    let stats = &ADMIN_STATS;
    let mut lines = vec![
        "Admin Dashboard".to_string(),
        format!("Welcome back, {}", user.name),
        String::new(),
        format!("Total Doctors: {}", stats.total_doctors),
        format!(
            "Total Patients: {} (+{}% from last month)",
            stats.total_patients, stats.monthly_growth
        ),
        format!("Today's Appointments: {}", stats.today_appointments),
        format!("Total Prescriptions: {}", stats.total_prescriptions),
        String::new(),
        "Recent Appointments".to_string(),
    ];
    lines.extend(RECENT_APPOINTMENTS.iter().map(|a| {
        format!("• {} with {} at {} [{}]", a.patient, a.doctor, a.time, a.status)
    }));
    lines.push(String::new());
    lines.push("Recent Activities".to_string());
    lines.extend(
        RECENT_ACTIVITIES
            .iter()
            .map(|a| format!("• {} - {} ({})", a.action, a.user, a.time)),
    );
    lines.push(String::new());
    lines.push("Manage doctors: /doctors".to_string());
    lines.join("\n")
}

pub fn render_doctors(page: &DoctorsPage) -> String {
    let stats = roster_stats(&page.doctors);
    let visible = page.visible();

    let mut lines = vec![
        "Doctors Management".to_string(),
        String::new(),
        format!(
            "Total: {} | Active: {} | Specializations: {} | Patients: {}",
            stats.total, stats.active, stats.specializations, stats.patients
        ),
    ];
    if !page.search.is_empty() {
        lines.push(format!("Search: \"{}\"", page.search));
    }
    lines.push(format!(
        "Showing {} of {} doctors",
        visible.len(),
        page.doctors.len()
    ));
    lines.push(String::new());
    if page.doctors.is_empty() {
        lines.push("No doctors on record. /add to add one.".to_string());
    }

    for doctor in visible {
        let action = match doctor.status {
            DoctorStatus::Active => "deactivate",
            DoctorStatus::Inactive => "activate",
        };
        lines.push(format!(
            "#{} {} [{}]\n   {} | {} | {} patients\n   ✉ {} ☎ {}\n   📍 {}\n   /toggle {} to {}, /delete {}",
            doctor.id,
            doctor.name,
            doctor.status,
            doctor.specialization,
            doctor.experience,
            doctor.patients,
            doctor.email,
            doctor.phone,
            doctor.location,
            doctor.id,
            action,
            doctor.id,
        ));
    }

    lines.push(String::new());
    lines.push("Type to search, /search to clear, /add to add a doctor.".to_string());
    lines.join("\n")
}

async fn current_page(dialogue: &MyDialogue) -> Result<Option<DoctorsPage>, Error> {
    Ok(match dialogue.get().await? {
        Some(State::AdminDoctors(page)) => Some(page),
        _ => None,
    })
}

async fn show(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &MyDialogue,
    page: DoctorsPage,
) -> Result<(), Error> {
    let text = render_doctors(&page);
    dialogue.update(State::AdminDoctors(page)).await?;
    bot.send_message(chat_id, text).await?;
    Ok(())
}

/// Applies an edit to the doctors page, or points the user at the page when
/// the chat is somewhere else.
async fn with_page(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &MyDialogue,
    edit: impl FnOnce(&mut DoctorsPage),
) -> Result<(), Error> {
    if let Some(State::AddDoctor(_)) = dialogue.get().await? {
        bot.send_message(chat_id, "Finish the add-doctor form or /close it first.")
            .await?;
        return Ok(());
    }
    match current_page(dialogue).await? {
        Some(mut page) => {
            edit(&mut page);
            show(bot, chat_id, dialogue, page).await
        }
        None => not_on_page(bot, chat_id, Page::AdminDoctors).await,
    }
}

pub async fn search(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &MyDialogue,
    term: String,
) -> Result<(), Error> {
    with_page(bot, chat_id, dialogue, |page| page.search = term).await
}

pub async fn delete(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &MyDialogue,
    id: u32,
) -> Result<(), Error> {
    with_page(bot, chat_id, dialogue, |page| {
        if let Some(doctor) = page.doctors.delete(id) {
            log::info!("Deleted doctor {} ({})", doctor.id, doctor.name);
        }
    })
    .await
}

pub async fn toggle(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &MyDialogue,
    id: u32,
) -> Result<(), Error> {
    with_page(bot, chat_id, dialogue, |page| {
        if let Some(doctor) = page.doctors.toggle_status(id) {
            log::info!("Doctor {} is now {}", doctor.id, doctor.status);
        }
    })
    .await
}

/// Handles plain text on the doctors page: every message is a new search
/// term.
pub async fn receive_search(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    mut page: DoctorsPage,
) -> Result<(), Error> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    if text.starts_with('/') {
        bot.send_message(msg.chat.id, "Unknown command or missing argument. See /help.")
            .await?;
        return Ok(());
    }
    page.search = text.trim().to_string();
    show(&bot, msg.chat.id, &dialogue, page).await
}

pub async fn open_form(bot: &Bot, chat_id: ChatId, dialogue: &MyDialogue) -> Result<(), Error> {
    let Some(page) = current_page(dialogue).await? else {
        return match dialogue.get().await? {
            Some(State::AddDoctor(_)) => {
                bot.send_message(chat_id, "The add-doctor form is already open.")
                    .await?;
                Ok(())
            }
            _ => not_on_page(bot, chat_id, Page::AdminDoctors).await,
        };
    };
    let id = page.doctors.next_id();
    let form = DoctorFormPage::open(page);
    let prompt = form.field.prompt();
    dialogue.update(State::AddDoctor(form)).await?;
    bot.send_message(
        chat_id,
        format!(
            "Add New Doctor (#{})\nEnter the doctor's information to add them to the system. /close to cancel.\n\n{}",
            id, prompt
        ),
    )
    .await?;
    Ok(())
}

pub async fn close_form(bot: &Bot, chat_id: ChatId, dialogue: &MyDialogue) -> Result<(), Error> {
    match dialogue.get().await? {
        Some(State::AddDoctor(form)) => show(bot, chat_id, dialogue, form.page).await,
        _ => {
            bot.send_message(chat_id, "There is no open form.").await?;
            Ok(())
        }
    }
}

/// Collects one answer of the add-doctor form.
///
/// Invalid answers re-ask the same field. After the last field the doctor is
/// added to the page's list and the form closes.
pub async fn receive_doctor_field(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    mut form: DoctorFormPage,
) -> Result<(), Error> {
    let chat_id = msg.chat.id;
    let Some(text) = msg.text() else {
        bot.send_message(chat_id, form.field.prompt()).await?;
        return Ok(());
    };
    if text.starts_with('/') {
        bot.send_message(chat_id, "Finish the form or /close it first.")
            .await?;
        return Ok(());
    }

    if let Err(e) = fill_field(&mut form.form, form.field, text) {
        bot.send_message(chat_id, format!("{}.\n{}", e, form.field.prompt()))
            .await?;
        return Ok(());
    }

    if let Some(next) = form.field.next() {
        form.field = next;
        let prompt = next.prompt();
        dialogue.update(State::AddDoctor(form)).await?;
        bot.send_message(chat_id, prompt).await?;
        return Ok(());
    }

    let mut page = form.page;
    match add_doctor(&mut page.doctors, &form.form) {
        Ok(id) => {
            log::info!("Added doctor {} ({})", id, form.form.name);
            bot.send_message(chat_id, format!("Added {} as #{}.", form.form.name, id))
                .await?;
        }
        Err(e) => {
            bot.send_message(chat_id, format!("Could not add doctor: {}.", e))
                .await?;
        }
    }
    show(&bot, chat_id, &dialogue, page).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Role;

    #[test]
    fn test_dashboard_shows_stats_and_activity() {
        let user = User::sign_in("admin@hospital.com", Role::Admin).unwrap();
        let text = render_dashboard(&user);
        assert!(text.contains("Welcome back, Admin User"));
        assert!(text.contains("Total Patients: 342 (+12.5% from last month)"));
        assert!(text.contains("Jane Wilson with Dr. Johnson at 10:30 AM [pending]"));
        assert!(text.contains("Doctor profile updated - Dr. Johnson (5 hours ago)"));
    }

    #[test]
    fn test_doctors_page_reflects_search_and_edits() {
        let mut page = DoctorsPage::fresh();
        let text = render_doctors(&page);
        assert!(text.contains("Total: 5 | Active: 4 | Specializations: 5 | Patients: 205"));
        assert!(text.contains("/toggle 4 to activate"));

        page.search = "ortho".to_string();
        let text = render_doctors(&page);
        assert!(text.contains("Showing 1 of 5 doctors"));
        assert!(text.contains("Dr. Michael Davis"));
        assert!(!text.contains("Dr. John Smith"));

        page.search.clear();
        page.doctors.delete(2);
        assert!(render_doctors(&page).contains("Showing 4 of 4 doctors"));
    }

    #[test]
    fn test_empty_roster_suggests_adding() {
        let mut page = DoctorsPage::fresh();
        for id in 1..=5 {
            page.doctors.delete(id);
        }
        let text = render_doctors(&page);
        assert!(text.contains("Showing 0 of 0 doctors"));
        assert!(text.contains("No doctors on record."));
        assert!(!render_doctors(&DoctorsPage::fresh()).contains("No doctors on record."));
    }

    #[test]
    fn test_doctors_page_with_no_match() {
        let mut page = DoctorsPage::fresh();
        page.search = "radiology".to_string();
        let text = render_doctors(&page);
        assert!(text.contains("Showing 0 of 5 doctors"));
        assert!(!text.contains('#'));
    }
}
