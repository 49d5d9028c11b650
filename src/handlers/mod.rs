use teloxide::prelude::*;

use crate::db::models::{Role, User};
use crate::routes::{Page, Route};
use crate::session::{check_access, Access, SessionStore};
use crate::state::{AppointmentsPage, DoctorsPage, MyDialogue, State};
use crate::Error;

pub mod admin;
pub mod auth;
pub mod doctor;
pub mod patient;

/// Navigates a chat to a page.
///
/// Public pages open directly. Role pages first run the access guard against
/// the stored session; a visitor without a matching session lands on the
/// login page with no further explanation.
///
/// # Arguments
///
/// * `bot` - The Telegram Bot instance used to send the rendered page.
/// * `chat_id` - The chat being navigated.
/// * `dialogue` - The chat's page state, replaced by the new page.
/// * `store` - The session store consulted by the access guard.
/// * `route` - The resolved target page and optional role hint.
pub async fn open_page(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &MyDialogue,
    store: &SessionStore,
    route: Route,
) -> Result<(), Error> {
    match route.page {
        Page::Home => {
            dialogue.update(State::Home).await?;
            bot.send_message(chat_id, render_home()).await?;
            Ok(())
        }
        Page::Login => {
            auth::show_login(bot, chat_id, dialogue, route.role.unwrap_or_default()).await
        }
        page => {
            let session = store.current(chat_id).await;
            let required = page.required_role().unwrap_or_default();
            match check_access(session.as_ref(), required) {
                Access::Allow(user) => {
                    log::info!("Chat {} opened {}", chat_id.0, page.path());
                    let (state, text) = mount(page, user, today());
                    dialogue.update(state).await?;
                    bot.send_message(chat_id, text).await?;
                    Ok(())
                }
                Access::Redirect(target) => {
                    log::warn!(
                        "Chat {} redirected from {} to {}",
                        chat_id.0,
                        page.path(),
                        target.path()
                    );
                    auth::show_login(bot, chat_id, dialogue, Role::default()).await
                }
            }
        }
    }
}

/// Builds the fresh state of a page and its first rendering.
pub fn mount(page: Page, user: &User, today: chrono::NaiveDate) -> (State, String) {
    match page {
        Page::AdminDashboard => (State::AdminDashboard, admin::render_dashboard(user)),
        Page::AdminDoctors => {
            let doctors = DoctorsPage::fresh();
            let text = admin::render_doctors(&doctors);
            (State::AdminDoctors(doctors), text)
        }
        Page::DoctorDashboard => (State::DoctorDashboard, doctor::render_dashboard(user)),
        Page::PatientDashboard => (State::PatientDashboard, patient::render_dashboard(user)),
        Page::PatientAppointments => {
            let appointments = AppointmentsPage::fresh();
            let text = patient::render_appointments(&appointments, today);
            (State::PatientAppointments(appointments), text)
        }
        Page::Home | Page::Login => (State::Home, render_home()),
    }
}

pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn render_home() -> String {
    [
        "🏥 MediCare HMS",
        "Hospital Management System",
        "",
        "Streamline healthcare operations for administrators, doctors, and patients.",
        "",
        "🛡 Admin Control: manage doctor profiles, view appointments and prescriptions.",
        "🩺 Doctor Dashboard: schedules, prescriptions, patient medicine intake.",
        "👤 Patient Portal: book appointments, prescriptions, medicine reminders.",
        "",
        "Quick access:",
        "/go /login?role=admin - Admin Login",
        "/go /login?role=doctor - Doctor Login",
        "/go /login?role=patient - Patient Login",
    ]
    .join("\n")
}

/// Sidebar for the signed-in role.
pub fn render_menu(user: &User) -> String {
    let mut lines = vec![format!("{} ({})", user.name, user.role), String::new()];
    lines.extend(
        Page::menu(user.role)
            .iter()
            .map(|page| format!("{} - {} ({})", page.title(), page.command(), page.path())),
    );
    lines.push(String::new());
    lines.push("/logout - Sign out".to_string());
    lines.join("\n")
}

pub fn render_not_found(path: &str) -> String {
    format!("404: no page at '{}'. Try /menu.", path)
}

/// Reply for an action sent from the wrong page.
pub async fn not_on_page(bot: &Bot, chat_id: ChatId, page: Page) -> Result<(), Error> {
    bot.send_message(
        chat_id,
        format!("That action belongs to the {} page. Open it with {}.", page.path(), page.command()),
    )
    .await?;
    Ok(())
}
