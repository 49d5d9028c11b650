use crate::db::models::{ReminderStatus, User};
use crate::seed::{DOCTOR_STATS, INTAKE_ALERTS, RECENT_PATIENTS, TODAY_SCHEDULE};

pub fn render_dashboard(user: &User) -> String {
    let stats = &DOCTOR_STATS;
    let mut lines = vec![
        "Doctor Dashboard".to_string(),
        format!("Welcome back, {}", user.name),
        String::new(),
        format!("Today's Appointments: {}", stats.today_appointments),
        format!("Total Patients: {}", stats.total_patients),
        format!("Active Prescriptions: {}", stats.active_prescriptions),
        format!("Completed Today: {}", stats.completed_today),
        String::new(),
        "Today's Schedule".to_string(),
    ];
    lines.extend(
        TODAY_SCHEDULE
            .iter()
            .map(|v| format!("• {} - {} • {} [{}]", v.patient, v.time, v.kind, v.status)),
    );

    lines.push(String::new());
    lines.push("Medicine Intake Alerts".to_string());
    lines.extend(INTAKE_ALERTS.iter().map(|alert| {
        let mark = match alert.status {
            ReminderStatus::Taken => "✅",
            _ => "⚠️",
        };
        format!(
            "{} {} - {} • {} [{}]",
            mark, alert.patient, alert.medicine, alert.time, alert.status
        )
    }));

    lines.push(String::new());
    lines.push("Recent Patients".to_string());
    lines.extend(RECENT_PATIENTS.iter().map(|p| {
        format!(
            "• {} - {}, last visit {} [{}]",
            p.name, p.condition, p.last_visit, p.status
        )
    }));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Role;

    #[test]
    fn test_dashboard_sections() {
        let user = User::sign_in("smith@hospital.com", Role::Doctor).unwrap();
        let text = render_dashboard(&user);
        assert!(text.contains("Welcome back, Dr. Smith"));
        assert!(text.contains("Completed Today: 5"));
        assert!(text.contains("Jane Wilson - 10:30 AM • Follow-up [completed]"));
        assert!(text.contains("⚠️ Mike Brown - Albuterol • 12:00 PM [missed]"));
        assert!(text.contains("Sarah Lee - Migraine, last visit 3 days ago [improving]"));
    }
}
