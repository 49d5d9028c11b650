use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::db::models::{Appointment, Doctor, DoctorForm, Role};
use crate::entity::EntityList;
use crate::seed;
use crate::services::doctors::DoctorField;

/// The page a chat is on, together with that page's local lists.
///
/// Entering a page replaces the whole state, so lists never outlive their
/// page and always start again from the seed.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum State {
    #[default]
    Home,
    /// Login page waiting for an email; the role is pre-selected.
    Login(Role),
    AdminDashboard,
    AdminDoctors(DoctorsPage),
    /// The add-doctor dialog, open on top of the doctors page.
    AddDoctor(DoctorFormPage),
    DoctorDashboard,
    PatientDashboard,
    PatientAppointments(AppointmentsPage),
}

pub type MyDialogue = Dialogue<State, InMemStorage<State>>;

#[derive(Clone, Debug, PartialEq)]
pub struct DoctorsPage {
    pub doctors: EntityList<Doctor>,
    pub search: String,
}

impl DoctorsPage {
    pub fn fresh() -> Self {
        Self {
            doctors: EntityList::seeded(seed::doctors()),
            search: String::new(),
        }
    }

    /// Doctors matching the current search term.
    pub fn visible(&self) -> Vec<&Doctor> {
        self.doctors.search(&self.search)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoctorFormPage {
    pub page: DoctorsPage,
    pub form: DoctorForm,
    pub field: DoctorField,
}

impl DoctorFormPage {
    pub fn open(page: DoctorsPage) -> Self {
        Self {
            page,
            form: DoctorForm::default(),
            field: DoctorField::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppointmentsPage {
    pub appointments: EntityList<Appointment>,
}

impl AppointmentsPage {
    pub fn fresh() -> Self {
        Self {
            appointments: EntityList::seeded(seed::appointments()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_start_from_seed() {
        let mut page = DoctorsPage::fresh();
        page.doctors.delete(1);
        page.search = "neuro".to_string();
        assert_eq!(page.visible().len(), 1);

        let again = DoctorsPage::fresh();
        assert_eq!(again.doctors.len(), 5);
        assert_eq!(again.visible().len(), 5);
        assert_eq!(AppointmentsPage::fresh().appointments.len(), 4);
    }

    #[test]
    fn test_form_opens_on_first_field() {
        let form = DoctorFormPage::open(DoctorsPage::fresh());
        assert_eq!(form.field, DoctorField::Name);
        assert_eq!(form.form, DoctorForm::default());
    }
}
