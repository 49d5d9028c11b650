use phf::phf_map;

use crate::db::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    AdminDashboard,
    AdminDoctors,
    DoctorDashboard,
    PatientDashboard,
    PatientAppointments,
}

static ROUTES: phf::Map<&'static str, Page> = phf_map! {
    "/" => Page::Home,
    "/login" => Page::Login,
    "/admin" => Page::AdminDashboard,
    "/admin/doctors" => Page::AdminDoctors,
    "/doctor" => Page::DoctorDashboard,
    "/patient" => Page::PatientDashboard,
    "/patient/appointments" => Page::PatientAppointments,
};

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Login => "/login",
            Page::AdminDashboard => "/admin",
            Page::AdminDoctors => "/admin/doctors",
            Page::DoctorDashboard => "/doctor",
            Page::PatientDashboard => "/patient",
            Page::PatientAppointments => "/patient/appointments",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Login => "Login",
            Page::AdminDashboard | Page::DoctorDashboard | Page::PatientDashboard => "Dashboard",
            Page::AdminDoctors => "Doctors",
            Page::PatientAppointments => "Appointments",
        }
    }

    /// Role a visitor needs to see the page, `None` for public pages.
    pub fn required_role(self) -> Option<Role> {
        match self {
            Page::Home | Page::Login => None,
            Page::AdminDashboard | Page::AdminDoctors => Some(Role::Admin),
            Page::DoctorDashboard => Some(Role::Doctor),
            Page::PatientDashboard | Page::PatientAppointments => Some(Role::Patient),
        }
    }

    /// Where a successful login lands.
    pub fn dashboard(role: Role) -> Page {
        match role {
            Role::Admin => Page::AdminDashboard,
            Role::Doctor => Page::DoctorDashboard,
            Role::Patient => Page::PatientDashboard,
        }
    }

    /// Sidebar entries for a role, in display order.
    pub fn menu(role: Role) -> &'static [Page] {
        match role {
            Role::Admin => &[Page::AdminDashboard, Page::AdminDoctors],
            Role::Doctor => &[Page::DoctorDashboard],
            Role::Patient => &[Page::PatientDashboard, Page::PatientAppointments],
        }
    }

    /// Bot command that opens the page.
    pub fn command(self) -> &'static str {
        match self {
            Page::Home => "/start",
            Page::Login => "/login",
            Page::AdminDashboard => "/admin",
            Page::AdminDoctors => "/doctors",
            Page::DoctorDashboard => "/doctor",
            Page::PatientDashboard => "/patient",
            Page::PatientAppointments => "/appointments",
        }
    }
}

/// A resolved navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub page: Page,
    /// Pre-selected role; only `/login` accepts one.
    pub role: Option<Role>,
}

impl Route {
    /// Resolves a path such as `/login?role=doctor`. Trailing slashes are
    /// ignored; unknown paths give `None`. Unknown query parameters and
    /// invalid role values are dropped.
    pub fn parse(input: &str) -> Option<Route> {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (input, None),
        };
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        let page = *ROUTES.get(path)?;

        let role = match (page, query) {
            (Page::Login, Some(query)) => query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .find(|(key, _)| *key == "role")
                .and_then(|(_, value)| value.parse().ok()),
            _ => None,
        };

        Some(Route { page, role })
    }
}
