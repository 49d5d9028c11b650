use crate::db::models::{Role, User};
use crate::routes::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access<'a> {
    Allow(&'a User),
    Redirect(Page),
}

/// Gates a page by role. A missing session and a role mismatch both send the
/// visitor to the login page.
pub fn check_access(session: Option<&User>, required: Role) -> Access<'_> {
    match session {
        Some(user) if user.role == required => Access::Allow(user),
        _ => Access::Redirect(Page::Login),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User::sign_in("someone@hospital.com", role).unwrap()
    }

    #[test]
    fn test_matching_role_is_allowed() {
        for role in Role::ALL {
            let user = user(role);
            assert_eq!(check_access(Some(&user), role), Access::Allow(&user));
        }
    }

    #[test]
    fn test_mismatched_role_redirects_to_login() {
        for required in Role::ALL {
            for role in Role::ALL.into_iter().filter(|r| *r != required) {
                let user = user(role);
                assert_eq!(
                    check_access(Some(&user), required),
                    Access::Redirect(Page::Login)
                );
            }
        }
    }

    #[test]
    fn test_missing_session_redirects_to_login() {
        for required in Role::ALL {
            assert_eq!(check_access(None, required), Access::Redirect(Page::Login));
        }
    }
}
