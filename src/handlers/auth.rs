use teloxide::prelude::*;

use crate::db::models::{Role, User};
use crate::handlers::{open_page, render_home};
use crate::routes::{Page, Route};
use crate::session::SessionStore;
use crate::state::{MyDialogue, State};
use crate::Error;

pub fn render_login(role: Role) -> String {
    let others: Vec<String> = Role::ALL
        .iter()
        .filter(|r| **r != role)
        .map(|r| format!("/login {}", r))
        .collect();
    format!(
        "Welcome Back\nSign in to your MediCare HMS account\n\nRole: {}\nSwitch role: {}\n\nSend your email to sign in.",
        role,
        others.join(" | ")
    )
}

/// Shows the login page with `role` pre-selected and waits for an email.
pub async fn show_login(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &MyDialogue,
    role: Role,
) -> Result<(), Error> {
    dialogue.update(State::Login(role)).await?;
    bot.send_message(chat_id, render_login(role)).await?;
    Ok(())
}

/// Completes a login with the email sent on the login page.
///
/// The account is never looked up: any well-formed email signs in with the
/// pre-selected role, and the user lands on that role's dashboard.
pub async fn receive_email(
    bot: Bot,
    msg: Message,
    dialogue: MyDialogue,
    store: SessionStore,
    role: Role,
) -> Result<(), Error> {
    let Some(text) = msg.text() else {
        bot.send_message(msg.chat.id, "Please send your email as text.")
            .await?;
        return Ok(());
    };

    match User::sign_in(text, role) {
        Ok(user) => {
            log::info!("Chat {} signed in as {}", msg.chat.id.0, user.role);
            store.save(msg.chat.id, &user).await?;
            let route = Route {
                page: Page::dashboard(user.role),
                role: None,
            };
            open_page(&bot, msg.chat.id, &dialogue, &store, route).await
        }
        Err(e) => {
            bot.send_message(msg.chat.id, format!("{}. Send your email to sign in.", e))
                .await?;
            Ok(())
        }
    }
}

/// Forgets the stored user and returns to the home page.
pub async fn logout(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &MyDialogue,
    store: &SessionStore,
) -> Result<(), Error> {
    store.clear(chat_id).await?;
    log::info!("Chat {} signed out", chat_id.0);
    dialogue.update(State::Home).await?;
    bot.send_message(chat_id, format!("You have been signed out.\n\n{}", render_home()))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_offers_other_roles() {
        let page = render_login(Role::Doctor);
        assert!(page.contains("Role: doctor"));
        assert!(page.contains("/login admin"));
        assert!(page.contains("/login patient"));
        assert!(!page.contains("/login doctor"));
    }
}
