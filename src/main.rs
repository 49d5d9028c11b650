use dotenvy::dotenv;
use dptree::case;
use envconfig::Envconfig;
use teloxide::{
    dispatching::{
        dialogue::{self, InMemStorage},
        Dispatcher, UpdateFilterExt,
    },
    prelude::*,
    utils::command::BotCommands,
};

mod commands;
mod db;
mod entity;
mod handlers;
mod routes;
mod seed;
mod services;
mod session;
mod state;
mod utils;

use commands::Command;
use db::models::Role;
use handlers::{admin, auth, open_page, patient, render_menu, render_not_found};
use routes::{Page, Route};
use session::SessionStore;
use state::{MyDialogue, State};

pub type Error = Box<dyn std::error::Error + Send + Sync>;

#[derive(Envconfig)]
pub struct Config {
    #[envconfig(from = "TELEGRAM_BOT_TOKEN")]
    telegram_bot_token: String,

    #[envconfig(from = "DATABASE_URL", default = "sqlite://medicare.db")]
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize the logger with default settings or "info" level if not specified
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    log::info!("Starting MediCare HMS bot...");

    // Load environment variables from a .env file if present
    dotenv().ok();

    let config = Config::init_from_env()?;

    // Sessions outlive restarts; page state does not
    let pool = db::init_db(&config.database_url).await?;
    let store = SessionStore::new(pool);

    let bot = Bot::new(config.telegram_bot_token);

    let handler = dialogue::enter::<Update, InMemStorage<State>, State, _>()
        // Commands work on every page
        .branch(
            Update::filter_message()
                .branch(dptree::entry().filter_command::<Command>().endpoint(answer)),
        )
        // Plain text is page input
        .branch(
            Update::filter_message()
                .branch(case![State::Login(role)].endpoint(auth::receive_email))
                .branch(case![State::AddDoctor(form)].endpoint(admin::receive_doctor_field))
                .branch(case![State::AdminDoctors(page)].endpoint(admin::receive_search)),
        )
        .branch(Update::filter_message().endpoint(handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![store, InMemStorage::<State>::new()])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Shutting down gracefully");
    Ok(())
}

/// Handles bot commands and responds accordingly.
///
/// Page commands go through [`open_page`], so the access guard runs on every
/// navigation. Page actions (search, add, delete, toggle, book, cancel, taken)
/// act on the page the chat currently has open.
///
/// # Arguments
///
/// * `bot` - The Telegram Bot instance used to send messages.
/// * `msg` - The received message containing the command.
/// * `cmd` - The parsed command enum.
/// * `dialogue` - The chat's page state.
/// * `store` - The session store holding the signed-in user.
///
/// # Returns
///
/// Returns a Result indicating success or failure of the command handling.
async fn answer(
    bot: Bot,
    msg: Message,
    cmd: Command,
    dialogue: MyDialogue,
    store: SessionStore,
) -> Result<(), Error> {
    let chat_id = msg.chat.id;
    let go = |page: Page| Route { page, role: None };

    match cmd {
        Command::Start => {
            log::info!("Received start command");
            open_page(&bot, chat_id, &dialogue, &store, go(Page::Home)).await?;
        }
        Command::Help => {
            bot.send_message(chat_id, Command::descriptions().to_string())
                .await?;
        }
        Command::Menu => match store.current(chat_id).await {
            Some(user) => {
                bot.send_message(chat_id, render_menu(&user)).await?;
            }
            None => {
                bot.send_message(chat_id, "You are not signed in. Use /login to sign in.")
                    .await?;
            }
        },
        Command::Go(path) => {
            log::info!("Received go command: {}", path);
            match Route::parse(&path) {
                Some(route) => open_page(&bot, chat_id, &dialogue, &store, route).await?,
                None => {
                    bot.send_message(chat_id, render_not_found(&path)).await?;
                }
            }
        }
        Command::Login(role) => {
            let role = if role.is_empty() {
                Ok(Role::default())
            } else {
                role.parse::<Role>()
            };
            match role {
                Ok(role) => {
                    let route = Route {
                        page: Page::Login,
                        role: Some(role),
                    };
                    open_page(&bot, chat_id, &dialogue, &store, route).await?;
                }
                Err(e) => {
                    bot.send_message(
                        chat_id,
                        format!("{}. Try /login admin, /login doctor or /login patient.", e),
                    )
                    .await?;
                }
            }
        }
        Command::Logout => auth::logout(&bot, chat_id, &dialogue, &store).await?,
        Command::Admin => {
            open_page(&bot, chat_id, &dialogue, &store, go(Page::AdminDashboard)).await?
        }
        Command::Doctors => {
            open_page(&bot, chat_id, &dialogue, &store, go(Page::AdminDoctors)).await?
        }
        Command::Doctor => {
            open_page(&bot, chat_id, &dialogue, &store, go(Page::DoctorDashboard)).await?
        }
        Command::Patient => {
            open_page(&bot, chat_id, &dialogue, &store, go(Page::PatientDashboard)).await?
        }
        Command::Appointments => {
            open_page(&bot, chat_id, &dialogue, &store, go(Page::PatientAppointments)).await?
        }
        Command::Search(term) => admin::search(&bot, chat_id, &dialogue, term).await?,
        Command::Add => admin::open_form(&bot, chat_id, &dialogue).await?,
        Command::Close => admin::close_form(&bot, chat_id, &dialogue).await?,
        Command::Delete(id) => admin::delete(&bot, chat_id, &dialogue, id).await?,
        Command::Toggle(id) => admin::toggle(&bot, chat_id, &dialogue, id).await?,
        Command::Book(args) => patient::book(&bot, chat_id, &dialogue, &args).await?,
        Command::Cancel(id) => patient::cancel(&bot, chat_id, &dialogue, id).await?,
        Command::Taken(id) => patient::mark_taken(&bot, chat_id, &dialogue, id).await?,
    }

    Ok(())
}

/// Replies to text that no page is waiting for.
async fn handle_message(bot: Bot, msg: Message) -> Result<(), Error> {
    if msg.text().is_some() {
        bot.send_message(
            msg.chat.id,
            "I don't understand that. Use /menu for your pages or /help for available commands.",
        )
        .await?;
    }
    Ok(())
}
