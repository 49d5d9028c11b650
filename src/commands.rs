use teloxide::utils::command::{BotCommands, ParseError};

#[derive(BotCommands, Debug, Clone, PartialEq)]
#[command(
    rename_rule = "lowercase",
    description = "Available commands:",
    parse_with = "split"
)]
pub enum Command {
    #[command(description = "Open the MediCare HMS home page.")]
    Start,
    #[command(description = "Display help information about available commands.")]
    Help,
    #[command(description = "Show the pages available to your role.")]
    Menu,
    #[command(
        description = "Open a page by path, e.g. /go /admin/doctors",
        parse_with = rest_of_line
    )]
    Go(String),
    #[command(
        description = "Sign in, optionally choosing a role: /login doctor",
        parse_with = rest_of_line
    )]
    Login(String),
    #[command(description = "Sign out.")]
    Logout,
    #[command(description = "Admin dashboard.")]
    Admin,
    #[command(description = "Doctors management (admin).")]
    Doctors,
    #[command(description = "Doctor dashboard.")]
    Doctor,
    #[command(description = "Patient dashboard.")]
    Patient,
    #[command(description = "Your appointments (patient).")]
    Appointments,
    #[command(
        description = "Search doctors by name, specialization or email.",
        parse_with = rest_of_line
    )]
    Search(String),
    #[command(description = "Add a doctor.")]
    Add,
    #[command(description = "Close the add-doctor form.")]
    Close,
    #[command(description = "Delete a doctor: /delete <id>")]
    Delete(u32),
    #[command(description = "Activate or deactivate a doctor: /toggle <id>")]
    Toggle(u32),
    #[command(
        description = "Book: /book <doctor id> <YYYY-MM-DD> <time> [type] [notes]",
        parse_with = rest_of_line
    )]
    Book(String),
    #[command(description = "Cancel an appointment: /cancel <id>")]
    Cancel(u32),
    #[command(description = "Mark a medicine reminder as taken: /taken <id>")]
    Taken(u32),
}

/// Hands the whole argument text to the command, trimmed. Empty is allowed.
fn rest_of_line(input: String) -> Result<(String,), ParseError> {
    Ok((input.trim().to_string(),))
}
