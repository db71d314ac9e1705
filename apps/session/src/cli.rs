use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use talent_session::navigation::{GuardDecision, Navigator, Route};
use talent_session::notify::{Notification, NotificationSink, Severity};
use talent_session::session::token;
use talent_session::session::{
    classify_role, validate_email, validate_login_form, validate_signup_form, FieldError,
    LoginForm, SessionModel, SessionState, Signup, SignupForm,
};
use talent_session::Role;

#[derive(Parser, Debug)]
#[command(name = "talent-session")]
#[command(about = "Sign in to TalentGenius as an HR professional or a candidate")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in. Company emails get HR access, personal emails get candidate access
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Signup {
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        password: String,
        /// Repeat the password; checked against --password
        #[arg(long)]
        confirm_password: Option<String>,
        /// hr or candidate. Defaults to what the email domain suggests
        #[arg(long)]
        role: Option<Role>,
    },
    /// Sign out
    Logout,
    /// Show who is signed in
    Whoami {
        /// Also decode the session token
        #[arg(long)]
        token: bool,
    },
    /// Permanently delete the signed-in account
    DeleteAccount {
        /// Must repeat the account's email
        #[arg(long)]
        confirm: String,
    },
    /// Print the role an email would get
    Classify { email: String },
    /// Check an email, optionally for a role
    CheckEmail {
        email: String,
        #[arg(long)]
        role: Option<Role>,
    },
    /// Check whether the signed-in user may open a page
    Guard { path: String },
}

/// Prints toasts to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Default => println!("{}: {}", notification.title, notification.description),
            Severity::Destructive => {
                eprintln!("{}: {}", notification.title, notification.description)
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        println!("-> {route}");
    }
}

fn reject_form(form: &str, errors: &[FieldError]) -> Result<()> {
    if errors.is_empty() {
        return Ok(());
    }
    for e in errors {
        eprintln!("{}: {}", e.field, e.message);
    }
    bail!("{form} form has {} problem(s)", errors.len());
}

pub async fn run(command: Command, session: &mut SessionModel) -> Result<()> {
    match command {
        Command::Login { email, password } => {
            let form = LoginForm {
                email: email.clone(),
                password: password.clone(),
            };
            reject_form("log-in", &validate_login_form(&form))?;
            session.login(&email, &password).await?;
        }
        Command::Signup {
            email,
            name,
            password,
            confirm_password,
            role,
        } => {
            let form = SignupForm {
                email: email.clone(),
                name: name.clone(),
                password: password.clone(),
                confirm_password: confirm_password.clone().unwrap_or_else(|| password.clone()),
            };
            reject_form("sign-up", &validate_signup_form(&form))?;
            session
                .register(Signup {
                    email: &email,
                    name: &name,
                    password: &password,
                    confirm_password: confirm_password.as_deref(),
                    role,
                })
                .await?;
        }
        Command::Logout => session.logout(),
        Command::Whoami { token: show_token } => match session.current() {
            None => println!("Not signed in"),
            Some(identity) => {
                println!("{} <{}> ({})", identity.name(), identity.email(), identity.role());
                if show_token {
                    match identity.token() {
                        Some(raw) => {
                            let claims = token::decode(raw)?;
                            println!("{}", serde_json::to_string_pretty(&claims)?);
                        }
                        None => println!("No token"),
                    }
                }
            }
        },
        Command::DeleteAccount { confirm } => session.delete_account(&confirm)?,
        Command::Classify { email } => println!("{}", classify_role(&email)),
        Command::CheckEmail { email, role } => {
            let check = validate_email(&email, role);
            if !check.valid {
                bail!(check.message.unwrap_or_else(|| "Invalid email".to_string()));
            }
            println!("ok");
        }
        Command::Guard { path } => {
            let Some(route) = Route::parse(&path) else {
                bail!("unknown page '{path}'");
            };
            match session.authorize(route) {
                GuardDecision::Allow => println!("allow {route}"),
                GuardDecision::Redirect(to) => {
                    let who = match session.state() {
                        SessionState::LoggedOut => "anonymous".to_string(),
                        SessionState::LoggedIn(role) => role.to_string(),
                    };
                    println!("redirect {who} from {route} to {to}");
                }
            }
        }
    }
    Ok(())
}
