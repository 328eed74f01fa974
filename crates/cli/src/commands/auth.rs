//! Session commands: register, login, logout, whoami.

use chrono::Utc;

use atma_vision_core::{Email, Role, UserId};
use atma_vision_studio::models::User;
use atma_vision_studio::services::AuthService;
use atma_vision_studio::storage::Storage;

use super::CliError;

/// Register a new client account; registration is also a login.
pub fn register(
    storage: &dyn Storage,
    email: &str,
    name: &str,
    password: &str,
) -> Result<(), CliError> {
    let email = Email::parse(email)?;
    let user = User {
        id: UserId::new(Utc::now().timestamp_millis().to_string()),
        name: name.to_owned(),
        email,
        password: password.to_owned(),
        role: Role::Client,
    };

    let session = AuthService::new(storage).register(user)?;
    println!("Добро пожаловать, {}!", session.name);
    Ok(())
}

/// Log in and persist the session.
pub fn login(storage: &dyn Storage, email: &str, password: &str) -> Result<(), CliError> {
    let session = AuthService::new(storage).login(email, password)?;
    println!("{} ({})", session.name, session.role);
    Ok(())
}

/// Clear the session.
pub fn logout(storage: &dyn Storage) -> Result<(), CliError> {
    AuthService::new(storage).logout()?;
    println!("Вы вышли из аккаунта");
    Ok(())
}

/// Show the current session, if any.
pub fn whoami(storage: &dyn Storage) -> Result<(), CliError> {
    match AuthService::new(storage).current_user()? {
        Some(session) => println!(
            "{} <{}> - {} [{}]",
            session.name, session.email, session.role, session.id
        ),
        None => println!("Вход не выполнен"),
    }
    Ok(())
}
