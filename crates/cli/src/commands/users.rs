//! User administration commands (manager views).

use atma_vision_core::{Role, UserId};
use atma_vision_studio::db::UserRepository;
use atma_vision_studio::services::AuthService;
use atma_vision_studio::storage::Storage;

use super::{CliError, require_session};

fn require_manager(storage: &dyn Storage) -> Result<(), CliError> {
    let session = require_session(storage)?;
    if session.role == Role::Manager {
        Ok(())
    } else {
        Err(CliError::Forbidden(
            "Управление пользователями доступно только менеджеру".to_owned(),
        ))
    }
}

/// List all users.
pub fn list(storage: &dyn Storage) -> Result<(), CliError> {
    require_manager(storage)?;
    for user in UserRepository::new(storage).list()? {
        println!(
            "{:12} {:10} {} <{}>",
            user.id.as_str(),
            user.role.to_string(),
            user.name,
            user.email
        );
    }
    Ok(())
}

/// List operators.
pub fn operators(storage: &dyn Storage) -> Result<(), CliError> {
    require_manager(storage)?;
    for operator in UserRepository::new(storage).operators()? {
        println!("{:12} {}", operator.id.as_str(), operator.name);
    }
    Ok(())
}

/// Change a user's role. Unknown ids are silent no-ops, mirroring the
/// data-layer contract.
pub fn set_role(storage: &dyn Storage, user_id: &str, role: &str) -> Result<(), CliError> {
    require_manager(storage)?;
    let role: Role = role
        .parse()
        .map_err(|e: String| CliError::InvalidArgument(e))?;

    AuthService::new(storage).change_role(&UserId::new(user_id), role)?;
    println!("Роль пользователя {user_id}: {role}");
    Ok(())
}
