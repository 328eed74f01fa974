//! Registration, login and session lifecycle.

#![allow(clippy::unwrap_used)]

use atma_vision_core::{Email, Role, UserId};
use atma_vision_integration_tests::{fresh_storage, login};
use atma_vision_studio::db::{SessionStore, UserRepository, keys};
use atma_vision_studio::models::User;
use atma_vision_studio::services::{AuthError, AuthService};
use atma_vision_studio::storage::Storage;

#[test]
fn seed_login_returns_sanitized_client() {
    let storage = fresh_storage();
    let session = login(&storage, "sergey@example.com", "client");

    assert_eq!(session.role, Role::Client);
    assert_eq!(session.id, UserId::new("client-2"));

    // The persisted session blob carries no credential.
    let blob = storage.get(keys::SESSION).unwrap().unwrap();
    assert!(!blob.contains("password"));
}

#[test]
fn wrong_password_and_unknown_email_look_identical() {
    let storage = fresh_storage();
    let auth = AuthService::new(&storage);

    assert!(matches!(
        auth.login("sergey@example.com", "operator"),
        Err(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        auth.login("ghost@example.com", "client"),
        Err(AuthError::InvalidCredentials)
    ));
}

#[test]
fn register_then_relogin_roundtrip() {
    let storage = fresh_storage();
    let auth = AuthService::new(&storage);

    let candidate = User {
        id: UserId::new("1754000000000"),
        name: "Петр Новиков".to_owned(),
        email: Email::parse("petr@example.com").unwrap(),
        password: "petrpass".to_owned(),
        role: Role::Client,
    };
    let registered = auth.register(candidate.clone()).unwrap();

    // Registration auto-logs-in.
    assert_eq!(auth.current_user().unwrap(), Some(registered.clone()));

    // The stored record is field-for-field the candidate.
    let stored = UserRepository::new(&storage)
        .find_by_id(&candidate.id)
        .unwrap()
        .unwrap();
    assert_eq!(stored, candidate);

    auth.logout().unwrap();
    assert_eq!(auth.login("petr@example.com", "petrpass").unwrap(), registered);
}

#[test]
fn duplicate_email_rejected_and_collection_untouched() {
    let storage = fresh_storage();
    let auth = AuthService::new(&storage);
    let users = UserRepository::new(&storage);
    let before = users.list().unwrap();

    let result = auth.register(User {
        id: UserId::new("dup-1"),
        name: "Двойник".to_owned(),
        email: Email::new_unchecked("maria@example.com"),
        password: "x".to_owned(),
        role: Role::Client,
    });

    assert!(matches!(result, Err(AuthError::DuplicateEmail)));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Пользователь с таким email уже существует"
    );
    assert_eq!(users.list().unwrap(), before);
}

#[test]
fn role_change_refreshes_only_own_session() {
    let storage = fresh_storage();
    let auth = AuthService::new(&storage);
    login(&storage, "maria@example.com", "client");

    // Changing someone else keeps the session as-is.
    auth.change_role(&UserId::new("client-2"), Role::Operator)
        .unwrap();
    assert_eq!(auth.current_user().unwrap().unwrap().role, Role::Client);

    // Changing the session holder refreshes the snapshot, stripped again.
    auth.change_role(&UserId::new("client-3"), Role::Manager)
        .unwrap();
    let session = auth.current_user().unwrap().unwrap();
    assert_eq!(session.role, Role::Manager);
    let blob = storage.get(keys::SESSION).unwrap().unwrap();
    assert!(!blob.contains("password"));
}

#[test]
fn forged_session_is_trusted() {
    // The session pointer is the sole authentication check; anything able
    // to write the substrate can impersonate. Documented, accepted.
    let storage = fresh_storage();
    storage
        .set(
            keys::SESSION,
            r#"{"id":"admin-1","name":"Главный Менеджер","email":"admin@atma.vision","role":"MANAGER"}"#,
        )
        .unwrap();

    let current = SessionStore::new(&storage).current().unwrap().unwrap();
    assert_eq!(current.role, Role::Manager);
}
