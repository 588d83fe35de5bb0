use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

const USERS_YAML: &str = "\
users:
  - username: alice
    password: secret
    role: Admin
  - username: bob
    password: hunter2
    role: Jury
";

#[test]
fn test_role_parses_case_sensitively() {
    assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
    assert_eq!("Jury".parse::<Role>().unwrap(), Role::Jury);
    assert!(matches!(
        "admin".parse::<Role>(),
        Err(SessionError::UnknownRole(r)) if r == "admin"
    ));
}

#[test]
fn test_only_admin_can_ingest() {
    assert!(Role::Admin.can_ingest_sources());
    assert!(!Role::Jury.can_ingest_sources());
}

#[test]
fn test_authenticate_returns_context() {
    let directory = UserDirectory::from_yaml_str(USERS_YAML).unwrap();
    assert_eq!(directory.len(), 2);

    let ctx = directory.authenticate("alice", "secret").unwrap();
    assert_eq!(ctx.user, "alice");
    assert_eq!(ctx.role, Role::Admin);

    let ctx = directory.authenticate("bob", "hunter2").unwrap();
    assert_eq!(ctx.role, Role::Jury);
}

#[test]
fn test_each_authentication_gets_new_request_id() {
    let directory = UserDirectory::from_yaml_str(USERS_YAML).unwrap();
    let first = directory.authenticate("alice", "secret").unwrap();
    let second = directory.authenticate("alice", "secret").unwrap();
    assert_ne!(first.request_id, second.request_id);
}

#[test]
fn test_bad_credentials_rejected() {
    let directory = UserDirectory::from_yaml_str(USERS_YAML).unwrap();
    assert!(matches!(
        directory.authenticate("alice", "wrong"),
        Err(SessionError::InvalidCredentials)
    ));
    assert!(matches!(
        directory.authenticate("mallory", "secret"),
        Err(SessionError::InvalidCredentials)
    ));
}

#[test]
fn test_unknown_role_in_file_is_parse_error() {
    let yaml = "users:\n  - username: x\n    password: y\n    role: Superuser\n";
    assert!(matches!(
        UserDirectory::from_yaml_str(yaml),
        Err(SessionError::Parse(_))
    ));
}

#[test]
fn test_empty_users_file() {
    let directory = UserDirectory::from_yaml_str("users: []\n").unwrap();
    assert!(directory.is_empty());
}

#[test]
fn test_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(USERS_YAML.as_bytes()).unwrap();

    let directory = UserDirectory::from_path(file.path()).unwrap();
    assert_eq!(directory.role_of("bob"), Some(Role::Jury));
    assert_eq!(directory.role_of("nobody"), None);
}

#[test]
fn test_from_missing_path() {
    let err = UserDirectory::from_path(std::path::Path::new("/nonexistent/users.yml")).unwrap_err();
    assert!(matches!(err, SessionError::Io { .. }));
}

#[test]
fn test_with_user_builder() {
    let directory = UserDirectory::default().with_user("carol", "pw", Role::Jury);
    assert_eq!(directory.authenticate("carol", "pw").unwrap().role, Role::Jury);
}
