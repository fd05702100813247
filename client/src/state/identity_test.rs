use super::*;

fn identity(role: Role, permissions: &[Permission]) -> Identity {
    Identity {
        id: 3,
        name: "Grace".to_owned(),
        email: Some("grace@example.com".to_owned()),
        role,
        permissions: permissions.iter().cloned().collect(),
    }
}

#[test]
fn role_parses_known_names_only() {
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert_eq!("user".parse::<Role>(), Ok(Role::User));
    assert_eq!("superuser".parse::<Role>(), Err("superuser".to_owned()));
    assert_eq!("Admin".parse::<Role>(), Err("Admin".to_owned()));
}

#[test]
fn permission_parse_keeps_backend_name_trimmed() {
    assert_eq!("view_riders".parse::<Permission>(), Ok(Permission::new("view_riders")));
    assert_eq!(" edit_rates ".parse::<Permission>().map(|p| p.as_str().to_owned()), Ok("edit_rates".to_owned()));
}

#[test]
fn permission_blank_name_is_error() {
    assert_eq!("".parse::<Permission>(), Err(String::new()));
    assert_eq!("  ".parse::<Permission>(), Err("  ".to_owned()));
}

#[test]
fn admin_can_do_everything_without_grants() {
    let admin = identity(Role::Admin, &[]);
    assert!(admin.can(&Permission::new("view_riders")));
    assert!(admin.can(&Permission::new("anything")));
}

#[test]
fn user_only_holds_granted_permissions() {
    let user = identity(Role::User, &[Permission::new("view_riders")]);
    assert!(user.can(&Permission::new("view_riders")));
    assert!(!user.can(&Permission::new("edit_riders")));
    assert!(!user.can(&Permission::new("view_customers")));
}

#[test]
fn display_name_falls_back_to_email_then_id() {
    let mut who = identity(Role::User, &[]);
    assert_eq!(who.display_name(), "Grace");
    who.name = "  ".to_owned();
    assert_eq!(who.display_name(), "grace@example.com");
    who.email = None;
    assert_eq!(who.display_name(), "#3");
}

#[test]
fn credential_debug_is_redacted() {
    let credential = Credential::new("secret-token");
    assert_eq!(format!("{credential:?}"), "Credential(<redacted>)");
    assert_eq!(credential.as_str(), "secret-token");
}

#[test]
fn credential_bearer_header() {
    assert_eq!(Credential::new("tok").bearer(), "Bearer tok");
}

#[test]
fn blank_credential_is_empty() {
    assert!(Credential::new("").is_empty());
    assert!(Credential::new("   ").is_empty());
    assert!(!Credential::new("t").is_empty());
}
