use crate::User;

#[test]
fn test_user_new_assigns_id() {
    let a = User::new(
        "Alice".to_string(),
        "alice@example.com".to_string(),
        "$2b$08$hash".to_string(),
    );
    let b = User::new(
        "Alice".to_string(),
        "alice@example.com".to_string(),
        "$2b$08$hash".to_string(),
    );

    assert_ne!(a.id, b.id);
    assert_eq!(a.name, "Alice");
    assert_eq!(a.email, "alice@example.com");
}

#[test]
fn test_user_new_keeps_hash_verbatim() {
    let user = User::new(
        "Bob".to_string(),
        "bob@example.com".to_string(),
        "$2b$08$abcdefghijklmnopqrstuv".to_string(),
    );

    assert_eq!(user.password_hash, "$2b$08$abcdefghijklmnopqrstuv");
}
