use teller_core::ProfileBuilder;

#[test]
fn builder_snapshots_are_independent() {
    let builder = ProfileBuilder::new("Alice", 30).with_email("alice@example.com");
    let first = builder.build().unwrap();
    let builder = builder.with_email("new@example.com").with_phone("123456789");
    let second = builder.build().unwrap();

    // The first snapshot is unaffected by later setter calls
    assert_eq!(first.email.as_deref(), Some("alice@example.com"));
    assert!(first.phone.is_none());
    assert_eq!(second.email.as_deref(), Some("new@example.com"));
    assert_eq!(second.phone.as_deref(), Some("123456789"));
}

#[test]
fn display_lists_all_fields_in_order() {
    let profile = ProfileBuilder::new("Alice", 30)
        .with_email("alice@example.com")
        .with_phone("123456789")
        .build()
        .unwrap();
    assert_eq!(
        profile.to_string(),
        "Alice, 30, alice@example.com, 123456789, -"
    );
}
