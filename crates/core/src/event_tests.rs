use super::*;

#[test]
fn denied_event_names_both_parties() {
    let event = Event::LockDenied {
        account: "acct_1".to_string(),
        holder: "mobile".to_string(),
        current_holder: "atm".to_string(),
    };
    match event {
        Event::LockDenied {
            holder,
            current_holder,
            ..
        } => {
            assert_eq!(holder, "mobile");
            assert_eq!(current_holder, "atm");
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn events_serialize_with_variant_tags() {
    let event = Event::LockAcquired {
        account: "acct_1".to_string(),
        holder: "atm".to_string(),
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("LockAcquired"));
    assert!(json.contains("acct_1"));
}
