use super::*;
use serde_json::json;

#[test]
fn test_open_in_new_tab_wire_format() {
    let command = BackgroundCommand::open_in_new_tab("https://example.com/a");
    let value = serde_json::to_value(&command).unwrap();
    assert_eq!(
        value,
        json!({"kind": "openInNewTab", "data": {"href": "https://example.com/a"}})
    );
}

#[test]
fn test_duplicate_tab_has_no_data() {
    let value = serde_json::to_value(BackgroundCommand::DuplicateTab).unwrap();
    assert_eq!(value, json!({"kind": "duplicateTab"}));
}

#[test]
fn test_duplicate_tab_deserializes_without_data() {
    let command: BackgroundCommand =
        serde_json::from_value(json!({"kind": "duplicateTab"})).unwrap();
    assert_eq!(command, BackgroundCommand::DuplicateTab);
}

#[test]
fn test_move_tab_direction_is_lowercase() {
    let command: BackgroundCommand =
        serde_json::from_value(json!({"kind": "moveTab", "data": {"direction": "right"}}))
            .unwrap();
    assert_eq!(command, BackgroundCommand::move_tab(MoveDirection::Right));
}

#[test]
fn test_unknown_kind_rejected() {
    let result = serde_json::from_value::<BackgroundCommand>(json!({"kind": "closeTab"}));
    assert!(result.is_err());
}

#[test]
fn test_kind_round_trips_through_str() {
    for kind in BackgroundCommandKind::ALL {
        assert_eq!(kind.as_str().parse::<BackgroundCommandKind>(), Ok(kind));
    }
    assert_eq!(
        "nope".parse::<BackgroundCommandKind>(),
        Err("nope".to_string())
    );
}

#[test]
fn test_command_kind_matches_wire_kind() {
    let command = BackgroundCommand::move_tab(MoveDirection::Left);
    let value = serde_json::to_value(&command).unwrap();
    assert_eq!(value["kind"], command.kind().as_str());
}

#[test]
fn test_direction_offset() {
    assert_eq!(MoveDirection::Left.offset(), -1);
    assert_eq!(MoveDirection::Right.offset(), 1);
}
