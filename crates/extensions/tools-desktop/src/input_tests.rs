use super::*;

#[test]
fn test_parse_key_letters_and_digits() {
    for c in ('a'..='z').chain('0'..='9') {
        assert!(matches!(parse_key(&c.to_string()), Ok(Key::Unicode(k)) if k == c));
    }
    assert!(matches!(parse_key("Z"), Ok(Key::Unicode('z'))));
}

#[test]
fn test_parse_key_named() {
    for name in [
        "enter", "return", "tab", "space", "backspace", "delete", "del", "escape", "esc", "home",
        "end", "pageup", "pagedown", "up", "down", "left", "right",
    ] {
        assert!(parse_key(name).is_ok(), "{name}");
    }
}

#[test]
fn test_parse_key_modifiers() {
    assert!(matches!(parse_key("cmd"), Ok(Key::Meta)));
    assert!(matches!(parse_key("Command"), Ok(Key::Meta)));
    assert!(matches!(parse_key("option"), Ok(Key::Alt)));
    assert!(matches!(parse_key("CTRL"), Ok(Key::Control)));
    assert!(matches!(parse_key("shift"), Ok(Key::Shift)));
}

#[test]
fn test_parse_key_function_keys() {
    for n in 1..=12 {
        assert!(parse_key(&format!("F{n}")).is_ok());
    }
}

#[test]
fn test_parse_key_punctuation() {
    assert!(matches!(parse_key("+"), Ok(Key::Unicode('+'))));
    assert!(matches!(parse_key(" - "), Ok(Key::Unicode('-'))));
}

#[test]
fn test_parse_key_invalid() {
    let err = parse_key("hyper").unwrap_err();
    assert_eq!(err.to_string(), "Invalid key: hyper");
    assert!(parse_key("").is_err());
}

#[test]
fn test_input_error_into_automation_error() {
    let err: AutomationError = InputError::InvalidKey("hyper".to_string()).into();
    assert!(matches!(err, AutomationError::UnknownKey(k) if k == "hyper"));

    let err: AutomationError = InputError::Failed("no display".to_string()).into();
    assert!(matches!(err, AutomationError::Input(_)));
}

#[test]
#[ignore] // needs a display and input permissions
fn test_input_controller_new() {
    assert!(InputController::new().is_ok());
}
