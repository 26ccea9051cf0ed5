//! Unit tests for the color module

use tinct::{Color, NamedColor, ParseColorError, Rgb};

#[test]
fn rgb_record_round_trip_is_lossless() {
    let color = Rgb::new(12, 0, 255);
    let json = serde_json::to_string(&color).unwrap();
    let back: Rgb = serde_json::from_str(&json).unwrap();
    assert_eq!(back, color);
}

#[test]
fn rgb_record_missing_channel_fails() {
    let result: Result<Rgb, _> = serde_json::from_str(r#"{"red":1,"blue":3}"#);
    assert!(result.is_err(), "color records have no defaults");
}

#[test]
fn rgb_values_with_equal_components_are_interchangeable() {
    assert_eq!(Rgb::new(5, 5, 5), Rgb::new(5, 5, 5));
    let mut seen = std::collections::HashSet::new();
    seen.insert(Rgb::new(5, 5, 5));
    assert!(seen.contains(&Rgb::new(5, 5, 5)));
}

#[test]
fn red_renders_as_ff0000() {
    assert_eq!(Rgb::new(255, 0, 0).to_hex(), "#FF0000");
}

#[test]
fn average_truncates_odd_sums() {
    // (255 + 0) / 2 truncates to 127
    assert_eq!(
        Rgb::new(255, 255, 255).average(Rgb::new(0, 0, 0)),
        Rgb::new(127, 127, 127)
    );
}

#[test]
fn every_named_color_has_exactly_one_code() {
    let all = [
        NamedColor::Default,
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::BrightBlack,
        NamedColor::BrightRed,
        NamedColor::BrightGreen,
        NamedColor::BrightYellow,
        NamedColor::BrightBlue,
        NamedColor::BrightMagenta,
        NamedColor::BrightCyan,
        NamedColor::BrightWhite,
    ];
    let codes: std::collections::HashSet<u8> = all.iter().map(|c| c.code()).collect();
    assert_eq!(codes.len(), all.len(), "mapping is total and distinct");
}

#[test]
fn unknown_color_name_is_reported() {
    let err = "hotpink".parse::<Color>().unwrap_err();
    assert_eq!(err, ParseColorError::UnknownName("hotpink".to_string()));
}

#[test]
fn color_defaults_to_terminal_default() {
    assert!(Color::default().is_default());
    assert!(!Color::from(Rgb::new(0, 0, 0)).is_default());
}
