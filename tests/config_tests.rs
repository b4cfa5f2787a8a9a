// Host-side tests for settings defaults, overrides and validation.

use cursor_fx::config::Settings;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_the_stock_look() {
    let s = Settings::default();
    assert_eq!(s.cursor_blur, 40.0);
    assert_eq!(s.reflective_blur, 20.0);
    assert_eq!(s.ratio, 0.1);
    assert_eq!(s.cursor_filter(), "blur(40px)");
    assert_eq!(s.sweep_filter(), "blur(20px)");
}

#[test]
fn empty_lookup_yields_defaults() {
    let s = Settings::from_lookup(lookup(&[])).unwrap();
    assert_eq!(s, Settings::default());
}

#[test]
fn lookup_overrides_recognized_keys() {
    let s = Settings::from_lookup(lookup(&[
        ("cursor-blur", "12"),
        ("reflective-blur", " 4.5 "),
        ("ratio", "0.25"),
        ("unrelated", "whatever"),
    ]))
    .unwrap();
    assert_eq!(s.cursor_blur, 12.0);
    assert_eq!(s.reflective_blur, 4.5);
    assert_eq!(s.ratio, 0.25);
}

#[test]
fn unparsable_value_names_the_key() {
    let err = Settings::from_lookup(lookup(&[("ratio", "wide")])).unwrap_err();
    assert!(format!("{err:#}").contains("ratio"));
}

#[test]
fn out_of_range_values_are_rejected() {
    assert!(Settings::from_lookup(lookup(&[("ratio", "0")])).is_err());
    assert!(Settings::from_lookup(lookup(&[("ratio", "-1")])).is_err());
    assert!(Settings::from_lookup(lookup(&[("cursor-blur", "-2")])).is_err());
    assert!(Settings::from_lookup(lookup(&[("reflective-blur", "inf")])).is_err());
    assert!(Settings::from_lookup(lookup(&[("ratio", "NaN")])).is_err());
}
