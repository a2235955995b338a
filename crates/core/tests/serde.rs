#![cfg(feature = "serde")]

use fdclosure_core::{closure, Attribute, AttributeSet, FunctionalDependency};

#[test]
fn attribute_set_serializes_as_group() {
    let set = AttributeSet::from_group("agb");
    assert_eq!(serde_json::to_string(&set).unwrap(), "\"AGB\"");
    let back: AttributeSet = serde_json::from_str("\"bga\"").unwrap();
    assert_eq!(back, set);
}

#[test]
fn attribute_rejects_groups() {
    assert!(serde_json::from_str::<Attribute>("\"a\"").is_ok());
    assert!(serde_json::from_str::<Attribute>("\"ab\"").is_err());
    assert!(serde_json::from_str::<Attribute>("\"\"").is_err());
}

#[test]
fn dependency_fields() {
    let dependency = FunctionalDependency::new("cg", "h");
    let value = serde_json::to_value(&dependency).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "determiners": "CG", "determined": "H" })
    );
    let back: FunctionalDependency = serde_json::from_value(value).unwrap();
    assert_eq!(back, dependency);
}

#[test]
fn closure_serializes_trace() {
    let result = closure("a", &[FunctionalDependency::new("A", "B")]);
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["attributes"], "a");
    assert_eq!(value["result"], "AB");
    assert_eq!(value["trace"], serde_json::json!(["A", "AB"]));
}
