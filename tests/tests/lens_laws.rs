//! Lens algebra laws over realistic person/address structures.

use optic_core::{fields, Value};
use optic_lens::{boolean, compose, float, string, Lens, LensError};
use optic_tests::{address_lens, person_lens, sample_person};

#[test]
fn object_round_trip() {
    let lens = person_lens();
    let person = sample_person();

    assert_eq!(
        lens.get(&person).unwrap(),
        Value::Map(fields! {
            "name" => "Ayano",
            "email" => "ayano@naver.com",
        })
    );

    let update = Value::Map(fields! {
        "name" => "Nocchi",
        "email" => "nocchi@naver.com",
    });
    let person = lens.set(person, update.clone()).unwrap();
    assert_eq!(lens.get(&person).unwrap(), update);
}

#[test]
fn composed_lens_reaches_nested_address() {
    // person.address viewed as a flat map
    let lens = compose(Lens::attribute("address"), address_lens());
    let person = sample_person();

    assert_eq!(
        lens.get(&person).unwrap(),
        Value::Map(fields! {
            "street" => "Banpo",
            "number" => 12i64,
        })
    );

    let person = lens
        .set(
            person,
            Value::Map(fields! { "street" => "Gangnam", "number" => 25i64 }),
        )
        .unwrap();

    // The nested update is visible through a plain attribute path too
    let street = compose(Lens::attribute("address"), Lens::attribute("street"));
    assert_eq!(street.get(&person).unwrap(), Value::from("Gangnam"));
    // Sibling fields are untouched
    assert_eq!(
        Lens::attribute("name").get(&person).unwrap(),
        Value::from("Ayano")
    );
}

#[test]
fn maybe_makes_optional_substructure_total() {
    // person.address is optional: Maybe passes null through untouched
    let lens = compose(Lens::attribute("address"), Lens::maybe(address_lens()));

    let homeless = Value::Map(fields! {
        "name" => "Ayano",
        "email" => "ayano@naver.com",
        "address" => Value::Null,
    });

    assert_eq!(lens.get(&homeless).unwrap(), Value::Null);

    // Writing null keeps the address absent
    let unchanged = lens.set(homeless.clone(), Value::Null).unwrap();
    assert_eq!(lens.get(&unchanged).unwrap(), Value::Null);

    // Writing a value fills the absent address in
    let filled = lens
        .set(
            homeless,
            Value::Map(fields! { "street" => "Banpo", "number" => 12i64 }),
        )
        .unwrap();
    assert_eq!(
        lens.get(&filled).unwrap(),
        Value::Map(fields! { "street" => "Banpo", "number" => 12i64 })
    );
}

#[test]
fn associativity_on_deep_chain() {
    let person = sample_person();

    let (address, street) = (Lens::attribute("address"), Lens::attribute("street"));
    let typed = string();

    let left = compose(compose(address.clone(), street.clone()), typed.clone());
    let right = compose(address, compose(street, typed));

    assert_eq!(left.get(&person).unwrap(), right.get(&person).unwrap());

    let from_left = left.set(person.clone(), Value::from("Gangnam")).unwrap();
    let from_right = right.set(person, Value::from("Gangnam")).unwrap();
    assert_eq!(from_left, from_right);
}

#[test]
fn object_set_enforces_exact_key_set() {
    let lens = person_lens();

    let missing = lens
        .set(sample_person(), Value::Map(fields! { "name" => "Nocchi" }))
        .unwrap_err();
    assert_eq!(missing, LensError::MissingKey { key: "email".into() });

    let extra = lens
        .set(
            sample_person(),
            Value::Map(fields! {
                "name" => "Nocchi",
                "email" => "nocchi@naver.com",
                "age" => 25i64,
            }),
        )
        .unwrap_err();
    assert_eq!(extra, LensError::UnexpectedKey { key: "age".into() });
}

#[test]
fn then_builder_matches_compose() {
    let person = sample_person();

    let built = Lens::attribute("address").then(Lens::attribute("number"));
    let composed = compose(Lens::attribute("address"), Lens::attribute("number"));

    assert_eq!(built.get(&person).unwrap(), Value::Int(12));
    assert_eq!(built.get(&person).unwrap(), composed.get(&person).unwrap());
}

#[test]
fn primitive_lenses_accept_only_their_kind() {
    assert_eq!(
        boolean().set(Value::Null, Value::Bool(true)).unwrap(),
        Value::Bool(true)
    );
    assert!(boolean().set(Value::Null, Value::Int(1)).is_err());

    assert_eq!(
        float().set(Value::Null, Value::Float(2.5)).unwrap(),
        Value::Float(2.5)
    );
    assert!(float().set(Value::Null, Value::Int(2)).is_err());
}

#[test]
fn typed_set_reports_both_kind_names() {
    let lens = compose(Lens::attribute("name"), string());
    let err = lens.set(sample_person(), Value::Int(5)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected type String, got a value of type Int"
    );
}
