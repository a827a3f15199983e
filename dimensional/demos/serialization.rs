//! Serializing quantities and rationals with serde.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use dimensional::{Length, Quantity, Rational, Time, Velocity};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Leg {
        distance: Quantity<Length>,
        #[serde(with = "dimensional::serde_with_dimension")]
        speed: Quantity<Velocity>,
        exponent: Rational,
    }

    let leg = Leg {
        distance: Quantity::new(1_200.0),
        speed: (Quantity::<Length>::new(10.0) / Quantity::<Time>::new(4.0)).cast(),
        exponent: Rational::new(2, 4),
    };

    let json = serde_json::to_string_pretty(&leg).unwrap();
    println!("{json}");

    let restored: Leg = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.distance, leg.distance);
    assert_eq!(restored.exponent, Rational::new(1, 2));

    let bad = r#"{"distance": 1.0, "speed": {"value": 1.0, "dimension": "s"}, "exponent": {"numerator": 1, "denominator": 2}}"#;
    let err = serde_json::from_str::<Leg>(bad).unwrap_err();
    println!("rejected: {err}");

    let zero = r#"{"distance": 1.0, "speed": {"value": 1.0}, "exponent": {"numerator": 1, "denominator": 0}}"#;
    let err = serde_json::from_str::<Leg>(zero).unwrap_err();
    println!("rejected: {err}");
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature. Run with:");
    println!("cargo run --example serialization --features serde");
}
