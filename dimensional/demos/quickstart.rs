//! Minimal end-to-end example: build quantities from units, derive a velocity and read values back.

use dimensional::{Centimeter, Kilometer, KilometerPerHour, Length, Minute, Number, Quantity, Time, Velocity};

fn main() {
    let d = Quantity::<Length>::of::<Kilometer>(12.0);
    let t = Quantity::<Time>::of::<Minute>(30.0);
    let v: Quantity<Velocity> = (d / t).cast();
    assert!((v.value_in::<KilometerPerHour>() - 24.0).abs() < 1e-9);
    println!("{} = {}", v, v.display_in::<KilometerPerHour>());

    let area = Quantity::<Length>::of::<Centimeter>(20.0).squared();
    println!("area: {} ({})", area, area.dimension());

    let ratio: Number = (d / Quantity::<Length>::of::<Kilometer>(4.0)).cast();
    assert!(ratio == 3.0);
    println!("ratio: {}", ratio);
}
