//! Angles: wraparound with `AngleRange`, compass headings and arc lengths.

use dimensional::{to_angular, to_linear, Angle, AngleRange, Centimeter, CompassAngle, Degree, Length, Quantity};

fn main() {
    let heading = CompassAngle::from_degrees(15.0);
    let standard = heading.to_standard();
    println!("{} is {:.1}° standard", heading, standard.to_degrees());

    let mut bearing = AngleRange::new(Angle::from_degrees(170.0));
    bearing += Angle::from_degrees(20.0);
    println!("170° + 20° wraps to {:.1}", bearing.angle().display_in::<Degree>());
    assert!((bearing.angle().to_degrees() + 170.0).abs() < 1e-9);

    let radius = Quantity::<Length>::of::<Centimeter>(2.0);
    let arc = Quantity::<Length>::of::<Centimeter>(2.0);
    let theta = to_angular(arc, radius);
    println!("a {} arc on a {} radius subtends {}", arc.display_in::<Centimeter>(), radius.display_in::<Centimeter>(), theta);
    let back = to_linear(theta, radius);
    assert!((back.value_in::<Centimeter>() - 2.0).abs() < 1e-12);
}
