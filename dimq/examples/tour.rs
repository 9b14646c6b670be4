//! Prints base units, derived units, conversions and a few physical constants.

use dimq::constants::{ELECTRON_CHARGE, GRAVITATIONAL_CONSTANT, SPEED_OF_LIGHT};
use dimq::literals::*;
use dimq::units::{angle, length, pressure, temperature, time, volume};
use dimq::{pow, sqrt, Area, Dimensionless, Frequency, Length, Mass, Time};

fn main() {
    println!("-- base units --");
    println!("{}", m(1.0));
    println!("{}", kg(1.0));
    println!("{}", s(1.0));
    println!("{}", amp(1.0));
    println!("{}", kelvin(1.0));
    println!("{}", mol(1.0));
    println!("{}", cd(1.0));

    println!("-- derived units --");
    let a1 = m(100.0);
    let t1 = s(20.0);
    println!("{} / {} = {}", a1, t1, a1 / t1);
    println!("{} / {} / {} = {}", a1, t1, t1, a1 / t1 / t1);
    println!("{} * {} = {}", a1, a1, a1 * a1);
    println!("1 / {} = {}", t1, 1.0 / t1);
    println!("{} * {} = {}", newton(3.0), m(2.0), newton(3.0) * m(2.0));
    println!("{} / {} = {}", watt(60.0), volt(230.0), watt(60.0) / volt(230.0));

    let odd = Length::new(4.0) / Mass::new(2.0);
    println!("unregistered: {} (exponent form: {:#})", odd, odd);
    println!("root: {}", sqrt(Area::new(25.0)));
    println!("power: {}", pow::<3, _>(m(2.0)));

    println!("-- conversions --");
    println!("{:.3} mi", km(42.195).in_unit(length::MILE));
    println!("{:.1} ft", m(8848.0).in_unit(length::FOOT));
    println!("{} deg", rad(core::f64::consts::PI).in_unit(angle::DEGREE));
    println!("{} deg", (deg(90.0) + rad(2.0)).in_unit(angle::DEGREE));
    println!("{:.5} bar", atm(1.0).in_unit(pressure::BAR));
    println!("{:.2} gal", m3(1.0).in_unit(volume::GALLON));
    println!("{:.2} h", minutes(135.0).in_unit(time::HOUR));
    println!("{:.2} degC", temperature::to_celsius(kelvin(300.0)));
    println!("{:.1} degF", temperature::to_fahrenheit(deg_c(37.0)));

    println!("-- dimensionless --");
    let ratio: Dimensionless = (kg(3.0) / g(1500.0)).cast();
    println!("ratio = {}", ratio);
    let f: Frequency = hz(50.0);
    let period: Time = (1.0 / f).cast();
    println!("period of {} = {:.3}", f, period);

    println!("-- constants --");
    println!("c = {:.6e} {}", SPEED_OF_LIGHT.value(), SPEED_OF_LIGHT.unit_name());
    println!("G = {:.4e} {}", GRAVITATIONAL_CONSTANT.value(), GRAVITATIONAL_CONSTANT.unit_name());
    println!("e = {}", ELECTRON_CHARGE);
}
