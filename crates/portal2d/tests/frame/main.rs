#[macro_use]
extern crate approx;

mod proxy;
