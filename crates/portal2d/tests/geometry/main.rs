#[macro_use]
extern crate approx;

mod closest_points;
mod gjk_mpr_agreement;
mod mtv;
mod shapes;
mod support_map;
