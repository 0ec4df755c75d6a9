use crate::math::Real;

pub(crate) const COS_FRAC_PI_4: Real = core::f64::consts::FRAC_1_SQRT_2 as Real;
pub(crate) const SIN_FRAC_PI_4: Real = COS_FRAC_PI_4;
