pub(crate) mod blur;
pub(crate) mod contour;
pub(crate) mod noise;
pub(crate) mod rng;
