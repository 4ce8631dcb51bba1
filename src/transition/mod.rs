pub(crate) mod generator;
pub(crate) mod random;
pub(crate) mod scripted;
pub(crate) mod value;
