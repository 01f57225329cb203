pub(crate) mod projector;
pub(crate) mod vec3;
