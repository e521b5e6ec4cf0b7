pub mod animation;
pub mod constellation;
pub mod cube;
pub mod particle_field;
pub mod transition;
