pub mod file;
pub mod inspect;
pub mod keygen;
pub mod misc;
pub mod open;
pub mod seal;
pub mod share;
pub mod strength;
