pub mod clock_face;
pub mod column;
pub mod text;
