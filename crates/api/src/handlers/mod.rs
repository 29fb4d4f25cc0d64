pub mod rabbi;
pub mod series;
