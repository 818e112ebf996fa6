pub mod estimate;
pub mod smoother;
