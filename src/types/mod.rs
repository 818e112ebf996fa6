pub mod observation;
pub mod traits;
pub mod variable;
