//! Concrete arithmetic operations
//!
//! One module per catalog entry. Each module defines the factory type the
//! registry registers and the pure kernel function the operation wraps.

pub mod add;
pub mod subtract;
pub mod multiply;
pub mod divide;
pub mod power;
pub mod root;
pub mod modulus;
pub mod integer_divide;
pub mod percentage;
pub mod absolute;
pub mod absolute_difference;

pub use absolute::Absolute;
pub use absolute_difference::AbsoluteDifference;
pub use add::Add;
pub use divide::Divide;
pub use integer_divide::IntegerDivide;
pub use modulus::Modulus;
pub use multiply::Multiply;
pub use percentage::Percentage;
pub use power::Power;
pub use root::Root;
pub use subtract::Subtract;
