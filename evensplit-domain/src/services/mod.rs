pub mod share_calculator;
pub mod transfer_constructor;

pub use share_calculator::ShareCalculator;
pub use transfer_constructor::TransferConstructor;
