//! Concrete calendar schemas.
//!
//! All of them count days from the first day of their own year 1.

mod coptic;
mod egyptian;
mod gregorian;
mod julian;
mod pax;

pub use coptic::Coptic13Schema;
pub use egyptian::Egyptian12Schema;
pub use gregorian::GregorianSchema;
pub use julian::JulianSchema;
pub use pax::PaxKernel;
