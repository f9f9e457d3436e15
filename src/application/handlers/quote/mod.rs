//! Quote handlers.

mod calculate_quote;
mod list_packages;

pub use calculate_quote::{CalculateQuoteCommand, CalculateQuoteHandler};
pub use list_packages::ListPackagesHandler;
