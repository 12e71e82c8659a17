mod filing_status;
mod household;
mod projection;
mod tax_bracket;

pub use filing_status::FilingStatus;
pub use household::Household;
pub use projection::{IncomeSources, ProjectionYear};
pub use tax_bracket::TaxBracket;
