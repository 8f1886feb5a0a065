pub mod library;
pub mod loan;

pub use library::Library;
pub use loan::{LoanApplicationError, LoanService, ServiceDependencies};
