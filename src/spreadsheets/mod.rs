pub mod export_xlsx;

pub use export_xlsx::{export_accounts_xlsx, write_accounts_xlsx, ExportError};
