//! Environment bootstrap for rendering data-analysis reports.
//!
//! Called once at the start of a report render, before any content is
//! generated. It initializes logging, makes sure the processed-data output
//! directory exists, and seeds the process environment from a `.env` file at
//! the project root, if one is present.
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     report_setup::Bootstrap::new()
//!         .project_root("/home/user/reports/quarterly")
//!         .run()?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod setup;

pub use setup::{configure_environment, Bootstrap};
