//! # lifepath-calendar
//!
//! Pure date arithmetic for the Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"GregorianDate::new()"| B["GregorianDate"]
//!     C["'YYYY-MM-DD'"] -->|"GregorianDate::parse_iso()"| B
//!     B -->|".previous_day()"| B
//!     B -->|".format_iso() / .format_us() / .format_short()"| D["String"]
//!     E["(year, month)"] -->|"days_in_month()"| F["28..=31"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use lifepath_calendar::{GregorianDate, days_in_month, is_leap_year};
//!
//! let date = GregorianDate::parse_iso("2024-02-10").unwrap();
//! assert_eq!(date.format_us(), "02/10/2024");
//! assert_eq!(date.format_short(), "Feb 10, 2024");
//!
//! // Leap-year awareness
//! assert!(is_leap_year(2024));
//! assert_eq!(days_in_month(2024, 2).unwrap(), 29);
//!
//! // Day arithmetic across boundaries
//! let jan1 = GregorianDate::new(2024, 1, 1).unwrap();
//! assert_eq!(jan1.previous_day().format_iso(), "2023-12-31");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Validated Gregorian date with ordering, parsing, formatting |
//! | `month` | Days-per-month tables and the leap-year rule |
//! | `error` | Error types |

mod date;
mod error;
mod month;

pub use date::GregorianDate;
pub use error::CalendarError;
pub use month::{days_in_month, is_leap_year};
