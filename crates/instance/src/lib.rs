// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! JSON share files.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "1000" }
//! }
//! ```
//!
//! Every key other than `keys` is an x-coordinate; its `value` is a numeral in `base`.

mod errors;
mod reader;
mod writer;

pub use errors::{InstanceError, InstanceResult};
pub use reader::{load_instance, parse_instance};
pub use writer::{render_instance, write_instance};
