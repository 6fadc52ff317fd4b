//! Feature Snippets - Runnable Demos
//!
//! Small, self-contained demos of language features: a closed shape
//! hierarchy with exhaustive dispatch, closure combinators, iterator
//! lambdas, `Option` handling and index-driven string reversal.
//!
//! Run any demo with:
//! ```bash
//! cargo run --bin <demo_name>
//! ```
//!
//! Each demo module exposes `write_report`, which renders the demo
//! transcript into any `std::io::Write`.

pub mod config;
pub mod error;
pub mod functional;
pub mod lambda;
pub mod optional;
pub mod shapes;
pub mod strings;
pub mod style;

pub use config::DemoConfig;
pub use error::{MissingValue, ShapeError};
