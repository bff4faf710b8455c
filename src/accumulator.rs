//! The `accumulator` module holds the trusted accumulator core: the secret
//! `c`, the commitment `z`, the auxiliary point `Q`, and the operations that
//! mutate them (`add`, `del`) or derive witnesses from them (`prove`,
//! `verify`).
mod core;
mod poly;
mod records;
mod secret;

pub use self::core::Accumulator;
pub use records::{Element, Point, Update, Witness, WitnessUpdate};

pub(crate) use poly::{elementary_symmetric, sigma_at};
