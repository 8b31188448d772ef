//! Query modules. Each takes a borrowed `&Connection`.

pub mod licenses;
