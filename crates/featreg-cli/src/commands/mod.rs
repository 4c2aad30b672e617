pub mod check;
pub mod list;
pub mod lookup;
pub mod name;
pub mod suggest;

#[cfg(test)]
mod list_tests;
