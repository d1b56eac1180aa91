pub mod logging;
pub mod shared;
pub mod trends;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
