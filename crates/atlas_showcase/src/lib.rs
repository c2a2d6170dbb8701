pub mod address;
pub mod key_store;
pub mod location;
pub mod location_registry;
pub mod notifier;
pub mod result_reshaper;
pub mod session;
pub mod showcase;

#[cfg(test)]
pub(crate) mod test_utils;
