pub mod app;
pub mod factory;

#[allow(unused_imports)]
pub use app::{TestApp, TODAY};
#[allow(unused_imports)]
pub use factory::Factory;
