#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Container adapters for the IoC performance harness.
//!
//! Every container under test is driven through [`ContainerAdapter`]: the harness calls
//! [`ContainerAdapter::prepare`] once, then resolves the [`services`] graph by type.
//! [`NoneAdapter`] is the baseline: hand-written factories stored in a
//! [`iocperf_slot_table::SlotTable`] keyed by [`services::ServiceKey`].

mod adapter;
mod none;
pub mod services;

pub use adapter::{AdapterError, AdapterInfo, ContainerAdapter, Factory, Features, Instance};
pub use none::NoneAdapter;
