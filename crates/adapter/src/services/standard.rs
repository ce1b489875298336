use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TRANSIENT: AtomicU64 = AtomicU64::new(0);

/// Service shared by every resolve.
#[derive(Debug, Default)]
pub struct Singleton;

/// Service created anew on every resolve; `id` tells instances apart.
#[derive(Debug, PartialEq, Eq)]
pub struct Transient {
	pub id: u64,
}

impl Transient {
	pub fn new() -> Self {
		Self {
			id: NEXT_TRANSIENT.fetch_add(1, Ordering::Relaxed),
		}
	}
}

impl Default for Transient {
	fn default() -> Self {
		Self::new()
	}
}

#[derive(Debug)]
pub struct Combined {
	pub singleton: Arc<Singleton>,
	pub transient: Transient,
}

impl Combined {
	pub fn new(singleton: Arc<Singleton>, transient: Transient) -> Self {
		Self {
			singleton,
			transient,
		}
	}
}
