// Market records: the normalized shape handed over by the platform fetchers.

pub mod loader;
pub mod record;
