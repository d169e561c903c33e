pub(crate) mod ease;
pub(crate) mod lerp;
pub(crate) mod scheduler;
pub(crate) mod timeline;
