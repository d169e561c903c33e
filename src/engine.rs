pub(crate) mod context;
pub(crate) mod input;
pub(crate) mod mutators;
pub(crate) mod opts;
pub(crate) mod registry;
pub(crate) mod timelines;
