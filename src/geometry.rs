pub(crate) mod flip;
pub(crate) mod rect;
pub(crate) mod resolve;
