pub(crate) mod compose;
pub(crate) mod pixel;
pub(crate) mod plan;
