pub(crate) mod collision;
pub(crate) mod def;
pub(crate) mod hitbox;
pub(crate) mod object;
pub(crate) mod surface;
