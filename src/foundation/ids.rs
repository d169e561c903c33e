use crate::foundation::arena::arena_key;

arena_key!(
    /// Handle to an object owned by an [`crate::Engine`].
    ObjectId
);

arena_key!(
    /// Handle to a scheduled timeline.
    TimelineId
);

/// Opaque texture handle issued by the asset collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct TextureHandle(pub u32);

/// Opaque sound handle issued by the asset collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct SoundHandle(pub u32);

/// Audio channel returned by the mixer collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct ChannelId(pub i32);
