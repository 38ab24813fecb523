use crate::domain::entities::FileId;

/// Source of fresh, globally unique file ids.
pub trait FileIdGenerator: Send + Sync {
    /// Returns an id never handed out before.
    fn generate(&self) -> FileId;
}
