use uuid::Uuid;

use crate::domain::entities::FileId;
use crate::domain::ports::FileIdGenerator;

/// Random v4 UUIDs as file ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidFileIds;

impl FileIdGenerator for UuidFileIds {
    fn generate(&self) -> FileId {
        FileId::new(Uuid::new_v4().to_string())
    }
}
