use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use std::path::Path;

impl Repository {
    /// Print the id `object_path` would be stored under, storing it if `write` is set
    pub fn hash_object(&mut self, object_path: &str, write: bool) -> anyhow::Result<ObjectId> {
        let object_path = Path::new(object_path);
        self.workspace().check_file(object_path)?;

        let object = Blob::new(self.workspace().read_file(object_path)?);
        let object_id = object.object_id()?;

        writeln!(self.writer(), "{}", object_id)?;

        if write {
            self.ensure_initialized()?;
            self.database().store(&object)?;
        }

        Ok(object_id)
    }
}
