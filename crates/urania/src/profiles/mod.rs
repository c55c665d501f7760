pub mod record;
pub mod store;

pub use record::{generate_profile_id, ProfileRecord};
pub use store::{
    JsonFileProfileStore, MemoryProfileStore, ProfileRepository, ProfileState, StoreError,
};
