pub mod dashboard;
pub mod issue_metadata;
pub mod project;
pub mod share_permission;
pub mod user;
pub mod version;
pub mod watcher;

pub use dashboard::*;
pub use issue_metadata::*;
pub use project::*;
pub use share_permission::*;
pub use user::*;
pub use version::*;
pub use watcher::*;
