pub mod changelog;
pub mod resources;
pub mod workspace;

pub use changelog::{ChangelogError, load_changelog};
pub use resources::{ResourceRoot, ScanError};
pub use workspace::{Workspace, WorkspaceError};
