pub mod container;
pub mod error;
pub mod events;
pub mod math;
pub mod path;
pub mod store;

pub use container::{ListEditor, VertexCallbacks, VertexContainer};
pub use error::{Error, PathError, Result, VertexError};
pub use events::{EventRecorder, VertexEvent};
pub use math::{Point2, Point3, Vertex};
pub use path::EditablePath;
pub use store::{PathId, PathStore};
