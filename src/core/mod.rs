//! Key derivation and collision resolution.
//!
//! ## Pipeline
//!
//! 1. **Derive**: context labels (file directories, component and element
//!    names) become a dotted candidate key ([`KeyDeriver`]).
//! 2. **Resolve**: the candidate is checked against the table and turned into
//!    the key that is actually used ([`Resolver`]).
//! 3. **Store**: the `(key, text)` entry lives in the [`TableStore`], which can
//!    be exported as a nested tree for emitters.
//!
//! [`KeyGenerator`] wires the three together for one extraction run.

pub mod derive;
pub mod export;
pub mod generator;
pub mod labels;
pub mod paths;
pub mod resolve;
pub mod table;


pub use derive::{
    DEFAULT_MAX_SEGMENT_LENGTH, DEFAULT_ROOT_MARKER, KeyDeriver, LeafPolicy, PLACEHOLDER_SEGMENT,
    derive,
};
pub use export::{FlattenError, export_grouped, flatten, pseudo_localize, try_flatten};
pub use generator::KeyGenerator;
pub use labels::LabelTable;
pub use paths::{DEFAULT_SHARED_MARKER, file_base_path};
pub use resolve::{DEFAULT_MAX_ITERATIONS, KeyError, Resolution, Resolver};
pub use table::{Overlap, Table, TableStore, find_overlaps};
