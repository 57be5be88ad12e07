// FICHIER : insercao/src/form/mod.rs

pub mod record;
pub mod schema;

pub use record::{Collection, Record};
pub use schema::{FieldDef, FieldKind, SectionDef};
