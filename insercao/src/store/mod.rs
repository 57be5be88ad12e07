// FICHIER : insercao/src/store/mod.rs

//! Le cœur de persistance : une façade `load`/`save` au-dessus de deux
//! backends (fichier local, API de contenu distante à jetons de version).
//! La collection entière est l'unité de lecture et d'écriture.

pub mod config;
pub mod facade;
pub mod local;
pub mod remote;

pub use config::{Backend, StoreConfig};
pub use facade::CollectionStore;
pub use local::LocalStore;
pub use remote::RemoteStore;
