// FICHIER : insercao/src/lib.rs

//! Collecte et persistance des réponses du « Formulário de Inserção
//! Social — Quadriênio 2021-2024 » : le questionnaire fixe (`form`),
//! la façade de stockage à deux backends (`store`) et la couche de
//! fondation (`utils`).

pub mod form;
pub mod store;
pub mod utils;
