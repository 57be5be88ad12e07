// FICHIER : insercao/src/form/record.rs

//! Le Record (une soumission complète du formulaire) et la Collection
//! (l'historique append-only de toutes les soumissions).
//! Pas de logique de présentation ici — uniquement la forme des données.

use crate::utils::prelude::*;
use chrono::{DateTime, Timelike};
use serde_json::Map;

/// Une soumission : sections ordonnées -> champs -> valeurs.
/// Construite une seule fois à l'envoi du formulaire, immuable ensuite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    pub id: Uuid,
    /// Horodatage mural à la seconde près (la sous-seconde ne survit pas
    /// aux allers-retours de sérialisation, on la supprime d'emblée).
    pub submitted_at: DateTime<Utc>,
    /// La forme est toujours totale : chaque section du schéma est présente,
    /// les champs des sections déclinées portent leurs valeurs de remplissage.
    pub sections: Map<String, Value>,
}

impl Record {
    /// Construit un Record horodaté à partir des sections déjà normalisées
    /// (voir `schema::complete`).
    pub fn new(sections: Map<String, Value>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            submitted_at: now.with_nanosecond(0).unwrap_or(now),
            sections,
        }
    }

    /// Accès à une section par son nom.
    pub fn section(&self, name: &str) -> Option<&Map<String, Value>> {
        self.sections.get(name).and_then(Value::as_object)
    }

    /// Accès direct à la valeur d'un champ.
    pub fn value(&self, section: &str, field: &str) -> Option<&Value> {
        self.section(section).and_then(|s| s.get(field))
    }

    /// Sigla du programme (colonne d'affichage principale des listes).
    pub fn sigla(&self) -> &str {
        self.value("Programa", "Sigla")
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

/// La séquence append-only de tous les Records, dans l'ordre de soumission.
/// C'est l'unité de lecture ET d'écriture : jamais de mise à jour partielle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ajoute une soumission en fin de séquence (seule mutation autorisée).
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }
}

// --- TESTS UNITAIRES ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::data::json;

    fn sample_sections() -> Map<String, Value> {
        let mut m = Map::new();
        m.insert(
            "Programa".to_string(),
            json!({ "Sigla": "PPGPC", "Modalidade": "Apenas Mestrado" }),
        );
        m
    }

    #[test]
    fn test_record_timestamp_second_resolution() {
        let r = Record::new(sample_sections());
        assert_eq!(r.submitted_at.nanosecond(), 0);
    }

    #[test]
    fn test_record_accessors() {
        let r = Record::new(sample_sections());
        assert_eq!(r.sigla(), "PPGPC");
        assert_eq!(
            r.value("Programa", "Modalidade").and_then(Value::as_str),
            Some("Apenas Mestrado")
        );
        assert!(r.section("Inexistante").is_none());
    }

    #[test]
    fn test_record_roundtrip_field_for_field() {
        let r = Record::new(sample_sections());
        let raw = serde_json::to_string(&r).unwrap();
        let back: Record = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_collection_is_a_json_array() {
        let mut c = Collection::new();
        c.push(Record::new(sample_sections()));

        let raw = serde_json::to_string(&c).unwrap();
        assert!(raw.starts_with('['), "la collection se sérialise en tableau");

        let back: Collection = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_collection_preserves_submission_order() {
        let mut c = Collection::new();
        let r1 = Record::new(sample_sections());
        let r2 = Record::new(sample_sections());
        c.push(r1.clone());
        c.push(r2.clone());

        assert_eq!(c.len(), 2);
        assert_eq!(c.records()[0].id, r1.id);
        assert_eq!(c.last().map(|r| r.id), Some(r2.id));
    }
}
