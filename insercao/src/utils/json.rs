// FICHIER : insercao/src/utils/json.rs

use crate::utils::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

// --- RE-EXPORTS (Single Source of Truth pour le JSON) ---
// La feature `preserve_order` de serde_json garantit que l'ordre des
// sections et des champs survit aux allers-retours de sérialisation.
pub use serde_json::{json, Map, Value};

/// Parse une chaîne JSON en un type T.
pub fn parse<T: DeserializeOwned>(s: &str) -> Result<T> {
    Ok(serde_json::from_str(s)?)
}

/// Convertit un type T en chaîne JSON compacte.
pub fn stringify<T: Serialize>(v: &T) -> Result<String> {
    Ok(serde_json::to_string(v)?)
}

/// Convertit un type T en chaîne JSON formatée (pretty).
pub fn stringify_pretty<T: Serialize>(v: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(v)?)
}

// --- TESTS UNITAIRES ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::prelude::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Resposta {
        sigla: String,
        dp: u32,
    }

    #[test]
    fn test_parse_success() {
        let raw = r#"{"sigla": "PPGPC", "dp": 18}"#;
        let r: Resposta = parse(raw).unwrap();
        assert_eq!(r.sigla, "PPGPC");
    }

    #[test]
    fn test_parse_error_is_serialization() {
        let bad_raw = r#"{"sigla": 42}"#;
        let res: Result<Resposta> = parse(bad_raw);

        assert!(matches!(res, Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_preserve_order_roundtrip() {
        // L'ordre d'insertion doit survivre au stringify/parse
        let raw = r#"{"z": 1, "a": 2, "m": 3}"#;
        let v: Value = parse(raw).unwrap();
        assert_eq!(stringify(&v).unwrap(), r#"{"z":1,"a":2,"m":3}"#);
    }
}
