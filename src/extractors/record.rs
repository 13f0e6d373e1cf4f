// src/extractors/record.rs
use serde::{Deserialize, Serialize};

/// One signature slot. An unmatched slot keeps every field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub author: String,
    pub role: String,
    pub message: String,
}

impl Signature {
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn is_placeholder(&self) -> bool {
        self.author.is_empty() && self.role.is_empty() && self.message.is_empty()
    }
}

/// Structured form of one resolution document.
///
/// Field order is the on-disk key order. `signatures` is always the
/// RECTOR slot followed by the SECRETARIA slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "n_resolution")]
    pub resolution_id: String,
    pub title: String,
    pub recitals: Vec<String>,
    pub resolutions: Vec<String>,
    pub final_provisions: Vec<String>,
    pub final_message: String,
    pub signatures: [Signature; 2],
}

impl Record {
    /// UTF-8 JSON with two-space indentation and non-ASCII left unescaped.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn rector(&self) -> &Signature {
        &self.signatures[0]
    }

    pub fn secretary(&self) -> &Signature {
        &self.signatures[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_fixed_key_order() {
        let record = Record {
            resolution_id: "R-OCS-SE-009 Nro.074-2025".into(),
            title: "Aprobación del calendario".into(),
            recitals: vec!["Que, uno;".into()],
            resolutions: vec![],
            final_provisions: vec!["PRIMERA. Vigencia.".into()],
            final_message: "Dado en Quito.".into(),
            signatures: [
                Signature {
                    author: "Mgtr. Juan Pérez".into(),
                    role: "RECTOR".into(),
                    message: String::new(),
                },
                Signature::placeholder(),
            ],
        };

        let expected = r#"{
  "n_resolution": "R-OCS-SE-009 Nro.074-2025",
  "title": "Aprobación del calendario",
  "recitals": [
    "Que, uno;"
  ],
  "resolutions": [],
  "final_provisions": [
    "PRIMERA. Vigencia."
  ],
  "final_message": "Dado en Quito.",
  "signatures": [
    {
      "author": "Mgtr. Juan Pérez",
      "role": "RECTOR",
      "message": ""
    },
    {
      "author": "",
      "role": "",
      "message": ""
    }
  ]
}"#;
        assert_eq!(record.to_json_pretty().unwrap(), expected);
    }

    #[test]
    fn round_trips_through_json() {
        let record = Record::default();
        let json = record.to_json_pretty().unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
        assert!(parsed.rector().is_placeholder());
        assert!(parsed.secretary().is_placeholder());
    }
}
