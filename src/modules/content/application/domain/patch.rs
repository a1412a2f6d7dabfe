use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep current value
// - Null: explicitly null => clear (only for optional fields)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

impl<T: Clone> PatchField<T> {
    /// Replace `target` when a value is present; `Null` and `Unset` keep it.
    pub fn write_to(&self, target: &mut T) {
        if let PatchField::Value(v) = self {
            *target = v.clone();
        }
    }

    /// Three-way write for optional fields: `Null` clears the target.
    pub fn write_to_optional(&self, target: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => *target = Some(v.clone()),
        }
    }

    pub fn value_or_default(&self) -> T
    where
        T: Default,
    {
        match self {
            PatchField::Value(v) => v.clone(),
            _ => T::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Doc {
        #[serde(default)]
        title: PatchField<String>,
        #[serde(default)]
        note: PatchField<String>,
    }

    #[test]
    fn test_omitted_field_is_unset() {
        let doc: Doc = serde_json::from_value(json!({ "title": "hello" })).unwrap();
        assert_eq!(doc.title, PatchField::Value("hello".to_string()));
        assert!(doc.note.is_unset());
    }

    #[test]
    fn test_null_field_is_null() {
        let doc: Doc = serde_json::from_value(json!({ "note": null })).unwrap();
        assert!(doc.note.is_null());
    }

    #[test]
    fn test_write_to_keeps_value_on_unset_and_null() {
        let mut target = "kept".to_string();
        PatchField::<String>::Unset.write_to(&mut target);
        PatchField::<String>::Null.write_to(&mut target);
        assert_eq!(target, "kept");

        PatchField::Value("replaced".to_string()).write_to(&mut target);
        assert_eq!(target, "replaced");
    }

    #[test]
    fn test_write_to_optional_clears_on_null() {
        let mut target = Some("kept".to_string());
        PatchField::<String>::Unset.write_to_optional(&mut target);
        assert_eq!(target.as_deref(), Some("kept"));

        PatchField::<String>::Null.write_to_optional(&mut target);
        assert!(target.is_none());

        PatchField::Value("set".to_string()).write_to_optional(&mut target);
        assert_eq!(target.as_deref(), Some("set"));
    }
}
