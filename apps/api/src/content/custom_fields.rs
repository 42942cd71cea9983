use serde::{Deserialize, Serialize};

use crate::content::fields::split_lines;
use crate::content::ids::fresh_field_id;
use crate::models::{CustomEntry, CustomField, CustomFieldContent, CustomFieldKind};

/// One change to a custom field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", content = "value", rename_all = "camelCase")]
pub enum CustomFieldUpdate {
    Label(String),
    /// Switching kind discards the old value.
    Kind(CustomFieldKind),
    /// Raw text; a bullets field takes one item per line.
    Value(String),
}

/// The field appended by "add field".
pub(crate) fn new_custom_field(entry: &CustomEntry) -> CustomField {
    CustomField {
        id: fresh_field_id(Some(entry), &[]),
        label: "New Field".to_string(),
        content: CustomFieldContent::Text(String::new()),
    }
}

/// The three fields a fresh custom entry starts with.
pub(crate) fn starter_fields() -> Vec<CustomField> {
    let mut ids: Vec<String> = Vec::with_capacity(3);
    for _ in 0..3 {
        let id = fresh_field_id(None, &ids);
        ids.push(id);
    }
    let contents = [
        ("Title", CustomFieldContent::Text("Item Title".to_string())),
        ("Date", CustomFieldContent::Date("2023".to_string())),
        ("Description", CustomFieldContent::Bullets(Vec::new())),
    ];
    ids.into_iter()
        .zip(contents)
        .map(|(id, (label, content))| CustomField {
            id,
            label: label.to_string(),
            content,
        })
        .collect()
}

pub(crate) fn apply_field_update(field: &mut CustomField, update: &CustomFieldUpdate) {
    match update {
        CustomFieldUpdate::Label(label) => field.label = label.clone(),
        CustomFieldUpdate::Kind(kind) => {
            if field.kind() != *kind {
                field.content = CustomFieldContent::empty(*kind);
            }
        }
        CustomFieldUpdate::Value(raw) => {
            field.content = match field.kind() {
                CustomFieldKind::Text => CustomFieldContent::Text(raw.clone()),
                CustomFieldKind::Date => CustomFieldContent::Date(raw.clone()),
                CustomFieldKind::Url => CustomFieldContent::Url(raw.clone()),
                CustomFieldKind::Bullets => CustomFieldContent::Bullets(split_lines(raw)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_field() -> CustomField {
        CustomField {
            id: "f".to_string(),
            label: "Role".to_string(),
            content: CustomFieldContent::Text("Chair".to_string()),
        }
    }

    #[test]
    fn test_starter_fields_shape() {
        let fields = starter_fields();
        let kinds: Vec<_> = fields.iter().map(|f| f.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                CustomFieldKind::Text,
                CustomFieldKind::Date,
                CustomFieldKind::Bullets
            ]
        );
        assert_ne!(fields[0].id, fields[1].id);
        assert_ne!(fields[1].id, fields[2].id);
        assert_ne!(fields[0].id, fields[2].id);
    }

    #[test]
    fn test_kind_change_resets_value() {
        let mut field = text_field();
        apply_field_update(&mut field, &CustomFieldUpdate::Kind(CustomFieldKind::Bullets));
        assert_eq!(field.content, CustomFieldContent::Bullets(vec![]));
    }

    #[test]
    fn test_same_kind_keeps_value() {
        let mut field = text_field();
        apply_field_update(&mut field, &CustomFieldUpdate::Kind(CustomFieldKind::Text));
        assert_eq!(field.content, CustomFieldContent::Text("Chair".to_string()));
    }

    #[test]
    fn test_bullets_value_split_on_lines() {
        let mut field = text_field();
        apply_field_update(&mut field, &CustomFieldUpdate::Kind(CustomFieldKind::Bullets));
        apply_field_update(
            &mut field,
            &CustomFieldUpdate::Value("first\nsecond".to_string()),
        );
        assert_eq!(
            field.content,
            CustomFieldContent::Bullets(vec!["first".to_string(), "second".to_string()])
        );
    }

    #[test]
    fn test_new_field_is_blank_text() {
        let entry = CustomEntry {
            id: "e".to_string(),
            fields: vec![text_field()],
        };
        let field = new_custom_field(&entry);
        assert_eq!(field.label, "New Field");
        assert_eq!(field.content, CustomFieldContent::Text(String::new()));
        assert_ne!(field.id, "f");
    }
}
