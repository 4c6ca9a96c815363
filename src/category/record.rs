use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Category;
use crate::error::Error;
use crate::id::CategoryId;

/// Type tag written under `class_name` in the serialized form.
pub const CLASS_NAME: &str = "Category";

/// Serialized shape of a [`Category`]. Pending events are never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(default = "class_name")]
    pub class_name: String,
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

fn class_name() -> String {
    CLASS_NAME.to_string()
}

impl From<Category> for CategoryRecord {
    fn from(category: Category) -> Self {
        category.to_record()
    }
}

impl TryFrom<CategoryRecord> for Category {
    type Error = Error;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        Category::restore(record.id, record.name, record.description, record.is_active)
    }
}

impl Category {
    pub fn to_record(&self) -> CategoryRecord {
        CategoryRecord {
            class_name: class_name(),
            id: self.id,
            name: self.name.to_string(),
            description: self.description.clone(),
            is_active: self.is_active,
        }
    }

    /// Returns the dictionary form: `class_name`, `id`, `name`,
    /// `description` and `is_active`.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("class_name".to_string(), Value::from(CLASS_NAME));
        map.insert("id".to_string(), Value::from(self.id.to_string()));
        map.insert("name".to_string(), Value::from(self.name.as_ref()));
        map.insert(
            "description".to_string(),
            Value::from(self.description.as_str()),
        );
        map.insert("is_active".to_string(), Value::from(self.is_active));
        map
    }

    /// Rebuilds a category from its dictionary form through the
    /// reconstruction path, so no event is recorded. `class_name` is not
    /// checked.
    pub fn from_dict(data: &Map<String, Value>) -> Result<Self, Error> {
        let id = required_str(data, "id")?.parse::<CategoryId>()?;
        let name = required_str(data, "name")?;
        let description = required_str(data, "description")?;
        let is_active = required(data, "is_active")?
            .as_bool()
            .ok_or(Error::InvalidFieldType {
                field: "is_active",
                expected: "boolean",
            })?;

        Category::restore(id, name, description, is_active)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.to_dict())?)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let data: Map<String, Value> = serde_json::from_str(json)?;
        Self::from_dict(&data)
    }
}

fn required<'a>(data: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, Error> {
    data.get(field).ok_or(Error::MissingField { field })
}

fn required_str<'a>(data: &'a Map<String, Value>, field: &'static str) -> Result<&'a str, Error> {
    required(data, field)?
        .as_str()
        .ok_or(Error::InvalidFieldType {
            field,
            expected: "string",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dict(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    fn valid() -> Map<String, Value> {
        dict(json!({
            "class_name": "Category",
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "name": "Eletrônicos",
            "description": "Produtos eletrônicos em geral",
            "is_active": true,
        }))
    }

    #[test]
    fn reports_each_missing_field() {
        for field in ["id", "name", "description", "is_active"] {
            let mut data = valid();
            data.remove(field);

            match Category::from_dict(&data) {
                Err(Error::MissingField { field: missing }) => assert_eq!(missing, field),
                other => panic!("expected missing '{field}', got {other:?}"),
            }
        }
    }

    #[test]
    fn class_name_is_optional_on_input() {
        let mut data = valid();
        data.remove("class_name");

        assert!(Category::from_dict(&data).is_ok());
    }

    #[test]
    fn rejects_a_non_string_name() {
        let mut data = valid();
        data.insert("name".to_string(), json!(42));

        assert!(matches!(
            Category::from_dict(&data),
            Err(Error::InvalidFieldType {
                field: "name",
                expected: "string"
            })
        ));
    }

    #[test]
    fn rejects_a_non_boolean_flag() {
        let mut data = valid();
        data.insert("is_active".to_string(), json!("yes"));

        assert!(matches!(
            Category::from_dict(&data),
            Err(Error::InvalidFieldType {
                field: "is_active",
                ..
            })
        ));
    }

    #[test]
    fn rejects_a_malformed_id() {
        let mut data = valid();
        data.insert("id".to_string(), json!("42"));

        assert!(matches!(
            Category::from_dict(&data),
            Err(Error::InvalidId { .. })
        ));
    }

    #[test]
    fn validates_the_name_on_the_way_in() {
        let mut data = valid();
        data.insert("name".to_string(), json!("   "));

        assert!(matches!(
            Category::from_dict(&data),
            Err(Error::NameRequired)
        ));
    }

    #[test]
    fn from_json_rejects_non_objects() {
        assert!(matches!(
            Category::from_json("[1, 2, 3]"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn record_defaults_the_class_name() {
        let record: CategoryRecord = serde_json::from_value(json!({
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "name": "Livros",
            "description": "",
            "is_active": false,
        }))
        .unwrap();

        assert_eq!(record.class_name, CLASS_NAME);
    }
}
