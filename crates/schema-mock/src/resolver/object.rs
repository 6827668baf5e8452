//! Object generation and field-specific overrides.

use rand::Rng;
use serde_json::{Map, Value};

use super::Resolver;
use crate::error::GenerationError;
use crate::fields::{
    DEFAULT_MAX_TAGS, DEFAULT_MIN_TAGS, generate_description, generate_tags, random_title,
};
use crate::primitives::{DateMark, NUMBER_RANGE, generate_boolean, generate_date, generate_number};
use crate::schema::{NumberSchema, ObjectSchema, is_truthy};

impl<R: Rng + ?Sized> Resolver<'_, R> {
    /// Generates every declared property of an object node.
    ///
    /// Each property is first resolved on its own, without the user object.
    /// The result is then replaced for these property names:
    ///
    /// | property | replacement |
    /// |---|---|
    /// | `startDate` | [`generate_date`] with [`DateMark::Start`] |
    /// | `endDate` | [`generate_date`] with [`DateMark::End`] |
    /// | `tags` | [`generate_tags`] |
    /// | `title` | [`random_title`] |
    /// | `description` | [`generate_description`] |
    /// | `priorProbability` | [`generate_number`] over `[0, 100]`, only when the generated value is `null` |
    /// | `readOnly` | [`generate_boolean`], only when the generated value is truthy |
    ///
    /// Each replacement receives the user object's entry of the same name.
    /// Entries for names the schema does not declare are ignored.
    ///
    /// # Errors
    ///
    /// Propagates errors from resolving property schemas.
    pub fn generate_object(
        &mut self,
        schema: &ObjectSchema,
        user_object: Option<&Map<String, Value>>,
    ) -> Result<Map<String, Value>, GenerationError> {
        let mut object = Map::new();
        for (name, property) in &schema.properties {
            let generated = self.resolve(property, None)?;
            let supplied = user_object.and_then(|fields| fields.get(name));
            let value = self.override_field(name, generated, supplied);
            object.insert(name.clone(), value);
        }
        Ok(object)
    }

    fn override_field(&mut self, name: &str, generated: Value, supplied: Option<&Value>) -> Value {
        match name {
            "startDate" => generate_date(self.clock, DateMark::Start, supplied),
            "endDate" => generate_date(self.clock, DateMark::End, supplied),
            "tags" => generate_tags(&mut *self.rng, supplied, DEFAULT_MIN_TAGS, DEFAULT_MAX_TAGS),
            "title" => Value::String(random_title(&mut *self.rng, supplied)),
            "description" => Value::String(generate_description(&mut *self.rng, supplied)),
            "priorProbability" if generated.is_null() => generate_number(
                &mut *self.rng,
                &NumberSchema::default(),
                NUMBER_RANGE.0,
                NUMBER_RANGE.1,
                supplied,
            ),
            "readOnly" if is_truthy(&generated) => {
                Value::Bool(generate_boolean(&mut *self.rng, supplied))
            }
            _ => generated,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use serde_json::{Map, Value, json};

    use crate::error::GenerationError;
    use crate::primitives::END_DATE_OFFSET_SECS;
    use crate::resolver::{GenerationOptions, Resolver};
    use crate::schema::{Definitions, ObjectSchema, SchemaNode};
    use crate::test_support::{FIXTURE_TIMESTAMP, FixtureClock, seeded_rng};
    use crate::vocabulary::TAGS;

    #[fixture]
    fn task_schema() -> Value {
        json!({
            "type": "object",
            "required": ["title", "startDate"],
            "properties": {
                "title": {"type": "string"},
                "description": {"type": "string"},
                "startDate": {"type": "integer"},
                "endDate": {"type": "integer"},
                "tags": {"type": "array", "items": {"type": "string"}},
                "priorProbability": {"type": "null"},
                "readOnly": {"enum": [true]},
                "owner": {"type": "string", "minLength": 3, "maxLength": 3}
            }
        })
    }

    fn full_user_object() -> Map<String, Value> {
        let value = json!({
            "title": "  Quarterly review ",
            "description": "Collect metrics. ",
            "startDate": 1_734_379_887,
            "endDate": 1_735_000_000,
            "tags": ["finance", "review"],
            "priorProbability": 0,
            "readOnly": false
        });
        value.as_object().cloned().expect("user object literal is an object")
    }

    fn object_schema(schema: &Value) -> ObjectSchema {
        match SchemaNode::from_value(schema) {
            SchemaNode::Object(object) => object,
            other => panic!("expected an object node, got {other:?}"),
        }
    }

    fn generate(
        schema: &Value,
        user_object: Option<&Map<String, Value>>,
        seed: u64,
    ) -> Result<Map<String, Value>, GenerationError> {
        let object = object_schema(schema);
        let definitions = Definitions::default();
        let clock = FixtureClock::default();
        let mut rng = seeded_rng(seed);
        Resolver::new(&mut rng, &clock, &definitions, GenerationOptions::default())
            .generate_object(&object, user_object)
    }

    #[rstest]
    fn properties_keep_their_declared_order(task_schema: Value) {
        let object = generate(&task_schema, None, 1).expect("object generates");
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "title",
                "description",
                "startDate",
                "endDate",
                "tags",
                "priorProbability",
                "readOnly",
                "owner"
            ]
        );
    }

    #[rstest]
    fn generated_fields_use_dedicated_generators(task_schema: Value) {
        let object = generate(&task_schema, None, 2).expect("object generates");

        assert_eq!(object.get("startDate"), Some(&json!(FIXTURE_TIMESTAMP)));
        assert_eq!(
            object.get("endDate"),
            Some(&json!(FIXTURE_TIMESTAMP + END_DATE_OFFSET_SECS))
        );

        let tags = object
            .get("tags")
            .and_then(Value::as_array)
            .expect("tags array");
        assert!(
            tags.iter()
                .filter_map(Value::as_str)
                .all(|tag| TAGS.contains(&tag))
        );

        let probability = object
            .get("priorProbability")
            .and_then(Value::as_i64)
            .expect("probability replaces null");
        assert!((0..=100).contains(&probability));

        assert!(object.get("readOnly").is_some_and(Value::is_boolean));
        assert_eq!(
            object.get("owner").and_then(Value::as_str).map(str::len),
            Some(3)
        );
    }

    #[rstest]
    fn full_user_objects_are_applied_identically(task_schema: Value) {
        let user_object = full_user_object();
        let first = generate(&task_schema, Some(&user_object), 3).expect("object generates");
        let second = generate(&task_schema, Some(&user_object), 4).expect("object generates");

        let expected = json!({
            "title": "Quarterly review",
            "description": "Collect metrics.",
            "startDate": 1_734_379_887,
            "endDate": 1_735_000_000,
            "tags": ["finance", "review"],
            "priorProbability": 0,
            "readOnly": false
        });
        for (key, value) in expected.as_object().expect("expected literal is an object") {
            assert_eq!(first.get(key), Some(value), "first run, key {key}");
            assert_eq!(second.get(key), Some(value), "second run, key {key}");
        }
    }

    #[test]
    fn undeclared_user_fields_are_not_added() {
        let schema = json!({"type": "object", "properties": {"title": {"type": "string"}}});
        let user_object = full_user_object();
        let object = generate(&schema, Some(&user_object), 5).expect("object generates");
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("title"), Some(&json!("Quarterly review")));
    }

    #[rstest]
    #[case(json!({"type": "integer", "minimum": 42, "maximum": 42}), json!(42))]
    #[case(json!({"enum": ["kept"]}), json!("kept"))]
    fn non_null_probabilities_are_kept(#[case] property: Value, #[case] expected: Value) {
        let schema = json!({"type": "object", "properties": {"priorProbability": property}});
        let user_object = full_user_object();
        let object = generate(&schema, Some(&user_object), 6).expect("object generates");
        assert_eq!(object.get("priorProbability"), Some(&expected));
    }

    #[rstest]
    #[case(json!({"enum": [false]}), json!(false))]
    #[case(json!({"enum": [0]}), json!(0))]
    #[case(json!({"type": "null"}), Value::Null)]
    fn falsy_read_only_values_are_kept(#[case] property: Value, #[case] expected: Value) {
        let schema = json!({"type": "object", "properties": {"readOnly": property}});
        let user_object: Map<String, Value> =
            [("readOnly".to_owned(), json!(true))].into_iter().collect();
        let object = generate(&schema, Some(&user_object), 7).expect("object generates");
        assert_eq!(object.get("readOnly"), Some(&expected));
    }

    #[test]
    fn null_read_only_override_means_false() {
        let schema = json!({"type": "object", "properties": {"readOnly": {"enum": ["yes"]}}});
        let user_object: Map<String, Value> =
            [("readOnly".to_owned(), Value::Null)].into_iter().collect();
        let object = generate(&schema, Some(&user_object), 8).expect("object generates");
        assert_eq!(object.get("readOnly"), Some(&json!(false)));
    }

    #[test]
    fn invalid_supplied_dates_fail_closed() {
        let schema = json!({"type": "object", "properties": {"startDate": {"type": "integer"}}});
        let user_object: Map<String, Value> =
            [("startDate".to_owned(), json!(2_147_483_648_i64))].into_iter().collect();
        let object = generate(&schema, Some(&user_object), 9).expect("object generates");
        assert_eq!(object.get("startDate"), Some(&Value::Null));
    }

    #[test]
    fn nested_objects_do_not_receive_the_user_object() {
        let schema = json!({
            "type": "object",
            "properties": {
                "child": {"type": "object", "properties": {"title": {"enum": ["unused"]}}}
            }
        });
        let user_object: Map<String, Value> =
            [("title".to_owned(), json!("Parent title"))].into_iter().collect();
        let object = generate(&schema, Some(&user_object), 10).expect("object generates");
        let child_title = object
            .get("child")
            .and_then(|child| child.get("title"))
            .and_then(Value::as_str)
            .expect("child title");
        assert_ne!(child_title, "Parent title");
    }
}
