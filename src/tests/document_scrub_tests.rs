#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, Bson};

    use crate::db::documents::strip_document_id;

    #[test]
    fn strips_the_store_identifier() {
        let document = doc! { "_id": 1, "name": "Acme", "tier": "gold" };

        let scrubbed = strip_document_id(&document);

        assert!(!scrubbed.contains_key("_id"));
        assert_eq!(scrubbed.get_str("name").unwrap(), "Acme");
        assert_eq!(scrubbed.get_str("tier").unwrap(), "gold");
    }

    #[test]
    fn preserves_remaining_fields_and_their_order() {
        let document = doc! { "b": 2, "_id": 99, "a": 1 };

        let scrubbed = strip_document_id(&document);

        let keys: Vec<&str> = scrubbed.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(scrubbed.get("b"), Some(&Bson::Int32(2)));
        assert_eq!(scrubbed.get("a"), Some(&Bson::Int32(1)));
    }

    #[test]
    fn document_without_identifier_passes_through_unchanged() {
        let document = doc! { "name": "Globex", "tier": "silver" };

        assert_eq!(strip_document_id(&document), document);
    }

    #[test]
    fn source_document_is_not_mutated() {
        let document = doc! { "_id": 5, "dashboard_slug": "foo" };

        let _ = strip_document_id(&document);

        assert!(document.contains_key("_id"));
    }

    #[test]
    fn scrubbed_document_serializes_to_plain_json() {
        let document = doc! { "_id": 1, "name": "Acme", "tier": "gold" };

        let value = serde_json::to_value(strip_document_id(&document)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "name": "Acme", "tier": "gold" })
        );
    }
}
