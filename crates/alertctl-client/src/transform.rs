//! Transformation of alert definitions into a domain-portable form.
//!
//! A portable definition carries no server-assigned or domain-specific
//! fields and is always eligible for creation in another domain.

use crate::types::{AlertCollection, AlertDefinition, LIBRARY_SUBCATEGORY_PREFIX};

/// Strip server-owned and domain-specific state from a selected collection.
///
/// Per definition: the server-assigned fields (`id`, creation date, category
/// ids, activity and favorite state, chain flag, the whole correlation
/// context) are cleared, `actionPolicyId` is reset to an empty sequence, and
/// a `lib.my.<source_domain>.` subcategory prefix is removed when present.
/// Already-portable input passes through unchanged.
#[must_use]
pub fn portable(collection: AlertCollection, source_domain: &str) -> AlertCollection {
    collection
        .into_iter()
        .map(|def| portable_definition(def, source_domain))
        .collect()
}

fn portable_definition(mut def: AlertDefinition, source_domain: &str) -> AlertDefinition {
    def.id = None;
    def.creation_date = None;
    def.category_id = None;
    def.subcategory_id = None;
    def.is_active = None;
    def.is_favorite = None;
    def.is_alert_chain = None;
    def.alert_correlation_context = None;
    def.action_policy_id.clear();

    let owned_prefix = format!("{LIBRARY_SUBCATEGORY_PREFIX}{source_domain}.");
    if let Some(rest) = def.subcategory.strip_prefix(&owned_prefix) {
        def.subcategory = rest.to_string();
    }

    def
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AlertCorrelationContext;
    use serde_json::{Map, Value};

    fn fetched_definition() -> AlertDefinition {
        let mut extra = Map::new();
        extra.insert("message".into(), Value::String("threshold crossed".into()));

        AlertDefinition {
            id: Some(173054),
            name: "High error rate".into(),
            subcategory: "lib.my.acme.webshop".into(),
            is_active: Some(true),
            is_favorite: Some(true),
            is_alert_chain: Some(false),
            creation_date: Some(Value::from(1_690_204_800_000_u64)),
            category_id: Some(12),
            subcategory_id: Some(344),
            alert_correlation_context: Some(AlertCorrelationContext {
                id: Some(9917),
                name_id: Some("my.alert.acme.higherrorrate".into()),
                owner_email: Some("ops@acme.example".into()),
                extra: Map::new(),
            }),
            action_policy_id: vec![Value::from(71), Value::from(72)],
            extra,
        }
    }

    #[test]
    fn excludes_every_server_owned_field() {
        let out = portable(vec![fetched_definition()], "acme");
        let json = serde_json::to_value(&out[0]).expect("serializable");
        let obj = json.as_object().expect("object");

        for field in [
            "id",
            "creationDate",
            "categoryId",
            "subcategoryId",
            "isActive",
            "isFavorite",
            "isAlertChain",
            "alertCorrelationContext",
        ] {
            assert!(!obj.contains_key(field), "{field} should be stripped");
        }
        assert_eq!(json["actionPolicyId"], serde_json::json!([]));
    }

    #[test]
    fn strips_only_the_source_domain_prefix() {
        let out = portable(vec![fetched_definition()], "acme");
        assert_eq!(out[0].subcategory, "webshop");

        let out = portable(vec![fetched_definition()], "other");
        assert_eq!(out[0].subcategory, "lib.my.acme.webshop");
    }

    #[test]
    fn leaves_plain_subcategories_untouched() {
        let mut def = fetched_definition();
        def.subcategory = "ops.latency".into();
        let out = portable(vec![def], "acme");
        assert_eq!(out[0].subcategory, "ops.latency");
    }

    #[test]
    fn preserves_opaque_payload_fields() {
        let out = portable(vec![fetched_definition()], "acme");
        assert_eq!(
            out[0].extra.get("message").and_then(Value::as_str),
            Some("threshold crossed")
        );
        assert_eq!(out[0].name, "High error rate");
    }

    #[test]
    fn applying_twice_equals_applying_once() {
        let once = portable(vec![fetched_definition()], "acme");
        let twice = portable(once.clone(), "acme");
        assert_eq!(once, twice);
    }

    #[test]
    fn output_is_always_create_eligible() {
        let out = portable(vec![fetched_definition()], "acme");
        assert!(out.iter().all(|def| def.id.is_none()));
    }
}
