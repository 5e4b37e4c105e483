//! Document scenarios: minimal envelope, nested modules, unknown keys

use master_product::import::ImportError;
use master_product::models::Measurement;
use master_product::{MasterProductExporter, MasterProductImporter, decode, encode};
use serde_json::{Value, json};

fn envelope() -> Value {
    json!({
        "id": "5d1b4c6e-6a0f-4e58-9d55-0b0f7f2a9d10",
        "product_id": "0e3f8a52-1c55-4d87-9a7b-2f6a1b2c3d4e",
        "organization_id": "9b2d8f1e-2f3a-4c5b-8d6e-7f8a9b0c1d2e",
        "created_at": "2024-01-01T00:00:00Z",
        "ext_id": "E1",
        "gtin": "00012345678905",
        "name": "Widget"
    })
}

fn with_extensions(extensions: Value) -> Value {
    let mut doc = envelope();
    doc["details"] = json!({
        "Header": {"x_dataFormatVersion": "1.0"},
        "tradeItem": {
            "gtin": "00012345678905",
            "tradeItemInformation": {"extensions": extensions}
        }
    });
    doc
}

mod minimal_document_tests {
    use super::*;

    #[test]
    fn test_minimal_document() {
        let input = envelope().to_string();
        let product = MasterProductImporter::new().import(&input).unwrap();
        assert!(product.details.is_none());
        assert!(product.is_terse());
        assert!(product.decommissioned_at.is_none());
        assert!(product.updated_at.is_none());

        let output = MasterProductExporter::new().export(&product).unwrap();
        let reread: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(reread, envelope());
    }

    #[test]
    fn test_missing_required_envelope_field() {
        let mut doc = envelope();
        doc.as_object_mut().unwrap().remove("gtin");
        let err = MasterProductImporter::new().import(&doc.to_string()).unwrap_err();
        match err {
            ImportError::MalformedDocument { message, .. } => assert!(message.contains("gtin")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let mut doc = envelope();
        doc["name"] = json!(42);
        let err = MasterProductImporter::new().import(&doc.to_string()).unwrap_err();
        assert!(matches!(err, ImportError::MalformedDocument { .. }));
    }

    #[test]
    fn test_import_terse_discards_details() {
        let doc = with_extensions(json!({}));
        let product = MasterProductImporter::new().import_terse(&doc.to_string()).unwrap();
        assert!(product.is_terse());
        assert_eq!(product.gtin, "00012345678905");
    }
}

mod nested_module_tests {
    use super::*;

    fn nutrition_doc() -> Value {
        with_extensions(json!({
            "nutritionalInformationModule": {
                "nutrientHeader": [{
                    "preparationStateCode": "UNPREPARED",
                    "nutrientDetail": [{
                        "nutrientTypeCode": "ENER-",
                        "dailyValueIntakePercent": 12.5,
                        "quantityContained": [{"$": 120, "@measurementUnitCode": "KJO"}]
                    }]
                }]
            }
        }))
    }

    #[test]
    fn test_nutrition_detail_round_trip() {
        let input = nutrition_doc().to_string();
        let product = MasterProductImporter::new().import(&input).unwrap();

        let nutrition = product
            .trade_item()
            .unwrap()
            .extensions()
            .nutritional_information_module
            .as_ref()
            .unwrap();
        let detail = nutrition
            .header_for("UNPREPARED")
            .unwrap()
            .nutrient("ENER-")
            .unwrap();
        let energy = &detail.quantities_contained.as_ref().unwrap()[0];
        assert_eq!(energy.as_i64(), Some(120));
        assert_eq!(energy.unit(), "KJO");
        assert_eq!(detail.daily_value_intake_percent, Some(12.5));
        assert_eq!(detail.measurement_precision_code, None);

        let output = MasterProductExporter::new().export(&product).unwrap();
        assert!(!output.contains("measurementPrecisionCode"));
        let reread: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(reread, nutrition_doc());
    }

    #[test]
    fn test_nutrient_header_requires_preparation_state() {
        let doc = with_extensions(json!({
            "nutritionalInformationModule": {"nutrientHeader": [{"nutrientDetail": []}]}
        }));
        assert!(MasterProductImporter::new().import(&doc.to_string()).is_err());
    }

    #[test]
    fn test_ingredient_module_requires_food_flag() {
        let doc = with_extensions(json!({
            "foodAndBeverageIngredientModule": {"juiceContentPercent": 12.5}
        }));
        assert!(MasterProductImporter::new().import(&doc.to_string()).is_err());
    }

    #[test]
    fn test_quantity_in_isolation() {
        let m: Measurement = decode(r#"{"$":120,"@measurementUnitCode":"KJO"}"#).unwrap();
        assert_eq!(encode(&m).unwrap(), r#"{"$":120,"@measurementUnitCode":"KJO"}"#);
    }
}

mod unknown_key_tests {
    use super::*;

    #[test]
    fn test_unknown_keys_at_every_level() {
        let mut doc = with_extensions(json!({
            "futureModule": {"anything": true},
            "tradeItemLifespanModule": {
                "tradeItemLifespan": {"openedTradeItemLifespan": 3, "x_new": "?"},
                "extra": 1
            },
            "nutritionalInformationModule": {
                "nutrientHeader": [{
                    "preparationStateCode": "PREPARED",
                    "nutrientDetail": [{
                        "nutrientTypeCode": "FAT",
                        "quantityContained": [{"$": 3, "@measurementUnitCode": "GRM", "@note": "x"}],
                        "unmodelled": [1, 2, 3]
                    }]
                }]
            }
        }));
        doc["extraRootKey"] = json!("ignored");
        doc["details"]["tradeItem"]["unknownTradeItemKey"] = json!({"a": 1});
        doc["details"]["Header"]["x_generator"] = json!("pim");

        let product = MasterProductImporter::new().import(&doc.to_string()).unwrap();
        assert_eq!(product.name, "Widget");

        let ext = product.trade_item().unwrap().extensions();
        let lifespan = ext.trade_item_lifespan_module.as_ref().unwrap();
        assert_eq!(
            lifespan.trade_item_lifespan.as_ref().unwrap().opened_trade_item_lifespan,
            Some(3)
        );
        let fat = ext
            .nutritional_information_module
            .as_ref()
            .unwrap()
            .header_for("PREPARED")
            .unwrap()
            .nutrient("FAT")
            .unwrap();
        assert_eq!(
            fat.quantities_contained.as_ref().unwrap()[0],
            Measurement::new(3, "GRM")
        );

        // unknown keys are not carried into the output
        let output = MasterProductExporter::new().export(&product).unwrap();
        for dropped in ["futureModule", "x_new", "unmodelled", "@note", "extraRootKey", "x_generator"] {
            assert!(!output.contains(dropped), "{dropped} was written back");
        }
    }
}
