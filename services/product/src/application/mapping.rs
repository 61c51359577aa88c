//! 内部记录与线上表示之间的转换
//!
//! 唯一有损的地方：线上缺省的 `description` 在内部变为空字符串，
//! 再转回线上时为 `Some("")`。

use crate::domain::{ProductDraft, ProductRecord};

use super::dto::{Product, ProductInput};

/// ProductRecord → Product
pub fn to_wire(record: ProductRecord) -> Product {
    Product {
        id: record.id,
        name: record.name,
        description: Some(record.description),
        price: record.price,
        category: record.category,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

pub fn to_wire_list(records: Vec<ProductRecord>) -> Vec<Product> {
    records.into_iter().map(to_wire).collect()
}

/// Product → ProductRecord
///
/// [`to_wire`] 的逆映射，缺省的 `description` 收窄为空字符串。
pub fn from_wire(product: Product) -> ProductRecord {
    ProductRecord {
        id: product.id,
        name: product.name,
        description: product.description.unwrap_or_default(),
        price: product.price,
        category: product.category,
        created_at: product.created_at,
        updated_at: product.updated_at,
    }
}

/// ProductInput → ProductDraft
pub fn draft_from_input(input: ProductInput) -> ProductDraft {
    ProductDraft {
        name: input.name,
        description: input.description.unwrap_or_default(),
        price: input.price,
        category: input.category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductId;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn product(description: Option<&str>) -> Product {
        Product {
            id: ProductId(5),
            name: "Widget".to_string(),
            description: description.map(str::to_string),
            price: Decimal::new(999, 2),
            category: "Tools".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let original = product(Some("a small widget"));
        assert_eq!(to_wire(from_wire(original.clone())), original);
    }

    #[test]
    fn test_round_trip_keeps_empty_description() {
        let original = product(Some(""));
        assert_eq!(to_wire(from_wire(original.clone())), original);
    }

    #[test]
    fn test_absent_description_narrows_to_empty() {
        let record = from_wire(product(None));
        assert_eq!(record.description, "");

        let back = to_wire(record);
        assert_eq!(back.description.as_deref(), Some(""));
        assert_eq!(
            Product {
                description: None,
                ..back
            },
            product(None)
        );
    }

    #[test]
    fn test_draft_from_input() {
        let draft = draft_from_input(ProductInput {
            name: "Widget".to_string(),
            description: None,
            price: Decimal::new(999, 2),
            category: "Tools".to_string(),
        });

        assert_eq!(
            draft,
            ProductDraft {
                name: "Widget".to_string(),
                description: String::new(),
                price: Decimal::new(999, 2),
                category: "Tools".to_string(),
            }
        );
    }

    #[test]
    fn test_wire_json_shape() {
        let json = serde_json::to_value(product(None)).unwrap();

        assert_eq!(json["id"], 5);
        assert_eq!(json["price"].as_f64(), Some(9.99));
        assert!(json.get("description").is_none());

        let json = serde_json::to_value(to_wire(from_wire(product(None)))).unwrap();
        assert_eq!(json["description"], "");
    }

    #[test]
    fn test_input_ignores_server_assigned_fields() {
        let input: ProductInput = serde_json::from_str(
            r#"{"id": 99, "name": "Widget", "price": 9.99, "category": "Tools", "created_at": "x"}"#,
        )
        .unwrap();

        assert_eq!(input.price, Decimal::new(999, 2));
        assert_eq!(input.description, None);
    }
}
