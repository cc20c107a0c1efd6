//! Side-by-side comparison flow.
//!
//! Wraps the core comparison selection with the page workflow: pick robots,
//! enable the compare action at two picks, fetch details, render the spec
//! table, and drop back to selection on back/clear. The selection itself is
//! persisted through the session store so it survives navigation.

use rust_decimal::Decimal;
use zenith_core::compare::{AddOutcome, CompareStage, ComparisonSet};
use zenith_core::eligibility::requirement_text;
use zenith_core::{BuyerRequirement, CategoryId, ProductId, format_usd};

use crate::api::ApiClient;
use crate::api::types::Product;
use crate::error::{ApiError, Result};
use crate::session::SessionStore;

/// Category display names for the comparison table.
fn category_name(id: CategoryId) -> &'static str {
    match id.as_i64() {
        1 => "Household",
        2 => "Industrial",
        3 => "Medical",
        4 => "Military",
        5 => "Research",
        6 => "Hazard",
        _ => "-",
    }
}

/// Header card for one compared product.
#[derive(Debug, Clone)]
pub struct CompareProductCard {
    pub product_id: ProductId,
    pub name: String,
    pub price: String,
    pub image_url: Option<String>,
}

/// One row of the comparison table.
#[derive(Debug, Clone)]
pub struct CompareRow {
    pub label: &'static str,
    pub values: Vec<String>,
}

/// The rendered comparison.
#[derive(Debug, Clone)]
pub struct ComparisonView {
    pub cards: Vec<CompareProductCard>,
    pub rows: Vec<CompareRow>,
}

/// The comparison page state, owned by the caller.
#[derive(Debug)]
pub struct CompareFlow {
    selection: ComparisonSet,
    stage: CompareStage,
}

impl CompareFlow {
    /// Start from the persisted selection.
    #[must_use]
    pub fn from_store(store: &SessionStore) -> Self {
        Self {
            selection: store.compare_list(),
            stage: CompareStage::Selecting,
        }
    }

    #[must_use]
    pub const fn stage(&self) -> CompareStage {
        self.stage
    }

    #[must_use]
    pub fn selection(&self) -> &ComparisonSet {
        &self.selection
    }

    /// Whether the compare action is enabled.
    #[must_use]
    pub fn can_compare(&self) -> bool {
        self.selection.can_compare()
    }

    /// Pick a robot, persisting on success.
    ///
    /// # Errors
    ///
    /// Returns an error only if the session store cannot be written.
    pub fn pick(&mut self, store: &mut SessionStore, id: ProductId) -> Result<AddOutcome> {
        let outcome = self.selection.add(id);
        if outcome == AddOutcome::Added {
            store
                .set_compare_list(&self.selection)
                .map_err(|e| ApiError::Validation(e.to_string()))?;
        }
        Ok(outcome)
    }

    /// Drop a pick, persisting the change. Unpicking an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error only if the session store cannot be written.
    pub fn unpick(&mut self, store: &mut SessionStore, id: ProductId) -> Result<()> {
        self.selection.remove(id);
        store
            .set_compare_list(&self.selection)
            .map_err(|e| ApiError::Validation(e.to_string()))
    }

    /// Fetch the picked products and build the comparison.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] below two picks (the action is disabled);
    /// otherwise whatever the fetch returns.
    pub async fn compare(&mut self, api: &ApiClient) -> Result<ComparisonView> {
        if !self.can_compare() {
            return Err(ApiError::Validation(
                "Please select at least 2 robots to compare".to_string(),
            ));
        }

        let products = api.compare_products(self.selection.ids()).await?;
        self.stage = self.stage.start_comparing(&self.selection);

        Ok(build_view(&products))
    }

    /// The back action: keep the selection, return to picking.
    pub fn back(&mut self) {
        self.stage = self.stage.back_to_selection();
    }

    /// The clear action: drop all picks and return to picking.
    ///
    /// # Errors
    ///
    /// Returns an error only if the session store cannot be written.
    pub fn clear(&mut self, store: &mut SessionStore) -> Result<()> {
        self.selection.clear();
        self.stage = self.stage.back_to_selection();
        store
            .set_compare_list(&self.selection)
            .map_err(|e| ApiError::Validation(e.to_string()))
    }
}

fn build_view(products: &[Product]) -> ComparisonView {
    let cards = products
        .iter()
        .map(|p| CompareProductCard {
            product_id: p.product_id,
            name: p.name.clone(),
            price: format_usd(p.price),
            image_url: p.image_url.clone(),
        })
        .collect();

    let rows = vec![
        row("Category", products, |p| {
            Some(category_name(p.category_id).to_string())
        }),
        row("Color", products, |p| p.color.clone()),
        row("Buyer Requirement", products, |p| {
            Some(match p.buyer_requirement {
                BuyerRequirement::None => "None".to_string(),
                other => {
                    let text = requirement_text(other);
                    if text.is_empty() {
                        "None".to_string()
                    } else {
                        text.to_string()
                    }
                }
            })
        }),
        row("AI Model", products, |p| p.ai_model.clone()),
        row("Height", products, |p| unit(p.height_cm, "cm")),
        row("Weight", products, |p| unit(p.weight_kg, "kg")),
        row("Payload Capacity", products, |p| unit(p.payload_kg, "kg")),
        row("Battery Life", products, |p| unit(p.battery_hours, "hours")),
        row("Max Speed", products, |p| unit(p.speed_kmh, "km/h")),
        row("Autonomy Level", products, |p| p.autonomy_level.clone()),
        row("Warranty", products, |p| {
            p.warranty_years.map(|years| format!("{years} years"))
        }),
    ];

    ComparisonView { cards, rows }
}

fn row(
    label: &'static str,
    products: &[Product],
    value: impl Fn(&Product) -> Option<String>,
) -> CompareRow {
    CompareRow {
        label,
        values: products
            .iter()
            .map(|p| value(p).filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_string()))
            .collect(),
    }
}

fn unit(value: Option<Decimal>, suffix: &str) -> Option<String> {
    value.map(|v| format!("{v} {suffix}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i64, category: i64, requirement: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "productId": id,
            "name": format!("Robot {id}"),
            "price": 1000,
            "categoryId": category,
            "buyerRequirement": requirement,
            "aiModel": "ZC-9",
            "heightCm": 120,
        }))
        .unwrap()
    }

    #[test]
    fn test_view_rows_with_fallbacks() {
        let products = vec![product(1, 3, "MEDICAL"), product(2, 6, "NONE")];
        let view = build_view(&products);

        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.rows[0].label, "Category");
        assert_eq!(view.rows[0].values, vec!["Medical", "Hazard"]);

        let requirement_row = view
            .rows
            .iter()
            .find(|r| r.label == "Buyer Requirement")
            .unwrap();
        assert_eq!(
            requirement_row.values,
            vec!["Medical Account Required", "None"]
        );

        // Color was never set: every cell falls back to "-"
        let color_row = view.rows.iter().find(|r| r.label == "Color").unwrap();
        assert_eq!(color_row.values, vec!["-", "-"]);

        let height_row = view.rows.iter().find(|r| r.label == "Height").unwrap();
        assert_eq!(height_row.values, vec!["120 cm", "120 cm"]);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(category_name(CategoryId::new(1)), "Household");
        assert_eq!(category_name(CategoryId::new(6)), "Hazard");
        assert_eq!(category_name(CategoryId::new(7)), "-");
    }
}
