//! Registry Commands

use serde::Serialize;

use super::{endpoint, log, log_error};
use crate::models::{ApiResponse, RegistryItem, RegistryItemsResponse};
use crate::validation::GiftForm;

pub const GIFT_SUCCESS_FALLBACK: &str = "Thank you so much for your generous gift!";
pub const GIFT_ERROR_FALLBACK: &str = "There was an error recording your gift. Please try again.";

#[derive(Debug, Serialize)]
pub struct GiftArgs<'a> {
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub email: &'a str,
    pub quantity: u32,
    #[serde(rename = "itemLabel")]
    pub item_label: &'a str,
    #[serde(rename = "isSpecialFund")]
    pub is_special_fund: bool,
}

impl<'a> GiftArgs<'a> {
    pub fn new(form: &'a GiftForm, item: &'a RegistryItem) -> Self {
        Self {
            firstname: form.first_name.trim(),
            lastname: form.last_name.trim(),
            email: form.email.trim(),
            quantity: form.effective_quantity(item.is_special_fund),
            item_label: &item.label,
            is_special_fund: item.is_special_fund,
        }
    }
}

/// GET /v1/api/registry/items
pub async fn list_registry_items() -> Result<Vec<RegistryItem>, String> {
    let response = reqwest::get(endpoint("/v1/api/registry/items"))
        .await
        .map_err(|e| {
            log_error(&format!("[REGISTRY] Request failed: {}", e));
            e.to_string()
        })?;

    let body: RegistryItemsResponse = response.json().await.map_err(|e| e.to_string())?;
    if !body.success {
        let error = body.error.unwrap_or_else(|| "unknown error".to_string());
        log_error(&format!("[REGISTRY] List failed: {}", error));
        return Err(error);
    }
    log(&format!("[REGISTRY] Loaded {} items", body.items.len()));
    Ok(body.items)
}

/// POST /v1/api/registry/gift
pub async fn record_gift(args: &GiftArgs<'_>) -> Result<ApiResponse, String> {
    log(&format!("[REGISTRY] Recording gift of {} x{}", args.item_label, args.quantity));
    let response = reqwest::Client::new()
        .post(endpoint("/v1/api/registry/gift"))
        .json(args)
        .send()
        .await
        .map_err(|e| {
            log_error(&format!("[REGISTRY] Request failed: {}", e));
            e.to_string()
        })?;

    let status = response.status();
    let body: ApiResponse = response.json().await.map_err(|e| {
        log_error(&format!("[REGISTRY] Bad response ({}): {}", status, e));
        e.to_string()
    })?;
    if !body.success {
        log_error(&format!("[REGISTRY] Gift rejected ({}): {:?}", status, body.message));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::initial_registry_items;

    #[test]
    fn test_special_fund_sends_quantity_one() {
        let items = initial_registry_items();
        let fund = items.iter().find(|i| i.is_special_fund).unwrap();
        let form = GiftForm {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            quantity: 5,
            ..Default::default()
        };
        let json = serde_json::to_value(GiftArgs::new(&form, fund)).unwrap();
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["isSpecialFund"], true);
        assert_eq!(json["itemLabel"], "Family Recipes");
    }

    #[test]
    fn test_wire_format() {
        let items = initial_registry_items();
        let towels = items.iter().find(|i| i.id == "towel-set").unwrap();
        let form = GiftForm {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            quantity: 1,
        };
        let json = serde_json::to_value(GiftArgs::new(&form, towels)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstname": "John",
                "lastname": "Doe",
                "email": "john@example.com",
                "quantity": 1,
                "itemLabel": "Luxury Bath Towel Set",
                "isSpecialFund": false
            })
        );
    }
}
