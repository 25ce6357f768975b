//! Menu Context - 载荷校验
//!
//! 对 POST/PUT 请求体的字段级校验。所有规则一次性评估，
//! 违反的每条规则都会追加一条提示信息，不做短路。
//!
//! 创建与更新使用同一套规则，因此更新载荷也必须携带全部必填字段。

use serde_json::Value;

use super::item::Category;

/// name 最短字符数
pub const NAME_MIN_CHARS: usize = 3;

/// description 最短字符数
pub const DESCRIPTION_MIN_CHARS: usize = 10;

/// 校验通过后的完整载荷
///
/// 所有字段均已确定：`available` 缺省时在此处补为 `true`
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub available: bool,
}

/// 校验菜单项载荷
///
/// 返回校验通过的完整载荷，或收集到的全部错误信息
pub fn validate_menu_payload(body: &Value) -> Result<MenuItemPayload, Vec<String>> {
    let mut errors = Vec::new();

    // name: 必填，字符串，至少 3 字符
    let name = body
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| s.chars().count() >= NAME_MIN_CHARS);
    if name.is_none() {
        errors.push("Name is required and must be at least 3 characters.".to_string());
    }

    // description: 必填，字符串，至少 10 字符
    let description = body
        .get("description")
        .and_then(Value::as_str)
        .filter(|s| s.chars().count() >= DESCRIPTION_MIN_CHARS);
    if description.is_none() {
        errors.push("Description is required and must be at least 10 characters.".to_string());
    }

    // price: 必填，数值，严格大于 0
    let price = body
        .get("price")
        .and_then(Value::as_f64)
        .filter(|p| *p > 0.0);
    if price.is_none() {
        errors.push("Price is required and must be a number greater than 0.".to_string());
    }

    // category: 必填，必须是固定枚举之一
    let category = body
        .get("category")
        .and_then(Value::as_str)
        .and_then(Category::from_name);
    if category.is_none() {
        let allowed: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        errors.push(format!("Category must be one of: {}", allowed.join(", ")));
    }

    // ingredients: 必填，字符串数组，至少 1 个元素
    let ingredients = body
        .get("ingredients")
        .and_then(Value::as_array)
        .filter(|arr| !arr.is_empty())
        .and_then(|arr| {
            arr.iter()
                .map(|v| v.as_str().map(str::to_string))
                .collect::<Option<Vec<String>>>()
        });
    if ingredients.is_none() {
        errors.push("Ingredients must be an array with at least one ingredient.".to_string());
    }

    // available: 可选；若出现（包括显式 null）则必须是布尔，缺省补 true
    let available = match body.get("available") {
        None => Some(true),
        Some(Value::Bool(b)) => Some(*b),
        Some(_) => {
            errors.push("Available must be a boolean value.".to_string());
            None
        }
    };

    match (name, description, price, category, ingredients, available) {
        (
            Some(name),
            Some(description),
            Some(price),
            Some(category),
            Some(ingredients),
            Some(available),
        ) => Ok(MenuItemPayload {
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
            ingredients,
            available,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "name": "Garlic Bread",
            "description": "Toasted baguette with garlic butter and parsley",
            "price": 5.49,
            "category": "appetizer",
            "ingredients": ["baguette", "garlic", "butter"]
        })
    }

    #[test]
    fn test_valid_payload_passes() {
        let payload = validate_menu_payload(&valid_body()).unwrap();
        assert_eq!(payload.name, "Garlic Bread");
        assert_eq!(payload.category, Category::Appetizer);
        assert_eq!(payload.ingredients.len(), 3);
    }

    #[test]
    fn test_available_defaults_to_true_when_omitted() {
        let payload = validate_menu_payload(&valid_body()).unwrap();
        assert!(payload.available);
    }

    #[test]
    fn test_explicit_available_false_is_kept() {
        let mut body = valid_body();
        body["available"] = json!(false);
        let payload = validate_menu_payload(&body).unwrap();
        assert!(!payload.available);
    }

    #[test]
    fn test_null_available_is_rejected() {
        let mut body = valid_body();
        body["available"] = Value::Null;
        let errors = validate_menu_payload(&body).unwrap_err();
        assert_eq!(errors, vec!["Available must be a boolean value.".to_string()]);
    }

    #[test]
    fn test_short_name_is_rejected() {
        let mut body = valid_body();
        body["name"] = json!("ab");
        let errors = validate_menu_payload(&body).unwrap_err();
        assert_eq!(
            errors,
            vec!["Name is required and must be at least 3 characters.".to_string()]
        );
    }

    #[test]
    fn test_name_of_exactly_three_chars_passes() {
        let mut body = valid_body();
        body["name"] = json!("Pho");
        assert!(validate_menu_payload(&body).is_ok());
    }

    #[test]
    fn test_non_string_name_is_rejected() {
        let mut body = valid_body();
        body["name"] = json!(42);
        assert!(validate_menu_payload(&body).is_err());
    }

    #[test]
    fn test_zero_price_is_rejected() {
        let mut body = valid_body();
        body["price"] = json!(0);
        let errors = validate_menu_payload(&body).unwrap_err();
        assert_eq!(
            errors,
            vec!["Price is required and must be a number greater than 0.".to_string()]
        );
    }

    #[test]
    fn test_string_price_is_rejected() {
        let mut body = valid_body();
        body["price"] = json!("5.49");
        assert!(validate_menu_payload(&body).is_err());
    }

    #[test]
    fn test_unknown_category_lists_allowed_values() {
        let mut body = valid_body();
        body["category"] = json!("sides");
        let errors = validate_menu_payload(&body).unwrap_err();
        assert_eq!(
            errors,
            vec!["Category must be one of: appetizer, entree, dessert, beverage".to_string()]
        );
    }

    #[test]
    fn test_empty_ingredients_is_rejected() {
        let mut body = valid_body();
        body["ingredients"] = json!([]);
        let errors = validate_menu_payload(&body).unwrap_err();
        assert_eq!(
            errors,
            vec!["Ingredients must be an array with at least one ingredient.".to_string()]
        );
    }

    #[test]
    fn test_non_string_ingredient_is_rejected() {
        let mut body = valid_body();
        body["ingredients"] = json!(["garlic", 3]);
        assert!(validate_menu_payload(&body).is_err());
    }

    #[test]
    fn test_empty_body_collects_all_required_errors() {
        let errors = validate_menu_payload(&json!({})).unwrap_err();
        // available 可选，其余五个字段各一条
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_multiple_violations_are_all_reported() {
        let body = json!({
            "name": "ab",
            "description": "too short",
            "price": -1,
            "category": "appetizer",
            "ingredients": ["bread"]
        });
        let errors = validate_menu_payload(&body).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("at least 3 characters")));
        assert!(errors.iter().any(|e| e.contains("at least 10 characters")));
        assert!(errors.iter().any(|e| e.contains("greater than 0")));
    }
}
