use serde::{Deserialize, Serialize};

/// One hit from the ingredient-matching search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub used_ingredient_count: u32,
    #[serde(default)]
    pub missed_ingredient_count: u32,
}

impl RecipeSummary {
    /// Ingredients the recipe needs in total (the denominator of the match badge)
    pub fn total_ingredient_count(&self) -> u32 {
        self.used_ingredient_count + self.missed_ingredient_count
    }
}

/// Full record for a single recipe
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    /// Upstream HTML markup; untrusted
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedIngredient {
    pub original: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_api_json() {
        let json = r#"{
            "id": 1,
            "title": "Chicken Rice",
            "image": "x.jpg",
            "imageType": "jpg",
            "usedIngredientCount": 2,
            "missedIngredientCount": 1,
            "likes": 4
        }"#;
        let summary: RecipeSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 1);
        assert_eq!(summary.image.as_deref(), Some("x.jpg"));
        assert_eq!(summary.total_ingredient_count(), 3);
    }

    #[test]
    fn test_detail_with_null_instructions() {
        let json = r#"{
            "title": "Plain Rice",
            "readyInMinutes": 20,
            "servings": 2,
            "extendedIngredients": [{"original": "1 cup rice", "amount": 1.0}],
            "instructions": null
        }"#;
        let detail: RecipeDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.ready_in_minutes, Some(20));
        assert_eq!(detail.extended_ingredients.len(), 1);
        assert!(detail.instructions.is_none());
        assert!(detail.image.is_none());
    }
}
