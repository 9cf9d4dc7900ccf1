use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Number of numbered ingredient/measure slots in a detail record
pub const INGREDIENT_SLOTS: usize = 20;

/// Ingredients offered as one-tap searches
pub const QUICK_INGREDIENTS: [&str; 7] = [
    "chicken", "salmon", "pasta", "rice", "potato", "mushroom", "cheese",
];

/// Lightweight list-view record returned by an ingredient search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

/// One kept ingredient slot: quantity plus ingredient name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub measure: String,
    pub ingredient: String,
}

impl fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.measure.is_empty() {
            write!(f, "{}", self.ingredient)
        } else {
            write!(f, "{} {}", self.measure, self.ingredient)
        }
    }
}

/// Full record for a single recipe, fetched on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub thumbnail_url: String,
    pub instructions: String,
    pub ingredients: Vec<IngredientLine>,
    pub video_url: Option<String>,
}

/// `{ "meals": [...] | null }` wrapper used by every endpoint
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct MealsEnvelope<T> {
    #[serde(default)]
    pub meals: Option<Vec<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MealSummaryRecord {
    #[serde(rename = "idMeal", default)]
    id: Option<String>,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
}

impl From<MealSummaryRecord> for RecipeSummary {
    fn from(record: MealSummaryRecord) -> Self {
        RecipeSummary {
            id: record.id.unwrap_or_default(),
            name: record.name.unwrap_or_default(),
            thumbnail_url: record.thumbnail.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct MealDetailRecord {
    #[serde(rename = "idMeal", default)]
    id: Option<String>,
    #[serde(rename = "strMeal", default)]
    name: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    // strIngredientN / strMeasureN and everything else we don't name
    #[serde(flatten)]
    slots: Map<String, Value>,
}

impl MealDetailRecord {
    fn slot(&self, key: &str) -> &str {
        self.slots.get(key).and_then(Value::as_str).unwrap_or("")
    }

    /// Expand the numbered slots into an ordered ingredient list.
    ///
    /// A slot is kept only when its ingredient is non-blank after trimming.
    pub(crate) fn ingredients(&self) -> Vec<IngredientLine> {
        (1..=INGREDIENT_SLOTS)
            .filter_map(|i| {
                let ingredient = self.slot(&format!("strIngredient{i}")).trim();
                if ingredient.is_empty() {
                    return None;
                }
                Some(IngredientLine {
                    measure: self.slot(&format!("strMeasure{i}")).trim().to_string(),
                    ingredient: ingredient.to_string(),
                })
            })
            .collect()
    }
}

impl From<MealDetailRecord> for RecipeDetail {
    fn from(record: MealDetailRecord) -> Self {
        let ingredients = record.ingredients();
        let video_url = record
            .youtube
            .filter(|url| !url.trim().is_empty())
            .map(|url| url.trim().to_string());

        RecipeDetail {
            id: record.id.unwrap_or_default(),
            name: record.name.unwrap_or_default(),
            category: record.category.unwrap_or_default(),
            area: record.area.unwrap_or_default(),
            thumbnail_url: record.thumbnail.unwrap_or_default(),
            instructions: record.instructions.unwrap_or_default(),
            ingredients,
            video_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> Value {
        let mut record = json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strInstructions": "Preheat oven to 350° F.",
            "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
        });
        let map = record.as_object_mut().unwrap();
        for i in 1..=INGREDIENT_SLOTS {
            map.insert(format!("strIngredient{i}"), json!(format!("ingredient {i}")));
            map.insert(format!("strMeasure{i}"), json!(format!("{i} tbs")));
        }
        record
    }

    fn detail_from(value: Value) -> RecipeDetail {
        let record: MealDetailRecord = serde_json::from_value(value).unwrap();
        record.into()
    }

    #[test]
    fn test_blank_slot_is_skipped() {
        let mut record = full_record();
        record["strIngredient3"] = json!("   ");

        let detail = detail_from(record);

        assert_eq!(detail.ingredients.len(), 19);
        assert!(detail
            .ingredients
            .iter()
            .all(|line| line.ingredient != "ingredient 3"));
        let expected: Vec<String> = (1..=INGREDIENT_SLOTS)
            .filter(|i| *i != 3)
            .map(|i| format!("ingredient {i}"))
            .collect();
        let actual: Vec<String> = detail
            .ingredients
            .iter()
            .map(|line| line.ingredient.clone())
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_null_and_missing_slots() {
        let record = json!({
            "idMeal": "1",
            "strMeal": "Toast",
            "strIngredient1": "Bread",
            "strMeasure1": "2 slices",
            "strIngredient2": null,
            "strMeasure2": null,
            "strIngredient3": "Butter",
            "strMeasure3": null,
            "strIngredient4": "",
        });

        let detail = detail_from(record);

        assert_eq!(
            detail.ingredients,
            vec![
                IngredientLine {
                    measure: "2 slices".to_string(),
                    ingredient: "Bread".to_string(),
                },
                IngredientLine {
                    measure: String::new(),
                    ingredient: "Butter".to_string(),
                },
            ]
        );
        assert_eq!(detail.category, "");
        assert_eq!(detail.instructions, "");
        assert!(detail.video_url.is_none());
    }

    #[test]
    fn test_blank_video_url_is_none() {
        let mut record = full_record();
        record["strYoutube"] = json!("");
        assert!(detail_from(record).video_url.is_none());

        let detail = detail_from(full_record());
        assert_eq!(
            detail.video_url.as_deref(),
            Some("https://www.youtube.com/watch?v=4aZr5hZXP_s")
        );
        assert_eq!(detail.category, "Chicken");
        assert_eq!(detail.area, "Japanese");
    }

    #[test]
    fn test_slots_beyond_twenty_are_ignored() {
        let mut record = full_record();
        record["strIngredient21"] = json!("Extra");
        assert_eq!(detail_from(record).ingredients.len(), INGREDIENT_SLOTS);
    }

    #[test]
    fn test_ingredient_line_display() {
        let line = IngredientLine {
            measure: "1 cup".to_string(),
            ingredient: "Rice".to_string(),
        };
        assert_eq!(line.to_string(), "1 cup Rice");

        let bare = IngredientLine {
            measure: String::new(),
            ingredient: "Salt".to_string(),
        };
        assert_eq!(bare.to_string(), "Salt");
    }

    #[test]
    fn test_null_meals_envelope() {
        let envelope: MealsEnvelope<MealSummaryRecord> =
            serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(envelope.meals.is_none());

        let envelope: MealsEnvelope<MealSummaryRecord> = serde_json::from_str("{}").unwrap();
        assert!(envelope.meals.is_none());
    }
}
