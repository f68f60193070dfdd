use calorie_log_rs::models::{MealSlot, Product};
use calorie_log_rs::store::NutritionStore;
use tempfile::TempDir;

fn fresh_store() -> (TempDir, NutritionStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = NutritionStore::open(dir.path().join("calories.json"));
    (dir, store)
}

fn product(calories: u32) -> Product {
    Product::with_calories(calories)
}

#[test]
fn test_calories_derived_from_serving_data() {
    let (_dir, mut store) = fresh_store();

    store.add_product(
        "Bread",
        Product {
            serving_size: Some(100),
            calories_per_serving: Some(250),
            ..product(0)
        },
    );
    store.add_product(
        "Roll",
        Product {
            serving_size: Some(50),
            calories_per_serving: Some(100),
            ..product(0)
        },
    );

    assert_eq!(store.product("Bread").unwrap().calories, 250);
    assert_eq!(store.product("Roll").unwrap().calories, 200);
}

#[test]
fn test_entry_calories_from_grams() {
    let (_dir, mut store) = fresh_store();

    store.add_product("Buckwheat", product(130));
    store.add_meal_entry("2025-01-15", MealSlot::Lunch, "Buckwheat", 200.0, true);

    assert_eq!(store.meal_total_calories("2025-01-15", MealSlot::Lunch), 260);
}

#[test]
fn test_entry_calories_from_servings() {
    let (_dir, mut store) = fresh_store();

    // The serving multiplier is the amount itself; serving_size plays no
    // part at entry time.
    store.add_product(
        "Yogurt",
        Product {
            serving_size: Some(150),
            ..product(60)
        },
    );
    store.add_meal_entry("2025-01-15", MealSlot::Snack, "Yogurt", 2.0, false);

    assert_eq!(store.meal_total_calories("2025-01-15", MealSlot::Snack), 120);
}

#[test]
fn test_zero_macro_derives_as_unknown() {
    let (_dir, mut store) = fresh_store();

    store.add_product(
        "Chicken",
        Product {
            protein: Some(31),
            fat: Some(4),
            carbs: Some(0),
            ..product(165)
        },
    );
    store.add_meal_entry("2025-01-15", MealSlot::Dinner, "Chicken", 150.0, true);

    let day = store.day_data("2025-01-15");
    assert_eq!(day.dinner[0].protein, Some(46));
    assert_eq!(day.dinner[0].fat, Some(6));
    assert_eq!(day.dinner[0].carbs, None);
}

#[test]
fn test_rename_cascade_recomputes_entries() {
    let (_dir, mut store) = fresh_store();

    store.add_product("A", product(100));
    store.add_meal_entry("2025-01-15", MealSlot::Breakfast, "A", 150.0, true);

    store.update_product("A", "B", product(120));

    let day = store.day_data("2025-01-15");
    assert_eq!(day.breakfast[0].product, "B");
    // recomputed from the new profile at the entry's own amount/mode
    assert_eq!(day.breakfast[0].calories, 180);
    assert!(!store.has_product("A"));
}

#[test]
fn test_remove_product_cascades_to_all_dates() {
    let (_dir, mut store) = fresh_store();

    store.add_product("X", product(100));
    store.add_meal_entry("2025-01-15", MealSlot::Breakfast, "X", 100.0, true);
    store.add_meal_entry("2025-01-16", MealSlot::Lunch, "X", 50.0, true);

    store.remove_product("X");

    assert!(store.day_data("2025-01-15").breakfast.is_empty());
    assert!(store.day_data("2025-01-16").lunch.is_empty());
}

#[test]
fn test_macro_aggregate_distinguishes_unknown_from_zero() {
    let (_dir, mut store) = fresh_store();

    store.add_product("Plain", product(100));
    store.add_meal_entry("2025-01-15", MealSlot::Lunch, "Plain", 100.0, true);
    store.add_meal_entry("2025-01-15", MealSlot::Lunch, "Plain", 50.0, true);

    // no entry has protein data at all
    let macros = store.meal_total_macros("2025-01-15", MealSlot::Lunch);
    assert_eq!(macros.protein, None);

    // one defined value flips the aggregate away from unknown
    store.add_product(
        "Egg",
        Product {
            protein: Some(5),
            ..product(100)
        },
    );
    store.add_meal_entry("2025-01-15", MealSlot::Lunch, "Egg", 100.0, true);

    let macros = store.meal_total_macros("2025-01-15", MealSlot::Lunch);
    assert_eq!(macros.protein, Some(5));
}

#[test]
fn test_day_totals_span_all_meals() {
    let (_dir, mut store) = fresh_store();

    store.add_product(
        "Rice",
        Product {
            protein: Some(3),
            fat: Some(1),
            carbs: Some(28),
            ..product(130)
        },
    );
    store.add_product(
        "Chicken",
        Product {
            protein: Some(31),
            fat: Some(4),
            carbs: Some(0),
            ..product(165)
        },
    );
    store.add_meal_entry("2025-01-15", MealSlot::Lunch, "Rice", 100.0, true);
    store.add_meal_entry("2025-01-15", MealSlot::Dinner, "Chicken", 100.0, true);

    assert_eq!(store.day_total_calories("2025-01-15"), 295);

    let macros = store.day_total_macros("2025-01-15");
    assert_eq!(macros.protein, Some(34));
    assert_eq!(macros.fat, Some(5));
    assert_eq!(macros.carbs, Some(28));
}

#[test]
fn test_remove_entry_shifts_later_indices() {
    let (_dir, mut store) = fresh_store();

    store.add_product("Rice", product(130));
    for amount in [100.0, 200.0, 300.0] {
        store.add_meal_entry("2025-01-15", MealSlot::Lunch, "Rice", amount, true);
    }

    store.remove_meal_entry("2025-01-15", MealSlot::Lunch, 1);

    let day = store.day_data("2025-01-15");
    assert_eq!(day.lunch.len(), 2);
    assert_eq!(day.lunch[0].amount, 100.0);
    assert_eq!(day.lunch[1].amount, 300.0);
}

#[test]
fn test_update_entry_rewrites_in_place() {
    let (_dir, mut store) = fresh_store();

    store.add_product("Banana", product(89));
    store.add_product("Apple", product(52));
    store.add_meal_entry("2025-01-15", MealSlot::Snack, "Banana", 100.0, true);

    store.update_meal_entry("2025-01-15", MealSlot::Snack, 0, "Apple", 150.0, true);

    let day = store.day_data("2025-01-15");
    assert_eq!(day.snack.len(), 1);
    assert_eq!(day.snack[0].product, "Apple");
    assert_eq!(day.snack[0].calories, 78);
}

#[test]
fn test_entry_time_is_stamped() {
    let (_dir, mut store) = fresh_store();

    store.add_product("Rice", product(130));
    store.add_meal_entry("2025-01-15", MealSlot::Lunch, "Rice", 100.0, true);

    let day = store.day_data("2025-01-15");
    let time = &day.lunch[0].time;
    assert_eq!(time.len(), 5);
    assert_eq!(time.as_bytes()[2], b':');
}

#[test]
fn test_silent_noops_leave_store_clean() {
    let (_dir, mut store) = fresh_store();

    store.add_meal_entry("2025-01-15", MealSlot::Lunch, "Ghost", 100.0, true);
    store.remove_product("Ghost");
    store.remove_meal_entry("2025-01-15", MealSlot::Lunch, 0);
    store.update_meal_entry("2025-01-15", MealSlot::Lunch, 0, "Ghost", 1.0, false);

    assert!(!store.is_dirty());
    assert!(store.day_data("2025-01-15").is_empty());
}
