use healthtrack_model::food::{FoodGroup, FoodGroupDetail};

static FOOD_GROUP_DETAILS: [FoodGroupDetail; 5] = [
    FoodGroupDetail {
        group: FoodGroup::Vegetables,
        lines: &[
            "A vegetables single serve is 75g (100-350kJ). Here are some examples:",
            "• 0.5 cup of cooked green or orange vegetables (like broccoli, spinach, carrots, or pumpkin)",
            "• 0.5 cup of cooked dried or canned beans, peas, or lentils",
            "• 1 cup of green leafy or raw salad vegetables",
            "• 0.5 cup of sweet corn",
            "• 0.5 of a medium potato or other starchy vegetables (such as sweet potato, taro, or cassava)",
            "• 1 medium tomato",
        ],
    },
    FoodGroupDetail {
        group: FoodGroup::Fruits,
        lines: &[
            "A fruits single serve is 150g (350kJ). Examples:",
            "• 1 medium apple, banana, orange, or pear",
            "• 2 small apricots, kiwi fruits, or plums",
            "• 1 cup of diced or canned fruit (with no added sugar)",
        ],
    },
    FoodGroupDetail {
        group: FoodGroup::Grains,
        lines: &[
            "A grains single serve is (500kJ). Examples:",
            "• 1 slice (40g) of bread",
            "• 0.5 medium (40g) roll or flat bread",
            "• 0.5 cup (75-120g) of cooked rice, pasta, noodles, barley, buckwheat, semolina, polenta, bulgur or quinoa",
            "• 0.5 cup (120g) of cooked porridge",
            "• 0.66 cup (30g) of wheat cereal flakes",
            "• 0.75 cup (30g) of muesli",
            "• 3 (35g) crispbreads",
            "• 1 (60g) crumpet",
            "• 1 small (35g) English muffin or scone",
        ],
    },
    FoodGroupDetail {
        group: FoodGroup::Meat,
        lines: &[
            "A meat single serve is (500-600kJ). Examples:",
            "• 65g cooked lean red meats such as beef, lamb, veal, pork, goat, or kangaroo (about 90-100g raw)",
            "• 80g cooked lean poultry such as chicken or turkey (100g raw)",
            "• 100g cooked fish fillet (about 115g raw) or one small can of fish",
            "• 2 large (120g) eggs",
            "• 1 cup (150g) cooked or canned legumes/beans such as lentils, chickpeas, or split peas",
            "• 170g tofu",
            "• 30g nuts, seeds, peanut or almond butter, tahini, or other nut or seed paste",
        ],
    },
    FoodGroupDetail {
        group: FoodGroup::Dairy,
        lines: &[
            "A single serve of dairy is (500-600kJ). Examples:",
            "• 1 cup (250ml) of fresh, UHT long life, reconstituted powdered milk or buttermilk",
            "• 0.5 cup (120ml) of evaporated milk",
            "• 2 slices (40g) or a 4 x 3 x 2 cm cube (40g) of hard cheese, such as cheddar",
            "• 0.5 cup (120g) of ricotta cheese",
            "• 0.25 cup (200g) of yoghurt",
            "• 1 cup (250ml) of soy, rice or other cereal drink with at least 100mg of added calcium per 100ml",
        ],
    },
];

/// Single-serve size examples for every food group, in table order.
pub fn food_group_details() -> &'static [FoodGroupDetail] {
    &FOOD_GROUP_DETAILS
}
