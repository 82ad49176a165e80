use crate::model::{Cuisine, Difficulty, Nutrition, Recipe};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in demo recipes.
pub(super) fn recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            title: "Creamy Garlic Parmesan Pasta".to_string(),
            image: "pasta-dish.jpg".to_string(),
            ready_in_minutes: 25,
            servings: 4,
            rating: 4.8,
            cuisines: lines(&["Italian", "Comfort Food"]),
            summary: "Rich and creamy pasta dish with garlic, parmesan, and fresh herbs. Perfect for a cozy dinner.".to_string(),
            difficulty: Difficulty::Easy,
            ingredients: lines(&[
                "1 lb fettuccine pasta",
                "4 cloves garlic, minced",
                "1 cup heavy cream",
                "1 cup parmesan cheese, grated",
                "2 tbsp butter",
                "Fresh parsley for garnish",
                "Salt and pepper to taste",
            ]),
            instructions: lines(&[
                "Cook pasta according to package directions until al dente. Reserve 1 cup pasta water before draining.",
                "In a large skillet, melt butter over medium heat. Add minced garlic and sauté for 1 minute.",
                "Pour in heavy cream and bring to a gentle simmer. Let it cook for 2-3 minutes to thicken slightly.",
                "Add cooked pasta to the skillet and toss to combine. Add parmesan cheese gradually.",
                "If needed, add reserved pasta water to achieve desired consistency.",
                "Season with salt and pepper. Garnish with fresh parsley and serve immediately.",
            ]),
            nutrition: Nutrition {
                calories: 520,
                protein: "18g".to_string(),
                carbs: "62g".to_string(),
                fat: "22g".to_string(),
            },
        },
        Recipe {
            id: 2,
            title: "Asian Vegetable Stir-Fry".to_string(),
            image: "asian-stir-fry.jpg".to_string(),
            ready_in_minutes: 15,
            servings: 3,
            rating: 4.6,
            cuisines: lines(&["Asian", "Healthy"]),
            summary: "Quick and nutritious vegetable stir-fry with a savory Asian-inspired sauce.".to_string(),
            difficulty: Difficulty::Easy,
            ingredients: lines(&[
                "2 cups mixed vegetables (bell peppers, broccoli, carrots)",
                "2 tbsp vegetable oil",
                "3 cloves garlic, minced",
                "1 tbsp fresh ginger, grated",
                "3 tbsp soy sauce",
                "1 tbsp sesame oil",
                "1 tsp cornstarch",
                "Green onions for garnish",
            ]),
            instructions: lines(&[
                "Heat vegetable oil in a large wok or skillet over high heat.",
                "Add garlic and ginger, stir-fry for 30 seconds until fragrant.",
                "Add vegetables and stir-fry for 3-4 minutes until crisp-tender.",
                "Mix soy sauce, sesame oil, and cornstarch in a small bowl.",
                "Pour sauce over vegetables and toss to coat evenly.",
                "Cook for another minute until sauce thickens. Garnish with green onions.",
            ]),
            nutrition: Nutrition {
                calories: 180,
                protein: "5g".to_string(),
                carbs: "15g".to_string(),
                fat: "12g".to_string(),
            },
        },
        Recipe {
            id: 3,
            title: "Decadent Chocolate Lava Cake".to_string(),
            image: "chocolate-dessert.jpg".to_string(),
            ready_in_minutes: 35,
            servings: 2,
            rating: 4.9,
            cuisines: lines(&["French", "Dessert"]),
            summary: "Individual chocolate cakes with a molten center, served with fresh berries and mint.".to_string(),
            difficulty: Difficulty::Medium,
            ingredients: lines(&[
                "4 oz dark chocolate, chopped",
                "4 tbsp unsalted butter",
                "2 large eggs",
                "2 tbsp granulated sugar",
                "2 tbsp all-purpose flour",
                "Pinch of salt",
                "Butter for ramekins",
                "Fresh berries for serving",
            ]),
            instructions: lines(&[
                "Preheat oven to 425°F. Butter two 6-oz ramekins and dust with cocoa powder.",
                "Melt chocolate and butter in a double boiler until smooth. Let cool slightly.",
                "In a bowl, whisk eggs and sugar until thick and pale.",
                "Fold in the chocolate mixture, then gently fold in flour and salt.",
                "Divide batter between prepared ramekins. Bake for 12-14 minutes.",
                "Let cool for 1 minute, then invert onto plates. Serve with fresh berries.",
            ]),
            nutrition: Nutrition {
                calories: 380,
                protein: "8g".to_string(),
                carbs: "32g".to_string(),
                fat: "26g".to_string(),
            },
        },
    ]
}

/// The six browsable cuisines.
pub(crate) fn cuisines() -> Vec<Cuisine> {
    vec![
        Cuisine::new(
            "Italian",
            "🇮🇹",
            "Rich pasta dishes, wood-fired pizzas, and fresh Mediterranean flavors",
            &["Pasta", "Pizza", "Risotto", "Gelato"],
            "green",
        ),
        Cuisine::new(
            "Asian",
            "🍜",
            "Bold spices, fresh ingredients, and diverse cooking techniques",
            &["Stir-fry", "Ramen", "Curry", "Sushi"],
            "red",
        ),
        Cuisine::new(
            "Mexican",
            "🇲🇽",
            "Vibrant spices, fresh herbs, and comforting traditional dishes",
            &["Tacos", "Enchiladas", "Guacamole", "Salsa"],
            "yellow",
        ),
        Cuisine::new(
            "French",
            "🇫🇷",
            "Elegant techniques, rich sauces, and sophisticated flavors",
            &["Coq au Vin", "Ratatouille", "Croissant", "Soufflé"],
            "blue",
        ),
        Cuisine::new(
            "Indian",
            "🇮🇳",
            "Complex spice blends, aromatic curries, and diverse regional flavors",
            &["Curry", "Biryani", "Naan", "Samosa"],
            "orange",
        ),
        Cuisine::new(
            "Middle Eastern",
            "🥙",
            "Aromatic spices, fresh herbs, and healthy Mediterranean ingredients",
            &["Hummus", "Falafel", "Shawarma", "Tabbouleh"],
            "purple",
        ),
    ]
}
