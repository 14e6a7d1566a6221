use crate::schema::RecipeId;

pub const FAVORITES_FILE: &str = "favorites.json";
pub const USER_RECIPES_FILE: &str = "user_recipes.json";
pub const USER_INGREDIENTS_FILE: &str = "user_ingredients.json";

/// User recipe ids are allocated above this value, so the first one is 100.
pub const USER_RECIPE_ID_FLOOR: RecipeId = 99;

pub const REQUIRED_RECIPE_FIELDS: &[&str] = &["title", "time", "difficulty", "calories", "servings"];

pub const COMMON_INGREDIENTS: &[&str] = &[
    "Мука",
    "Сахар",
    "Соль",
    "Перец",
    "Оливковое масло",
    "Подсолнечное масло",
    "Яйца",
    "Молоко",
    "Сливки",
    "Сметана",
    "Масло сливочное",
    "Сыр",
    "Пармезан",
    "Моцарелла",
    "Чеснок",
    "Лук репчатый",
    "Лук зеленый",
    "Морковь",
    "Картофель",
    "Помидоры",
    "Огурцы",
    "Перец болгарский",
    "Капуста белокочанная",
    "Капуста цветная",
    "Брокколи",
    "Шпинат",
    "Салат листовой",
    "Петрушка",
    "Укроп",
    "Базилик",
    "Кинза",
    "Куриное филе",
    "Говядина",
    "Свинина",
    "Бекон",
    "Ветчина",
    "Колбаса",
    "Сосиски",
    "Рыба белая",
    "Лосось",
    "Креветки",
    "Кальмары",
    "Мидии",
    "Рис",
    "Гречка",
    "Макароны",
    "Спагетти",
    "Лапша",
    "Хлеб",
    "Сухари",
    "Орехи грецкие",
    "Миндаль",
    "Кешью",
    "Изюм",
    "Курага",
    "Чернослив",
    "Мед",
    "Варенье",
    "Шоколад",
    "Какао",
    "Ванилин",
    "Корица",
    "Имбирь",
    "Куркума",
    "Паприка",
    "Лавровый лист",
    "Уксус",
    "Соевый соус",
    "Горчица",
    "Майонез",
    "Кетчуп",
    "Томатная паста",
    "Лимон",
    "Апельсин",
    "Яблоки",
    "Бананы",
    "Клубника",
    "Малина",
    "Черника",
    "Авокадо",
    "Оливки",
    "Каперсы",
    "Тыква",
    "Кабачки",
    "Баклажаны",
    "Грибы",
    "Фасоль",
    "Горох",
    "Чечевица",
    "Кукуруза",
    "Горошек зеленый",
];
