use serde::Serialize;

/// Id синтетической категории из пользовательских слов.
pub const CUSTOM_CATEGORY_ID: &str = "custom";
/// Отображаемое имя пользовательской категории.
pub const CUSTOM_CATEGORY_NAME: &str = "Custom Category";
/// Минимум слов в пользовательской категории (проверяет вызывающий код, не движок).
pub const MIN_CUSTOM_WORDS: usize = 5;

/// Встроенная категория: имя + фиксированный список слов-кандидатов.
/// Выбор случайного слова делает engine (через RandomSource), НЕ здесь.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    /// Имя иконки для UI.
    pub icon: &'static str,
    pub words: &'static [&'static str],
}

impl Category {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

pub static CATEGORIES: &[Category] = &[
    Category {
        id: "animals",
        name: "Animals",
        icon: "paw",
        words: &[
            "Dog", "Cat", "Elephant", "Lion", "Tiger", "Bear",
            "Monkey", "Giraffe", "Zebra", "Penguin", "Dolphin", "Shark",
            "Eagle", "Owl", "Parrot", "Snake", "Crocodile", "Turtle",
            "Rabbit", "Squirrel", "Fox", "Wolf", "Deer", "Kangaroo",
            "Koala", "Panda", "Gorilla", "Cheetah", "Leopard", "Rhino",
        ],
    },
    Category {
        id: "movies",
        name: "Movies",
        icon: "film",
        words: &[
            "Titanic", "Avatar", "Inception", "The Matrix", "Jurassic Park", "Star Wars",
            "Harry Potter", "The Godfather", "Frozen", "Toy Story", "Finding Nemo", "Shrek",
            "The Lion King", "Aladdin", "The Avengers", "Iron Man", "Spider-Man", "Batman",
            "Superman", "Wonder Woman", "Black Panther", "Captain America", "Thor", "Hulk",
            "Gladiator", "Rocky", "Rambo", "Terminator", "Alien", "Predator",
        ],
    },
    Category {
        id: "food",
        name: "Food & Drinks",
        icon: "restaurant",
        words: &[
            "Pizza", "Burger", "Pasta", "Sushi", "Tacos", "Sandwich",
            "Ice Cream", "Chocolate", "Cake", "Cookie", "Donut", "Pancake",
            "Coffee", "Tea", "Water", "Juice", "Soda", "Wine",
            "Beer", "Salad", "Soup", "Rice", "Noodles", "Bread",
            "Cheese", "Chicken", "Beef", "Fish", "Shrimp", "Lobster",
        ],
    },
    Category {
        id: "sports",
        name: "Sports",
        icon: "football",
        words: &[
            "Soccer", "Basketball", "Tennis", "Baseball", "Volleyball", "Swimming",
            "Running", "Cycling", "Boxing", "Wrestling", "Golf", "Hockey",
            "Rugby", "Cricket", "Badminton", "Table Tennis", "Skiing", "Snowboarding",
            "Surfing", "Skateboarding", "Climbing", "Gymnastics", "Yoga", "Karate",
            "Judo", "Archery", "Bowling", "Darts", "Pool", "Chess",
        ],
    },
    Category {
        id: "countries",
        name: "Countries",
        icon: "globe",
        words: &[
            "USA", "Canada", "Mexico", "Brazil", "Argentina", "Chile",
            "UK", "France", "Germany", "Italy", "Spain", "Portugal",
            "Russia", "China", "Japan", "Korea", "India", "Thailand",
            "Australia", "New Zealand", "Egypt", "South Africa", "Kenya", "Morocco",
            "Turkey", "Greece", "Poland", "Netherlands", "Belgium", "Switzerland",
        ],
    },
    Category {
        id: "professions",
        name: "Professions",
        icon: "briefcase",
        words: &[
            "Doctor", "Nurse", "Teacher", "Engineer", "Lawyer", "Architect",
            "Chef", "Artist", "Musician", "Actor", "Writer", "Journalist",
            "Police Officer", "Firefighter", "Pilot", "Scientist", "Programmer", "Designer",
            "Photographer", "Veterinarian", "Dentist", "Accountant", "Mechanic", "Electrician",
            "Plumber", "Builder", "Farmer", "Fisherman", "Barber", "Tailor",
        ],
    },
    Category {
        id: "objects",
        name: "Everyday Objects",
        icon: "cube",
        words: &[
            "Phone", "Computer", "TV", "Camera", "Watch", "Glasses",
            "Book", "Pen", "Paper", "Backpack", "Wallet", "Keys",
            "Chair", "Table", "Bed", "Lamp", "Mirror", "Clock",
            "Umbrella", "Bottle", "Cup", "Plate", "Fork", "Knife",
            "Shoes", "Hat", "Shirt", "Pants", "Jacket", "Bag",
        ],
    },
    Category {
        id: "places",
        name: "Places",
        icon: "location",
        words: &[
            "Beach", "Mountain", "Forest", "Desert", "Ocean", "Lake",
            "Park", "Zoo", "Museum", "Library", "School", "Hospital",
            "Restaurant", "Cafe", "Store", "Mall", "Airport", "Train Station",
            "Hotel", "Cinema", "Theater", "Stadium", "Gym", "Pool",
            "Church", "Temple", "Mosque", "Castle", "Bridge", "Tower",
        ],
    },
];

/// Найти встроенную категорию по id.
pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

pub fn all_categories() -> &'static [Category] {
    CATEGORIES
}

/// Разобрать текст из поля ввода пользовательской категории:
/// одно слово на строку, пробелы по краям обрезаются, пустые строки выкидываются.
pub fn parse_custom_words(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
