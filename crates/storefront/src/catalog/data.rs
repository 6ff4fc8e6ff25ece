//! Built-in catalog content.

use dhanvantari_core::{CurrencyCode, Price};
use rust_decimal::Decimal;

use super::types::{Article, Course, Herb, HerbCategory, Product, Recipe};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

/// The six herbs shown on the herbs tab.
#[must_use]
pub fn herbs() -> Vec<Herb> {
    let herb = |id: &str,
                name: &str,
                scientific_name: &str,
                benefits: &[&str],
                description: &str,
                tags: &[&str],
                image_url: &str| Herb {
        id: id.into(),
        name: name.to_string(),
        scientific_name: scientific_name.to_string(),
        benefits: strings(benefits),
        description: description.to_string(),
        tags: strings(tags),
        image_url: image_url.to_string(),
    };

    vec![
        herb(
            "1",
            "Tulsi (Holy Basil)",
            "Ocimum sanctum",
            &["Respiratory disorders", "Stress relief", "Immunity booster"],
            "A sacred plant in Ayurveda known for its healing properties and religious significance.",
            &["immune", "stress"],
            "https://nurserylive.com/cdn/shop/products/nurserylive-seeds-krishna-tulsi-tulsi-black-0-5-kg-seeds-112929_600x600.png",
        ),
        herb(
            "2",
            "Ashwagandha",
            "Withania somnifera",
            &["Reduces stress & anxiety", "Improves energy", "Enhances concentration"],
            "An adaptogenic herb that helps the body manage stress and promotes overall wellbeing.",
            &["stress", "brain"],
            "https://m.media-amazon.com/images/I/41U1Uz5Q9HL.jpg",
        ),
        herb(
            "3",
            "Neem",
            "Azadirachta indica",
            &["Blood purifier", "Skin disorders", "Anti-bacterial"],
            "Known for its bitter taste and incredible medicinal properties, especially for skin and blood.",
            &["skin", "immune"],
            "https://dwibhashi.co.in/cdn/shop/articles/neem-oil_b9b833ce-e7e6-45c1-9d79-385ffc6da7e9.jpg",
        ),
        herb(
            "4",
            "Amla (Indian Gooseberry)",
            "Phyllanthus emblica",
            &["Rich in Vitamin C", "Improves digestion", "Hair health"],
            "One of the richest sources of Vitamin C and a powerful rejuvenating herb in Ayurveda.",
            &["immune", "digestive"],
            "https://m.media-amazon.com/images/I/61gRfOuOWxL.jpg",
        ),
        herb(
            "5",
            "Brahmi",
            "Bacopa monnieri",
            &["Memory enhancement", "Cognitive function", "Reduces anxiety"],
            "Traditional brain tonic that enhances memory and cognitive function.",
            &["brain", "stress"],
            "https://cdn.apartmenttherapy.info/image/upload/k%2FPhoto%2FPlants%2F2023-04%2FBrahmi-GettyImages-1458690762",
        ),
        herb(
            "6",
            "Shatavari",
            "Asparagus racemosus",
            &["Women's health", "Hormonal balance", "Digestive aid"],
            "Known as the 'Queen of Herbs' in Ayurveda, particularly beneficial for women's health.",
            &["digestive"],
            "https://nutrijaorganics.com/wp-content/uploads/2023/01/shatavari-powder.webp",
        ),
    ]
}

/// Category chips for the herbs tab. The first entry is always "All".
#[must_use]
pub fn herb_categories() -> Vec<HerbCategory> {
    [
        ("1", "All", "apps-outline"),
        ("2", "Immune", "shield-outline"),
        ("3", "Digestive", "fitness-outline"),
        ("4", "Skin", "color-palette-outline"),
        ("5", "Stress", "leaf-outline"),
        ("6", "Brain", "brain-outline"),
    ]
    .into_iter()
    .map(|(id, name, icon)| HerbCategory {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

/// Articles on the learn tab.
#[must_use]
pub fn articles() -> Vec<Article> {
    vec![
        Article {
            id: "1".into(),
            title: "Understanding Your Dosha Type".to_string(),
            author: "Dr. Priya Sharma".to_string(),
            summary: "How Vata, Pitta and Kapha shape your constitution and daily routine."
                .to_string(),
            read_time_minutes: 5,
            published: "2 days ago".to_string(),
            tags: strings(&["fundamentals"]),
            image_url: "https://www.ayurvedaguru.net/wp-content/uploads/2023/10/Ayurvedic-Dosha-Types.jpg".to_string(),
        },
        Article {
            id: "2".into(),
            title: "The Power of Triphala in Daily Life".to_string(),
            author: "Rahul Mishra".to_string(),
            summary: "Why the three-fruit blend is a staple for digestion and gentle detox."
                .to_string(),
            read_time_minutes: 7,
            published: "1 week ago".to_string(),
            tags: strings(&["digestive", "herbs"]),
            image_url: "https://images-prod.healthline.com/hlcmsresource/images/AN_images/triphala-ayurvedic-fruits-1296x728.jpg".to_string(),
        },
        Article {
            id: "3".into(),
            title: "Ayurvedic Diet Principles for Modern Life".to_string(),
            author: "Dr. Arjun Gupta".to_string(),
            summary: "Eating by season and constitution without giving up a busy schedule."
                .to_string(),
            read_time_minutes: 10,
            published: "3 weeks ago".to_string(),
            tags: strings(&["diet", "fundamentals"]),
            image_url: String::new(),
        },
    ]
}

/// Courses on the learn tab.
#[must_use]
pub fn courses() -> Vec<Course> {
    let course = |id: &str,
                  title: &str,
                  instructor: &str,
                  duration: &str,
                  level: &str,
                  lessons: u32,
                  progress: f32| Course {
        id: id.into(),
        title: title.to_string(),
        instructor: instructor.to_string(),
        duration: duration.to_string(),
        level: level.to_string(),
        lessons,
        progress,
        image_url: String::new(),
    };

    vec![
        course(
            "1",
            "Introduction to Ayurveda",
            "Dr. Rajesh Verma",
            "3 weeks",
            "Beginner",
            12,
            0.3,
        ),
        course(
            "2",
            "Ayurvedic Herbs Masterclass",
            "Dr. Meena Sharma",
            "5 weeks",
            "Intermediate",
            20,
            0.0,
        ),
        course(
            "3",
            "Daily Ayurvedic Rituals",
            "Anjali Patel",
            "2 weeks",
            "Beginner",
            8,
            0.7,
        ),
    ]
}

/// Home remedy recipes.
#[must_use]
pub fn recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".into(),
            title: "Immunity Boosting Kadha".to_string(),
            description: "A warming decoction of tulsi, ginger and spices for the cold season."
                .to_string(),
            ingredients: strings(&["Tulsi leaves", "Ginger", "Black pepper", "Cinnamon", "Honey"]),
            prep_time_minutes: 10,
            tags: strings(&["immune"]),
            image_url: "https://static.toiimg.com/photo/msid-75662720/75662720.jpg".to_string(),
        },
        Recipe {
            id: "2".into(),
            title: "Golden Milk for Sleep".to_string(),
            description: "Turmeric milk with black pepper and cardamom to wind down at night."
                .to_string(),
            ingredients: strings(&["Milk", "Turmeric", "Black pepper", "Cinnamon", "Cardamom"]),
            prep_time_minutes: 5,
            tags: strings(&["sleep", "stress"]),
            image_url: "https://www.acouplecooks.com/wp-content/uploads/2021/02/Golden-Milk-004.jpg".to_string(),
        },
    ]
}

/// Featured products on the home tab.
#[must_use]
pub fn featured_products(currency: CurrencyCode) -> Vec<Product> {
    let product = |id: &str,
                   name: &str,
                   description: &str,
                   rupees: i64,
                   rating_tenths: i64,
                   reviews: u32,
                   tags: &[&str]| Product {
        id: id.into(),
        name: name.to_string(),
        description: description.to_string(),
        price: Price::new(Decimal::new(rupees, 0), currency),
        rating: Decimal::new(rating_tenths, 1),
        reviews,
        tags: strings(tags),
        image_url: String::new(),
    };

    vec![
        product(
            "ashwagandha-kit",
            "Ashwagandha Kit",
            "Root powder and capsules for stress relief and steady energy.",
            599,
            48,
            156,
            &["stress", "brain"],
        ),
        product(
            "triphala-kit",
            "Triphala Kit",
            "Classic three-fruit blend for digestion.",
            449,
            45,
            98,
            &["digestive"],
        ),
        product(
            "tulsi-kit",
            "Tulsi Kit",
            "Holy basil tea and drops for immunity.",
            349,
            47,
            214,
            &["immune", "stress"],
        ),
        product(
            "neem-kit",
            "Neem Kit",
            "Neem oil and soap for clear skin.",
            499,
            46,
            120,
            &["skin"],
        ),
    ]
}
