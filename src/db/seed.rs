//! Example records inserted by `init-db`.

use serde_json::json;

use crate::notifications::dtos::create_notification_dto::CreateNotificationDto;

pub struct SeedUser {
    pub id: &'static str,
    pub username: &'static str,
    pub email: &'static str,
    pub eco_points: i32,
}

pub struct SeedPost {
    pub id: &'static str,
    pub user_id: &'static str,
    pub content: &'static str,
    pub image_url: Option<&'static str>,
}

pub struct SeedChallenge {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub points: i32,
    /// Offsets in days from the seeding time.
    pub starts_in_days: i64,
    pub duration_days: i64,
}

pub struct SeedBadge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub points_required: i32,
}

pub struct SeedQuote {
    pub id: &'static str,
    pub text: &'static str,
    pub author: &'static str,
}

// Seeded accounts cannot log in.
pub const DISABLED_PASSWORD_HASH: &str = "!";

pub static USERS: [SeedUser; 3] = [
    SeedUser {
        id: "00000000-0000-4000-8000-000000000001",
        username: "EcoWarrior",
        email: "ecowarrior@greenstagram.app",
        eco_points: 1250,
    },
    SeedUser {
        id: "00000000-0000-4000-8000-000000000002",
        username: "GreenThumb",
        email: "greenthumb@greenstagram.app",
        eco_points: 830,
    },
    SeedUser {
        id: "00000000-0000-4000-8000-000000000003",
        username: "ZeroWasteZoe",
        email: "zoe@greenstagram.app",
        eco_points: 2140,
    },
];

pub static POSTS: [SeedPost; 3] = [
    SeedPost {
        id: "00000000-0000-4000-9000-000000000001",
        user_id: "00000000-0000-4000-8000-000000000001",
        content: "Biked to work all week instead of driving. #CarFreeWeek",
        image_url: None,
    },
    SeedPost {
        id: "00000000-0000-4000-9000-000000000002",
        user_id: "00000000-0000-4000-8000-000000000002",
        content: "First tomatoes from the balcony garden!",
        image_url: Some("https://images.greenstagram.app/seed/tomatoes.jpg"),
    },
    SeedPost {
        id: "00000000-0000-4000-9000-000000000003",
        user_id: "00000000-0000-4000-8000-000000000003",
        content: "One month without single-use plastic. Here is what fit in my jar.",
        image_url: Some("https://images.greenstagram.app/seed/jar.jpg"),
    },
];

pub static CHALLENGES: [SeedChallenge; 3] = [
    SeedChallenge {
        id: "00000000-0000-4000-a000-000000000001",
        title: "Car-Free Week",
        description: "Walk, bike or take public transport for seven days.",
        category: "transport",
        points: 150,
        starts_in_days: 0,
        duration_days: 7,
    },
    SeedChallenge {
        id: "00000000-0000-4000-a000-000000000002",
        title: "Plastic-Free Month",
        description: "Avoid single-use plastic for a whole month.",
        category: "waste",
        points: 400,
        starts_in_days: 3,
        duration_days: 31,
    },
    SeedChallenge {
        id: "00000000-0000-4000-a000-000000000003",
        title: "Meatless Mondays",
        description: "Eat plant-based every Monday for four weeks.",
        category: "food",
        points: 200,
        starts_in_days: 7,
        duration_days: 28,
    },
];

pub static BADGES: [SeedBadge; 3] = [
    SeedBadge {
        id: "00000000-0000-4000-b000-000000000001",
        name: "Seedling",
        description: "Joined Greenstagram.",
        icon: "seedling",
        points_required: 0,
    },
    SeedBadge {
        id: "00000000-0000-4000-b000-000000000002",
        name: "Tree Hugger",
        description: "Earned 500 eco points.",
        icon: "tree",
        points_required: 500,
    },
    SeedBadge {
        id: "00000000-0000-4000-b000-000000000003",
        name: "Planet Guardian",
        description: "Earned 2000 eco points.",
        icon: "globe",
        points_required: 2000,
    },
];

pub static QUOTES: [SeedQuote; 3] = [
    SeedQuote {
        id: "00000000-0000-4000-c000-000000000001",
        text: "The greatest threat to our planet is the belief that someone else will save it.",
        author: "Robert Swan",
    },
    SeedQuote {
        id: "00000000-0000-4000-c000-000000000002",
        text: "We do not inherit the earth from our ancestors, we borrow it from our children.",
        author: "Native American proverb",
    },
    SeedQuote {
        id: "00000000-0000-4000-c000-000000000003",
        text: "What we are doing to the forests of the world is but a mirror reflection of what we are doing to ourselves.",
        author: "Mahatma Gandhi",
    },
];

pub fn welcome_notification(user: &SeedUser) -> CreateNotificationDto {
    CreateNotificationDto {
        user_id: user.id.to_string(),
        kind: "welcome".to_string(),
        title: "Welcome to Greenstagram".to_string(),
        message: format!(
            "Hi {}, your first challenge is waiting for you.",
            user.username
        ),
        data: Some(json!({ "challengeId": CHALLENGES[0].id })),
    }
}
