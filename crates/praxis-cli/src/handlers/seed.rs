use anyhow::Result;
use praxis_types::{ActorId, RawItem, Resource};
use serde_json::json;
use tracing::info;

use super::HandlerContext;
use crate::presentation::presenters;

const PRACTITIONERS: [(&str, &str, &str); 3] = [
    ("p-1", "Maya Lindqvist", "Yoga"),
    ("p-2", "Tomas Okafor", "Meditation"),
    ("p-3", "Ines Duarte", "Breathwork"),
];

const OFFERINGS: [(&str, &str, &str); 12] = [
    ("Vinyasa Flow", "Yoga", "A steady, breath-led flow that builds heat and focus."),
    ("Yin Yoga", "Yoga", "Long, quiet holds that open the hips and calm the nervous system."),
    ("Guided Body Scan", "Meditation", "A slow body scan to release tension and settle attention."),
    ("Box Breathing Basics", "Breathwork", "Learn square breathing to steady the mind under pressure."),
    ("Sound Bath", "Sound Healing", "Crystal bowls and gongs for deep rest and recovery."),
    ("Reiki Session", "Energy Work", "Hands-on energy balancing in a warm, quiet room."),
    ("Morning Mobility", "Movement", "Gentle joint mobility to start the day without stiffness."),
    ("Loving-Kindness Practice", "Meditation", "Metta phrases that cultivate warmth toward self and others."),
    ("Restorative Yoga", "Yoga", "Fully supported poses with bolsters for complete release."),
    ("Wim Hof Style Breathing", "Breathwork", "Rounds of power breathing followed by calm retention."),
    ("Qi Gong Foundations", "Movement", "Flowing standing forms that cultivate balance and energy."),
    ("Yoga Nidra", "Meditation", "Guided yogic sleep for profound relaxation."),
];

/// Deterministic service catalog mixing the current and legacy item shapes.
fn service(index: usize) -> (ActorId, RawItem) {
    let (title, category, description) = OFFERINGS[index % OFFERINGS.len()];
    let round = index / OFFERINGS.len();
    let title = if round == 0 {
        title.to_string()
    } else {
        format!("{} {}", title, round + 1)
    };
    let owner = ActorId::new(PRACTITIONERS[index % PRACTITIONERS.len()].0);
    let cents = 2500 + (index as i64 % 8) * 1000;
    let minutes = [45, 60, 75, 90][index % 4];
    let created_at = format!("2024-03-{:02}T{:02}:00:00Z", 1 + index / 24 % 28, 8 + index % 12);
    let is_draft = index % 5 == 4;

    let body = if index % 3 == 2 {
        json!({
            "name": title,
            "summary": description,
            "categoryName": category,
            "price": format!("${}.{:02}", cents / 100, cents % 100),
            "durationMinutes": minutes.to_string(),
            "isPublished": !is_draft,
            "createdAt": created_at,
            "location": "Studio B",
        })
    } else {
        json!({
            "title": title,
            "description": description,
            "category": category,
            "price_cents": cents,
            "duration_minutes": minutes,
            "status": if is_draft { "draft" } else { "active" },
            "created_at": created_at,
            "location": "Main Hall",
        })
    };
    (owner, RawItem::from_value(body))
}

fn stream_posts() -> Vec<(ActorId, RawItem)> {
    let posts = [
        ("Five minutes of stillness", "p-2", "published"),
        ("Why we breathe through the nose", "p-3", "published"),
        ("Studio schedule for spring", "p-1", "draft"),
        ("Sunrise session recording", "p-1", "scheduled"),
        ("Notes from a silent retreat", "p-2", "archived"),
        ("Breath holds and safety", "p-3", "unpublished"),
    ];
    posts
        .iter()
        .enumerate()
        .map(|(i, (title, owner, status))| {
            let body = json!({
                "title": title,
                "content": format!("{} - a short read for the community.", title),
                "category": "Journal",
                "status": status,
                "created_at": format!("2024-04-{:02}T07:30:00Z", i + 1),
            });
            (ActorId::new(*owner), RawItem::from_value(body))
        })
        .collect()
}

fn bookings() -> Vec<(ActorId, RawItem)> {
    // Remotes report booking states under several historical codes
    let statuses = ["confirmed", "pending", "cancelled", "no-show", "completed", "accepted", "canceled", "requested"];
    statuses
        .iter()
        .enumerate()
        .map(|(i, status)| {
            let (owner, _, _) = PRACTITIONERS[i % PRACTITIONERS.len()];
            let (offering, category, _) = OFFERINGS[i % OFFERINGS.len()];
            let body = json!({
                "service": { "name": offering },
                "client_name": format!("Client {}", i + 1),
                "category": category,
                "status": status,
                "price_cents": 3500 + (i as i64) * 500,
                "duration_minutes": 60,
                "created_at": format!("2024-05-{:02}T12:00:00Z", i + 1),
            });
            (ActorId::new(owner), RawItem::from_value(body))
        })
        .collect()
}

fn practitioners() -> Vec<(ActorId, RawItem)> {
    PRACTITIONERS
        .iter()
        .enumerate()
        .map(|(i, (id, name, speciality))| {
            let body = json!({
                "display_name": name,
                "bio": format!("{} teacher with a focus on accessible practice.", speciality),
                "category": speciality,
                "is_active": true,
                "avatar_url": format!("https://images.example.com/practitioners/{}.jpg", id),
                "created_at": format!("2023-11-{:02}T09:00:00Z", i + 1),
            });
            (ActorId::new(*id), RawItem::from_value(body))
        })
        .collect()
}

pub async fn handle(ctx: &HandlerContext, reset: bool, count: u32) -> Result<()> {
    let backend = ctx.backend()?;

    let catalog: Vec<(Resource, Vec<(ActorId, RawItem)>)> = vec![
        (Resource::Services, (0..count as usize).map(service).collect()),
        (Resource::StreamPosts, stream_posts()),
        (Resource::Bookings, bookings()),
        (Resource::Practitioners, practitioners()),
    ];

    let created = backend.with_db(|db| {
        if reset {
            db.reset()?;
        }
        let mut created = Vec::new();
        for (resource, items) in catalog {
            let n = items.len();
            for (owner, body) in items {
                db.insert_item(resource, Some(&owner), body)?;
            }
            created.push((resource, n));
        }
        Ok(created)
    })?;

    info!(reset, services = count, "seeded store");
    ctx.render(presenters::present_seed(reset, created, &ctx.paths))
}
