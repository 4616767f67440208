//! Demo declarations served by the in-memory backend.

use chrono::{DateTime, Utc};

use crate::features::pollutions::models::{Pollution, PollutionType};

fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn declaration(
    id: i32,
    title: &str,
    pollution_type: PollutionType,
    description: &str,
    observed_at: &str,
    location: &str,
    latitude: f64,
    longitude: f64,
    photo_url: Option<&str>,
) -> Pollution {
    let observed_at = timestamp(observed_at);
    Pollution {
        id,
        title: title.to_string(),
        pollution_type,
        description: description.to_string(),
        observed_at,
        location: location.to_string(),
        latitude,
        longitude,
        photo_url: photo_url.map(str::to_string),
        created_at: observed_at,
        updated_at: observed_at,
    }
}

/// Six declarations with ids 1..=6
pub fn demo_pollutions() -> Vec<Pollution> {
    vec![
        declaration(
            1,
            "Oil spill in the Seine",
            PollutionType::Water,
            "Large engine oil spill seen near the Pont Neuf. The slick covers about 100 metres and is affecting local wildlife.",
            "2024-01-15T14:30:00Z",
            "Seine, Pont Neuf, Paris 1er",
            48.8566,
            2.3422,
            Some("https://images.unsplash.com/photo-1611273426858-450d8e3c9fce.jpg?w=400"),
        ),
        declaration(
            2,
            "Illegal industrial waste dump",
            PollutionType::IllegalDumping,
            "Clandestine dump of barrels holding unidentified chemicals found in a wooded area.",
            "2024-01-20T09:15:00Z",
            "Bois de Vincennes, Paris 12e",
            48.8278,
            2.4394,
            Some("https://images.unsplash.com/photo-1532996122724-e3c354a0b15b.jpg?w=400"),
        ),
        declaration(
            3,
            "Plastic waste on the beach",
            PollutionType::Plastic,
            "Heavy build-up of plastic waste on the shore after a storm, mostly bottles, bags and food packaging.",
            "2024-01-25T16:45:00Z",
            "Deauville beach, Calvados",
            49.3598,
            0.0748,
            Some("https://images.unsplash.com/photo-1621451537084-482c73073a0f.jpg?w=400"),
        ),
        declaration(
            4,
            "Toxic fumes from a factory",
            PollutionType::Air,
            "Abnormal black, foul-smelling smoke from an industrial site, causing breathing irritation for residents.",
            "2024-02-01T07:20:00Z",
            "Roubaix industrial zone, Lille metropolitan area",
            50.6942,
            3.1746,
            None,
        ),
        declaration(
            5,
            "Chemical spill on the motorway",
            PollutionType::Chemical,
            "Transport accident that spilled chemicals onto the road and into the drains.",
            "2024-02-05T11:30:00Z",
            "A1 motorway, Lille-Sud exit",
            50.5736,
            3.0635,
            Some("https://images.unsplash.com/photo-1578662996442-48f60103fc96.jpg?w=400"),
        ),
        declaration(
            6,
            "Night-time construction noise",
            PollutionType::Other,
            "Construction work carried out outside permitted hours, causing significant noise for the neighbourhood.",
            "2024-02-10T23:15:00Z",
            "La Défense, Puteaux",
            48.8918,
            2.2364,
            None,
        ),
    ]
}
