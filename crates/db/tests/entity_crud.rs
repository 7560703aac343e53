//! Integration tests for repository CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Create and read back scientists, planets and missions
//! - Cascade delete from scientists and planets
//! - Unique and foreign key constraints
//! - Derived scientist <-> planet views through missions

use cosmic_db::models::mission::CreateMission;
use cosmic_db::models::planet::CreatePlanet;
use cosmic_db::models::scientist::{CreateScientist, UpdateScientist};
use cosmic_db::repositories::{MissionRepo, PlanetRepo, ScientistRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_scientist(name: &str) -> CreateScientist {
    CreateScientist {
        name: Some(name.to_string()),
        field_of_study: Some("Astrophysics".to_string()),
        avatar: None,
    }
}

fn new_planet(name: &str) -> CreatePlanet {
    CreatePlanet {
        name: Some(name.to_string()),
        distance_from_earth: Some("4 ly".to_string()),
        nearest_star: Some("Proxima Centauri".to_string()),
        image: None,
    }
}

fn new_mission(name: &str, scientist_id: i64, planet_id: i64) -> CreateMission {
    CreateMission {
        name: Some(name.to_string()),
        scientist_id: Some(scientist_id),
        planet_id: Some(planet_id),
    }
}

// ---------------------------------------------------------------------------
// Test: Create and read back
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_scientist(pool: PgPool) {
    let created = ScientistRepo::create(&pool, &new_scientist("Vera Rubin"))
        .await
        .unwrap();
    assert_eq!(created.name, "Vera Rubin");
    assert_eq!(created.field_of_study, "Astrophysics");
    assert!(created.avatar.is_none());

    let found = ScientistRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("scientist should exist");
    assert_eq!(found.id, created.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_ordered_by_id(pool: PgPool) {
    let a = ScientistRepo::create(&pool, &new_scientist("A")).await.unwrap();
    let b = ScientistRepo::create(&pool, &new_scientist("B")).await.unwrap();

    let ids: Vec<i64> = ScientistRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_planets_list_empty(pool: PgPool) {
    assert!(PlanetRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_planet_with_all_fields_optional(pool: PgPool) {
    let planet = PlanetRepo::create(&pool, &CreatePlanet::default())
        .await
        .unwrap();
    assert!(planet.name.is_none());
    assert!(PlanetRepo::exists(&pool, planet.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_applies_only_present_fields(pool: PgPool) {
    let created = ScientistRepo::create(&pool, &new_scientist("Original"))
        .await
        .unwrap();

    let patch = UpdateScientist {
        avatar: Some(Some("new.png".to_string())),
        ..Default::default()
    };
    let updated = ScientistRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("row should be updated");

    assert_eq!(updated.name, "Original");
    assert_eq!(updated.field_of_study, "Astrophysics");
    assert_eq!(updated.avatar.as_deref(), Some("new.png"));
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_null_clears_avatar(pool: PgPool) {
    let mut input = new_scientist("Framed");
    input.avatar = Some("old.png".to_string());
    let created = ScientistRepo::create(&pool, &input).await.unwrap();

    let patch = UpdateScientist {
        avatar: Some(None),
        ..Default::default()
    };
    let updated = ScientistRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("row should be updated");

    assert_eq!(updated.name, "Framed");
    assert!(updated.avatar.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_returns_none(pool: PgPool) {
    let result = ScientistRepo::update(&pool, 999_999, &UpdateScientist::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Test: Delete and cascade
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_returns_false(pool: PgPool) {
    assert!(!ScientistRepo::delete(&pool, 999_999).await.unwrap());
    assert!(!PlanetRepo::delete(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cascade_delete_scientist(pool: PgPool) {
    let scientist = ScientistRepo::create(&pool, &new_scientist("Cascade"))
        .await
        .unwrap();
    let planet = PlanetRepo::create(&pool, &new_planet("Kepler-22b"))
        .await
        .unwrap();
    let mission = MissionRepo::create(&pool, &new_mission("Survey", scientist.id, planet.id))
        .await
        .unwrap();

    assert!(ScientistRepo::delete(&pool, scientist.id).await.unwrap());

    assert!(MissionRepo::find_by_id(&pool, mission.id)
        .await
        .unwrap()
        .is_none());
    // The planet side of the join is untouched.
    assert!(PlanetRepo::exists(&pool, planet.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cascade_delete_planet(pool: PgPool) {
    let scientist = ScientistRepo::create(&pool, &new_scientist("Keeper"))
        .await
        .unwrap();
    let planet = PlanetRepo::create(&pool, &new_planet("Doomed"))
        .await
        .unwrap();
    let other = PlanetRepo::create(&pool, &new_planet("Safe")).await.unwrap();
    MissionRepo::create(&pool, &new_mission("One", scientist.id, planet.id))
        .await
        .unwrap();
    let kept = MissionRepo::create(&pool, &new_mission("Two", scientist.id, other.id))
        .await
        .unwrap();

    assert!(PlanetRepo::delete(&pool, planet.id).await.unwrap());

    assert!(MissionRepo::list_by_planet(&pool, planet.id)
        .await
        .unwrap()
        .is_empty());
    let remaining = MissionRepo::list_by_scientist(&pool, scientist.id)
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
}

// ---------------------------------------------------------------------------
// Test: Constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_scientist_name_rejected_by_constraint(pool: PgPool) {
    ScientistRepo::create(&pool, &new_scientist("Unique"))
        .await
        .unwrap();
    let result = ScientistRepo::create(&pool, &new_scientist("Unique")).await;
    assert!(result.is_err(), "Duplicate scientist name should fail");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fk_violation_mission_bad_scientist(pool: PgPool) {
    let planet = PlanetRepo::create(&pool, &new_planet("Lonely"))
        .await
        .unwrap();
    let result = MissionRepo::create(&pool, &new_mission("Ghost", 999_999, planet.id)).await;
    assert!(
        result.is_err(),
        "FK violation should fail for non-existent scientist_id"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_pairs_allowed(pool: PgPool) {
    let scientist = ScientistRepo::create(&pool, &new_scientist("Repeat"))
        .await
        .unwrap();
    let planet = PlanetRepo::create(&pool, &new_planet("Mars")).await.unwrap();

    MissionRepo::create(&pool, &new_mission("First", scientist.id, planet.id))
        .await
        .unwrap();
    MissionRepo::create(&pool, &new_mission("Second", scientist.id, planet.id))
        .await
        .unwrap();

    let missions = MissionRepo::list_by_scientist(&pool, scientist.id)
        .await
        .unwrap();
    assert_eq!(missions.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: Derived views through missions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_planets_for_scientist_are_distinct(pool: PgPool) {
    let scientist = ScientistRepo::create(&pool, &new_scientist("Explorer"))
        .await
        .unwrap();
    let mars = PlanetRepo::create(&pool, &new_planet("Mars")).await.unwrap();
    let venus = PlanetRepo::create(&pool, &new_planet("Venus")).await.unwrap();
    PlanetRepo::create(&pool, &new_planet("Unvisited"))
        .await
        .unwrap();

    for (name, planet_id) in [("A", mars.id), ("B", mars.id), ("C", venus.id)] {
        MissionRepo::create(&pool, &new_mission(name, scientist.id, planet_id))
            .await
            .unwrap();
    }

    let ids: Vec<i64> = PlanetRepo::list_for_scientist(&pool, scientist.id)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![mars.id, venus.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_scientists_for_planet_are_distinct(pool: PgPool) {
    let curie = ScientistRepo::create(&pool, &new_scientist("Curie"))
        .await
        .unwrap();
    let sagan = ScientistRepo::create(&pool, &new_scientist("Sagan"))
        .await
        .unwrap();
    let planet = PlanetRepo::create(&pool, &new_planet("Titan")).await.unwrap();

    for (name, scientist_id) in [("A", curie.id), ("B", sagan.id), ("C", sagan.id)] {
        MissionRepo::create(&pool, &new_mission(name, scientist_id, planet.id))
            .await
            .unwrap();
    }

    let names: Vec<String> = ScientistRepo::list_for_planet(&pool, planet.id)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Curie".to_string(), "Sagan".to_string()]);
}
