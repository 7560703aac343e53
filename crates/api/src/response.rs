//! Response shaping for API handlers.
//!
//! Each endpoint serializes an explicit view instead of the raw row, so the
//! nested data it exposes is fixed here:
//!
//! - list/create/patch scientist: flat [`ScientistView`], no timestamps
//! - get scientist: [`ScientistDetailView`], the flat fields plus its missions
//!   (without nested scientist/planet) and the distinct planets they reach
//! - list planets: flat [`PlanetView`], no timestamps

use cosmic_core::types::DbId;
use cosmic_db::models::mission::Mission;
use cosmic_db::models::planet::Planet;
use cosmic_db::models::scientist::Scientist;
use serde::Serialize;

/// A scientist without relationships or timestamps.
#[derive(Debug, Serialize)]
pub struct ScientistView {
    pub id: DbId,
    pub name: String,
    pub field_of_study: String,
    pub avatar: Option<String>,
}

impl From<Scientist> for ScientistView {
    fn from(s: Scientist) -> Self {
        Self {
            id: s.id,
            name: s.name,
            field_of_study: s.field_of_study,
            avatar: s.avatar,
        }
    }
}

/// A planet without relationships or timestamps.
#[derive(Debug, Serialize)]
pub struct PlanetView {
    pub id: DbId,
    pub name: Option<String>,
    pub distance_from_earth: Option<String>,
    pub nearest_star: Option<String>,
    pub image: Option<String>,
}

impl From<Planet> for PlanetView {
    fn from(p: Planet) -> Self {
        Self {
            id: p.id,
            name: p.name,
            distance_from_earth: p.distance_from_earth,
            nearest_star: p.nearest_star,
            image: p.image,
        }
    }
}

/// A scientist with its missions and the planets they reach.
///
/// Missions serialize as their own row (ids and timestamps), never expanding
/// back into the scientist or planet.
#[derive(Debug, Serialize)]
pub struct ScientistDetailView {
    #[serde(flatten)]
    pub scientist: ScientistView,
    pub missions: Vec<Mission>,
    pub planets: Vec<PlanetView>,
}

impl ScientistDetailView {
    pub fn new(scientist: Scientist, missions: Vec<Mission>, planets: Vec<Planet>) -> Self {
        Self {
            scientist: scientist.into(),
            missions,
            planets: planets.into_iter().map(PlanetView::from).collect(),
        }
    }
}
