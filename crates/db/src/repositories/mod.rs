//! Repository layer: one zero-sized struct per table, each exposing async
//! functions that take a `&PgPool`.

pub mod mission_repo;
pub mod planet_repo;
pub mod scientist_repo;

pub use mission_repo::MissionRepo;
pub use planet_repo::PlanetRepo;
pub use scientist_repo::ScientistRepo;
