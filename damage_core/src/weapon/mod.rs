//! Weapon reference data - per-category profiles and the overridable table

mod profile;
mod table;

pub use profile::{WeaponProfile, ARCHERY, DAGGER, ONE_HANDED, TWO_HANDED};
pub use table::{ProfileOverride, WeaponOverrides, WeaponTable};
