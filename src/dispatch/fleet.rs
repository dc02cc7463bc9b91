//! Working fleet state owned by one planning pass.

use std::collections::BTreeMap;

use crate::models::{Point, Vehicle};

/// Private copy of the fleet, keyed and iterated by vehicle ID.
///
/// Built fresh for every pass so the caller's vehicles are never touched.
#[derive(Debug, Clone)]
pub(crate) struct FleetState {
    vehicles: BTreeMap<String, Vehicle>,
}

impl FleetState {
    /// Copies `vehicles` into a new working fleet.
    ///
    /// A repeated ID replaces the earlier record.
    pub(crate) fn from_vehicles(vehicles: &[Vehicle]) -> Self {
        let mut map = BTreeMap::new();
        for v in vehicles {
            if map.insert(v.id().to_string(), v.clone()).is_some() {
                log::warn!("duplicate vehicle id {}; keeping the last record", v.id());
            }
        }
        Self { vehicles: map }
    }

    /// Vehicles in ascending ID order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    /// Moves vehicle `id` to `location`, busy until `until_hour`.
    ///
    /// `id` must come from this fleet.
    pub(crate) fn commit(&mut self, id: &str, location: Point, until_hour: f64) {
        let vehicle = self.vehicles.get_mut(id);
        debug_assert!(vehicle.is_some(), "commit to unknown vehicle {id}");
        if let Some(v) = vehicle {
            v.commit(location, until_hour);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.vehicles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: &str, capacity: f64) -> Vehicle {
        Vehicle::new(id, Point::new(0.0, 0.0), capacity, 30.0)
    }

    #[test]
    fn test_iterates_by_id() {
        let fleet = FleetState::from_vehicles(&[
            vehicle("v3", 1.0),
            vehicle("v1", 1.0),
            vehicle("v2", 1.0),
        ]);
        let ids: Vec<&str> = fleet.iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec!["v1", "v2", "v3"]);
    }

    #[test]
    fn test_duplicate_id_keeps_last() {
        let fleet = FleetState::from_vehicles(&[vehicle("v1", 10.0), vehicle("v1", 99.0)]);
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet.iter().next().map(|v| v.capacity()), Some(99.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unknown vehicle")]
    fn test_commit_unknown_vehicle_panics_in_debug() {
        let mut fleet = FleetState::from_vehicles(&[vehicle("v1", 10.0)]);
        fleet.commit("missing", Point::new(5.0, 5.0), 3.0);
    }

    #[test]
    fn test_commit_leaves_input_untouched() {
        let input = vec![vehicle("v1", 10.0)];
        let mut fleet = FleetState::from_vehicles(&input);
        fleet.commit("v1", Point::new(5.0, 5.0), 3.0);

        let moved = fleet.iter().next().expect("one vehicle");
        assert_eq!(moved.location(), Point::new(5.0, 5.0));
        assert_eq!(moved.available_from_hour(), 3.0);
        assert_eq!(input[0].location(), Point::new(0.0, 0.0));
        assert_eq!(input[0].available_from_hour(), 0.0);
    }
}
