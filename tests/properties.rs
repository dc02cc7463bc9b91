use std::collections::HashSet;

use proptest::prelude::*;
use u_dispatch::dispatch::plan;
use u_dispatch::evaluation::score_candidate;
use u_dispatch::models::{Order, Point, Vehicle};

fn point() -> impl Strategy<Value = Point> {
    (30.0..32.0f64, 120.0..122.0f64).prop_map(|(lat, lng)| Point::new(lat, lng))
}

fn orders() -> impl Strategy<Value = Vec<Order>> {
    prop::collection::vec((point(), point(), 1.0..500.0f64, 1u8..=5, 0.0..12.0f64), 0..25).prop_map(
        |raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (pickup, dropoff, weight, priority, deadline))| {
                    Order::new(format!("o{i}"), pickup, dropoff, weight, priority, deadline)
                })
                .collect()
        },
    )
}

fn vehicles() -> impl Strategy<Value = Vec<Vehicle>> {
    prop::collection::vec((point(), 10.0..400.0f64, 0.5..80.0f64, 0.0..4.0f64), 0..8).prop_map(
        |raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (loc, capacity, speed, free_at))| {
                    Vehicle::new(format!("v{i}"), loc, capacity, speed)
                        .with_available_from_hour(free_at)
                })
                .collect()
        },
    )
}

proptest! {
    #[test]
    fn every_order_lands_exactly_once(orders in orders(), vehicles in vehicles()) {
        let result = plan(&orders, &vehicles);
        prop_assert_eq!(result.num_assigned() + result.num_unassigned(), orders.len());

        let assigned: HashSet<&str> =
            result.assignments().iter().map(|a| a.order_id.as_str()).collect();
        let unassigned: HashSet<&str> =
            result.unassigned_orders().iter().map(String::as_str).collect();
        prop_assert_eq!(assigned.len(), result.num_assigned());
        prop_assert_eq!(unassigned.len(), result.num_unassigned());
        prop_assert!(assigned.is_disjoint(&unassigned));
        for o in &orders {
            prop_assert!(assigned.contains(o.id()) || unassigned.contains(o.id()));
        }
    }

    #[test]
    fn orders_heavier_than_every_vehicle_are_unassigned(
        orders in orders(),
        vehicles in vehicles()
    ) {
        let result = plan(&orders, &vehicles);
        let max_capacity = vehicles
            .iter()
            .map(Vehicle::capacity)
            .fold(f64::NEG_INFINITY, f64::max);
        for o in orders.iter().filter(|o| o.weight() > max_capacity) {
            prop_assert!(result.unassigned_orders().iter().any(|id| id == o.id()));
        }
    }

    #[test]
    fn repeated_passes_are_identical(orders in orders(), vehicles in vehicles()) {
        prop_assert_eq!(plan(&orders, &vehicles), plan(&orders, &vehicles));
    }

    #[test]
    fn input_order_does_not_change_plan(orders in orders(), vehicles in vehicles()) {
        let mut reversed_orders = orders.clone();
        reversed_orders.reverse();
        let mut reversed_vehicles = vehicles.clone();
        reversed_vehicles.reverse();
        prop_assert_eq!(plan(&orders, &vehicles), plan(&reversed_orders, &reversed_vehicles));
    }

    #[test]
    fn breach_flag_matches_eta(orders in orders(), vehicles in vehicles()) {
        let result = plan(&orders, &vehicles);
        for a in result.assignments() {
            let order = orders.iter().find(|o| o.id() == a.order_id).expect("known order");
            if a.deadline_breached {
                prop_assert!(a.eta_hour >= order.deadline_hour() - 0.005);
            } else {
                prop_assert!(a.eta_hour <= order.deadline_hour() + 0.005);
            }
        }
    }

    #[test]
    fn vehicle_availability_never_goes_back(orders in orders(), vehicles in vehicles()) {
        let result = plan(&orders, &vehicles);
        for v in &vehicles {
            let etas: Vec<f64> = result.assignments_of(v.id()).map(|a| a.eta_hour).collect();
            prop_assert!(etas.windows(2).all(|w| w[0] <= w[1]));
            if let Some(first) = etas.first() {
                prop_assert!(*first >= v.available_from_hour() - 0.005);
            }
        }
    }

    #[test]
    fn higher_priority_never_scores_lower(
        pickup in point(),
        dropoff in point(),
        location in point(),
        weight in 1.0..100.0f64,
        priority in 1u8..5,
        deadline in 0.0..12.0f64,
    ) {
        let vehicle = Vehicle::new("v", location, 100.0, 40.0);
        let low = Order::new("o", pickup, dropoff, weight, priority, deadline);
        let high = Order::new("o", pickup, dropoff, weight, priority + 1, deadline);
        let a = score_candidate(&low, &vehicle).expect("feasible");
        let b = score_candidate(&high, &vehicle).expect("feasible");
        prop_assert!(b.score >= a.score);
        prop_assert_eq!(a.eta_hour, b.eta_hour);
    }
}
