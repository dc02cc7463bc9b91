//! Synthetic dispatch batches for demos, tests, and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Order, Point, Vehicle, MAX_PRIORITY, MIN_PRIORITY};

/// A small hand-written batch: three orders, two vehicles around Shanghai.
///
/// # Examples
///
/// ```
/// use u_dispatch::instances::sample_batch;
/// use u_dispatch::dispatch::plan;
///
/// let (orders, vehicles) = sample_batch();
/// let result = plan(&orders, &vehicles);
/// assert_eq!(result.num_assigned() + result.num_unassigned(), orders.len());
/// ```
pub fn sample_batch() -> (Vec<Order>, Vec<Vehicle>) {
    let orders = vec![
        Order::new("O-1001", Point::new(31.23, 121.47), Point::new(31.30, 121.55), 120.0, 5, 3.0),
        Order::new("O-1002", Point::new(31.22, 121.45), Point::new(31.18, 121.40), 80.0, 3, 4.0),
        Order::new("O-1003", Point::new(31.25, 121.42), Point::new(31.35, 121.49), 250.0, 4, 5.0),
    ];
    let vehicles = vec![
        Vehicle::new("V-1", Point::new(31.21, 121.46), 300.0, 45.0),
        Vehicle::new("V-2", Point::new(31.30, 121.52), 150.0, 40.0),
    ];
    (orders, vehicles)
}

/// Seeded generator of random batches scattered around a centre point.
///
/// The same seed and settings always produce the same batch.
///
/// # Examples
///
/// ```
/// use u_dispatch::instances::InstanceGenerator;
///
/// let generator = InstanceGenerator::default().with_orders(20).with_vehicles(4);
/// let (orders, vehicles) = generator.generate(42);
/// assert_eq!(orders.len(), 20);
/// assert_eq!(vehicles.len(), 4);
/// assert_eq!(generator.generate(42), (orders, vehicles));
/// ```
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    /// Centre of the service area.
    pub center: Point,
    /// Half-width of the square service area, in degrees.
    pub radius_deg: f64,
    /// Number of orders per batch.
    pub num_orders: usize,
    /// Number of vehicles per batch.
    pub num_vehicles: usize,
    /// Order weights are drawn from `[min, max)`.
    pub weight_range: (f64, f64),
    /// Vehicle capacities are drawn from `[min, max)`.
    pub capacity_range: (f64, f64),
    /// Vehicle speeds are drawn from `[min, max)`.
    pub speed_range: (f64, f64),
    /// Order deadlines are drawn from `[0.5, horizon)` hours.
    pub deadline_horizon: f64,
}

impl Default for InstanceGenerator {
    fn default() -> Self {
        Self {
            center: Point::new(31.23, 121.47),
            radius_deg: 0.15,
            num_orders: 50,
            num_vehicles: 10,
            weight_range: (10.0, 300.0),
            capacity_range: (100.0, 400.0),
            speed_range: (25.0, 60.0),
            deadline_horizon: 8.0,
        }
    }
}

impl InstanceGenerator {
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn with_radius_deg(mut self, radius: f64) -> Self {
        self.radius_deg = radius;
        self
    }

    pub fn with_orders(mut self, n: usize) -> Self {
        self.num_orders = n;
        self
    }

    pub fn with_vehicles(mut self, n: usize) -> Self {
        self.num_vehicles = n;
        self
    }

    pub fn with_weight_range(mut self, min: f64, max: f64) -> Self {
        self.weight_range = (min, max);
        self
    }

    pub fn with_capacity_range(mut self, min: f64, max: f64) -> Self {
        self.capacity_range = (min, max);
        self
    }

    pub fn with_deadline_horizon(mut self, hours: f64) -> Self {
        self.deadline_horizon = hours;
        self
    }

    /// Generates one batch from `seed`.
    pub fn generate(&self, seed: u64) -> (Vec<Order>, Vec<Vehicle>) {
        let mut rng = StdRng::seed_from_u64(seed);

        let orders = (0..self.num_orders)
            .map(|i| {
                let pickup = self.random_point(&mut rng);
                let dropoff = self.random_point(&mut rng);
                Order::new(
                    format!("O-{i:04}"),
                    pickup,
                    dropoff,
                    sample(&mut rng, self.weight_range),
                    rng.random_range(MIN_PRIORITY..=MAX_PRIORITY),
                    sample(&mut rng, (0.5, self.deadline_horizon)),
                )
            })
            .collect();

        let vehicles = (0..self.num_vehicles)
            .map(|i| {
                Vehicle::new(
                    format!("V-{i:03}"),
                    self.random_point(&mut rng),
                    sample(&mut rng, self.capacity_range),
                    sample(&mut rng, self.speed_range),
                )
            })
            .collect();

        (orders, vehicles)
    }

    fn random_point<R: Rng>(&self, rng: &mut R) -> Point {
        let r = self.radius_deg;
        let dlat = if r > 0.0 { rng.random_range(-r..r) } else { 0.0 };
        let dlng = if r > 0.0 { rng.random_range(-r..r) } else { 0.0 };
        Point::new(self.center.lat() + dlat, self.center.lng() + dlng)
    }
}

/// Draws from `[min, max)`, or returns `min` for an empty range.
fn sample<R: Rng>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_batch_shape() {
        let (orders, vehicles) = sample_batch();
        assert_eq!(orders.len(), 3);
        assert_eq!(vehicles.len(), 2);
        assert!(orders.iter().all(|o| o.weight() > 0.0));
    }

    #[test]
    fn test_generate_is_seeded() {
        let generator = InstanceGenerator::default();
        assert_eq!(generator.generate(7), generator.generate(7));
        assert_ne!(generator.generate(7).0, generator.generate(8).0);
    }

    #[test]
    fn test_generated_values_in_range() {
        let generator = InstanceGenerator::default()
            .with_orders(200)
            .with_vehicles(30)
            .with_weight_range(5.0, 50.0)
            .with_capacity_range(60.0, 70.0)
            .with_deadline_horizon(4.0);
        let (orders, vehicles) = generator.generate(1);

        for o in &orders {
            assert!((MIN_PRIORITY..=MAX_PRIORITY).contains(&o.priority()));
            assert!(o.weight() >= 5.0 && o.weight() < 50.0);
            assert!(o.deadline_hour() >= 0.5 && o.deadline_hour() < 4.0);
            assert!((o.pickup().lat() - 31.23).abs() <= 0.15 + 1e-9);
        }
        for v in &vehicles {
            assert!(v.capacity() >= 60.0 && v.capacity() < 70.0);
            assert!(v.speed_kmph() >= 25.0);
        }
    }

    #[test]
    fn test_zero_radius_collapses_to_center() {
        let center = Point::new(1.0, 2.0);
        let generator = InstanceGenerator::default()
            .with_center(center)
            .with_radius_deg(0.0)
            .with_orders(3)
            .with_vehicles(1);
        let (orders, vehicles) = generator.generate(3);
        assert!(orders.iter().all(|o| o.pickup() == center && o.dropoff() == center));
        assert_eq!(vehicles[0].location(), center);
    }

    #[test]
    fn test_unique_ids() {
        let (orders, vehicles) = InstanceGenerator::default().generate(5);
        let mut ids: Vec<&str> = orders.iter().map(|o| o.id()).collect();
        ids.dedup();
        assert_eq!(ids.len(), orders.len());
        assert_eq!(vehicles[0].id(), "V-000");
    }
}
