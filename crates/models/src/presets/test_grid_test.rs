use nalgebra::Vector3;

use crate::model::Model;
use crate::presets::TestGrid;
use units::Length;

fn au(value: f64) -> f64 {
    Length::from_au(value).to_m()
}

#[test]
fn origin_fills_only_the_first_composition() {
    let model = TestGrid::new();
    let table = model.gas_density(&Vector3::zeros());

    // The origin is inside half the outer radius: first sub-table nonzero,
    // second exactly zero.
    assert!(table.value(0, 0).unwrap() > 0.0);
    assert_eq!(table.value(1, 0), Some(0.0));
}

#[test]
fn outer_zone_fills_only_the_second_composition() {
    let model = TestGrid::new();
    let table = model.gas_density(&Vector3::new(au(80.0), 0.0, 0.0));

    assert_eq!(table.value(0, 0), Some(0.0));
    assert!(table.value(1, 0).unwrap() > 0.0);
}

#[test]
fn far_outside_both_compositions_are_zero() {
    let model = TestGrid::new();
    let table = model.gas_density(&Vector3::new(au(200.0), 0.0, 0.0));

    assert!(table.is_zero());
}

#[test]
fn table_shape_is_constant_across_positions() {
    let model = TestGrid::new();

    for distance_au in [0.0, 10.0, 49.9, 50.1, 99.0, 500.0] {
        let table = model.gas_density(&Vector3::new(au(distance_au), 0.0, 0.0));
        assert_eq!(table.shape(), vec![1, 1]);
    }

    // The gas-mass table shares the density-table shape
    assert_eq!(model.parameters().gas_mass.shape(), vec![1, 1]);
}

#[test]
fn dust_id_switches_at_half_the_outer_radius() {
    let model = TestGrid::new();

    assert_eq!(model.dust_id(&Vector3::new(au(10.0), 0.0, 0.0)), 0);
    assert_eq!(model.dust_id(&Vector3::new(au(60.0), 0.0, 0.0)), 1);
    // The boundary itself belongs to the outer zone
    assert_eq!(model.dust_id(&Vector3::new(au(50.0), 0.0, 0.0)), 1);
}

#[test]
fn grain_size_limits_follow_the_zones() {
    let model = TestGrid::new();
    let inner = Vector3::new(au(10.0), 0.0, 0.0);
    let outer = Vector3::new(au(60.0), 0.0, 0.0);

    // 5 nm lower limit everywhere
    assert_eq!(model.dust_min_size(&inner), Some(Length::from_nanometers(5.0)));
    assert_eq!(model.dust_min_size(&outer), Some(Length::from_nanometers(5.0)));

    // 0.25 µm in the inner zone, 1 mm outside
    assert_eq!(model.dust_max_size(&inner), Some(Length::from_microns(0.25)));
    assert_eq!(model.dust_max_size(&outer), Some(Length::from_m(0.001)));
}
