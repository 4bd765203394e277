use nalgebra::Vector3;

use crate::model::Model;
use crate::presets::{GGTauCircumstellarDisk, GGTauDisk};
use units::Length;

fn au(value: f64) -> f64 {
    Length::from_au(value).to_m()
}

#[test]
fn circumbinary_ring_carries_density() {
    let model = GGTauDisk::new();

    let ring = model.gas_density(&Vector3::new(au(200.0), 0.0, 0.0));
    assert!(ring.total() > 0.0);
    assert_eq!(ring.shape(), vec![1]);
}

#[test]
fn cavity_between_stars_and_ring_is_empty() {
    let model = GGTauDisk::new();

    // 100 au lies outside every circumstellar disk and inside the ring edge
    let cavity = model.gas_density(&Vector3::new(au(100.0), 0.0, 0.0));
    assert!(cavity.is_zero());

    // Beyond the ring's outer edge
    let outside = model.gas_density(&Vector3::new(au(280.0), 0.0, 0.0));
    assert!(outside.is_zero());
}

#[test]
fn circumstellar_disk_sits_at_its_star() {
    let model = GGTauDisk::new();

    // Aa sits 18 au from the barycenter along -y; 3 au beside it lies inside
    // its 7 au disk.
    let near_aa = model.gas_density(&Vector3::new(au(3.0), au(-18.0), 0.0));
    assert!(near_aa.total() > 0.0);

    // The same offset along +y lands between the Ab1/Ab2 disks (2.25 au away
    // each) and carries their density.
    let near_ab = model.gas_density(&Vector3::new(au(1.0), au(18.0), 0.0));
    assert!(near_ab.total() > 0.0);
}

#[test]
fn tapered_ring_shoulder_is_suppressed() {
    let model = GGTauDisk::new();

    // Inside the 190 au taper edge the ring density rolls off steeply
    let shoulder = model.gas_density(&Vector3::new(au(183.0), 0.0, 0.0));
    let body = model.gas_density(&Vector3::new(au(200.0), 0.0, 0.0));
    assert!(shoulder.total() < body.total());
}

#[test]
fn single_circumstellar_disk_has_hard_edges() {
    let model = GGTauCircumstellarDisk::new();

    let inside = model.gas_density(&Vector3::new(au(1.0), 0.0, 0.0));
    assert!(inside.total() > 0.0);

    let beyond = model.gas_density(&Vector3::new(au(2.5), 0.0, 0.0));
    assert!(beyond.is_zero());

    let within_cavity = model.gas_density(&Vector3::new(au(0.05), 0.0, 0.0));
    assert!(within_cavity.is_zero());
}
