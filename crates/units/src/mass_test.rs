mod tests {
    use approx::assert_relative_eq;

    use crate::mass::{Mass, SOLAR_MASS_KG};

    #[test]
    fn test_mass_conversions() {
        // Test solar mass to kg conversion
        let sun = Mass::from_solar_masses(1.0);
        assert_relative_eq!(sun.to_kg(), SOLAR_MASS_KG);

        // Test grams to kg conversion
        let kilo = Mass::from_grams(1000.0);
        assert_relative_eq!(kilo.to_kg(), 1.0);

        // Test round trip
        let original = 1e-2;
        let mass = Mass::from_solar_masses(original);
        let round_trip = Mass::from_kg(mass.to_kg()).to_solar_masses();
        assert_relative_eq!(round_trip, original);
    }

    #[test]
    fn test_mass_arithmetic_operations() {
        let mass1 = Mass::from_solar_masses(4.0);
        let mass2 = Mass::from_solar_masses(1.0);

        assert_relative_eq!((mass1 + mass2).to_solar_masses(), 5.0);
        assert_relative_eq!((mass1 - mass2).to_solar_masses(), 3.0);

        let scaled = mass1 * 0.5;
        assert_relative_eq!(scaled.to_solar_masses(), 2.0);
        let scaled = 0.5 * mass1;
        assert_relative_eq!(scaled.to_solar_masses(), 2.0);

        let divided = mass1 / 4.0;
        assert_relative_eq!(divided.to_solar_masses(), 1.0);

        // Mass / Mass is a dimensionless ratio
        assert_relative_eq!(mass1 / mass2, 4.0);
    }

    #[test]
    fn test_zero_mass() {
        assert_relative_eq!(Mass::zero().to_kg(), 0.0);
    }
}
