use float_cmp::{approx_eq, F64Margin};
use num_complex::Complex64;
use rfline::consts::{NEPER_PER_DB, SPEED_OF_LIGHT};
use rfline::prelude::*;
use rfline::waveguide::{
    characteristic_wave_impedance, characteristic_wave_impedance_complex, reflection_coefficient,
    return_loss_db,
};

const DEFAULT_MARGIN: F64Margin = F64Margin {
    epsilon: 1e-10,
    ulps: 4,
};

const RELAXED_MARGIN: F64Margin = F64Margin {
    epsilon: 1e-6,
    ulps: 10,
};

fn wr90() -> (Length, Length) {
    (
        Length::new(22.86e-3),
        Length::new(10.16e-3),
    )
}

#[test]
fn wr90_te10_cutoff() {
    let (a, b) = wr90();
    let fc = cutoff_frequency(a, b, Permittivity::new(1.0), 1, 0).unwrap();

    assert!(approx_eq!(
        f64,
        fc.val() / (SPEED_OF_LIGHT / (2.0 * a.val())),
        1.0,
        DEFAULT_MARGIN
    ));
    assert!((fc.val() * 1e-9 - 6.557).abs() < 1e-3);

    // TE20 sits at twice the TE10 cutoff
    let fc20 = cutoff_frequency(a, b, Permittivity::new(1.0), 2, 0).unwrap();
    assert!(approx_eq!(f64, fc20.val(), 2.0 * fc.val(), RELAXED_MARGIN));

    assert!(matches!(
        cutoff_frequency(a, b, Permittivity::new(1.0), 0, 0),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn dielectric_loss_db_is_neper_conversion() {
    let (a, b) = wr90();
    let f = Frequency::new(10.0e9);
    let tand = LossTangent::new(4e-4);
    let er = Permittivity::new(2.1);

    let np = dielectric_loss(f, tand, a, b, er, 1, 0).unwrap();
    let db = dielectric_loss_db(f, tand, a, b, er, 1, 0).unwrap();
    assert_eq!(db, np.val() / NEPER_PER_DB);

    let lossless = dielectric_loss(f, LossTangent::new(0.0), a, b, er, 1, 0).unwrap();
    assert_eq!(lossless.val(), 0.0);
}

#[test]
fn dielectric_loss_below_cutoff_is_domain_error() {
    let (a, b) = wr90();
    let f = Frequency::new(5.0e9);
    let err = dielectric_loss(f, LossTangent::new(1e-3), a, b, Permittivity::new(1.0), 1, 0)
        .unwrap_err();
    assert!(err.is_domain());
}

#[test]
fn vswr_properties() {
    assert_eq!(vswr(ReflectionCoefficient::new(0.0)).unwrap(), 1.0);

    for &rc in [0.05, 0.2, 0.5, 0.9].iter() {
        let pos = vswr(ReflectionCoefficient::new(rc)).unwrap();
        let neg = vswr(ReflectionCoefficient::new(-rc)).unwrap();
        assert_eq!(pos, neg);
        assert!(pos > 1.0);
    }

    assert!(vswr(ReflectionCoefficient::new(1.5)).unwrap_err().is_domain());
    assert!(vswr(ReflectionCoefficient::new(1.0)).is_err());
}

#[test]
fn mismatch_to_seventy_five_ohm_load() {
    let rc = reflection_coefficient(Impedance::new(75.0), Impedance::new(50.0)).unwrap();
    assert!(approx_eq!(f64, rc.val(), 0.2, DEFAULT_MARGIN));
    assert!(approx_eq!(f64, vswr(rc).unwrap(), 1.5, DEFAULT_MARGIN));
    assert!((return_loss_db(rc).unwrap() - 13.979).abs() < 1e-3);
}

#[test]
fn wave_impedance_tends_to_free_space() {
    let fc = Frequency::new(6.557e9);
    let f = Frequency::new(fc.val() * 1e3);
    let z = characteristic_wave_impedance(Permeability::new(1.0), Permittivity::new(1.0), fc, f)
        .unwrap();
    assert!((z.val() - 376.730_313_668).abs() / 376.730_313_668 < 1e-5);

    // always above the bulk impedance while propagating
    let near = Frequency::new(fc.val() * 1.1);
    let z_near =
        characteristic_wave_impedance(Permeability::new(1.0), Permittivity::new(1.0), fc, near)
            .unwrap();
    assert!(z_near.val() > z.val());
}

#[test]
fn wave_impedance_below_cutoff() {
    let fc = Frequency::new(6.557e9);
    let f = Frequency::new(fc.val() / 2.0);

    assert!(
        characteristic_wave_impedance(Permeability::new(1.0), Permittivity::new(1.0), fc, f)
            .unwrap_err()
            .is_domain()
    );

    let z: Complex64 =
        characteristic_wave_impedance_complex(Permeability::new(1.0), Permittivity::new(1.0), fc, f)
            .unwrap();
    // inductive, jη / sqrt((fc/f)² - 1)
    assert_eq!(z.re, 0.0);
    assert!(approx_eq!(
        f64,
        z.im,
        376.730_313_668 / 3.0_f64.sqrt(),
        epsilon = 1e-6
    ));

    let f_5ghz = Frequency::new(5e9);
    let z5 = characteristic_wave_impedance_complex(
        Permeability::new(1.0),
        Permittivity::new(1.0),
        fc,
        f_5ghz,
    )
    .unwrap();
    assert!((z5.im - 444.0519).abs() < 1e-3);
}

#[test]
fn x_band_guide_sweep() {
    let guide = RectWaveguideBuilder::new().id("WR-90").build().unwrap();
    assert_eq!(guide.id(), "WR-90");

    let freqs = Frequency::linspace(
        Frequency::new(8.2e9),
        Frequency::new(12.4e9),
        22,
    );
    let loss = guide.attenuation_sweep(&freqs).unwrap();
    assert_eq!(loss.len(), 22);
    assert!(loss.iter().all(|&db| db > 0.0 && db < 0.2));

    let at_10ghz = guide
        .attenuation_te10(Frequency::new(10.0e9))
        .unwrap();
    assert!((at_10ghz.db_per_meter() - 0.1084).abs() < 1e-3);

    assert!(guide
        .is_propagating(Frequency::new(8.2e9), Mode::TE10)
        .unwrap());
    assert!(!guide
        .is_propagating(Frequency::new(8.2e9), Mode::new(2, 0).unwrap())
        .unwrap());
}

#[test]
fn builder_rejects_bad_geometry() {
    let (a, b) = wr90();
    let swapped = RectWaveguideBuilder::new().a(b).b(a).build();
    assert!(matches!(swapped, Err(Error::InvalidParameter(_))));

    let lossy = RectWaveguideBuilder::new().tand(-1e-3).build();
    assert!(matches!(lossy, Err(Error::InvalidParameter(_))));
}
