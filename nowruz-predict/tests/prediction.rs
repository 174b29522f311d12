use nowruz_calendar::{month_name, PersianDate};
use nowruz_ephemeris::{EquinoxEstimator, Method, SolarEphemeris};
use nowruz_predict::{DayRule, NowruzResolver};

#[test]
fn predict_1403_with_reference_data() {
    let resolver = NowruzResolver::with_default_source();
    assert_eq!(resolver.method(), Method::Ephemeris);

    let p = resolver.predict(1403);
    assert_eq!(p.method, Method::Ephemeris);
    assert_eq!(p.equinox_utc.date.year, 2024);
    assert_eq!(p.equinox_utc.date.month, 3);
    assert!(
        p.nowruz.to_string() == "2024-03-20" || p.nowruz.to_string() == "2024-03-21",
        "Nowruz 1403 resolved to {}",
        p.nowruz
    );
}

#[test]
fn predict_1403_without_reference_data() {
    let resolver = NowruzResolver::new(EquinoxEstimator::new(None));
    assert_eq!(resolver.method(), Method::Polynomial);

    let p = resolver.predict(1403);
    assert_eq!(p.method, Method::Polynomial);
    assert_eq!(p.nowruz.to_string(), "2024-03-20");
    assert_eq!(p.rule, DayRule::SameDay);
}

#[test]
fn both_methods_agree_on_the_gregorian_target_year() {
    let precise = NowruzResolver::with_default_source().predict(1403);
    let fallback = NowruzResolver::new(EquinoxEstimator::new(None)).predict(1403);
    assert_eq!(precise.equinox_utc.date.year, 2024);
    assert_eq!(fallback.equinox_utc.date.year, 2024);
}

#[test]
fn nowruz_stays_in_late_march_across_the_supported_range() {
    let resolver = NowruzResolver::with_default_source();
    for year in (1300..=1500).step_by(25) {
        let p = resolver.predict(year);
        assert_eq!(p.equinox_utc.date.month, 3, "year {year}");
        assert!(
            (19..=22).contains(&p.nowruz.day),
            "year {year}: Nowruz on {}",
            p.nowruz
        );
        assert_eq!(p.nowruz.month, 3, "year {year}");
    }
}

#[test]
fn prediction_renders_as_first_of_farvardin() {
    let resolver = NowruzResolver::with_default_source();
    let p = resolver.predict(1404);
    let persian = PersianDate::from_gregorian(p.nowruz);
    assert_eq!(persian.year, 1404);
    assert_eq!(persian.month, 1);
    assert_eq!(persian.day, 1);
    assert_eq!(month_name(persian.month), "فروردین");
}

#[test]
fn reference_data_is_shared_and_read_only() {
    // Two estimators over the cached handle see the same data.
    let a = SolarEphemeris::get().unwrap();
    let b = SolarEphemeris::get().unwrap();
    assert!(std::ptr::eq(a, b));
}
