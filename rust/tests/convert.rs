use crate::convert::{
    from_date_in_zone, from_epoch_millis, from_named_pattern_in_zone, from_pattern_in_zone,
    from_string, from_string_fields_in_zone, from_timestamp_in_zone, from_zoned_in_zone,
    get_zone_by_name, ndt, Converter, StringConverter,
};
use crate::json::JSON;
use crate::Error;
use chrono::prelude::*;
use chrono_tz::Tz;

#[test]
fn agreement_across_input_representations() {
    // the same civil time in Paris, reached through different representations
    let zone = get_zone_by_name("Europe/Paris").unwrap();
    let expected = "2021-12-25T00:00:00+01:00";

    let via_pattern = from_pattern_in_zone("%d/%m/%Y", zone).unwrap();
    assert_eq!(via_pattern.convert("25/12/2021").unwrap().to_rfc3339(), expected);

    let via_date = from_date_in_zone(zone);
    let date = NaiveDate::from_ymd_opt(2021, 12, 25).unwrap();
    assert_eq!(via_date.convert(date).unwrap().to_rfc3339(), expected);

    let via_timestamp = from_timestamp_in_zone(zone);
    assert_eq!(via_timestamp.convert(ndt(2021, 12, 25)).unwrap().to_rfc3339(), expected);

    let via_fields = from_string_fields_in_zone(zone);
    assert_eq!(
        via_fields.convert(&["2021", "12", "25"][..]).unwrap().to_rfc3339(),
        expected
    );
}

#[test]
fn instant_inputs_share_one_instant() {
    let instant = from_epoch_millis().convert(1_640_390_400_000).unwrap();
    let rezoned = from_zoned_in_zone(Tz::Asia__Tokyo).convert(instant).unwrap();
    assert_eq!(instant.with_timezone(&Utc), rezoned.with_timezone(&Utc));
}

#[test]
fn converter_survives_json_round_trip_and_still_converts() {
    let converter = from_named_pattern_in_zone("timestamp", Tz::Europe__London).unwrap();
    let js = converter.to_json().unwrap();
    let converter2 = StringConverter::from_json(&js).unwrap();
    assert_eq!(converter, converter2);
    assert_eq!(
        converter2.convert("2021-06-01 09:30:00").unwrap().to_rfc3339(),
        "2021-06-01T09:30:00+01:00"
    );
}

#[test]
fn dst_gap_surfaces_from_any_local_input() {
    // 2024-03-31 01:30 does not exist in London
    let zone = Tz::Europe__London;
    let local = ndt(2024, 3, 31).with_hour(1).unwrap().with_minute(30).unwrap();

    let via_timestamp = from_timestamp_in_zone(zone);
    assert!(matches!(
        via_timestamp.convert(local),
        Err(Error::SkippedTime { .. })
    ));

    let via_pattern = from_pattern_in_zone("%Y-%m-%d %H:%M", zone).unwrap();
    assert!(matches!(
        via_pattern.convert("2024-03-31 01:30"),
        Err(Error::SkippedTime { .. })
    ));
}

#[test]
fn converters_are_reusable_and_cloneable() {
    let f = from_string();
    let g = f.clone();
    for input in ["2020-01-01", "2021-01-01", "2022-06-30T23:59:59"] {
        assert_eq!(f.convert(input).unwrap(), g.convert(input).unwrap());
    }
}

#[test]
fn into_fn_behaves_like_the_converter() {
    let converter = from_epoch_millis();
    let f = converter.clone().into_fn();
    assert_eq!(f(86_400_000).unwrap(), converter.convert(86_400_000).unwrap());
}
