mod util;

use ruuvitag_ble::{DecodeError, formats::dfe1::DataFormatE1};
use util::hex;

const VALID_DATA: &str =
    "E1170C5668C79E0065007004BD11CA00C90A0213E0AC000000DECDEE110000000000CBB8334C884F";
const MAX_VALUES: &str =
    "E17FFF9C40FFFE27102710271027109C40FAFADC28F0000000FFFFFE3F0000000000CBB8334C884F";
const MIN_VALUES: &str =
    "E1800100000000000000000000000000000000000000000000000000000000000000CBB8334C884F";
const INVALID_VALUES: &str =
    "E18000FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF";

#[test]
fn decode_valid_data() {
    let p = DataFormatE1::new(&hex(VALID_DATA)).unwrap();

    assert_eq!(p.temperature_celsius(), Some(29.5));
    assert_eq!(p.humidity_percentage(), Some(55.3));
    assert_eq!(p.pressure_hpa(), Some(1011.02));
    assert_eq!(p.pm1_ug_m3(), Some(10.1));
    assert_eq!(p.pm25_ug_m3(), Some(11.2));
    assert_eq!(p.pm4_ug_m3(), Some(121.3));
    assert_eq!(p.pm10_ug_m3(), Some(455.4));
    assert_eq!(p.co2_ppm(), Some(201));
    assert_eq!(p.voc_index(), Some(20));
    assert_eq!(p.nox_index(), Some(4));
    assert_eq!(p.luminosity_lux(), Some(13027.0));
    assert_eq!(p.measurement_sequence_number(), Some(14601710));
    assert!(p.calibration_in_progress());
    assert_eq!(p.mac().to_string(), "CB:B8:33:4C:88:4F");
}

#[test]
fn decode_max_values() {
    let p = DataFormatE1::new(&hex(MAX_VALUES)).unwrap();

    assert_eq!(p.temperature_celsius(), Some(163.835));
    assert_eq!(p.humidity_percentage(), Some(100.0));
    assert_eq!(p.pressure_hpa(), Some(1155.34));
    assert_eq!(p.pm1_ug_m3(), Some(1000.0));
    assert_eq!(p.pm25_ug_m3(), Some(1000.0));
    assert_eq!(p.pm4_ug_m3(), Some(1000.0));
    assert_eq!(p.pm10_ug_m3(), Some(1000.0));
    assert_eq!(p.co2_ppm(), Some(40000));
    assert_eq!(p.voc_index(), Some(500));
    assert_eq!(p.nox_index(), Some(500));
    assert_eq!(p.luminosity_lux(), Some(144284.0));
    assert_eq!(p.measurement_sequence_number(), Some(16777214));
    assert_eq!(p.mac().to_string(), "CB:B8:33:4C:88:4F");
}

#[test]
fn decode_min_values() {
    let p = DataFormatE1::new(&hex(MIN_VALUES)).unwrap();

    assert_eq!(p.temperature_celsius(), Some(-163.835));
    assert_eq!(p.humidity_percentage(), Some(0.0));
    assert_eq!(p.pressure_hpa(), Some(500.0));
    assert_eq!(p.pm1_ug_m3(), Some(0.0));
    assert_eq!(p.pm25_ug_m3(), Some(0.0));
    assert_eq!(p.pm4_ug_m3(), Some(0.0));
    assert_eq!(p.pm10_ug_m3(), Some(0.0));
    assert_eq!(p.co2_ppm(), Some(0));
    assert_eq!(p.voc_index(), Some(0));
    assert_eq!(p.nox_index(), Some(0));
    assert_eq!(p.luminosity_lux(), Some(0.0));
    assert_eq!(p.measurement_sequence_number(), Some(0));
    assert!(!p.calibration_in_progress());
    assert_eq!(p.mac().to_string(), "CB:B8:33:4C:88:4F");
}

#[test]
fn decode_invalid_values() {
    let p = DataFormatE1::new(&hex(INVALID_VALUES)).unwrap();

    assert_eq!(p.temperature_celsius(), None);
    assert_eq!(p.humidity_percentage(), None);
    assert_eq!(p.pressure_hpa(), None);
    assert_eq!(p.pm1_ug_m3(), None);
    assert_eq!(p.pm25_ug_m3(), None);
    assert_eq!(p.pm4_ug_m3(), None);
    assert_eq!(p.pm10_ug_m3(), None);
    assert_eq!(p.co2_ppm(), None);
    assert_eq!(p.voc_index(), None);
    assert_eq!(p.nox_index(), None);
    assert_eq!(p.luminosity_lux(), None);
    assert_eq!(p.measurement_sequence_number(), None);
    assert_eq!(p.mac().to_string(), "FF:FF:FF:FF:FF:FF");
}

#[test]
fn particulate_channels_are_independent() {
    let mut data = hex(VALID_DATA);
    data[9..11].fill(0xFF);

    let p = DataFormatE1::new(&data).unwrap();
    assert_eq!(p.pm25_ug_m3(), None);
    assert_eq!(p.pm1_ug_m3(), Some(10.1));
    assert_eq!(p.pm4_ug_m3(), Some(121.3));
    assert_eq!(p.pm10_ug_m3(), Some(455.4));
}

#[test]
fn bad_data() {
    assert_eq!(
        DataFormatE1::new(&hex("E114")),
        Err(DecodeError::PayloadTooShort {
            required: 40,
            actual: 2
        })
    );

    let mut data = vec![0x06];
    data.extend_from_slice(&[0; 39]);
    assert_eq!(
        DataFormatE1::new(&data),
        Err(DecodeError::UnexpectedFormatTag {
            expected: 0xE1,
            found: 0x06
        })
    );
}
