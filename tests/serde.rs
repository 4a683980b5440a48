#![cfg(feature = "serde")]

mod util;

use serde_json::json;
use util::hex;

const DF5_DATA: &str = "0505a060a0c89afd34028cff006376726976dead7b3fefaf";
const DF6_DATA: &str = "06170C5668C79E007000C90501D94ACD004C884F";

#[test]
fn serialize_readings() {
    let frame = ruuvitag_ble::decode(&hex(DF6_DATA)).unwrap();
    let readings: Vec<_> = frame.readings().collect();

    let value = serde_json::to_value(&readings).unwrap();

    assert_eq!(
        value[0],
        json!({ "key": "temperature", "unit": "°C", "value": 29.5 })
    );
    assert_eq!(
        value[4],
        json!({ "key": "carbon_dioxide", "unit": "ppm", "value": 201 })
    );
    assert_eq!(
        value[11],
        json!({ "key": "calibration_in_progress", "unit": null, "value": false })
    );
}

#[test]
fn serialize_absent_values() {
    let mut data = vec![0xE1, 0x80, 0x00];
    data.extend_from_slice(&[0xFF; 37]);

    let frame = ruuvitag_ble::decode(&data).unwrap();
    let reading = frame.readings().next().unwrap();

    assert_eq!(
        serde_json::to_value(reading).unwrap(),
        json!({ "key": "temperature", "unit": "°C", "value": null })
    );
}

#[test]
fn serialize_mac_and_format() {
    let frame = ruuvitag_ble::decode(&hex(DF5_DATA)).unwrap();

    assert_eq!(
        serde_json::to_value(frame.mac()).unwrap(),
        json!("DE:AD:7B:3F:EF:AF")
    );
    assert_eq!(serde_json::to_value(frame.format()).unwrap(), json!("Df5"));
}
