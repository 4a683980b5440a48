mod util;

use ruuvitag_ble::{DecodeError, formats::df5::DataFormat5};
use util::hex;

const OUTDOOR_SENSOR_DATA: &str = "0505a060a0c89afd34028cff006376726976dead7b3fefaf";
const INDOOR_SENSOR_DATA: &str = "050ea44d7ec818fcbcfdf0ffb42bf600103cd9370ff7aa48";
const OUTDOOR_SENSOR_DATA_INVALID_ACCEL: &str =
    "0505a060a0c89a8000028cff006376726976dead7b3fefaf";

#[test]
fn decode_outdoor() {
    let p = DataFormat5::new(&hex(OUTDOOR_SENSOR_DATA)).unwrap();

    assert_eq!(p.temperature_celsius(), Some(7.2));
    assert_eq!(p.humidity_percentage(), Some(61.84));
    assert_eq!(p.pressure_hpa(), Some(1013.54));
    assert_eq!(p.battery_voltage_mv(), Some(2395));
    assert_eq!(p.tx_power_dbm(), Some(4));
    assert_eq!(p.movement_counter(), 114);
    assert_eq!(p.measurement_sequence_number(), 26998);
    assert_eq!(p.acceleration_vector_mg(), Some((-716, 652, -256)));
    assert_eq!(p.acceleration_x_mss(), Some(-7.02));
    assert_eq!(p.acceleration_y_mss(), Some(6.39));
    assert_eq!(p.acceleration_z_mss(), Some(-2.51));
    assert_eq!(p.acceleration_total_mss(), Some(9.82));
    assert_eq!(p.mac().to_string(), "DE:AD:7B:3F:EF:AF");
}

#[test]
fn decode_indoor() {
    let p = DataFormat5::new(&hex(INDOOR_SENSOR_DATA)).unwrap();

    assert_eq!(p.temperature_celsius(), Some(18.74));
    assert_eq!(p.pressure_hpa(), Some(1012.24));
    assert_eq!(p.battery_voltage_mv(), Some(1951));
    assert_eq!(p.movement_counter(), 0);
    assert_eq!(p.measurement_sequence_number(), 4156);
    assert_eq!(p.acceleration_x_mss(), Some(-8.19));
    assert_eq!(p.mac().to_string(), "D9:37:0F:F7:AA:48");
}

#[test]
fn invalid_axis_invalidates_acceleration() {
    let p = DataFormat5::new(&hex(OUTDOOR_SENSOR_DATA_INVALID_ACCEL)).unwrap();

    assert_eq!(p.acceleration_vector_mg(), None);
    assert_eq!(p.acceleration_total_mss(), None);
    assert_eq!(p.temperature_celsius(), Some(7.2));

    for offset in [7, 9, 11] {
        let mut data = hex(OUTDOOR_SENSOR_DATA);
        data[offset..offset + 2].copy_from_slice(&[0x80, 0x00]);

        let p = DataFormat5::new(&data).unwrap();
        assert_eq!(p.acceleration_vector_mg(), None, "axis at {offset}");
        assert_eq!(p.acceleration_x_mss(), None);
        assert_eq!(p.acceleration_y_mss(), None);
        assert_eq!(p.acceleration_z_mss(), None);
        assert_eq!(p.acceleration_total_mss(), None);

        assert_eq!(p.temperature_celsius(), Some(7.2));
        assert_eq!(p.movement_counter(), 114);
    }
}

#[test]
fn invalid_markers() {
    let mut data = hex(OUTDOOR_SENSOR_DATA);
    data[1..7].fill(0xFF);
    data[1] = 0x80;
    data[2] = 0x00;
    data[13..15].fill(0xFF);

    let p = DataFormat5::new(&data).unwrap();
    assert_eq!(p.temperature_celsius(), None);
    assert_eq!(p.humidity_percentage(), None);
    assert_eq!(p.pressure_hpa(), None);
    assert_eq!(p.battery_voltage_mv(), None);
    assert_eq!(p.tx_power_dbm(), None);

    assert_eq!(p.movement_counter(), 114);
    assert_eq!(p.acceleration_total_mss(), Some(9.82));
}

#[test]
fn power_info_fields_are_independent() {
    let mut data = hex(OUTDOOR_SENSOR_DATA);

    // Battery at its invalid marker, transmit power at +4 dBm.
    data[13..15].copy_from_slice(&(0xFFE0u16 | 22).to_be_bytes());
    let p = DataFormat5::new(&data).unwrap();
    assert_eq!(p.battery_voltage_mv(), None);
    assert_eq!(p.tx_power_dbm(), Some(4));

    // Lowest battery voltage, transmit power at its invalid marker.
    data[13..15].copy_from_slice(&0x001Fu16.to_be_bytes());
    let p = DataFormat5::new(&data).unwrap();
    assert_eq!(p.battery_voltage_mv(), Some(1600));
    assert_eq!(p.tx_power_dbm(), None);
}

#[test]
fn bad_data() {
    let data = hex(OUTDOOR_SENSOR_DATA);

    assert_eq!(
        DataFormat5::new(&data[..23]),
        Err(DecodeError::PayloadTooShort {
            required: 24,
            actual: 23
        })
    );
}
