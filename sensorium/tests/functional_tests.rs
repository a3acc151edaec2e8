// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensorium_rx::{
    MotionReading, PressureReading, Reading, SensorError, SensorHub, SensorType,
};
use sensorium_test_utils::{
    expect_value, full_fake_registry, motion_alpha, sea_level_pressure, single_fake_registry,
};

#[tokio::test]
async fn gyroscope_readings_flow_end_to_end() -> anyhow::Result<()> {
    // Arrange
    let (registry, fake) = single_fake_registry(SensorType::Gyroscope);
    let hub = SensorHub::new(registry);
    let gyroscope = hub.gyroscope()?;
    let mut subscription = gyroscope.subscribe()?;

    // Act
    fake.emit(Reading::motion(1.0, 2.0, 3.0, "t1"));

    // Assert - the exact reading, then one stop on unsubscribe
    let reading = expect_value(&mut subscription).await;
    assert_eq!(
        reading,
        MotionReading {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            timestamp: "t1".into()
        }
    );

    subscription.unsubscribe();
    assert_eq!(fake.stop_count(), 1);
    Ok(())
}

#[tokio::test]
async fn barometer_delivers_the_pressure_shape_untouched() -> anyhow::Result<()> {
    // Arrange
    let (registry, fake) = single_fake_registry(SensorType::Barometer);
    let hub = SensorHub::new(registry);
    let barometer = hub.barometer()?;
    let mut subscription = barometer.subscribe()?;

    // Act
    fake.emit(sea_level_pressure());

    // Assert - a pressure scalar and nothing else
    let reading: PressureReading = expect_value(&mut subscription).await;
    assert_eq!(reading, sea_level_pressure());
    assert_eq!(
        serde_json::to_value(&reading)?,
        serde_json::json!({ "pressure": 1013.25 })
    );
    Ok(())
}

#[tokio::test]
async fn case_variants_resolve_to_the_same_stream() -> anyhow::Result<()> {
    // Arrange
    let (registry, _fakes) = full_fake_registry();
    let hub = SensorHub::new(registry);

    // Act
    let parsed: SensorType = "GYROSCOPE".parse()?;
    let via_parsed = hub.stream(parsed)?;
    let via_enum = hub.stream(SensorType::Gyroscope)?;

    // Assert - both handles observe the same activation state
    let subscription = via_parsed.subscribe()?;
    assert_eq!(via_enum.subscriber_count(), 1);
    drop(subscription);
    assert_eq!(via_enum.subscriber_count(), 0);
    Ok(())
}

#[tokio::test]
async fn the_hub_bundles_all_five_streams() -> anyhow::Result<()> {
    // Arrange
    let (registry, _fakes) = full_fake_registry();
    let hub = SensorHub::new(registry);

    // Act + Assert
    assert_eq!(SensorType::ALL.len(), 5);
    assert_eq!(hub.accelerometer()?.sensor_type(), SensorType::Accelerometer);
    assert_eq!(hub.gyroscope()?.sensor_type(), SensorType::Gyroscope);
    assert_eq!(hub.magnetometer()?.sensor_type(), SensorType::Magnetometer);
    assert_eq!(hub.barometer()?.sensor_type(), SensorType::Barometer);
    assert_eq!(
        hub.absolute_rotation_vector()?.sensor_type(),
        SensorType::AbsoluteRotationVector
    );
    Ok(())
}

#[tokio::test]
async fn motion_readings_convert_only_on_motion_channels() -> anyhow::Result<()> {
    // Arrange - a barometer whose native layer misbehaves and emits motion
    let (registry, fake) = single_fake_registry(SensorType::Barometer);
    let hub = SensorHub::new(registry);
    let mut subscription = hub.barometer()?.subscribe()?;

    // Act
    fake.emit(motion_alpha());
    fake.emit(sea_level_pressure());

    // Assert - the wrong shape surfaces in-band, the stream keeps flowing
    let mismatch = sensorium_test_utils::expect_error(&mut subscription).await;
    assert!(matches!(mismatch, SensorError::Delivery { .. }));
    assert_eq!(expect_value(&mut subscription).await, sea_level_pressure());
    Ok(())
}
