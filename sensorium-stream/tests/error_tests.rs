// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensorium_core::{SensorError, SensorType};
use sensorium_stream::SensorHub;
use sensorium_test_utils::{
    expect_end, expect_error, expect_value, motion_alpha, single_fake_registry,
};

#[tokio::test]
async fn channel_failure_reaches_every_subscriber_and_goes_idle() -> anyhow::Result<()> {
    // Arrange
    let (registry, fake) = single_fake_registry(SensorType::Gyroscope);
    let hub = SensorHub::new(registry);
    let stream = hub.stream(SensorType::Gyroscope)?;
    let mut first = stream.subscribe()?;
    let mut second = stream.subscribe()?;

    fake.emit(motion_alpha());
    assert_eq!(expect_value(&mut first).await, motion_alpha().into());
    assert_eq!(expect_value(&mut second).await, motion_alpha().into());

    // Act
    fake.emit_error(SensorError::delivery("native channel broke"));

    // Assert - the error is the last item each subscriber observes
    assert!(matches!(
        expect_error(&mut first).await,
        SensorError::Delivery { .. }
    ));
    expect_end(&mut first).await;
    assert!(matches!(
        expect_error(&mut second).await,
        SensorError::Delivery { .. }
    ));
    expect_end(&mut second).await;

    // Lifecycle: equivalent to last-subscriber-detached
    assert_eq!(fake.stop_count(), 1);
    assert!(!stream.is_active());
    assert_eq!(stream.subscriber_count(), 0);

    // Dropping the defunct subscriptions never issues a second stop
    drop(first);
    drop(second);
    assert_eq!(fake.stop_count(), 1);
    Ok(())
}

#[tokio::test]
async fn subscribing_after_a_failure_reactivates_from_idle() -> anyhow::Result<()> {
    // Arrange
    let (registry, fake) = single_fake_registry(SensorType::Accelerometer);
    let hub = SensorHub::new(registry);
    let stream = hub.stream(SensorType::Accelerometer)?;
    let mut broken = stream.subscribe()?;

    fake.emit_error(SensorError::delivery("native channel broke"));
    expect_error(&mut broken).await;
    expect_end(&mut broken).await;

    // Act - no automatic retry; re-subscribing is the application's call
    let mut recovered = stream.subscribe()?;

    // Assert
    assert_eq!(fake.start_count(), 2);
    assert!(stream.is_active());

    fake.emit(motion_alpha());
    assert_eq!(expect_value(&mut recovered).await, motion_alpha().into());
    Ok(())
}

#[tokio::test]
async fn closed_event_channel_is_a_delivery_failure() -> anyhow::Result<()> {
    // Arrange
    let (registry, fake) = single_fake_registry(SensorType::Barometer);
    let hub = SensorHub::new(registry);
    let stream = hub.stream(SensorType::Barometer)?;
    let mut subscription = stream.subscribe()?;

    // Act
    fake.close_events();

    // Assert
    let err = expect_error(&mut subscription).await;
    assert!(matches!(err, SensorError::Delivery { .. }));
    expect_end(&mut subscription).await;
    assert_eq!(fake.stop_count(), 1);
    assert!(!stream.is_active());
    Ok(())
}
