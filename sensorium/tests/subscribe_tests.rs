// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sensorium_rx::{SensorError, SensorHub, SensorType, SubscribeExt};
use sensorium_test_utils::{motion_alpha, motion_beta, single_fake_registry};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn callback_subscription_routes_readings_and_failures() -> anyhow::Result<()> {
    // Arrange
    let (registry, fake) = single_fake_registry(SensorType::Gyroscope);
    let hub = SensorHub::new(registry);
    let subscription = hub.gyroscope()?.subscribe()?;

    let received = Arc::new(Mutex::new(Vec::new()));
    let failed = Arc::new(AtomicBool::new(false));
    let sink = received.clone();
    let flag = failed.clone();

    let driver = tokio::spawn(subscription.subscribe_with(
        move |reading| sink.lock().unwrap().push(reading),
        move |_err| flag.store(true, Ordering::SeqCst),
    ));

    // Act
    fake.emit(motion_alpha());
    fake.emit(motion_beta());
    fake.emit_error(SensorError::delivery("native channel broke"));

    // Assert - the driver returns once the stream fails
    driver.await?;
    assert_eq!(
        *received.lock().unwrap(),
        vec![motion_alpha(), motion_beta()]
    );
    assert!(failed.load(Ordering::SeqCst));
    Ok(())
}

#[tokio::test]
async fn callback_subscription_observes_channel_teardown_as_failure() -> anyhow::Result<()> {
    // Arrange
    let (registry, fake) = single_fake_registry(SensorType::Accelerometer);
    let hub = SensorHub::new(registry);
    let subscription = hub.accelerometer()?.subscribe()?;

    let failed = Arc::new(AtomicBool::new(false));
    let flag = failed.clone();

    let driver = tokio::spawn(subscription.subscribe_with(
        |_reading| {},
        move |_err| flag.store(true, Ordering::SeqCst),
    ));

    // Act - tearing the channel down without an error ends the stream with
    // a delivery failure, the only way an active channel can terminate
    fake.emit(motion_alpha());
    fake.close_events();

    // Assert
    driver.await?;
    assert!(failed.load(Ordering::SeqCst));
    Ok(())
}
