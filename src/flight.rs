use tokio::time::{sleep, Duration};

use crate::errors::Result;
use crate::options::TelloOptions;
use crate::tello::{Connected, Tello};

const SETTLE_AFTER_TAKE_OFF: Duration = Duration::from_secs(2);
const SETTLE_AFTER_MOVE: Duration = Duration::from_secs(1);

/// Creates and connects to a Tello drone using the default options.
///
/// Returns the connected drone, or `None` if the connection failed.
/// Failures are logged, never propagated - callers must check for absence
/// before use.
pub async fn setup() -> Option<Tello<Connected>> {
    setup_with(&TelloOptions::default()).await
}

/// Creates and connects to a Tello drone.
pub async fn setup_with(options: &TelloOptions) -> Option<Tello<Connected>> {
    let drone = match Tello::new().connect_with(options).await {
        Ok(drone) => drone,
        Err(err) => {
            println!("[Flight] failed to connect to Tello: {err}");
            return None;
        }
    };

    // best effort only
    match drone.battery().await {
        Ok(battery) => println!("[Flight] battery at {battery}%"),
        Err(err) => println!("[Flight] battery query failed: {err}"),
    }

    Some(drone)
}

/// Flies a short, simple flight path.
///
/// The routine is defensive: it returns immediately if `drone` is `None`.
/// Movements use centimetres; distances should be small (e.g. 10-50) for
/// safety during testing.
///
/// Whatever goes wrong mid-flight, a landing is attempted before
/// returning - the drone is never knowingly left in the air.
pub async fn simple_flight_path(drone: Option<&Tello<Connected>>, dist: u32) {
    let Some(drone) = drone else {
        println!("[Flight] no drone connected, skipping flight path");
        return;
    };

    if let Err(err) = fly(drone, dist).await {
        println!("[Flight] error in simple_flight_path: {err}");

        // safety landing, its own failure is swallowed
        if let Err(err) = drone.land().await {
            println!("[Flight] safety landing failed: {err}");
        }
    }
}

async fn fly(drone: &Tello<Connected>, dist: u32) -> Result<()> {
    drone.take_off().await?;
    sleep(SETTLE_AFTER_TAKE_OFF).await;

    // x axis
    drone.move_left(dist).await?;
    sleep(SETTLE_AFTER_MOVE).await;
    drone.move_right(dist).await?;
    sleep(SETTLE_AFTER_MOVE).await;

    // y axis
    drone.move_forward(dist).await?;
    sleep(SETTLE_AFTER_MOVE).await;
    drone.move_back(dist).await?;
    sleep(SETTLE_AFTER_MOVE).await;

    // z axis, smaller steps for safety
    drone.move_up(dist / 2).await?;
    sleep(SETTLE_AFTER_MOVE).await;
    drone.move_down(dist / 2).await?;
    sleep(SETTLE_AFTER_MOVE).await;

    drone.land().await?;

    Ok(())
}
