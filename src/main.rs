use tello_flight::{setup, simple_flight_path};

const FLIGHT_DIST_CM: u32 = 15;

#[tokio::main]
async fn main() {
    let drone = setup().await;

    if drone.is_none() {
        println!("[Flight] setup failed, exiting");
        return;
    }

    simple_flight_path(drone.as_ref(), FLIGHT_DIST_CM).await;

    if let Some(drone) = drone {
        if let Err(err) = drone.end().await {
            println!("[Flight] cleanup failed: {err}");
        }
    }
}
